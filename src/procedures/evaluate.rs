/*!
The value of a formula on a valuation.

Evaluation is structural, and defined on formulas with any connective.
The constants `T` and `F` have their values regardless of the valuation, and any other atom takes the value given by the valuation.

```rust
# use std::collections::HashMap;
# use horn_sat::formula::Formula;
# use horn_sat::types::err::EvaluationError;
let formula = Formula::parse("(p -> q) | F").unwrap();

let valuation = HashMap::from([("p", true), ("q", false)]);
assert_eq!(formula.evaluate(&valuation), Ok(false));

let valuation = HashMap::from([("p", true)]);
assert_eq!(
    formula.evaluate(&valuation),
    Err(EvaluationError::UnboundVariable("q".to_string()))
);
```

Both children of a node are always evaluated, and so an atom without a value is noted even if the value of the node is determined by the other child.
Evaluation does not read or change the solving state of a formula.
*/

use crate::{
    db::NodeKey,
    formula::Formula,
    misc::log::targets::{self},
    structures::{node::Expr, sign, valuation::Valuation},
    types::err::{self},
};

impl Formula {
    /// The value of the formula on the valuation.
    pub fn evaluate<V: Valuation + ?Sized>(&self, valuation: &V) -> Result<bool, err::EvaluationError> {
        let value = self.evaluate_node(self.root, valuation)?;
        log::trace!(target: targets::EVALUATION, "{self} evaluated to {value}");
        Ok(value)
    }

    /// The value of the node with the given key on the valuation.
    pub fn evaluate_node<V: Valuation + ?Sized>(
        &self,
        key: NodeKey,
        valuation: &V,
    ) -> Result<bool, err::EvaluationError> {
        match self.registry[key].expr() {
            Expr::Var(atom) => match sign::constant(atom) {
                Some(value) => Ok(value),
                None => valuation
                    .value_of(atom)
                    .ok_or_else(|| err::EvaluationError::UnboundVariable(atom.to_string())),
            },

            &Expr::Neg(atom) => Ok(!self.evaluate_node(atom, valuation)?),

            &Expr::And(left, right) => {
                let left = self.evaluate_node(left, valuation)?;
                let right = self.evaluate_node(right, valuation)?;
                Ok(left && right)
            }

            &Expr::Or(left, right) => {
                let left = self.evaluate_node(left, valuation)?;
                let right = self.evaluate_node(right, valuation)?;
                Ok(left || right)
            }

            &Expr::Imply(left, right) => {
                let left = self.evaluate_node(left, valuation)?;
                let right = self.evaluate_node(right, valuation)?;
                Ok(!left || right)
            }
        }
    }
}
