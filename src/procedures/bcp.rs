/*!
Boolean constraint propagation, through a formula in Horn form.

# Overview

Propagation derives values of nodes from values already given to other nodes.
Values are given with [assign](Formula::assign), and two directions of propagation are supported:

- [Top-down](Formula::propagate_down), from a node to its children, and recursively to every node below.
  + A conjunction with value true gives each child the value true.
  + A negation with some value gives its child the opposite value.
- [Bottom-up](Formula::infer_up), from the children of a node to the node.
  + A conjunction with two children valued true has value true.
  + A conjunction with some child valued false has value false.
  + A conjunction with value false and one child valued true gives the other child the value false.
  + A negation with a child with some value has the opposite value.

Atoms are leaves, and propagation is not defined on disjunctions or implications.
An attempt to propagate through either is an [UnsupportedOperation](err::BCPError::UnsupportedOperation) error.

A [sweep](Formula::sweep_up) applies bottom-up propagation once to every node of a formula, in the order the nodes were stored.
As children are always stored before their parents, each node is visited after its children.

# Contradictions

If a node with some value is assigned the opposite value, the node notes a contradiction and keeps its value.
Propagation does not stop on a contradiction, and whether some contradiction was found is checked after propagation with [found_contradiction](Formula::found_contradiction).

```rust
# use horn_sat::formula::Formula;
let mut formula = Formula::parse("p & ~p").unwrap();
let root = formula.root();

formula.assign(root, true);
assert!(formula.propagate_down(root).is_ok());
assert!(formula.found_contradiction());
```
*/

use crate::{
    db::NodeKey,
    formula::Formula,
    misc::log::targets::{self},
    structures::{node::Expr, sign},
    types::err::{self},
};

impl Formula {
    /// Assigns `value` to the node with the given key.
    ///
    /// If the node has the opposite value, the value is kept and the node notes a contradiction.
    pub fn assign(&mut self, key: NodeKey, value: bool) {
        let node = &mut self.registry[key];
        match node.value {
            Some(current) if current != value => {
                log::trace!(target: targets::PROPAGATION, "Contradiction: {node} valued {current} and assigned {value}");
                node.contradiction = true;
            }

            _ => node.value = Some(value),
        }
    }

    /// Propagates values from the node with the given key to every node below.
    ///
    /// Each child is visited once for each parent, and so a shared node may be visited (and have values propagated) many times.
    pub fn propagate_down(&mut self, key: NodeKey) -> Result<(), err::BCPError> {
        let value = self.registry[key].value;

        match self.registry[key].expr() {
            Expr::Var(_) => Ok(()),

            &Expr::Neg(atom) => {
                if let Some(value) = value {
                    self.assign(atom, !value);
                }
                self.propagate_down(atom)
            }

            &Expr::And(left, right) => {
                if value == Some(true) {
                    self.assign(left, true);
                    self.assign(right, true);
                }
                self.propagate_down(left)?;
                self.propagate_down(right)
            }

            Expr::Or(..) | Expr::Imply(..) => Err(err::BCPError::UnsupportedOperation(key)),
        }
    }

    /// Infers the value of the node with the given key from the values of its children, or the value of one child from the value of the node and the other child.
    pub fn infer_up(&mut self, key: NodeKey) -> Result<(), err::BCPError> {
        let value = self.registry[key].value;

        match self.registry[key].expr() {
            Expr::Var(_) => Ok(()),

            &Expr::Neg(atom) => {
                if let Some(atom_value) = self.registry[atom].value {
                    self.assign(key, !atom_value);
                }
                Ok(())
            }

            &Expr::And(left, right) => {
                let left_value = self.registry[left].value;
                let right_value = self.registry[right].value;

                if left_value == Some(true) && right_value == Some(true) {
                    self.assign(key, true);
                } else if left_value == Some(false) || right_value == Some(false) {
                    self.assign(key, false);
                } else if value == Some(false) && left_value == Some(true) {
                    self.assign(right, false);
                } else if value == Some(false) && right_value == Some(true) {
                    self.assign(left, false);
                }
                Ok(())
            }

            Expr::Or(..) | Expr::Imply(..) => Err(err::BCPError::UnsupportedOperation(key)),
        }
    }

    /// Applies [infer_up](Formula::infer_up) to each node of the formula, once, in the order the nodes were stored.
    pub fn sweep_up(&mut self) -> Result<(), err::BCPError> {
        for index in 0..self.registry.len() {
            if let Some(key) = self.registry.key_at(index) {
                self.infer_up(key)?;
            }
        }
        Ok(())
    }

    /// If every node has some value, sweeps the formula once more.
    ///
    /// A node may be given a value by a parent after the node was visited during a sweep, and so the values of a node and its children may disagree without a noted contradiction.
    /// On a fully assigned formula a sweep visits each node after the node has a value, and so any such disagreement is noted.
    pub fn confirm_assignment(&mut self) -> Result<(), err::BCPError> {
        match self.fully_assigned() && !self.found_contradiction() {
            true => self.sweep_up(),
            false => Ok(()),
        }
    }

    /// Assigns each constant its value.
    pub fn assign_constants(&mut self) {
        for index in 0..self.registry.len() {
            let Some(key) = self.registry.key_at(index) else {
                continue;
            };
            if let Some(value) = self.registry[key].sign().and_then(sign::constant) {
                self.assign(key, value);
            }
        }
    }
}

#[cfg(test)]
mod bcp_tests {
    use super::*;

    #[test]
    fn assign_notes_contradiction() {
        let mut formula = Formula::parse("p").unwrap();
        let p = formula.root();

        formula.assign(p, true);
        formula.assign(p, true);
        assert!(!formula.found_contradiction());

        formula.assign(p, false);
        assert!(formula.found_contradiction());
        assert_eq!(formula.value_of(p), Some(true));
    }

    #[test]
    fn down_through_conjunction_and_negation() {
        let mut formula = Formula::parse("~(~p & q) & r").unwrap();
        let root = formula.root();
        formula.assign(root, true);
        assert!(formula.propagate_down(root).is_ok());

        assert_eq!(formula.value_of_sign("r"), Some(Some(true)));
        let inner = formula.key_of("(q & ~p)").unwrap();
        assert_eq!(formula.value_of(inner), Some(false));
        // A false conjunction does not value its children.
        assert_eq!(formula.value_of_sign("q"), Some(None));
        assert_eq!(formula.value_of_sign("p"), Some(None));
    }

    #[test]
    fn up_through_conjunction() {
        let mut formula = Formula::parse("p & q").unwrap();
        let root = formula.root();
        let p = formula.key_of("p").unwrap();
        let q = formula.key_of("q").unwrap();

        formula.assign(root, false);
        formula.assign(p, true);
        assert!(formula.infer_up(root).is_ok());
        assert_eq!(formula.value_of(q), Some(false));

        formula.reset();
        formula.assign(q, false);
        assert!(formula.infer_up(root).is_ok());
        assert_eq!(formula.value_of(root), Some(false));

        formula.reset();
        formula.assign(p, true);
        formula.assign(q, true);
        assert!(formula.sweep_up().is_ok());
        assert_eq!(formula.value_of(root), Some(true));
    }

    #[test]
    fn up_through_negation() {
        let mut formula = Formula::parse("~~p").unwrap();
        let p = formula.key_of("p").unwrap();
        formula.assign(p, false);
        assert!(formula.sweep_up().is_ok());
        assert_eq!(formula.value_of(formula.root()), Some(false));
        assert!(formula.fully_assigned());
    }

    #[test]
    fn confirmation_notes_disagreement() {
        let mut formula = Formula::parse("p & ~q").unwrap();
        let root = formula.root();
        let q = formula.key_of("q").unwrap();
        let not_q = formula.key_of("~q").unwrap();

        formula.assign(q, true);
        assert!(formula.confirm_assignment().is_ok());
        assert!(!formula.found_contradiction());

        for key in [root, not_q, formula.key_of("p").unwrap()] {
            formula.assign(key, true);
        }
        assert!(formula.confirm_assignment().is_ok());
        assert!(formula.found_contradiction());
    }

    #[test]
    fn unsupported_operations() {
        let mut formula = Formula::parse("p | q").unwrap();
        let root = formula.root();
        assert_eq!(
            formula.propagate_down(root),
            Err(err::BCPError::UnsupportedOperation(root))
        );
        assert_eq!(
            formula.infer_up(root),
            Err(err::BCPError::UnsupportedOperation(root))
        );

        let mut formula = Formula::parse("~(p -> q)").unwrap();
        let root = formula.root();
        let implication = formula.key_of("(p -> q)").unwrap();
        assert_eq!(
            formula.propagate_down(root),
            Err(err::BCPError::UnsupportedOperation(implication))
        );
    }

    #[test]
    fn constants() {
        let mut formula = Formula::parse("T & ~F").unwrap();
        formula.assign_constants();
        assert_eq!(formula.value_of_sign("T"), Some(Some(true)));
        assert_eq!(formula.value_of_sign("F"), Some(Some(false)));
    }
}
