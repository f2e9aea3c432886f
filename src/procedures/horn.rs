/*!
Rewrites a formula to an equivalent formula in Horn form --- i.e. a formula whose only connectives are negation and conjunction.

The rewrite is by structural recursion, to a fresh registry:

| Node        | Rewrite |
|-------------|---------|
| `a`         | `a` |
| `~a`        | `~a'` |
| `a & b`     | `a' & b'` |
| `a \| b`    | `~(~a' & ~b')`, or `~(a' & b')`, see [HornDisjunction] |
| `a -> b`    | `~(a' & ~b')` |

Where `a'` is the rewrite of `a`.

No simplification takes place, and so a rewrite may contain double negations.
As the rewritten nodes are stored in a registry, a subformula which occurs twice in a formula is rewritten once, and the rewrite is shared.

```rust
# use horn_sat::config::HornDisjunction;
# use horn_sat::formula::Formula;
let formula = Formula::parse("p -> (q | r)").unwrap();

let horn = formula.to_horn(HornDisjunction::DeMorgan);
assert!(horn.is_horn());
assert_eq!(horn.to_string(), "~(p & ~~(~q & ~r))");

let literal = formula.to_horn(HornDisjunction::Literal);
assert_eq!(literal.to_string(), "~(p & ~~(q & r))");
```
*/

use slotmap::SecondaryMap;

use crate::{
    config::HornDisjunction,
    db::{NodeKey, Registry},
    formula::Formula,
    misc::log::targets::{self},
    structures::node::Expr,
};

/// The state of a rewrite: the fresh registry, and the rewrite of each node rewritten so far.
struct Rewrite<'f> {
    source: &'f Registry,
    target: Registry,
    rewritten: SecondaryMap<NodeKey, NodeKey>,
    disjunction: HornDisjunction,
}

impl Rewrite<'_> {
    fn rewrite(&mut self, key: NodeKey) -> NodeKey {
        if let Some(done) = self.rewritten.get(key) {
            return *done;
        }

        let source = self.source;
        let horn = match source[key].expr() {
            Expr::Var(sign) => self.target.var(sign),

            &Expr::Neg(atom) => {
                let atom = self.rewrite(atom);
                self.target.neg(atom)
            }

            &Expr::And(left, right) => {
                let left = self.rewrite(left);
                let right = self.rewrite(right);
                self.target.and(left, right)
            }

            &Expr::Or(left, right) => {
                let left = self.rewrite(left);
                let right = self.rewrite(right);
                match self.disjunction {
                    HornDisjunction::DeMorgan => {
                        let not_left = self.target.neg(left);
                        let not_right = self.target.neg(right);
                        let conjunction = self.target.and(not_left, not_right);
                        self.target.neg(conjunction)
                    }
                    HornDisjunction::Literal => {
                        let conjunction = self.target.and(left, right);
                        self.target.neg(conjunction)
                    }
                }
            }

            &Expr::Imply(left, right) => {
                let left = self.rewrite(left);
                let right = self.rewrite(right);
                let not_right = self.target.neg(right);
                let conjunction = self.target.and(left, not_right);
                self.target.neg(conjunction)
            }
        };

        self.rewritten.insert(key, horn);
        horn
    }
}

impl Formula {
    /// The Horn form of the formula, in a fresh registry and without any solving state.
    pub fn to_horn(&self, disjunction: HornDisjunction) -> Formula {
        let mut rewrite = Rewrite {
            source: &self.registry,
            target: Registry::default(),
            rewritten: SecondaryMap::new(),
            disjunction,
        };

        let root = rewrite.rewrite(self.root);
        let horn = Formula::from_parts(rewrite.target, root);

        log::debug!(target: targets::HORN, "Rewrote {self} to {horn} ({disjunction})");
        horn
    }
}

#[cfg(test)]
mod horn_tests {
    use super::*;

    #[test]
    fn horn_formulas_are_kept() {
        let formula = Formula::parse("~(p & q) & ~~r").unwrap();
        let horn = formula.to_horn(HornDisjunction::DeMorgan);
        assert_eq!(horn.to_string(), formula.to_string());
        assert_eq!(horn.len(), formula.len());
    }

    #[test]
    fn shared_rewrites() {
        let formula = Formula::parse("(p | q) & ~(q | p)").unwrap();
        let horn = formula.to_horn(HornDisjunction::DeMorgan);

        // p, q, ~p, ~q, (~p & ~q), ~(~p & ~q), ~~(~p & ~q), and the root.
        assert_eq!(horn.len(), 8);
        assert_eq!(horn.to_string(), "(~(~p & ~q) & ~~(~p & ~q))");
    }

    #[test]
    fn implication() {
        let formula = Formula::parse("p -> q").unwrap();
        let horn = formula.to_horn(HornDisjunction::DeMorgan);
        assert_eq!(horn.to_string(), "~(p & ~q)");
    }

    #[test]
    fn rewrites_have_no_state() {
        let mut formula = Formula::parse("p | q").unwrap();
        let root = formula.root();
        formula.registry[root].value = Some(true);

        let horn = formula.to_horn(HornDisjunction::DeMorgan);
        assert!(horn.registry().nodes().all(|node| node.value.is_none()));
    }
}
