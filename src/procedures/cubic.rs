/*!
The cubic procedure, for any formula.

# Overview

The formula is rewritten to [Horn form](crate::procedures::horn), and a [linear pass](Formula::linear_pass) is made through the rewrite.
If the pass decides the formula, the decision is returned.

Otherwise, each node without a value is [split](Context::split) on, in the order the nodes were stored.
A node which has gained a value from an earlier split is skipped.

A split on a node makes two clones of the formula.
In one clone the node is given the value true, and in the other the node is given the value false.
In each clone values are then propagated top-down from the node, and inferred bottom-up through a sweep of the clone.

- If both clones contain a contradiction, the formula is unsatisfiable.
- If some clone without a contradiction has a value for each node, the formula is satisfiable, on the values of the clone.
  The clone with the node true is checked first.
- If both clones are without a contradiction, any value shared by a node in both clones is given to the node in the formula.
  As the value is derived whichever value the node has, the value is safe to fix.
- If exactly one clone is without a contradiction, the node is given the value it has in that clone.

After each node has been visited, the decision supported by the formula is returned.

# Rounds

By default the nodes of a formula are visited in a single round, and values fixed during the round are not revisited.
With [Splitting::Fixpoint] rounds are repeated until a round fixes no value.

```rust
# use horn_sat::config::{Config, Splitting};
# use horn_sat::context::Context;
# use horn_sat::formula::Formula;
# use horn_sat::reports::Report;
let mut config = Config::default();
config.splitting.set(Splitting::Fixpoint);
let mut the_context = Context::from_config(config);

let formula = Formula::parse("(p -> r) & (~p -> r)").unwrap();
let decision = the_context.solve_cubic(&formula).unwrap();

assert_eq!(decision.report(), Report::Satisfiable);
assert_eq!(formula.evaluate(decision.model().unwrap()), Ok(true));
```

# Costs

Each split is a linear number of steps, and each node is split on at most once per round.
With a single round the procedure is at most quadratic in the size of the formula, and with repeated rounds at most cubic.

A bound on the number of splits may be given with [split_limit](crate::config::Config::split_limit).
If the bound is reached, the decision supported by the formula at that point is returned.
*/

use std::time::Instant;

use crate::{
    config::Splitting,
    context::Context,
    db::NodeKey,
    formula::Formula,
    misc::log::targets::{self},
    reports::Decision,
    structures::valuation::Model,
    types::err::{self},
};

/// The outcome of a split on some node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Split {
    /// Both values of the node led to a contradiction.
    Unsat,

    /// Some value of the node led to a full assignment, and so a model.
    Sat(Model),

    /// Both values of the node are without a contradiction, and the given count of nodes were fixed to a value the node had on both values.
    Merged(usize),

    /// Exactly one value of the node is without a contradiction, and the node was fixed to that value.
    Fixed(bool),
}

impl Formula {
    /// A clone of the formula, with the node given `value` and values propagated from the node.
    pub fn branch(&self, key: NodeKey, value: bool) -> Result<Formula, err::BCPError> {
        let mut branch = self.clone();
        branch.assign(key, value);
        branch.propagate_down(key)?;
        branch.sweep_up()?;
        branch.confirm_assignment()?;
        Ok(branch)
    }

    /// Fixes each node without a value to the value the node has in both `a` and `b`, if any.
    ///
    /// Returns a count of the nodes fixed.
    ///
    /// `a` and `b` are expected to be clones of the formula, and are interchangeable.
    pub fn merge_agreement(&mut self, a: &Formula, b: &Formula) -> usize {
        let mut fixed = 0;
        for index in 0..self.registry.len() {
            let Some(key) = self.registry.key_at(index) else {
                continue;
            };
            if self.registry[key].value.is_some() {
                continue;
            }

            let a_value = a.registry.get(key).and_then(|node| node.value);
            let b_value = b.registry.get(key).and_then(|node| node.value);
            if let (Some(a_value), Some(b_value)) = (a_value, b_value) {
                if a_value == b_value {
                    self.assign(key, a_value);
                    fixed += 1;
                }
            }
        }
        fixed
    }

    /// Solves the formula with the cubic procedure, within a default context.
    pub fn solve_cubic(&self) -> Result<Decision, err::ErrorKind> {
        Context::default().solve_cubic(self)
    }
}

impl Context {
    /// Splits the formula on the node with the given key, and updates the formula with the outcome of the split.
    ///
    /// The formula is expected to be in Horn form.
    pub fn split(&mut self, formula: &mut Formula, key: NodeKey) -> Result<Split, err::ErrorKind> {
        let positive = formula.branch(key, true)?;
        let negative = formula.branch(key, false)?;
        self.counters.splits += 1;
        self.counters.sweeps += 2;

        let positive_clean = !positive.found_contradiction();
        let negative_clean = !negative.found_contradiction();

        if !positive_clean {
            self.counters.contradicted_branches += 1;
        }
        if !negative_clean {
            self.counters.contradicted_branches += 1;
        }

        let outcome = match (positive_clean, negative_clean) {
            (false, false) => Split::Unsat,

            (true, _) if positive.fully_assigned() => Split::Sat(positive.model()),

            (_, true) if negative.fully_assigned() => Split::Sat(negative.model()),

            (true, true) => Split::Merged(formula.merge_agreement(&positive, &negative)),

            (true, false) => {
                formula.assign(key, true);
                Split::Fixed(true)
            }

            (false, true) => {
                formula.assign(key, false);
                Split::Fixed(false)
            }
        };

        log::debug!(target: targets::SPLIT, "Split on {}: {outcome:?}", formula.node(key));
        Ok(outcome)
    }

    /// Solves the formula with the cubic procedure.
    ///
    /// The formula is not changed, as the procedure works on a rewrite of the formula to Horn form.
    pub fn solve_cubic(&mut self, formula: &Formula) -> Result<Decision, err::ErrorKind> {
        let start = Instant::now();
        log::debug!(target: targets::SPLIT, "Cubic solve of {formula}");

        let mut horn = self.horn(formula);
        horn.linear_pass()?;
        self.counters.sweeps += 1;

        let decision = horn.decision();
        if decision != Decision::Unknown {
            return Ok(self.conclude(formula, decision, start));
        }

        let limit = self.config.split_limit.value;
        let mut splits = 0;

        loop {
            let mut fixed = 0;

            for index in 0..horn.len() {
                let Some(key) = horn.registry.key_at(index) else {
                    continue;
                };
                if horn.value_of(key).is_some() {
                    continue;
                }

                if limit != 0 && splits >= limit {
                    log::info!(target: targets::SPLIT, "Split limit of {limit} reached");
                    horn.confirm_assignment()?;
                    let decision = horn.decision();
                    return Ok(self.conclude(formula, decision, start));
                }
                splits += 1;

                match self.split(&mut horn, key)? {
                    Split::Unsat => return Ok(self.conclude(formula, Decision::Unsat, start)),

                    Split::Sat(model) => {
                        return Ok(self.conclude(formula, Decision::Sat(model), start))
                    }

                    Split::Merged(count) => fixed += count,

                    Split::Fixed(_) => fixed += 1,
                }
            }

            match self.config.splitting.value {
                Splitting::SinglePass => break,
                Splitting::Fixpoint if fixed == 0 => break,
                Splitting::Fixpoint => {
                    log::trace!(target: targets::SPLIT, "Round fixed {fixed} values");
                }
            }
        }

        horn.confirm_assignment()?;
        let decision = horn.decision();
        Ok(self.conclude(formula, decision, start))
    }

    /// Notes the decision on the formula in the context, and returns the decision.
    fn conclude(&mut self, formula: &Formula, decision: Decision, start: Instant) -> Decision {
        self.counters.time = start.elapsed();
        self.report = decision.report();
        log::info!(target: targets::SPLIT, "Cubic solve of {formula}: {}", self.report);
        decision
    }
}

#[cfg(test)]
mod cubic_tests {
    use super::*;

    use crate::{config::Config, reports::Report};

    #[test]
    fn linear_decisions_are_returned() {
        let mut the_context = Context::default();

        let formula = Formula::parse("p & ~p").unwrap();
        assert_eq!(the_context.solve_cubic(&formula), Ok(Decision::Unsat));
        assert_eq!(the_context.counters.splits, 0);

        let formula = Formula::parse("~(p | q) & ~r").unwrap();
        let decision = the_context.solve_cubic(&formula).unwrap();
        assert_eq!(decision.model().map(|model| model.len()), Some(3));
        assert_eq!(the_context.counters.splits, 0);
    }

    #[test]
    fn split_to_model() {
        let mut the_context = Context::default();
        let formula = Formula::parse("~(p & q)").unwrap();

        let decision = the_context.solve_cubic(&formula).unwrap();
        let model = decision.model().unwrap();
        assert_eq!(model.get("p"), Some(&true));
        assert_eq!(model.get("q"), Some(&false));
        assert_eq!(the_context.counters.splits, 1);
        assert_eq!(the_context.report(), Report::Satisfiable);
    }

    #[test]
    fn unsat_through_implication() {
        let formula = Formula::parse("(p -> q) & p & ~q").unwrap();
        assert_eq!(formula.solve_cubic(), Ok(Decision::Unsat));
    }

    #[test]
    fn split_fixes_the_node() {
        // With p false the formula is contradicted, and so p is fixed to true.
        let mut formula = Formula::parse("~(~p & q) & q & ~(r & s)").unwrap();
        assert_eq!(formula.solve_linear(), Ok(Decision::Unknown));

        let mut the_context = Context::default();
        let p = formula.key_of("p").unwrap();
        assert_eq!(the_context.split(&mut formula, p), Ok(Split::Fixed(true)));
        assert_eq!(formula.value_of(p), Some(true));
        assert_eq!(the_context.counters.contradicted_branches, 1);
    }

    #[test]
    fn merge_is_symmetric() {
        let mut formula = Formula::parse("p & ~(q & r)").unwrap();
        let p = formula.key_of("p").unwrap();
        let q = formula.key_of("q").unwrap();
        let r = formula.key_of("r").unwrap();

        let mut a = formula.clone();
        a.assign(p, true);
        a.assign(q, true);
        let mut b = formula.clone();
        b.assign(p, true);
        b.assign(q, false);
        b.assign(r, true);

        let mut ab = formula.clone();
        let mut ba = formula.clone();
        assert_eq!(ab.merge_agreement(&a, &b), 1);
        assert_eq!(ba.merge_agreement(&b, &a), 1);

        for key in [p, q, r] {
            assert_eq!(ab.value_of(key), ba.value_of(key));
        }
        assert_eq!(ab.value_of(p), Some(true));
        assert_eq!(ab.value_of(q), None);

        formula.assign(p, false);
        assert_eq!(formula.merge_agreement(&a, &b), 0);
        assert_eq!(formula.value_of(p), Some(false));
    }

    #[test]
    fn split_limit() {
        let mut config = Config::default();
        config.split_limit.set(1);
        let mut the_context = Context::from_config(config);

        let formula = Formula::parse("~(p & q) & ~(r & s)").unwrap();
        assert_eq!(the_context.solve_cubic(&formula), Ok(Decision::Unknown));
        assert_eq!(the_context.counters.splits, 1);
        assert_eq!(the_context.report(), Report::Unknown);
    }
}
