/*!
The linear procedure, for formulas in Horn form.

# Overview

The procedure is a single pass of [propagation](crate::procedures::bcp) through a formula:

1. The solving state of the formula is reset, and each constant is given its value.
2. The root of the formula is given the value true.
3. Values are propagated top-down from the root.
4. Values are inferred bottom-up through a single sweep of the formula.
5. If every node has a value, a second sweep [confirms](Formula::confirm_assignment) the values agree.

The decision of the procedure is then the [decision](Formula::decision) supported by the solving state of the formula.

For a formula in Horn form, the procedure is sound and runs in time linear in the size of the formula (up to the repeated visits of shared nodes during top-down propagation).
Though, the procedure is incomplete, and some satisfiable formulas (e.g. `~(p & q)`) are decided unknown.

```rust
# use horn_sat::context::Context;
# use horn_sat::formula::Formula;
# use horn_sat::reports::Decision;
let mut the_context = Context::default();

let mut formula = Formula::parse("~(p & q)").unwrap();
assert_eq!(the_context.solve_linear(&mut formula), Ok(Decision::Unknown));

let mut formula = Formula::parse("~p & ~~q").unwrap();
let decision = the_context.solve_linear(&mut formula).unwrap();
assert_eq!(decision.model().and_then(|model| model.get("q")), Some(&true));
```

A formula not in Horn form returns an error, as propagation through a disjunction or implication is not defined.
*/

use std::time::Instant;

use crate::{
    context::Context,
    formula::Formula,
    misc::log::targets::{self},
    reports::{Decision, Report},
    types::err::{self},
};

impl Formula {
    /// A pass of propagation from the root of the formula, without a reset of the formula.
    pub fn linear_pass(&mut self) -> Result<(), err::BCPError> {
        self.assign_constants();

        let root = self.root;
        self.assign(root, true);
        self.propagate_down(root)?;
        self.sweep_up()?;
        self.confirm_assignment()
    }

    /// Solves the formula with the linear procedure, within a default context.
    pub fn solve_linear(&mut self) -> Result<Decision, err::ErrorKind> {
        Context::default().solve_linear(self)
    }
}

impl Context {
    /// Solves the formula with the linear procedure.
    ///
    /// The solving state of the formula is kept after the solve.
    pub fn solve_linear(&mut self, formula: &mut Formula) -> Result<Decision, err::ErrorKind> {
        let start = Instant::now();
        formula.reset();

        log::debug!(target: targets::PROPAGATION, "Linear solve of {formula}");

        let outcome = formula.linear_pass();
        self.counters.sweeps += 1;
        self.counters.time = start.elapsed();

        if let Err(e) = outcome {
            log::error!(target: targets::PROPAGATION, "Linear solve of {formula} failed: {e}");
            self.report = Report::Unknown;
            return Err(e.into());
        }

        let decision = formula.decision();
        self.report = decision.report();
        log::info!(target: targets::PROPAGATION, "Linear solve of {formula}: {}", self.report);

        Ok(decision)
    }
}

#[cfg(test)]
mod linear_tests {
    use super::*;

    #[test]
    fn horn_satisfiable() {
        let mut formula = Formula::parse("~~(~p & ~q) & ~r").unwrap();
        let decision = formula.solve_linear().unwrap();

        let model = decision.model().unwrap();
        assert_eq!(model.get("p"), Some(&false));
        assert_eq!(model.get("q"), Some(&false));
        assert_eq!(model.get("r"), Some(&false));
    }

    #[test]
    fn unsatisfiable() {
        let mut formula = Formula::parse("p & ~p").unwrap();
        assert_eq!(formula.solve_linear(), Ok(Decision::Unsat));
    }

    #[test]
    fn constants() {
        let mut formula = Formula::parse("p & ~F").unwrap();
        let decision = formula.solve_linear().unwrap();
        assert_eq!(decision.model().map(|model| model.len()), Some(1));

        let mut formula = Formula::parse("p & F").unwrap();
        assert_eq!(formula.solve_linear(), Ok(Decision::Unsat));
    }

    #[test]
    fn incomplete() {
        let mut formula = Formula::parse("~(p & q)").unwrap();
        assert_eq!(formula.solve_linear(), Ok(Decision::Unknown));
        assert_eq!(formula.value_of(formula.root()), Some(true));
    }

    #[test]
    fn context_is_updated() {
        let mut the_context = Context::default();
        let mut formula = Formula::parse("p & ~q").unwrap();

        assert!(the_context.solve_linear(&mut formula).is_ok());
        assert!(the_context.solve_linear(&mut formula).is_ok());
        assert_eq!(the_context.report(), Report::Satisfiable);
        assert_eq!(the_context.counters.sweeps, 2);
    }

    #[test]
    fn not_horn() {
        let mut the_context = Context::default();
        let mut formula = Formula::parse("p | q").unwrap();

        let root = formula.root();
        assert_eq!(
            the_context.solve_linear(&mut formula),
            Err(err::ErrorKind::BCP(err::BCPError::UnsupportedOperation(root)))
        );
        assert_eq!(the_context.report(), Report::Unknown);
    }
}
