/*!
The context, within which solves take place.

A context holds a [configuration](crate::config) and some [counters](Counters), and the report from the most recent solve.
Formulas are not part of a context, and so a context may be used to solve any number of formulas.

# Example
```rust
# use horn_sat::config::Config;
# use horn_sat::context::Context;
# use horn_sat::formula::Formula;
# use horn_sat::reports::Report;
let mut the_context = Context::from_config(Config::default());

let formula = Formula::parse("(p -> q) & p & ~q").unwrap();

assert!(the_context.solve_cubic(&formula).is_ok());
assert_eq!(the_context.report(), Report::Unsatisfiable);
```
*/

mod counters;
pub use counters::Counters;

use crate::{config::Config, formula::Formula, reports::Report};

/// A context.
pub struct Context {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to a context/solve.
    pub counters: Counters,

    /// The report from the most recent solve.
    pub(crate) report: Report,
}

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Context {
            config,
            counters: Counters::default(),
            report: Report::Unknown,
        }
    }

    /// A report on the most recent solve, or unknown if no solve has taken place.
    pub fn report(&self) -> Report {
        self.report
    }

    /// The Horn form of `formula`, with disjunctions rewritten as configured.
    pub fn horn(&self, formula: &Formula) -> Formula {
        formula.to_horn(self.config.horn_disjunction.value)
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::from_config(Config::default())
    }
}
