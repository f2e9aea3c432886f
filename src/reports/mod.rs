//! Details on the result of some procedure.
//!
//! - A [Decision] is the result of a solve, and includes a model if the formula was found to be satisfiable.
//! - A [Report] is a summary of a decision, without a model.

use crate::structures::valuation::Model;

/// High-level reports regarding a solve.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The formula is satisfiable.
    Satisfiable,

    /// The formula is unsatisfiable.
    Unsatisfiable,

    /// Satisfiability of the formula could not be determined, or no solve has taken place.
    Unknown,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// The result of a solve.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Decision {
    /// The formula is satisfiable, on the given model.
    Sat(Model),

    /// A contradiction was found, and so the formula is unsatisfiable.
    Unsat,

    /// Propagation (and splitting) could not decide the formula.
    Unknown,
}

impl Decision {
    /// The report corresponding to the decision.
    pub fn report(&self) -> Report {
        match self {
            Self::Sat(_) => Report::Satisfiable,
            Self::Unsat => Report::Unsatisfiable,
            Self::Unknown => Report::Unknown,
        }
    }

    /// The model of the decision, if the decision is that the formula is satisfiable.
    pub fn model(&self) -> Option<&Model> {
        match self {
            Self::Sat(model) => Some(model),
            _ => None,
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sat(model) => {
                write!(f, "{}:", Report::Satisfiable)?;
                for (sign, value) in model {
                    match value {
                        true => write!(f, " {sign}")?,
                        false => write!(f, " ~{sign}")?,
                    }
                }
                Ok(())
            }
            Self::Unsat => write!(f, "{}", Report::Unsatisfiable),
            Self::Unknown => write!(f, "{}", Report::Unknown),
        }
    }
}
