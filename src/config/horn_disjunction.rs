use std::str::FromStr;

/// Variant rewrites of a disjunction to Horn form.
///
/// Conjunction and negation are kept by a rewrite to Horn form, and an implication `a -> b` is rewritten to `~(a & ~b)`.
/// For disjunctions there is a choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum HornDisjunction {
    /// Rewrite `a | b` to `~(~a & ~b)`.
    ///
    /// The rewrite is equivalent to the disjunction.
    DeMorgan = 0,

    /// Rewrite `a | b` to `~(a & b)`.
    ///
    /// The rewrite is *not* equivalent to the disjunction, as when both `a` and `b` are true the disjunction is true while the rewrite is false.
    /// Still, the rewrite is available for comparison with earlier results.
    Literal,
}

impl HornDisjunction {
    /// The minimum HornDisjunction type.
    pub const MIN: HornDisjunction = HornDisjunction::DeMorgan;

    /// The maximum HornDisjunction type.
    pub const MAX: HornDisjunction = HornDisjunction::Literal;
}

impl std::fmt::Display for HornDisjunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DeMorgan => write!(f, "DeMorgan"),
            Self::Literal => write!(f, "Literal"),
        }
    }
}

impl FromStr for HornDisjunction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DeMorgan" => Ok(Self::DeMorgan),

            "Literal" => Ok(Self::Literal),

            _unknown_string => Err(()),
        }
    }
}
