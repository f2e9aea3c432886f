use std::str::FromStr;

/// How often to scan the nodes of a formula for a node to split on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Splitting {
    /// Scan the nodes once, in the order the nodes were stored.
    ///
    /// A node which is given a value during the scan is skipped, but a node passed before some value was fixed is not revisited.
    SinglePass = 0,

    /// Repeat the scan until a scan fixes no value.
    ///
    /// Each scan is polynomial, and each scan which does not end the search fixes the value of at least one node, so the search remains polynomial.
    Fixpoint,
}

impl Splitting {
    /// The minimum Splitting type.
    pub const MIN: Splitting = Splitting::SinglePass;

    /// The maximum Splitting type.
    pub const MAX: Splitting = Splitting::Fixpoint;
}

impl std::fmt::Display for Splitting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SinglePass => write!(f, "SinglePass"),
            Self::Fixpoint => write!(f, "Fixpoint"),
        }
    }
}

impl FromStr for Splitting {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SinglePass" => Ok(Self::SinglePass),

            "Fixpoint" => Ok(Self::Fixpoint),

            _unknown_string => Err(()),
        }
    }
}
