use std::time::Duration;

/// Counts for various things which count, roughly.
#[derive(Clone, Debug)]
pub struct Counters {
    /// A count of every split made.
    pub splits: usize,

    /// A count of every branch of a split which led to a contradiction.
    pub contradicted_branches: usize,

    /// A count of every sweep of propagation through a formula, including sweeps through branches.
    pub sweeps: usize,

    /// The time taken during the most recent solve.
    pub time: Duration,
}

impl Default for Counters {
    fn default() -> Self {
        Counters {
            splits: 0,
            contradicted_branches: 0,
            sweeps: 0,
            time: Duration::from_secs(0),
        }
    }
}
