/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [parsing](crate::builder)
    pub const PARSE: &str = "parse";

    /// Logs related to the [registry](crate::db)
    pub const REGISTRY: &str = "registry";

    /// Logs related to [rewriting to Horn form](crate::procedures::horn)
    pub const HORN: &str = "horn";

    /// Logs related to [BCP](crate::procedures::bcp)
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to [splitting](crate::procedures::cubic)
    pub const SPLIT: &str = "split";

    /// Logs related to [evaluation](crate::procedures::evaluate)
    pub const EVALUATION: &str = "evaluation";
}
