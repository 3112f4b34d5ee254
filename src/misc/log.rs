/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library, each with one of the targets below.
With a logger installed, output can be filtered by target. E.g. `RUST_LOG=restart=info,decay=info`.

Note, no log implementation is provided by the library.
The cli installs [env_logger](https://docs.rs/env_logger) when built with the `log` feature.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [BCP](crate::procedures::bcp)
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to [analysis](crate::procedures::analysis)
    pub const ANALYSIS: &str = "analysis";

    /// Logs related to [backjumping](crate::procedures::backjump)
    pub const BACKJUMP: &str = "backjump";

    /// Logs related to restarts
    pub const RESTART: &str = "restart";

    /// Logs related to activity decay
    pub const DECAY: &str = "decay";

    /// Logs related to the [clause database](crate::db::clause)
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to [branching](crate::branching)
    pub const BRANCHING: &str = "branching";

    /// Logs related to the [solve](crate::procedures::solve) loop
    pub const SOLVE: &str = "solve";
}
