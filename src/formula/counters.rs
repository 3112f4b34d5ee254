use std::time::Duration;

use crate::{config::Config, generic::ceiling::Ceiling};

/// Counts for various things which count, roughly.
#[derive(Clone, Debug)]
pub struct Counters {
    /// A count of every conflict seen during a solve.
    pub total_conflicts: usize,

    /// A count of clauses learnt since the last restart.
    ///
    /// As u32 rather than a usize for easier interaction with the restart ceiling.
    pub fresh_conflicts: u32,

    /// A count of all decisions made.
    pub total_decisions: usize,

    /// A count of all assignments made, through decision or propagation.
    pub total_propagations: usize,

    /// A count of assignments made since the last decay.
    pub fresh_propagations: u32,

    /// The number of restarts through a solve.
    pub restarts: usize,

    /// The number of decays through a solve.
    pub decays: usize,

    /// The time taken during a solve.
    pub time: Duration,

    /// The current restart ceiling.
    pub ceiling: Ceiling,
}

impl Counters {
    pub fn from_config(config: &Config) -> Self {
        Counters {
            ceiling: Ceiling::new(config.restart_ceiling.value, config.absolute_ceiling.value),
            ..Counters::default()
        }
    }
}

impl Default for Counters {
    fn default() -> Self {
        Counters {
            total_conflicts: 0,
            fresh_conflicts: 0,

            total_decisions: 0,
            total_propagations: 0,
            fresh_propagations: 0,

            restarts: 0,
            decays: 0,
            time: Duration::from_secs(0),

            ceiling: Ceiling::default(),
        }
    }
}
