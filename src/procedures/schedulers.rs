/*!
Scheduled restarts and activity decay.

# Restarts

A restart removes every choice from the trail, keeping every learnt clause.

Restarts are scheduled by the count of clauses learnt since the last restart.
When the count reaches the current [ceiling](crate::generic::ceiling), a restart takes place, the count is reset, and the ceiling moves to the next element of the doubling sequence.

# Decay

After a fixed number of assignments, the activity of every variable (of both polarities) is multiplied by the decay factor, so recent conflicts dominate the activity of a variable.
*/

use crate::{
    formula::Formula,
    misc::log::targets::{self},
};

impl Formula {
    /// Restarts if restarts are permitted and enough clauses have been learnt since the last restart.
    ///
    /// Returns whether a restart took place.
    pub fn restart_check(&mut self) -> bool {
        if !self.config.restart.value
            || self.counters.fresh_conflicts < self.counters.ceiling.current()
        {
            return false;
        }

        self.clear_choices();
        self.counters.fresh_conflicts = 0;
        self.counters.restarts += 1;

        if self.counters.ceiling.next().is_none() {
            log::warn!(target: targets::RESTART, "Restart ceiling exhausted");
        }

        log::info!(target: targets::RESTART,
            "Restart {}, next ceiling {} of {}",
            self.counters.restarts,
            self.counters.ceiling.current(),
            self.counters.ceiling.absolute()
        );
        true
    }

    /// Decays activity if enough assignments have been made since the last decay.
    ///
    /// Returns whether a decay took place.
    pub fn decay_check(&mut self) -> bool {
        if self.counters.fresh_propagations <= self.config.decay_interval.value {
            return false;
        }

        self.variable_db
            .decay_activity(self.config.decay_factor.value);
        self.counters.fresh_propagations = 0;
        self.counters.decays += 1;

        log::info!(target: targets::DECAY,
            "Decay {}: variables {}, clauses {} (learnt {}), conflicts {}, decisions {}, propagations {}, restarts {}",
            self.counters.decays,
            self.variable_db.count(),
            self.clause_db.count(),
            self.clause_db.learnt_count(),
            self.counters.total_conflicts,
            self.counters.total_decisions,
            self.counters.total_propagations,
            self.counters.restarts
        );
        true
    }
}
