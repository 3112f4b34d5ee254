/*!
Formula methods for boolean constraint propagation.

# Overview
An assignment is recorded as a [Choice](crate::db::trail::Choice) on the trail, and the variable of the assignment is given the relevant value.
The consequences of assignments are examined in the order of the trail, from the head of the propagation queue.

For an assigned literal *l*, the consequences are found by examining each clause in which ¬*l* occurs and in which the variable of *l* is watched.
The watches of each such clause are [updated](crate::db::clause::dbClause::update_watches), and then:
- If the clause is satisfied or still has two watches without a value, nothing happens.
- If the clause has exactly one literal without a value and all other literals are false, the literal is assigned with the clause as its reason.
- If every literal of the clause is false, the key of the clause is returned as a conflict.

# Fixpoint

Propagation from the queue alone may miss an implication.
For example, after a backjump a learnt clause may be unit without any of its variables having been assigned since.
So, [propagate_to_fixpoint](Formula::propagate_to_fixpoint) examines every clause, draining the queue after each, until an examination of all clauses adds nothing to the trail.

# Example

```rust,ignore
match self.propagate_to_fixpoint() {
    Err(BcpError::Conflict(key)) => {
        let cut = self.register_conflict(key)?;
        ...
    }
    Ok(()) => { ... }
}
```
*/

use crate::{
    db::{
        clause::WatchStatus,
        trail::Choice,
        ClauseKey, FormulaIndex,
    },
    formula::Formula,
    misc::log::targets::{self},
    structures::literal::Literal,
    types::err::BcpError,
};

impl Formula {
    /// Records the assignment of a literal on the trail, and sets the value of its variable.
    ///
    /// The consequences of the assignment are not examined until the queue is propagated.
    pub fn assign(&mut self, literal: Literal, reason: Option<ClauseKey>, decision: bool) {
        log::trace!(target: targets::PROPAGATION, "Assign {literal} from {reason:?}, decision: {decision}");

        self.counters.total_propagations += 1;
        self.counters.fresh_propagations += 1;

        self.trail.push(Choice {
            literal,
            decision,
            reason,
        });
        self.variable_db.set_value(literal, reason);
    }

    /// Examines the consequences of each assignment on the queue, in order.
    ///
    /// On a conflict the queue head remains at the assignment whose consequences were being examined.
    pub fn propagate_queue(&mut self) -> Result<(), BcpError> {
        while let Some(choice) = self.trail.queued() {
            let literal = choice.literal;
            self.bcp(literal)?;
            self.trail.q_head += 1;
        }
        Ok(())
    }

    /// For documentation see [procedures::bcp](crate::procedures::bcp).
    pub fn bcp(&mut self, literal: Literal) -> Result<(), BcpError> {
        let negation = literal.negate();
        // Occurrence lists do not change during propagation, so the lists are indexed to avoid holding a borrow.
        let occurrence_count = self
            .variable_db
            .get(literal.variable())
            .occurrences(negation.polarity())
            .len();

        for position in 0..occurrence_count {
            let key = self
                .variable_db
                .get(literal.variable())
                .occurrences(negation.polarity())[position];

            if !self.clause_db.issued_mut(key).is_watching(literal.variable()) {
                continue;
            }

            self.examine_clause(key)?;
        }

        Ok(())
    }

    /// Updates the watches of a clause, assigning the asserted literal if the clause is unit.
    fn examine_clause(&mut self, key: ClauseKey) -> Result<(), BcpError> {
        let clause = self.clause_db.issued_mut(key);
        match clause.update_watches(&self.variable_db) {
            WatchStatus::Witness | WatchStatus::Open => Ok(()),

            WatchStatus::Unit(literal) => {
                self.assign(literal, Some(key), false);
                Ok(())
            }

            WatchStatus::Conflict => {
                log::trace!(target: targets::PROPAGATION, "Conflict on {key}");
                Err(BcpError::Conflict(key))
            }
        }
    }

    /// Propagates until no clause implies an assignment, or some clause is false.
    pub fn propagate_to_fixpoint(&mut self) -> Result<(), BcpError> {
        loop {
            self.propagate_queue()?;

            let trail_length = self.trail.len();
            for index in 0..self.clause_db.count() {
                self.examine_clause(ClauseKey(index as FormulaIndex))?;
                self.propagate_queue()?;
            }

            if self.trail.len() == trail_length {
                return Ok(());
            }
        }
    }

    /// Whether every clause is satisfied on the current valuation.
    pub fn all_satisfied(&mut self) -> bool {
        for index in 0..self.clause_db.count() {
            let clause = self.clause_db.issued_mut(ClauseKey(index as FormulaIndex));
            if !clause.witness(&self.variable_db) {
                return false;
            }
        }
        true
    }
}
