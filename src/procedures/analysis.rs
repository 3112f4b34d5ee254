/*!
Analysis of an unsatisfiable clause.

Takes a key to a clause which is false on the current valuation and, where possible, learns a clause which would have prevented the conflict.

# Overview

The variable of the conflicting clause assigned most recently is the *conflict variable*.
If the conflict variable was not implied by some clause, there is nothing to analyse, and the conflict is handled by chronological backtracking.

Otherwise, the implication graph is traversed breadth-first, backwards from the conflict:
- The queue is seeded with the literals of the conflicting clause and the literals of the clause which implied the conflict variable, skipping the conflict variable.
- Literals whose variable was implied are expanded by queuing the (unseen) literals of the implying clause.
- Literals whose variable was not implied are added to the *cut*, as the literal on the trail.
- If the queue holds a single literal and the cut is empty, the literal is a unique implication point, and is the cut.

Each variable is queued at most once.

The learnt clause is the negation of the cut.
As every literal of the cut is on the trail, every literal of the learnt clause is false on the current valuation.
If a clause with the same literals is already stored, nothing is learnt, as the stored clause failed to prevent the conflict and storing it again would not help.

When a clause is learnt, the activity of each variable in the clause is bumped (for the polarity of the current value of the variable), and the count of fresh conflicts is incremented.

# Example

```rust,ignore
match self.register_conflict(key)? {
    AnalysisResult::Learnt { cut, .. } => self.non_chronological_backtrack(&cut),
    AnalysisResult::NoImplication | AnalysisResult::Duplicate => self.backtrack(),
}
```
*/

use std::collections::VecDeque;

use crate::{
    db::{clause::ClauseSource, ClauseKey},
    formula::Formula,
    misc::log::targets::{self},
    structures::{
        clause::{CClause, Clause},
        literal::Literal,
    },
    types::err::{self, ErrorKind},
};

/// Possible 'Ok' results from conflict analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnalysisResult {
    /// The conflict variable was not implied by any clause, so no clause was learnt.
    NoImplication,

    /// The clause derived was already stored, so no clause was learnt.
    Duplicate,

    /// A clause was learnt.
    Learnt {
        /// The key to the learnt clause.
        key: ClauseKey,

        /// The cut, as literals on the trail.
        cut: CClause,
    },
}

impl Formula {
    /// For documentation see [procedures::analysis](crate::procedures::analysis).
    pub fn register_conflict(&mut self, key: ClauseKey) -> Result<AnalysisResult, ErrorKind> {
        let conflict = self.clause_db.get(key)?.to_vec();

        if let Some(literal) = conflict
            .iter()
            .find(|literal| self.variable_db.value_of(literal.variable()).is_none())
        {
            log::error!(target: targets::ANALYSIS, "Conflict clause {key} has a literal without a value");
            return Err(err::AnalysisError::UnassignedConflictLiteral(literal.variable()).into());
        }

        let conflict_variable = match self.trail.iter().rev().find(|choice| {
            conflict
                .iter()
                .any(|literal| literal.variable() == choice.literal.variable())
        }) {
            Some(choice) => choice.literal.variable(),
            None => return Err(err::AnalysisError::MissingConflictVariable.into()),
        };

        let Some(reason) = self.variable_db.get(conflict_variable).implicated_by() else {
            log::debug!(target: targets::ANALYSIS, "Conflict on {key} without implication");
            return Ok(AnalysisResult::NoImplication);
        };

        let mut seen = vec![false; self.variable_db.count()];
        seen[conflict_variable as usize] = true;

        let mut queue: VecDeque<Literal> = VecDeque::default();
        for literal in conflict.iter().chain(self.clause_db.get(reason)?.iter()) {
            if !seen[literal.variable() as usize] {
                seen[literal.variable() as usize] = true;
                queue.push_back(*literal);
            }
        }

        let mut cut: CClause = Vec::default();
        while let Some(literal) = queue.pop_front() {
            if queue.is_empty() && cut.is_empty() {
                cut.push(literal.negate());
                break;
            }

            match self.variable_db.get(literal.variable()).implicated_by() {
                None => cut.push(literal.negate()),

                Some(antecedent) => {
                    for antecedent_literal in self.clause_db.get(antecedent)?.iter() {
                        let variable = antecedent_literal.variable() as usize;
                        if !seen[variable] {
                            seen[variable] = true;
                            queue.push_back(*antecedent_literal);
                        }
                    }
                }
            }
        }

        if cut.is_empty() {
            log::debug!(target: targets::ANALYSIS, "Empty cut from {key}");
            return Ok(AnalysisResult::NoImplication);
        }

        let learnt: CClause = cut.iter().map(|literal| literal.negate()).collect();
        if self.clause_db.contains(&learnt) {
            log::debug!(target: targets::ANALYSIS, "Derived a duplicate clause {}", learnt.as_string());
            return Ok(AnalysisResult::Duplicate);
        }

        let learnt_key = self.store_learnt(learnt)?;
        log::debug!(target: targets::ANALYSIS, "Learnt {learnt_key} from conflict {key}");

        Ok(AnalysisResult::Learnt {
            key: learnt_key,
            cut,
        })
    }

    /// Stores a learnt clause, bumping the activity of each variable in the clause.
    ///
    /// Every literal of the clause must be false on the current valuation.
    pub fn store_learnt(&mut self, clause: CClause) -> Result<ClauseKey, ErrorKind> {
        for literal in &clause {
            match self.variable_db.literal_value(*literal) {
                Some(false) => {}
                Some(true) => return Err(err::ClauseDBError::SatisfiedLearnt.into()),
                None => return Err(err::ClauseDBError::UnassignedLearnt.into()),
            }
        }

        for literal in &clause {
            self.variable_db.bump_activity(literal.negate(), 1.0);
        }

        let key = self
            .clause_db
            .store(clause, ClauseSource::Learnt, &mut self.variable_db);
        self.counters.fresh_conflicts += 1;
        Ok(key)
    }
}
