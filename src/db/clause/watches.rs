use crate::{
    db::variable::VariableDB,
    structures::{literal::Literal, variable::VariableIndex},
};

use super::db_clause::dbClause;

/// The status of a clause, as read from its watched literals after an update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WatchStatus {
    /// Some watched literal is true, so the clause is satisfied.
    Witness,

    /// No watched literal is true, and no watched literal is false.
    Open,

    /// The literal is the only literal of the clause without a value, and all other literals are false.
    Unit(Literal),

    /// Every watched literal is false, and no replacement was found, so every literal of the clause is false.
    Conflict,
}

/// Methods for watched literals of a clause.
///
/// # Implementation notes
///
/// Two positions in the clause are watched: watch A, and (for clauses of two or more literals) watch B.
/// A watch is 'dead' when its literal is false on the current valuation.
/// On an update, each dead watch is moved to a literal which is true or has no value, where possible, skipping the literals of the other watch.
///
/// So, after any update:
/// 1. If some watch is dead, every literal outside the watches is false.
/// 2. If both watches are dead, the clause is false on the current valuation.
///
/// After a backjump some value may be cleared, and so a stale watch may rest on a false literal whose variable is earlier on the trail than some literal without a value.
/// Updates only ever move watches away from false literals, so a later update corrects this.
impl dbClause {
    /// Updates the watched literals of the clause, given the current valuation, and returns the resulting status of the clause.
    pub fn update_watches(&mut self, variables: &VariableDB) -> WatchStatus {
        let Some(watch_b) = self.watch_b else {
            let literal = self[self.watch_a];
            return match variables.literal_value(literal) {
                None => WatchStatus::Unit(literal),
                Some(true) => WatchStatus::Witness,
                Some(false) => WatchStatus::Conflict,
            };
        };

        let a_value = variables.literal_value(self[self.watch_a]);
        let b_value = variables.literal_value(self[watch_b]);

        match (a_value, b_value) {
            (Some(true), _) | (_, Some(true)) => return WatchStatus::Witness,
            (None, None) => return WatchStatus::Open,
            _ => {}
        }

        if a_value == Some(false) {
            if let Some(index) = self.watch_candidate(variables) {
                self.watch_a = index;
            }
        }

        if b_value == Some(false) {
            if let Some(index) = self.watch_candidate(variables) {
                self.watch_b = Some(index);
            }
        }

        let (a, b) = self.watched();
        let a_value = variables.literal_value(a);
        let b_value = b.and_then(|b| variables.literal_value(b));

        match (a_value, b_value) {
            (Some(true), _) | (_, Some(true)) => WatchStatus::Witness,
            (Some(false), Some(false)) => WatchStatus::Conflict,
            (Some(false), None) => match b {
                Some(b) => WatchStatus::Unit(b),
                None => WatchStatus::Conflict,
            },
            (None, Some(false)) => WatchStatus::Unit(a),
            (None, None) => WatchStatus::Open,
        }
    }

    /// Whether the clause is satisfied on the current valuation.
    ///
    /// If no watched literal is true but some other literal is, a watch is moved to that literal so the next check may be made from the watches alone.
    pub fn witness(&mut self, variables: &VariableDB) -> bool {
        let (a, b) = self.watched();
        let a_value = variables.literal_value(a);
        let b_value = b.and_then(|b| variables.literal_value(b));
        if a_value == Some(true) || b_value == Some(true) {
            return true;
        }

        let Some(index) = self
            .iter()
            .position(|literal| variables.literal_value(*literal) == Some(true))
        else {
            return false;
        };

        match (self.watch_b, a_value, b_value) {
            (None, _, _) => self.watch_a = index,
            (Some(_), Some(false), _) | (Some(_), None, None) => self.watch_a = index,
            (Some(_), _, _) => self.watch_b = Some(index),
        }
        true
    }

    /// The position of a literal which is true or has no value, and whose variable is not watched.
    fn watch_candidate(&self, variables: &VariableDB) -> Option<usize> {
        let (a, b) = self.watched();
        let watched = |variable: VariableIndex| {
            a.variable() == variable || b.is_some_and(|b| b.variable() == variable)
        };

        self.iter().position(|literal| {
            !watched(literal.variable()) && variables.literal_value(*literal) != Some(false)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{clause::ClauseSource, ClauseKey};

    fn setup(ids: &[u32]) -> VariableDB {
        let mut variables = VariableDB::default();
        for id in ids {
            variables.variable_for_id(*id);
        }
        variables
    }

    fn clause(literals: &[(u32, bool)]) -> dbClause {
        dbClause::new(
            ClauseKey(0),
            literals
                .iter()
                .map(|(v, p)| Literal::new(*v, *p))
                .collect(),
            ClauseSource::Original,
        )
    }

    #[test]
    fn dead_watch_replaced() {
        let mut variables = setup(&[1, 2, 3]);
        let mut clause = clause(&[(0, true), (1, true), (2, true)]);

        variables.set_value(Literal::new(0, false), None);
        assert_eq!(clause.update_watches(&variables), WatchStatus::Open);
        assert_eq!(
            clause.watched(),
            (Literal::new(2, true), Some(Literal::new(1, true)))
        );
    }

    #[test]
    fn unit_when_no_replacement() {
        let mut variables = setup(&[1, 2, 3]);
        let mut clause = clause(&[(0, true), (1, true), (2, true)]);

        variables.set_value(Literal::new(0, false), None);
        variables.set_value(Literal::new(2, false), None);
        assert_eq!(
            clause.update_watches(&variables),
            WatchStatus::Unit(Literal::new(1, true))
        );
    }

    #[test]
    fn conflict_when_all_false() {
        let mut variables = setup(&[1, 2]);
        let mut clause = clause(&[(0, true), (1, false)]);

        variables.set_value(Literal::new(0, false), None);
        variables.set_value(Literal::new(1, true), None);
        assert_eq!(clause.update_watches(&variables), WatchStatus::Conflict);
    }

    #[test]
    fn satisfying_replacement_is_a_witness() {
        let mut variables = setup(&[1, 2, 3]);
        let mut clause = clause(&[(0, true), (1, true), (2, false)]);

        variables.set_value(Literal::new(0, false), None);
        variables.set_value(Literal::new(2, false), None);
        assert_eq!(clause.update_watches(&variables), WatchStatus::Witness);
        assert!(clause.is_watching(2));
    }

    #[test]
    fn unit_clause() {
        let mut variables = setup(&[1]);
        let mut clause = clause(&[(0, false)]);

        assert_eq!(
            clause.update_watches(&variables),
            WatchStatus::Unit(Literal::new(0, false))
        );

        variables.set_value(Literal::new(0, false), None);
        assert_eq!(clause.update_watches(&variables), WatchStatus::Witness);

        variables.set_value(Literal::new(0, true), None);
        assert_eq!(clause.update_watches(&variables), WatchStatus::Conflict);
    }

    #[test]
    fn witness_moves_watch() {
        let mut variables = setup(&[1, 2, 3]);
        let mut clause = clause(&[(0, true), (1, true), (2, true)]);

        variables.set_value(Literal::new(2, true), None);
        assert!(clause.witness(&variables));
        assert!(clause.is_watching(2));

        variables.drop_value(2);
        assert!(!clause.witness(&variables));
    }
}
