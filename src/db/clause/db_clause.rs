use std::ops::Deref;

use crate::{
    db::{clause::ClauseSource, ClauseKey},
    structures::{clause::CClause, literal::Literal, variable::VariableIndex},
};

/// A clause together with some metadata.
///
/// The literals of the clause are fixed at creation, while the positions of the watched literals change during a solve.
/// Watch A is always set, and watch B is set exactly when the clause has two or more literals.
/// The two watches are at distinct positions, and so on distinct variables.
#[allow(non_camel_case_types)]
#[derive(Clone, Debug)]
pub struct dbClause {
    /// The key used to access the clause.
    key: ClauseKey,

    /// The clause itself.
    clause: CClause,

    /// Where the clause came from.
    source: ClauseSource,

    /// The position of watch A.
    pub(super) watch_a: usize,

    /// The position of watch B, if the clause has two or more literals.
    pub(super) watch_b: Option<usize>,
}

impl dbClause {
    /// A clause from a (non-empty) vector of distinct literals, watching the first two literals.
    pub fn new(key: ClauseKey, clause: CClause, source: ClauseSource) -> Self {
        let watch_b = match clause.len() {
            0 | 1 => None,
            _ => Some(1),
        };

        dbClause {
            key,
            clause,
            source,
            watch_a: 0,
            watch_b,
        }
    }

    /// The key of the clause.
    pub fn key(&self) -> ClauseKey {
        self.key
    }

    pub fn source(&self) -> ClauseSource {
        self.source
    }

    /// The watched literals of the clause.
    pub fn watched(&self) -> (Literal, Option<Literal>) {
        (
            self.clause[self.watch_a],
            self.watch_b.map(|index| self.clause[index]),
        )
    }

    /// Whether the variable is the variable of some watched literal of the clause.
    pub fn is_watching(&self, variable: VariableIndex) -> bool {
        let (a, b) = self.watched();
        a.variable() == variable || b.is_some_and(|b| b.variable() == variable)
    }
}

impl Deref for dbClause {
    type Target = [Literal];

    fn deref(&self) -> &Self::Target {
        &self.clause
    }
}

impl std::fmt::Display for dbClause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use crate::structures::clause::Clause;
        write!(f, "{} {}", self.key, self.clause.as_string())
    }
}
