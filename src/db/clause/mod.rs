/*!
A database of clauses.

Clauses are stored in a single vector, and each clause is accessed through the [ClauseKey] returned when the clause was stored.
Clauses are never removed, so a key remains valid for the life of the database.

Alongside the clauses, the database keeps a set of the canonical form of every stored clause.
This is used to avoid storing two clauses with the same literals, either from the input or through learning.

When a clause is stored, each of its literals is noted as an occurrence of the variable of the literal in the [variable database](crate::db::variable).
*/

mod db_clause;
pub use db_clause::dbClause;

mod watches;
pub use watches::WatchStatus;

use std::collections::HashSet;

use crate::{
    db::{variable::VariableDB, ClauseKey, FormulaIndex},
    misc::log::targets::{self},
    structures::{
        clause::{CClause, Clause},
        literal::Literal,
    },
    types::err::{self},
};

/// The source of a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseSource {
    /// A clause from the input formula.
    Original,

    /// A clause derived through conflict analysis.
    Learnt,
}

/// The clause database.
#[derive(Default)]
pub struct ClauseDB {
    clauses: Vec<dbClause>,
    canonical: HashSet<CClause>,
    learnt_count: usize,
}

impl ClauseDB {
    /// Stores a clause, noting occurrences of the literals of the clause.
    ///
    /// The clause is expected to be non-empty, free of duplicate literals, and not a tautology.
    /// Whether an equivalent clause has already been stored is not checked. See [contains](ClauseDB::contains).
    pub fn store(
        &mut self,
        clause: CClause,
        source: ClauseSource,
        variables: &mut VariableDB,
    ) -> ClauseKey {
        let key = ClauseKey(self.clauses.len() as FormulaIndex);

        for literal in &clause {
            variables.note_occurrence(*literal, key);
        }
        self.canonical.insert(clause.canonical());

        if source == ClauseSource::Learnt {
            self.learnt_count += 1;
        }

        log::trace!(target: targets::CLAUSE_DB, "Stored {source:?} clause {key}: {}", clause.as_string());
        self.clauses.push(dbClause::new(key, clause, source));
        key
    }

    /// Whether a clause with the same literals (as a set) has been stored.
    pub fn contains(&self, clause: &[Literal]) -> bool {
        self.canonical.contains(&clause.canonical())
    }

    /// The clause with the given key.
    pub fn get(&self, key: ClauseKey) -> Result<&dbClause, err::ClauseDBError> {
        self.clauses.get(key.index()).ok_or(err::ClauseDBError::Missing)
    }

    /// The clause with the given key, for keys issued by the database.
    ///
    /// # Panics
    /// If the key was not issued by the database.
    pub(crate) fn issued_mut(&mut self, key: ClauseKey) -> &mut dbClause {
        &mut self.clauses[key.index()]
    }

    /// A count of all clauses.
    pub fn count(&self) -> usize {
        self.clauses.len()
    }

    /// A count of learnt clauses.
    pub fn learnt_count(&self) -> usize {
        self.learnt_count
    }

    /// An iterator over all clauses, in order of storage.
    pub fn all_clauses(&self) -> impl Iterator<Item = &dbClause> {
        self.clauses.iter()
    }

    /// An iterator over all original clauses.
    pub fn original_clauses(&self) -> impl Iterator<Item = &dbClause> {
        self.clauses
            .iter()
            .filter(|clause| clause.source() == ClauseSource::Original)
    }

    /// An iterator over all learnt clauses.
    pub fn learnt_clauses(&self) -> impl Iterator<Item = &dbClause> {
        self.clauses
            .iter()
            .filter(|clause| clause.source() == ClauseSource::Learnt)
    }
}
