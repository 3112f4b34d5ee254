/// The index to a clause in the clause database.
pub type FormulaIndex = u32;

/// A key to access a clause stored in the clause database.
///
/// Clauses are never removed from the database, so the key of a clause is fixed for the life of a formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClauseKey(pub(crate) FormulaIndex);

impl ClauseKey {
    /// Extracts the index from a key.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for ClauseKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
