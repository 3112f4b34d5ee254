//! Databases for holding information relevant to a solve.
//!
//!   - [The clause database](crate::db::clause)
//!     + A collection of clauses, each indexed by a [ClauseKey]. \
//!       There are two kinds of clause:
//!       * Original clauses \
//!         Original clauses are added to the formula from some external source (e.g. directly or through some DIMACS file). \
//!         The collection of original clauses is the CNF formula whose satisfiability may be determined.
//!       * Learnt clauses \
//!         Clauses added to the formula by conflict analysis.
//!         Every learnt clause is a consequence of the collection of original clauses.
//!   - [The variable database](crate::db::variable)
//!     + Variables, with their values, the clauses which implied those values, occurrences and activity.
//!   - [The trail](crate::db::trail)
//!     + The sequence of assignments made, in order, with a record of which assignments were decisions.

pub mod clause;
mod keys;
pub use keys::*;
pub mod trail;
pub mod variable;
