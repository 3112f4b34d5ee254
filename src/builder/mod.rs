/*!
Tools for building a formula.

# Basic methods

The library has two basic methods for building a formula:
- [add_clause](crate::formula::Formula::add_clause), to add a clause given as integer literals.
- [read_dimacs](crate::formula::Formula::read_dimacs), to add each clause of a DIMACS formula.

Variables are created on first sight of their id, so there is no need to declare variables before use.

# Examples

```rust
# use heron_sat::formula::Formula;
# use heron_sat::builder::ClauseOk;
# use heron_sat::reports::Report;
let mut the_formula = Formula::default();

assert!(matches!(the_formula.add_clause([1, -2]), Ok(ClauseOk::Added(_))));
assert_eq!(the_formula.add_clause([-2, 1]), Ok(ClauseOk::Duplicate));
assert_eq!(the_formula.add_clause([3, -3]), Ok(ClauseOk::Tautology));
assert!(the_formula.add_clause([0]).is_err());
assert!(the_formula.add_clause(Vec::<i32>::default()).is_err());

assert_eq!(the_formula.solve(), Ok(Report::Satisfiable));
```
*/

mod dimacs;
pub use dimacs::ParserInfo;

use crate::{
    db::{clause::ClauseSource, ClauseKey},
    formula::{Formula, FormulaState},
    misc::log::targets::{self},
    structures::{
        clause::{CClause, Clause},
        literal::{IntLiteral, Literal},
    },
    types::err::{self, ErrorKind},
};

/// Ok results when adding a clause to the formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was added to the formula, with the given key.
    Added(ClauseKey),

    /// The clause was a tautology (and so was not added to the formula).
    Tautology,

    /// A clause with the same literals had already been added (and so the clause was not added again).
    Duplicate,
}

impl Formula {
    /// The literal for an integer, with the sign of the integer as polarity, creating a variable for the id if required.
    pub fn literal_from_int(&mut self, int: IntLiteral) -> Result<Literal, ErrorKind> {
        if int == 0 {
            return Err(ErrorKind::from(err::BuildError::ZeroLiteral));
        }
        if int == IntLiteral::MIN {
            return Err(ErrorKind::from(err::BuildError::LiteralOutOfRange));
        }
        let variable = self.variable_db.variable_for_id(int.unsigned_abs());
        Ok(Literal::new(variable, int.is_positive()))
    }

    /// Adds a clause to the formula, given as a collection of integer literals.
    ///
    /// - Repeated literals are collapsed to a single occurrence.
    /// - A clause containing some literal and its negation is always true, and so is not added.
    /// - A clause with the same literals as some clause already added is not added again.
    ///
    /// If some assignment has been made (e.g. by a previous solve) the assignment is cleared before the clause is added.
    pub fn add_clause(
        &mut self,
        clause: impl AsRef<[IntLiteral]>,
    ) -> Result<ClauseOk, ErrorKind> {
        let ints = clause.as_ref();
        if ints.is_empty() {
            return Err(ErrorKind::from(err::BuildError::EmptyClause));
        }
        if ints.contains(&0) {
            return Err(ErrorKind::from(err::BuildError::ZeroLiteral));
        }

        if !self.trail.is_empty() {
            log::info!(target: targets::CLAUSE_DB, "Clause added after a solve, clearing the valuation");
            self.clear_choices();
        }
        self.state = FormulaState::Input;

        let mut literals: CClause = Vec::with_capacity(ints.len());
        for int in ints {
            let literal = self.literal_from_int(*int)?;
            if !literals.contains(&literal) {
                literals.push(literal);
            }
        }

        if literals.is_tautology() {
            log::trace!(target: targets::CLAUSE_DB, "Tautology skipped: {ints:?}");
            return Ok(ClauseOk::Tautology);
        }

        if self.clause_db.contains(&literals) {
            log::trace!(target: targets::CLAUSE_DB, "Duplicate skipped: {ints:?}");
            return Ok(ClauseOk::Duplicate);
        }

        let key = self
            .clause_db
            .store(literals, ClauseSource::Original, &mut self.variable_db);
        Ok(ClauseOk::Added(key))
    }
}
