/*!
An independent check of a valuation against a collection of clauses.

The check is kept apart from the solve, and reads only the literals of each clause and the value of each variable.
So, a satisfying valuation reported by a solve may be confirmed without trusting watches, the trail, or any other structure of the solve.

```rust
# use heron_sat::verify::verify;
# use heron_sat::structures::literal::Literal;
# use heron_sat::types::err::VerifyError;
let clauses = vec![
    vec![Literal::new(0, true), Literal::new(1, false)],
    vec![Literal::new(1, true)],
];

assert!(verify(clauses.iter().map(|c| c.as_slice()), &[Some(true), Some(true)]).is_ok());
assert_eq!(
    verify(clauses.iter().map(|c| c.as_slice()), &[Some(false), Some(true)]),
    Err(VerifyError::Unsatisfied(0))
);
```
*/

use crate::{
    formula::Formula,
    structures::{literal::Literal, valuation::Valuation},
    types::err::{self, ErrorKind},
};

/// Checks every variable of the valuation has a value, and every clause has some literal true on the valuation.
///
/// Clauses are identified by their position in the given sequence.
pub fn verify<'c>(
    clauses: impl IntoIterator<Item = &'c [Literal]>,
    valuation: &[Option<bool>],
) -> Result<(), err::VerifyError> {
    if let Some(variable) = valuation.unvalued_variables().next() {
        return Err(err::VerifyError::Unassigned(variable));
    }

    for (index, clause) in clauses.into_iter().enumerate() {
        let satisfied = clause
            .iter()
            .any(|literal| valuation.literal_value(literal) == Some(true));
        if !satisfied {
            return Err(err::VerifyError::Unsatisfied(index));
        }
    }

    Ok(())
}

impl Formula {
    /// Checks the current valuation satisfies every original clause of the formula.
    pub fn verify(&self) -> Result<(), ErrorKind> {
        let valuation = self.variable_db.valuation();
        verify(
            self.clause_db.original_clauses().map(|clause| &**clause),
            &valuation,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unassigned_is_not_satisfying() {
        let clauses = [vec![Literal::new(0, true), Literal::new(1, true)]];

        assert_eq!(
            verify(clauses.iter().map(|c| c.as_slice()), &[Some(true), None]),
            Err(err::VerifyError::Unassigned(1))
        );
    }

    #[test]
    fn empty_clause_fails() {
        let clauses: [Vec<Literal>; 1] = [Vec::default()];
        assert_eq!(
            verify(clauses.iter().map(|c| c.as_slice()), &[]),
            Err(err::VerifyError::Unsatisfied(0))
        );
    }
}
