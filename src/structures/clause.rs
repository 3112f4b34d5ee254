//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//!
//! ```rust
//! # use heron_sat::structures::{clause::Clause, literal::Literal};
//! let clause = vec![Literal::new(2, true), Literal::new(0, false), Literal::new(1, false)];
//!
//! assert_eq!(clause.size(), 3);
//!
//! let mut valuation = vec![Some(true), Some(true), Some(false)];
//! assert!(!clause.satisfied_on(&valuation));
//!
//! valuation[1] = None;
//! assert_eq!(clause.asserts(&valuation), Some(Literal::new(1, false)));
//! ```
//!
//! - The empty clause is always false (never true).
//! - A clause with a single literal is a 'unit' clause.

use crate::structures::{literal::Literal, valuation::Valuation};

/// The canonical representation of a clause.
pub type CClause = Vec<Literal>;

/// The clause trait.
pub trait Clause {
    /// Some string representation of the clause.
    fn as_string(&self) -> String;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over the literals of the clause.
    fn literals(&self) -> impl Iterator<Item = &Literal>;

    /// The clause with literals sorted and duplicate literals removed.
    ///
    /// Two clauses are equal as sets of literals exactly when their canonical forms are equal.
    fn canonical(&self) -> CClause;

    /// Whether the clause contains some literal together with its negation.
    fn is_tautology(&self) -> bool;

    /// Whether some literal of the clause is true on the given valuation.
    fn satisfied_on(&self, valuation: &impl Valuation) -> bool;

    /// The literal asserted by the clause on a given valuation, if one such literal exists. \
    /// In detail, returns:
    /// - Some(*l*), if *l* has no value on the given valuation and every other literal of the clause is false on the valuation.
    /// - None, otherwise.
    fn asserts(&self, valuation: &impl Valuation) -> Option<Literal>;
}

impl Clause for [Literal] {
    fn as_string(&self) -> String {
        let mut the_string = String::from("(");
        for literal in self {
            the_string.push_str(&format!(" {literal} "));
        }
        the_string.push(')');
        the_string
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.iter()
    }

    fn canonical(&self) -> CClause {
        let mut canonical = self.to_vec();
        canonical.sort_unstable();
        canonical.dedup();
        canonical
    }

    fn is_tautology(&self) -> bool {
        let canonical = self.canonical();
        // Sorted by variable, so complementary literals are adjacent.
        canonical
            .windows(2)
            .any(|pair| pair[0].variable() == pair[1].variable())
    }

    fn satisfied_on(&self, valuation: &impl Valuation) -> bool {
        self.iter()
            .any(|literal| valuation.literal_value(literal) == Some(true))
    }

    fn asserts(&self, valuation: &impl Valuation) -> Option<Literal> {
        let mut asserted = None;
        for literal in self {
            match valuation.literal_value(literal) {
                Some(true) => return None,
                Some(false) => {}
                None => match asserted {
                    Some(_) => return None,
                    None => asserted = Some(*literal),
                },
            }
        }
        asserted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_collapses_duplicates() {
        let clause = vec![
            Literal::new(3, true),
            Literal::new(1, false),
            Literal::new(3, true),
        ];

        assert_eq!(
            clause.canonical(),
            vec![Literal::new(1, false), Literal::new(3, true)]
        );
        assert!(!clause.is_tautology());
    }

    #[test]
    fn tautology() {
        let clause = vec![
            Literal::new(0, true),
            Literal::new(2, true),
            Literal::new(0, false),
        ];
        assert!(clause.is_tautology());
    }

    #[test]
    fn empty_clause_is_false() {
        let clause: Vec<Literal> = Vec::default();
        let valuation: Vec<Option<bool>> = Vec::default();

        assert!(!clause.satisfied_on(&valuation));
        assert_eq!(clause.asserts(&valuation), None);
    }
}
