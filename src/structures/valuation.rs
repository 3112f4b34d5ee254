//! A valuation is something which stores some value of a variable, indexed by [VariableIndex].
//!
//! The canonical valuation is a slice of optional booleans, where the value of variable `v` is at index `v`.
//!
//! ```rust
//! # use heron_sat::structures::{literal::Literal, valuation::Valuation};
//! let valuation = vec![Some(true), None, Some(false)];
//!
//! assert_eq!(valuation.value_of(1), None);
//! assert_eq!(valuation.literal_value(&Literal::new(2, false)), Some(true));
//! ```

use crate::structures::{literal::Literal, variable::VariableIndex};

pub trait Valuation {
    /// The value of a variable, or None if the variable has no value (or is unknown to the valuation).
    fn value_of(&self, variable: VariableIndex) -> Option<bool>;

    /// The value of a literal on the valuation, if the variable of the literal has some value.
    fn literal_value(&self, literal: &Literal) -> Option<bool> {
        literal.value_on(self.value_of(literal.variable()))
    }

    /// Indices of variables without a value.
    fn unvalued_variables(&self) -> impl Iterator<Item = VariableIndex>;
}

impl Valuation for [Option<bool>] {
    fn value_of(&self, variable: VariableIndex) -> Option<bool> {
        self.get(variable as usize).copied().flatten()
    }

    fn unvalued_variables(&self) -> impl Iterator<Item = VariableIndex> {
        self.iter()
            .enumerate()
            .filter(|(_, value)| value.is_none())
            .map(|(index, _)| index as VariableIndex)
    }
}

impl Valuation for Vec<Option<bool>> {
    fn value_of(&self, variable: VariableIndex) -> Option<bool> {
        self.as_slice().value_of(variable)
    }

    fn unvalued_variables(&self) -> impl Iterator<Item = VariableIndex> {
        self.as_slice().unvalued_variables()
    }
}
