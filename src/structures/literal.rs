//! Literals are variables paired with a (boolean) polarity.
//!
//! Internally, the variable of a literal is an [index](VariableIndex) into the variable database.
//! Externally, literals are given as non-zero integers, with the sign of the integer indicating polarity and the absolute value the [id](crate::structures::variable::VariableId) of the variable.
//! Conversion between the two takes place in the [variable database](crate::db::variable::VariableDB).
//!
//! ```rust
//! # use heron_sat::structures::literal::Literal;
//! let variable = 79;
//! let literal = Literal::new(variable, true);
//!
//! assert!(literal.polarity());
//! assert_eq!(literal.variable(), 79);
//! assert!(!literal.negate().polarity());
//! assert_eq!(-literal, literal.negate());
//! assert_eq!(literal.negate().negate(), literal);
//! ```
//!
//! Literals are ordered by variable and then polarity, with `false` (strictly) less than `true`.
//! This ordering is used to give a canonical form to clauses.

use crate::structures::variable::VariableIndex;

/// The external representation of a literal, as a non-zero integer.
pub type IntLiteral = i32;

/// A variable paired with a polarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    /// The variable of the literal.
    variable: VariableIndex,

    /// The polarity of the literal.
    polarity: bool,
}

impl Literal {
    /// A fresh literal, specified by pairing a variable with a boolean.
    pub fn new(variable: VariableIndex, polarity: bool) -> Self {
        Literal { variable, polarity }
    }

    /// The negation of the literal.
    pub fn negate(&self) -> Self {
        Literal {
            variable: self.variable,
            polarity: !self.polarity,
        }
    }

    /// The variable of the literal.
    pub fn variable(&self) -> VariableIndex {
        self.variable
    }

    /// The polarity of the literal.
    pub fn polarity(&self) -> bool {
        self.polarity
    }

    /// The value of the literal, given the value of its variable.
    ///
    /// Some(true) if the variable has the polarity of the literal, Some(false) if the variable has the opposite polarity, and None otherwise.
    pub fn value_on(&self, value: Option<bool>) -> Option<bool> {
        value.map(|value| value == self.polarity)
    }
}

impl std::ops::Neg for Literal {
    type Output = Literal;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "v{}", self.variable),
            false => write!(f, "-v{}", self.variable),
        }
    }
}
