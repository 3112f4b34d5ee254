/*!
Reports for a formula.
*/

use crate::formula::FormulaState;

/// High-level reports regarding a solve.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The formula is satisfiable.
    Satisfiable,

    /// The formula is unsatisfiable.
    Unsatisfiable,

    /// Satisfiability of the formula is unknown, for some reason.
    Unknown,
}

impl From<FormulaState> for Report {
    fn from(value: FormulaState) -> Self {
        match value {
            FormulaState::Input | FormulaState::Solving | FormulaState::Unknown => Self::Unknown,
            FormulaState::Satisfiable => Self::Satisfiable,
            FormulaState::Unsatisfiable => Self::Unsatisfiable,
        }
    }
}

/// The DIMACS convention: `SATISFIABLE`, `UNSATISFIABLE`, or `UNKNOWN`.
impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "SATISFIABLE"),
            Self::Unsatisfiable => write!(f, "UNSATISFIABLE"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}
