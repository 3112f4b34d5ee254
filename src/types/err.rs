//! Error types used in the library.
//!
//! - Some of these are internally expected. E.g. BCP errors are used to control the flow of a solve, and are never returned from [solve](crate::formula::Formula::solve).
//! - Some are external. E.g. a formula may return an `EmptyClause` error to highlight a request to add a clause with no literals, or a DIMACS file may be malformed.
//! - The remainder flag a broken contract between components. These are not expected during use.
//!
//! Names of the error enums (for the most part) overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::{db::ClauseKey, structures::variable::VariableIndex};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Analysis(AnalysisError),
    Build(BuildError),
    ClauseDB(ClauseDBError),
    Parse(ParseError),
    State(StateError),
    Verify(VerifyError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Analysis(e) => write!(f, "analysis error: {e:?}"),
            Self::Build(e) => write!(f, "build error: {e:?}"),
            Self::ClauseDB(e) => write!(f, "clause database error: {e:?}"),
            Self::Parse(e) => write!(f, "parse error: {e}"),
            Self::State(e) => write!(f, "state error: {e:?}"),
            Self::Verify(e) => write!(f, "verification error: {e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Noted errors during conflict analysis.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnalysisError {
    /// A literal of the conflicting clause has no value, so the clause is not falsified.
    UnassignedConflictLiteral(VariableIndex),

    /// No literal of the conflicting clause was found on the trail.
    MissingConflictVariable,
}

impl From<AnalysisError> for ErrorKind {
    fn from(e: AnalysisError) -> Self {
        ErrorKind::Analysis(e)
    }
}

/// Noted errors during boolean constraint propagation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BcpError {
    /// A conflict was found.
    /// This is expected from time to time, and a learning opportunity.
    Conflict(ClauseKey),
}

/// Noted errors when building a formula.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// A clause without any literals.
    /// Such a clause is trivially unsatisfiable, and is rejected rather than stored.
    EmptyClause,

    /// The integer zero was used as a literal.
    ZeroLiteral,

    /// An integer whose negation is not an integer literal, i.e. the minimum integer.
    LiteralOutOfRange,
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

/// Errors in the clause database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// A learnt clause contains a literal whose variable has no value.
    UnassignedLearnt,

    /// A learnt clause contains a literal which is true on the current valuation.
    SatisfiedLearnt,

    /// A clause is missing.
    Missing,
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some issue with the problem specification in a DIMACS input.
    ProblemSpecification,

    /// A token at the given line could not be read as a literal.
    Literal(usize),

    /// Some unspecific problem at a specific line.
    Line(usize),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProblemSpecification => write!(f, "malformed problem specification"),
            Self::Literal(line) => write!(f, "unreadable literal on line {line}"),
            Self::Line(line) => write!(f, "unreadable line {line}"),
        }
    }
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateError {
    /// Some clause is unsatisfied, yet no variable is free to be decided on.
    NoDecisionAvailable,

    /// A strategy suggested a literal whose variable already has a value.
    AssignedDecision(VariableIndex),
}

impl From<StateError> for ErrorKind {
    fn from(e: StateError) -> Self {
        ErrorKind::State(e)
    }
}

/// Failures found when checking a valuation against a formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerifyError {
    /// The clause at the given position has no literal true on the valuation.
    Unsatisfied(usize),

    /// The variable has no value.
    Unassigned(VariableIndex),
}

impl std::fmt::Display for VerifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsatisfied(index) => write!(f, "clause {index} is unsatisfied"),
            Self::Unassigned(variable) => write!(f, "variable {variable} has no value"),
        }
    }
}

impl From<VerifyError> for ErrorKind {
    fn from(e: VerifyError) -> Self {
        ErrorKind::Verify(e)
    }
}
