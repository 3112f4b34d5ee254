/*!
The formula, to which clauses are added and within which solves take place.

A formula owns:
- The [variable database](crate::db::variable), and so the current valuation.
- The [clause database](crate::db::clause), holding both original and learnt clauses.
- The [trail](crate::db::trail) of assignments made.
- The [configuration](crate::config) and [counters](Counters) of a solve.

# Example
```rust
# use heron_sat::formula::Formula;
# use heron_sat::config::Config;
# use heron_sat::reports::Report;
let mut the_formula = Formula::from_config(Config::default());

assert!(the_formula.add_clause([1, 2]).is_ok());
assert!(the_formula.add_clause([-1]).is_ok());

assert_eq!(the_formula.solve(), Ok(Report::Satisfiable));
assert_eq!(the_formula.report(), Report::Satisfiable);

assert_eq!(the_formula.value_of(1), Some(false));
assert_eq!(the_formula.value_of(2), Some(true));
assert!(the_formula.verify().is_ok());
```
*/

mod counters;
pub use counters::Counters;

use crate::{
    config::Config,
    db::{clause::ClauseDB, trail::Trail, variable::VariableDB},
    reports::Report,
    structures::{literal::IntLiteral, variable::VariableId},
};

/// The state of a formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormulaState {
    /// The formula allows input, and no solve has taken place since the last input.
    Input,

    /// A solve is in progress.
    Solving,

    /// The formula is known to be satisfiable, with a complete valuation.
    Satisfiable,

    /// The formula is known to be unsatisfiable.
    Unsatisfiable,

    /// A solve ended without determining satisfiability, e.g. as the time limit was reached.
    Unknown,
}

impl std::fmt::Display for FormulaState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Solving => write!(f, "Solving"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// A formula, together with everything required to determine its satisfiability.
pub struct Formula {
    /// The configuration of the formula.
    pub config: Config,

    /// Counters related to the formula and a solve.
    pub counters: Counters,

    /// The variable database.
    pub variable_db: VariableDB,

    /// The clause database.
    pub clause_db: ClauseDB,

    /// The trail of assignments.
    pub trail: Trail,

    /// The state of the formula.
    pub state: FormulaState,
}

impl Formula {
    /// A fresh formula, without any clauses, using the given configuration.
    pub fn from_config(config: Config) -> Self {
        Formula {
            counters: Counters::from_config(&config),
            config,
            variable_db: VariableDB::default(),
            clause_db: ClauseDB::default(),
            trail: Trail::default(),
            state: FormulaState::Input,
        }
    }

    /// A report on the state of the formula.
    pub fn report(&self) -> Report {
        Report::from(self.state)
    }

    /// The value of the variable with the given id, if the variable exists and has some value.
    pub fn value_of(&self, id: VariableId) -> Option<bool> {
        let index = self.variable_db.index_of(id)?;
        self.variable_db.value_of(index)
    }

    /// The current valuation as a sequence of integer literals, in order of variable id.
    ///
    /// Variables without a value are omitted.
    pub fn valuation_ints(&self) -> Vec<IntLiteral> {
        let mut valuation = self
            .variable_db
            .iter()
            .filter_map(|variable| {
                variable.value().map(|value| match value {
                    true => variable.id() as IntLiteral,
                    false => -(variable.id() as IntLiteral),
                })
            })
            .collect::<Vec<_>>();
        valuation.sort_unstable_by_key(|literal| literal.unsigned_abs());
        valuation
    }

    /// The current valuation as a string of integer literals, in order of variable id.
    pub fn valuation_string(&self) -> String {
        self.valuation_ints()
            .iter()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for Formula {
    fn default() -> Self {
        Formula::from_config(Config::default())
    }
}
