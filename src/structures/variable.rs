/*!
(The internal representation of) a variable.

Each variable has an external [id](VariableId), a positive integer taken from the input, and an internal [index](VariableIndex) into the [variable database](crate::db::variable::VariableDB).
The indices of a formula with *m* variables are exactly [0..*m*), so indices may be used to index a structure, e.g. a valuation.

Alongside its value, a variable records:
- The clause which implied the current value, if the value was implied.
  A decided value (or a value given by flipping a decision) has no implying clause.
- The clauses in which the variable occurs, one list for each polarity.
  These are keys into the [clause database](crate::db::clause::ClauseDB), and so do not own the clauses.
- An activity for each polarity, bumped when the variable is involved in a conflict and periodically decayed.
*/

use crate::{config::Activity, db::ClauseKey};

/// The external id of a variable, a positive integer.
pub type VariableId = u32;

/// The index of a variable in the variable database.
pub type VariableIndex = u32;

/// A variable, with a value and a record of the clauses it occurs in.
#[derive(Clone, Debug)]
pub struct Variable {
    pub(crate) id: VariableId,
    pub(crate) value: Option<bool>,
    pub(crate) implicated_by: Option<ClauseKey>,
    pub(crate) positive_occurrences: Vec<ClauseKey>,
    pub(crate) negative_occurrences: Vec<ClauseKey>,
    pub(crate) positive_activity: Activity,
    pub(crate) negative_activity: Activity,
}

impl Variable {
    /// A fresh variable, without a value and with no occurrences.
    pub fn new(id: VariableId) -> Self {
        Variable {
            id,
            value: None,
            implicated_by: None,
            positive_occurrences: Vec::default(),
            negative_occurrences: Vec::default(),
            positive_activity: 0.0,
            negative_activity: 0.0,
        }
    }

    pub fn id(&self) -> VariableId {
        self.id
    }

    pub fn value(&self) -> Option<bool> {
        self.value
    }

    /// The clause which implied the current value of the variable, if any.
    pub fn implicated_by(&self) -> Option<ClauseKey> {
        self.implicated_by
    }

    /// Keys to the clauses in which the variable occurs with the given polarity.
    pub fn occurrences(&self, polarity: bool) -> &[ClauseKey] {
        match polarity {
            true => &self.positive_occurrences,
            false => &self.negative_occurrences,
        }
    }

    /// The activity of the variable with the given polarity.
    pub fn activity(&self, polarity: bool) -> Activity {
        match polarity {
            true => self.positive_activity,
            false => self.negative_activity,
        }
    }

    /// The sum of the activity of both polarities.
    pub fn combined_activity(&self) -> Activity {
        self.positive_activity + self.negative_activity
    }
}
