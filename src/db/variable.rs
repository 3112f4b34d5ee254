/*!
A database of variables.

The database stores each [Variable] at the position given by its [VariableIndex], together with a map from the external [VariableId] of each variable to its index.

Variables are created on first sight of their id, and are never removed.
So, the ids of the variables of a formula may be sparse (e.g. 3, 17, 400) while the indices are always [0..*m*).

Values are set and cleared only through [set_value](VariableDB::set_value) and [drop_value](VariableDB::drop_value), which keep the value and implying clause of a variable consistent:
a variable has an implying clause only while the variable has a value.
*/

use std::collections::HashMap;

use crate::{
    config::Activity,
    db::ClauseKey,
    structures::{
        literal::{IntLiteral, Literal},
        variable::{Variable, VariableId, VariableIndex},
    },
};

/// The variable database.
#[derive(Default)]
pub struct VariableDB {
    variables: Vec<Variable>,
    id_map: HashMap<VariableId, VariableIndex>,
}

impl VariableDB {
    /// The index of the variable with the given id, creating the variable if required.
    pub fn variable_for_id(&mut self, id: VariableId) -> VariableIndex {
        match self.id_map.get(&id) {
            Some(index) => *index,
            None => {
                let index = self.variables.len() as VariableIndex;
                self.variables.push(Variable::new(id));
                self.id_map.insert(id, index);
                index
            }
        }
    }

    /// The index of the variable with the given id, if the variable exists.
    pub fn index_of(&self, id: VariableId) -> Option<VariableIndex> {
        self.id_map.get(&id).copied()
    }

    /// The variable at the given index.
    ///
    /// # Panics
    /// If no variable has the index.
    /// Indices are only created by the database, so this is an invariant of the formula.
    pub fn get(&self, index: VariableIndex) -> &Variable {
        &self.variables[index as usize]
    }

    fn get_mut(&mut self, index: VariableIndex) -> &mut Variable {
        &mut self.variables[index as usize]
    }

    /// A count of variables in the database.
    pub fn count(&self) -> usize {
        self.variables.len()
    }

    /// An iterator over all variables, in order of index.
    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.variables.iter()
    }

    pub fn value_of(&self, index: VariableIndex) -> Option<bool> {
        self.get(index).value
    }

    /// The value of a literal on the current valuation.
    pub fn literal_value(&self, literal: Literal) -> Option<bool> {
        literal.value_on(self.value_of(literal.variable()))
    }

    /// Sets the variable of the literal to the polarity of the literal, noting the implying clause (if any).
    pub fn set_value(&mut self, literal: Literal, implicated_by: Option<ClauseKey>) {
        let variable = self.get_mut(literal.variable());
        variable.value = Some(literal.polarity());
        variable.implicated_by = implicated_by;
    }

    /// Clears the value of a variable, and with it the implying clause.
    pub fn drop_value(&mut self, index: VariableIndex) {
        let variable = self.get_mut(index);
        variable.value = None;
        variable.implicated_by = None;
    }

    /// Notes that the literal occurs in the clause with the given key.
    pub fn note_occurrence(&mut self, literal: Literal, key: ClauseKey) {
        let variable = self.get_mut(literal.variable());
        match literal.polarity() {
            true => variable.positive_occurrences.push(key),
            false => variable.negative_occurrences.push(key),
        }
    }

    /// Bumps the activity of the variable of the literal, for the polarity of the literal.
    pub fn bump_activity(&mut self, literal: Literal, bump: Activity) {
        let variable = self.get_mut(literal.variable());
        match literal.polarity() {
            true => variable.positive_activity += bump,
            false => variable.negative_activity += bump,
        }
    }

    /// Multiplies the activity of every variable, of both polarities, by the given factor.
    pub fn decay_activity(&mut self, factor: Activity) {
        for variable in &mut self.variables {
            variable.positive_activity *= factor;
            variable.negative_activity *= factor;
        }
    }

    /// The current valuation, indexed by [VariableIndex].
    pub fn valuation(&self) -> Vec<Option<bool>> {
        self.variables.iter().map(|variable| variable.value).collect()
    }

    /// Indices of variables without a value, in order.
    pub fn unassigned(&self) -> impl Iterator<Item = VariableIndex> + '_ {
        self.variables
            .iter()
            .enumerate()
            .filter(|(_, variable)| variable.value.is_none())
            .map(|(index, _)| index as VariableIndex)
    }

    /// The external (integer) representation of a literal.
    pub fn literal_as_int(&self, literal: Literal) -> IntLiteral {
        let id = self.get(literal.variable()).id as IntLiteral;
        match literal.polarity() {
            true => id,
            false => -id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_map_to_dense_indices() {
        let mut db = VariableDB::default();

        assert_eq!(db.variable_for_id(17), 0);
        assert_eq!(db.variable_for_id(3), 1);
        assert_eq!(db.variable_for_id(17), 0);
        assert_eq!(db.count(), 2);

        assert_eq!(db.index_of(3), Some(1));
        assert_eq!(db.index_of(4), None);
        assert_eq!(db.literal_as_int(Literal::new(0, false)), -17);
    }

    #[test]
    fn value_and_implication_cleared_together() {
        let mut db = VariableDB::default();
        let v = db.variable_for_id(1);

        db.set_value(Literal::new(v, false), Some(ClauseKey(4)));
        assert_eq!(db.value_of(v), Some(false));
        assert_eq!(db.get(v).implicated_by(), Some(ClauseKey(4)));
        assert_eq!(db.literal_value(Literal::new(v, true)), Some(false));

        db.drop_value(v);
        assert_eq!(db.value_of(v), None);
        assert_eq!(db.get(v).implicated_by(), None);
    }

    #[test]
    fn decay() {
        let mut db = VariableDB::default();
        let v = db.variable_for_id(1);

        db.bump_activity(Literal::new(v, true), 2.0);
        db.bump_activity(Literal::new(v, false), 1.0);
        db.decay_activity(0.5);

        assert_eq!(db.get(v).activity(true), 1.0);
        assert_eq!(db.get(v).activity(false), 0.5);
        assert_eq!(db.get(v).combined_activity(), 1.5);
    }
}
