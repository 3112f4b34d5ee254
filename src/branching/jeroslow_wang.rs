//! The Jeroslow-Wang heuristic.
//!
//! Each literal *l* whose variable has no value is weighted by the sum of 2^-size over the active clauses containing *l*, and a literal of greatest weight is chosen.

use crate::{
    branching::{active_clauses, BranchingStrategy},
    formula::Formula,
    structures::literal::Literal,
};

pub struct JeroslowWang;

impl BranchingStrategy for JeroslowWang {
    fn choose(&mut self, formula: &Formula) -> Option<Literal> {
        let mut weights = vec![[0.0_f64; 2]; formula.variable_db.count()];
        for clause in active_clauses(formula) {
            let weight = (-(clause.len() as f64)).exp2();
            for literal in clause {
                weights[literal.variable() as usize][literal.polarity() as usize] += weight;
            }
        }

        let mut best: Option<(Literal, f64)> = None;
        for variable in formula.variable_db.unassigned() {
            let [negative, positive] = weights[variable as usize];
            for (polarity, weight) in [(true, positive), (false, negative)] {
                if weight > best.map_or(0.0, |(_, best_weight)| best_weight) {
                    best = Some((Literal::new(variable, polarity), weight));
                }
            }
        }

        best.map(|(literal, _)| literal)
    }

    fn name(&self) -> &'static str {
        "jw"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branching::tests::{as_int, formula_with};

    #[test]
    fn short_clauses_weigh_more() {
        // 3 occurs in two binary clauses (1/2), and 1 in a binary and a ternary clause (3/8).
        let formula = formula_with(&[&[1, 3], &[2, 3], &[1, -2, 4], &[-2, 4, 5]], &[]);
        assert_eq!(as_int(&formula, JeroslowWang.choose(&formula)), Some(3));
    }

    #[test]
    fn weights_use_active_size() {
        // With 3 false, the clause containing 2 has a single literal without a value.
        let formula = formula_with(&[&[1, 4, 5], &[2, 3], &[1, 5, 6]], &[-3]);
        assert_eq!(as_int(&formula, JeroslowWang.choose(&formula)), Some(2));
    }
}
