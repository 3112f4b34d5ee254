//! Dynamic largest combined sum.
//!
//! Chooses the variable with the most occurrences (of either polarity) in active clauses, taking the first such variable on a tie.
//! The polarity is true if the variable occurs positively more often than negatively, and false otherwise.

use crate::{
    branching::{unassigned_counts, BranchingStrategy},
    formula::Formula,
    structures::literal::Literal,
};

pub struct Dlcs;

impl BranchingStrategy for Dlcs {
    fn choose(&mut self, formula: &Formula) -> Option<Literal> {
        let mut best: Option<(Literal, usize)> = None;

        for (variable, [negative, positive]) in unassigned_counts(formula) {
            let combined = negative + positive;
            if combined > best.map_or(0, |(_, count)| count) {
                best = Some((Literal::new(variable, positive > negative), combined));
            }
        }

        best.map(|(literal, _)| literal)
    }

    fn name(&self) -> &'static str {
        "dlcs"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branching::tests::{as_int, formula_with};

    #[test]
    fn largest_combined_sum() {
        let formula = formula_with(&[&[1, -2], &[-2, 3], &[2, -3], &[-2, -3]], &[]);
        assert_eq!(as_int(&formula, Dlcs.choose(&formula)), Some(-2));
    }

    #[test]
    fn ties_go_to_the_first_variable_and_false() {
        let formula = formula_with(&[&[1, 2], &[-1, -2]], &[]);
        assert_eq!(as_int(&formula, Dlcs.choose(&formula)), Some(-1));
    }

    #[test]
    fn assigned_variables_are_skipped() {
        let formula = formula_with(&[&[1, -2], &[-2, 3], &[2, -3], &[-2, -3]], &[-2]);
        assert_eq!(as_int(&formula, Dlcs.choose(&formula)), Some(-3));
    }
}
