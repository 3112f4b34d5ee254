//! Dynamic largest individual sum.
//!
//! Chooses the literal with the most occurrences in active clauses, preferring the positive literal of a variable when both polarities occur equally often.

use crate::{
    branching::{unassigned_counts, BranchingStrategy},
    formula::Formula,
    structures::literal::Literal,
};

pub struct Dlis;

impl BranchingStrategy for Dlis {
    fn choose(&mut self, formula: &Formula) -> Option<Literal> {
        let mut best: Option<(Literal, usize)> = None;

        for (variable, [negative, positive]) in unassigned_counts(formula) {
            let individual = std::cmp::max(negative, positive);
            if individual > best.map_or(0, |(_, count)| count) {
                best = Some((Literal::new(variable, positive >= negative), individual));
            }
        }

        best.map(|(literal, _)| literal)
    }

    fn name(&self) -> &'static str {
        "dlis"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branching::tests::{as_int, formula_with};

    #[test]
    fn largest_individual_sum() {
        // 2 occurs most often overall, while -3 occurs most often as a literal.
        let formula = formula_with(
            &[&[2, 1], &[-2, 4], &[2, -3], &[-3, 1], &[-3, -4], &[-2, 5]],
            &[],
        );
        assert_eq!(as_int(&formula, Dlis.choose(&formula)), Some(-3));
    }

    #[test]
    fn ties_prefer_positive() {
        let formula = formula_with(&[&[1, 2], &[-1, -2]], &[]);
        assert_eq!(as_int(&formula, Dlis.choose(&formula)), Some(1));
    }
}
