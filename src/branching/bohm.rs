//! Böhm's heuristic.
//!
//! For a variable *x* and size *i*, let *hᵢ(x)* count the active clauses of size *i* which contain *x*.
//! Each variable without a value is given the vector of weights, over each size *i* of active clause in increasing order:
//!
//! > *Hᵢ(x) = α · max(hᵢ(x), hᵢ(¬x)) + β · min(hᵢ(x), hᵢ(¬x))*
//!
//! The variable with the lexicographically greatest vector is chosen, so occurrences in short clauses dominate.
//! The polarity is true if the variable occurs positively more often than negatively, across all sizes.

use std::collections::BTreeMap;

use crate::{
    branching::{active_clauses, BranchingStrategy},
    formula::Formula,
    structures::{literal::Literal, variable::VariableIndex},
};

pub struct Bohm {
    alpha: f64,
    beta: f64,
}

impl Bohm {
    pub fn new(alpha: f64, beta: f64) -> Self {
        Bohm { alpha, beta }
    }

    fn weight(&self, [negative, positive]: [usize; 2]) -> f64 {
        let (low, high) = match negative < positive {
            true => (negative, positive),
            false => (positive, negative),
        };
        self.alpha * high as f64 + self.beta * low as f64
    }
}

impl Default for Bohm {
    fn default() -> Self {
        Bohm::new(1.0, 2.0)
    }
}

impl BranchingStrategy for Bohm {
    fn choose(&mut self, formula: &Formula) -> Option<Literal> {
        // Counts by size, then variable.
        let mut counts: BTreeMap<usize, BTreeMap<VariableIndex, [usize; 2]>> = BTreeMap::new();
        let mut totals = vec![[0_usize; 2]; formula.variable_db.count()];

        for clause in active_clauses(formula) {
            let size = clause.len();
            let by_variable = counts.entry(size).or_default();
            for literal in clause {
                by_variable.entry(literal.variable()).or_default()[literal.polarity() as usize] += 1;
                totals[literal.variable() as usize][literal.polarity() as usize] += 1;
            }
        }

        let mut best: Option<(VariableIndex, Vec<f64>)> = None;

        for variable in formula.variable_db.unassigned() {
            let [negative, positive] = totals[variable as usize];
            if negative + positive == 0 {
                continue;
            }

            let weights = counts
                .values()
                .map(|by_variable| {
                    self.weight(by_variable.get(&variable).copied().unwrap_or_default())
                })
                .collect::<Vec<_>>();

            let improves = match &best {
                None => true,
                Some((_, best_weights)) => weights
                    .partial_cmp(best_weights)
                    .is_some_and(|ordering| ordering.is_gt()),
            };

            if improves {
                best = Some((variable, weights));
            }
        }

        best.map(|(variable, _)| {
            let [negative, positive] = totals[variable as usize];
            Literal::new(variable, positive > negative)
        })
    }

    fn name(&self) -> &'static str {
        "bohm"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branching::tests::{as_int, formula_with};

    #[test]
    fn short_clauses_dominate() {
        // 3 occurs in every long clause, while 1 occurs in the only binary clause.
        let formula = formula_with(
            &[&[1, 2], &[3, 4, 5], &[3, -4, -5], &[3, 4, -5], &[-1, 3, 5]],
            &[],
        );
        assert_eq!(as_int(&formula, Bohm::default().choose(&formula)), Some(-1));
    }

    #[test]
    fn polarity_by_totals() {
        // 1 and 2 tie, and 1 occurs only positively.
        let formula = formula_with(&[&[1, 2], &[1, -2], &[1, 3]], &[]);
        assert_eq!(as_int(&formula, Bohm::default().choose(&formula)), Some(1));
    }

    #[test]
    fn satisfied_clauses_are_ignored() {
        // Without 2, the binary clause would favour 1.
        let formula = formula_with(&[&[1, 2], &[-3, 4, 5], &[-3, -4, 5]], &[2]);
        assert_eq!(as_int(&formula, Bohm::default().choose(&formula)), Some(-4));
    }
}
