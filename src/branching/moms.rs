//! Maximum occurrences in clauses of minimum size.
//!
//! Only active clauses of the least size are considered.
//! With *f(l)* the count of such clauses containing *l*, the variable maximising
//!
//! > *(f(x) + f(¬x)) · 2ᵏ + f(x) · f(¬x)*
//!
//! is chosen, with polarity true if *f(x) > f(¬x)*.

use crate::{
    branching::{active_clauses, BranchingStrategy},
    formula::Formula,
    structures::literal::Literal,
};

pub struct Moms {
    k: u32,
}

impl Moms {
    pub fn new(k: u32) -> Self {
        Moms { k }
    }
}

impl Default for Moms {
    fn default() -> Self {
        Moms::new(2)
    }
}

impl BranchingStrategy for Moms {
    fn choose(&mut self, formula: &Formula) -> Option<Literal> {
        let clauses = active_clauses(formula).collect::<Vec<_>>();
        let minimum_size = clauses.iter().map(|clause| clause.len()).min()?;

        let mut counts = vec![[0_u64; 2]; formula.variable_db.count()];
        for clause in clauses.iter().filter(|clause| clause.len() == minimum_size) {
            for literal in clause {
                counts[literal.variable() as usize][literal.polarity() as usize] += 1;
            }
        }

        let multiplier = 2_u64.saturating_pow(self.k);
        let mut best: Option<(Literal, u64)> = None;

        for variable in formula.variable_db.unassigned() {
            let [negative, positive] = counts[variable as usize];
            let score = (positive + negative)
                .saturating_mul(multiplier)
                .saturating_add(positive * negative);

            if score > best.map_or(0, |(_, best_score)| best_score) {
                best = Some((Literal::new(variable, positive > negative), score));
            }
        }

        best.map(|(literal, _)| literal)
    }

    fn name(&self) -> &'static str {
        "moms"
    }
}
