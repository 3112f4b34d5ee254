/*!
Strategies for choosing a literal to decide on.

A strategy is consulted by the [solve](crate::procedures::solve) only when no literal is implied and some clause is open, and must suggest a literal whose variable has no value.
Strategies which return None leave the choice to the solve, which then chooses the first variable without a value, with negative polarity.

Most strategies are guided by occurrences in *active* clauses.
A clause is active if no literal of the clause is true on the current valuation, and the *size* of an active clause is the count of its literals without a value.

| Strategy | Chooses |
|----------|---------|
| [DLCS](dlcs) | the variable with the most occurrences in active clauses |
| [DLIS](dlis) | the literal with the most occurrences in active clauses |
| [Böhm](bohm) | the variable with the lexicographically greatest weighted counts, by size |
| [Jeroslow-Wang](jeroslow_wang) | the literal with the greatest sum of 2^-size over active clauses |
| [MOMS](moms) | the variable with most occurrences in active clauses of minimum size |
| [VSIDS](vsids) | the variable of greatest activity, with a random polarity |

```rust
# use heron_sat::branching::{self, BranchingStrategy};
# use heron_sat::config::{Branching, Config};
# use heron_sat::formula::Formula;
# use heron_sat::reports::Report;
let mut config = Config::default();
config.branching.value = Branching::MOMS;

let mut strategy = branching::from_config(&config);
assert_eq!(strategy.name(), "moms");

let mut the_formula = Formula::from_config(config);
let _ = the_formula.add_clause([1, 2]);
let _ = the_formula.add_clause([-1, 2]);
let _ = the_formula.add_clause([-2, 3]);

assert_eq!(the_formula.solve_with(strategy.as_mut()), Ok(Report::Satisfiable));
```
*/

pub mod bohm;
pub mod dlcs;
pub mod dlis;
pub mod jeroslow_wang;
pub mod moms;
pub mod vsids;

use crate::{
    config::{Branching, Config},
    formula::Formula,
    structures::{literal::Literal, variable::VariableIndex},
};

/// A strategy for choosing a literal to decide on.
pub trait BranchingStrategy {
    /// A literal whose variable has no value, if the strategy has some suggestion.
    fn choose(&mut self, formula: &Formula) -> Option<Literal>;

    /// The name of the strategy.
    fn name(&self) -> &'static str;
}

/// The strategy named in the configuration, parameterised by the configuration.
pub fn from_config(config: &Config) -> Box<dyn BranchingStrategy> {
    match config.branching.value {
        Branching::DLCS => Box::new(dlcs::Dlcs),
        Branching::DLIS => Box::new(dlis::Dlis),
        Branching::Bohm => Box::new(bohm::Bohm::new(
            config.bohm_alpha.value,
            config.bohm_beta.value,
        )),
        Branching::JeroslowWang => Box::new(jeroslow_wang::JeroslowWang),
        Branching::MOMS => Box::new(moms::Moms::new(config.moms_k.value)),
        Branching::VSIDS => Box::new(vsids::Vsids::from_seed(config.seed.value)),
    }
}

/// The literals without a value of each active clause, skipping clauses without such literals.
pub(crate) fn active_clauses(formula: &Formula) -> impl Iterator<Item = Vec<Literal>> + '_ {
    formula.clause_db.all_clauses().filter_map(|clause| {
        let mut free = Vec::with_capacity(clause.len());
        for literal in clause.iter() {
            match formula.variable_db.literal_value(*literal) {
                Some(true) => return None,
                Some(false) => {}
                None => free.push(*literal),
            }
        }
        match free.is_empty() {
            true => None,
            false => Some(free),
        }
    })
}

/// Occurrences of each variable in active clauses, as `[negative, positive]` counts indexed by variable.
pub(crate) fn occurrence_counts(formula: &Formula) -> Vec<[usize; 2]> {
    let mut counts = vec![[0, 0]; formula.variable_db.count()];
    for clause in active_clauses(formula) {
        for literal in clause {
            counts[literal.variable() as usize][literal.polarity() as usize] += 1;
        }
    }
    counts
}

/// Variables without a value, paired with their active occurrence counts.
pub(crate) fn unassigned_counts(
    formula: &Formula,
) -> impl Iterator<Item = (VariableIndex, [usize; 2])> + '_ {
    let counts = occurrence_counts(formula);
    formula
        .variable_db
        .unassigned()
        .map(move |variable| (variable, counts[variable as usize]))
}
