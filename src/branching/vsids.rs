//! Activity based choice, after VSIDS (variable state independent decay sum).
//!
//! The variable without a value of greatest combined activity (of both polarities) is chosen, with polarity chosen at random.
//! Activity is bumped during [analysis](crate::procedures::analysis) and decayed by the [scheduler](crate::procedures::schedulers), so the choice favours variables involved in recent conflicts.
//!
//! If every variable without a value has no activity, as at the start of a solve, the choice is deferred to [DLCS](crate::branching::dlcs).
//!
//! The source of randomness is a [MinimalPCG32] seeded from the configuration, so choices are reproducible for a given seed.
//!
//! See [Understanding VSIDS branching heuristics in conflict-driven clause-learning sat solvers](https://arxiv.org/abs/1506.08905) for an overview of VSIDS.

use rand::{Rng, SeedableRng};

use crate::{
    branching::{dlcs::Dlcs, BranchingStrategy},
    config::Activity,
    formula::Formula,
    generic::minimal_pcg::MinimalPCG32,
    structures::{literal::Literal, variable::VariableIndex},
};

pub struct Vsids {
    rng: MinimalPCG32,
}

impl Vsids {
    pub fn from_seed(seed: u64) -> Self {
        Vsids {
            rng: MinimalPCG32::from_seed(seed.to_le_bytes()),
        }
    }
}

impl BranchingStrategy for Vsids {
    fn choose(&mut self, formula: &Formula) -> Option<Literal> {
        let mut best: Option<(VariableIndex, Activity)> = None;

        for variable in formula.variable_db.unassigned() {
            let activity = formula.variable_db.get(variable).combined_activity();
            if activity > best.map_or(0.0, |(_, best_activity)| best_activity) {
                best = Some((variable, activity));
            }
        }

        match best {
            Some((variable, _)) => Some(Literal::new(variable, self.rng.random_bool(0.5))),
            None => Dlcs.choose(formula),
        }
    }

    fn name(&self) -> &'static str {
        "vsids"
    }
}
