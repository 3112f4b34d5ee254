/*!
Choosing a literal to assign when no literal is implied.

A literal is requested from the [branching strategy](crate::branching) of the solve.
If the strategy has no suggestion, the first variable without a value is chosen, with negative polarity.

The chosen literal is returned rather than assigned, so the solve may record it as a retryable decision.
*/

use crate::{
    branching::BranchingStrategy,
    formula::Formula,
    misc::log::targets::{self},
    structures::literal::Literal,
    types::err::{self, ErrorKind},
};

impl Formula {
    /// A literal whose variable has no value, chosen by the strategy where possible.
    ///
    /// Returns an error if no variable is without a value, or if the strategy suggests a literal whose variable has some value.
    pub fn make_decision(
        &mut self,
        strategy: &mut dyn BranchingStrategy,
    ) -> Result<Literal, ErrorKind> {
        let literal = match strategy.choose(self) {
            Some(literal) => {
                if self.variable_db.value_of(literal.variable()).is_some() {
                    log::error!(target: targets::BRANCHING, "{} chose {literal}, which has a value", strategy.name());
                    return Err(err::StateError::AssignedDecision(literal.variable()).into());
                }
                literal
            }

            None => match self.variable_db.unassigned().next() {
                Some(variable) => Literal::new(variable, false),
                None => return Err(err::StateError::NoDecisionAvailable.into()),
            },
        };

        self.counters.total_decisions += 1;
        log::trace!(target: targets::BRANCHING, "Decision {literal} by {}", strategy.name());
        Ok(literal)
    }
}
