/*!
Methods for removing choices from the trail.

# Overview

There are two ways to backtrack after a conflict:

- [Non-chronological](Formula::non_chronological_backtrack), given the cut of a learnt clause.
  Choices are removed from the trail until the most recent choice whose literal is in the cut has been removed.
  On the remaining valuation the learnt clause asserts the negation of that literal.
- [Chronological](Formula::backtrack), when no clause was learnt.
  Choices are removed until the most recent retryable decision has been removed, and the decision is then re-made with the opposite polarity as a choice which may not be retried.

In either case, if the trail is exhausted the formula is unsatisfiable.

Removing a choice clears the value of its variable, and with it the implying clause.
*/

use crate::{
    db::trail::Choice,
    formula::Formula,
    misc::log::targets::{self},
    structures::literal::Literal,
};

impl Formula {
    /// Removes the most recent choice from the trail, clearing the value of its variable.
    pub fn undo_choice(&mut self) -> Option<Choice> {
        let choice = self.trail.pop()?;
        self.variable_db.drop_value(choice.literal.variable());
        Some(choice)
    }

    /// Removes every choice from the trail.
    pub fn clear_choices(&mut self) {
        while self.undo_choice().is_some() {}
        self.trail.q_head = 0;
    }

    /// Removes choices until the most recent choice whose literal is in the cut has been removed.
    ///
    /// Returns true if some choice was in the cut, and false if the trail was exhausted without finding such a choice.
    pub fn non_chronological_backtrack(&mut self, cut: &[Literal]) -> bool {
        while let Some(choice) = self.undo_choice() {
            if cut.contains(&choice.literal) {
                log::debug!(target: targets::BACKJUMP, "Backjumped past {}, trail length {}", choice.literal, self.trail.len());
                return true;
            }
        }

        log::debug!(target: targets::BACKJUMP, "Trail exhausted without meeting the cut");
        false
    }

    /// Removes choices until the most recent retryable decision has been removed.
    ///
    /// Returns the negation of the decision, to be asserted as a choice which may not be retried, or None if no decision was found.
    pub fn backtrack(&mut self) -> Option<Literal> {
        while let Some(choice) = self.undo_choice() {
            if choice.decision {
                let flipped = choice.literal.negate();
                log::debug!(target: targets::BACKJUMP, "Flipped decision {} to {flipped}", choice.literal);
                return Some(flipped);
            }
        }

        log::debug!(target: targets::BACKJUMP, "No decision to flip");
        None
    }
}
