/*!
The trail: the sequence of assignments made during a solve, in order.

Each assignment is recorded as a [Choice], which notes:
- The literal assigned.
- Whether the choice is a decision which may be retried with the opposite polarity.
- The clause which implied the literal, if any.

Decisions made by a [branching strategy](crate::branching) are retryable and have no implying clause.
Flipped decisions, and values given to variables free on a satisfying assignment, are not retryable and have no implying clause.
Every other choice is implied by some clause.

The trail also holds the head of the propagation queue.
Choices at or after the head have yet to have their consequences examined.
*/

use crate::{db::ClauseKey, structures::literal::Literal};

/// An entry on the trail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Choice {
    /// The literal assigned.
    pub literal: Literal,

    /// Whether the choice is a decision, and so may be retried with the opposite polarity.
    pub decision: bool,

    /// The clause which implied the literal, if any.
    pub reason: Option<ClauseKey>,
}

#[derive(Default)]
pub struct Trail {
    pub choices: Vec<Choice>,
    pub q_head: usize,
}

impl Trail {
    /// Records a choice.
    pub fn push(&mut self, choice: Choice) {
        self.choices.push(choice)
    }

    /// Removes the most recent choice, if it exists, keeping the queue head within the trail.
    ///
    /// # Soundness
    /// Does not clear the *valuation* of the choice.
    pub fn pop(&mut self) -> Option<Choice> {
        let choice = self.choices.pop()?;
        self.q_head = std::cmp::min(self.q_head, self.choices.len());
        Some(choice)
    }

    /// The next choice whose consequences have not been examined, if it exists.
    pub fn queued(&self) -> Option<&Choice> {
        self.choices.get(self.q_head)
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// A count of retryable decisions on the trail.
    pub fn decision_count(&self) -> usize {
        self.choices.iter().filter(|choice| choice.decision).count()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Choice> {
        self.choices.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pop_keeps_queue_head_in_bounds() {
        let mut trail = Trail::default();
        for variable in 0..3 {
            trail.push(Choice {
                literal: Literal::new(variable, true),
                decision: variable == 0,
                reason: None,
            });
        }
        trail.q_head = 3;
        assert!(trail.queued().is_none());

        let popped = trail.pop();
        assert_eq!(popped.map(|choice| choice.literal), Some(Literal::new(2, true)));
        assert_eq!(trail.q_head, 2);

        trail.q_head = 1;
        trail.pop();
        assert_eq!(trail.q_head, 1);
        assert_eq!(trail.queued(), None);
        assert_eq!(trail.decision_count(), 1);

        trail.pop();
        assert!(trail.is_empty());
        assert_eq!(trail.q_head, 0);
        assert!(trail.pop().is_none());
    }
}
