/*!
An iterator over the doubling sequence of restart ceilings.

The ceiling doubles until it reaches an absolute bound.
At that point the absolute bound doubles and the ceiling resets to its minimum.
So, from a ceiling of 1 and an absolute bound of 2 the sequence continues 2, 1, 2, 4, 1, 2, 4, 8, 1, …

The shape of the sequence is close to that of the [luby sequence](https://oeis.org/A182105), with runs of geometric growth that reach further with each reset.
*/

/// Representation used for ceilings.
pub type CeilingRepresentation = u32;

/// The current ceiling, together with the bound on the ceiling and the value to reset to.
#[derive(Clone, Debug)]
pub struct Ceiling {
    current: CeilingRepresentation,
    absolute: CeilingRepresentation,
    minimum: CeilingRepresentation,
}

impl Ceiling {
    /// A sequence positioned at `current`, where `current` is also the value a reset returns to.
    pub fn new(current: CeilingRepresentation, absolute: CeilingRepresentation) -> Self {
        let current = current.max(1);
        Ceiling {
            current,
            absolute: absolute.max(current),
            minimum: current,
        }
    }

    pub fn current(&self) -> CeilingRepresentation {
        self.current
    }

    pub fn absolute(&self) -> CeilingRepresentation {
        self.absolute
    }
}

impl Default for Ceiling {
    fn default() -> Self {
        Ceiling::new(1, 2)
    }
}

impl Iterator for Ceiling {
    type Item = CeilingRepresentation;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current >= self.absolute {
            self.absolute = self.absolute.checked_mul(2)?;
            self.current = self.minimum;
        } else {
            self.current = self.current.checked_mul(2)?.min(self.absolute);
        }

        Some(self.current)
    }
}
