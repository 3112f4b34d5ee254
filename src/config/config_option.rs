/// A configurable value, paired with a name and the bounds the value should be kept within.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone + PartialOrd> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }

    /// Sets the value of the option, if the value is within bounds.
    ///
    /// Returns whether the value was set.
    pub fn set(&mut self, value: T) -> bool {
        match self.min <= value && value <= self.max {
            true => {
                self.value = value;
                true
            }
            false => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_set() {
        let mut option = ConfigOption {
            name: "decay_factor",
            min: f64::MIN_POSITIVE,
            max: 1.0,
            value: 0.95,
        };

        assert!(!option.set(0.0));
        assert!(!option.set(1.5));
        assert_eq!(option.value, 0.95);

        assert!(option.set(0.5));
        assert_eq!(option.value, 0.5);
        assert_eq!(option.min_max(), (f64::MIN_POSITIVE, 1.0));
    }
}
