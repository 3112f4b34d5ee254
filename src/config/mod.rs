/*!
Configuration of a formula.

All configuration for a formula is contained within the formula, and read throughout a solve.
Most options are [ConfigOption]s, which pair a value with a name and bounds.

```rust
# use heron_sat::config::{Branching, Config};
let mut config = Config::default();
config.branching.value = Branching::JeroslowWang;
assert!(!config.decay_factor.set(1.5));
```
*/

mod config_option;
pub use config_option::ConfigOption;

mod branching;
pub use branching::Branching;

/// Representation of an activity score.
pub type Activity = f64;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The strategy used to choose a literal when no literal is implied.
    pub branching: ConfigOption<Branching>,

    /// The weight given to counts of clauses of the shortest size under Böhm's heuristic.
    pub bohm_alpha: ConfigOption<f64>,

    /// The weight given to the smaller of the two polarity counts under Böhm's heuristic.
    pub bohm_beta: ConfigOption<f64>,

    /// The factor by which every activity is multiplied on a decay.
    pub decay_factor: ConfigOption<Activity>,

    /// The number of propagation steps between decays.
    pub decay_interval: ConfigOption<u32>,

    /// The exponent of the weight given to the combined count under MOMS.
    pub moms_k: ConfigOption<u32>,

    /// Permit (scheduled) restarts.
    pub restart: ConfigOption<bool>,

    /// The initial count of learnt clauses permitted before a restart.
    pub restart_ceiling: ConfigOption<u32>,

    /// The initial bound on the restart ceiling, after which the ceiling resets.
    pub absolute_ceiling: ConfigOption<u32>,

    /// The seed of the source of randomness used by randomised strategies.
    pub seed: ConfigOption<u64>,

    /// The time limit for a solve, if any.
    pub time_limit: Option<std::time::Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            branching: ConfigOption {
                name: "branching",
                min: Branching::MIN,
                max: Branching::MAX,
                value: Branching::DLCS,
            },

            bohm_alpha: ConfigOption {
                name: "bohm_alpha",
                min: 0.0,
                max: f64::MAX,
                value: 1.0,
            },

            bohm_beta: ConfigOption {
                name: "bohm_beta",
                min: 0.0,
                max: f64::MAX,
                value: 2.0,
            },

            decay_factor: ConfigOption {
                name: "decay_factor",
                min: Activity::MIN_POSITIVE,
                max: 1.0,
                value: 0.95,
            },

            decay_interval: ConfigOption {
                name: "decay_interval",
                min: 1,
                max: u32::MAX,
                value: 65_536,
            },

            moms_k: ConfigOption {
                name: "moms_k",
                min: 0,
                max: 32,
                value: 2,
            },

            restart: ConfigOption {
                name: "restart",
                min: false,
                max: true,
                value: true,
            },

            restart_ceiling: ConfigOption {
                name: "restart_ceiling",
                min: 1,
                max: u32::MAX,
                value: 1,
            },

            absolute_ceiling: ConfigOption {
                name: "absolute_ceiling",
                min: 1,
                max: u32::MAX,
                value: 2,
            },

            seed: ConfigOption {
                name: "seed",
                min: u64::MIN,
                max: u64::MAX,
                value: 0,
            },

            time_limit: None,
        }
    }
}
