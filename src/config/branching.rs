/*!
Names for the available [branching strategies](crate::branching).

The name is kept in the configuration, and a strategy is built from the configuration with [from_config](crate::branching::from_config).
*/
use std::str::FromStr;

/// Supported branching strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[allow(clippy::upper_case_acronyms)]
pub enum Branching {
    /// Dynamic largest combined sum: the variable with the most occurrences in active clauses.
    DLCS = 0,

    /// Dynamic largest individual sum: the variable with the most occurrences of a single polarity in active clauses.
    DLIS,

    /// Böhm's heuristic: lexicographic comparison of weighted occurrence counts, by active clause size.
    Bohm,

    /// Jeroslow-Wang: occurrences weighted exponentially by the inverse of active clause size.
    JeroslowWang,

    /// Maximum occurrences in clauses of minimum size.
    MOMS,

    /// Activity based, with a random polarity.
    VSIDS,
}

impl Branching {
    /// The minimum Branching type.
    pub const MIN: Branching = Branching::DLCS;

    /// The maximum Branching type.
    pub const MAX: Branching = Branching::VSIDS;
}

impl std::fmt::Display for Branching {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DLCS => write!(f, "dlcs"),
            Self::DLIS => write!(f, "dlis"),
            Self::Bohm => write!(f, "bohm"),
            Self::JeroslowWang => write!(f, "jw"),
            Self::MOMS => write!(f, "moms"),
            Self::VSIDS => write!(f, "vsids"),
        }
    }
}

impl FromStr for Branching {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dlcs" => Ok(Self::DLCS),
            "dlis" => Ok(Self::DLIS),
            "bohm" | "böhm" => Ok(Self::Bohm),
            "jw" | "jeroslow-wang" => Ok(Self::JeroslowWang),
            "moms" => Ok(Self::MOMS),
            "vsids" => Ok(Self::VSIDS),

            _unknown_string => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_back() {
        for branching in [
            Branching::DLCS,
            Branching::DLIS,
            Branching::Bohm,
            Branching::JeroslowWang,
            Branching::MOMS,
            Branching::VSIDS,
        ] {
            assert_eq!(branching.to_string().parse(), Ok(branching));
        }

        assert_eq!("Jeroslow-Wang".parse(), Ok(Branching::JeroslowWang));
        assert_eq!("chaff".parse::<Branching>(), Err(()));
    }
}
