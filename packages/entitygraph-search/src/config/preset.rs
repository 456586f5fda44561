//! Preset configurations
//!
//! A preset fixes every search limit at once. Individual limits can then be
//! overridden through the builder methods or a YAML `overrides` block.

use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Search limit preset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Typeahead and UI lookups
    ///
    /// - max_hops_limit=4
    /// - default_skip_limit=100
    /// - max_results=50
    Interactive,

    /// Service requests
    ///
    /// - max_hops_limit=16
    /// - default_skip_limit=1000
    /// - max_results=1000
    Balanced,

    /// Offline analysis: no skip limit, no result cap
    ///
    /// - max_hops_limit=1024
    #[default]
    Exhaustive,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Interactive, Preset::Balanced, Preset::Exhaustive];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Interactive => "interactive",
            Self::Balanced => "balanced",
            Self::Exhaustive => "exhaustive",
        }
    }
}

impl FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "interactive" => Ok(Self::Interactive),
            "balanced" => Ok(Self::Balanced),
            "exhaustive" => Ok(Self::Exhaustive),
            _ => Err(ConfigError::UnknownPreset(s.to_string())),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_parse() {
        assert_eq!("interactive".parse::<Preset>().unwrap(), Preset::Interactive);
        assert_eq!("BALANCED".parse::<Preset>().unwrap(), Preset::Balanced);
        assert!(matches!(
            "turbo".parse::<Preset>(),
            Err(ConfigError::UnknownPreset(_))
        ));
    }

    #[test]
    fn test_preset_display_round_trip() {
        for preset in Preset::ALL {
            assert_eq!(preset.to_string().parse::<Preset>().unwrap(), preset);
        }
    }

    #[test]
    fn test_default_is_exhaustive() {
        assert_eq!(Preset::default(), Preset::Exhaustive);
    }
}
