//! SearchConfig - limits applied when a search is assembled and executed

use super::error::{ConfigError, ConfigResult};
use super::io::{ConfigExportV1, SearchConfigPatch, SUPPORTED_VERSIONS};
use super::preset::Preset;
use super::validation::{check_range, Validatable};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Hard ceiling for `max_hops_limit`
pub const MAX_HOPS_CEILING: u32 = 1024;

/// Search limits
///
/// `SearchConfig::default()` is the `Exhaustive` preset: no skip limit and
/// no result cap, so layers behave exactly as configured by each step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Preset this configuration started from
    pub preset: Preset,

    /// Largest `max_hops` any walk step may ask for
    pub max_hops_limit: u32,

    /// Skip limit for filter steps that do not set their own
    pub default_skip_limit: Option<u32>,

    /// Cap on hits returned by the search use case
    pub max_results: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::from_preset(Preset::default())
    }
}

impl SearchConfig {
    pub fn from_preset(preset: Preset) -> Self {
        match preset {
            Preset::Interactive => Self {
                preset,
                max_hops_limit: 4,
                default_skip_limit: Some(100),
                max_results: Some(50),
            },
            Preset::Balanced => Self {
                preset,
                max_hops_limit: 16,
                default_skip_limit: Some(1000),
                max_results: Some(1000),
            },
            Preset::Exhaustive => Self {
                preset,
                max_hops_limit: MAX_HOPS_CEILING,
                default_skip_limit: None,
                max_results: None,
            },
        }
    }

    pub fn max_hops_limit(mut self, limit: u32) -> Self {
        self.max_hops_limit = limit;
        self
    }

    pub fn default_skip_limit(mut self, limit: Option<u32>) -> Self {
        self.default_skip_limit = limit;
        self
    }

    pub fn max_results(mut self, limit: Option<usize>) -> Self {
        self.max_results = limit;
        self
    }

    /// Apply the fields set in `patch`
    pub fn apply_patch(mut self, patch: &SearchConfigPatch) -> Self {
        if let Some(v) = patch.max_hops_limit {
            self.max_hops_limit = v;
        }
        if let Some(v) = patch.default_skip_limit {
            self.default_skip_limit = v;
        }
        if let Some(v) = patch.max_results {
            self.max_results = v;
        }
        self
    }

    /// Load and validate a YAML v1 file
    pub fn from_yaml(path: &str) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        debug!("loading search config from {}", path);
        Self::from_yaml_str(&content)
    }

    /// Parse and validate a YAML v1 document
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let export: ConfigExportV1 = serde_yaml::from_str(content)?;

        let version = export.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let preset: Preset = export.preset.parse()?;
        let mut config = Self::from_preset(preset);
        if let Some(overrides) = &export.overrides {
            config = config.apply_patch(overrides);
        }

        config.validate()?;
        Ok(config)
    }

    /// Export as YAML v1, writing only the fields that differ from the preset
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let base = Self::from_preset(self.preset);
        let overrides = SearchConfigPatch {
            max_hops_limit: (self.max_hops_limit != base.max_hops_limit)
                .then_some(self.max_hops_limit),
            default_skip_limit: (self.default_skip_limit != base.default_skip_limit)
                .then_some(self.default_skip_limit),
            max_results: (self.max_results != base.max_results).then_some(self.max_results),
        };

        let export = ConfigExportV1 {
            version: Some(SUPPORTED_VERSIONS[0]),
            preset: self.preset.to_string(),
            overrides: (!overrides.is_empty()).then_some(overrides),
        };

        Ok(serde_yaml::to_string(&export)?)
    }
}

impl Validatable for SearchConfig {
    fn validate(&self) -> ConfigResult<()> {
        check_range(
            "max_hops_limit",
            self.max_hops_limit,
            1,
            MAX_HOPS_CEILING,
            "Walk steps need at least one hop; deeper limits are not supported",
        )?;
        if let Some(limit) = self.max_results {
            check_range(
                "max_results",
                limit,
                1,
                usize::MAX,
                "Use None for an uncapped result list",
            )?;
        }
        Ok(())
    }
}
