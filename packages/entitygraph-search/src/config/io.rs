//! Configuration I/O schema
//!
//! Defines the YAML schema types. Loading and export live on
//! `SearchConfig` in search_config.rs.

use serde::{Deserialize, Deserializer, Serialize};

/// Versions `from_yaml` accepts
pub const SUPPORTED_VERSIONS: [u32; 1] = [1];

/// YAML Schema v1
///
/// ```yaml
/// version: 1
/// preset: balanced
/// overrides:
///   max_hops_limit: 8
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigExportV1 {
    /// Schema version (always 1 for v1); optional only so a missing field
    /// can be reported as such
    #[serde(default)]
    pub version: Option<u32>,

    /// Base preset
    pub preset: String,

    /// Fine-grained overrides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overrides: Option<SearchConfigPatch>,
}

/// All-optional counterpart of `SearchConfig`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchConfigPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_hops_limit: Option<u32>,

    /// `Some(None)` (`null` in YAML) switches the limit off
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "explicit_null"
    )]
    pub default_skip_limit: Option<Option<u32>>,

    /// `Some(None)` (`null` in YAML) removes the cap
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "explicit_null"
    )]
    pub max_results: Option<Option<usize>>,
}

/// A present field, `null` included, deserializes to `Some`; an absent one
/// falls back to `default` (`None`)
fn explicit_null<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl SearchConfigPatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_distinguishes_null_from_absent() {
        let patch: SearchConfigPatch =
            serde_yaml::from_str("default_skip_limit: null\nmax_results: 5\n").unwrap();
        assert_eq!(patch.default_skip_limit, Some(None));
        assert_eq!(patch.max_results, Some(Some(5)));
        assert_eq!(patch.max_hops_limit, None);

        let empty: SearchConfigPatch = serde_yaml::from_str("{}").unwrap();
        assert!(empty.is_empty());
    }
}
