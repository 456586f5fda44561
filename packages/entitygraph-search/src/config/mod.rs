//! Search configuration
//!
//! Three levels, from simplest to most explicit:
//!
//! ```rust,ignore
//! use entitygraph_search::config::{Preset, SearchConfig};
//!
//! // Preset
//! let config = SearchConfig::from_preset(Preset::Interactive);
//!
//! // Preset plus builder overrides
//! let config = SearchConfig::from_preset(Preset::Balanced).max_hops_limit(8);
//!
//! // Versioned YAML file
//! let config = SearchConfig::from_yaml("search.yaml")?;
//! ```

pub mod error;
pub mod io;
pub mod preset;
pub mod search_config;
pub mod validation;

pub use error::{ConfigError, ConfigResult};
pub use io::{ConfigExportV1, SearchConfigPatch};
pub use preset::Preset;
pub use search_config::{SearchConfig, MAX_HOPS_CEILING};
pub use validation::Validatable;
