//! Shared module - Common types and ports
//!
//! Types used by every feature. Nothing in here knows about layers or
//! traversals.

pub mod models;
pub mod ports;

pub use models::*;
pub use ports::*;
