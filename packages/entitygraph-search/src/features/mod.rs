//! Feature modules - each feature follows Hexagonal Architecture
//!
//! - domain/         - Pure data (no graph access)
//! - application/    - Use cases
//! - infrastructure/ - Graph-backed implementations

pub mod traversal;
