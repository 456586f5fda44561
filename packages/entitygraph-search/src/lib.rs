/*
 * Entitygraph Search - lazy layered traversal over knowledge graphs
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (Node, Edge, Trail) and the Graph port
 * - features/    : Traversal DSL, layer chain, searcher, use case
 * - adapters/    : In-memory Graph implementation
 * - config/      : Presets, limits, YAML schema
 *
 * A search is a pull-based chain of layers:
 *   StartLayer -> WalkLayer / FilterLayer ... -> consumer
 * Nothing is computed until the consumer asks for the next trail.
 */

#![allow(clippy::new_ret_no_self)] // T::new() starts a Traversal
#![allow(clippy::should_implement_trait)] // FieldRef::eq/ne build criteria

/// Shared models and the Graph port
pub mod shared;

/// Feature slices
pub mod features;

/// Graph implementations
pub mod adapters;

/// Search configuration
pub mod config;

/// Error types
pub mod errors;

pub use adapters::MemoryGraph;
pub use config::{Preset, SearchConfig};
pub use errors::{Result, SearchError};
pub use features::traversal::{
    Comparison, Criteria, EdgeCriteria, FieldCriteria, FilterStep, Search, SearchHit,
    SearchRequest, SearchResponse, SearchStats, SearchUseCase, SearchUseCaseImpl, Searcher, Step,
    Traversal, WalkStep, F, R, T,
};
pub use shared::models::{Direction, Edge, Node, NodeRef, Trail, Value};
pub use shared::ports::Graph;
