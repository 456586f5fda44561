//! Traversal Feature - lazy layered graph search
//!
//! # Hexagonal Architecture
//! ```text
//! External callers
//!           ↓
//! application/ (UseCase - collected, paginated results)
//!           ↓
//! searcher (assembles the layer chain)
//!           ↓
//! infrastructure/ (StartLayer, WalkLayer, FilterLayer)
//!           ↓
//! domain/ (WalkStep, FilterStep, Criteria)
//! ```
//!
//! # Usage
//! ```ignore
//! use entitygraph_search::features::traversal::{Searcher, F, T};
//!
//! let traversal = T::new()
//!     .out_nodes(["knows"], 3)
//!     .include([F::field("name").eq("C")]);
//! let trails: Vec<_> = Searcher::new(&graph).search(["A"], &traversal)?.collect();
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod searcher;

// Re-export application layer (primary interface)
pub use application::{
    SearchHit, SearchRequest, SearchResponse, SearchStats, SearchUseCase, SearchUseCaseImpl,
};

// Re-export domain types
pub use domain::{
    Comparison, Criteria, EdgeCriteria, FieldCriteria, FieldRef, FilterStep, Step, Traversal,
    WalkStep, F, R, T,
};

pub use searcher::{Search, Searcher};
