//! Traversal Application Layer (UseCase)
//!
//! Entry point for callers that want collected, paginated results rather
//! than a lazy trail stream.
//!
//! ```text
//! External callers
//!           ↓
//! application/ (this module)
//!           ↓
//! Searcher -> infrastructure/ layers -> domain/ steps
//! ```

mod search_usecase;

pub use search_usecase::{
    SearchHit, SearchRequest, SearchResponse, SearchStats, SearchUseCase, SearchUseCaseImpl,
};
