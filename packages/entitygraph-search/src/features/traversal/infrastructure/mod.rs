// Infrastructure: the lazy layer chain and its evaluation helpers

pub mod criteria_evaluator;
pub mod filter_layer;
pub mod metrics;
pub mod start_layer;
pub mod walk_layer;

pub use criteria_evaluator::CriteriaEvaluator;
pub use filter_layer::FilterLayer;
pub use metrics::{MetricsSnapshot, SearchMetrics};
pub use start_layer::StartLayer;
pub use walk_layer::WalkLayer;

use crate::shared::models::Trail;

/// Boxed upstream of a layer
pub type TrailIter<'g> = Box<dyn Iterator<Item = Trail> + 'g>;
