// Domain: traversal DSL - pure data, no graph access

pub mod criteria;
pub mod factories;
pub mod steps;

pub use criteria::{Comparison, Criteria, EdgeCriteria, FieldCriteria};
pub use factories::{FieldRef, F, R, T};
pub use steps::{FilterStep, Step, Traversal, WalkStep};
