//! Shared models: nodes, edges, trails and attribute values

pub mod edge;
pub mod node;
pub mod trail;
pub mod value;

pub use edge::{Direction, Edge};
pub use node::{Node, NodeRef};
pub use trail::Trail;
pub use value::Value;
