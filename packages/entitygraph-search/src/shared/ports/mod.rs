//! Ports - capabilities the search core depends on

pub mod graph;

pub use graph::{DirectionSet, EdgeIter, Graph, VerbSet};
