//! Adapters - concrete implementations of the shared ports

pub mod memory_graph;

pub use memory_graph::MemoryGraph;
