// Adapter: MemoryGraph - in-memory adjacency index implementing Graph
//
// O(1) node lookup by key, O(1) access to the outgoing/incoming edge lists
// of a node. Edge lists keep insertion order, so searches over a
// MemoryGraph are fully deterministic.

use crate::shared::models::{Direction, Edge, Node};
use crate::shared::ports::{DirectionSet, EdgeIter, Graph, VerbSet};
use ahash::AHashMap;
use std::borrow::Cow;

/// In-memory knowledge graph
#[derive(Debug, Default, Clone)]
pub struct MemoryGraph {
    /// All nodes indexed by key
    nodes_by_key: AHashMap<String, Node>,

    /// Forward edges: start -> Vec<Edge>
    edges_from: AHashMap<String, Vec<Edge>>,

    /// Backward edges: end -> Vec<Edge>
    edges_to: AHashMap<String, Vec<Edge>>,

    edge_count: usize,
}

impl MemoryGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, replacing any node with the same key
    pub fn add_node(&mut self, node: Node) {
        self.nodes_by_key.insert(node.key.clone(), node);
    }

    /// Add `start -verb-> end`
    ///
    /// Endpoints that are not in the graph yet are created as bare nodes
    /// (key only). Returns `false` when the exact edge already exists.
    pub fn connect(
        &mut self,
        start: impl Into<String>,
        verb: impl Into<String>,
        end: impl Into<String>,
    ) -> bool {
        let edge = Edge::new(start, verb, end);

        let outgoing = self.edges_from.entry(edge.start.clone()).or_default();
        if outgoing.contains(&edge) {
            return false;
        }
        outgoing.push(edge.clone());

        self.ensure_node(&edge.start);
        self.ensure_node(&edge.end);

        self.edges_to
            .entry(edge.end.clone())
            .or_default()
            .push(edge);
        self.edge_count += 1;
        true
    }

    fn ensure_node(&mut self, key: &str) {
        if !self.nodes_by_key.contains_key(key) {
            self.nodes_by_key
                .insert(key.to_string(), Node::new(key, String::new()));
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.nodes_by_key.contains_key(key)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes_by_key.values()
    }

    pub fn node_count(&self) -> usize {
        self.nodes_by_key.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn edges(&self, key: &str, direction: Direction) -> &[Edge] {
        let index = match direction {
            Direction::Out => &self.edges_from,
            Direction::In => &self.edges_to,
        };
        index.get(key).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Graph for MemoryGraph {
    fn get_node(&self, key: &str) -> Option<Cow<'_, Node>> {
        self.nodes_by_key.get(key).map(Cow::Borrowed)
    }

    fn iterate_edges<'a>(
        &'a self,
        verbs: Option<&'a VerbSet>,
        directions: Option<&'a DirectionSet>,
        key: &'a str,
    ) -> EdgeIter<'a> {
        let directions: Vec<Direction> = match directions {
            Some(set) => set.iter().copied().collect(),
            None => Direction::ALL.to_vec(),
        };

        Box::new(directions.into_iter().flat_map(move |direction| {
            self.edges(key, direction)
                .iter()
                .filter(move |edge| match verbs {
                    Some(set) if !set.is_empty() => set.contains(&edge.verb),
                    _ => true,
                })
                .map(move |edge| (edge.other_end(direction).to_string(), edge.clone()))
        }))
    }
}
