// Trail - immutable path record produced by the search pipeline

use super::Edge;
use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Path from a start node to the current node
///
/// A trail with `end() == None` is an origin (a seed from the start
/// layer). `push` is the only way to extend a trail and returns a new
/// value.
///
/// # Identity
///
/// Equality and hashing cover the start key plus the ordered edge
/// sequence. Two different paths that reach the same node are different
/// trails; this is what lets a walk discover every path while its seen-set
/// still guarantees termination on cyclic graphs.
#[derive(Debug, Clone, Serialize)]
pub struct Trail {
    start: String,
    end: Option<String>,
    hops: u32,
    path: Vec<Edge>,
}

impl Trail {
    /// Origin trail for a seed key
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: None,
            hops: 0,
            path: Vec::new(),
        }
    }

    /// Extend by one hop, landing on `end` via `edge`
    pub fn push(&self, end: impl Into<String>, edge: Edge) -> Trail {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(edge);

        Trail {
            start: self.start.clone(),
            end: Some(end.into()),
            hops: self.hops + 1,
            path,
        }
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    /// Key the trail landed on, `None` for an origin
    pub fn end(&self) -> Option<&str> {
        self.end.as_deref()
    }

    /// Key of the node this trail currently sits on
    pub fn current(&self) -> &str {
        self.end.as_deref().unwrap_or(&self.start)
    }

    /// Last edge traversed
    pub fn edge(&self) -> Option<&Edge> {
        self.path.last()
    }

    pub fn hops(&self) -> u32 {
        self.hops
    }

    /// Every edge from start to end, in traversal order
    pub fn edges(&self) -> &[Edge] {
        &self.path
    }

    pub fn is_origin(&self) -> bool {
        self.end.is_none()
    }
}

impl PartialEq for Trail {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.path == other.path
    }
}

impl Eq for Trail {}

impl Hash for Trail {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.path.hash(state);
    }
}

impl fmt::Display for Trail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.start)?;
        let mut at = self.start.as_str();
        for edge in &self.path {
            if edge.start == at {
                write!(f, " -{}-> {}", edge.verb, edge.end)?;
                at = &edge.end;
            } else {
                write!(f, " <-{}- {}", edge.verb, edge.start)?;
                at = &edge.start;
            }
        }
        Ok(())
    }
}
