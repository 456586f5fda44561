// Edge - directed relation instance between two node keys

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of travel relative to the node being expanded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Follow edges whose `start` is the current node
    #[serde(alias = "outgoing")]
    Out,
    /// Follow edges whose `end` is the current node
    #[serde(alias = "incoming")]
    In,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Out, Direction::In];

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Out => "out",
            Direction::In => "in",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Directed edge: `start -verb-> end`
///
/// Edge identity is the full triple, which is what trail identity is
/// built from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge {
    pub start: String,
    pub verb: String,
    pub end: String,
}

impl Edge {
    pub fn new(start: impl Into<String>, verb: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            verb: verb.into(),
            end: end.into(),
        }
    }

    /// Key on the far side of this edge when leaving `from` in `direction`
    pub fn other_end(&self, direction: Direction) -> &str {
        match direction {
            Direction::Out => &self.end,
            Direction::In => &self.start,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -{}-> {}", self.start, self.verb, self.end)
    }
}
