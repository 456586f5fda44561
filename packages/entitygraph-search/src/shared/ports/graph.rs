//! Graph capability
//!
//! The search core never owns nodes or edges. It reads them through this
//! trait, referencing nodes by key only. Implementations must be
//! read-only for the duration of a search; concurrent searches against
//! one graph are safe when the implementation is `Sync`.

use crate::shared::models::{Direction, Edge, Node, NodeRef};
use std::borrow::Cow;
use std::collections::BTreeSet;

/// Edge labels; `None` or empty at the call site means "any verb"
pub type VerbSet = BTreeSet<String>;

/// Directions to follow; `None` means both
pub type DirectionSet = BTreeSet<Direction>;

/// Lazy `(neighbor_key, edge)` sequence
pub type EdgeIter<'a> = Box<dyn Iterator<Item = (String, Edge)> + 'a>;

/// Read access to a knowledge graph
pub trait Graph {
    /// Node by key, `None` when the key is unknown
    fn get_node(&self, key: &str) -> Option<Cow<'_, Node>>;

    /// Edges incident to `key` that match `verbs` and `directions`
    ///
    /// Yields `(neighbor_key, edge)` where `neighbor_key` is the far end
    /// relative to `key`. An unknown key or a node with no matching edges
    /// yields nothing.
    fn iterate_edges<'a>(
        &'a self,
        verbs: Option<&'a VerbSet>,
        directions: Option<&'a DirectionSet>,
        key: &'a str,
    ) -> EdgeIter<'a>;

    /// Normalize a raw identifier or node into its key
    fn to_key(&self, value: &NodeRef) -> String {
        value.key().to_string()
    }
}
