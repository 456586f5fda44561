// Node - graph vertex with a stable key and free-form attributes

use super::Value;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Graph vertex
///
/// `key` is unique within a graph. `label` is the entity type
/// (PERSON, CITY, ...). Everything else lives in `fields`, which may
/// differ from node to node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub key: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub fields: BTreeMap<String, Value>,
}

impl Node {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Read a named attribute
    ///
    /// `key` and `label` are addressable like any other field.
    /// Returns `None` when the node has no such attribute.
    pub fn attribute(&self, name: &str) -> Option<Cow<'_, Value>> {
        match name {
            "key" => Some(Cow::Owned(Value::String(self.key.clone()))),
            "label" => Some(Cow::Owned(Value::String(self.label.clone()))),
            _ => self.fields.get(name).map(Cow::Borrowed),
        }
    }
}

/// Raw start identifier: either a bare key or a full node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeRef {
    Key(String),
    Node(Node),
}

impl NodeRef {
    pub fn key(&self) -> &str {
        match self {
            NodeRef::Key(key) => key.as_str(),
            NodeRef::Node(node) => node.key.as_str(),
        }
    }
}

impl From<&str> for NodeRef {
    fn from(key: &str) -> Self {
        NodeRef::Key(key.to_string())
    }
}

impl From<String> for NodeRef {
    fn from(key: String) -> Self {
        NodeRef::Key(key)
    }
}

impl From<Node> for NodeRef {
    fn from(node: Node) -> Self {
        NodeRef::Node(node)
    }
}

impl From<&Node> for NodeRef {
    fn from(node: &Node) -> Self {
        NodeRef::Node(node.clone())
    }
}
