// Domain: Criteria - predicates over a trail's current node
//
// Field criteria test the node's own attributes, edge criteria test its
// relationships to a known set of keys. The enum is closed: an unknown
// criteria type can only come from a traversal document and is rejected
// when that document is parsed.

use crate::errors::{Result, SearchError};
use crate::shared::models::{Direction, Value};
use crate::shared::ports::{DirectionSet, VerbSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Comparison operator for field criteria
///
/// `I`-prefixed variants are ASCII case-insensitive string comparisons.
/// Serialized names are lowercase (`istartswith`); the snake_case
/// spelling is accepted too.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Comparison {
    #[default]
    Eq,
    Ne,
    IEq,
    Lt,
    Lte,
    Gt,
    Gte,
    Contains,
    #[serde(alias = "i_contains")]
    IContains,
    #[serde(alias = "starts_with")]
    StartsWith,
    #[serde(alias = "istarts_with", alias = "i_starts_with")]
    IStartsWith,
    #[serde(alias = "ends_with")]
    EndsWith,
    #[serde(alias = "iends_with", alias = "i_ends_with")]
    IEndsWith,
    Regex,
    /// Attribute equals any element of a list value
    In,
    /// Inclusive `[low, high]` bounds
    Range,
}

/// Attribute test against the node at `trail.current()`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldCriteria {
    pub field: String,
    #[serde(default)]
    pub compare: Comparison,
    #[serde(default = "null_value")]
    pub value: Value,
}

fn null_value() -> Value {
    Value::Null
}

impl FieldCriteria {
    pub fn new(field: impl Into<String>, compare: Comparison, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            compare,
            value: value.into(),
        }
    }

    /// Reject criteria that could never evaluate meaningfully
    pub fn validate(&self) -> Result<()> {
        match self.compare {
            Comparison::Regex => {
                let pattern = self.value.as_str().ok_or_else(|| {
                    SearchError::invalid_criteria(format!(
                        "regex on '{}' needs a string pattern, got {}",
                        self.field, self.value
                    ))
                })?;
                regex::Regex::new(pattern).map_err(|e| {
                    SearchError::invalid_criteria(format!(
                        "regex on '{}' does not compile: {}",
                        self.field, e
                    ))
                })?;
            }
            Comparison::Range => match self.value.as_list() {
                Some([_, _]) => {}
                _ => {
                    return Err(SearchError::invalid_criteria(format!(
                        "range on '{}' needs [low, high], got {}",
                        self.field, self.value
                    )))
                }
            },
            Comparison::In => {
                if self.value.as_list().is_none() {
                    return Err(SearchError::invalid_criteria(format!(
                        "in on '{}' needs a list value, got {}",
                        self.field, self.value
                    )));
                }
            }
            _ => {}
        }
        Ok(())
    }
}

/// Relationship test: does the current node have a matching edge into `keys`?
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeCriteria {
    /// Empty means any verb
    #[serde(default)]
    pub verbs: VerbSet,
    /// Empty means both directions
    #[serde(default)]
    pub directions: DirectionSet,
    #[serde(default)]
    pub keys: BTreeSet<String>,
}

impl EdgeCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn verb(mut self, verb: impl Into<String>) -> Self {
        self.verbs.insert(verb.into());
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.directions.insert(direction);
        self
    }

    pub fn keys<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.keys.extend(keys.into_iter().map(Into::into));
        self
    }

    pub(crate) fn verb_filter(&self) -> Option<&VerbSet> {
        (!self.verbs.is_empty()).then_some(&self.verbs)
    }

    pub(crate) fn direction_filter(&self) -> Option<&DirectionSet> {
        (!self.directions.is_empty()).then_some(&self.directions)
    }
}

/// Filter predicate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Criteria {
    Field(FieldCriteria),
    Edge(EdgeCriteria),
}

impl Criteria {
    pub fn validate(&self) -> Result<()> {
        match self {
            Criteria::Field(field) => field.validate(),
            Criteria::Edge(_) => Ok(()),
        }
    }
}

impl From<FieldCriteria> for Criteria {
    fn from(c: FieldCriteria) -> Self {
        Criteria::Field(c)
    }
}

impl From<EdgeCriteria> for Criteria {
    fn from(c: EdgeCriteria) -> Self {
        Criteria::Edge(c)
    }
}
