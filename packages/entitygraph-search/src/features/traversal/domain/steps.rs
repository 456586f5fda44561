// Domain: Traversal steps - declarative pipeline stages
//
// A Traversal is an ordered list of walk and filter steps. The searcher
// turns each step into a layer, in order, after the start layer.

use super::criteria::Criteria;
use crate::errors::Result;
use crate::shared::models::Direction;
use crate::shared::ports::{DirectionSet, VerbSet};
use serde::{Deserialize, Serialize};

/// Expansion stage: follow matching edges up to `max_hops` away
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkStep {
    /// Edge labels to follow (empty = all)
    pub verbs: VerbSet,
    /// Directions to follow (empty = both)
    pub directions: DirectionSet,
    /// Hops allowed from each incoming trail
    pub max_hops: u32,
    /// Re-emit each incoming trail before its expansions
    pub passthru: bool,
}

impl Default for WalkStep {
    fn default() -> Self {
        Self {
            verbs: VerbSet::new(),
            directions: [Direction::Out].into_iter().collect(),
            max_hops: 1,
            passthru: false,
        }
    }
}

impl WalkStep {
    pub fn new<I, V>(verbs: I, directions: &[Direction], max_hops: u32) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Self {
            verbs: verbs.into_iter().map(Into::into).collect(),
            directions: directions.iter().copied().collect(),
            max_hops,
            passthru: false,
        }
    }

    pub fn passthru(mut self, passthru: bool) -> Self {
        self.passthru = passthru;
        self
    }

    pub(crate) fn verb_filter(&self) -> Option<&VerbSet> {
        (!self.verbs.is_empty()).then_some(&self.verbs)
    }

    pub(crate) fn direction_filter(&self) -> Option<&DirectionSet> {
        (!self.directions.is_empty()).then_some(&self.directions)
    }
}

/// Filtering stage: keep or drop trails by criteria
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterStep {
    pub criteria: Vec<Criteria>,
    /// AND the criteria (`true`) or OR them (`false`)
    pub all: bool,
    /// Negate the combined result
    pub exclude: bool,
    /// Stop the stage after this many consecutive rejections
    pub skip_limit: Option<u32>,
}

impl FilterStep {
    pub fn new<I, C>(criteria: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Criteria>,
    {
        Self {
            criteria: criteria.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn all(mut self) -> Self {
        self.all = true;
        self
    }

    pub fn exclude(mut self) -> Self {
        self.exclude = true;
        self
    }

    pub fn skip_limit(mut self, limit: u32) -> Self {
        self.skip_limit = Some(limit);
        self
    }

    pub fn validate(&self) -> Result<()> {
        for criteria in &self.criteria {
            criteria.validate()?;
        }
        Ok(())
    }
}

/// One pipeline stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Step {
    Walk(WalkStep),
    Filter(FilterStep),
}

/// Ordered list of steps applied to the start trails
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Traversal {
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Traversal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn walk(mut self, step: WalkStep) -> Self {
        self.steps.push(Step::Walk(step));
        self
    }

    pub fn filter(mut self, step: FilterStep) -> Self {
        self.steps.push(Step::Filter(step));
        self
    }

    /// Walk outgoing edges with the given verbs (none = any)
    pub fn out_nodes<I, V>(self, verbs: I, max_hops: u32) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.walk(WalkStep::new(verbs, &[Direction::Out], max_hops))
    }

    /// Walk incoming edges with the given verbs (none = any)
    pub fn in_nodes<I, V>(self, verbs: I, max_hops: u32) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.walk(WalkStep::new(verbs, &[Direction::In], max_hops))
    }

    /// Walk edges in both directions
    pub fn all_nodes<I, V>(self, verbs: I, max_hops: u32) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.walk(WalkStep::new(verbs, &Direction::ALL, max_hops))
    }

    /// Keep trails matching any of `criteria`
    pub fn include<I, C>(self, criteria: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Criteria>,
    {
        self.filter(FilterStep::new(criteria))
    }

    /// Drop trails matching any of `criteria`
    pub fn exclude<I, C>(self, criteria: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Criteria>,
    {
        self.filter(FilterStep::new(criteria).exclude())
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Check every criteria of every filter step
    pub fn validate(&self) -> Result<()> {
        for step in &self.steps {
            if let Step::Filter(filter) = step {
                filter.validate()?;
            }
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
