//! Search UseCase Implementation
//!
//! Runs a traversal to completion (or to the requested page) and projects
//! every hit onto its end node.

use crate::config::{SearchConfig, Validatable};
use crate::errors::Result;
use crate::features::traversal::domain::Traversal;
use crate::features::traversal::searcher::Searcher;
use crate::shared::models::{Node, NodeRef, Trail};
use crate::shared::ports::Graph;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::time::Instant;
use tracing::debug;

/// Input for one search
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Seed keys or nodes
    pub starts: Vec<NodeRef>,
    pub traversal: Traversal,
    /// Hits to skip before collecting
    #[serde(default)]
    pub offset: usize,
    /// Hits to collect; further capped by `SearchConfig::max_results`
    #[serde(default)]
    pub limit: Option<usize>,
}

impl SearchRequest {
    pub fn new<I, R>(starts: I, traversal: Traversal) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<NodeRef>,
    {
        Self {
            starts: starts.into_iter().map(Into::into).collect(),
            traversal,
            offset: 0,
            limit: None,
        }
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// One result: the trail and the node it ends on
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub trail: Trail,
    /// `None` when the graph has no record for the end key
    pub node: Option<Node>,
}

/// Output from one search
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub hits: Vec<SearchHit>,
    pub stats: SearchStats,
}

/// Search execution statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    pub hits: usize,
    pub trails_expanded: u64,
    pub trails_rejected: u64,
    /// A filter stopped early on its skip limit
    pub truncated: bool,
    pub elapsed_ms: u64,
}

/// Search UseCase Trait (Port)
pub trait SearchUseCase<G: Graph + ?Sized>: Send + Sync {
    /// Run one request against `graph`
    fn execute(&self, graph: &G, request: SearchRequest) -> Result<SearchResponse>;

    /// Run independent requests; results keep the input order
    fn execute_batch(&self, graph: &G, requests: Vec<SearchRequest>) -> Vec<Result<SearchResponse>>;
}

/// Search UseCase Implementation
#[derive(Debug, Clone, Default)]
pub struct SearchUseCaseImpl {
    config: SearchConfig,
}

impl SearchUseCaseImpl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Requested page size after the configured cap
    fn page_size(&self, request: &SearchRequest) -> usize {
        match (request.limit, self.config.max_results) {
            (Some(limit), Some(cap)) => limit.min(cap),
            (Some(limit), None) => limit,
            (None, Some(cap)) => cap,
            (None, None) => usize::MAX,
        }
    }
}

impl<G: Graph + Sync + ?Sized> SearchUseCase<G> for SearchUseCaseImpl {
    fn execute(&self, graph: &G, request: SearchRequest) -> Result<SearchResponse> {
        let start = Instant::now();
        let page_size = self.page_size(&request);

        let searcher = Searcher::with_config(graph, self.config.clone())?;
        let mut search = searcher.search(request.starts, &request.traversal)?;

        let hits: Vec<SearchHit> = search
            .by_ref()
            .skip(request.offset)
            .take(page_size)
            .map(|trail| SearchHit {
                node: graph.get_node(trail.current()).map(Cow::into_owned),
                trail,
            })
            .collect();

        let metrics = search.metrics();
        let stats = SearchStats {
            hits: hits.len(),
            trails_expanded: metrics.trails_expanded,
            trails_rejected: metrics.trails_rejected,
            truncated: metrics.truncated,
            elapsed_ms: start.elapsed().as_millis() as u64,
        };
        debug!(
            "search finished: {} hits, {} expanded, {} rejected",
            stats.hits, stats.trails_expanded, stats.trails_rejected
        );

        Ok(SearchResponse { hits, stats })
    }

    fn execute_batch(&self, graph: &G, requests: Vec<SearchRequest>) -> Vec<Result<SearchResponse>> {
        requests
            .into_par_iter()
            .map(|request| self.execute(graph, request))
            .collect()
    }
}
