// Searcher - assembles the layer chain for one traversal
//
// StartLayer -> (WalkLayer | FilterLayer)* -> consumer
//
// Nothing runs until the returned Search is pulled. Each call to `search`
// builds fresh layers, so seen-sets and skip counters never leak between
// searches.

use crate::config::{SearchConfig, Validatable};
use crate::errors::{Result, SearchError};
use crate::features::traversal::domain::{Step, Traversal};
use crate::features::traversal::infrastructure::{
    FilterLayer, MetricsSnapshot, SearchMetrics, StartLayer, TrailIter, WalkLayer,
};
use crate::shared::models::{NodeRef, Trail};
use crate::shared::ports::Graph;
use std::rc::Rc;
use tracing::debug;

/// Entry point for running traversals against a graph
///
/// Example:
/// ```no_run
/// use entitygraph_search::{MemoryGraph, Searcher, F, T};
///
/// let mut graph = MemoryGraph::new();
/// graph.connect("a", "knows", "b");
///
/// let searcher = Searcher::new(&graph);
/// let traversal = T::new()
///     .out_nodes(["knows"], 2)
///     .include([F::key().eq("b")]);
///
/// for trail in searcher.search(["a"], &traversal)? {
///     println!("{}", trail);
/// }
/// # Ok::<(), entitygraph_search::SearchError>(())
/// ```
pub struct Searcher<'g, G: Graph + ?Sized> {
    graph: &'g G,
    config: SearchConfig,
}

impl<'g, G: Graph + ?Sized + 'g> Searcher<'g, G> {
    /// Searcher with the default (exhaustive) limits
    pub fn new(graph: &'g G) -> Self {
        Self {
            graph,
            config: SearchConfig::default(),
        }
    }

    /// Searcher with explicit limits; the config is validated first
    pub fn with_config(graph: &'g G, config: SearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { graph, config })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn graph(&self) -> &'g G {
        self.graph
    }

    /// Build the lazy layer chain for `traversal` seeded with `starts`
    ///
    /// Fails only on an invalid traversal (bad criteria, or a walk deeper
    /// than `max_hops_limit`). Graph access happens while iterating.
    pub fn search<I, R>(&self, starts: I, traversal: &Traversal) -> Result<Search<'g>>
    where
        I: IntoIterator<Item = R>,
        I::IntoIter: 'g,
        R: Into<NodeRef> + 'g,
    {
        self.check(traversal)?;

        let metrics = Rc::new(SearchMetrics::new());
        let mut trails: TrailIter<'g> = Box::new(StartLayer::new(self.graph, starts));

        for step in &traversal.steps {
            trails = match step {
                Step::Walk(walk) => Box::new(WalkLayer::new(
                    self.graph,
                    walk.clone(),
                    trails,
                    metrics.clone(),
                )),
                Step::Filter(filter) => {
                    let mut filter = filter.clone();
                    if filter.skip_limit.is_none() {
                        filter.skip_limit = self.config.default_skip_limit;
                    }
                    Box::new(FilterLayer::new(
                        self.graph,
                        filter,
                        trails,
                        metrics.clone(),
                    ))
                }
            };
        }

        debug!("search assembled with {} steps", traversal.len());
        Ok(Search { trails, metrics })
    }

    fn check(&self, traversal: &Traversal) -> Result<()> {
        traversal.validate()?;

        for (index, step) in traversal.steps.iter().enumerate() {
            if let Step::Walk(walk) = step {
                if walk.max_hops > self.config.max_hops_limit {
                    return Err(SearchError::invalid_traversal(format!(
                        "step {}: max_hops {} exceeds the configured limit of {}",
                        index, walk.max_hops, self.config.max_hops_limit
                    )));
                }
            }
        }
        Ok(())
    }
}

/// A running search: the outermost layer plus its shared counters
///
/// Iterating drives every layer. Dropping it stops the search.
pub struct Search<'g> {
    trails: TrailIter<'g>,
    metrics: Rc<SearchMetrics>,
}

impl Search<'_> {
    /// Whether a filter layer stopped early on its skip limit
    ///
    /// Only meaningful once iteration has finished; a search that has not
    /// been drained may still trip later.
    pub fn truncated(&self) -> bool {
        self.metrics.truncated()
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}

impl Iterator for Search<'_> {
    type Item = Trail;

    fn next(&mut self) -> Option<Trail> {
        self.trails.next()
    }
}
