// Infrastructure: FilterLayer - criteria-based accept/reject stage

use super::criteria_evaluator::CriteriaEvaluator;
use super::metrics::SearchMetrics;
use super::TrailIter;
use crate::features::traversal::domain::FilterStep;
use crate::shared::models::Trail;
use crate::shared::ports::Graph;
use std::rc::Rc;
use tracing::{debug, warn};

/// Filtering stage
///
/// Every criterion is evaluated for every trail (no short-circuit), then
/// combined with AND (`all`) or OR, then XOR'd with `exclude`.
///
/// With a `skip_limit`, the layer counts consecutive rejections; the
/// counter resets on every accepted trail. Once it exceeds the limit the
/// layer stops for good and marks the search truncated. This is not an
/// error.
pub struct FilterLayer<'g, G: Graph + ?Sized> {
    step: FilterStep,
    upstream: TrailIter<'g>,
    evaluator: CriteriaEvaluator<'g, G>,
    skipped: u32,
    done: bool,
    metrics: Rc<SearchMetrics>,
}

impl<'g, G: Graph + ?Sized> FilterLayer<'g, G> {
    pub fn new(
        graph: &'g G,
        step: FilterStep,
        upstream: TrailIter<'g>,
        metrics: Rc<SearchMetrics>,
    ) -> Self {
        Self {
            step,
            upstream,
            evaluator: CriteriaEvaluator::new(graph),
            skipped: 0,
            done: false,
            metrics,
        }
    }

    /// Whether this layer stopped because of its skip limit
    pub fn tripped(&self) -> bool {
        self.done && self.step.skip_limit.is_some_and(|limit| self.skipped > limit)
    }
}

/// Combined verdict of a filter step for one trail
fn accepts<G: Graph + ?Sized>(
    step: &FilterStep,
    evaluator: &mut CriteriaEvaluator<'_, G>,
    trail: &Trail,
) -> bool {
    let results: Vec<bool> = step
        .criteria
        .iter()
        .map(|criteria| evaluator.evaluate(criteria, trail))
        .collect();

    let matched = if step.all {
        results.iter().all(|&r| r)
    } else {
        results.iter().any(|&r| r)
    };
    matched != step.exclude
}

impl<'g, G: Graph + ?Sized> Iterator for FilterLayer<'g, G> {
    type Item = Trail;

    fn next(&mut self) -> Option<Trail> {
        if self.done {
            return None;
        }

        let Self {
            step,
            upstream,
            evaluator,
            skipped,
            done,
            metrics,
        } = self;

        for trail in upstream.by_ref() {
            if accepts(step, evaluator, &trail) {
                *skipped = 0;
                return Some(trail);
            }

            metrics.record_rejection();
            *skipped = skipped.saturating_add(1);

            if let Some(limit) = step.skip_limit {
                if *skipped > limit {
                    warn!(
                        "filter skip limit reached ({} consecutive rejections, limit {}); truncating",
                        skipped, limit
                    );
                    metrics.mark_truncated();
                    *done = true;
                    return None;
                }
            }
        }

        debug!("filter layer drained");
        *done = true;
        None
    }
}
