// Infrastructure: WalkLayer - depth-first expansion along matching edges
//
// Iterative, not recursive: an explicit stack of frames replaces the call
// stack, so deep or wide graphs cannot overflow it. Emission order is the
// same as the recursive formulation:
//   passthru(trail), child1, child1's subtree, child2, child2's subtree, ...
//
// Depth is the trail's total hop count, not hops taken inside this layer.
// A trail that arrives already at or past `max_hops` still gets its direct
// neighbors, but none of them is descended into.

use super::metrics::SearchMetrics;
use super::TrailIter;
use crate::features::traversal::domain::WalkStep;
use crate::shared::models::{Edge, Trail};
use crate::shared::ports::Graph;
use ahash::AHashSet;
use std::rc::Rc;
use tracing::{debug, trace};

/// Trail being expanded plus its not-yet-visited neighbors
struct Frame {
    trail: Trail,
    neighbors: std::vec::IntoIter<(String, Edge)>,
}

/// Expansion stage
///
/// For each upstream trail: optionally re-emit it (`passthru`), then emit
/// its extensions, descending while the extension's `hops()` is below
/// `max_hops`. The seen-set is owned by this layer and lives as long as the
/// search; an extension already in it is never emitted or descended into
/// again. Incoming trails are always expanded, even one this layer emitted
/// earlier at the depth bound.
pub struct WalkLayer<'g, G: Graph + ?Sized> {
    graph: &'g G,
    step: WalkStep,
    upstream: TrailIter<'g>,
    seen: AHashSet<Trail>,
    stack: Vec<Frame>,
    metrics: Rc<SearchMetrics>,
}

impl<'g, G: Graph + ?Sized> WalkLayer<'g, G> {
    pub fn new(
        graph: &'g G,
        step: WalkStep,
        upstream: TrailIter<'g>,
        metrics: Rc<SearchMetrics>,
    ) -> Self {
        Self {
            graph,
            step,
            upstream,
            seen: AHashSet::new(),
            stack: Vec::new(),
            metrics,
        }
    }

    fn open_frame(&mut self, trail: Trail) {
        let neighbors: Vec<(String, Edge)> = self
            .graph
            .iterate_edges(
                self.step.verb_filter(),
                self.step.direction_filter(),
                trail.current(),
            )
            .collect();

        self.stack.push(Frame {
            trail,
            neighbors: neighbors.into_iter(),
        });
    }
}

impl<'g, G: Graph + ?Sized> Iterator for WalkLayer<'g, G> {
    type Item = Trail;

    fn next(&mut self) -> Option<Trail> {
        loop {
            // Continue the expansion in progress
            if let Some(frame) = self.stack.last_mut() {
                let Some((neighbor, edge)) = frame.neighbors.next() else {
                    self.stack.pop();
                    continue;
                };

                let next = frame.trail.push(neighbor, edge);

                if !self.seen.insert(next.clone()) {
                    continue;
                }
                self.metrics.record_expansion();
                trace!("walk: {} (hops {})", next, next.hops());

                if next.hops() < self.step.max_hops {
                    self.open_frame(next.clone());
                }
                return Some(next);
            }

            // Pull the next trail from upstream
            let Some(trail) = self.upstream.next() else {
                debug!("walk layer drained ({} trails seen)", self.seen.len());
                return None;
            };

            self.seen.insert(trail.clone());
            if self.step.max_hops > 0 {
                self.open_frame(trail.clone());
            }

            if self.step.passthru {
                return Some(trail);
            }
        }
    }
}
