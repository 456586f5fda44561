// Infrastructure: StartLayer - seed trails, one per distinct start key

use crate::shared::models::{NodeRef, Trail};
use crate::shared::ports::Graph;
use ahash::AHashSet;

/// First layer of every search
///
/// Normalizes raw identifiers or nodes to keys through the graph and
/// yields one origin trail per distinct key, in first-seen order.
pub struct StartLayer<'g> {
    keys: Box<dyn Iterator<Item = String> + 'g>,
    seen: AHashSet<String>,
}

impl<'g> StartLayer<'g> {
    pub fn new<G, I, R>(graph: &'g G, starts: I) -> Self
    where
        G: Graph + ?Sized + 'g,
        I: IntoIterator<Item = R>,
        I::IntoIter: 'g,
        R: Into<NodeRef> + 'g,
    {
        Self {
            keys: Box::new(
                starts
                    .into_iter()
                    .map(move |start| graph.to_key(&start.into())),
            ),
            seen: AHashSet::new(),
        }
    }
}

impl Iterator for StartLayer<'_> {
    type Item = Trail;

    fn next(&mut self) -> Option<Trail> {
        for key in self.keys.by_ref() {
            if self.seen.insert(key.clone()) {
                return Some(Trail::new(key));
            }
        }
        None
    }
}
