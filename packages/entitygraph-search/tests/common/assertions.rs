//! Trail assertions

use entitygraph_search::Trail;
use std::collections::HashSet;

/// Keys the trails end on, in emission order
pub fn ends(trails: &[Trail]) -> Vec<String> {
    trails.iter().map(|t| t.current().to_string()).collect()
}

/// Assert no trail appears twice
pub fn assert_unique(trails: &[Trail]) {
    let distinct: HashSet<&Trail> = trails.iter().collect();
    assert_eq!(
        distinct.len(),
        trails.len(),
        "Duplicate trails in: {:?}",
        trails.iter().map(|t| t.to_string()).collect::<Vec<_>>()
    );
}

/// Assert every edge of every trail joins up with the previous one
pub fn assert_connected(trails: &[Trail]) {
    for trail in trails {
        let mut at = trail.start().to_string();
        for edge in trail.edges() {
            assert!(
                edge.start == at || edge.end == at,
                "Edge {} does not touch {} in trail {}",
                edge,
                at,
                trail
            );
            at = if edge.start == at {
                edge.end.clone()
            } else {
                edge.start.clone()
            };
        }
        assert_eq!(at, trail.current(), "Trail {} ends elsewhere", trail);
        assert_eq!(trail.hops() as usize, trail.edges().len());
    }
}
