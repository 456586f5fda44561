//! Graph fixtures

use entitygraph_search::{MemoryGraph, Node};

/// A -knows-> B -knows-> C -knows-> D, each node named after its key
pub fn chain_graph() -> MemoryGraph {
    let mut graph = MemoryGraph::new();
    for key in ["A", "B", "C", "D"] {
        graph.add_node(Node::new(key, "PERSON").with_field("name", key));
    }
    graph.connect("A", "knows", "B");
    graph.connect("B", "knows", "C");
    graph.connect("C", "knows", "D");
    graph
}

/// A -knows-> B -knows-> ... -knows-> G
pub fn long_chain_graph() -> MemoryGraph {
    let mut graph = MemoryGraph::new();
    let keys = ["A", "B", "C", "D", "E", "F", "G"];
    for key in keys {
        graph.add_node(Node::new(key, "PERSON").with_field("name", key));
    }
    for pair in keys.windows(2) {
        graph.connect(pair[0], "knows", pair[1]);
    }
    graph
}

/// A -knows-> B -knows-> A
pub fn cycle_graph() -> MemoryGraph {
    let mut graph = MemoryGraph::new();
    graph.add_node(Node::new("A", "PERSON").with_field("name", "A"));
    graph.add_node(Node::new("B", "PERSON").with_field("name", "B"));
    graph.connect("A", "knows", "B");
    graph.connect("B", "knows", "A");
    graph
}

/// People, the companies they work at and the cities those are in
///
/// ```text
/// ann -works_at-> acme -located_in-> berlin
/// bob -works_at-> acme
/// cat -works_at-> globex -located_in-> paris
/// ann -knows-> bob -knows-> cat
/// ```
pub fn company_graph() -> MemoryGraph {
    let mut graph = MemoryGraph::new();
    graph.add_node(
        Node::new("ann", "PERSON")
            .with_field("name", "Ann Lee")
            .with_field("age", 41),
    );
    graph.add_node(
        Node::new("bob", "PERSON")
            .with_field("name", "Bob Stone")
            .with_field("age", 29),
    );
    graph.add_node(
        Node::new("cat", "PERSON")
            .with_field("name", "Cat Moss")
            .with_field("age", 35),
    );
    graph.add_node(Node::new("acme", "COMPANY").with_field("name", "ACME Corp"));
    graph.add_node(Node::new("globex", "COMPANY").with_field("name", "Globex"));
    graph.add_node(Node::new("berlin", "CITY").with_field("name", "Berlin"));
    graph.add_node(Node::new("paris", "CITY").with_field("name", "Paris"));

    graph.connect("ann", "works_at", "acme");
    graph.connect("bob", "works_at", "acme");
    graph.connect("cat", "works_at", "globex");
    graph.connect("acme", "located_in", "berlin");
    graph.connect("globex", "located_in", "paris");
    graph.connect("ann", "knows", "bob");
    graph.connect("bob", "knows", "cat");
    graph
}

/// `count` nodes n0..n{count}, each with a numeric `rank` and a `name`
pub fn ranked_nodes(count: usize) -> MemoryGraph {
    let mut graph = MemoryGraph::new();
    for i in 0..count {
        graph.add_node(
            Node::new(format!("n{}", i), "ITEM")
                .with_field("rank", i as i64)
                .with_field("name", format!("item {}", i)),
        );
    }
    graph
}
