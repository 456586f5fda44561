//! Traversal documents, configuration files and the search use case
//!
//! Covers the path an embedding service takes: load limits from YAML,
//! parse a traversal document, run it through the use case.

mod common;

use common::*;
use entitygraph_search::config::{ConfigError, Preset, SearchConfig};
use entitygraph_search::{
    Comparison, Criteria, Direction, SearchError, SearchRequest, SearchUseCase, SearchUseCaseImpl,
    Searcher, Step, Traversal,
};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

const COLLEAGUES_JSON: &str = r#"{
    "steps": [
        {"type": "walk", "verbs": ["works_at"], "directions": ["out"], "max_hops": 1},
        {"type": "walk", "verbs": ["works_at"], "directions": ["incoming"], "max_hops": 1},
        {"type": "filter", "exclude": true, "criteria": [
            {"type": "field", "field": "key", "compare": "eq", "value": "ann"}
        ]}
    ]
}"#;

const CITY_YAML: &str = r#"
steps:
  - type: walk
    max_hops: 3
  - type: filter
    all: true
    criteria:
      - type: field
        field: label
        compare: ieq
        value: city
      - type: edge
        verbs: [located_in]
        directions: [in]
        keys: [acme]
"#;

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_json_traversal_document() {
    let traversal = Traversal::from_json(COLLEAGUES_JSON).unwrap();
    assert_eq!(traversal.len(), 3);
    match &traversal.steps[1] {
        Step::Walk(walk) => assert!(walk.directions.contains(&Direction::In)),
        other => panic!("expected walk, got {:?}", other),
    }

    let graph = company_graph();
    let trails: Vec<_> = Searcher::new(&graph)
        .search(["ann"], &traversal)
        .unwrap()
        .collect();
    assert_eq!(ends(&trails), vec!["bob"]);
}

#[test]
fn test_yaml_traversal_document() {
    let traversal = Traversal::from_yaml(CITY_YAML).unwrap();
    match &traversal.steps[1] {
        Step::Filter(filter) => {
            assert!(filter.all);
            assert!(matches!(
                filter.criteria[0],
                Criteria::Field(ref f) if f.compare == Comparison::IEq
            ));
            assert!(matches!(filter.criteria[1], Criteria::Edge(_)));
        }
        other => panic!("expected filter, got {:?}", other),
    }

    let graph = company_graph();
    let trails: Vec<_> = Searcher::new(&graph)
        .search(["bob"], &traversal)
        .unwrap()
        .collect();
    assert_eq!(ends(&trails), vec!["berlin"]);
}

#[test]
fn test_unknown_criteria_type_is_fatal() {
    let json = r#"{"steps": [{"type": "filter", "criteria": [{"type": "vibes"}]}]}"#;
    assert!(matches!(
        Traversal::from_json(json),
        Err(SearchError::Json(_))
    ));

    let yaml = "steps:\n  - type: jump\n";
    assert!(matches!(
        Traversal::from_yaml(yaml),
        Err(SearchError::Yaml(_))
    ));
}

#[test]
fn test_document_round_trip_preserves_results() {
    let traversal = Traversal::from_json(COLLEAGUES_JSON).unwrap();
    let again = Traversal::from_json(&traversal.to_json().unwrap()).unwrap();
    assert_eq!(again, traversal);
}

#[test]
fn test_config_file_limits_searches() {
    let file = write_temp(
        r#"
version: 1
preset: interactive
overrides:
  max_hops_limit: 2
"#,
    );
    let config = SearchConfig::from_yaml(file.path().to_str().unwrap()).unwrap();
    assert_eq!(config.preset, Preset::Interactive);
    assert_eq!(config.max_hops_limit, 2);

    let graph = chain_graph();
    let searcher = Searcher::with_config(&graph, config).unwrap();
    let too_deep = Traversal::new().out_nodes(["knows"], 3);
    assert!(matches!(
        searcher.search(["A"], &too_deep).err(),
        Some(SearchError::InvalidTraversal(_))
    ));
    assert_eq!(
        searcher
            .search(["A"], &Traversal::new().out_nodes(["knows"], 2))
            .unwrap()
            .count(),
        2
    );
}

#[test]
fn test_config_file_errors() {
    let file = write_temp("preset: balanced\n");
    assert!(matches!(
        SearchConfig::from_yaml(file.path().to_str().unwrap()),
        Err(ConfigError::MissingVersion)
    ));

    let file = write_temp("version: 1\npreset: reckless\n");
    assert!(matches!(
        SearchConfig::from_yaml(file.path().to_str().unwrap()),
        Err(ConfigError::UnknownPreset(_))
    ));
}

#[test]
fn test_use_case_with_document_request() {
    let graph = company_graph();
    let request: SearchRequest = serde_json::from_str(&format!(
        r#"{{"starts": ["ann", "cat"], "traversal": {}, "limit": 5}}"#,
        COLLEAGUES_JSON
    ))
    .unwrap();

    let response = SearchUseCaseImpl::new().execute(&graph, request).unwrap();
    let keys: Vec<&str> = response.hits.iter().map(|h| h.trail.current()).collect();
    // cat has no colleagues; the trail back to cat itself survives the ann-only exclude
    assert_eq!(keys, vec!["bob", "cat"]);
    assert_eq!(
        response.hits[0].node.as_ref().map(|n| n.label.as_str()),
        Some("PERSON")
    );
    assert!(!response.stats.truncated);

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["stats"]["hits"], 2);
    assert_eq!(json["hits"][0]["trail"]["start"], "ann");
}

#[test]
fn test_use_case_batch() {
    let graph = chain_graph();
    let usecase = SearchUseCaseImpl::with_config(SearchConfig::from_preset(Preset::Balanced)).unwrap();
    let requests: Vec<SearchRequest> = ["A", "B", "C", "D"]
        .iter()
        .map(|start| SearchRequest::new([*start], Traversal::new().out_nodes(["knows"], 3)))
        .collect();

    let counts: Vec<usize> = usecase
        .execute_batch(&graph, requests)
        .into_iter()
        .map(|r| r.unwrap().stats.hits)
        .collect();
    assert_eq!(counts, vec![3, 2, 1, 0]);
}
