// Infrastructure: CriteriaEvaluator - Criteria against a trail's current node
//
// Missing nodes, missing attributes and incomparable types are all
// "no match". Node schemas are heterogeneous, so none of these are errors.

use crate::features::traversal::domain::{Comparison, Criteria, EdgeCriteria, FieldCriteria};
use crate::shared::models::{Trail, Value};
use crate::shared::ports::Graph;
use ahash::AHashMap;
use regex::Regex;
use std::cmp::Ordering;

/// Evaluates criteria for one filter layer
///
/// Holds a compiled-regex cache, so each layer owns its own evaluator.
pub struct CriteriaEvaluator<'g, G: Graph + ?Sized> {
    graph: &'g G,
    regex_cache: AHashMap<String, Option<Regex>>,
}

impl<'g, G: Graph + ?Sized> CriteriaEvaluator<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        Self {
            graph,
            regex_cache: AHashMap::new(),
        }
    }

    pub fn evaluate(&mut self, criteria: &Criteria, trail: &Trail) -> bool {
        match criteria {
            Criteria::Field(field) => self.evaluate_attr_criteria(field, trail),
            Criteria::Edge(edge) => self.evaluate_rel_criteria(edge, trail),
        }
    }

    /// Compare a named attribute of the current node
    pub fn evaluate_attr_criteria(&mut self, criteria: &FieldCriteria, trail: &Trail) -> bool {
        let node = match self.graph.get_node(trail.current()) {
            Some(node) => node,
            None => return false,
        };
        let attr = match node.attribute(&criteria.field) {
            Some(attr) => attr,
            None => return false,
        };
        self.compare(&attr, criteria.compare, &criteria.value)
    }

    /// True on the first matching edge that lands in `criteria.keys`
    pub fn evaluate_rel_criteria(&self, criteria: &EdgeCriteria, trail: &Trail) -> bool {
        if criteria.keys.is_empty() {
            return false;
        }
        self.graph
            .iterate_edges(
                criteria.verb_filter(),
                criteria.direction_filter(),
                trail.current(),
            )
            .any(|(neighbor, _)| criteria.keys.contains(&neighbor))
    }

    fn compare(&mut self, attr: &Value, compare: Comparison, target: &Value) -> bool {
        match compare {
            Comparison::Eq => values_equal(attr, target),
            Comparison::Ne => !values_equal(attr, target),
            Comparison::IEq => str_op(attr, target, |a, b| a.eq_ignore_ascii_case(b)),
            Comparison::Lt => ordering(attr, target) == Some(Ordering::Less),
            Comparison::Lte => matches!(
                ordering(attr, target),
                Some(Ordering::Less | Ordering::Equal)
            ),
            Comparison::Gt => ordering(attr, target) == Some(Ordering::Greater),
            Comparison::Gte => matches!(
                ordering(attr, target),
                Some(Ordering::Greater | Ordering::Equal)
            ),
            Comparison::Contains => match attr {
                Value::List(items) => items.iter().any(|item| values_equal(item, target)),
                _ => str_op(attr, target, |a, b| a.contains(b)),
            },
            Comparison::IContains => str_op(attr, target, |a, b| {
                a.to_ascii_lowercase().contains(&b.to_ascii_lowercase())
            }),
            Comparison::StartsWith => str_op(attr, target, |a, b| a.starts_with(b)),
            Comparison::IStartsWith => str_op(attr, target, |a, b| {
                a.to_ascii_lowercase().starts_with(&b.to_ascii_lowercase())
            }),
            Comparison::EndsWith => str_op(attr, target, |a, b| a.ends_with(b)),
            Comparison::IEndsWith => str_op(attr, target, |a, b| {
                a.to_ascii_lowercase().ends_with(&b.to_ascii_lowercase())
            }),
            Comparison::Regex => match (attr.as_str(), target.as_str()) {
                (Some(text), Some(pattern)) => self
                    .regex(pattern)
                    .map(|re| re.is_match(text))
                    .unwrap_or(false),
                _ => false,
            },
            Comparison::In => target
                .as_list()
                .map(|items| items.iter().any(|item| values_equal(attr, item)))
                .unwrap_or(false),
            Comparison::Range => match target.as_list() {
                Some([low, high]) => {
                    matches!(
                        ordering(attr, low),
                        Some(Ordering::Greater | Ordering::Equal)
                    ) && matches!(
                        ordering(attr, high),
                        Some(Ordering::Less | Ordering::Equal)
                    )
                }
                _ => false,
            },
        }
    }

    fn regex(&mut self, pattern: &str) -> Option<&Regex> {
        self.regex_cache
            .entry(pattern.to_string())
            .or_insert_with(|| Regex::new(pattern).ok())
            .as_ref()
    }
}

/// Equality with Int/Float coercion
fn values_equal(a: &Value, b: &Value) -> bool {
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => a == b,
    }
}

/// Numbers order numerically, strings lexicographically, nothing else orders
fn ordering(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::String(x), Value::String(y)) => Some(x.cmp(y)),
        _ => match (a.as_f64(), b.as_f64()) {
            (Some(x), Some(y)) => x.partial_cmp(&y),
            _ => None,
        },
    }
}

fn str_op(a: &Value, b: &Value, op: impl Fn(&str, &str) -> bool) -> bool {
    match (a.as_str(), b.as_str()) {
        (Some(x), Some(y)) => op(x, y),
        _ => false,
    }
}
