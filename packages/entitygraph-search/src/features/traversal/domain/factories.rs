// Domain: T, F and R factories - fluent entry points
//
//   T::new().out_nodes(["knows"], 2).include([F::field("name").eq("C")])
//   T::new().include([R::outgoing("works_at").keys(["acme"])])

use super::criteria::{Comparison, Criteria, EdgeCriteria, FieldCriteria};
use super::steps::Traversal;
use crate::shared::models::{Direction, Value};

/// T factory - traversal builder
pub struct T;

impl T {
    pub fn new() -> Traversal {
        Traversal::new()
    }
}

/// F factory - field criteria builder
pub struct F;

impl F {
    pub fn field(name: impl Into<String>) -> FieldRef {
        FieldRef { field: name.into() }
    }

    pub fn label() -> FieldRef {
        Self::field("label")
    }

    pub fn key() -> FieldRef {
        Self::field("key")
    }
}

/// Named attribute awaiting a comparison
#[derive(Debug, Clone)]
pub struct FieldRef {
    field: String,
}

impl FieldRef {
    fn compare(self, compare: Comparison, value: impl Into<Value>) -> Criteria {
        Criteria::Field(FieldCriteria::new(self.field, compare, value))
    }

    pub fn eq(self, value: impl Into<Value>) -> Criteria {
        self.compare(Comparison::Eq, value)
    }

    pub fn ne(self, value: impl Into<Value>) -> Criteria {
        self.compare(Comparison::Ne, value)
    }

    pub fn ieq(self, value: impl Into<String>) -> Criteria {
        self.compare(Comparison::IEq, value.into())
    }

    pub fn lt(self, value: impl Into<Value>) -> Criteria {
        self.compare(Comparison::Lt, value)
    }

    pub fn lte(self, value: impl Into<Value>) -> Criteria {
        self.compare(Comparison::Lte, value)
    }

    pub fn gt(self, value: impl Into<Value>) -> Criteria {
        self.compare(Comparison::Gt, value)
    }

    pub fn gte(self, value: impl Into<Value>) -> Criteria {
        self.compare(Comparison::Gte, value)
    }

    pub fn contains(self, value: impl Into<String>) -> Criteria {
        self.compare(Comparison::Contains, value.into())
    }

    pub fn icontains(self, value: impl Into<String>) -> Criteria {
        self.compare(Comparison::IContains, value.into())
    }

    pub fn starts_with(self, value: impl Into<String>) -> Criteria {
        self.compare(Comparison::StartsWith, value.into())
    }

    pub fn istarts_with(self, value: impl Into<String>) -> Criteria {
        self.compare(Comparison::IStartsWith, value.into())
    }

    pub fn ends_with(self, value: impl Into<String>) -> Criteria {
        self.compare(Comparison::EndsWith, value.into())
    }

    pub fn iends_with(self, value: impl Into<String>) -> Criteria {
        self.compare(Comparison::IEndsWith, value.into())
    }

    pub fn regex(self, pattern: impl Into<String>) -> Criteria {
        self.compare(Comparison::Regex, pattern.into())
    }

    pub fn is_in<I, V>(self, values: I) -> Criteria
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        self.compare(Comparison::In, Value::List(values))
    }

    pub fn range(self, low: impl Into<Value>, high: impl Into<Value>) -> Criteria {
        self.compare(Comparison::Range, Value::List(vec![low.into(), high.into()]))
    }
}

/// R factory - relationship (edge) criteria builder
pub struct R;

impl R {
    /// Outgoing edge with `verb`
    pub fn outgoing(verb: impl Into<String>) -> EdgeCriteria {
        EdgeCriteria::new().verb(verb).direction(Direction::Out)
    }

    /// Incoming edge with `verb`
    pub fn incoming(verb: impl Into<String>) -> EdgeCriteria {
        EdgeCriteria::new().verb(verb).direction(Direction::In)
    }

    /// Edge with `verb` in either direction
    pub fn verb(verb: impl Into<String>) -> EdgeCriteria {
        EdgeCriteria::new().verb(verb)
    }

    /// Any edge at all
    pub fn any() -> EdgeCriteria {
        EdgeCriteria::new()
    }
}
