use std::collections::BTreeMap;

use crate::{Event, EventVisitor, PathSegment};

/// A simple implementation of `Event`. This is meant for testing / demonstration purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleEvent {
    String(String),
    List(Vec<SimpleEvent>),
    Map(BTreeMap<String, SimpleEvent>),
}

impl Event for SimpleEvent {
    fn visit_event<'path>(&'path self, visitor: &mut impl EventVisitor<'path>) {
        match self {
            Self::String(value) => {
                visitor.visit_string(value);
            }
            Self::List(list) => {
                for (i, child) in list.iter().enumerate() {
                    visitor.push_segment(PathSegment::Index(i));
                    child.visit_event(visitor);
                    visitor.pop_segment();
                }
            }
            Self::Map(map) => {
                for (key, child) in map.iter() {
                    visitor.push_segment(key.as_str().into());
                    child.visit_event(visitor);
                    visitor.pop_segment();
                }
            }
        }
    }
}

impl SimpleEvent {
    /// Builds a flat map of string values, the shape of a single imported spreadsheet row.
    pub fn row<K: Into<String>, V: Into<String>>(fields: impl IntoIterator<Item = (K, V)>) -> Self {
        Self::Map(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), Self::String(v.into())))
                .collect(),
        )
    }
}
