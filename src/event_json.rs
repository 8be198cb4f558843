use crate::{Event, EventVisitor, PathSegment};

impl Event for serde_json::Value {
    fn visit_event<'a>(&'a self, visitor: &mut impl EventVisitor<'a>) {
        match self {
            serde_json::Value::Null => {}
            serde_json::Value::Bool(value) => {
                visitor.visit_string(value.to_string().as_str());
            }
            serde_json::Value::Number(number) => {
                visitor.visit_string(number.to_string().as_str());
            }
            serde_json::Value::String(s) => {
                visitor.visit_string(s);
            }
            serde_json::Value::Object(map) => {
                map.visit_event(visitor);
            }
            serde_json::Value::Array(values) => {
                for (i, value) in values.iter().enumerate() {
                    visitor.push_segment(PathSegment::Index(i));
                    value.visit_event(visitor);
                    visitor.pop_segment();
                }
            }
        }
    }
}

impl Event for serde_json::Map<String, serde_json::Value> {
    fn visit_event<'a>(&'a self, visitor: &mut impl EventVisitor<'a>) {
        for (k, child) in self.iter() {
            visitor.push_segment(k.as_str().into());
            child.visit_event(visitor);
            visitor.pop_segment();
        }
    }
}
