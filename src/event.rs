use crate::PathSegment;

/// Any record that can be checked needs to implement `Event`.
/// You can think of an Event as a "JSON-like" object that has a nested map of values with String
/// keys.
pub trait Event: Sized {
    /// Recursively visit all strings contained in the object. Absent values (e.g. JSON `null`)
    /// must not be visited.
    fn visit_event<'a>(&'a self, visitor: &mut impl EventVisitor<'a>);
}

pub trait EventVisitor<'path> {
    fn push_segment(&mut self, segment: PathSegment<'path>);
    fn pop_segment(&mut self);
    fn visit_string(&mut self, value: &str);
}

impl Event for String {
    fn visit_event<'path>(&'path self, visitor: &mut impl EventVisitor<'path>) {
        visitor.visit_string(self);
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;
    use crate::Path;

    /// Collects every visited string with its path.
    #[derive(Default)]
    pub struct CollectingVisitor {
        path: Vec<PathSegment<'static>>,
        pub visited: Vec<(String, String)>,
    }

    impl<'path> EventVisitor<'path> for CollectingVisitor {
        fn push_segment(&mut self, segment: PathSegment<'path>) {
            self.path.push(segment.into_static());
        }

        fn pop_segment(&mut self) {
            self.path.pop();
        }

        fn visit_string(&mut self, value: &str) {
            let path = Path::from(self.path.clone());
            self.visited.push((path.to_string(), value.to_string()));
        }
    }

    #[test]
    fn string_is_visited_at_the_root() {
        let mut visitor = CollectingVisitor::default();
        "13800138000".to_string().visit_event(&mut visitor);
        assert_eq!(
            visitor.visited,
            vec![("".to_string(), "13800138000".to_string())]
        );
    }
}
