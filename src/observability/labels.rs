use metrics::{IntoLabels, Label};
use serde::{Deserialize, Serialize};

/// Holder of multiple key-value labels providing some methods to easily clone and add new
/// labels in it. Converted into [Label]s when a metric is registered.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Labels(Vec<(String, String)>);

impl Labels {
    pub fn empty() -> Self {
        Labels(vec![])
    }

    pub fn new(labels: &[(impl Into<String> + Clone, impl Into<String> + Clone)]) -> Self {
        Labels(
            labels
                .iter()
                .map(|(key, value)| (key.clone().into(), value.clone().into()))
                .collect(),
        )
    }

    /// Clone the actual [Labels] with additional labels
    pub fn clone_with_labels(&self, additional_labels: Labels) -> Labels {
        let mut tags = self.0.clone();
        tags.extend(additional_labels.0);
        Labels(tags)
    }
}

impl IntoLabels for Labels {
    fn into_labels(self) -> Vec<Label> {
        self.0
            .into_iter()
            .map(|(key, value)| Label::new(key, value))
            .collect()
    }
}
