use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull, DisplayFromStr};
use strum::IntoStaticStr;

use crate::path::PathParseError;
use crate::{Labels, Path};

#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, IntoStaticStr,
)]
#[serde(tag = "type")]
#[strum(serialize_all = "snake_case")]
pub enum SecondaryValidator {
    /// Structure, region, birth date and check character of a 15 or 18 character number.
    ResidentIdNumber,
    /// Check character of an 18 character number only.
    ChineseIdChecksum,
    ChineseMobileNumber,
}

impl SecondaryValidator {
    /// Name used in metric labels
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

/// A constraint on a single field of a record. Paths are written the way they are displayed,
/// e.g. `contacts[1].mobile`.
#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FieldRuleConfig {
    #[serde_as(as = "DisplayFromStr")]
    pub path: Path<'static>,

    /// The field must be present with a non-blank value. This is independent of the validator,
    /// which accepts an empty identity number.
    #[serde(default)]
    pub required: bool,

    pub validator: Option<SecondaryValidator>,

    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub labels: Labels,
}

impl FieldRuleConfig {
    pub fn new(path: Path<'static>) -> Self {
        Self {
            path,
            required: false,
            validator: None,
            labels: Labels::default(),
        }
    }

    /// Same as `new`, with the path in its display form.
    pub fn for_path(path: &str) -> Result<Self, PathParseError> {
        Ok(Self::new(Path::parse(path)?))
    }

    pub fn required(&self, required: bool) -> Self {
        self.mutate_clone(|x| x.required = required)
    }

    pub fn validator(&self, validator: SecondaryValidator) -> Self {
        self.mutate_clone(|x| x.validator = Some(validator))
    }

    pub fn labels(&self, labels: Labels) -> Self {
        self.mutate_clone(|x| x.labels = labels)
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}
