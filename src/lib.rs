// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod checker;
mod event;
mod event_json;
mod observability;
mod path;
mod secondary_validation;
mod stats;

#[cfg(any(test, feature = "testing", feature = "bench"))]
mod simple_event;

// This is the public API of the library
pub use checker::{
    config::{FieldRuleConfig, SecondaryValidator},
    error::CreateCheckerError,
    RecordChecker, RecordCheckerBuilder, Violation, ViolationKind,
};
pub use event::{Event, EventVisitor};
pub use observability::labels::Labels;
pub use path::{Path, PathParseError, PathSegment};
pub use secondary_validation::{
    compute_check_character, is_valid_mobile_number, region_name, region_of_address_code,
    resident_id, ChineseIdChecksum, ChineseMobileNumber, ResidentIdNumber, Validator,
};

#[cfg(any(feature = "testing", feature = "bench"))]
pub use crate::simple_event::SimpleEvent;
