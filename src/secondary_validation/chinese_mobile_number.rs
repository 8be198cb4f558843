use once_cell::sync::Lazy;
use regex::Regex;

use crate::secondary_validation::Validator;

/// Mainland mobile numbers, restricted to the number segments allocated to the three carriers.
pub struct ChineseMobileNumber;

static MOBILE_NUMBER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        "^(?:",
        "13[0-9][0-9]{8}",
        "|14[5-9][0-9]{8}",
        "|14[14]0[0-9]{7}",
        "|15[0-35-9][0-9]{8}",
        "|166[0-9]{8}",
        "|170[0-35-9][0-9]{7}",
        "|17[135678][0-9]{8}",
        "|1740[0-5][0-9]{6}",
        "|18[0-9][0-9]{8}",
        "|19[89][0-9]{8}",
        ")$"
    ))
    .unwrap()
});

/// Unlike identity numbers, an empty phone number is invalid.
pub fn is_valid_mobile_number(phone: &str) -> bool {
    MOBILE_NUMBER_PATTERN.is_match(phone)
}

impl Validator for ChineseMobileNumber {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        is_valid_mobile_number(regex_match)
    }
}
