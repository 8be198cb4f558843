//! Validation of resident identity numbers (GB 11643-1999).
//!
//! An 18 character number is laid out as a 6 digit address code, an 8 digit birth date
//! (`YYYYMMDD`), a 3 digit sequence number and a check character. The legacy 15 digit form
//! has a 6 digit birth date (`YYMMDD`, always in the 1900s) and no check character.

use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::secondary_validation::chinese_id_checksum::{ChineseIdChecksum, CHINESE_ID_LENGTH};
use crate::secondary_validation::region_code::region_of_address_code;
use crate::secondary_validation::Validator;

pub const LEGACY_ID_LENGTH: usize = 15;
const ADDRESS_CODE_LENGTH: usize = 6;

// `[0-9]` rather than `\d`: the regex crate's `\d` also accepts non-ASCII decimal digits.
static LENGTH_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new("^(?:[0-9]{15}|[0-9]{17}[0-9xX])$").unwrap());
static LEGACY_ID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^[1-9][0-9]{7}(?:0[1-9]|1[0-2])(?:0[1-9]|[12][0-9]|3[01])[0-9]{3}$").unwrap()
});
static ID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        "^[1-9][0-9]{5}[1-9][0-9]{3}(?:0[1-9]|1[0-2])(?:0[1-9]|[12][0-9]|3[01])[0-9]{3}[0-9xX]$",
    )
    .unwrap()
});
static BIRTH_DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^[1-9][0-9]{3}(?:0[1-9]|1[0-2])(?:0[1-9]|[12][0-9]|3[01])$").unwrap()
});

/// Full validation of a 15 or 18 character resident identity number: structure, region,
/// birth date and (18 characters only) check character.
///
/// An empty string is considered valid, "required" has to be enforced separately.
pub struct ResidentIdNumber;

impl Validator for ResidentIdNumber {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        is_valid(Some(regex_match))
    }
}

/// Validates `candidate` against today's local date. Absent or empty input is valid.
pub fn is_valid(candidate: Option<&str>) -> bool {
    is_valid_on(candidate, Local::now().date_naive())
}

/// Same as [is_valid], with the date used as the upper bound for birth dates.
pub fn is_valid_on(candidate: Option<&str>, today: NaiveDate) -> bool {
    let id = match candidate {
        None | Some("") => return true,
        Some(id) => id,
    };
    if !LENGTH_PATTERN.is_match(id) {
        return false;
    }
    // the length pattern only lets ASCII through, so byte offsets are character offsets
    match id.len() {
        LEGACY_ID_LENGTH => check_legacy_id(id, today),
        CHINESE_ID_LENGTH => check_id(id, today),
        _ => false,
    }
}

fn check_legacy_id(id: &str, today: NaiveDate) -> bool {
    if !LEGACY_ID_PATTERN.is_match(id) {
        return false;
    }
    if region_of_address_code(&id[..ADDRESS_CODE_LENGTH]).is_none() {
        return false;
    }
    let birth_date_code = format!("19{}", &id[6..12]);
    check_birth_date_code(&birth_date_code, today)
}

fn check_id(id: &str, today: NaiveDate) -> bool {
    if !ID_PATTERN.is_match(id) {
        return false;
    }
    if region_of_address_code(&id[..ADDRESS_CODE_LENGTH]).is_none() {
        return false;
    }
    if !check_birth_date_code(&id[6..14], today) {
        return false;
    }
    ChineseIdChecksum.is_valid_match(id)
}

/// The date has to exist on the calendar and must not be after `today`.
fn check_birth_date_code(code: &str, today: NaiveDate) -> bool {
    parse_birth_date(code).is_some_and(|birth_date| birth_date <= today)
}

fn parse_birth_date(code: &str) -> Option<NaiveDate> {
    if !BIRTH_DATE_PATTERN.is_match(code) {
        return None;
    }
    let year = code[..4].parse().ok()?;
    let month = code[4..6].parse().ok()?;
    let day = code[6..].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
