mod chinese_id_checksum;
mod chinese_mobile_number;
mod region_code;
pub mod resident_id;

use crate::checker::config::SecondaryValidator;
pub use crate::secondary_validation::chinese_id_checksum::{
    compute_check_character, ChineseIdChecksum,
};
pub use crate::secondary_validation::chinese_mobile_number::{
    is_valid_mobile_number, ChineseMobileNumber,
};
pub use crate::secondary_validation::region_code::{region_name, region_of_address_code};
pub use crate::secondary_validation::resident_id::ResidentIdNumber;

pub trait Validator: Send + Sync {
    fn is_valid_match(&self, regex_match: &str) -> bool;
}

impl Validator for SecondaryValidator {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        match self {
            SecondaryValidator::ResidentIdNumber => ResidentIdNumber.is_valid_match(regex_match),
            SecondaryValidator::ChineseIdChecksum => ChineseIdChecksum.is_valid_match(regex_match),
            SecondaryValidator::ChineseMobileNumber => {
                ChineseMobileNumber.is_valid_match(regex_match)
            }
        }
    }
}
