use crate::secondary_validation::Validator;

pub struct ChineseIdChecksum;

pub const CHINESE_ID_LENGTH: usize = 18;
const CHINESE_ID_COEFFICIENTS: [u32; CHINESE_ID_LENGTH - 1] =
    [7, 9, 10, 5, 8, 4, 2, 1, 6, 3, 7, 9, 10, 5, 8, 4, 2];
/// Check character indexed by the weighted sum modulo 11 (ISO 7064:1983, MOD 11-2).
const CHECK_CHARACTERS: [char; 11] = ['1', '0', 'X', '9', '8', '7', '6', '5', '4', '3', '2'];

/// Computes the 18th character of a resident identity number from its first 17 digits.
/// Returns `None` unless `body` is exactly 17 ASCII digits.
pub fn compute_check_character(body: &str) -> Option<char> {
    if body.len() != CHINESE_ID_LENGTH - 1 {
        return None;
    }
    let mut sum = 0;
    for (c, coefficient) in body.bytes().zip(CHINESE_ID_COEFFICIENTS) {
        if !c.is_ascii_digit() {
            return None;
        }
        sum += u32::from(c - b'0') * coefficient;
    }
    Some(CHECK_CHARACTERS[(sum % 11) as usize])
}

impl Validator for ChineseIdChecksum {
    // https://en.wikipedia.org/wiki/Resident_Identity_Card
    fn is_valid_match(&self, regex_match: &str) -> bool {
        if regex_match.len() != CHINESE_ID_LENGTH || !regex_match.is_ascii() {
            return false;
        }
        let (body, check) = regex_match.split_at(CHINESE_ID_LENGTH - 1);
        match (compute_check_character(body), check.chars().next()) {
            (Some(expected), Some(actual)) => actual.to_ascii_uppercase() == expected,
            _ => false,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::secondary_validation::*;

    #[test]
    fn test_valid_chinese_ids() {
        let valid_ids = vec![
            "513231200012121657",
            "513231200012121673",
            "51323120001212169X",
            "513231200012121710",
            "513231200012121737",
            "513231200012121753",
            "513231200012121294",
            "51323120001212177X",
            "513231200012121796",
            "513231200012121817",
            "513231200012121833",
            "51323120001212185X",
            // Same with lowercase x should work
            "51323120001212185x",
            "513231200012121876",
            "513231200012121892",
        ];
        for id in valid_ids {
            assert!(ChineseIdChecksum.is_valid_match(id));
        }
    }

    #[test]
    fn test_invalid_chinese_ids() {
        let invalid_ids = vec![
            // wrong checksum
            "513231200012121293",
            // non digit characters
            "a13231200012121293",
            // wrong length
            "a1323120001212129",
            // Non utf-8 characters 18 bytes
            "513231200012Àñô",
            // check character outside of the alphabet
            "51323120001212185Y",
        ];
        for id in invalid_ids {
            assert!(!ChineseIdChecksum.is_valid_match(id));
        }
    }

    #[test]
    fn check_character_covers_every_remainder() {
        assert_eq!(compute_check_character("11010119900307854"), Some('X'));
        assert_eq!(compute_check_character("44030820000229123"), Some('1'));
        assert_eq!(compute_check_character("99010119900307854"), Some('3'));
        assert_eq!(compute_check_character("00000000000000000"), Some('1'));

        // A single `1` at position i contributes its coefficient to the sum, which lets us
        // reach every remainder and pin the table order.
        let table = ['1', '0', 'X', '9', '8', '7', '6', '5', '4', '3', '2'];
        let coefficients: [usize; 17] = [7, 9, 10, 5, 8, 4, 2, 1, 6, 3, 7, 9, 10, 5, 8, 4, 2];
        for (position, coefficient) in coefficients.iter().enumerate() {
            let mut body = vec![b'0'; 17];
            body[position] = b'1';
            let body = String::from_utf8(body).unwrap();
            assert_eq!(
                compute_check_character(&body),
                Some(table[coefficient % 11]),
                "body {body}"
            );
        }
    }

    #[test]
    fn check_character_rejects_bad_bodies() {
        assert_eq!(compute_check_character(""), None);
        assert_eq!(compute_check_character("1101011990030785"), None);
        assert_eq!(compute_check_character("110101199003078541"), None);
        assert_eq!(compute_check_character("1101011990030785a"), None);
    }

    #[test]
    fn flipping_the_check_character_fails() {
        let id = "11010119900307854X";
        for c in ['1', '0', '9', '8', '7', '6', '5', '4', '3', '2'] {
            let flipped = format!("{}{c}", &id[..17]);
            assert!(!ChineseIdChecksum.is_valid_match(&flipped), "{flipped}");
        }
    }
}
