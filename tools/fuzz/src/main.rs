use afl::fuzz;
use chrono::{Days, NaiveDate};
use cn_validators::resident_id::is_valid_on;
use cn_validators::{
    is_valid_mobile_number, ChineseIdChecksum, FieldRuleConfig, RecordChecker,
    SecondaryValidator, SimpleEvent, Validator,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn split_bytes_once(input: &[u8]) -> Option<(&[u8], &[u8])> {
    if let Some(i) = input.iter().position(|b| *b == b',') {
        Some((&input[0..i], &input[i + 1..]))
    } else {
        None
    }
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let (input, rand_seed) = split_bytes_once(bytes)?;
    let input_str = std::str::from_utf8(input).ok()?;

    let mut rng_seed: u64 = 0;
    for i in 0..8 {
        if rand_seed.len() > i {
            rng_seed <<= 8;
            rng_seed += rand_seed[i] as u64;
        }
    }

    let rng = StdRng::seed_from_u64(rng_seed);
    run_fuzz(input_str, rng);

    Some(())
}

fn gen_today(rng: &mut StdRng) -> NaiveDate {
    // anywhere between 1900 and the 2100s
    let base = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
    base.checked_add_days(Days::new(rng.gen_range(0..80_000)))
        .unwrap_or(base)
}

fn run_fuzz(input: &str, mut rng: StdRng) {
    let today = gen_today(&mut rng);

    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
        println!("Input len: {:?}", input.len());
        println!("Today: {}", today);
    }

    let valid = is_valid_on(Some(input), today);
    if valid {
        assert!(matches!(input.len(), 0 | 15 | 18));
        if input.len() == 18 {
            assert!(ChineseIdChecksum.is_valid_match(input));
            assert_eq!(
                is_valid_on(Some(&input.to_ascii_uppercase()), today),
                is_valid_on(Some(&input.to_ascii_lowercase()), today)
            );
        }
        // a date further in the future can't make a number invalid
        if let Some(later) = today.checked_add_days(Days::new(rng.gen_range(0..1_000))) {
            assert!(is_valid_on(Some(input), later));
        }
    }

    if is_valid_mobile_number(input) {
        assert_eq!(input.len(), 11);
    }

    let rules = [FieldRuleConfig::for_path("value")
        .unwrap()
        .required(rng.gen_bool(0.5))
        .validator(SecondaryValidator::ChineseMobileNumber)];
    let checker = RecordChecker::builder(&rules).build().unwrap();
    let _violations = checker.check(&SimpleEvent::row([("value", input)]));
}
