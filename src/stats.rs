use lazy_static::lazy_static;
use metrics::{counter, histogram, Counter, Histogram};

lazy_static! {
    pub static ref GLOBAL_STATS: Stats = Stats::new();
}

pub struct Stats {
    pub checker_creations: Counter,

    // The total number of rules in a checker
    pub number_of_rules_per_checker: Histogram,
}

impl Stats {
    pub fn new() -> Self {
        Self {
            checker_creations: counter!("checker.creations"),
            number_of_rules_per_checker: histogram!("checker.num_rules"),
        }
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::new()
    }
}
