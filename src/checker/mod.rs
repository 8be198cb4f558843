use self::metrics::{CheckerMetrics, RuleMetrics};
use crate::checker::config::{FieldRuleConfig, SecondaryValidator};
use crate::checker::error::CreateCheckerError;
use crate::secondary_validation::Validator;
use crate::stats::GLOBAL_STATS;
use crate::{Event, EventVisitor, Labels, Path, PathSegment};

pub mod config;
pub mod error;
pub mod metrics;


/// A rule that failed for a record.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Violation {
    /// The index of the rule that failed. This preserves the order
    /// of rules that were passed into the checker.
    pub rule_index: usize,

    /// Path of the offending field. For missing fields this is the path of the rule.
    pub path: Path<'static>,

    pub kind: ViolationKind,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum ViolationKind {
    /// A required field is absent or blank
    Missing,
    /// The value was rejected by the validator of the rule
    Invalid { validator: SecondaryValidator },
}

struct CompiledFieldRule {
    path: Path<'static>,
    required: bool,
    validator: Option<SecondaryValidator>,
    metrics: RuleMetrics,
}

pub struct RecordChecker {
    rules: Vec<CompiledFieldRule>,
    metrics: CheckerMetrics,
    labels: Labels,
}

impl RecordChecker {
    pub fn builder(rules: &[FieldRuleConfig]) -> RecordCheckerBuilder<'_> {
        RecordCheckerBuilder::new(rules)
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Checks a single record against every rule. The returned violations are sorted by rule
    /// index, then by path.
    pub fn check<E: Event>(&self, event: &E) -> Vec<Violation> {
        let mut visitor = RecordVisitor {
            rules: &self.rules,
            path: vec![],
            present: vec![false; self.rules.len()],
            violations: vec![],
        };
        event.visit_event(&mut visitor);

        let RecordVisitor {
            present,
            mut violations,
            ..
        } = visitor;

        for (rule_index, rule) in self.rules.iter().enumerate() {
            if rule.required && !present[rule_index] {
                violations.push(Violation {
                    rule_index,
                    path: rule.path.clone(),
                    kind: ViolationKind::Missing,
                });
            }
        }
        violations.sort();
        self.record_metrics(&violations);
        violations
    }

    pub fn is_valid<E: Event>(&self, event: &E) -> bool {
        self.check(event).is_empty()
    }

    /// Checks a batch of records (e.g. the rows of an import), returning the index and the
    /// violations of every record that failed.
    pub fn check_all<'e, E: Event + 'e>(
        &self,
        events: impl IntoIterator<Item = &'e E>,
    ) -> Vec<(usize, Vec<Violation>)> {
        events
            .into_iter()
            .enumerate()
            .filter_map(|(index, event)| {
                let violations = self.check(event);
                (!violations.is_empty()).then_some((index, violations))
            })
            .collect()
    }

    fn record_metrics(&self, violations: &[Violation]) {
        self.metrics.num_checked_records.increment(1);
        for violation in violations {
            match violation.kind {
                ViolationKind::Missing => self.metrics.missing_violations.increment(1),
                ViolationKind::Invalid { .. } => {
                    self.metrics.invalid_violations.increment(1);
                    self.rules[violation.rule_index]
                        .metrics
                        .validation_rejections
                        .increment(1);
                }
            }
        }
    }
}

struct RecordVisitor<'a, 'path> {
    rules: &'a [CompiledFieldRule],
    path: Vec<PathSegment<'path>>,
    // rules whose field was seen with a non-blank value
    present: Vec<bool>,
    violations: Vec<Violation>,
}

impl<'path> EventVisitor<'path> for RecordVisitor<'_, 'path> {
    fn push_segment(&mut self, segment: PathSegment<'path>) {
        self.path.push(segment);
    }

    fn pop_segment(&mut self) {
        self.path.pop();
    }

    fn visit_string(&mut self, value: &str) {
        for (rule_index, rule) in self.rules.iter().enumerate() {
            if rule.path.segments.as_slice() != self.path.as_slice() {
                continue;
            }
            if !value.trim().is_empty() {
                self.present[rule_index] = true;
            }
            if let Some(validator) = rule.validator {
                if !validator.is_valid_match(value) {
                    self.violations.push(Violation {
                        rule_index,
                        path: rule.path.clone(),
                        kind: ViolationKind::Invalid { validator },
                    });
                }
            }
        }
    }
}

pub struct RecordCheckerBuilder<'a> {
    rules: &'a [FieldRuleConfig],
    labels: Labels,
}

impl RecordCheckerBuilder<'_> {
    pub fn new(rules: &[FieldRuleConfig]) -> RecordCheckerBuilder<'_> {
        RecordCheckerBuilder {
            rules,
            labels: Labels::empty(),
        }
    }

    pub fn labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    pub fn build(self) -> Result<RecordChecker, CreateCheckerError> {
        let compiled_rules = self
            .rules
            .iter()
            .enumerate()
            .map(|(rule_index, config)| {
                if config.path.is_empty() {
                    return Err(CreateCheckerError::EmptyPath { rule_index });
                }
                if config.path.has_empty_field() {
                    return Err(CreateCheckerError::EmptyFieldName { rule_index });
                }
                if !config.required && config.validator.is_none() {
                    return Err(CreateCheckerError::NoConstraint { rule_index });
                }
                let rule_labels = self.labels.clone_with_labels(config.labels.clone());
                Ok(CompiledFieldRule {
                    path: config.path.clone(),
                    required: config.required,
                    validator: config.validator,
                    metrics: RuleMetrics::new(&rule_labels, config.validator),
                })
            })
            .collect::<Result<Vec<CompiledFieldRule>, CreateCheckerError>>()?;

        {
            let stats = &*GLOBAL_STATS;
            stats.checker_creations.increment(1);
            stats
                .number_of_rules_per_checker
                .record(compiled_rules.len() as f64);
        }

        Ok(RecordChecker {
            rules: compiled_rules,
            metrics: CheckerMetrics::new(&self.labels),
            labels: self.labels,
        })
    }
}
