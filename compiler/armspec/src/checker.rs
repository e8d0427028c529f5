//! Encoding validity checks.
//!
//! A check binds the template's fields for one candidate word in a fresh
//! [`Environment`], runs the decode body, and maps the outcome to a
//! [`Verdict`]. Defects are returned as errors, never folded into a verdict.

use std::fmt;

use armspec_eval::{run, EvalConfig, EvalError, Environment, Outcome};
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::Template;

/// Detailed result of checking one word against one template.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Verdict {
    /// A literal bit of the layout does not match the word.
    NotApplicable,
    /// The body ran to completion.
    Valid,
    /// `UNPREDICTABLE` or an implementation-defined statement was reached:
    /// the encoding exists, its behavior is unspecified.
    Unspecified,
    /// `SEE`: another instruction owns this encoding.
    SeeOther,
    /// `UNDEFINED`.
    Undefined,
}

impl Verdict {
    /// Whether the word is a valid encoding of the template.
    pub fn is_valid(self) -> bool {
        matches!(self, Verdict::Valid | Verdict::Unspecified)
    }
}

impl From<Outcome> for Verdict {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Continue => Verdict::Valid,
            Outcome::Stop => Verdict::Unspecified,
            Outcome::SeeOther => Verdict::SeeOther,
            Outcome::Undefined => Verdict::Undefined,
        }
    }
}

/// Runs validity checks under one [`EvalConfig`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Checker {
    config: EvalConfig,
}

impl Checker {
    pub fn new(config: EvalConfig) -> Self {
        Checker { config }
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Check one word.
    pub fn check(&self, template: &Template, word: u32) -> Result<Verdict, EvalError> {
        let mut env = Environment::new(self.config.names);
        if !template.bind(word, &mut env) {
            return Ok(Verdict::NotApplicable);
        }
        let verdict = Verdict::from(run(template.program(), &mut env, &self.config)?);
        trace!(template = template.name(), word, ?verdict, "checked");
        Ok(verdict)
    }

    /// Boolean form of [`check`](Self::check).
    pub fn is_valid(&self, template: &Template, word: u32) -> Result<bool, EvalError> {
        self.check(template, word).map(Verdict::is_valid)
    }

    /// Check every word against every template, templates in parallel. A
    /// defect in one template never affects another's report.
    pub fn check_batch(&self, templates: &[Template], words: &[u32]) -> BatchReport {
        let reports: Vec<TemplateReport> = templates
            .par_iter()
            .map(|template| self.check_template(template, words))
            .collect();
        let report = BatchReport { templates: reports };
        debug!(
            templates = report.templates.len(),
            defective = report.defective().count(),
            "batch checked"
        );
        report
    }

    fn check_template(&self, template: &Template, words: &[u32]) -> TemplateReport {
        let mut report = TemplateReport {
            name: template.name().to_string(),
            valid_words: Vec::new(),
            defective_words: 0,
            defect: None,
        };
        for &word in words {
            match self.check(template, word) {
                Ok(verdict) if verdict.is_valid() => report.valid_words.push(word),
                Ok(_) => {}
                Err(error) => {
                    report.defective_words += 1;
                    if report.defect.is_none() {
                        debug!(template = template.name(), %error, "defective template");
                        report.defect = Some(Defect { word, error });
                    }
                }
            }
        }
        report
    }
}

/// A defect hit while checking one word.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Defect {
    pub word: u32,
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_display"))]
    pub error: EvalError,
}

impl fmt::Display for Defect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}: {}", self.word, self.error)
    }
}

#[cfg(feature = "serde")]
fn serialize_display<S: serde::Serializer>(
    value: &impl fmt::Display,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

/// Results for one template.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TemplateReport {
    pub name: String,
    pub valid_words: Vec<u32>,
    /// Words whose check ended in a defect.
    pub defective_words: usize,
    /// The first defect, if any.
    pub defect: Option<Defect>,
}

impl TemplateReport {
    pub fn is_defective(&self) -> bool {
        self.defect.is_some()
    }
}

/// Results for a batch, in template order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BatchReport {
    pub templates: Vec<TemplateReport>,
}

impl BatchReport {
    /// Reports of templates that hit a defect.
    pub fn defective(&self) -> impl Iterator<Item = &TemplateReport> {
        self.templates.iter().filter(|t| t.is_defective())
    }

    pub fn get(&self, name: &str) -> Option<&TemplateReport> {
        self.templates.iter().find(|t| t.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_verdict_mapping() {
        assert_eq!(Verdict::from(Outcome::Continue), Verdict::Valid);
        assert_eq!(Verdict::from(Outcome::Stop), Verdict::Unspecified);
        assert_eq!(Verdict::from(Outcome::SeeOther), Verdict::SeeOther);
        assert_eq!(Verdict::from(Outcome::Undefined), Verdict::Undefined);

        let valid: Vec<_> = [
            Verdict::NotApplicable,
            Verdict::Valid,
            Verdict::Unspecified,
            Verdict::SeeOther,
            Verdict::Undefined,
        ]
        .into_iter()
        .map(Verdict::is_valid)
        .collect();
        assert_eq!(valid, [false, true, true, false, false]);
    }

    #[test]
    fn test_defect_display() {
        let defect = Defect {
            word: 0xE000_0010,
            error: EvalError::DivisionByZero,
        };
        assert_eq!(defect.to_string(), "0xe0000010: division by zero");
    }
}
