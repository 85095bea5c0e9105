//! Scorer: raw answers to a normalized 0–100 percent.
//!
//! Each answer contributes its distance from the scale minimum (or from the
//! maximum, for inverted questions), weighted per question. The percent is
//! the weighted total over the maximum possible total, truncated (never
//! rounded) to match the arithmetic of the original questionnaires.

use crate::config::SurveyConfig;
use crate::core::{AnswerSet, Polarity};
use crate::errors::{DriveCheckError, Result};

/// Validate an answer set against the survey definition.
///
/// Every configured question must have exactly one in-range answer, and no
/// answer may reference a question the survey does not define. Runs before
/// any scoring arithmetic; failures are caller errors, never defaulted.
pub fn validate_answers(answers: &AnswerSet, config: &SurveyConfig) -> Result<()> {
    for question in &config.questions {
        match answers.get(&question.key) {
            None => return Err(DriveCheckError::MissingAnswer(question.key.clone())),
            Some(&value) if !question.scale.contains(value) => {
                return Err(DriveCheckError::OutOfRange {
                    key: question.key.clone(),
                    value,
                    min: question.scale.min(),
                    max: question.scale.max(),
                })
            }
            Some(_) => {}
        }
    }

    for key in answers.keys() {
        if !config.questions.iter().any(|q| &q.key == key) {
            return Err(DriveCheckError::UnknownQuestion(key.clone()));
        }
    }

    Ok(())
}

/// Compute the percent score for a validated answer set.
///
/// Deterministic pure function; output always lies in 0..=100.
pub fn score(answers: &AnswerSet, config: &SurveyConfig) -> Result<u8> {
    validate_answers(answers, config)?;

    // u64 throughout: weights are u32, so 100 * total stays far from the
    // u64 range even for pathological configurations.
    let total: u64 = config
        .questions
        .iter()
        .map(|question| {
            // validate_answers guarantees presence and range
            let value = answers[&question.key];
            let contribution = match question.polarity {
                Polarity::Normal => value - question.scale.min(),
                Polarity::Inverted => question.scale.max() - value,
            };
            u64::from(question.weight) * u64::from(contribution)
        })
        .sum();

    let max_total = config.max_possible_total();
    if max_total == 0 {
        return Err(DriveCheckError::config(
            "survey has zero maximum total; cannot normalize",
        ));
    }

    // Integer truncation, not rounding. total <= max_total so the quotient
    // is at most 100 and fits in u8.
    Ok((100 * total / max_total) as u8)
}
