//! Classifier: normalized percent to an ordinal tier plus message key.

use crate::config::{BoundaryRule, ClassifierConfig, ScorePolarity};
use crate::core::Tier;
use serde::{Deserialize, Serialize};

/// Classification result: the tier and the message key a display layer
/// resolves to human-readable text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub tier: Tier,
    pub message_key: String,
}

/// Map a percent to a tier using two ascending cut-points, an explicit score
/// polarity, and an explicit boundary rule.
///
/// `BoundaryRule::Inclusive` resolves a percent exactly at a cut-point to the
/// better tier, at both cut-points, whichever way the polarity runs. Pure
/// function; no side effects.
pub fn classify(percent: u8, config: &ClassifierConfig) -> Outcome {
    let tier = resolve_tier(percent, config);
    let message_key = match tier {
        Tier::Peak => config.messages.peak.clone(),
        Tier::Tuning => config.messages.tuning.clone(),
        Tier::Reignite => config.messages.reignite.clone(),
    };
    Outcome { tier, message_key }
}

fn resolve_tier(percent: u8, config: &ClassifierConfig) -> Tier {
    let inclusive = config.boundary == BoundaryRule::Inclusive;
    match config.polarity {
        // Performance framing: the best tier sits above the high cut.
        ScorePolarity::HigherIsBetter => {
            if percent > config.high || (inclusive && percent == config.high) {
                Tier::Peak
            } else if percent > config.low || (inclusive && percent == config.low) {
                Tier::Tuning
            } else {
                Tier::Reignite
            }
        }
        // Symptom-burden framing: the best tier sits below the low cut.
        ScorePolarity::HigherIsWorse => {
            if percent < config.low || (inclusive && percent == config.low) {
                Tier::Peak
            } else if percent < config.high || (inclusive && percent == config.high) {
                Tier::Tuning
            } else {
                Tier::Reignite
            }
        }
    }
}
