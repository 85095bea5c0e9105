use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::core::{Bucketing, Polarity, Scale};
use crate::errors::{DriveCheckError, Result};

/// Root survey definition, loaded from `drivecheck.toml`.
///
/// Every historical questionnaire variant is one instance of this structure;
/// the built-in default reproduces the original seven-question survey with
/// 80/60 higher-is-better thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyConfig {
    #[serde(default)]
    pub survey: SurveyMeta,

    #[serde(default = "default_questions")]
    pub questions: Vec<QuestionConfig>,

    #[serde(default)]
    pub classifier: ClassifierConfig,

    #[serde(default)]
    pub comparison: ComparisonConfig,

    #[serde(default)]
    pub store: StoreConfig,

    /// Message key → display text, consulted by the terminal writer.
    #[serde(default = "default_message_text")]
    pub messages: BTreeMap<String, String>,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            survey: SurveyMeta::default(),
            questions: default_questions(),
            classifier: ClassifierConfig::default(),
            comparison: ComparisonConfig::default(),
            store: StoreConfig::default(),
            messages: default_message_text(),
        }
    }
}

impl SurveyConfig {
    /// Validate the whole survey definition. Malformed weight or threshold
    /// tables are fatal at startup, never recovered per-request.
    pub fn validate(&self) -> Result<()> {
        if self.questions.is_empty() {
            return Err(DriveCheckError::config("survey defines no questions"));
        }

        let mut seen = std::collections::BTreeSet::new();
        for question in &self.questions {
            if question.key.is_empty() {
                return Err(DriveCheckError::config("question with empty key"));
            }
            // Keys appear in the store's flat key=value;... answers field,
            // so the delimiters must never occur inside one.
            if !question
                .key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
            {
                return Err(DriveCheckError::config(format!(
                    "question key '{}' may only contain letters, digits, '_' and '-'",
                    question.key
                )));
            }
            if !seen.insert(question.key.as_str()) {
                return Err(DriveCheckError::config(format!(
                    "duplicate question key '{}'",
                    question.key
                )));
            }
            if question.weight == 0 {
                return Err(DriveCheckError::config(format!(
                    "question '{}' has zero weight",
                    question.key
                )));
            }
        }

        self.classifier.validate()?;
        self.comparison.validate()
    }

    /// Summed weighted span of every question, in u64 so that arbitrarily
    /// large configured weights cannot overflow the percent arithmetic.
    pub fn max_possible_total(&self) -> u64 {
        self.questions
            .iter()
            .map(|q| u64::from(q.weight) * u64::from(q.scale.span()))
            .sum()
    }

    /// Display text for a message key, falling back to the key itself.
    pub fn message_text<'a>(&'a self, key: &'a str) -> &'a str {
        self.messages.get(key).map(String::as_str).unwrap_or(key)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyMeta {
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for SurveyMeta {
    fn default() -> Self {
        Self {
            title: default_title(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionConfig {
    /// Stable identifier, unique within the survey.
    pub key: String,

    /// Prompt shown next to the answer in reports. Optional.
    #[serde(default)]
    pub prompt: Option<String>,

    #[serde(default = "default_scale")]
    pub scale: Scale,

    #[serde(default)]
    pub polarity: Polarity,

    #[serde(default = "default_weight")]
    pub weight: u32,
}

impl QuestionConfig {
    fn slider(key: &str, polarity: Polarity) -> Self {
        Self {
            key: key.to_string(),
            prompt: None,
            scale: Scale::Slider,
            polarity,
            weight: 1,
        }
    }
}

/// Whether a higher percent is the good end or the bad end of the score.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScorePolarity {
    /// Performance framing: 100 is the best outcome (original variant).
    #[default]
    HigherIsBetter,
    /// Symptom-burden framing: 0 is the best outcome.
    HigherIsWorse,
}

/// Resolution for a percent landing exactly on a cut-point.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BoundaryRule {
    /// A percent at a cut-point belongs to the better tier (the original
    /// `>= 80` / `>= 60` chain).
    #[default]
    Inclusive,
    /// A percent at a cut-point belongs to the worse tier.
    Exclusive,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Lower cut-point, strictly less than `high`.
    #[serde(default = "default_low")]
    pub low: u8,

    /// Upper cut-point, at most 100.
    #[serde(default = "default_high")]
    pub high: u8,

    #[serde(default)]
    pub polarity: ScorePolarity,

    #[serde(default)]
    pub boundary: BoundaryRule,

    #[serde(default)]
    pub messages: TierMessages,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            low: default_low(),
            high: default_high(),
            polarity: ScorePolarity::default(),
            boundary: BoundaryRule::default(),
            messages: TierMessages::default(),
        }
    }
}

impl ClassifierConfig {
    pub fn validate(&self) -> Result<()> {
        if self.low >= self.high {
            return Err(DriveCheckError::config(format!(
                "classifier cut-points must ascend: low {} >= high {}",
                self.low, self.high
            )));
        }
        if self.high > 100 {
            return Err(DriveCheckError::config(format!(
                "classifier cut-point {} exceeds 100",
                self.high
            )));
        }
        Ok(())
    }
}

/// Message keys per tier, looked up in `[messages]` for display text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierMessages {
    #[serde(default = "default_peak_key")]
    pub peak: String,
    #[serde(default = "default_tuning_key")]
    pub tuning: String,
    #[serde(default = "default_reignite_key")]
    pub reignite: String,
}

impl Default for TierMessages {
    fn default() -> Self {
        Self {
            peak: default_peak_key(),
            tuning: default_tuning_key(),
            reignite: default_reignite_key(),
        }
    }
}

/// One labelled bucket of a reference distribution. A list of these keeps
/// display order, which a TOML table would not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketValue {
    pub label: String,
    pub value: u64,
}

/// Static comparison table entry: an inclusive age range and its buckets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgeBracket {
    pub min: u32,
    pub max: u32,
    pub buckets: Vec<BucketValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonConfig {
    /// Half-width of the age window for the computed mode (±years).
    #[serde(default = "default_window")]
    pub window: u32,

    #[serde(default)]
    pub bucketing: Bucketing,

    /// Static mode table. Ranges must not overlap; gaps fall through to
    /// `default_buckets`.
    #[serde(default)]
    pub brackets: Vec<AgeBracket>,

    /// Returned when no bracket contains the requested age.
    #[serde(default)]
    pub default_buckets: Vec<BucketValue>,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            window: default_window(),
            bucketing: Bucketing::default(),
            brackets: Vec::new(),
            default_buckets: Vec::new(),
        }
    }
}

impl ComparisonConfig {
    pub fn validate(&self) -> Result<()> {
        for bracket in &self.brackets {
            if bracket.min > bracket.max {
                return Err(DriveCheckError::config(format!(
                    "age bracket {}..{} has min above max",
                    bracket.min, bracket.max
                )));
            }
        }
        let mut sorted: Vec<_> = self.brackets.iter().collect();
        sorted.sort_by_key(|b| b.min);
        for pair in sorted.windows(2) {
            if pair[1].min <= pair[0].max {
                return Err(DriveCheckError::config(format!(
                    "age brackets {}..{} and {}..{} overlap",
                    pair[0].min, pair[0].max, pair[1].min, pair[1].max
                )));
            }
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StoreFormat {
    #[default]
    Csv,
    Jsonl,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub format: StoreFormat,

    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            format: StoreFormat::default(),
            path: default_store_path(),
        }
    }
}

fn default_title() -> String {
    "Test Drive Performance Check".to_string()
}

fn default_scale() -> Scale {
    Scale::Slider
}

fn default_weight() -> u32 {
    1
}

fn default_low() -> u8 {
    60
}

fn default_high() -> u8 {
    80
}

fn default_window() -> u32 {
    5
}

fn default_store_path() -> PathBuf {
    PathBuf::from("submissions.csv")
}

fn default_peak_key() -> String {
    "peak_performer".to_string()
}

fn default_tuning_key() -> String {
    "engine_needs_tuning".to_string()
}

fn default_reignite_key() -> String {
    "reignite_your_drive".to_string()
}

fn default_questions() -> Vec<QuestionConfig> {
    vec![
        QuestionConfig::slider("energy", Polarity::Normal),
        QuestionConfig::slider("focus", Polarity::Inverted),
        QuestionConfig::slider("motivation", Polarity::Normal),
        QuestionConfig::slider("confidence", Polarity::Normal),
        QuestionConfig::slider("recovery", Polarity::Normal),
        QuestionConfig::slider("mood", Polarity::Normal),
        QuestionConfig::slider("appearance", Polarity::Normal),
    ]
}

fn default_message_text() -> BTreeMap<String, String> {
    BTreeMap::from([
        (
            default_peak_key(),
            "Peak Performer in Progress — keep the momentum going.".to_string(),
        ),
        (
            default_tuning_key(),
            "Your engine needs tuning — you're on the edge.".to_string(),
        ),
        (
            default_reignite_key(),
            "Time to reignite your drive — you're not alone.".to_string(),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_survey_is_valid() {
        let config = SurveyConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.questions.len(), 7);
        assert_eq!(config.max_possible_total(), 70);
    }

    #[test]
    fn duplicate_question_keys_rejected() {
        let mut config = SurveyConfig::default();
        config.questions.push(QuestionConfig::slider("energy", Polarity::Normal));
        assert!(config.validate().is_err());
    }

    #[test]
    fn delimiter_characters_in_keys_rejected() {
        // "a=b" or "a;b" would round-trip as garbage through the CSV
        // answers field
        for bad in ["a=b", "a;b", "a b", "búho"] {
            let mut config = SurveyConfig::default();
            config.questions[0].key = bad.to_string();
            assert!(config.validate().is_err(), "key {bad:?} should be rejected");
        }

        let mut config = SurveyConfig::default();
        config.questions[0].key = "brain_fog-2".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_weight_rejected() {
        let mut config = SurveyConfig::default();
        config.questions[0].weight = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn descending_cut_points_rejected() {
        let mut config = SurveyConfig::default();
        config.classifier.low = 80;
        config.classifier.high = 60;
        assert!(config.validate().is_err());
    }

    #[test]
    fn overlapping_brackets_rejected() {
        let mut config = SurveyConfig::default();
        config.comparison.brackets = vec![
            AgeBracket {
                min: 40,
                max: 50,
                buckets: vec![],
            },
            AgeBracket {
                min: 50,
                max: 60,
                buckets: vec![],
            },
        ];
        assert!(config.validate().is_err());
    }

    #[test]
    fn gapped_brackets_allowed() {
        let mut config = SurveyConfig::default();
        config.comparison.brackets = vec![
            AgeBracket {
                min: 40,
                max: 45,
                buckets: vec![],
            },
            AgeBracket {
                min: 51,
                max: 55,
                buckets: vec![],
            },
        ];
        assert!(config.validate().is_ok());
    }

    #[test]
    fn message_text_falls_back_to_key() {
        let config = SurveyConfig::default();
        assert_eq!(config.message_text("nonexistent_key"), "nonexistent_key");
        assert!(config.message_text("peak_performer").contains("Peak"));
    }
}
