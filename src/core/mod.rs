//! Shared domain types for the questionnaire pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Response encoding for a single question.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scale {
    /// Integer slider, 0 through 10.
    Slider,
    /// Five-level ordinal choice, encoded 1 through 5.
    Likert,
}

impl Scale {
    pub fn min(self) -> u8 {
        match self {
            Scale::Slider => 0,
            Scale::Likert => 1,
        }
    }

    pub fn max(self) -> u8 {
        match self {
            Scale::Slider => 10,
            Scale::Likert => 5,
        }
    }

    /// Width of the scale, the largest contribution one answer can make.
    pub fn span(self) -> u8 {
        self.max() - self.min()
    }

    pub fn contains(self, value: u8) -> bool {
        (self.min()..=self.max()).contains(&value)
    }
}

/// Whether a higher raw value on a question represents improvement or decline.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Polarity {
    #[default]
    Normal,
    /// Contributes `max - value`; used for e.g. "how often do you feel foggy".
    Inverted,
}

/// Raw answers keyed by question. BTreeMap keeps serialization order stable.
pub type AnswerSet = BTreeMap<String, u8>;

/// One of three ordinal outcome categories derived from a normalized score.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    /// Best outcome ("Peak Performer" / "Healthy").
    Peak,
    /// Middle outcome ("Engine Needs Tuning" / "Watch").
    Tuning,
    /// Worst outcome ("Reignite Your Drive" / "High Burden").
    Reignite,
}

impl Tier {
    pub fn label(self) -> &'static str {
        match self {
            Tier::Peak => "peak",
            Tier::Tuning => "tuning",
            Tier::Reignite => "reignite",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "peak" => Some(Tier::Peak),
            "tuning" => Some(Tier::Tuning),
            "reignite" => Some(Tier::Reignite),
            _ => None,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A completed questionnaire submission. Created once per compute action,
/// never mutated afterwards; stores only ever append these.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub timestamp: DateTime<Utc>,
    pub name: String,
    pub email: String,
    pub age: u32,
    pub score: u8,
    pub tier: Tier,
    pub answers: AnswerSet,
}

impl Submission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        age: u32,
        score: u8,
        tier: Tier,
        answers: AnswerSet,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            name: name.into(),
            email: email.into(),
            age,
            score,
            tier,
            answers,
        }
    }

    /// Flat `key=value;key=value` rendering used by the CSV row schema.
    pub fn answers_serialized(&self) -> String {
        self.answers
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join(";")
    }

    /// Parse the flat CSV rendering back into an answer set.
    pub fn parse_answers(serialized: &str) -> Option<AnswerSet> {
        if serialized.is_empty() {
            return Some(AnswerSet::new());
        }
        serialized
            .split(';')
            .map(|pair| {
                let (key, value) = pair.split_once('=')?;
                Some((key.to_string(), value.parse().ok()?))
            })
            .collect()
    }
}

/// How comparison buckets are formed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Bucketing {
    #[default]
    Tier,
    ScoreBins,
}

/// Fixed score bins used by score-bin bucketing, inclusive on both ends.
pub const SCORE_BINS: [(u8, u8); 4] = [(0, 40), (41, 60), (61, 80), (81, 100)];

/// Bucket label → value pairs produced by the comparator. Order is the
/// display order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    pub buckets: Vec<(String, u64)>,
}

impl Distribution {
    pub fn new(buckets: Vec<(String, u64)>) -> Self {
        Self { buckets }
    }

    pub fn total(&self) -> u64 {
        self.buckets.iter().map(|(_, v)| v).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
