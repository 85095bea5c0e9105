//! Comparator: reference distributions for an age group.
//!
//! Static mode looks the age up in a configured bracket table; computed mode
//! filters prior submissions to an age window and counts them per bucket.
//! Both are pure given their inputs.

use crate::config::ComparisonConfig;
use crate::core::{Bucketing, Distribution, Submission, Tier, SCORE_BINS};
use crate::errors::{DriveCheckError, Result};

/// Static mode: first bracket whose inclusive range contains `age` wins,
/// otherwise the configured default distribution. Brackets are
/// non-overlapping by contract (enforced at config validation); gaps fall
/// through to the default.
pub fn compare_static(age: u32, config: &ComparisonConfig) -> Distribution {
    let buckets = config
        .brackets
        .iter()
        .find(|bracket| (bracket.min..=bracket.max).contains(&age))
        .map(|bracket| &bracket.buckets)
        .unwrap_or(&config.default_buckets);

    Distribution::new(
        buckets
            .iter()
            .map(|bucket| (bucket.label.clone(), bucket.value))
            .collect(),
    )
}

/// Computed mode: count records with `age ∈ [age-window, age+window]` per
/// tier or per fixed score bin. An empty filtered set is the explicit
/// insufficient-data signal, never a zero-filled distribution.
pub fn compare_records(
    age: u32,
    window: u32,
    records: &[Submission],
    bucketing: Bucketing,
) -> Result<Distribution> {
    let lower = age.saturating_sub(window);
    let upper = age.saturating_add(window);
    let peers: Vec<&Submission> = records
        .iter()
        .filter(|r| (lower..=upper).contains(&r.age))
        .collect();

    if peers.is_empty() {
        return Err(DriveCheckError::InsufficientData { age, window });
    }

    let distribution = match bucketing {
        Bucketing::Tier => {
            let mut counts = [0u64; 3];
            for peer in &peers {
                match peer.tier {
                    Tier::Peak => counts[0] += 1,
                    Tier::Tuning => counts[1] += 1,
                    Tier::Reignite => counts[2] += 1,
                }
            }
            Distribution::new(
                [Tier::Peak, Tier::Tuning, Tier::Reignite]
                    .iter()
                    .zip(counts)
                    .map(|(tier, count)| (tier.label().to_string(), count))
                    .collect(),
            )
        }
        Bucketing::ScoreBins => {
            let mut counts = [0u64; SCORE_BINS.len()];
            for peer in &peers {
                if let Some(i) = SCORE_BINS
                    .iter()
                    .position(|(lo, hi)| (*lo..=*hi).contains(&peer.score))
                {
                    counts[i] += 1;
                }
            }
            Distribution::new(
                SCORE_BINS
                    .iter()
                    .zip(counts)
                    .map(|((lo, hi), count)| (format!("{lo}-{hi}"), count))
                    .collect(),
            )
        }
    };

    Ok(distribution)
}
