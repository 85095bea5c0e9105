//! Score → submit → compare round trips against both store backends.

use drivecheck::compare::compare_records;
use drivecheck::config::{StoreConfig, StoreFormat};
use drivecheck::core::{AnswerSet, Bucketing, Submission, Tier};
use drivecheck::errors::DriveCheckError;
use drivecheck::store::open_store;

fn submission(age: u32, score: u8, tier: Tier) -> Submission {
    let mut answers = AnswerSet::new();
    answers.insert("energy".into(), score / 10);
    Submission::new("Robin", "robin@example.com", age, score, tier, answers)
}

fn store_config(format: StoreFormat, dir: &std::path::Path) -> StoreConfig {
    let file = match format {
        StoreFormat::Csv => "submissions.csv",
        StoreFormat::Jsonl => "submissions.jsonl",
    };
    StoreConfig {
        format,
        path: dir.join(file),
    }
}

#[test]
fn submissions_survive_a_round_trip_and_feed_the_comparator() {
    for format in [StoreFormat::Csv, StoreFormat::Jsonl] {
        let dir = tempfile::tempdir().unwrap();
        let config = store_config(format, dir.path());

        {
            let mut store = open_store(&config);
            store.append(&submission(44, 85, Tier::Peak)).unwrap();
            store.append(&submission(47, 55, Tier::Reignite)).unwrap();
            store.append(&submission(49, 62, Tier::Tuning)).unwrap();
            store.append(&submission(72, 91, Tier::Peak)).unwrap();
        }

        // fresh handle, as a later compare invocation would open
        let store = open_store(&config);
        let records = store.records_matching(&|_| true).unwrap();
        assert_eq!(records.len(), 4, "{format:?}");

        let distribution = compare_records(46, 5, &records, Bucketing::Tier).unwrap();
        assert_eq!(
            distribution.buckets,
            vec![
                ("peak".to_string(), 1),
                ("tuning".to_string(), 1),
                ("reignite".to_string(), 1),
            ],
            "{format:?}"
        );
    }
}

#[test]
fn comparator_reports_insufficient_data_for_sparse_stores() {
    let dir = tempfile::tempdir().unwrap();
    let config = store_config(StoreFormat::Jsonl, dir.path());

    let mut store = open_store(&config);
    store.append(&submission(25, 70, Tier::Tuning)).unwrap();

    let records = store.records_matching(&|_| true).unwrap();
    let err = compare_records(60, 5, &records, Bucketing::Tier).unwrap_err();
    assert!(matches!(
        err,
        DriveCheckError::InsufficientData { age: 60, window: 5 }
    ));
}

#[test]
fn predicate_queries_push_the_age_filter_into_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let config = store_config(StoreFormat::Csv, dir.path());

    let mut store = open_store(&config);
    for age in [30, 41, 45, 49, 58] {
        store.append(&submission(age, 50, Tier::Tuning)).unwrap();
    }

    let forties = store
        .records_matching(&|s| (40..50).contains(&s.age))
        .unwrap();
    assert_eq!(forties.len(), 3);
    assert!(forties.iter().all(|s| (40..50).contains(&s.age)));
}

#[test]
fn score_bin_bucketing_over_a_real_store() {
    let dir = tempfile::tempdir().unwrap();
    let config = store_config(StoreFormat::Csv, dir.path());

    let mut store = open_store(&config);
    store.append(&submission(45, 40, Tier::Reignite)).unwrap();
    store.append(&submission(45, 41, Tier::Reignite)).unwrap();
    store.append(&submission(45, 80, Tier::Tuning)).unwrap();
    store.append(&submission(45, 81, Tier::Peak)).unwrap();

    let records = store.records_matching(&|_| true).unwrap();
    let distribution = compare_records(45, 5, &records, Bucketing::ScoreBins).unwrap();
    assert_eq!(
        distribution.buckets,
        vec![
            ("0-40".to_string(), 1),
            ("41-60".to_string(), 1),
            ("61-80".to_string(), 1),
            ("81-100".to_string(), 1),
        ]
    );
}
