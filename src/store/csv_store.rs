//! Flat-file CSV store, one row per submission.
//!
//! Row schema matches the spreadsheet originals: timestamp, name, email,
//! age, score, tier, then the answers flattened to `key=value;...`.

use std::fs::OpenOptions;
use std::path::PathBuf;

use chrono::{DateTime, Utc};

use super::RecordStore;
use crate::core::{Submission, Tier};
use crate::errors::{DriveCheckError, Result};

const HEADER: [&str; 7] = [
    "timestamp", "name", "email", "age", "score", "tier", "answers",
];

pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl RecordStore for CsvStore {
    fn append(&mut self, submission: &Submission) -> Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let needs_header = file.metadata()?.len() == 0;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        if needs_header {
            writer.write_record(HEADER)?;
        }
        writer.write_record([
            submission.timestamp.to_rfc3339().as_str(),
            &submission.name,
            &submission.email,
            &submission.age.to_string(),
            &submission.score.to_string(),
            submission.tier.label(),
            &submission.answers_serialized(),
        ])?;
        writer.flush()?;
        Ok(())
    }

    fn records_matching(
        &self,
        predicate: &dyn Fn(&Submission) -> bool,
    ) -> Result<Vec<Submission>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)?;

        let mut submissions = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record?;
            // header is line 1, first data row line 2
            let line = index + 2;
            let submission = parse_row(&record, line)?;
            if predicate(&submission) {
                submissions.push(submission);
            }
        }
        Ok(submissions)
    }
}

fn parse_row(record: &csv::StringRecord, line: usize) -> Result<Submission> {
    let malformed = |message: &str| DriveCheckError::MalformedRecord {
        line,
        message: message.to_string(),
    };

    if record.len() != HEADER.len() {
        return Err(malformed(&format!(
            "expected {} fields, found {}",
            HEADER.len(),
            record.len()
        )));
    }

    let timestamp = DateTime::parse_from_rfc3339(&record[0])
        .map_err(|e| malformed(&format!("bad timestamp: {e}")))?
        .with_timezone(&Utc);
    let age = record[3]
        .parse()
        .map_err(|_| malformed("age is not an integer"))?;
    let score = record[4]
        .parse()
        .map_err(|_| malformed("score is not an integer"))?;
    let tier = Tier::parse(&record[5]).ok_or_else(|| malformed("unknown tier label"))?;
    let answers =
        Submission::parse_answers(&record[6]).ok_or_else(|| malformed("bad answers field"))?;

    Ok(Submission {
        timestamp,
        name: record[1].to_string(),
        email: record[2].to_string(),
        age,
        score,
        tier,
        answers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AnswerSet;
    use std::io::Write;

    fn sample(age: u32, score: u8, tier: Tier) -> Submission {
        let mut answers = AnswerSet::new();
        answers.insert("energy".into(), 7);
        Submission::new("Sam", "sam@example.com", age, score, tier, answers)
    }

    #[test]
    fn append_then_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = CsvStore::new(dir.path().join("subs.csv"));

        store.append(&sample(45, 72, Tier::Tuning)).unwrap();
        store.append(&sample(52, 91, Tier::Peak)).unwrap();

        let store: &dyn RecordStore = &store;
        let records = store.all_records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].age, 45);
        assert_eq!(records[0].score, 72);
        assert_eq!(records[0].tier, Tier::Tuning);
        assert_eq!(records[0].answers.get("energy"), Some(&7));
        assert_eq!(records[1].tier, Tier::Peak);
    }

    #[test]
    fn header_written_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("subs.csv");
        let mut store = CsvStore::new(path.clone());
        store.append(&sample(45, 72, Tier::Tuning)).unwrap();
        store.append(&sample(46, 40, Tier::Reignite)).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.matches("timestamp,name,email").count(), 1);
        assert_eq!(contents.lines().count(), 3);
    }

    #[test]
    fn predicate_filters_rows() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = CsvStore::new(dir.path().join("subs.csv"));
        store.append(&sample(45, 72, Tier::Tuning)).unwrap();
        store.append(&sample(70, 30, Tier::Reignite)).unwrap();

        let forties = store.records_matching(&|s| s.age < 60).unwrap();
        assert_eq!(forties.len(), 1);
        assert_eq!(forties[0].age, 45);
    }

    #[test]
    fn missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvStore::new(dir.path().join("never-written.csv"));
        assert!(store.records_matching(&|_| true).unwrap().is_empty());
    }

    #[test]
    fn malformed_row_reports_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("subs.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "timestamp,name,email,age,score,tier,answers").unwrap();
        writeln!(file, "not-a-date,Sam,s@e.c,45,72,tuning,").unwrap();
        drop(file);

        let store = CsvStore::new(path);
        let err = store.records_matching(&|_| true).unwrap_err();
        assert!(matches!(
            err,
            DriveCheckError::MalformedRecord { line: 2, .. }
        ));
    }

    #[test]
    fn duplicate_appends_are_not_deduplicated() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = CsvStore::new(dir.path().join("subs.csv"));
        let submission = sample(45, 72, Tier::Tuning);
        store.append(&submission).unwrap();
        store.append(&submission).unwrap();

        let store: &dyn RecordStore = &store;
        assert_eq!(store.all_records().unwrap().len(), 2);
    }
}
