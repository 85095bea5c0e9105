//! Line-delimited JSON store, one serialized submission per line.

use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use super::RecordStore;
use crate::core::Submission;
use crate::errors::{DriveCheckError, Result};

pub struct JsonlStore {
    path: PathBuf,
}

impl JsonlStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl RecordStore for JsonlStore {
    fn append(&mut self, submission: &Submission) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let line = serde_json::to_string(submission)?;
        writeln!(file, "{line}")?;
        Ok(())
    }

    fn records_matching(
        &self,
        predicate: &dyn Fn(&Submission) -> bool,
    ) -> Result<Vec<Submission>> {
        let file = match std::fs::File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut submissions = Vec::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let submission: Submission =
                serde_json::from_str(&line).map_err(|e| DriveCheckError::MalformedRecord {
                    line: index + 1,
                    message: e.to_string(),
                })?;
            if predicate(&submission) {
                submissions.push(submission);
            }
        }
        Ok(submissions)
    }
}
