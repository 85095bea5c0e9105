use anyhow::Result;
use std::path::PathBuf;

use crate::compare::{compare_records, compare_static};
use crate::config::load_config;
use crate::errors::DriveCheckError;
use crate::io::output::{create_writer, CompareReport, OutputFormat};
use crate::store::open_store;

pub struct CompareCommand {
    pub age: u32,
    pub from_records: bool,
    pub window: Option<u32>,
    pub config: Option<PathBuf>,
    pub format: OutputFormat,
}

pub fn run_compare(command: CompareCommand) -> Result<()> {
    let config = load_config(command.config.as_deref())?;

    let report = if command.from_records {
        let window = command.window.unwrap_or(config.comparison.window);
        let store = open_store(&config.store);
        let records = store.records_matching(&|_| true)?;
        log::debug!("loaded {} stored submissions", records.len());

        match compare_records(command.age, window, &records, config.comparison.bucketing) {
            Ok(distribution) => CompareReport {
                age: command.age,
                distribution: Some(distribution),
                note: None,
            },
            // Friendly fallback instead of an error exit.
            Err(e @ DriveCheckError::InsufficientData { .. }) => CompareReport {
                age: command.age,
                distribution: None,
                note: Some(e.to_string()),
            },
            Err(e) => return Err(e.into()),
        }
    } else {
        let distribution = compare_static(command.age, &config.comparison);
        if distribution.is_empty() {
            CompareReport {
                age: command.age,
                distribution: None,
                note: Some("no comparison table configured for this survey".to_string()),
            }
        } else {
            CompareReport {
                age: command.age,
                distribution: Some(distribution),
                note: None,
            }
        }
    };

    create_writer(command.format).write_comparison(&report)
}
