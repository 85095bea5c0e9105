// Export modules for library usage
pub mod classify;
pub mod cli;
pub mod commands;
pub mod compare;
pub mod config;
pub mod core;
pub mod errors;
pub mod io;
pub mod scoring;
pub mod store;

// Re-export commonly used types
pub use crate::core::{
    AnswerSet, Bucketing, Distribution, Polarity, Scale, Submission, Tier, SCORE_BINS,
};

pub use crate::classify::{classify, Outcome};
pub use crate::compare::{compare_records, compare_static};
pub use crate::config::{
    load_config, parse_and_validate_config, ClassifierConfig, ComparisonConfig, SurveyConfig,
};
pub use crate::errors::{DriveCheckError, Result};
pub use crate::io::output::{create_writer, OutputFormat, ReportWriter};
pub use crate::scoring::{score, validate_answers};
pub use crate::store::{open_store, CsvStore, JsonlStore, RecordStore};
