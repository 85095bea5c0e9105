//! Append-only submission stores.
//!
//! The persistence collaborator is one trait with one write operation and one
//! query, so the storage technology stays swappable without touching the
//! scoring pipeline. There is no locking, retry, or idempotency: a retried
//! submit appends a duplicate row, exactly as the flat-file originals did.

mod csv_store;
mod jsonl;

pub use csv_store::CsvStore;
pub use jsonl::JsonlStore;

use crate::config::{StoreConfig, StoreFormat};
use crate::core::Submission;
use crate::errors::Result;

pub trait RecordStore {
    /// Append one submission. Either succeeds or passes the failure through;
    /// no partial-write recovery.
    fn append(&mut self, submission: &Submission) -> Result<()>;

    /// All stored submissions matching a predicate, in append order. A store
    /// that has never been written to yields an empty list.
    fn records_matching(&self, predicate: &dyn Fn(&Submission) -> bool)
        -> Result<Vec<Submission>>;
}

impl dyn RecordStore {
    pub fn all_records(&self) -> Result<Vec<Submission>> {
        self.records_matching(&|_| true)
    }
}

pub fn open_store(config: &StoreConfig) -> Box<dyn RecordStore> {
    match config.format {
        StoreFormat::Csv => Box::new(CsvStore::new(config.path.clone())),
        StoreFormat::Jsonl => Box::new(JsonlStore::new(config.path.clone())),
    }
}
