//! CLI command implementations.
//!
//! One submodule per command; each takes a plain config struct built from
//! parsed CLI arguments and returns `anyhow::Result<()>`.

pub mod compare;
pub mod init;
pub mod score;

pub use compare::{run_compare, CompareCommand};
pub use init::init_config;
pub use score::{run_score, ScoreCommand};
