use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::SurveyConfig;
use crate::errors::{DriveCheckError, Result};

pub const CONFIG_FILE_NAME: &str = "drivecheck.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to read config file contents.
fn read_config_file(path: &Path) -> std::io::Result<String> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse and validate a survey definition from a TOML string. Malformed
/// definitions are configuration errors, fatal at startup.
pub fn parse_and_validate_config(contents: &str) -> Result<SurveyConfig> {
    let config = toml::from_str::<SurveyConfig>(contents)
        .map_err(|e| DriveCheckError::config(format!("failed to parse {CONFIG_FILE_NAME}: {e}")))?;
    config.validate()?;
    Ok(config)
}

/// Try loading from a specific path. `Ok(None)` when the file does not exist;
/// a file that exists but fails to parse or validate is an error.
fn try_load_config_from_path(config_path: &Path) -> Result<Option<SurveyConfig>> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            log::warn!("failed to read {}: {}", config_path.display(), e);
            return Err(e.into());
        }
    };

    let config = parse_and_validate_config(&contents)?;
    log::debug!("loaded survey config from {}", config_path.display());
    Ok(Some(config))
}

fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        parent.pop().then_some(parent)
    })
    .take(max_depth)
}

/// Load the survey configuration.
///
/// An explicit path must exist and parse. Otherwise the directory hierarchy
/// is searched upward for `drivecheck.toml`; when none is found the built-in
/// default survey applies.
pub fn load_config(explicit: Option<&Path>) -> Result<SurveyConfig> {
    if let Some(path) = explicit {
        return try_load_config_from_path(path)?.ok_or_else(|| {
            DriveCheckError::config(format!("config file not found: {}", path.display()))
        });
    }

    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!("failed to get current directory: {e}; using default survey");
            return Ok(SurveyConfig::default());
        }
    };

    for dir in directory_ancestors(current, MAX_TRAVERSAL_DEPTH) {
        if let Some(config) = try_load_config_from_path(&dir.join(CONFIG_FILE_NAME))? {
            return Ok(config);
        }
    }

    log::debug!("no {CONFIG_FILE_NAME} found; using default survey");
    Ok(SurveyConfig::default())
}
