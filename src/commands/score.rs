use anyhow::{bail, Context, Result};
use std::path::PathBuf;

use crate::classify::classify;
use crate::config::load_config;
use crate::core::{AnswerSet, Submission};
use crate::io::output::{create_writer, OutputFormat, ScoreReport};
use crate::scoring::score;
use crate::store::open_store;

pub struct ScoreCommand {
    pub answers: Vec<String>,
    pub config: Option<PathBuf>,
    pub format: OutputFormat,
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<u32>,
    pub submit: bool,
}

/// Parse repeated `key=value` answer arguments into an answer set.
/// Duplicate keys are rejected; every question needs exactly one response.
pub fn parse_answer_args(args: &[String]) -> Result<AnswerSet> {
    let mut answers = AnswerSet::new();
    for arg in args {
        let (key, value) = arg
            .split_once('=')
            .with_context(|| format!("expected KEY=VALUE, got '{arg}'"))?;
        let value: u8 = value
            .parse()
            .with_context(|| format!("answer for '{key}' is not a small integer: '{value}'"))?;
        if answers.insert(key.to_string(), value).is_some() {
            bail!("duplicate answer for question '{key}'");
        }
    }
    Ok(answers)
}

pub fn run_score(command: ScoreCommand) -> Result<()> {
    let config = load_config(command.config.as_deref())?;
    let answers = parse_answer_args(&command.answers)?;

    let percent = score(&answers, &config)?;
    let outcome = classify(percent, &config.classifier);
    log::debug!("scored {percent}/100, tier {}", outcome.tier);

    let submitted = if command.submit {
        let name = command
            .name
            .context("--submit requires --name")?;
        let email = command
            .email
            .context("--submit requires --email")?;
        let age = command.age.context("--submit requires --age")?;

        let submission = Submission::new(name, email, age, percent, outcome.tier, answers);
        open_store(&config.store)
            .append(&submission)
            .with_context(|| {
                format!("failed to append submission to {}", config.store.path.display())
            })?;
        true
    } else {
        false
    };

    let report = ScoreReport {
        title: config.survey.title.clone(),
        percent,
        tier: outcome.tier,
        message: config.message_text(&outcome.message_key).to_string(),
        message_key: outcome.message_key,
        submitted,
    };

    create_writer(command.format).write_score(&report)
}
