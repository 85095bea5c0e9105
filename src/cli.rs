use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "drivecheck")]
#[command(about = "Questionnaire scoring, tier classification and peer comparison", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a completed questionnaire and classify the result
    Score {
        /// Answer as key=value; repeat once per question
        #[arg(short, long = "answer", value_name = "KEY=VALUE")]
        answers: Vec<String>,

        /// Survey definition file (defaults to searching for drivecheck.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Respondent name, required with --submit
        #[arg(long)]
        name: Option<String>,

        /// Respondent email, required with --submit
        #[arg(long)]
        email: Option<String>,

        /// Respondent age, required with --submit
        #[arg(long)]
        age: Option<u32>,

        /// Append the scored submission to the configured store
        #[arg(long)]
        submit: bool,
    },

    /// Show how an age group scored
    Compare {
        /// Age to compare against
        #[arg(long)]
        age: u32,

        /// Compute the distribution from stored submissions instead of the
        /// static bracket table
        #[arg(long = "from-records")]
        from_records: bool,

        /// Override the configured age window (±years) for --from-records
        #[arg(long)]
        window: Option<u32>,

        /// Survey definition file (defaults to searching for drivecheck.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },

    /// Initialize a survey definition file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_conversion() {
        assert_eq!(
            crate::io::output::OutputFormat::from(OutputFormat::Json),
            crate::io::output::OutputFormat::Json
        );
        assert_eq!(
            crate::io::output::OutputFormat::from(OutputFormat::Terminal),
            crate::io::output::OutputFormat::Terminal
        );
    }

    #[test]
    fn test_cli_parsing_score_command() {
        let args = vec![
            "drivecheck",
            "score",
            "--answer",
            "energy=7",
            "--answer",
            "focus=3",
            "--format",
            "json",
        ];

        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Score {
                answers,
                format,
                submit,
                ..
            } => {
                assert_eq!(answers, vec!["energy=7", "focus=3"]);
                assert_eq!(format, OutputFormat::Json);
                assert!(!submit);
            }
            _ => panic!("Expected Score command"),
        }
    }

    #[test]
    fn test_cli_parsing_score_with_submit() {
        let args = vec![
            "drivecheck",
            "score",
            "--answer",
            "energy=7",
            "--name",
            "Sam",
            "--email",
            "sam@example.com",
            "--age",
            "45",
            "--submit",
        ];

        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Score {
                name, email, age, submit, ..
            } => {
                assert_eq!(name.as_deref(), Some("Sam"));
                assert_eq!(email.as_deref(), Some("sam@example.com"));
                assert_eq!(age, Some(45));
                assert!(submit);
            }
            _ => panic!("Expected Score command"),
        }
    }

    #[test]
    fn test_cli_parsing_compare_command() {
        let args = vec![
            "drivecheck",
            "compare",
            "--age",
            "52",
            "--from-records",
            "--window",
            "3",
        ];

        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Compare {
                age,
                from_records,
                window,
                ..
            } => {
                assert_eq!(age, 52);
                assert!(from_records);
                assert_eq!(window, Some(3));
            }
            _ => panic!("Expected Compare command"),
        }
    }

    #[test]
    fn test_cli_parsing_init_command() {
        let cli = Cli::parse_from(vec!["drivecheck", "init", "--force"]);

        match cli.command {
            Commands::Init { force } => assert!(force),
            _ => panic!("Expected Init command"),
        }
    }
}
