use anyhow::Result;
use clap::Parser;
use drivecheck::cli::{Cli, Commands};
use drivecheck::commands::{run_compare, run_score, CompareCommand, ScoreCommand};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Score {
            answers,
            config,
            format,
            name,
            email,
            age,
            submit,
        } => run_score(ScoreCommand {
            answers,
            config,
            format: format.into(),
            name,
            email,
            age,
            submit,
        }),
        Commands::Compare {
            age,
            from_records,
            window,
            config,
            format,
        } => run_compare(CompareCommand {
            age,
            from_records,
            window,
            config,
            format: format.into(),
        }),
        Commands::Init { force } => drivecheck::commands::init_config(force),
    }
}
