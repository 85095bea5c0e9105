use crate::core::{Distribution, Tier};
use colored::*;
use serde::Serialize;
use std::io::Write;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

/// Everything the display layer needs about one scored questionnaire.
#[derive(Clone, Debug, Serialize)]
pub struct ScoreReport {
    pub title: String,
    pub percent: u8,
    pub tier: Tier,
    pub message_key: String,
    pub message: String,
    pub submitted: bool,
}

/// Comparison output; `distribution` is absent when there was not enough
/// peer data, and `note` carries the fallback text for that case.
#[derive(Clone, Debug, Serialize)]
pub struct CompareReport {
    pub age: u32,
    pub distribution: Option<Distribution>,
    pub note: Option<String>,
}

pub trait ReportWriter {
    fn write_score(&mut self, report: &ScoreReport) -> anyhow::Result<()>;
    fn write_comparison(&mut self, report: &CompareReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_json<T: Serialize>(&mut self, value: &T) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> ReportWriter for JsonWriter<W> {
    fn write_score(&mut self, report: &ScoreReport) -> anyhow::Result<()> {
        self.write_json(report)
    }

    fn write_comparison(&mut self, report: &CompareReport) -> anyhow::Result<()> {
        self.write_json(report)
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for MarkdownWriter<W> {
    fn write_score(&mut self, report: &ScoreReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# {}", report.title)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "**Score: {}/100**", report.percent)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "Tier: `{}`", report.tier)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "> {}", report.message)?;
        if report.submitted {
            writeln!(self.writer)?;
            writeln!(self.writer, "_Submission recorded._")?;
        }
        Ok(())
    }

    fn write_comparison(&mut self, report: &CompareReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Peer comparison (age {})", report.age)?;
        writeln!(self.writer)?;
        match &report.distribution {
            Some(distribution) => {
                writeln!(self.writer, "| Bucket | Count |")?;
                writeln!(self.writer, "|--------|-------|")?;
                for (label, value) in &distribution.buckets {
                    writeln!(self.writer, "| {label} | {value} |")?;
                }
            }
            None => {
                let note = report.note.as_deref().unwrap_or("Not enough data.");
                writeln!(self.writer, "_{note}_")?;
            }
        }
        Ok(())
    }
}

pub struct TerminalWriter;

impl Default for TerminalWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalWriter {
    pub fn new() -> Self {
        Self
    }
}

impl ReportWriter for TerminalWriter {
    fn write_score(&mut self, report: &ScoreReport) -> anyhow::Result<()> {
        println!("{}", report.title.bold().blue());
        println!();
        println!("Your score: {}", format!("{}/100", report.percent).bold());

        let message = match report.tier {
            Tier::Peak => report.message.green(),
            Tier::Tuning => report.message.yellow(),
            Tier::Reignite => report.message.red(),
        };
        println!("{message}");

        if report.submitted {
            println!();
            println!("{}", "Submission recorded.".dimmed());
        }
        Ok(())
    }

    fn write_comparison(&mut self, report: &CompareReport) -> anyhow::Result<()> {
        println!("{}", format!("Peers near age {}", report.age).bold().blue());
        println!();
        match &report.distribution {
            Some(distribution) => print_bar_chart(distribution),
            None => {
                let note = report.note.as_deref().unwrap_or("Not enough data.");
                println!("{}", note.yellow());
            }
        }
        Ok(())
    }
}

const MAX_BAR_WIDTH: u64 = 40;

fn print_bar_chart(distribution: &Distribution) {
    let label_width = distribution
        .buckets
        .iter()
        .map(|(label, _)| label.len())
        .max()
        .unwrap_or(0);
    let peak = distribution
        .buckets
        .iter()
        .map(|(_, value)| *value)
        .max()
        .unwrap_or(0)
        .max(1);

    for (label, value) in &distribution.buckets {
        let width = (value * MAX_BAR_WIDTH) / peak;
        let bar = "█".repeat(width as usize);
        println!("  {label:<label_width$}  {} {value}", bar.cyan());
    }
}

pub fn create_writer(format: OutputFormat) -> Box<dyn ReportWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(std::io::stdout())),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(std::io::stdout())),
        OutputFormat::Terminal => Box::new(TerminalWriter::new()),
    }
}
