use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use jdkwatch_core::Outcome;

/// CLI output format selection.
///
/// Controls whether the run reports in human-readable lines or a single JSON
/// object for CI integration.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum FormatOptions {
    /// JSON format for CI/CD pipelines
    #[value(name = "json")]
    Json,
    /// Human-readable colored terminal output
    #[default]
    #[value(name = "stdout")]
    Stdout,
}

impl FormatOptions {
    pub fn print(&self, stdout_msg: &str, json_msg: &str) {
        match self {
            Self::Stdout => println!("{stdout_msg}"),
            Self::Json => println!("{json_msg}"),
        }
    }

    /// Progress line; kept off stdout in JSON mode so stdout stays parseable.
    pub fn progress(&self, msg: &str) {
        match self {
            Self::Stdout => println!("{msg}"),
            Self::Json => eprintln!("{msg}"),
        }
    }

    pub fn warn(&self, msg: &str) {
        self.progress(&msg.yellow().bold().to_string());
    }

    /// # Errors
    /// Returns error if the outcome cannot be serialized.
    pub fn print_outcome(&self, outcome: &Outcome) -> Result<()> {
        self.print(&outcome.to_string(), &serde_json::to_string(outcome)?);
        Ok(())
    }
}
