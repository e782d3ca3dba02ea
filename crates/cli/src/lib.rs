use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use jdkwatch_core::Outcome;
use jdkwatch_upstream::{DEFAULT_BASELINE_URL, DEFAULT_REPORT_URL};

use crate::{options::FormatOptions, settings::Settings};

mod logging;
pub mod options;
pub mod pipeline;
pub mod settings;
pub mod update;

#[derive(Parser, Debug)]
#[command(
    name = "jdkwatch",
    author,
    version,
    about = "Records a newly released JDK as supported once the language-server tests pass on it",
    help_template = "{name} {version}\n{about}\n\n{usage-heading} {usage}\n\n{all-args}"
)]
struct Cli {
    /// Directory holding README.md and package.json
    #[arg(short, long, env = "JDKWATCH_DIR", default_value = ".")]
    dir: PathBuf,

    /// Endpoint announcing the latest JDK release
    #[arg(long, env = "JDKWATCH_BASELINE_URL", default_value = DEFAULT_BASELINE_URL)]
    baseline_url: String,

    /// Base url of the language-server test reports
    #[arg(long, env = "JDKWATCH_REPORT_URL", default_value = DEFAULT_REPORT_URL)]
    report_url: String,

    #[arg(long, default_value = "false")]
    dry_run: bool,

    #[arg(short, long, value_enum, default_value_t = FormatOptions::Stdout)]
    format: FormatOptions,

    #[arg(short, long, default_value = "false")]
    verbose: bool,
}

impl From<&Cli> for Settings {
    fn from(cli: &Cli) -> Self {
        Self {
            dir: cli.dir.clone(),
            baseline_url: cli.baseline_url.clone(),
            report_url: cli.report_url.clone(),
            dry_run: cli.dry_run,
        }
    }
}

/// # Errors
/// Returns error if the run fails at any stage; the caller maps it to exit code 1.
pub async fn main(args: &[String]) -> Result<Outcome> {
    let cli = Cli::parse_from(args);
    logging::init(cli.verbose);

    let outcome = pipeline::run(&Settings::from(&cli), cli.format).await?;
    cli.format.print_outcome(&outcome)?;
    Ok(outcome)
}
