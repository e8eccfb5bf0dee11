mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Args, Parser, Subcommand};
use thiserror::Error;

use crate::input::InputError;
use crate::input::dataset::load_scale_tables;
use crate::input::pools::parse_pool;
use crate::model::TableError;
use crate::model::percentiles::PercentileTable;
use crate::model::ranges::RangeTable;
use crate::pipeline::stage2_select::RandomPicker;
use crate::pipeline::stage7_report::{ReportFormat, render_result, render_validation, write_report};
use crate::pipeline::{PipelineError, RawPools, ScoringPipeline};
use crate::report::json::render_bands_json;
use crate::report::text::render_bands_text;

const EXIT_FAILURE: u8 = 1;
const EXIT_INVALID_SCORES: u8 = 2;

#[derive(Debug, Parser)]
#[command(name = "scaledband", version, about)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score three raw-score pools against a conversion dataset.
    Score(ScoreArgs),
    /// Print the band and percentile tables.
    Bands(BandsArgs),
}

#[derive(Debug, Args)]
struct ScoreArgs {
    /// Raw-to-scaled conversion dataset (JSON, optionally .gz).
    #[arg(long)]
    tables: PathBuf,

    /// Verbal raw scores, comma separated; blank slots allowed.
    #[arg(long, allow_hyphen_values = true)]
    verbal: String,

    /// Quantitative raw scores, comma separated; blank slots allowed.
    #[arg(long, allow_hyphen_values = true)]
    quant: String,

    /// English raw scores, comma separated; blank slots allowed.
    #[arg(long, allow_hyphen_values = true)]
    english: String,

    /// Seed for pair selection when a pool has more than two scores.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Write the report here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct BandsArgs {
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Table(#[from] TableError),
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
    #[error("failed to render report: {0}")]
    Render(#[from] serde_json::Error),
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone)]
struct RunConfig {
    tables_path: PathBuf,
    pools: RawPools,
    seed: Option<u64>,
    format: ReportFormat,
    out: Option<PathBuf>,
}

impl From<ScoreArgs> for RunConfig {
    fn from(args: ScoreArgs) -> Self {
        Self {
            tables_path: args.tables,
            pools: RawPools {
                verbal: parse_pool(&args.verbal),
                quantitative: parse_pool(&args.quant),
                english: parse_pool(&args.english),
            },
            seed: args.seed,
            format: args.format,
            out: args.out,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let outcome = match cli.command {
        Command::Score(args) => run_score(RunConfig::from(args)),
        Command::Bands(args) => run_bands(&args).map(|()| ExitCode::SUCCESS),
    };
    match outcome {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn run_score(config: RunConfig) -> Result<ExitCode, CliError> {
    tracing::info!("loading conversion tables from {}", config.tables_path.display());
    let tables = load_scale_tables(&config.tables_path)?;
    let pipeline = ScoringPipeline::standard(tables)?;

    let mut picker = match config.seed {
        Some(seed) => {
            tracing::info!("pair selection seeded with {seed}");
            RandomPicker::seeded(seed)
        }
        None => RandomPicker::from_entropy(),
    };

    match pipeline.run(&config.pools, &mut picker) {
        Ok(result) => {
            let rendered = render_result(&result, config.format)?;
            write_report(&rendered, config.out.as_deref())?;
            Ok(ExitCode::SUCCESS)
        }
        Err(PipelineError::Validation(err)) => {
            tracing::warn!("{err}");
            let rendered = render_validation(&err, config.format)?;
            write_report(&rendered, config.out.as_deref())?;
            Ok(ExitCode::from(EXIT_INVALID_SCORES))
        }
        Err(err) => Err(err.into()),
    }
}

fn run_bands(args: &BandsArgs) -> Result<(), CliError> {
    let ranges = RangeTable::standard()?;
    let percentiles = PercentileTable::standard()?;
    let rendered = match args.format {
        ReportFormat::Text => render_bands_text(&ranges, &percentiles),
        ReportFormat::Json => render_bands_json(&ranges, &percentiles)?,
    };
    write_report(&rendered, None)?;
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/support.rs"]
mod test_support;

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
