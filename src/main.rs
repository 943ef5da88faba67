use clap::{Parser, ValueEnum};
use mortar_calc::{
    ApiError, ConfigurationManager, CsvFormatter, FireControlApi, JsonFormatter, SolutionReport,
    TextFormatter,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Csv,
}

/// Mortar fire solution between two grid references
#[derive(Debug, Parser)]
#[command(name = "mortar-calc", version, about)]
struct Cli {
    /// Firing position, e.g. E5-26
    origin: String,
    /// Target position, e.g. C2-29
    target: String,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// JSON configuration file (defaults to $MORTAR_CALC_CONFIG, then built-ins)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Compact output: one-line text, unindented JSON, CSV without header
    #[arg(long)]
    compact: bool,
}

fn run(cli: &Cli) -> Result<String, Box<dyn std::error::Error>> {
    let manager = match &cli.config {
        Some(path) => ConfigurationManager::from_file(path)?,
        None => ConfigurationManager::load_from_env(),
    };
    let api = FireControlApi::with_config(manager.get_config())?;

    let origin = cli.origin.trim();
    let target = cli.target.trim();
    let solution = api.calculate_grids(origin, target)?;
    let report = SolutionReport::new(origin, target, solution);

    let output = match cli.format {
        OutputFormat::Text => {
            let formatter = if cli.compact { TextFormatter::compact() } else { TextFormatter::new() };
            formatter.format_text(&report)
        }
        OutputFormat::Json => {
            let formatter = if cli.compact { JsonFormatter::new() } else { JsonFormatter::pretty() };
            formatter.format_json(&report)?
        }
        OutputFormat::Csv => CsvFormatter { include_header: !cli.compact }.format_csv(&report),
    };
    Ok(output)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("ERROR: {}", err);
            if let Some(api_err) = err.downcast_ref::<ApiError>() {
                if api_err.is_format_error() {
                    eprintln!("Grid formats: B5, a7, F03, A1-12, E5-267");
                }
            }
            ExitCode::FAILURE
        }
    }
}
