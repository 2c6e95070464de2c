use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use business_calibration::BusinessCalibrator;
use clap::{Args, Parser, Subcommand};
use factor_extraction::FactorExtractionEngine;
use financial_ratios::{Benchmarks, FinancialAnalysisEngine, FinancialData};
use framework_scoring::score_frameworks;
use recommendation_engine::RecommendationEngine;
use serde::Serialize;
use strategy_orchestrator::{AssessmentRequest, EngineConfig, StrategicAnalysisEngine};

#[derive(Debug, Parser)]
#[command(name = "strategy-cli")]
#[command(about = "Deterministic strategic and financial assessment of company narratives")]
struct Cli {
    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Extract PESTEL, Five-Forces and SWOT factors from a narrative.
    Extract(TextArgs),
    /// Compute financial ratios and health analysis from a JSON figures file.
    Ratios(RatiosArgs),
    /// Calibrate an external strategic score against the narrative.
    Calibrate(CalibrateArgs),
    /// Generate actionable recommendations for a narrative.
    Recommend(RecommendArgs),
    /// Run the full assessment pipeline on a JSON request file.
    Assess(AssessArgs),
}

#[derive(Debug, Args)]
struct TextArgs {
    /// Narrative text file, or `-` for stdin.
    input: PathBuf,
}

#[derive(Debug, Args)]
struct RatiosArgs {
    /// Financial figures JSON file, or `-` for stdin.
    input: PathBuf,
    /// Industry benchmark JSON file keyed by metric name.
    #[arg(long)]
    benchmarks: Option<PathBuf>,
    /// Print only the ratio table.
    #[arg(long)]
    ratios_only: bool,
}

#[derive(Debug, Args)]
struct CalibrateArgs {
    /// Narrative text file, or `-` for stdin.
    input: PathBuf,
    /// Raw strategic score from the integration model.
    #[arg(long, allow_negative_numbers = true)]
    score: f64,
}

#[derive(Debug, Args)]
struct RecommendArgs {
    /// Narrative text file, or `-` for stdin.
    input: PathBuf,
    /// Calibrated strategic score.
    #[arg(long, allow_negative_numbers = true)]
    score: f64,
    /// PESTEL expected impact; computed from the narrative when omitted.
    #[arg(long, allow_negative_numbers = true)]
    pestel: Option<f64>,
    /// Five-Forces attractiveness; computed from the narrative when omitted.
    #[arg(long, allow_negative_numbers = true)]
    forces: Option<f64>,
    /// SWOT effectiveness; computed from the narrative when omitted.
    #[arg(long, allow_negative_numbers = true)]
    swot: Option<f64>,
}

#[derive(Debug, Args)]
struct AssessArgs {
    /// Assessment request JSON file, or `-` for stdin.
    input: PathBuf,
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    }
}

fn render<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(out)
}

fn init_tracing() {
    let filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
    };
    let json_logging = std::env::var("RUST_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    // stdout carries the JSON result, logs go to stderr
    if json_logging {
        tracing_subscriber::fmt()
            .json()
            .with_writer(std::io::stderr)
            .with_env_filter(filter())
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(filter())
            .init();
    }
}

fn run(cli: Cli, config: EngineConfig) -> Result<String> {
    match cli.command {
        Command::Extract(args) => {
            let text = read_input(&args.input)?;
            let extraction = FactorExtractionEngine::with_min_section_chars(config.min_section_chars).extract(&text);
            render(&extraction, cli.pretty)
        }
        Command::Ratios(args) => {
            let data = FinancialData::from_json(&read_input(&args.input)?)
                .with_context(|| format!("invalid financial data in {}", args.input.display()))?;
            let benchmarks: Option<Benchmarks> = match &args.benchmarks {
                Some(path) => Some(
                    serde_json::from_str(&read_input(path)?)
                        .with_context(|| format!("invalid benchmarks in {}", path.display()))?,
                ),
                None => None,
            };
            let analysis = FinancialAnalysisEngine::new().analyze(&data, benchmarks.as_ref());
            if args.ratios_only {
                render(&analysis.ratios, cli.pretty)
            } else {
                render(&analysis, cli.pretty)
            }
        }
        Command::Calibrate(args) => {
            let text = read_input(&args.input)?;
            let result = BusinessCalibrator::with_config(config.calibration).calibrate_text(args.score, &text);
            render(&result, cli.pretty)
        }
        Command::Recommend(args) => {
            let text = read_input(&args.input)?;
            let (pestel, forces, swot) = match (args.pestel, args.forces, args.swot) {
                (Some(p), Some(f), Some(s)) => (p, f, s),
                (p, f, s) => {
                    let extraction =
                        FactorExtractionEngine::with_min_section_chars(config.min_section_chars).extract(&text);
                    let scores = score_frameworks(&extraction);
                    (
                        p.unwrap_or(scores.pestel),
                        f.unwrap_or(scores.forces),
                        s.unwrap_or(scores.swot),
                    )
                }
            };
            let recommendations = RecommendationEngine::with_limit(config.max_recommendations)
                .generate_from_text(&text, args.score, pestel, forces, swot);
            render(&recommendations, cli.pretty)
        }
        Command::Assess(args) => {
            let request = AssessmentRequest::from_json(&read_input(&args.input)?)
                .with_context(|| format!("invalid assessment request in {}", args.input.display()))?;
            let assessment = StrategicAnalysisEngine::with_config(config).analyze(&request);
            render(&assessment, cli.pretty)
        }
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    std::panic::set_hook(Box::new(|info| {
        eprintln!("PANIC: {info}");
        tracing::error!("PANIC: {info}");
    }));

    let cli = Cli::parse();
    let config = EngineConfig::from_env().context("invalid engine configuration")?;
    tracing::debug!("Engine configuration: {:?}", config);

    let output = run(cli, config)?;
    println!("{}", output);
    Ok(())
}
