//! feedecay-cli — Command-line interface to the fee-collection cost curve.
//!
//! Evaluates single points or prints the full 51-point series in table,
//! JSON, or CSV form. Tunables supplied on the command line are validated
//! against the configured slider ranges rather than silently clamped.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use feedecay_core::constants::{INITIAL_COST, MAX_COLLECTIONS};
use feedecay_core::{cost_at, generate_series, CurveParams};

/// Fee-collection cost decay curve toolkit.
#[derive(Parser)]
#[command(name = "feedecay-cli")]
#[command(version, about = "Every collection costs a little less than the last.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the cost of a single collection.
    Point(PointArgs),
    /// Print the full cost curve.
    Curve(CurveArgs),
}

#[derive(Args)]
struct ParamArgs {
    /// Minimum cost floor in tokens (50–1000).
    #[arg(short, long, default_value_t = 100.0)]
    min_cost: f64,

    /// Decay factor (0.01–0.30); higher decays faster.
    #[arg(short, long, default_value_t = 0.1)]
    decay_factor: f64,

    /// Initial cost in tokens at collection 0.
    #[arg(short, long, default_value_t = INITIAL_COST)]
    initial_cost: f64,
}

impl ParamArgs {
    fn into_params(self) -> Result<CurveParams> {
        let params = CurveParams {
            initial_cost: self.initial_cost,
            min_cost: self.min_cost,
            decay_factor: self.decay_factor,
        };
        params.validate().context("invalid curve parameters")?;
        Ok(params)
    }
}

#[derive(Args)]
struct PointArgs {
    /// Collection index to evaluate.
    #[arg(short, long)]
    collections: u32,

    #[command(flatten)]
    params: ParamArgs,
}

#[derive(Args)]
struct CurveArgs {
    #[command(flatten)]
    params: ParamArgs,

    /// Output format.
    #[arg(short, long, value_enum, default_value = "table")]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Json,
    Csv,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Point(args) => point(args),
        Commands::Curve(args) => curve(args),
    }
}

fn point(args: PointArgs) -> Result<()> {
    let collections = args.collections;
    let params = args.params.into_params()?;
    let cost = cost_at(collections, &params);
    println!("Collection #{collections}: {cost} tokens");
    Ok(())
}

fn curve(args: CurveArgs) -> Result<()> {
    let params = args.params.into_params()?;
    let series = generate_series(&params);

    match args.format {
        Format::Table => {
            println!("=== COST DECAY CURVE ===");
            println!("Initial cost: {} tokens", params.initial_cost);
            println!("Minimum cost: {} tokens", params.min_cost);
            println!("Decay factor: {}", params.decay_factor);
            println!();
            println!("{:>11}  {:>14}", "collections", "cost (tokens)");
            for point in &series {
                println!("{:>11}  {:>14}", point.collections, point.cost);
            }
        }
        Format::Json => {
            let out = serde_json::json!({
                "params": params,
                "points": series,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Format::Csv => {
            println!("collections,cost");
            for point in &series {
                println!("{},{}", point.collections, point.cost);
            }
        }
    }

    tracing::debug!(
        points = series.len(),
        max = MAX_COLLECTIONS,
        "curve printed"
    );
    Ok(())
}
