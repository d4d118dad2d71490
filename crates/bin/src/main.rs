//! Fundsheet CLI binary.
//!
//! Fetches company fundamentals from Alpha Vantage and writes them to an
//! Excel workbook.

mod integration;

use clap::{Parser, Subcommand};
use fundsheet::data::{AlphaVantageClient, CacheConfig, Function, StatementSource};
use fundsheet::output::{ExportFormat, export_report};
use fundsheet::{ReportConfig, ReportPipeline, normalize_symbol};
use indicatif::{ProgressBar, ProgressStyle};
use integration::cache_manager::{cached_client, open_cache, print_cache_info};
use std::path::PathBuf;
use std::process;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fundsheet")]
#[command(about = "Fundsheet: company fundamentals as an Excel report", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the fundamentals workbook for a ticker
    Report {
        /// Stock ticker symbol
        ticker: String,

        /// Alpha Vantage API key
        #[arg(long, env = "ALPHAVANTAGE_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        /// Workbook path (defaults to <TICKER>_financials.xlsx)
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Disable caching (always fetch fresh data)
        #[arg(long)]
        no_cache: bool,

        /// Force refresh cached data
        #[arg(long)]
        refresh: bool,

        /// Maximum age of cached responses in seconds
        #[arg(long, default_value = "3600")]
        cache_ttl: u64,

        /// Also export the tables into this directory
        #[arg(long)]
        export: Option<PathBuf>,

        /// Export format (csv, json or pretty-json)
        #[arg(long, default_value = "csv", requires = "export")]
        format: String,
    },

    /// Inspect or clear the response cache
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },
}

#[derive(Subcommand)]
enum CacheAction {
    /// Show cache location and contents
    Stats,

    /// Delete cached responses
    Clear {
        /// Only clear this ticker
        #[arg(long)]
        symbol: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let json = std::env::var("RUST_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            ticker,
            api_key,
            output,
            no_cache,
            refresh,
            cache_ttl,
            export,
            format,
        } => {
            let api_key = api_key
                .filter(|key| !key.trim().is_empty())
                .ok_or("Alpha Vantage API key not found. Pass --api-key or set ALPHAVANTAGE_API_KEY")?;
            let cache = CacheConfig {
                enabled: !no_cache,
                refresh,
                ttl: Duration::from_secs(cache_ttl),
            };
            let export = match export {
                Some(dir) => Some((dir, format.parse::<ExportFormat>()?)),
                None => None,
            };
            generate_report(&ticker, api_key, cache, output, export).await?;
        }
        Commands::Cache { action } => match action {
            CacheAction::Stats => {
                let cache = open_cache()?;
                println!("Response cache");
                print_cache_info(&cache)?;
            }
            CacheAction::Clear { symbol } => {
                let cache = open_cache()?;
                let removed = match symbol {
                    Some(symbol) => cache.clear_symbol(&normalize_symbol(&symbol)?)?,
                    None => cache.clear_all()?,
                };
                println!("Removed {} cached responses", removed);
            }
        },
    }

    Ok(())
}

async fn generate_report(
    ticker: &str,
    api_key: String,
    cache: CacheConfig,
    output: Option<PathBuf>,
    export: Option<(PathBuf, ExportFormat)>,
) -> Result<(), Box<dyn std::error::Error>> {
    let symbol = normalize_symbol(ticker)?;
    println!("Fundamentals report for {}", symbol);

    let source = cached_client(AlphaVantageClient::new(api_key)?, cache)?;
    if cache.enabled {
        print_cache_info(source.cache())?;
        if cache.refresh {
            println!("  Mode: Force refresh (re-fetching all data)");
        }
    } else {
        println!("  Cache: Disabled");
    }
    println!();

    let pipeline = ReportPipeline::new(source, ReportConfig::default());
    let documents = fetch_with_progress(&pipeline, &symbol).await?;

    print!("Building tables...");
    std::io::Write::flush(&mut std::io::stdout())?;
    let report = pipeline.assemble(&symbol, &documents)?;
    println!(
        " ✓ ({} quarters, {} years, {} trading days)",
        report.quarterly.columns().len(),
        report.annual.columns().len(),
        report.prices.height()
    );

    if !report.has_statements() {
        println!("No data processed for either quarterly or annual reports.");
        return Ok(());
    }

    let path = output.unwrap_or_else(|| PathBuf::from(report.default_file_name()));
    print!("Writing workbook...");
    std::io::Write::flush(&mut std::io::stdout())?;
    pipeline.config().writer().save(&report, &path)?;
    println!(" ✓");
    println!("Data exported to {}", path.display());

    if let Some((dir, format)) = export {
        let written = export_report(&report, &dir, format)?;
        println!("Exported {} tables to {}", written.len(), dir.display());
    }

    Ok(())
}

async fn fetch_with_progress<S: StatementSource>(
    pipeline: &ReportPipeline<S>,
    symbol: &str,
) -> Result<fundsheet::Documents, Box<dyn std::error::Error>> {
    let pb = ProgressBar::new(Function::ALL.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("valid template")
            .progress_chars("█▓░"),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message("Fetching from Alpha Vantage...");

    let fetched = pipeline
        .fetch_documents(symbol, |function| {
            pb.inc(1);
            pb.set_message(format!("Fetched {}", function.description()));
        })
        .await;

    match fetched {
        Ok(documents) => {
            pb.finish_with_message("Fetched all documents");
            Ok(documents)
        }
        Err(e) => {
            pb.finish_with_message("Failed!");
            Err(e.into())
        }
    }
}
