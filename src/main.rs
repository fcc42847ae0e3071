use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::{info, warn};

use kwscout::config::Config;
use kwscout::models::Grade;
use kwscout::output::{cache, terminal};
use kwscout::pipeline::analysis::{self, AnalysisError};
use kwscout::recommend::title;
use kwscout::scoring::difficulty;

/// kwscout: find the least crowded keywords in pasted search data.
///
/// Each input line is `keyword, monthly searches, total documents`, separated
/// by commas or tabs. Keywords are ranked by documents per search.
#[derive(Parser)]
#[command(name = "kwscout", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a batch of keyword rows and suggest a title for the best one
    Analyze {
        /// Input file (reads stdin when omitted or "-")
        file: Option<PathBuf>,

        /// Write the ranked table to a dated CSV file
        #[arg(long)]
        export: bool,

        /// Directory for the CSV export (overrides KWSCOUT_EXPORT_DIR)
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Print the analysis as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Render the export fresh instead of reusing a cached one
        #[arg(long)]
        no_cache: bool,
    },

    /// Score a single search volume / document count pair
    Score {
        search_volume: i64,
        document_count: i64,
    },

    /// Show the title recommendation for a keyword at a given grade
    Recommend {
        keyword: String,

        /// golden, good, caution, red_ocean or insufficient_data
        #[arg(long)]
        grade: Grade,
    },

    /// Show the active grade thresholds
    Thresholds,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging (stderr, so stdout stays clean for --json)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("kwscout=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze {
            file,
            export,
            out_dir,
            json,
            no_cache,
        } => {
            let text = kwscout::input::read_submission(file.as_deref())?;

            let result = match analysis::analyze_with(&text, &config.thresholds) {
                Ok(result) => result,
                Err(AnalysisError::EmptyResult { diagnostics }) => {
                    terminal::display_diagnostics(&diagnostics);
                    anyhow::bail!(
                        "No valid keyword rows to analyze. \
                         Each line must be 'keyword, search volume, document count'."
                    );
                }
            };

            let recommendation = result.recommendation();

            if json {
                let payload = serde_json::json!({
                    "rows": result.rows,
                    "diagnostics": result.diagnostics,
                    "best": result.best(),
                    "recommendation": recommendation,
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                terminal::display_diagnostics(&result.diagnostics);
                terminal::display_keyword_table(&result);
                if let (Some(best), Some(rec)) = (result.best(), recommendation.as_ref()) {
                    terminal::display_recommendation(best, rec);
                }
            }

            if export {
                let out_dir = out_dir.unwrap_or_else(|| config.export_dir.clone());
                let export_cache = (!no_cache).then(|| {
                    cache::ExportCache::new(&config.cache_dir)
                        .with_max_entries(config.cache_max_entries)
                });
                let today = chrono::Local::now().date_naive();

                let outcome =
                    cache::export_table(&result.rows, &out_dir, today, export_cache.as_ref())?;
                info!(
                    path = %outcome.path.display(),
                    cache_hit = outcome.cache_hit,
                    "CSV export written"
                );
                if !json {
                    println!(
                        "\n{} {}",
                        "Exported:".bold(),
                        outcome.path.display()
                    );
                }
            }
        }

        Commands::Score {
            search_volume,
            document_count,
        } => {
            if search_volume < 0 || document_count < 0 {
                anyhow::bail!("search volume and document count must not be negative");
            }
            let result =
                difficulty::score_with(&config.thresholds, document_count, search_volume);
            if !result.is_comparable() {
                warn!("Search volume is 0; no competition score can be computed");
            }
            terminal::display_score(search_volume, document_count, &result);
        }

        Commands::Recommend { keyword, grade } => {
            match title::recommend(&keyword, grade) {
                title::Recommendation::Title { suggestion, .. } => {
                    println!("{} {}", "Template:".bold(), suggestion.template);
                    println!("{} {}", "Example:".bold(), suggestion.example);
                }
                title::Recommendation::Advisory { message } => {
                    println!("{} {}", "Strategy:".blue().bold(), message);
                }
            }
        }

        Commands::Thresholds => {
            terminal::display_thresholds(&config.thresholds);
        }
    }

    Ok(())
}
