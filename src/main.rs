use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::fs;
use std::path::PathBuf;
use tracing::info;

mod config;

/// Doppel: Frequency-profile similarity scanning for text corpora.
///
/// Finds the most similar document pairs in a directory of text files by
/// comparing word frequency profiles. Near-duplicates, shared boilerplate,
/// and heavily overlapping drafts all surface at the top of the ranking.
#[derive(Parser)]
#[command(name = "doppel", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare every pair of documents in a directory and rank the most similar
    Compare {
        /// Directory containing the corpus
        dir: PathBuf,

        /// How many top pairs to keep (default: 10)
        #[arg(long, default_value = "10")]
        top: usize,

        /// File extension to load (overrides DOPPEL_EXTENSION)
        #[arg(long)]
        extension: Option<String>,

        /// Where to write the plain-text report (overrides DOPPEL_REPORT)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Descend into subdirectories
        #[arg(long)]
        recursive: bool,

        /// Stop word list: builtin, none, or a language name (e.g. english)
        #[arg(long)]
        stop_words: Option<String>,

        /// Print results as JSON instead of the table
        #[arg(long)]
        json: bool,

        /// Worker threads for profiling and scoring (default: all cores)
        #[arg(long, default_value = "0")]
        threads: usize,
    },

    /// Show the frequency profile of a single document
    Profile {
        /// The file to profile
        file: PathBuf,

        /// Max profile entries to display (default: 25)
        #[arg(long, default_value = "25")]
        limit: usize,

        /// Stop word list: builtin, none, or a language name (e.g. english)
        #[arg(long)]
        stop_words: Option<String>,

        /// Print the profile as JSON instead of the chart
        #[arg(long)]
        json: bool,
    },

    /// Score one pair of files against each other
    Pair {
        /// First file
        left: PathBuf,

        /// Second file
        right: PathBuf,

        /// Stop word list: builtin, none, or a language name (e.g. english)
        #[arg(long)]
        stop_words: Option<String>,

        /// Print the comparison as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("doppel=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compare {
            dir,
            top,
            extension,
            output,
            recursive,
            stop_words,
            json,
            threads,
        } => {
            let config = config::Config::load()?;

            if threads > 0 {
                info!(threads, "Building custom worker pool");
                // Ignore the error: the global pool can only be built once.
                rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build_global()
                    .ok();
            }

            let extension = extension.unwrap_or(config.extension);
            let stopwords =
                build_stopwords(stop_words.as_deref().or(config.stopwords.as_deref()))?;

            println!("Loading corpus from {}...", dir.display());
            let documents = doppel::corpus::loader::load_corpus(&dir, &extension, recursive)?;

            if documents.is_empty() {
                println!("No .{extension} files found in {}.", dir.display());
                return Ok(());
            }
            println!("  {} documents loaded", documents.len());

            let profiler = doppel::profile::frequency::FrequencyProfiler::new(stopwords);
            let outcome = doppel::pipeline::compare::run(&profiler, &documents, top);

            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
                return Ok(());
            }

            doppel::output::terminal::display_ranked_pairs(&outcome);

            let report_path = output.unwrap_or_else(|| PathBuf::from(&config.report_path));
            let written = doppel::output::report::write_report(&outcome, &report_path)?;
            println!("\n{}", format!("Report saved to: {written}").bold());
        }

        Commands::Profile {
            file,
            limit,
            stop_words,
            json,
        } => {
            let config = config::Config::load()?;
            let stopwords =
                build_stopwords(stop_words.as_deref().or(config.stopwords.as_deref()))?;

            let content = fs::read_to_string(&file)
                .with_context(|| format!("Cannot read {}", file.display()))?;

            let profiler = doppel::profile::frequency::FrequencyProfiler::new(stopwords);
            let profile = doppel::profile::traits::ProfileBuilder::build(&profiler, &content);

            if json {
                println!("{}", serde_json::to_string_pretty(&profile)?);
                return Ok(());
            }

            profile.display(&file.display().to_string(), limit);
        }

        Commands::Pair {
            left,
            right,
            stop_words,
            json,
        } => {
            let config = config::Config::load()?;
            let stopwords =
                build_stopwords(stop_words.as_deref().or(config.stopwords.as_deref()))?;

            let left_text = fs::read_to_string(&left)
                .with_context(|| format!("Cannot read {}", left.display()))?;
            let right_text = fs::read_to_string(&right)
                .with_context(|| format!("Cannot read {}", right.display()))?;

            let profiler = doppel::profile::frequency::FrequencyProfiler::new(stopwords);
            let left_profile =
                doppel::profile::traits::ProfileBuilder::build(&profiler, &left_text);
            let right_profile =
                doppel::profile::traits::ProfileBuilder::build(&profiler, &right_text);

            if json {
                let score = doppel::similarity::overlap::score(&left_profile, &right_profile);
                let common =
                    doppel::similarity::overlap::common_tokens(&left_profile, &right_profile);
                let value = serde_json::json!({
                    "left": left.display().to_string(),
                    "right": right.display().to_string(),
                    "score": score,
                    "common_tokens": common,
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
                return Ok(());
            }

            doppel::output::terminal::display_pair_detail(
                &left.display().to_string(),
                &right.display().to_string(),
                &left_profile,
                &right_profile,
            );
        }
    }

    Ok(())
}

/// Build the stop word set from a CLI or environment choice.
///
/// `None` and "builtin" mean the builtin list, "none" disables filtering,
/// anything else is treated as a language name.
fn build_stopwords(choice: Option<&str>) -> Result<doppel::profile::stopwords::StopwordSet> {
    match choice {
        None | Some("builtin") => Ok(doppel::profile::stopwords::StopwordSet::builtin()),
        Some("none") => Ok(doppel::profile::stopwords::StopwordSet::none()),
        Some(language) => doppel::profile::stopwords::StopwordSet::for_language(language),
    }
}
