use anime_progress::{EntryShape, ResolutionSummary, render_summary_json, resolve_snapshot};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Show what to watch next for a series entry snapshot
#[derive(Debug, Parser)]
#[command(name = "anime-progress", version, about)]
struct Args {
    /// Path to a JSON entry snapshot
    snapshot: PathBuf,

    /// Decode the snapshot as a simple entry
    #[arg(long)]
    simple: bool,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,

    /// Console log level (overridden by RUST_LOG)
    #[arg(long, default_value_t = Level::WARN)]
    log_level: Level,
}

/// Installs the console subscriber, letting RUST_LOG take precedence
fn init_tracing(level: Level) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Prints a summary in human-readable form
fn print_summary(summary: &ResolutionSummary) {
    fn or_none(value: Option<i32>) -> String {
        value.map_or_else(|| "none".to_string(), |v| v.to_string())
    }

    println!("=== Progress ===");
    if summary.in_collection {
        println!("Progress: {}", summary.current_progress);
    } else {
        println!("Not in collection");
    }

    println!("\n=== Episodes ===");
    match (summary.episode_count, summary.main_episode_count) {
        (Some(total), Some(main)) => println!("{} episode(s), {} main", total, main),
        _ => println!("Episode catalog unknown"),
    }
    println!("Next episode: {}", or_none(summary.next_episode));
    println!("Latest episode: {}", or_none(summary.latest_episode));
    println!("Unwatched: {}", summary.unwatched_count);

    println!("\n=== Local Files ===");
    if summary.downloaded {
        println!(
            "{} file(s), {} main",
            summary.local_file_count, summary.main_local_file_count
        );
        println!("Latest local file: {}", or_none(summary.latest_local_file));
        println!(
            "Next episode downloaded: {}",
            if summary.next_episode_downloaded { "yes" } else { "no" }
        );
    } else {
        println!("Not downloaded");
    }

    println!();
    if summary.watched_all {
        println!("All episodes watched!");
    }
}

fn main() {
    let args = Args::parse();
    init_tracing(args.log_level);

    let json = match fs::read_to_string(&args.snapshot) {
        Ok(json) => json,
        Err(e) => {
            eprintln!(
                "Error: Failed to read snapshot {}: {}",
                args.snapshot.display(),
                e
            );
            process::exit(1);
        }
    };

    let shape = if args.simple {
        EntryShape::Simple
    } else {
        EntryShape::Full
    };

    let resolution = match resolve_snapshot(&json, shape) {
        Ok(resolution) => resolution,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if args.json {
        match render_summary_json(&resolution.summary) {
            Ok(rendered) => println!("{}", rendered),
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
    } else {
        print_summary(&resolution.summary);
    }
}
