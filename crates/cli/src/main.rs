// ABOUTME: CLI that turns a class spell page into a JSON spell list.
// ABOUTME: Fetches the page (or reads a local copy), extracts the first table, and writes <class>.json.

use std::fs;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use spellbook_extract::{
    default_output_path, extract_from_str, fetch_html, highest_per_line, with_replacement_levels,
    write_dataset, ClassDataset, FetchOptions, SpellError,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: create-spell-json <url> [output_path]";

/// Extract a class spell table from a web page and write it as JSON.
#[derive(Parser, Debug)]
#[command(name = "create-spell-json")]
#[command(about = "Extract a class spell table from a web page and write it as JSON", long_about = None)]
struct Args {
    /// Page holding the spell table. Also used to name the class when no heading is found.
    url: Option<String>,

    /// Destination file (default: public/assets/<class>.json).
    output_path: Option<PathBuf>,

    /// Read the page from a local HTML file instead of fetching the URL.
    #[arg(long = "html")]
    html: Option<PathBuf>,

    /// Request timeout in seconds (default: wait indefinitely).
    #[arg(long = "timeout")]
    timeout: Option<u64>,

    /// User-Agent header for the request.
    #[arg(long = "user-agent")]
    user_agent: Option<String>,

    /// After writing, list the best spell of each line available at this character level.
    #[arg(long = "at-level")]
    at_level: Option<i64>,

    /// Log debug details to stderr.
    #[arg(short = 'v', long = "verbose", conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors.
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

fn init_logging(args: &Args) {
    let default = if args.verbose {
        "debug"
    } else if args.quiet {
        "error"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();

    let Some(url) = args.url.clone() else {
        eprintln!("{}", USAGE);
        return ExitCode::from(1);
    };

    init_logging(&args);

    match run(&args, &url) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(SpellError::NoTableFound) = err.downcast_ref::<SpellError>() {
                eprintln!("{}", SpellError::NoTableFound);
            } else {
                eprintln!("error: {:#}", err);
            }
            ExitCode::from(1)
        }
    }
}

fn run(args: &Args, url: &str) -> Result<()> {
    let html = match &args.html {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => fetch_html(url, &fetch_options(args))?,
    };

    let extraction = extract_from_str(&html, url)?;
    if !extraction.mismatches.is_empty() {
        info!(
            rows = extraction.mismatches.len(),
            "rows with mismatched name and level counts were kept with placeholders"
        );
    }

    let dataset = extraction.dataset;
    let output_path = args
        .output_path
        .clone()
        .unwrap_or_else(|| default_output_path(&dataset.class));

    write_dataset(&dataset, &output_path)?;
    println!(
        "Wrote {} spells to {}",
        dataset.spells.len(),
        output_path.display()
    );

    if let Some(level) = args.at_level {
        print_level_report(&dataset, level);
    }

    Ok(())
}

fn fetch_options(args: &Args) -> FetchOptions {
    let mut builder = FetchOptions::builder();
    if let Some(secs) = args.timeout {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    if let Some(ua) = &args.user_agent {
        builder = builder.user_agent(ua.clone());
    }
    builder.build()
}

fn print_level_report(dataset: &ClassDataset, level: i64) {
    let replacements = with_replacement_levels(&dataset.spells);
    println!("{} spells at level {}:", dataset.class, level);
    for spell in highest_per_line(&dataset.spells, level) {
        let next = replacements
            .iter()
            .find(|r| &r.spell == spell)
            .and_then(|r| r.replaced_at_level);
        match next {
            Some(at) => println!(
                "  {:>4}  {}  [{}] -> upgraded at {}",
                spell.level, spell.name, spell.line, at
            ),
            None => println!("  {:>4}  {}  [{}]", spell.level, spell.name, spell.line),
        }
    }
}
