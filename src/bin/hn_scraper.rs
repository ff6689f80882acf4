//! Print the current Hacker News front page entries
//!
//! `RUST_LOG` controls diagnostics on stderr; entries go to stdout.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use hn_scraper::{Entry, QueryOp, ScrapeError, ScraperConfig, Session};
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortKey {
    Comments,
    Score,
}

#[derive(Debug, Parser)]
#[command(name = "hn_scraper", about = "Scrape and filter the Hacker News front page")]
struct Cli {
    /// Number of entries to extract
    #[arg(short = 'n', long)]
    limit: Option<usize>,

    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Read markup from a file instead of fetching
    #[arg(long)]
    html: Option<PathBuf>,

    /// Keep titles with more than this many words
    #[arg(long, allow_negative_numbers = true)]
    min_words: Option<i64>,

    /// Keep titles with at most this many words
    #[arg(long, allow_negative_numbers = true)]
    max_words: Option<i64>,

    #[arg(long, value_enum)]
    sort: Option<SortKey>,

    /// Print entries as a JSON array
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn ops(&self) -> Vec<QueryOp> {
        let mut ops = Vec::new();
        if let Some(limit) = self.min_words {
            ops.push(QueryOp::MinTitleWords { limit });
        }
        if let Some(limit) = self.max_words {
            ops.push(QueryOp::MaxTitleWords { limit });
        }
        match self.sort {
            Some(SortKey::Comments) => ops.push(QueryOp::SortByComments),
            Some(SortKey::Score) => ops.push(QueryOp::SortByScore),
            None => {}
        }
        ops
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "scrape failed");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), ScrapeError> {
    let mut config = match &cli.config {
        Some(path) => ScraperConfig::from_file(path)?,
        None => ScraperConfig::default(),
    };
    if let Some(limit) = cli.limit {
        config.max_entries = limit;
    }

    let mut session = Session::new(config)?;
    match &cli.html {
        Some(path) => {
            let html = std::fs::read_to_string(path).map_err(|source| ScrapeError::Read {
                path: path.clone(),
                source,
            })?;
            session.load_html(&html)?;
        }
        None => {
            session.refresh()?;
        }
    }

    let entries = cli
        .ops()
        .iter()
        .fold(session.into_entries(), |current, op| op.run(&current));

    print_entries(&entries, cli.json)
}

fn print_entries(entries: &[Entry], json: bool) -> Result<(), ScrapeError> {
    if json {
        println!("{}", serde_json::to_string_pretty(entries)?);
    } else {
        for entry in entries {
            println!("{entry}");
        }
    }
    Ok(())
}
