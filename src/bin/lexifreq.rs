//! Lexifreq CLI binary.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use env_logger::Builder;
use log::LevelFilter;

use lexifreq::engine::WordFrequencyEngine;
use lexifreq::error::Result;
use lexifreq::report::{ReportOptions, SortColumn, SortDirection, parse_threshold};
use lexifreq::synonym::persistence::{
    JsonFilePersistence, MemoryPersistence, SynonymPersistence,
};

/// Lexifreq - word frequency and synonym grouping reports
#[derive(Parser, Debug, Clone)]
#[command(name = "lexifreq")]
#[command(about = "Word frequency and synonym grouping reports over plaintext files")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LexifreqArgs {
    /// Plaintext files to analyze
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Synonym groups file (JSON, created if missing); in-memory if omitted
    #[arg(short = 's', long = "synonyms", env = "LEXIFREQ_SYNONYMS")]
    pub synonyms: Option<PathBuf>,

    /// Hide rows counted fewer times than this (invalid values mean 1)
    #[arg(long = "min-count", default_value = "1")]
    pub min_count: String,

    /// Hide rows whose label is shorter than this (invalid values mean 1)
    #[arg(long = "min-length", default_value = "1")]
    pub min_length: String,

    /// Sort column
    #[arg(long = "sort", default_value = "count")]
    pub sort: SortColumnArg,

    /// Sort ascending instead of descending
    #[arg(long)]
    pub ascending: bool,

    /// Apply suffix-based synonym suggestion before reporting
    #[arg(long = "suggest-suffix")]
    pub suggest_suffix: Option<String>,

    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,
}

impl LexifreqArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Report sort column as exposed on the command line.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum SortColumnArg {
    Label,
    Count,
    Members,
}

impl From<SortColumnArg> for SortColumn {
    fn from(arg: SortColumnArg) -> Self {
        match arg {
            SortColumnArg::Label => SortColumn::Label,
            SortColumnArg::Count => SortColumn::Count,
            SortColumnArg::Members => SortColumn::Members,
        }
    }
}

fn main() {
    let args = LexifreqArgs::parse();

    let log_level = match args.verbosity() {
        0 => LevelFilter::Error, // Quiet mode
        1 => LevelFilter::Warn,  // Default
        2 => LevelFilter::Info,  // Verbose
        _ => LevelFilter::Debug, // Very verbose (3+)
    };

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(args: LexifreqArgs) -> Result<()> {
    let persistence: Box<dyn SynonymPersistence> = match &args.synonyms {
        Some(path) => Box::new(JsonFilePersistence::open(path)?),
        None => Box::new(MemoryPersistence::new()),
    };
    let mut engine = WordFrequencyEngine::new(persistence)?;

    for file in &args.files {
        log::info!("analyzing {}", file.display());
        let text = fs::read_to_string(file)?;
        engine.ingest_text(&text)?;
    }

    if let Some(suffix) = &args.suggest_suffix {
        let pairs = engine.suggest_by_suffix(suffix)?;
        for (word, matched) in &pairs {
            log::info!("linked '{matched}' into group '{word}'");
        }
        if !pairs.is_empty() {
            log::warn!("{} synonym link(s) added by suffix suggestion", pairs.len());
        }
    }

    let options = ReportOptions {
        min_frequency: parse_threshold(&args.min_count),
        min_word_length: parse_threshold(&args.min_length),
        sort_column: args.sort.into(),
        sort_direction: if args.ascending {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        },
    };
    let rows = engine.rows(&options);

    let now = chrono::Local::now();
    println!("Word Frequency Report");
    println!("Generated: {}", now.format("%Y-%m-%d %H:%M:%S"));
    println!();
    println!("{:<28} {:>8}  {}", "Word / Group", "Count", "Synonyms");

    let mut total: u64 = 0;
    for row in &rows {
        total += row.count;
        println!("{:<28} {:>8}  {}", row.label, row.count, row.members_string());
    }

    println!();
    println!("{} rows, {} words counted", rows.len(), total);
    Ok(())
}
