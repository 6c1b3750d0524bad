//! fundchunk - extract contextual chunks from fund offering documents
//!
//! Parses a PDF offering document, partitions the content into overlapping
//! context-annotated chunks, optionally attaches fund identity metadata
//! from the mapping store and writes the result as JSON.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use fundchunk_backend::{
    detect_fund_identifier, DocumentSource, ExtractOptions, ParsedDocument, PdfSource, Pipeline,
};
use fundchunk_core::{ChunkerConfig, ExtractionOutput, FundLookup};
use fundchunk_store::{FundQuery, FundStore};
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(
    name = "fundchunk",
    version,
    about = "Extract contextual chunks from fund offering documents"
)]
struct Cli {
    /// Path to the offering document (PDF)
    document: PathBuf,

    /// Free-text fund identifier for the metadata lookup
    #[arg(long, conflicts_with = "map_id")]
    fund: Option<String>,

    /// Numeric fund mapping key (takes priority over --fund)
    #[arg(long)]
    map_id: Option<i64>,

    /// Target chunk size in characters
    #[arg(long, default_value_t = 1000)]
    chunk_size: usize,

    /// Overlap carried between consecutive chunks, in characters
    #[arg(long, default_value_t = 200)]
    overlap: usize,

    /// Minimum chunk size in characters
    #[arg(long, default_value_t = 100)]
    min_chunk_size: usize,

    /// Directory the chunks JSON is written to
    #[arg(long, default_value = "out")]
    output_dir: PathBuf,

    /// SQLite fund mapping database for the identity lookup
    #[arg(long)]
    fund_db: Option<PathBuf>,

    /// Pre-extracted structural elements (JSON) from an external converter;
    /// replaces the page scan when given
    #[arg(long)]
    structure: Option<PathBuf>,

    /// Keep page-number-only blocks as zero-confidence labels
    #[arg(long)]
    keep_page_numbers: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("{} {e:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    if !cli.document.exists() {
        anyhow::bail!("input file not found: {}", cli.document.display());
    }

    let config = ChunkerConfig::default()
        .with_chunk_size(cli.chunk_size)
        .with_overlap(cli.overlap)
        .with_min_chunk_size(cli.min_chunk_size);
    let options = ExtractOptions::default().with_keep_page_numbers(cli.keep_page_numbers);

    let document = PdfSource::new()
        .parse_file(&cli.document)
        .with_context(|| format!("failed to parse {}", cli.document.display()))?;

    let fund = resolve_fund(cli, &document);

    let pipeline = Pipeline::new(config, options);
    let output = pipeline.run(&document, &cli.document, cli.structure.as_deref(), fund)?;

    std::fs::create_dir_all(&cli.output_dir).with_context(|| {
        format!("cannot create output directory {}", cli.output_dir.display())
    })?;
    let stem = cli
        .document
        .file_stem()
        .map_or_else(|| "document".to_string(), |s| s.to_string_lossy().into_owned());
    let output_path = cli.output_dir.join(format!("{stem}_chunks.json"));
    let json = serde_json::to_string_pretty(&output)?;
    std::fs::write(&output_path, json)
        .with_context(|| format!("cannot write {}", output_path.display()))?;

    print_summary(&output, &output_path);
    Ok(())
}

/// Resolve the fund lookup: mapping key first, then the supplied name,
/// then auto-detection from the document's first pages. Every store
/// failure degrades to an `Unavailable` marker; chunking is never blocked
/// on metadata.
fn resolve_fund(cli: &Cli, document: &ParsedDocument) -> FundLookup {
    let query = if let Some(map_id) = cli.map_id {
        Some(FundQuery::MapId(map_id))
    } else if let Some(name) = &cli.fund {
        Some(FundQuery::Name(name.clone()))
    } else {
        detect_fund_identifier(&document.pages).map(FundQuery::Name)
    };

    let Some(query) = query else {
        return FundLookup::unavailable("no fund identifier given or detected");
    };

    let Some(db_path) = &cli.fund_db else {
        return FundLookup::unavailable("fund database not configured");
    };

    match FundStore::open(db_path) {
        Ok(store) => store.lookup_or_unavailable(&query),
        Err(e) => {
            log::warn!("fund store unavailable: {e}");
            FundLookup::unavailable(e.to_string())
        }
    }
}

fn print_summary(output: &ExtractionOutput, output_path: &Path) {
    let stats = &output.statistics;

    println!("{}", "EXTRACTION COMPLETE".green().bold());
    println!(
        "  {} {}",
        "document:".bold(),
        output.document_info.filename
    );
    println!("  {} {}", "pages:".bold(), output.document_info.total_pages);
    println!("  {} {}", "chunks:".bold(), stats.total_chunks);
    println!("  {} {}", "words:".bold(), stats.total_words);
    println!(
        "  {} {}",
        "sections:".bold(),
        stats.structural_sections
    );
    println!(
        "  {} {}",
        "hierarchy levels:".bold(),
        stats.hierarchy_levels
    );
    println!(
        "  {} {}/{}",
        "high-confidence chunks:".bold(),
        stats.high_confidence_chunks,
        stats.total_chunks
    );
    if !stats.section_types_found.is_empty() {
        let names: Vec<&str> = stats
            .section_types_found
            .iter()
            .map(|t| t.as_str())
            .collect();
        println!("  {} {}", "section types:".bold(), names.join(", "));
    }

    match output.document_info.fund.record() {
        Some(record) => {
            println!("{}", "FUND INFORMATION".cyan().bold());
            println!("  {} {}", "map id:".bold(), record.map_id);
            println!("  {} {}", "manager:".bold(), record.management_company);
            println!("  {} {}", "fund:".bold(), record.fund_name);
            println!("  {} {}", "asset class:".bold(), record.asset_class);
            println!("  {} {}", "currency:".bold(), record.currency);
        }
        None => println!("{}", "fund information unavailable".yellow()),
    }

    println!("{} {}", "saved:".bold(), output_path.display());
}
