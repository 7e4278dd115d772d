//! Command implementations for the GFF3 table reader CLI
//!
//! This module contains the command execution logic, summary reporting
//! and logging setup for the CLI interface.

use crate::app::adapters::dataframe::write_parquet;
use crate::app::adapters::line_reader::BufLineReader;
use crate::app::models::{ColumnKind, Table};
use crate::app::services::gff_parser::{GffParser, ParseResult, fixed_column_names};
use crate::cli::args::Args;
use crate::{Error, Result};
use colored::*;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Run statistics for reporting
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Rows loaded
    pub rows: usize,
    /// Fixed columns loaded
    pub fixed_columns: usize,
    /// Attribute tag columns loaded
    pub tag_columns: usize,
    /// Pragma lines collected
    pub pragmas: usize,
    /// Parquet output size in bytes, if written
    pub output_size: Option<u64>,
    /// Total run time
    pub processing_time: Duration,
}

/// Main command runner
///
/// 1. Set up logging
/// 2. Validate arguments and build the parser configuration
/// 3. Parse the input file
/// 4. Report a summary and optionally write Parquet
pub fn run(args: Args) -> Result<RunSummary> {
    let start_time = Instant::now();

    setup_logging(&args)?;
    debug!("Command line arguments: {:?}", args);

    if args.list_columns {
        for name in fixed_column_names() {
            println!("{}", name);
        }
        return Ok(RunSummary::default());
    }

    args.validate()?;
    let input = args
        .input
        .as_deref()
        .ok_or_else(|| Error::configuration("No input file given".to_string()))?;

    let config = args.to_config();
    let options = config.to_options()?;
    let parser = GffParser::new(options);

    let mut reader = BufLineReader::open(input)?.with_max_line_length(config.max_line_length);
    info!("Reading {}", input.display());
    let result = parser.parse_with_stats(&mut reader)?;

    let mut summary = RunSummary {
        rows: result.table.nrow(),
        fixed_columns: result.table.fixed_column_count(),
        tag_columns: result.table.tag_column_count(),
        pragmas: result.table.pragmas().len(),
        ..Default::default()
    };

    if let Some(output_path) = &args.output_path {
        summary.output_size = Some(write_parquet(&result.table, output_path)?);
    }

    summary.processing_time = start_time.elapsed();

    if !args.quiet {
        print_report(&args, &result, &summary);
    }

    Ok(summary)
}

/// Print the parse report to stdout
fn print_report(args: &Args, result: &ParseResult, summary: &RunSummary) {
    let table = &result.table;

    println!("{}", "GFF3 parse complete".green().bold());
    println!("  {} {}", "Rows:".bold(), summary.rows);
    println!(
        "  {} {} fixed, {} tags",
        "Columns:".bold(),
        summary.fixed_columns,
        summary.tag_columns
    );
    println!("  {} {}", "Lines:".bold(), result.stats.summary());
    if result.stats.rows_excluded > 0 {
        println!(
            "  {} {:.1}% of records kept",
            "Filter:".bold(),
            result.stats.inclusion_rate()
        );
    }
    print_columns(table);

    if args.show_pragmas {
        println!("  {}", "Pragmas:".bold());
        for pragma in table.pragmas() {
            println!("    {}", pragma.trim_end_matches(['\r', '\n']).dimmed());
        }
    } else if summary.pragmas > 0 {
        println!("  {} {}", "Pragmas:".bold(), summary.pragmas);
    }

    if let (Some(path), Some(size)) = (&args.output_path, summary.output_size) {
        println!(
            "  {} {} ({})",
            "Output:".bold(),
            path.display(),
            format_output_size(size)
        );
    }
    println!(
        "  {} {:.2}s",
        "Time:".bold(),
        summary.processing_time.as_secs_f64()
    );
}

fn print_columns(table: &Table) {
    println!("  {}", "Schema:".bold());
    for column in table.columns() {
        let kind = match column.kind() {
            ColumnKind::Text => "text",
            ColumnKind::Integer => "integer",
            ColumnKind::Real => "real",
        };
        let missing = column.values().missing_count();
        println!(
            "    {:<20} {:<8} {}",
            column.name().cyan(),
            kind,
            format!("{} missing", missing).as_str().dimmed()
        );
    }
}

/// Size of the written Parquet file for the report, in binary units
fn format_output_size(bytes: u64) -> String {
    const KIB: u64 = 1 << 10;
    const MIB: u64 = 1 << 20;
    const GIB: u64 = 1 << 30;

    match bytes {
        b if b >= GIB => format!("{:.2} GiB", b as f64 / GIB as f64),
        b if b >= MIB => format!("{:.2} MiB", b as f64 / MIB as f64),
        b if b >= KIB => format!("{:.1} KiB", b as f64 / KIB as f64),
        b => format!("{} bytes", b),
    }
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("gff_table={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}
