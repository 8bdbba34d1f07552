//! Compare command - compare the fields of two document dumps.

use std::fmt::{self, Write as _};
use std::path::PathBuf;

use clap::Args;
use console::style;
use serde::Serialize;
use tracing::info;

use fieldmatch_core::{ComparisonResult, FieldComparator, FieldExtractor, Severity};

use super::{extract_file, load_config, write_output};

/// Arguments for the compare command.
#[derive(Args)]
pub struct CompareArgs {
    /// First document dump
    #[arg(required = true)]
    first: PathBuf,

    /// Second document dump
    #[arg(required = true)]
    second: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: CompareFormat,

    /// Exit with an error when the documents do not match completely
    #[arg(long)]
    strict: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum CompareFormat {
    /// JSON output
    Json,
    /// One CSV row per compared field
    Csv,
    /// Plain text summary
    Text,
}

/// CSV row for one compared field.
#[derive(Serialize)]
struct CsvRow<'a> {
    field: &'a str,
    status: &'a str,
    label: &'a str,
    value1: &'a str,
    value2: &'a str,
    severity: &'a str,
}

pub async fn run(args: CompareArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let extractor = FieldExtractor::with_config(config.extraction);
    let comparator = FieldComparator::with_config(config.comparison);

    // Documents are extracted one after the other.
    let first = extract_file(&args.first, &extractor).await?;
    let second = extract_file(&args.second, &extractor).await?;

    let result = comparator.compare_documents(&first, &second);
    info!(
        "{} vs {}: {}% match",
        result.file1, result.file2, result.summary.match_percentage
    );

    let output = match args.format {
        CompareFormat::Json => serde_json::to_string_pretty(&result)?,
        CompareFormat::Csv => format_csv(&result)?,
        CompareFormat::Text => format_text(&result)?,
    };

    write_output(args.output.as_deref(), &output)?;

    if args.strict && !result.is_perfect_match() {
        anyhow::bail!(
            "Documents differ: {}% match, {} differences",
            result.summary.match_percentage,
            result.summary.differences
        );
    }

    Ok(())
}

fn format_csv(result: &ComparisonResult) -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    for m in &result.matches {
        writer.serialize(CsvRow {
            field: m.field.as_str(),
            status: "match",
            label: &m.label,
            value1: &m.value,
            value2: &m.value,
            severity: "",
        })?;
    }

    for d in &result.differences {
        writer.serialize(CsvRow {
            field: d.field.as_str(),
            status: "difference",
            label: &d.label,
            value1: &d.value1,
            value2: &d.value2,
            severity: d.severity.as_str(),
        })?;
    }

    for m in &result.missing_in_file2 {
        writer.serialize(CsvRow {
            field: m.field.as_str(),
            status: "missing_in_file2",
            label: &m.label,
            value1: &m.value,
            value2: "",
            severity: "",
        })?;
    }

    for m in &result.missing_in_file1 {
        writer.serialize(CsvRow {
            field: m.field.as_str(),
            status: "missing_in_file1",
            label: &m.label,
            value1: "",
            value2: &m.value,
            severity: "",
        })?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("failed to flush CSV output: {}", e))?;
    Ok(String::from_utf8(bytes)?)
}

fn format_text(result: &ComparisonResult) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let summary = &result.summary;

    writeln!(out, "{} vs {}", style(&result.file1).bold(), style(&result.file2).bold())?;
    writeln!(out)?;

    if result.is_perfect_match() {
        writeln!(out, "{} Documents match ({}%)", style("✓").green(), summary.match_percentage)?;
    } else {
        writeln!(
            out,
            "{} {}% match - {} compared, {} matching, {} different",
            style("⚠").yellow(),
            summary.match_percentage,
            summary.total_comparisons,
            summary.exact_matches,
            summary.differences
        )?;
    }

    if !result.differences.is_empty() {
        writeln!(out)?;
        writeln!(out, "Differences:")?;
        for d in &result.differences {
            let marker = match d.severity {
                Severity::High => style("●").red(),
                Severity::Medium => style("●").yellow(),
                Severity::Low => style("●").green(),
            };
            writeln!(out, "  {} {} ({})", marker, d.label, d.severity)?;
            writeln!(out, "      {}: {:?}", result.file1, d.value1)?;
            writeln!(out, "      {}: {:?}", result.file2, d.value2)?;
        }
    }

    if !result.missing_in_file1.is_empty() || !result.missing_in_file2.is_empty() {
        writeln!(out)?;
        writeln!(out, "Missing fields:")?;
        for m in result.missing_in_file2.iter().chain(&result.missing_in_file1) {
            writeln!(out, "  only in {}: {} = {:?}", m.file, m.label, m.value)?;
        }
    }

    Ok(out)
}
