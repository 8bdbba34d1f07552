//! Extract command - extract fields from a single document dump.

use std::fmt::{self, Write as _};
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use fieldmatch_core::{ExtractedDocument, FieldExtractor, FieldSource};

use super::{extract_file, load_config, write_output};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Document dump (JSON page feed)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: ExtractFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum ExtractFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub async fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let extractor = FieldExtractor::with_config(config.extraction);

    info!("Processing file: {}", args.input.display());
    let document = extract_file(&args.input, &extractor).await?;

    let output = match args.format {
        ExtractFormat::Json => serde_json::to_string_pretty(&document)?,
        ExtractFormat::Text => format_text(&document)?,
    };

    write_output(args.output.as_deref(), &output)
}

fn format_text(document: &ExtractedDocument) -> Result<String, fmt::Error> {
    let mut out = String::new();

    writeln!(out, "{}", style(&document.name).bold())?;
    writeln!(
        out,
        "{} pages, {} fields ({} form, {} text), {} form widgets",
        document.total_pages,
        document.metadata.total_fields,
        document.metadata.form_field_count,
        document.metadata.text_field_count,
        document.metadata.widget_count
    )?;
    writeln!(out)?;

    for (field_type, record) in document.fields.iter() {
        let source = match record.source {
            FieldSource::FormField => "form",
            FieldSource::TextPattern => "text",
        };
        writeln!(
            out,
            "  {:<14} {:<30} [{} p.{} {:.0}%]",
            field_type.as_str(),
            record.value,
            source,
            record.page,
            record.confidence * 100.0
        )?;
    }

    Ok(out)
}
