//! Subcommands and the helpers they share.

pub mod compare;
pub mod config;
pub mod extract;

use std::fs;
use std::path::{Path, PathBuf};

use console::style;
use tracing::debug;

use fieldmatch_core::{DocumentDump, ExtractedDocument, FieldExtractor, FieldMatchConfig};

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("fieldmatch")
        .join("config.json")
}

/// Load the configuration from an explicit path, the default path, or defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<FieldMatchConfig> {
    if let Some(path) = config_path {
        return Ok(FieldMatchConfig::from_file(Path::new(path))?);
    }

    let default_path = default_config_path();
    if default_path.exists() {
        debug!("Using configuration from {}", default_path.display());
        Ok(FieldMatchConfig::from_file(&default_path)?)
    } else {
        Ok(FieldMatchConfig::default())
    }
}

/// Load a document dump and extract its fields.
pub async fn extract_file(path: &Path, extractor: &FieldExtractor) -> anyhow::Result<ExtractedDocument> {
    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }

    let mut dump = DocumentDump::from_file(path)?;
    Ok(extractor.extract(&mut dump).await?)
}

/// Write output to a file, or to stdout when no path is given.
pub fn write_output(output: Option<&Path>, content: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content)?;
            eprintln!("{} Output written to {}", style("✓").green(), path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}
