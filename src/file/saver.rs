//! Document saving functionality.
//!
//! This module provides functions to serialize `Node` trees as YAML or JSON and
//! to save `Document`s to files with atomic write operations and optional
//! backup creation.

use crate::config::{Config, OutputFormat};
use crate::document::node::Node;
use crate::document::tree::Document;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Serializes a node in the requested format.
///
/// YAML output always ends with a newline; JSON output is pretty-printed with
/// `indent_size` spaces and has no trailing newline.
///
/// # Example
///
/// ```
/// use pathquill::config::OutputFormat;
/// use pathquill::document::node::Node;
/// use pathquill::file::saver::serialize_node;
///
/// let node = Node::sequence(vec![Node::from(1), Node::from("two")]);
/// assert_eq!(serialize_node(&node, OutputFormat::Yaml, 2).unwrap(), "- 1\n- two\n");
/// ```
pub fn serialize_node(node: &Node, format: OutputFormat, indent_size: usize) -> Result<String> {
    match format {
        OutputFormat::Yaml => serde_yaml::to_string(node).context("Failed to serialize YAML"),
        OutputFormat::Json => {
            let indent = " ".repeat(indent_size);
            let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
            let mut out = Vec::new();
            let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
            node.serialize(&mut serializer)
                .context("Failed to serialize JSON")?;
            String::from_utf8(out).context("Serialized JSON was not UTF-8")
        }
    }
}

/// Picks the output format for a file from its name, ignoring a `.gz` suffix.
///
/// `.json` files are written as JSON and `.yaml`/`.yml` files as YAML; any other
/// name uses `fallback`.
pub fn format_for_path<P: AsRef<Path>>(path: P, fallback: OutputFormat) -> OutputFormat {
    let name = path.as_ref().to_string_lossy();
    let base = name.strip_suffix(".gz").unwrap_or(&name);

    if base.ends_with(".json") {
        OutputFormat::Json
    } else if base.ends_with(".yaml") || base.ends_with(".yml") {
        OutputFormat::Yaml
    } else {
        fallback
    }
}

/// Picks the format for printing a document read from `source`.
///
/// An explicitly requested format wins; otherwise the source file's extension
/// decides, and documents from stdin use `configured`.
pub fn output_format_for(
    explicit: Option<OutputFormat>,
    source: Option<&str>,
    configured: OutputFormat,
) -> OutputFormat {
    match (explicit, source) {
        (Some(format), _) => format,
        (None, Some(path)) => format_for_path(path, configured),
        (None, None) => configured,
    }
}

/// Creates a backup of a file by copying it with a .bak extension.
fn create_backup<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    let mut backup_path = path.to_path_buf();
    let original_name = backup_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow::anyhow!("Invalid file name"))?;
    backup_path.set_file_name(format!("{}.bak", original_name));
    fs::copy(path, backup_path).context("Failed to create backup")?;
    Ok(())
}

/// Saves a document to a file with optional backup creation.
///
/// The format is chosen from the target's extension, falling back to
/// `config.output_format`. Targets ending in `.gz` are gzip-compressed.
///
/// # Examples
///
/// ```no_run
/// use pathquill::config::Config;
/// use pathquill::document::node::Node;
/// use pathquill::document::tree::Document;
/// use pathquill::file::saver::save_document;
///
/// let doc = Document::new(Node::mapping());
/// save_document("output.yaml", &doc, &Config::default()).unwrap();
/// ```
///
/// # Errors
///
/// This function will return an error if:
/// - Backup creation fails (if requested)
/// - Writing to the temp file fails
/// - Renaming the temp file to the target fails
pub fn save_document<P: AsRef<Path>>(path: P, doc: &Document, config: &Config) -> Result<()> {
    let path = path.as_ref();
    let should_compress = path.to_string_lossy().ends_with(".gz");
    let format = format_for_path(path, config.output_format);

    if config.create_backup && path.exists() {
        create_backup(path)?;
    }

    let mut text = serialize_node(doc.root(), format, config.indent_size)?;
    if !text.ends_with('\n') {
        text.push('\n');
    }

    log::debug!("writing {} bytes to {}", text.len(), path.display());
    write_file_atomic(path, text.as_bytes(), should_compress)
}

/// Writes data to a file atomically, optionally compressing with gzip.
///
/// This function writes to a temporary file first, then atomically renames
/// it to the target path, so the target is never left partially written.
fn write_file_atomic<P: AsRef<Path>>(path: P, data: &[u8], compress: bool) -> Result<()> {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    let path = path.as_ref();
    let mut temp_path = path.to_path_buf();
    let file_name = temp_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow::anyhow!("Invalid file name"))?;
    temp_path.set_file_name(format!(".{}.tmp", file_name));

    {
        let file = fs::File::create(&temp_path).context("Failed to create temp file")?;
        if compress {
            let mut encoder = GzEncoder::new(file, Compression::default());
            encoder.write_all(data).context("Failed to write data")?;
            encoder.finish().context("Failed to finish compression")?;
        } else {
            let mut file = file;
            file.write_all(data).context("Failed to write data")?;
            file.sync_all().context("Failed to sync file")?;
        }
    }

    fs::rename(&temp_path, path).context("Failed to rename temp file")?;
    Ok(())
}
