//! Document loading functionality.
//!
//! This module provides functions to load YAML or JSON documents from files or
//! stdin, parsing them into `Document` structures that paths can be applied to.
//! Gzip-compressed input is decompressed transparently.

use crate::document::parser::parse_yaml;
use crate::document::tree::Document;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Loads and parses a YAML or JSON file from the filesystem.
///
/// Files ending in `.gz` are decompressed before parsing.
///
/// # Examples
///
/// ```no_run
/// use pathquill::file::loader::load_document;
///
/// let doc = load_document("config.yaml").unwrap();
/// let port = doc.get("server.port").unwrap();
/// ```
///
/// # Errors
///
/// This function will return an error if:
/// - The file path does not exist or cannot be read
/// - The file is not valid gzip when named `*.gz`
/// - The contents are not valid YAML or JSON
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Document> {
    let path_ref = path.as_ref();

    let is_gzipped = path_ref
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let content = if is_gzipped {
        read_gzipped_file(path_ref)?
    } else {
        fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read file {}", path_ref.display()))?
    };

    log::debug!("loaded {} bytes from {}", content.len(), path_ref.display());

    let doc = parse_yaml(&content)
        .with_context(|| format!("Failed to parse {}", path_ref.display()))?;
    Ok(Document::with_source(doc.into_root(), path_ref))
}

/// Loads and parses a document from standard input.
///
/// Input starting with the gzip magic bytes (0x1f 0x8b) is decompressed first.
pub fn load_from_stdin() -> Result<Document> {
    use std::io::{self, Read};

    let mut buffer = Vec::new();
    io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read from stdin")?;

    load_from_bytes(buffer)
}

/// Parses a document from raw bytes, decompressing gzip input.
pub fn load_from_bytes(buffer: Vec<u8>) -> Result<Document> {
    let content = if buffer.starts_with(&[0x1f, 0x8b]) {
        decompress_gzip_bytes(&buffer)?
    } else {
        String::from_utf8(buffer).context("Invalid UTF-8 in input")?
    };

    parse_yaml(&content)
}

/// Reads and decompresses a gzipped file.
fn read_gzipped_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let bytes = fs::read(path).context("Failed to open gzipped file")?;
    decompress_gzip_bytes(&bytes)
}

fn decompress_gzip_bytes(bytes: &[u8]) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let mut decoder = GzDecoder::new(bytes);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzip data")?;
    Ok(content)
}
