//! Checks applied to a statement file before it reaches the parser.

use anyhow::{Context, Result, bail};
use log::debug;
use std::fs;
use std::path::Path;

use crate::config::InputSection;

pub fn check_extension(path: &Path) -> Result<()> {
    let is_pdf = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"));
    if !is_pdf {
        bail!("Please upload a PDF file (got {})", path.display());
    }
    Ok(())
}

pub fn check_size(len: u64, max_bytes: u64) -> Result<()> {
    if len > max_bytes {
        bail!("File is {} bytes; the limit is {} bytes", len, max_bytes);
    }
    Ok(())
}

/// Validate and read a statement PDF.
pub fn read_statement(path: &Path, input: &InputSection) -> Result<Vec<u8>> {
    if !path.exists() {
        bail!("File not found: {}", path.display());
    }
    if input.require_pdf_extension {
        check_extension(path)?;
    }

    let meta = fs::metadata(path).with_context(|| format!("stat {}", path.display()))?;
    check_size(meta.len(), input.max_bytes)?;

    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    debug!("read {} bytes from {}", bytes.len(), path.display());
    Ok(bytes)
}
