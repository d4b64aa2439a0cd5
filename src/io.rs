//! File helpers for rewriting rendered documents.

use std::{fs, path::Path};

use crate::process::{Options, transform};

/// Rewrite a file in place with transformed markup.
///
/// # Errors
/// Returns an error if reading or writing the file fails.
pub fn rewrite(path: &Path, options: &Options) -> std::io::Result<()> {
    let html = fs::read_to_string(path)?;
    let out = transform(&html, options);
    fs::write(path, out.html)
}

/// Rewrite a file in place and return its TOC markup, if any.
///
/// # Errors
/// Returns an error if reading or writing the file fails.
pub fn rewrite_with_toc(path: &Path, options: &Options) -> std::io::Result<Option<String>> {
    let html = fs::read_to_string(path)?;
    let out = transform(&html, options);
    fs::write(path, out.html)?;
    Ok(out.toc)
}
