//! URL-safe slug derivation for heading titles and link fragments.
//!
//! The slug alphabet is `[a-z0-9]`; every maximal run of other characters
//! collapses to a single separator and trailing separators are trimmed.
//! `slugify` is pure and idempotent, so a fragment that is already a slug
//! passes through unchanged.

use std::sync::LazyLock;

use regex::Regex;

static NON_SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("non-slug regex"));

/// Default separator used between slug words.
pub const DEFAULT_SEPARATOR: &str = "-";

/// Derive a URL-safe token from arbitrary text.
///
/// Lower-cases the input, replaces each run of characters outside
/// `[a-z0-9]` with `separator`, and trims trailing separators. Input that
/// contains no slug characters yields an empty token; callers that need a
/// non-empty identifier must supply their own fallback.
#[must_use]
pub fn slugify(text: &str, separator: &str) -> String {
    let lowered = text.to_lowercase();
    let replaced = NON_SLUG_RE.replace_all(&lowered, separator);
    let mut slug = replaced.into_owned();
    while !separator.is_empty() && slug.ends_with(separator) {
        slug.truncate(slug.len() - separator.len());
    }
    slug
}
