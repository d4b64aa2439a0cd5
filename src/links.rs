//! Same-document anchor link rewriting.
//!
//! After heading ids change, fragment-only links (`href="#coffee"`) would
//! dangle. This pass looks each fragment up in the identifier map, first
//! verbatim and then in slugified form, and rewrites the href on a hit.
//! Misses are left alone: the fragment may legitimately target a
//! non-heading element, and a dangling link is not this tool's error.

use std::sync::LazyLock;

use regex::Regex;

use crate::{rewrite::IdentifierMap, slug::slugify};

// Quote alternates: a mismatched pair (href="#x') is left for the browser
// to sort out rather than silently normalized.
static FRAGMENT_HREF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r##"href\s*=\s*(?:"#([^"]*)"|'#([^']*)')"##).expect("fragment href regex")
});

/// Rewrite fragment-only hrefs whose target appears in `map`.
///
/// Absolute and relative hrefs are never touched, only `href="#…"`.
#[must_use]
pub fn resolve_links(html: &str, map: &IdentifierMap, separator: &str) -> String {
    FRAGMENT_HREF_RE
        .replace_all(html, |caps: &regex::Captures<'_>| {
            let (fragment, quote) = match (caps.get(1), caps.get(2)) {
                (Some(m), _) => (m.as_str(), '"'),
                (None, Some(m)) => (m.as_str(), '\''),
                (None, None) => return caps[0].to_string(),
            };
            let target = map
                .get(fragment)
                .or_else(|| map.get(&slugify(fragment, separator)));
            match target {
                Some(new_id) => format!("href={quote}#{new_id}{quote}"),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}
