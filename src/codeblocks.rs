//! Propagates code-block language classes to `<code>` elements.
//!
//! Renderers commonly attach `class="language-rust"` to a `<div>` wrapping
//! the highlighted block, while client-side highlighters look for the class
//! on the `<code>` element itself and fall back to auto-detection when it is
//! missing. This pass carries the most recently seen language class from a
//! `<div>` down to following `<code>` elements that lack one.

use std::sync::LazyLock;

use regex::Regex;

use crate::scanner::{Fragment, scan};

static LANGUAGE_CLASS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"language-[\w-]+").expect("language class regex"));

static CLASS_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\bclass\s*=\s*"([^"]*)""#).expect("class attribute regex"));

/// Add the enclosing block's `language-*` class to `<code>` elements.
#[must_use]
pub fn fix_code_language_classes(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut language: Option<String> = None;

    for fragment in scan(html) {
        match &fragment {
            Fragment::Open { name, raw_attrs } if name.eq_ignore_ascii_case("div") => {
                if let Some(m) = LANGUAGE_CLASS_RE.find(raw_attrs) {
                    language = Some(m.as_str().to_string());
                }
                fragment.push_original(&mut out);
            }
            Fragment::Open { name, raw_attrs } if name.eq_ignore_ascii_case("code") => {
                match &language {
                    Some(lang) if !LANGUAGE_CLASS_RE.is_match(raw_attrs) => {
                        out.push_str("<code");
                        out.push_str(&with_language_class(raw_attrs, lang));
                        out.push('>');
                    }
                    _ => fragment.push_original(&mut out),
                }
            }
            _ => fragment.push_original(&mut out),
        }
    }

    out
}

/// Merge `lang` into existing raw attribute text, appending to a present
/// class list or adding a new class attribute.
fn with_language_class(raw_attrs: &str, lang: &str) -> String {
    if let Some(caps) = CLASS_ATTR_RE.captures(raw_attrs) {
        let merged = format!("class=\"{} {lang}\"", &caps[1]);
        return CLASS_ATTR_RE
            .replace(raw_attrs, regex::NoExpand(&merged))
            .into_owned();
    }
    format!(" class=\"{lang}\"{raw_attrs}")
}
