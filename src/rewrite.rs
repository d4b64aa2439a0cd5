//! Applies hierarchical identifiers back onto the document.
//!
//! A single pass over the heading elements replaces (or inserts) each `id`
//! attribute and records how the heading used to be addressable: by its
//! renderer-assigned id, by the slug of its plain title, and by the plain
//! title verbatim. The resulting map lets the link resolver fix anchors no
//! matter which form a pre-existing link used.

use std::{collections::HashMap, sync::LazyLock};

use regex::Regex;

use crate::{
    headings::{HEADING_RE, HeadingRecord, existing_id},
    slug::slugify,
};

/// Old addressable forms → new hierarchical id, for one document.
pub type IdentifierMap = HashMap<String, String>;

/// Replace each heading's id attribute with its hierarchical id.
///
/// Returns the rewritten HTML, the identifier map for the link resolver,
/// and the heading records (with collision count) for the TOC builder.
/// Every attribute other than `id` and the heading's inner markup pass
/// through unchanged.
#[must_use]
pub fn rewrite_heading_ids(
    html: &str,
    separator: &str,
) -> (String, IdentifierMap, Vec<HeadingRecord>, usize) {
    let (records, collisions) = crate::headings::collect_headings(html, separator);
    let mut map = IdentifierMap::new();
    for record in &records {
        if let Some(old) = &record.original_id {
            map.entry(old.clone())
                .or_insert_with(|| record.hierarchical_id.clone());
        }
        let slugged = slugify(&record.plain_title, separator);
        if !slugged.is_empty() {
            map.entry(slugged)
                .or_insert_with(|| record.hierarchical_id.clone());
        }
        if !record.plain_title.is_empty() {
            map.entry(record.plain_title.clone())
                .or_insert_with(|| record.hierarchical_id.clone());
        }
    }

    let mut next = 0usize;
    let rewritten = HEADING_RE.replace_all(html, |caps: &regex::Captures<'_>| {
        if caps[1] != caps[4] {
            return caps[0].to_string();
        }
        let Some(record) = records.get(next) else {
            return caps[0].to_string();
        };
        next += 1;
        let attrs = replace_id_attr(&caps[2], &record.hierarchical_id);
        format!("<h{}{}>{}</h{}>", &caps[1], attrs, &caps[3], &caps[1])
    });

    (rewritten.into_owned(), map, records, collisions)
}

static ID_VALUE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(^|\s)id\s*=\s*(?:"[^"]*"|'[^']*')"#).expect("id value regex")
});

/// Swap the id value inside raw attribute text, or prepend one when absent.
fn replace_id_attr(raw_attrs: &str, new_id: &str) -> String {
    if existing_id(raw_attrs).is_some() {
        return ID_VALUE_RE
            .replace(raw_attrs, |caps: &regex::Captures<'_>| {
                format!("{}id=\"{new_id}\"", &caps[1])
            })
            .into_owned();
    }
    format!(" id=\"{new_id}\"{raw_attrs}")
}
