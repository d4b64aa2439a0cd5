//! Heading extraction from not-yet-rendered Markdown.
//!
//! Hook points that run before the renderer see ATX `#`-prefixed heading
//! lines rather than `<h*>` elements. This module produces the same
//! [`HeadingRecord`] sequence from those lines, so a table of contents can
//! be derived without waiting for the rendered HTML. Headings inside fenced
//! code blocks are ignored.

use std::sync::LazyLock;

use regex::Regex;

use crate::headings::{
    HeadingRecord, HierarchyStack, IdAllocator, heading_slug, reserve_hierarchical,
};

static ATX_HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.*?)\s*#*\s*$").expect("ATX heading regex"));

static FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(```|~~~)").expect("fence regex"));

/// Collect ATX headings from Markdown lines, with the same hierarchy and
/// collision semantics as the HTML scan.
#[must_use]
pub fn collect_markdown_headings(lines: &[String], separator: &str) -> (Vec<HeadingRecord>, usize) {
    let mut stack = HierarchyStack::default();
    let mut allocator = IdAllocator::default();
    let mut records = Vec::new();
    let mut in_code = false;

    for line in lines {
        if FENCE_RE.is_match(line.trim_start()) {
            in_code = !in_code;
            continue;
        }
        if in_code {
            continue;
        }
        let Some(caps) = ATX_HEADING_RE.captures(line) else {
            continue;
        };
        let level = u8::try_from(caps[1].len()).unwrap_or(6);
        let title = caps[2].trim().to_string();

        let slug = heading_slug(None, &title, separator, records.len() + 1);
        let hierarchical_id = reserve_hierarchical(&mut stack, &mut allocator, level, slug);

        records.push(HeadingRecord {
            level,
            raw_title: title.clone(),
            plain_title: title,
            original_id: None,
            hierarchical_id,
        });
    }

    (records, allocator.collisions())
}
