//! Heading extraction and hierarchical identifier derivation.
//!
//! Rendered HTML arrives with flat, collision-prone heading ids. This module
//! walks every `<h1>`..`<h6>` element in document order, maintains a
//! level-indexed stack of the slugs active above the current heading, and
//! derives an identifier that encodes the heading's position in the
//! hierarchy: the `--`-joined slugs from the document root down to the
//! heading itself. `# Drinks` / `## Coffee` / `### Latte` become `drinks`,
//! `drinks--coffee`, and `drinks--coffee--latte`.

use std::{collections::HashSet, sync::LazyLock};

use regex::Regex;

use crate::slug::slugify;

/// Separator between slug segments of a hierarchical identifier.
pub const SEGMENT_JOIN: &str = "--";

pub(crate) static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<h([1-6])([^>]*)>(.*?)</h([1-6])>").expect("heading regex")
});

// `\b` alone would also match `data-id`; require start-of-text or whitespace.
// Quote alternates keep mismatched pairs (id="a') from being recognized.
static ID_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:^|\s)id\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("id attribute regex")
});

static INNER_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("inner tag regex"));

/// One heading element, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingRecord {
    /// Heading level, 1–6, from the tag numeral.
    pub level: u8,
    /// Inner markup exactly as rendered, inline tags included.
    pub raw_title: String,
    /// Inner markup with nested tags stripped; used for slugging and TOC text.
    pub plain_title: String,
    /// Renderer-assigned id attribute, when one was present.
    pub original_id: Option<String>,
    /// Identifier encoding the path from the document root to this heading.
    pub hierarchical_id: String,
}

/// Level-indexed stack of the slugs above the current scan position.
///
/// Writing a slug at level `n` clears every entry at levels `>= n`, so the
/// populated entries always spell the path from the root to the most recent
/// heading. A level skip (an `h4` straight after an `h2`) simply leaves a
/// gap; the join uses populated entries only.
#[derive(Debug, Default)]
pub(crate) struct HierarchyStack {
    slots: [Option<String>; 6],
}

impl HierarchyStack {
    pub(crate) fn push(&mut self, level: u8, slug: String) {
        for slot in &mut self.slots[usize::from(level) - 1..] {
            *slot = None;
        }
        self.slots[usize::from(level) - 1] = Some(slug);
    }

    pub(crate) fn joined(&self) -> String {
        let segments: Vec<&str> = self.slots.iter().filter_map(|s| s.as_deref()).collect();
        segments.join(SEGMENT_JOIN)
    }
}

/// Tracks identifiers already issued for one document and disambiguates
/// repeats with a numeric suffix.
#[derive(Debug, Default)]
pub(crate) struct IdAllocator {
    issued: HashSet<String>,
    collisions: usize,
}

impl IdAllocator {
    /// Reserve `candidate`, appending `-2`, `-3`, … when it is already taken.
    pub(crate) fn reserve(&mut self, candidate: String) -> String {
        if self.issued.insert(candidate.clone()) {
            return candidate;
        }
        self.collisions += 1;
        let mut n = 2usize;
        loop {
            let suffixed = format!("{candidate}-{n}");
            if self.issued.insert(suffixed.clone()) {
                log::warn!("duplicate heading id {candidate:?}; issued {suffixed:?}");
                return suffixed;
            }
            n += 1;
        }
    }

    pub(crate) fn collisions(&self) -> usize {
        self.collisions
    }
}

/// Strip nested tags from a heading's inner markup.
#[must_use]
pub(crate) fn strip_inner_tags(raw: &str) -> String {
    INNER_TAG_RE.replace_all(raw, "").trim().to_string()
}

/// Renderer-assigned id from a heading's raw attribute text, if any.
pub(crate) fn existing_id(raw_attrs: &str) -> Option<String> {
    ID_ATTR_RE.captures(raw_attrs).and_then(|caps| {
        caps.get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str().to_string())
    })
}

/// Slug for one heading: the renderer-assigned id when present, else the
/// slugified plain title, else a positional fallback for titles that
/// slugify to nothing.
///
/// An id that already contains the segment join contributes only its leaf
/// segment; that keeps the whole rewrite idempotent when it runs over its
/// own output.
pub(crate) fn heading_slug(
    original_id: Option<&str>,
    plain_title: &str,
    separator: &str,
    ordinal: usize,
) -> String {
    if let Some(id) = original_id {
        let leaf = id.rsplit(SEGMENT_JOIN).next().unwrap_or(id);
        if !leaf.is_empty() {
            return leaf.to_string();
        }
    }
    let slug = slugify(plain_title, separator);
    if slug.is_empty() {
        format!("section-{ordinal}")
    } else {
        slug
    }
}

/// Push `slug` at `level` and reserve the joined identifier.
///
/// A suffixed id must flow back into the stack so that children of the
/// second "Specials" nest under "specials-2", not "specials".
pub(crate) fn reserve_hierarchical(
    stack: &mut HierarchyStack,
    allocator: &mut IdAllocator,
    level: u8,
    slug: String,
) -> String {
    stack.push(level, slug);
    let hierarchical_id = allocator.reserve(stack.joined());
    if hierarchical_id != stack.joined() {
        let leaf = hierarchical_id
            .rsplit(SEGMENT_JOIN)
            .next()
            .unwrap_or(&hierarchical_id)
            .to_string();
        stack.push(level, leaf);
    }
    hierarchical_id
}

/// Collect every heading in `html`, in document order, with hierarchical
/// identifiers computed against a fresh per-document stack.
///
/// Returns the records together with the number of identifier collisions
/// that had to be suffixed away.
#[must_use]
pub fn collect_headings(html: &str, separator: &str) -> (Vec<HeadingRecord>, usize) {
    let mut stack = HierarchyStack::default();
    let mut allocator = IdAllocator::default();
    let mut records = Vec::new();

    for caps in HEADING_RE.captures_iter(html) {
        // Mismatched open/close numerals (<h2>...</h3>) are renderer bugs;
        // skip rather than guess.
        if caps[1] != caps[4] {
            continue;
        }
        let level: u8 = caps[1].parse().unwrap_or(1);
        let raw_title = caps[3].to_string();
        let plain_title = strip_inner_tags(&raw_title);
        let original_id = existing_id(&caps[2]);

        let slug = heading_slug(
            original_id.as_deref(),
            &plain_title,
            separator,
            records.len() + 1,
        );
        let hierarchical_id = reserve_hierarchical(&mut stack, &mut allocator, level, slug);

        records.push(HeadingRecord {
            level,
            raw_title,
            plain_title,
            original_id,
            hierarchical_id,
        });
    }

    (records, allocator.collisions())
}
