//! High-level document transformation.
//!
//! Composes the passes into one per-document pipeline: identifier
//! normalization (heading rewrite, then link resolution over the rewritten
//! markup), TOC derivation from the heading list, and the independent image
//! and code-class passes. All state is local to one call; transforming a
//! document can never fail, only produce best-effort output.

use crate::{
    codeblocks::fix_code_language_classes,
    images::linkify_images,
    links::resolve_links,
    rewrite::rewrite_heading_ids,
    slug::DEFAULT_SEPARATOR,
    toc::{build_toc, render_toc},
};

/// Per-document transformation options.
#[derive(Debug, Clone)]
pub struct Options {
    /// Deepest heading level included in the TOC tree.
    pub max_toc_depth: u8,
    /// Slug word separator.
    pub separator: String,
    /// Whether to derive a TOC for this document at all.
    pub toc_enabled: bool,
    /// Whether to wrap bare images in self-links.
    pub linkify_images: bool,
    /// Whether to propagate `language-*` classes onto `<code>` elements.
    pub fix_code_classes: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            max_toc_depth: 3,
            separator: DEFAULT_SEPARATOR.to_string(),
            toc_enabled: true,
            linkify_images: true,
            fix_code_classes: true,
        }
    }
}

/// Result of transforming one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformed {
    /// The rewritten HTML.
    pub html: String,
    /// Nested-list TOC markup; `None` when no heading qualifies or the TOC
    /// is disabled.
    pub toc: Option<String>,
    /// Number of heading-id collisions that were suffixed away.
    pub collisions: usize,
}

/// Transform one rendered document.
///
/// Total over its input: any string in, best-effort string out.
#[must_use]
pub fn transform(html: &str, options: &Options) -> Transformed {
    let (rewritten, map, records, collisions) = rewrite_heading_ids(html, &options.separator);
    let mut html = resolve_links(&rewritten, &map, &options.separator);

    let toc = if options.toc_enabled {
        render_toc(&build_toc(&records, options.max_toc_depth))
    } else {
        None
    };

    if options.fix_code_classes {
        html = fix_code_language_classes(&html);
    }
    if options.linkify_images {
        html = linkify_images(&html);
    }

    Transformed {
        html,
        toc,
        collisions,
    }
}
