//! Library for fixing heading anchors in rendered HTML.
//!
//! An upstream renderer assigns flat, collision-prone ids to headings. The
//! passes here rewrite those ids so they encode the heading hierarchy
//! (`drinks--coffee--latte`), repair same-document anchor links to match,
//! derive a nested table of contents, wrap bare images in links to their
//! own source, and propagate code-block language classes for client-side
//! highlighters.
//!
//! Every pass is a pure function over a document string; nothing persists
//! across documents, so callers may process documents in parallel freely.

pub mod codeblocks;
pub mod headings;
pub mod images;
pub mod io;
pub mod links;
pub mod markdown;
pub mod process;
pub mod rewrite;
pub mod scanner;
pub mod slug;
pub mod toc;

pub use codeblocks::fix_code_language_classes;
pub use headings::{HeadingRecord, collect_headings};
pub use images::linkify_images;
pub use io::{rewrite, rewrite_with_toc};
pub use links::resolve_links;
pub use markdown::collect_markdown_headings;
pub use process::{Options, Transformed, transform};
pub use rewrite::{IdentifierMap, rewrite_heading_ids};
pub use scanner::{Fragment, attr_value, scan};
pub use slug::{DEFAULT_SEPARATOR, slugify};
pub use toc::{TocNode, build_toc, render_toc};
