//! Makes bare images clickable.
//!
//! Every `<img>` that is not already inside an anchor gets wrapped in a link
//! to its own `src`, opening in a new tab. An anchor-depth counter over the
//! fragment stream decides "inside an anchor": it increments on `<a>`,
//! decrements (saturating) on `</a>`, and the wrap only happens at depth
//! zero, so linked images are never double-wrapped.

use crate::scanner::{Fragment, attr_value, scan};

/// Wrap un-anchored `<img>` elements in `<a href="{src}" target="_blank">`.
///
/// An image without a `src` attribute is still wrapped, with an empty href;
/// skipping it would hide the malformation from the page author.
#[must_use]
pub fn linkify_images(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut anchor_depth = 0usize;

    for fragment in scan(html) {
        match &fragment {
            Fragment::Open { name, .. } if name.eq_ignore_ascii_case("a") => {
                anchor_depth += 1;
                fragment.push_original(&mut out);
            }
            Fragment::Close { name } if name.eq_ignore_ascii_case("a") => {
                anchor_depth = anchor_depth.saturating_sub(1);
                fragment.push_original(&mut out);
            }
            Fragment::Open { name, raw_attrs }
                if name.eq_ignore_ascii_case("img") && anchor_depth == 0 =>
            {
                let src = attr_value(raw_attrs, "src").unwrap_or("");
                out.push_str("<a href=\"");
                out.push_str(src);
                out.push_str("\" target=\"_blank\">");
                fragment.push_original(&mut out);
                out.push_str("</a>");
            }
            _ => fragment.push_original(&mut out),
        }
    }

    out
}
