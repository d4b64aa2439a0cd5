//! Table-of-contents derivation from the heading list.
//!
//! The flat heading sequence folds into a tree by level comparison: a new
//! heading pops open nodes until the top of the stack is strictly shallower,
//! then attaches as that node's child. Headings deeper than the configured
//! maximum depth never enter the tree. The tree serializes to nested
//! unordered lists wrapped in `<article class="table-of-contents">`; a
//! document with no qualifying headings produces no markup at all.

use crate::headings::HeadingRecord;

/// One node of the TOC tree. The root is synthetic: level 0, empty title
/// and id, only its children are rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocNode {
    pub title: String,
    pub id: String,
    pub level: u8,
    pub children: Vec<TocNode>,
}

impl TocNode {
    fn root() -> Self {
        TocNode {
            title: String::new(),
            id: String::new(),
            level: 0,
            children: Vec::new(),
        }
    }
}

/// Fold heading records into a TOC tree, excluding headings deeper than
/// `max_depth` entirely.
#[must_use]
pub fn build_toc(records: &[HeadingRecord], max_depth: u8) -> TocNode {
    let mut root = TocNode::root();
    // Path of child indices from the root to the currently open node.
    let mut path: Vec<usize> = Vec::new();

    for record in records {
        if record.level > max_depth {
            continue;
        }

        while !path.is_empty() {
            let open_level = node_at(&root, &path).level;
            if open_level < record.level {
                break;
            }
            path.pop();
        }

        let node = TocNode {
            title: record.plain_title.clone(),
            id: record.hierarchical_id.clone(),
            level: record.level,
            children: Vec::new(),
        };
        let parent = node_at_mut(&mut root, &path);
        parent.children.push(node);
        let idx = parent.children.len() - 1;
        path.push(idx);
    }

    root
}

fn node_at<'a>(root: &'a TocNode, path: &[usize]) -> &'a TocNode {
    path.iter().fold(root, |node, &i| &node.children[i])
}

fn node_at_mut<'a>(root: &'a mut TocNode, path: &[usize]) -> &'a mut TocNode {
    path.iter().fold(root, |node, &i| &mut node.children[i])
}

/// Serialize the tree to nested `<ul>` markup.
///
/// Returns `None` for an empty tree so callers can distinguish "no TOC"
/// from a populated one; there is never an empty wrapper element.
#[must_use]
pub fn render_toc(root: &TocNode) -> Option<String> {
    if root.children.is_empty() {
        return None;
    }
    let mut out = String::from("<article class=\"table-of-contents\">");
    render_children(root, &mut out);
    out.push_str("</article>");
    Some(out)
}

fn render_children(node: &TocNode, out: &mut String) {
    if node.children.is_empty() {
        return;
    }
    out.push_str("<ul>");
    for child in &node.children {
        out.push_str("<li><a href=\"#");
        out.push_str(&child.id);
        out.push_str("\">");
        out.push_str(&child.title);
        out.push_str("</a>");
        render_children(child, out);
        out.push_str("</li>");
    }
    out.push_str("</ul>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headings::collect_headings;

    fn records(html: &str) -> Vec<HeadingRecord> {
        collect_headings(html, "-").0
    }

    #[test]
    fn builds_a_nested_tree() {
        let recs = records("<h1>Drinks</h1><h2>Coffee</h2><h3>Latte</h3><h2>Tea</h2>");
        let tree = build_toc(&recs, 3);
        assert_eq!(tree.children.len(), 1);
        let drinks = &tree.children[0];
        assert_eq!(drinks.title, "Drinks");
        assert_eq!(drinks.children.len(), 2);
        assert_eq!(drinks.children[0].children[0].title, "Latte");
        assert_eq!(drinks.children[1].title, "Tea");
    }

    #[test]
    fn depth_bound_excludes_deep_headings_from_the_tree() {
        let recs = records("<h1>A</h1><h2>B</h2><h3>C</h3><h4>D</h4>");
        let tree = build_toc(&recs, 3);
        let c = &tree.children[0].children[0].children[0];
        assert_eq!(c.title, "C");
        assert!(c.children.is_empty());
    }

    #[test]
    fn sibling_after_deeper_heading_attaches_to_the_right_parent() {
        let recs = records("<h1>A</h1><h3>Deep</h3><h2>Back</h2>");
        let tree = build_toc(&recs, 6);
        let a = &tree.children[0];
        assert_eq!(a.children.len(), 2);
        assert_eq!(a.children[0].title, "Deep");
        assert_eq!(a.children[1].title, "Back");
    }

    #[test]
    fn renders_nested_lists() {
        let recs = records("<h1>Drinks</h1><h2>Coffee</h2>");
        let toc = render_toc(&build_toc(&recs, 3)).expect("toc should exist");
        insta::assert_snapshot!(toc, @r##"<article class="table-of-contents"><ul><li><a href="#drinks">Drinks</a><ul><li><a href="#drinks--coffee">Coffee</a></li></ul></li></ul></article>"##);
    }

    #[test]
    fn empty_tree_renders_to_none() {
        assert_eq!(render_toc(&build_toc(&[], 3)), None);
        // All headings excluded by the depth bound is also "no TOC".
        let recs = records("<h4>Too deep</h4>");
        assert_eq!(render_toc(&build_toc(&recs, 3)), None);
    }

    #[test]
    fn one_entry_toc_is_still_a_toc() {
        let recs = records("<h1>Only</h1>");
        let toc = render_toc(&build_toc(&recs, 3));
        assert_eq!(
            toc.as_deref(),
            Some(
                "<article class=\"table-of-contents\">\
                 <ul><li><a href=\"#only\">Only</a></li></ul></article>"
            )
        );
    }
}
