//! Linear tag-oriented scanner for rendered HTML.
//!
//! The scanner lexes a document into a flat sequence of fragments: opening
//! tags, closing tags, and text runs. It does not validate well-formedness;
//! the input comes from a trusted renderer, so a stray `<` or an unclosed
//! tag at end of input degenerates to a text fragment rather than an error.
//! Concatenating the fragments reproduces the input byte for byte.

/// One lexical unit of an HTML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment<'a> {
    /// An opening (or self-closing) tag: name plus its raw attribute text.
    Open { name: &'a str, raw_attrs: &'a str },
    /// A closing tag.
    Close { name: &'a str },
    /// A run of literal text between tags.
    Text(&'a str),
}

impl Fragment<'_> {
    /// Append the fragment's original text to `out`.
    pub fn push_original(&self, out: &mut String) {
        match self {
            Fragment::Open { name, raw_attrs } => {
                out.push('<');
                out.push_str(name);
                out.push_str(raw_attrs);
                out.push('>');
            }
            Fragment::Close { name } => {
                out.push_str("</");
                out.push_str(name);
                out.push('>');
            }
            Fragment::Text(t) => out.push_str(t),
        }
    }
}

/// Lex `html` into a flat fragment sequence in one forward pass.
#[must_use]
pub fn scan(html: &str) -> Vec<Fragment<'_>> {
    let mut fragments = Vec::new();
    let mut rest = html;

    while !rest.is_empty() {
        if let Some(start) = rest.find('<') {
            if start > 0 {
                fragments.push(Fragment::Text(&rest[..start]));
                rest = &rest[start..];
            }
            match rest.find('>') {
                Some(end) => {
                    fragments.push(parse_tag(&rest[..=end]));
                    rest = &rest[end + 1..];
                }
                None => {
                    // Unclosed tag at end of input; treat as literal text.
                    fragments.push(Fragment::Text(rest));
                    rest = "";
                }
            }
        } else {
            fragments.push(Fragment::Text(rest));
            rest = "";
        }
    }

    fragments
}

/// Split `<...>` (inclusive of the angle brackets) into a tag fragment.
fn parse_tag(tag: &str) -> Fragment<'_> {
    let inner = &tag[1..tag.len() - 1];
    if let Some(name) = inner.strip_prefix('/') {
        return Fragment::Close { name: name.trim() };
    }
    let name_end = inner
        .find(|c: char| c.is_whitespace() || c == '/')
        .unwrap_or(inner.len());
    Fragment::Open {
        name: &inner[..name_end],
        raw_attrs: &inner[name_end..],
    }
}

/// Extract the value of an attribute from a tag's raw attribute text.
///
/// Accepts single- or double-quoted values. Returns `None` when the
/// attribute is absent or unquoted.
#[must_use]
pub fn attr_value<'a>(raw_attrs: &'a str, name: &str) -> Option<&'a str> {
    let mut search = raw_attrs;
    while let Some(pos) = search.find(name) {
        let after = &search[pos + name.len()..];
        let preceded_ok = search[..pos]
            .chars()
            .next_back()
            .is_none_or(|c| c.is_whitespace());
        let mut value = after.trim_start();
        if preceded_ok && value.starts_with('=') {
            value = value[1..].trim_start();
            let quote = value.chars().next()?;
            if quote == '"' || quote == '\'' {
                let body = &value[1..];
                return body.find(quote).map(|end| &body[..end]);
            }
        }
        search = &search[pos + name.len()..];
    }
    None
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn scans_tags_and_text() {
        let frags = scan("<p class=\"x\">hi</p>");
        assert_eq!(
            frags,
            vec![
                Fragment::Open {
                    name: "p",
                    raw_attrs: " class=\"x\"",
                },
                Fragment::Text("hi"),
                Fragment::Close { name: "p" },
            ]
        );
    }

    #[rstest]
    #[case("<h2 id=\"a\">Title <em>x</em></h2>")]
    #[case("text only")]
    #[case("<br/><img src='a.png'>trailing")]
    #[case("broken < text and <unclosed")]
    #[case("")]
    fn fragment_concatenation_reproduces_input(#[case] html: &str) {
        let mut out = String::new();
        for frag in scan(html) {
            frag.push_original(&mut out);
        }
        assert_eq!(out, html);
    }

    #[test]
    fn self_closing_tag_is_an_open_fragment() {
        let frags = scan("<img src=\"x.png\"/>");
        assert_eq!(
            frags,
            vec![Fragment::Open {
                name: "img",
                raw_attrs: " src=\"x.png\"/",
            }]
        );
    }

    #[rstest]
    #[case(" src=\"a.png\" alt=\"b\"", "src", Some("a.png"))]
    #[case(" src='a.png'", "src", Some("a.png"))]
    #[case(" alt=\"no source\"", "src", None)]
    #[case(" src=\"a.png'", "src", None)]
    #[case(" data-src=\"decoy\" src=\"real.png\"", "src", Some("real.png"))]
    fn extracts_attribute_values(
        #[case] raw: &str,
        #[case] name: &str,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(attr_value(raw, name), expected);
    }
}
