//! End-to-end tests for the document transformation pipeline.

use anchorfix::{Options, transform};

mod prelude;
use prelude::*;

#[rstest]
fn identifiers_become_hierarchical(drinks_page: String) {
    let out = transform(&drinks_page, &Options::default());
    assert!(out.html.contains("<h1 id=\"drinks\">Drinks</h1>"));
    assert!(out.html.contains("<h2 id=\"drinks--coffee\">Coffee</h2>"));
    assert!(out.html.contains("<h3 id=\"drinks--coffee--latte\">Latte</h3>"));
    assert!(
        out.html
            .contains("<h3 id=\"drinks--coffee--espresso\">Espresso</h3>")
    );
    assert!(out.html.contains("<h2 id=\"drinks--tea\">Tea</h2>"));
}

#[rstest]
fn internal_links_keep_resolving(drinks_page: String) {
    let out = transform(&drinks_page, &Options::default());
    assert!(out.html.contains("<a href=\"#drinks--coffee\">coffee</a>"));
}

#[rstest]
fn toc_matches_the_rewritten_document(drinks_page: String) {
    let out = transform(&drinks_page, &Options::default());
    let toc = out.toc.expect("drinks page should have a TOC");
    insta::assert_snapshot!(toc, @r##"<article class="table-of-contents"><ul><li><a href="#drinks">Drinks</a><ul><li><a href="#drinks--coffee">Coffee</a><ul><li><a href="#drinks--coffee--latte">Latte</a></li><li><a href="#drinks--coffee--espresso">Espresso</a></li></ul></li><li><a href="#drinks--tea">Tea</a></li></ul></li></ul></article>"##);
}

#[rstest]
fn toc_depth_bound_prunes_deep_headings() {
    let html = "<h1>A</h1><h2>B</h2><h3>C</h3><h4>D</h4>";
    let out = transform(html, &Options::default());
    let toc = out.toc.expect("toc");
    assert!(toc.contains("#a--b--c"));
    assert!(!toc.contains('D'));
}

#[rstest]
fn transformation_is_idempotent(drinks_page: String) {
    let opts = Options::default();
    let once = transform(&drinks_page, &opts);
    let twice = transform(&once.html, &opts);
    assert_eq!(twice.html, once.html);
    assert_eq!(twice.toc, once.toc);
}

#[rstest]
#[case("")]
#[case("   \n  ")]
#[case("<p>unclosed <em>emphasis")]
#[case("stray < bracket and <h2>no close")]
fn hostile_input_never_panics_and_is_best_effort(#[case] html: &str) {
    let out = transform(html, &Options::default());
    assert_eq!(out.toc, None);
    assert_eq!(out.collisions, 0);
    let _ = out.html;
}

#[rstest]
fn document_state_does_not_leak_between_documents() {
    let opts = Options::default();
    let first = transform("<h1>Alpha</h1><h2>Child</h2>", &opts);
    let second = transform("<h2>Orphan</h2>", &opts);
    assert!(first.html.contains("id=\"alpha--child\""));
    // A fresh document must not inherit "alpha" as a parent segment.
    assert!(second.html.contains("id=\"orphan\""));
}
