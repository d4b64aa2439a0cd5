//! Utility helpers shared across integration tests.

use rstest::fixture;

/// A small drinks menu with nested headings and an internal anchor link.
#[fixture]
pub fn drinks_page() -> String {
    "<h1 id=\"drinks\">Drinks</h1>\
     <p>See <a href=\"#coffee\">coffee</a> below.</p>\
     <h2 id=\"coffee\">Coffee</h2>\
     <h3 id=\"latte\">Latte</h3>\
     <h3 id=\"espresso\">Espresso</h3>\
     <h2 id=\"tea\">Tea</h2>"
        .to_string()
}

/// A page with one bare image and one already-linked image.
#[fixture]
pub fn images_page() -> String {
    "<p><img src=\"bare.png\" alt=\"bare\"></p>\
     <p><a href=\"page.html\"><img src=\"linked.png\"></a></p>"
        .to_string()
}
