//! Tests for the fluent builder, key normalization, and the tag catalog.

use banyan_common::Indent;
use banyan_css::{declarations, rulesets};
use banyan_dom::{AttrValue, Content};
use banyan_html::{
    ElementBuilder, a, body, br, comment, div, h1, head, html, img, input, normalize_attr_key, p,
    style, title, ul,
};

// ========== key normalization ==========

#[test]
fn test_underscores_become_hyphens() {
    assert_eq!(normalize_attr_key("data_role"), "data-role");
    assert_eq!(normalize_attr_key("aria_hidden"), "aria-hidden");
}

#[test]
fn test_leading_underscore_is_dropped() {
    assert_eq!(normalize_attr_key("_class"), "class");
}

#[test]
fn test_trailing_underscore_is_dropped() {
    assert_eq!(normalize_attr_key("class_"), "class");
}

#[test]
fn test_only_one_end_is_trimmed() {
    // Trailing wins; the leading hyphen survives as a vendor prefix.
    assert_eq!(normalize_attr_key("_moz_style_"), "-moz-style");
}

#[test]
fn test_plain_keys_pass_through() {
    assert_eq!(normalize_attr_key("href"), "href");
    assert_eq!(normalize_attr_key("data-role"), "data-role");
}

// ========== fluent building ==========

#[test]
fn test_content_tag_renders_open_and_close() {
    assert_eq!(html().build().render(Indent::Flat).unwrap(), "<html></html>");
    assert_eq!(p().build().render(Indent::Flat).unwrap(), "<p></p>");
}

#[test]
fn test_void_tag_renders_as_singleton() {
    assert_eq!(br().build().render(Indent::Flat).unwrap(), "<br>");
    assert_eq!(img().build().render(Indent::Flat).unwrap(), "<img>");
}

#[test]
fn test_attr_and_text_chain() {
    let link = a().attr("href", "https://example.com").text("Example").build();
    assert_eq!(
        link.render(Indent::Flat).unwrap(),
        "<a href=\"https://example.com\">Example</a>"
    );
}

#[test]
fn test_bare_attribute_on_void_tag() {
    let field = input().bare("disabled").build();
    assert_eq!(field.render(Indent::Flat).unwrap(), "<input disabled>");
}

#[test]
fn test_builders_nest_without_explicit_build() {
    let doc = html()
        .child(head().child(title().text("Demo")))
        .child(body().child(h1().text("Title")).child(br()))
        .build();
    assert_eq!(
        doc.render(Indent::Flat).unwrap(),
        "<html><head><title>Demo</title></head><body><h1>Title</h1><br></body></html>"
    );
}

#[test]
fn test_attr_keys_are_normalized() {
    let item = div().attr("_class", "note").attr("data_role", "alert").build();
    assert_eq!(
        item.render(Indent::Flat).unwrap(),
        "<div class=\"note\" data-role=\"alert\"></div>"
    );
}

#[test]
fn test_inline_style_property_names_are_normalized() {
    let para = p()
        .text("hello")
        .attr("style", declarations! { "_moz_style_" => "foo" })
        .build();
    assert_eq!(
        para.render(Indent::Flat).unwrap(),
        "<p style=\"-moz-style:foo;\">hello</p>"
    );
}

#[test]
fn test_empty_attrs_build_to_none() {
    let item = div().build();
    assert_eq!(item.attrs, None);

    let styled = div().attr("id", "x").build();
    assert!(styled.attrs.is_some());
}

#[test]
fn test_void_discards_earlier_children() {
    let item = div().text("gone").void().build();
    assert_eq!(item.content, Content::Empty);
    assert_eq!(item.render(Indent::Flat).unwrap(), "<div>");
}

#[test]
fn test_numeric_children() {
    let list = ul().child(42).child(2.5).build();
    assert_eq!(list.render(Indent::Flat).unwrap(), "<ul>422.5</ul>");
}

#[test]
fn test_custom_tag_via_builder() {
    let custom = ElementBuilder::new("X-Widget").attr("open_", "true").build();
    assert_eq!(custom.render(Indent::Flat).unwrap(), "<x-widget open=\"true\"></x-widget>");
}

// ========== reserved tags ==========

#[test]
fn test_style_builder_normalizes_selectors_and_properties() {
    let sheet = style(&rulesets! {
        "body" => { "_moz_style_" => "foo" },
    })
    .build();
    assert_eq!(
        sheet.render(Indent::Flat).unwrap(),
        "<style>body { -moz-style:foo; }</style>"
    );
}

#[test]
fn test_style_builder_with_late_attribute() {
    let mut sheet = style(&rulesets! {
        "body" => { "margin" => "4px" },
        "p" => { "color" => "blue" },
    })
    .build();
    sheet.set_attr("type", "text/css");
    assert_eq!(
        sheet.render(Indent::Flat).unwrap(),
        "<style type=\"text/css\">body { margin:4px; } p { color:blue; }</style>"
    );
}

#[test]
fn test_comment_builder() {
    let note = comment().text("This is out!").build();
    assert_eq!(note.render(Indent::Flat).unwrap(), "<!-- This is out! -->");
}

#[test]
fn test_comment_builder_discards_attributes() {
    let note = comment().attr("id", "x").text("hidden").build();
    assert_eq!(note.get_attr("id"), None);
    assert_eq!(note.render(Indent::Flat).unwrap(), "<!-- hidden -->");
}

// ========== pretty printing through the builder ==========

#[test]
fn test_pretty_render_of_built_document() {
    let doc = html().child(head()).child(body().child(h1().text("Hi"))).build();
    assert_eq!(
        doc.render(Indent::Level(0)).unwrap(),
        "\n<html>\n  <head>\n  </head>\n  <body>\n    <h1>\n      Hi\n    </h1>\n  </body>\n</html>"
    );
}

#[test]
fn test_builder_attr_value_kinds() {
    let item = div()
        .attr("id", "main")
        .attr("class", AttrValue::TokenList(vec!["x".to_string(), "y".to_string()]))
        .bare("hidden")
        .build();
    assert_eq!(
        item.render(Indent::Flat).unwrap(),
        "<div id=\"main\" class=\"x y\" hidden></div>"
    );
}
