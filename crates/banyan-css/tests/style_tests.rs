//! Tests for inline style and ruleset serialization.

use banyan_common::Indent;
use banyan_css::{Declarations, RulesetMap, declarations, render_inline_style, render_rulesets, rulesets};

// ========== inline styles ==========

#[test]
fn test_single_declaration() {
    let d = declarations! { "background-color" => "black" };
    assert_eq!(render_inline_style(&d), "background-color:black;");
}

#[test]
fn test_declarations_are_space_joined_in_insertion_order() {
    let d = declarations! {
        "margin" => "4px",
        "color" => "blue",
        "border" => "1px solid red",
    };
    assert_eq!(
        render_inline_style(&d),
        "margin:4px; color:blue; border:1px solid red;"
    );
}

#[test]
fn test_empty_declarations_render_empty() {
    assert_eq!(render_inline_style(&Declarations::new()), "");
}

#[test]
fn test_insert_existing_property_updates_in_place() {
    let mut d = declarations! {
        "margin" => "4px",
        "color" => "blue",
    };
    d.insert("margin", "8px");
    assert_eq!(render_inline_style(&d), "margin:8px; color:blue;");
    assert_eq!(d.get("margin"), Some("8px"));
    assert_eq!(d.len(), 2);
}

// ========== rulesets ==========

#[test]
fn test_single_ruleset_flat() {
    let sheet = rulesets! {
        "p.myclass" => { "margin" => "4px" },
    };
    assert_eq!(
        render_rulesets(&sheet, Indent::Flat),
        "p.myclass { margin:4px; }"
    );
}

#[test]
fn test_rulesets_keep_insertion_order() {
    let sheet = rulesets! {
        "body" => { "margin" => "4px" },
        "p" => { "color" => "blue" },
    };
    assert_eq!(
        render_rulesets(&sheet, Indent::Flat),
        "body { margin:4px; } p { color:blue; }"
    );
}

#[test]
fn test_ruleset_with_multiple_declarations() {
    let sheet = rulesets! {
        "h1" => {
            "font-size" => "2em",
            "font-weight" => "bold",
        },
    };
    assert_eq!(
        render_rulesets(&sheet, Indent::Flat),
        "h1 { font-size:2em; font-weight:bold; }"
    );
}

#[test]
fn test_rulesets_indented() {
    let sheet = rulesets! {
        "body" => { "margin" => "4px" },
        "p" => { "color" => "blue" },
    };
    assert_eq!(
        render_rulesets(&sheet, Indent::Level(1)),
        "\n  body { margin:4px; } \n  p { color:blue; }"
    );
}

#[test]
fn test_insert_existing_selector_replaces_declarations() {
    let mut sheet = rulesets! {
        "body" => { "margin" => "4px" },
        "p" => { "color" => "blue" },
    };
    sheet.insert("body", declarations! { "margin" => "0" });
    assert_eq!(
        render_rulesets(&sheet, Indent::Flat),
        "body { margin:0; } p { color:blue; }"
    );
}

#[test]
fn test_empty_ruleset_map_renders_empty() {
    assert_eq!(render_rulesets(&RulesetMap::new(), Indent::Flat), "");
}

#[test]
fn test_ruleset_with_empty_declarations() {
    let sheet = rulesets! { "p" => {} };
    assert_eq!(render_rulesets(&sheet, Indent::Flat), "p {  }");
}
