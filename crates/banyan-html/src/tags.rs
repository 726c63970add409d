//! Factory functions for the standard non-obsolete HTML tags.
//!
//! Grouped by the element categories at
//! <https://developer.mozilla.org/en-US/docs/Web/HTML/Element> and
//! alphabetical within groups. Content tags start with an empty child
//! sequence (`div()` renders `<div></div>`); void tags start as singletons
//! (`br()` renders `<br>`). `style` and the comment pseudo-tag have their
//! own constructors because their content follows different rules.

use banyan_css::RulesetMap;

use crate::builder::ElementBuilder;

/// Generate a factory per content tag.
macro_rules! content_tags {
    ($($name:ident => $tag:literal),* $(,)?) => {
        $(
            #[doc = concat!("Builder for the `<", $tag, ">` element.")]
            #[must_use]
            pub fn $name() -> ElementBuilder {
                ElementBuilder::new($tag)
            }
        )*
    };
}

/// Generate a factory per void tag (singleton semantics, no closing tag).
macro_rules! void_tags {
    ($($name:ident => $tag:literal),* $(,)?) => {
        $(
            #[doc = concat!("Builder for the void `<", $tag, ">` element.")]
            #[must_use]
            pub fn $name() -> ElementBuilder {
                ElementBuilder::new($tag).void()
            }
        )*
    };
}

// ========== Main root ==========

content_tags! {
    html => "html",
}

// ========== Document metadata ==========

content_tags! {
    body => "body",
    head => "head",
    title => "title",
}

void_tags! {
    link => "link",
    meta => "meta",
}

/// Builder for the `<style>` element.
///
/// The content of a style element is a CSS ruleset map rather than a child
/// sequence; selectors and property names are normalized with
/// [`normalize_attr_key`](crate::normalize_attr_key) so they can be spelled
/// as identifiers.
///
/// ```
/// use banyan_common::Indent;
/// use banyan_css::rulesets;
/// use banyan_html::style;
///
/// let sheet = style(&rulesets! { "p.myclass" => { "margin" => "4px" } }).build();
/// assert_eq!(
///     sheet.render(Indent::Flat).unwrap(),
///     "<style>p.myclass { margin:4px; }</style>"
/// );
/// ```
#[must_use]
pub fn style(rules: &RulesetMap) -> ElementBuilder {
    ElementBuilder::new("style").rulesets(rules)
}

/// Builder for an HTML comment node.
///
/// Comments take no attributes and close with `-->`:
/// `comment().text("hi").build()` renders `<!-- hi -->`.
#[must_use]
pub fn comment() -> ElementBuilder {
    ElementBuilder::new("!--")
}

// ========== Content sectioning ==========

content_tags! {
    address => "address",
    article => "article",
    aside => "aside",
    footer => "footer",
    header => "header",
    h1 => "h1",
    h2 => "h2",
    h3 => "h3",
    h4 => "h4",
    h5 => "h5",
    h6 => "h6",
    nav => "nav",
    section => "section",
}

// ========== Text content ==========

content_tags! {
    blockquote => "blockquote",
    dd => "dd",
    div => "div",
    dl => "dl",
    dt => "dt",
    figcaption => "figcaption",
    figure => "figure",
    li => "li",
    main => "main",
    ol => "ol",
    p => "p",
    pre => "pre",
    ul => "ul",
}

void_tags! {
    hr => "hr",
}

// ========== Inline text semantics ==========

content_tags! {
    a => "a",
    b => "b",
    cite => "cite",
    code => "code",
    em => "em",
    i => "i",
    s => "s",
    samp => "samp",
    small => "small",
    span => "span",
    strong => "strong",
    sub => "sub",
    sup => "sup",
    u => "u",
}

void_tags! {
    br => "br",
}

// ========== Image and multimedia ==========

content_tags! {
    audio => "audio",
    map => "map",
    video => "video",
}

void_tags! {
    area => "area",
    img => "img",
    track => "track",
}

// ========== Embedded content ==========

content_tags! {
    object => "object",
}

void_tags! {
    embed => "embed",
    param => "param",
    source => "source",
}

// ========== Scripting ==========

content_tags! {
    canvas => "canvas",
    noscript => "noscript",
    script => "script",
}

// ========== Table content ==========

content_tags! {
    caption => "caption",
    table => "table",
    tbody => "tbody",
    td => "td",
    tfoot => "tfoot",
    th => "th",
    thead => "thead",
    tr => "tr",
}

void_tags! {
    col => "col",
}

// ========== Forms ==========

content_tags! {
    button => "button",
    datalist => "datalist",
    fieldset => "fieldset",
    form => "form",
    label => "label",
    legend => "legend",
    meter => "meter",
    optgroup => "optgroup",
    option => "option",
    output => "output",
    progress => "progress",
    select => "select",
    textarea => "textarea",
}

void_tags! {
    input => "input",
}
