//! Element tree and recursive renderer for the banyan HTML builder.
//!
//! This crate provides the tree structure a document is built from and the
//! renderer that serializes it to HTML text.
//!
//! # Design
//!
//! The tree is an owned recursive structure: each [`Element`] owns its
//! children in a `Vec`, so every node has exactly one parent and cycles are
//! unrepresentable. Rendering is a pre-order, depth-first traversal over
//! `&self` with no side effects; rendering the same unmodified tree twice
//! yields identical strings because attributes and CSS maps iterate in
//! insertion order.
//!
//! Deep nesting recurses once per tree level, so pathologically deep trees
//! can exhaust the stack. Documents of ordinary depth are nowhere near the
//! limit.

use banyan_common::{Indent, push_indented};
use banyan_css::{Declarations, RulesetMap, render_inline_style, render_rulesets};
use serde::Serialize;
use thiserror::Error;

/// The reserved tag name for comment nodes.
///
/// [§ 13.1.6 Comments](https://html.spec.whatwg.org/multipage/syntax.html#comments)
/// "Comments must have the following format: the string `<!--` ... the
/// string `-->`."
pub const COMMENT_TAG: &str = "!--";

/// The reserved tag name whose content is a CSS ruleset map.
///
/// [§ 4.2.6 The style element](https://html.spec.whatwg.org/multipage/semantics.html#the-style-element)
pub const STYLE_TAG: &str = "style";

/// The value of one attribute.
///
/// A closed set of the value shapes HTML attributes take in this model. The
/// `Style` variant is only legal under the attribute name exactly `"style"`;
/// rendering it under any other name fails with
/// [`RenderError::UnsupportedAttributeValue`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum AttrValue {
    /// A plain string value: `name="value"`.
    Text(String),
    /// A bare attribute with no value, e.g. `disabled`.
    ///
    /// [§ 13.1.2.3 Attributes](https://html.spec.whatwg.org/multipage/syntax.html#attributes-2)
    /// "Empty attribute syntax: just the attribute name."
    Bare,
    /// A list of string tokens, space-joined: `class="a b c"`.
    TokenList(Vec<String>),
    /// An ordered map of CSS declarations, serialized inline:
    /// `style="color:blue;"`.
    Style(Declarations),
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<String>> for AttrValue {
    fn from(tokens: Vec<String>) -> Self {
        Self::TokenList(tokens)
    }
}

impl From<&[&str]> for AttrValue {
    fn from(tokens: &[&str]) -> Self {
        Self::TokenList(tokens.iter().map(ToString::to_string).collect())
    }
}

impl From<Declarations> for AttrValue {
    fn from(declarations: Declarations) -> Self {
        Self::Style(declarations)
    }
}

/// An insertion-ordered map of attribute names to values.
///
/// Backed by a vector of pairs so iteration order always matches insertion
/// order, which makes rendering deterministic. Inserting an existing name
/// updates the value in place without moving it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AttrMap {
    entries: Vec<(String, AttrValue)>,
}

impl AttrMap {
    /// Create an empty attribute map.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Insert an attribute, updating the value in place if the name is
    /// already present.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Look up an attribute's value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// The number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<(String, AttrValue)>> for AttrMap {
    fn from(entries: Vec<(String, AttrValue)>) -> Self {
        let mut map = Self::new();
        for (name, value) in entries {
            map.insert(name, value);
        }
        map
    }
}

/// One item in an element's child sequence.
///
/// A closed set of the shapes a child takes: leaf values are stringified,
/// element children recurse. (Dispatching on a closed enum replaces the
/// "does it have a render method" probing a dynamic language would use.)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Child {
    /// A text leaf.
    Text(String),
    /// An integer leaf, rendered with `Display`.
    Int(i64),
    /// A floating-point leaf, rendered with `Display`.
    Float(f64),
    /// A nested element.
    Element(Element),
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<i32> for Child {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for Child {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Child {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Element> for Child {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// The content of an element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Content {
    /// No content: the element is a void/singleton and renders with no
    /// closing tag.
    ///
    /// [§ 13.1.2 Elements](https://html.spec.whatwg.org/multipage/syntax.html#elements-2)
    /// "Void elements only have a start tag; end tags must not be specified
    /// for void elements."
    Empty,
    /// A lone string, rendered at the element's own indentation level.
    Text(String),
    /// An ordered sequence of children, rendered one level deeper.
    Children(Vec<Child>),
    /// A CSS ruleset map; only meaningful for [`STYLE_TAG`] elements.
    Rulesets(RulesetMap),
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<Child>> for Content {
    fn from(children: Vec<Child>) -> Self {
        Self::Children(children)
    }
}

impl From<RulesetMap> for Content {
    fn from(rulesets: RulesetMap) -> Self {
        Self::Rulesets(rulesets)
    }
}

/// Errors surfaced while rendering a tree.
///
/// These are caller data-shape bugs, not transient conditions: rendering
/// aborts at the point of detection and no partial string is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    /// An [`AttrValue::Style`] value under an attribute name other than
    /// `"style"`.
    #[error("unsupported value for attribute `{name}`: declaration maps are only legal under `style`")]
    UnsupportedAttributeValue {
        /// The offending attribute name.
        name: String,
    },
    /// Ruleset content under a tag other than `"style"`, or child-sequence
    /// content under a `"style"` tag.
    #[error("invalid CSS ruleset content for `<{tag}>`: ruleset maps and `style` elements go together")]
    InvalidCssRuleset {
        /// The tag whose content was malformed.
        tag: String,
    },
}

/// A node in the markup tree: tag name, attributes, content.
///
/// The tag name is lower-cased at construction and immutable afterwards
/// (case-insensitive identity). Attributes and content may be mutated in
/// place between construction and rendering; [`Element::render`] takes
/// `&self` and never modifies the tree.
///
/// Two tag names are reserved: [`STYLE_TAG`], whose content is a CSS ruleset
/// map, and [`COMMENT_TAG`], which renders as an HTML comment with no
/// attribute section and a `-->` closing marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    tag: String,
    /// The attribute map, if any. `None` renders no attribute section.
    pub attrs: Option<AttrMap>,
    /// The element content; see [`Content`] for the rendering rules.
    pub content: Content,
}

impl Element {
    /// Create an element.
    ///
    /// The tag name is lower-cased and stored; it must be non-empty. For
    /// [`COMMENT_TAG`] any supplied attributes are discarded.
    #[must_use]
    pub fn new(tag: impl Into<String>, attrs: Option<AttrMap>, content: Content) -> Self {
        let tag = tag.into().to_lowercase();
        debug_assert!(!tag.is_empty(), "tag name must be non-empty");
        let attrs = if tag == COMMENT_TAG { None } else { attrs };
        Self { tag, attrs, content }
    }

    /// The lower-cased tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Insert or update an attribute.
    ///
    /// The name is used verbatim; key normalization (underscores to hyphens)
    /// is the builder layer's concern, not the tree's. Attributes set on a
    /// comment element are stored but never rendered.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.attrs.get_or_insert_default().insert(name, value);
    }

    /// Look up an attribute's value.
    #[must_use]
    pub fn get_attr(&self, name: &str) -> Option<&AttrValue> {
        self.attrs.as_ref().and_then(|attrs| attrs.get(name))
    }

    /// Append a child to the content sequence.
    ///
    /// [`Content::Empty`] becomes a one-child sequence and [`Content::Text`]
    /// becomes a sequence of the text leaf followed by the new child.
    ///
    /// # Panics
    ///
    /// Panics if the content is a ruleset map (a `<style>` element's content
    /// is not a sequence, so there is nothing to append to).
    pub fn push_child(&mut self, child: impl Into<Child>) {
        let child = child.into();
        match &mut self.content {
            Content::Children(children) => children.push(child),
            Content::Empty => self.content = Content::Children(vec![child]),
            Content::Text(text) => {
                let text = std::mem::take(text);
                self.content = Content::Children(vec![Child::Text(text), child]);
            }
            Content::Rulesets(_) => {
                panic!("cannot append a child to ruleset content (tag `{}`)", self.tag);
            }
        }
    }

    /// Recursively render the tree to HTML text.
    ///
    /// `Indent::Flat` produces compact single-line output; `Indent::Level(n)`
    /// pretty-prints with each fragment on its own line at two spaces per
    /// nesting level. Rendering is a pure traversal: the tree is unchanged
    /// and repeated calls return identical strings.
    ///
    /// ```
    /// use banyan_common::Indent;
    /// use banyan_dom::{Content, Element};
    ///
    /// let doc = Element::new("html", None, Content::Children(vec![]));
    /// assert_eq!(doc.render(Indent::Flat).unwrap(), "<html></html>");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::UnsupportedAttributeValue`] for a declaration
    /// map under an attribute other than `style`, and
    /// [`RenderError::InvalidCssRuleset`] when ruleset content and the
    /// `style` tag are mismatched.
    pub fn render(&self, indent: Indent) -> Result<String, RenderError> {
        let mut out = String::new();
        self.render_into(indent, &mut out)?;
        Ok(out)
    }

    /// Render this element and its subtree into `out`.
    fn render_into(&self, indent: Indent, out: &mut String) -> Result<(), RenderError> {
        push_indented(out, "<", indent);
        out.push_str(&self.tag);

        // Comment nodes never render an attribute section.
        if self.tag != COMMENT_TAG {
            if let Some(attrs) = &self.attrs {
                for (name, value) in attrs.iter() {
                    render_attr(name, value, out)?;
                }
            }
        }

        // Void element: close the start tag and stop, no end tag.
        if matches!(self.content, Content::Empty) && self.tag != COMMENT_TAG {
            out.push('>');
            return Ok(());
        }

        // A comment's closing marker starts with `-->`, so the content
        // section is opened with a separating space instead of `>`.
        if self.tag == COMMENT_TAG {
            out.push(' ');
        } else {
            out.push('>');
        }

        match &self.content {
            Content::Empty => {}
            // Lone string content is inline text, not a nesting level.
            Content::Text(text) => push_indented(out, text, indent),
            Content::Rulesets(rulesets) => {
                if self.tag != STYLE_TAG {
                    return Err(RenderError::InvalidCssRuleset { tag: self.tag.clone() });
                }
                out.push_str(&render_rulesets(rulesets, indent));
            }
            Content::Children(children) => {
                if self.tag == STYLE_TAG {
                    return Err(RenderError::InvalidCssRuleset { tag: self.tag.clone() });
                }
                let child_indent = indent.child();
                for child in children {
                    match child {
                        Child::Element(element) => element.render_into(child_indent, out)?,
                        Child::Text(text) => push_indented(out, text, child_indent),
                        Child::Int(value) => push_indented(out, &value.to_string(), child_indent),
                        Child::Float(value) => push_indented(out, &value.to_string(), child_indent),
                    }
                }
            }
        }

        if self.tag == COMMENT_TAG {
            push_indented(out, " -->", indent);
        } else {
            push_indented(out, &format!("</{}>", self.tag), indent);
        }
        Ok(())
    }
}

/// Render one attribute into `out`.
fn render_attr(name: &str, value: &AttrValue, out: &mut String) -> Result<(), RenderError> {
    match value {
        AttrValue::Text(text) => out.push_str(&format!(" {name}=\"{text}\"")),
        AttrValue::Bare => {
            out.push(' ');
            out.push_str(name);
        }
        AttrValue::TokenList(tokens) => {
            out.push_str(&format!(" {name}=\"{}\"", tokens.join(" ")));
        }
        AttrValue::Style(declarations) if name == STYLE_TAG => {
            out.push_str(&format!(" {name}=\"{}\"", render_inline_style(declarations)));
        }
        AttrValue::Style(_) => {
            return Err(RenderError::UnsupportedAttributeValue { name: name.to_string() });
        }
    }
    Ok(())
}
