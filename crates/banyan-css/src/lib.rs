//! CSS serialization for the banyan HTML builder.
//!
//! # Scope
//!
//! This crate implements the CSS side of document rendering:
//! - **Declarations** - an insertion-ordered property/value map serialized as
//!   an inline style string (`style="color:blue; margin:4px;"`)
//! - **Rulesets** - an insertion-ordered selector/declarations map serialized
//!   as the text content of a `<style>` element
//!   ([§ 9 CSS stylesheets](https://www.w3.org/TR/css-syntax-3/#css-stylesheets))
//!
//! Both maps commit to insertion order so rendering the same value twice
//! yields byte-identical output.
//!
//! # Not Implemented
//!
//! - CSS parsing (this crate only serializes values it is given)
//! - Validation of property names or selector syntax

use banyan_common::{Indent, indented};
use serde::Serialize;

/// An insertion-ordered map of CSS property names to values.
///
/// Backed by a vector of pairs rather than a hash map so that iteration
/// order always matches insertion order. Inserting an existing property
/// updates its value in place without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Declarations {
    entries: Vec<(String, String)>,
}

impl Declarations {
    /// Create an empty declaration map.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Insert a property, updating the value in place if the property is
    /// already present.
    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(p, _)| *p == property) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((property, value)),
        }
    }

    /// Look up a property's value.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over `(property, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }

    /// The number of declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no declarations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<(String, String)>> for Declarations {
    fn from(entries: Vec<(String, String)>) -> Self {
        let mut map = Self::new();
        for (property, value) in entries {
            map.insert(property, value);
        }
        map
    }
}

/// An insertion-ordered map of CSS selectors to [`Declarations`].
///
/// [§ 9 CSS stylesheets](https://www.w3.org/TR/css-syntax-3/#css-stylesheets)
/// "A CSS stylesheet consists of a list of rules" - rules keep the order
/// they were inserted in, which matters for the cascade in the consuming
/// document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RulesetMap {
    entries: Vec<(String, Declarations)>,
}

impl RulesetMap {
    /// Create an empty ruleset map.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Insert a ruleset, replacing the declarations in place if the selector
    /// is already present.
    pub fn insert(&mut self, selector: impl Into<String>, declarations: Declarations) {
        let selector = selector.into();
        match self.entries.iter_mut().find(|(s, _)| *s == selector) {
            Some(entry) => entry.1 = declarations,
            None => self.entries.push((selector, declarations)),
        }
    }

    /// Look up the declarations for a selector.
    #[must_use]
    pub fn get(&self, selector: &str) -> Option<&Declarations> {
        self.entries
            .iter()
            .find(|(s, _)| s == selector)
            .map(|(_, d)| d)
    }

    /// Iterate over `(selector, declarations)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Declarations)> {
        self.entries.iter().map(|(s, d)| (s.as_str(), d))
    }

    /// The number of rulesets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no rulesets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Serialize declarations as an inline style string.
///
/// Each declaration is rendered as `property:value;` and declarations are
/// joined with single spaces: `"color:blue; margin:4px;"`. The output is the
/// value of a `style` attribute, so it contains no newlines.
#[must_use]
pub fn render_inline_style(declarations: &Declarations) -> String {
    let parts: Vec<String> = declarations
        .iter()
        .map(|(property, value)| format!("{property}:{value};"))
        .collect();
    parts.join(" ")
}

/// Serialize a ruleset map as the text content of a `<style>` element.
///
/// Each ruleset is rendered as `selector { property:value; ... }` and passed
/// through the indenter at `indent`; rulesets are joined with single spaces.
/// In flat mode the result is a single line:
/// `"p.myclass { margin:4px; }"`.
#[must_use]
pub fn render_rulesets(rulesets: &RulesetMap, indent: Indent) -> String {
    let parts: Vec<String> = rulesets
        .iter()
        .map(|(selector, declarations)| {
            let ruleset = format!("{selector} {{ {} }}", render_inline_style(declarations));
            indented(&ruleset, indent)
        })
        .collect();
    parts.join(" ")
}

/// Build a [`Declarations`] map from `property => value` pairs.
///
/// ```
/// use banyan_css::{declarations, render_inline_style};
///
/// let d = declarations! {
///     "background-color" => "black",
///     "margin" => "4px",
/// };
/// assert_eq!(render_inline_style(&d), "background-color:black; margin:4px;");
/// ```
#[macro_export]
macro_rules! declarations {
    ($($property:expr => $value:expr),* $(,)?) => {{
        let mut map = $crate::Declarations::new();
        $( map.insert($property, $value); )*
        map
    }};
}

/// Build a [`RulesetMap`] from `selector => { property => value, ... }`
/// entries.
///
/// ```
/// use banyan_common::Indent;
/// use banyan_css::{render_rulesets, rulesets};
///
/// let sheet = rulesets! {
///     "p.myclass" => { "margin" => "4px" },
/// };
/// assert_eq!(render_rulesets(&sheet, Indent::Flat), "p.myclass { margin:4px; }");
/// ```
#[macro_export]
macro_rules! rulesets {
    ($($selector:expr => { $($property:expr => $value:expr),* $(,)? }),* $(,)?) => {{
        let mut map = $crate::RulesetMap::new();
        $( map.insert($selector, $crate::declarations! { $($property => $value),* }); )*
        map
    }};
}
