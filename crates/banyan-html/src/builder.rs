//! Fluent construction of [`Element`] trees.
//!
//! The builder normalizes attribute keys so hyphenated HTML names can be
//! written as plain identifiers; the tree layer below it stores whatever it
//! is given verbatim.

use banyan_css::{Declarations, RulesetMap};
use banyan_dom::{AttrMap, AttrValue, Child, Content, Element};

/// Rewrite an identifier-friendly attribute key into its HTML spelling.
///
/// All underscores become hyphens. Then exactly one trailing hyphen is
/// dropped if present (keys suffixed to dodge reserved words, e.g.
/// `class_`); otherwise exactly one leading hyphen is dropped (keys prefixed
/// for the same reason). Only one end is ever trimmed, so a key spelled for
/// a vendor prefix keeps its leading hyphen when it also carried a trailing
/// underscore.
///
/// ```
/// use banyan_html::normalize_attr_key;
///
/// assert_eq!(normalize_attr_key("_class"), "class");
/// assert_eq!(normalize_attr_key("class_"), "class");
/// assert_eq!(normalize_attr_key("data_role"), "data-role");
/// assert_eq!(normalize_attr_key("_moz_style_"), "-moz-style");
/// ```
#[must_use]
pub fn normalize_attr_key(key: &str) -> String {
    let key = key.replace('_', "-");
    if let Some(stripped) = key.strip_suffix('-') {
        stripped.to_string()
    } else if let Some(stripped) = key.strip_prefix('-') {
        stripped.to_string()
    } else {
        key
    }
}

/// Return a copy of `declarations` with every property name passed through
/// [`normalize_attr_key`].
///
/// Used wherever CSS property names arrive spelled as identifiers
/// (`background_color`, `_moz_style_`).
#[must_use]
pub fn normalize_declarations(declarations: &Declarations) -> Declarations {
    let mut normalized = Declarations::new();
    for (property, value) in declarations.iter() {
        normalized.insert(normalize_attr_key(property), value);
    }
    normalized
}

/// Content accumulated by a builder before [`ElementBuilder::build`].
#[derive(Debug, Clone)]
enum BuilderContent {
    /// Ordered child sequence (possibly empty).
    Children(Vec<Child>),
    /// CSS ruleset content for `<style>`.
    Rulesets(RulesetMap),
    /// Void/singleton semantics: no content, no closing tag.
    Empty,
}

/// Fluent builder producing an [`Element`].
///
/// Builders start with an empty child sequence, so an untouched builder
/// renders `<tag></tag>`; [`ElementBuilder::void`] switches to singleton
/// semantics. Attribute methods normalize their keys with
/// [`normalize_attr_key`].
///
/// ```
/// use banyan_common::Indent;
/// use banyan_html::a;
///
/// let link = a().attr("href", "https://example.com").text("Example").build();
/// assert_eq!(
///     link.render(Indent::Flat).unwrap(),
///     "<a href=\"https://example.com\">Example</a>"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ElementBuilder {
    tag: String,
    attrs: AttrMap,
    content: BuilderContent,
}

impl ElementBuilder {
    /// Start a builder for `tag` with an empty child sequence.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: AttrMap::new(),
            content: BuilderContent::Children(Vec::new()),
        }
    }

    /// Append a child (a nested element, another builder, or a leaf value).
    ///
    /// A builder previously marked [`void`](Self::void) reverts to a child
    /// sequence.
    ///
    /// # Panics
    ///
    /// Panics if the builder holds ruleset content (a `<style>` element's
    /// content is not a sequence).
    #[must_use]
    pub fn child(mut self, child: impl Into<Child>) -> Self {
        let child = child.into();
        match &mut self.content {
            BuilderContent::Children(children) => children.push(child),
            BuilderContent::Empty => self.content = BuilderContent::Children(vec![child]),
            BuilderContent::Rulesets(_) => {
                panic!("cannot append a child to ruleset content (tag `{}`)", self.tag);
            }
        }
        self
    }

    /// Append a text leaf.
    ///
    /// # Panics
    ///
    /// Panics under the same condition as [`child`](Self::child).
    #[must_use]
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Child::Text(text.into()))
    }

    /// Set an attribute, normalizing the key with [`normalize_attr_key`].
    ///
    /// When the value is a declaration map (an inline `style`), the property
    /// names are normalized too, so `background_color` serializes as
    /// `background-color`.
    #[must_use]
    pub fn attr(mut self, key: &str, value: impl Into<AttrValue>) -> Self {
        let value = match value.into() {
            AttrValue::Style(declarations) => {
                AttrValue::Style(normalize_declarations(&declarations))
            }
            other => other,
        };
        self.attrs.insert(normalize_attr_key(key), value);
        self
    }

    /// Set a bare (valueless) attribute, e.g. `disabled`.
    #[must_use]
    pub fn bare(self, key: &str) -> Self {
        self.attr(key, AttrValue::Bare)
    }

    /// Switch to void/singleton semantics: no content, no closing tag.
    ///
    /// Any children added earlier are discarded.
    #[must_use]
    pub fn void(mut self) -> Self {
        self.content = BuilderContent::Empty;
        self
    }

    /// Replace the content with a CSS ruleset map (for `<style>` elements).
    ///
    /// Selectors and property names are passed through
    /// [`normalize_attr_key`].
    #[must_use]
    pub fn rulesets(mut self, rulesets: &RulesetMap) -> Self {
        let mut normalized = RulesetMap::new();
        for (selector, declarations) in rulesets.iter() {
            normalized.insert(normalize_attr_key(selector), normalize_declarations(declarations));
        }
        self.content = BuilderContent::Rulesets(normalized);
        self
    }

    /// Finish the builder.
    ///
    /// An empty attribute set becomes no attribute section at all.
    #[must_use]
    pub fn build(self) -> Element {
        let attrs = if self.attrs.is_empty() { None } else { Some(self.attrs) };
        let content = match self.content {
            BuilderContent::Children(children) => Content::Children(children),
            BuilderContent::Rulesets(rulesets) => Content::Rulesets(rulesets),
            BuilderContent::Empty => Content::Empty,
        };
        Element::new(self.tag, attrs, content)
    }
}

impl From<ElementBuilder> for Element {
    fn from(builder: ElementBuilder) -> Self {
        builder.build()
    }
}

impl From<ElementBuilder> for Child {
    fn from(builder: ElementBuilder) -> Self {
        Self::Element(builder.build())
    }
}
