//! Indentation for rendered markup.
//!
//! Every newline and every leading space in rendered output comes from
//! [`indented`]. Flat mode therefore produces a single-line string with no
//! whitespace artifacts, which keeps compact output byte-exact.

/// Indentation mode for a render pass.
///
/// `Flat` is the default: no newlines, no leading whitespace. `Level(n)`
/// prefixes each fragment with a newline and two spaces per nesting level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Indent {
    /// Single-line output with no inserted whitespace.
    #[default]
    Flat,
    /// Pretty-printed output at the given nesting depth.
    Level(usize),
}

impl Indent {
    /// The indentation for children nested one level below this one.
    ///
    /// Flat mode stays flat; nested content never introduces whitespace
    /// unless the whole render is indented.
    #[must_use]
    pub const fn child(self) -> Self {
        match self {
            Self::Flat => Self::Flat,
            Self::Level(n) => Self::Level(n + 1),
        }
    }
}

/// Return `text` prefixed for its indentation level.
///
/// `Flat` returns the text unchanged. `Level(n)` returns a newline followed
/// by `2 * n` spaces and the text.
///
/// ```
/// use banyan_common::{Indent, indented};
///
/// assert_eq!(indented("foo bar", Indent::Flat), "foo bar");
/// assert_eq!(indented("foo bar", Indent::Level(0)), "\nfoo bar");
/// assert_eq!(indented("foo bar", Indent::Level(1)), "\n  foo bar");
/// ```
#[must_use]
pub fn indented(text: &str, indent: Indent) -> String {
    match indent {
        Indent::Flat => text.to_string(),
        Indent::Level(n) => format!("\n{}{text}", "  ".repeat(n)),
    }
}

/// Append `text` to `out`, applying the indentation prefix first.
///
/// Accumulator-style variant of [`indented`] used by the renderers to avoid
/// allocating a string per fragment.
pub fn push_indented(out: &mut String, text: &str, indent: Indent) {
    if let Indent::Level(n) = indent {
        out.push('\n');
        for _ in 0..n {
            out.push_str("  ");
        }
    }
    out.push_str(text);
}
