//! Fluent builders and the HTML vocabulary for the banyan HTML builder.
//!
//! # Scope
//!
//! This crate is the convenience layer over `banyan-dom`:
//! - **`ElementBuilder`** - fluent element construction
//!   (`div().attr("id", "main").child(p().text("hi")).build()`)
//! - **Attribute-key normalization** - underscore-to-hyphen rewriting so
//!   call sites can spell `data_role` for `data-role` and `class_` for the
//!   reserved word `class`
//! - **Tag catalog** - one factory per standard non-obsolete HTML tag,
//!   grouped by the element categories at
//!   <https://developer.mozilla.org/en-US/docs/Web/HTML/Element>, with void
//!   elements pre-configured as singletons
//!
//! The builders only assemble trees; serialization lives in `banyan-dom` and
//! `banyan-css`.

/// Fluent element construction and key normalization.
pub mod builder;
/// Factory functions for the standard HTML tags.
pub mod tags;

pub use builder::{ElementBuilder, normalize_attr_key, normalize_declarations};
pub use tags::*;
