//! Common utilities for the banyan HTML builder.
//!
//! This crate provides shared infrastructure used by the rendering crates:
//! - **Indentation** - the newline/indent primitive that pretty-printing is
//!   built on

pub mod indent;

pub use indent::{Indent, indented, push_indented};
