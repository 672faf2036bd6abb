//! Background syntax highlighting for post code blocks
//!
//! Highlighting is a progressive enhancement: code blocks render as plain
//! monospace immediately, and a background worker delivers colored spans as
//! it finishes each block. Tearing down the owning view cancels the rest of
//! that view's work cooperatively; blocks already delivered are kept.
//!
//! # Main Types
//!
//! - [`Highlighter`] - handle to the long-lived worker thread
//! - [`HighlightSession`] - one view's in-flight work, cancelled on drop
//! - [`Registry`] - the compiled per-language lookup tables
//! - [`HighlightSpan`] - a classified run of source text

pub mod syntax;
pub mod worker;

pub use syntax::{tokenize, CompiledSyntax, HighlightSpan, Registry, SpanKind};
pub use worker::{CodeBlock, HighlightSession, HighlightedBlock, Highlighter};
