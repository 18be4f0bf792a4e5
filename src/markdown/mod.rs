//! Markdown module for MD Highlighter
//!
//! Handles Markdown tokenization for syntax highlighting:
//! - Glyph classification
//! - Token types and byte spans
//! - The stateful tokenizer

pub mod glyph;
pub mod token;
pub mod tokenizer;

pub use glyph::{Category, MarkdownGlyph};
pub use token::{spans, Token, TokenType};
pub use tokenizer::{tokenize, MarkdownTokenizer};
