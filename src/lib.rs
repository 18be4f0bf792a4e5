//! MD Highlighter - Markdown punctuation tokenizer for editor syntax highlighting
//!
//! Turns raw text into a flat list of classified tokens (headings, emphasis
//! and strong markers, brackets, line feeds, plain text). There is no tree
//! and no rendering; a highlighter maps each [`TokenType`] to a style.
//!
//! ```
//! use mdhighlighter::{tokenize, TokenType};
//!
//! let tokens = tokenize("# Title");
//! assert_eq!(tokens[0].token_type, TokenType::Heading);
//! ```

pub mod config;
pub mod error;
pub mod markdown;
pub mod utils;

pub use config::{Config, OutputConfig, OutputFormat, TokenizerConfig};
pub use error::{AppError, AppResult, ConfigError, FileError};
pub use markdown::{spans, tokenize, Category, MarkdownTokenizer, Token, TokenType};
