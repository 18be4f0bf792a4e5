//! Token types produced by the tokenizer

use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::glyph::{Category, MarkdownGlyph};

/// Types of tokens emitted by the tokenizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenType {
    Text,
    Space,
    LineFeed,
    /// A run of one to six `#`
    Heading,
    /// A single `*` or `_`
    Emphasis,
    /// A pair `**` or `__`
    Strong,
    Equal,
    Dash,
    Exclamation,
    SquareBracket,
    Parenthesis,
    AngleBracket,
    Backtick,
}

impl TokenType {
    /// The token type a lone character of this category starts as.
    ///
    /// Markers start as `Emphasis` and `#` starts as `Heading`; both may be
    /// rewritten by later characters.
    pub fn initial(category: Category) -> Self {
        match category {
            Category::Text => Self::Text,
            Category::Space => Self::Space,
            Category::LineFeed => Self::LineFeed,
            Category::Asterisk | Category::Underscore => Self::Emphasis,
            Category::Pound => Self::Heading,
            Category::Equal => Self::Equal,
            Category::Dash => Self::Dash,
            Category::Exclamation => Self::Exclamation,
            Category::SquareBracket => Self::SquareBracket,
            Category::Parenthesis => Self::Parenthesis,
            Category::AngleBracket => Self::AngleBracket,
            Category::Backtick => Self::Backtick,
        }
    }
}

/// A single token in the output sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Type of this token
    #[serde(rename = "type")]
    pub token_type: TokenType,
    /// Literal text covered by this token
    pub value: String,
}

impl Token {
    pub fn new(token_type: TokenType, value: impl Into<String>) -> Self {
        Self {
            token_type,
            value: value.into(),
        }
    }

    /// Length of this token in bytes
    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Number of characters in this token
    pub fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    /// For bracket-like tokens, whether this is the opening half.
    ///
    /// Returns `None` for every other token type.
    pub fn is_opening(&self) -> Option<bool> {
        match self.token_type {
            TokenType::SquareBracket | TokenType::Parenthesis | TokenType::AngleBracket => self
                .value
                .chars()
                .next()
                .and_then(MarkdownGlyph::from_char)
                .map(MarkdownGlyph::is_opening),
            _ => None,
        }
    }

    /// Heading level, for heading tokens
    pub fn heading_level(&self) -> Option<usize> {
        (self.token_type == TokenType::Heading).then(|| self.char_count())
    }
}

/// Pair each token with its byte range in the tokenized input
pub fn spans(tokens: &[Token]) -> impl Iterator<Item = (Range<usize>, &Token)> {
    tokens.iter().scan(0, |offset, token| {
        let start = *offset;
        *offset += token.len();
        Some((start..*offset, token))
    })
}
