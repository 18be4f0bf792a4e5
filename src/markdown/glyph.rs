//! Glyph classification
//!
//! Maps single characters to the punctuation classes the tokenizer cares about.
//! Anything that is not a recognized glyph is plain text.

/// Punctuation characters with Markdown significance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkdownGlyph {
    Space,
    LineFeed,
    Asterisk,
    Underscore,
    Pound,
    Equal,
    Dash,
    Exclamation,
    SquareBracketOpen,
    SquareBracketClose,
    ParenthesisOpen,
    ParenthesisClose,
    AngleBracketOpen,
    AngleBracketClose,
    Backtick,
}

impl MarkdownGlyph {
    /// Look up the glyph for a character, if it is one
    pub fn from_char(c: char) -> Option<Self> {
        let glyph = match c {
            ' ' => Self::Space,
            '\n' => Self::LineFeed,
            '*' => Self::Asterisk,
            '_' => Self::Underscore,
            '#' => Self::Pound,
            '=' => Self::Equal,
            '-' => Self::Dash,
            '!' => Self::Exclamation,
            '[' => Self::SquareBracketOpen,
            ']' => Self::SquareBracketClose,
            '(' => Self::ParenthesisOpen,
            ')' => Self::ParenthesisClose,
            '<' => Self::AngleBracketOpen,
            '>' => Self::AngleBracketClose,
            '`' => Self::Backtick,
            _ => return None,
        };
        Some(glyph)
    }

    /// Whether this is the opening half of a bracket pair
    pub fn is_opening(self) -> bool {
        matches!(
            self,
            Self::SquareBracketOpen | Self::ParenthesisOpen | Self::AngleBracketOpen
        )
    }
}

/// Semantic category of a single character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Text,
    Space,
    LineFeed,
    Asterisk,
    Underscore,
    Pound,
    Equal,
    Dash,
    Exclamation,
    SquareBracket,
    Parenthesis,
    AngleBracket,
    Backtick,
}

impl Category {
    /// Classify a character. Unrecognized characters are `Text`.
    pub fn of(c: char) -> Self {
        MarkdownGlyph::from_char(c).map_or(Self::Text, Self::from)
    }
}

impl From<MarkdownGlyph> for Category {
    fn from(glyph: MarkdownGlyph) -> Self {
        match glyph {
            MarkdownGlyph::Space => Self::Space,
            MarkdownGlyph::LineFeed => Self::LineFeed,
            MarkdownGlyph::Asterisk => Self::Asterisk,
            MarkdownGlyph::Underscore => Self::Underscore,
            MarkdownGlyph::Pound => Self::Pound,
            MarkdownGlyph::Equal => Self::Equal,
            MarkdownGlyph::Dash => Self::Dash,
            MarkdownGlyph::Exclamation => Self::Exclamation,
            MarkdownGlyph::SquareBracketOpen | MarkdownGlyph::SquareBracketClose => {
                Self::SquareBracket
            }
            MarkdownGlyph::ParenthesisOpen | MarkdownGlyph::ParenthesisClose => Self::Parenthesis,
            MarkdownGlyph::AngleBracketOpen | MarkdownGlyph::AngleBracketClose => {
                Self::AngleBracket
            }
            MarkdownGlyph::Backtick => Self::Backtick,
        }
    }
}
