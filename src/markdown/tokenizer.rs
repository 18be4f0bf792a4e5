//! Stateful Markdown tokenizer
//!
//! Walks the input one character at a time and builds a flat token list.
//! Most characters either start a token or extend the previous one; headings
//! and emphasis markers may rewrite the last one or two tokens once more
//! input shows what the run really was.

use log::{debug, trace};
use ropey::Rope;

use super::glyph::Category;
use super::token::{Token, TokenType};
use crate::config::TokenizerConfig;

/// Progress through a run of identical emphasis markers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum RunState {
    #[default]
    Idle,
    /// Last token is a single marker
    OpenEmphasis,
    /// Last token is a marker pair
    OpenStrong,
    /// Last two tokens are a marker pair followed by a single marker
    StrongPendingEmphasis,
}

/// Run tracking for one marker character
#[derive(Debug, Clone, Copy)]
struct MarkerRun {
    state: RunState,
    /// Whether the next odd run of three or more opens an outer emphasis
    triple_opens: bool,
}

impl MarkerRun {
    fn new() -> Self {
        Self {
            state: RunState::Idle,
            triple_opens: true,
        }
    }

    fn push(&mut self, marker: char, tokens: &mut Vec<Token>) {
        let pair: String = [marker, marker].iter().collect();

        self.state = match self.state {
            RunState::Idle => {
                tokens.push(Token::new(TokenType::Emphasis, marker));
                RunState::OpenEmphasis
            }
            RunState::OpenEmphasis => {
                replace_last(tokens, Token::new(TokenType::Strong, pair));
                RunState::OpenStrong
            }
            RunState::OpenStrong => {
                tokens.push(Token::new(TokenType::Emphasis, marker));
                RunState::StrongPendingEmphasis
            }
            RunState::StrongPendingEmphasis => {
                replace_last(tokens, Token::new(TokenType::Strong, pair));
                RunState::OpenStrong
            }
        };
    }

    /// End the run because a different character arrived.
    ///
    /// An opening odd run puts its single marker first so it reads as the
    /// outer emphasis (`*` `**` text); a closing one keeps `**` `*`.
    fn finish(&mut self, tokens: &mut [Token]) {
        if self.state == RunState::StrongPendingEmphasis {
            if self.triple_opens {
                let len = tokens.len();
                if len >= 2 {
                    tokens.swap(len - 2, len - 1);
                }
                trace!("resolved opening marker run as emphasis then strong");
            }
            self.triple_opens = !self.triple_opens;
        }
        self.state = RunState::Idle;
    }
}

fn replace_last(tokens: &mut Vec<Token>, token: Token) {
    tokens.pop();
    tokens.push(token);
}

/// Per-call tokenization state
struct TokenStream<'a> {
    config: &'a TokenizerConfig,
    tokens: Vec<Token>,
    asterisk: MarkerRun,
    underscore: MarkerRun,
}

impl<'a> TokenStream<'a> {
    fn new(config: &'a TokenizerConfig) -> Self {
        Self {
            config,
            tokens: Vec::new(),
            asterisk: MarkerRun::new(),
            underscore: MarkerRun::new(),
        }
    }

    fn push_char(&mut self, c: char) {
        let category = Category::of(c);

        if category != Category::Asterisk {
            self.asterisk.finish(&mut self.tokens);
        }
        if category != Category::Underscore {
            self.underscore.finish(&mut self.tokens);
        }

        match category {
            Category::Text => self.push_text(c),
            Category::Space => self.push_space(c),
            Category::Pound => self.push_pound(c),
            Category::Asterisk => self.asterisk.push(c, &mut self.tokens),
            Category::Underscore => self.underscore.push(c, &mut self.tokens),
            Category::LineFeed
            | Category::Equal
            | Category::Dash
            | Category::Exclamation
            | Category::SquareBracket
            | Category::Parenthesis
            | Category::AngleBracket
            | Category::Backtick => {
                self.tokens.push(Token::new(TokenType::initial(category), c));
            }
        }
    }

    fn last_type(&self) -> Option<TokenType> {
        self.tokens.last().map(|t| t.token_type)
    }

    fn push_text(&mut self, c: char) {
        match self.tokens.last_mut() {
            Some(last) if last.token_type == TokenType::Text => last.value.push(c),
            _ => self.tokens.push(Token::new(TokenType::Text, c)),
        }
    }

    fn push_text_str(&mut self, s: &str) {
        match self.tokens.last_mut() {
            Some(last) if last.token_type == TokenType::Text => last.value.push_str(s),
            _ => self.tokens.push(Token::new(TokenType::Text, s)),
        }
    }

    /// Spaces inside a text run belong to it; elsewhere each is its own token
    fn push_space(&mut self, c: char) {
        if self.last_type() == Some(TokenType::Text) {
            self.push_text(c);
        } else {
            self.tokens.push(Token::new(TokenType::Space, c));
        }
    }

    fn push_pound(&mut self, c: char) {
        match self.last_type() {
            Some(TokenType::Heading) => self.extend_heading(c),
            Some(TokenType::Text) => self.push_text(c),
            _ => self.open_heading(c),
        }
    }

    fn extend_heading(&mut self, c: char) {
        let Some(heading) = self.tokens.pop() else {
            return;
        };
        let mut value = heading.value;
        value.push(c);

        let level = value.chars().count();
        if level > self.config.max_heading_level {
            trace!("heading run of {} exceeds level {}, degrading to text", level, self.config.max_heading_level);
            self.push_text_str(&value);
        } else {
            self.tokens.push(Token::new(TokenType::Heading, value));
        }
    }

    /// Start a heading run, or degrade it if the line so far disqualifies it
    fn open_heading(&mut self, c: char) {
        let indent = self
            .tokens
            .iter()
            .rev()
            .take_while(|t| t.token_type == TokenType::Space)
            .count();
        let run_start = self.tokens.len() - indent;
        let at_line_start =
            run_start == 0 || self.tokens[run_start - 1].token_type == TokenType::LineFeed;

        if at_line_start
            && indent <= self.config.max_heading_indent
            && self.config.max_heading_level > 0
        {
            self.tokens.push(Token::new(TokenType::Heading, c));
            return;
        }

        trace!("'#' after {} spaces cannot open a heading, degrading to text", indent);
        let mut value: String = self.tokens.drain(run_start..).map(|t| t.value).collect();
        value.push(c);
        self.push_text_str(&value);
    }

    fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

/// The Markdown tokenizer.
///
/// Holds only configuration; every call starts from a clean state, so one
/// instance can tokenize unrelated buffers in any order.
#[derive(Debug, Clone, Default)]
pub struct MarkdownTokenizer {
    config: TokenizerConfig,
}

impl MarkdownTokenizer {
    pub fn new(config: TokenizerConfig) -> Self {
        Self { config }
    }

    /// Tokenize a string
    pub fn tokenize(&self, input: &str) -> Vec<Token> {
        self.tokenize_chars(input.chars())
    }

    /// Tokenize the full contents of an editor buffer
    pub fn tokenize_rope(&self, rope: &Rope) -> Vec<Token> {
        self.tokenize_chars(rope.chars())
    }

    /// Tokenize any character sequence
    pub fn tokenize_chars<I>(&self, chars: I) -> Vec<Token>
    where
        I: IntoIterator<Item = char>,
    {
        let mut stream = TokenStream::new(&self.config);
        let mut count = 0usize;
        for c in chars {
            stream.push_char(c);
            count += 1;
        }

        let tokens = stream.into_tokens();
        debug!("Tokenized {} chars into {} tokens", count, tokens.len());
        tokens
    }
}

/// Tokenize a string with the default configuration
pub fn tokenize(input: &str) -> Vec<Token> {
    MarkdownTokenizer::default().tokenize(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(v: &str) -> Token {
        Token::new(TokenType::Text, v)
    }

    fn space() -> Token {
        Token::new(TokenType::Space, " ")
    }

    fn line_feed() -> Token {
        Token::new(TokenType::LineFeed, "\n")
    }

    fn heading(v: &str) -> Token {
        Token::new(TokenType::Heading, v)
    }

    fn emphasis(v: &str) -> Token {
        Token::new(TokenType::Emphasis, v)
    }

    fn strong(v: &str) -> Token {
        Token::new(TokenType::Strong, v)
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_line_breaks() {
        assert_eq!(tokenize("\n"), vec![line_feed()]);
        assert_eq!(tokenize("\n\n"), vec![line_feed(), line_feed()]);
        assert_eq!(tokenize(" \n\n "), vec![space(), line_feed(), line_feed(), space()]);
        assert_eq!(
            tokenize(" \n \n "),
            vec![space(), line_feed(), space(), line_feed(), space()]
        );
    }

    #[test]
    fn test_text_and_spaces_merge() {
        assert_eq!(tokenize("foo bar  baz"), vec![text("foo bar  baz")]);
        assert_eq!(tokenize("  foo"), vec![space(), space(), text("foo")]);
        assert_eq!(tokenize("a\r\nb"), vec![text("a\r"), line_feed(), text("b")]);
    }

    #[test]
    fn test_single_heading() {
        assert_eq!(tokenize("#"), vec![heading("#")]);
        assert_eq!(tokenize("# "), vec![heading("#"), space()]);
        assert_eq!(tokenize("# foo"), vec![heading("#"), space(), text("foo")]);
        assert_eq!(tokenize("#foo"), vec![heading("#"), text("foo")]);
    }

    #[test]
    fn test_heading_levels() {
        for level in 1..=6 {
            let marker = "#".repeat(level);
            let tokens = tokenize(&format!("foo\n{} bar\n", marker));
            assert_eq!(
                tokens,
                vec![text("foo"), line_feed(), heading(&marker), space(), text("bar"), line_feed()]
            );
            assert_eq!(tokens[2].heading_level(), Some(level));
        }
    }

    #[test]
    fn test_heading_too_long() {
        assert_eq!(tokenize("foo\n#######"), vec![text("foo"), line_feed(), text("#######")]);
        assert_eq!(
            tokenize("foo\n####### bar\n"),
            vec![text("foo"), line_feed(), text("####### bar"), line_feed()]
        );
        assert_eq!(tokenize("########"), vec![text("########")]);
        assert_eq!(tokenize("  #######"), vec![space(), space(), text("#######")]);
    }

    #[test]
    fn test_heading_indentation() {
        assert_eq!(
            tokenize("foo\n # bar"),
            vec![text("foo"), line_feed(), space(), heading("#"), space(), text("bar")]
        );
        assert_eq!(tokenize("foo\n   # bar")[5], heading("#"));
        assert_eq!(tokenize("foo\n    # bar"), vec![text("foo"), line_feed(), text("    # bar")]);
    }

    #[test]
    fn test_heading_mid_line() {
        assert_eq!(tokenize("foo # bar"), vec![text("foo # bar")]);
        assert_eq!(
            tokenize("foo # \n bar"),
            vec![text("foo # "), line_feed(), space(), text("bar")]
        );
        assert_eq!(tokenize("# #"), vec![heading("#"), text(" #")]);
        assert_eq!(
            tokenize("] # x"),
            vec![Token::new(TokenType::SquareBracket, "]"), text(" # x")]
        );
    }

    #[test]
    fn test_emphasis() {
        assert_eq!(tokenize("*"), vec![emphasis("*")]);
        assert_eq!(tokenize("_"), vec![emphasis("_")]);
        assert_eq!(tokenize("*foo*"), vec![emphasis("*"), text("foo"), emphasis("*")]);
        assert_eq!(
            tokenize(" _foo_ "),
            vec![space(), emphasis("_"), text("foo"), emphasis("_"), space()]
        );
    }

    #[test]
    fn test_strong() {
        assert_eq!(tokenize("**"), vec![strong("**")]);
        assert_eq!(tokenize("__"), vec![strong("__")]);
        assert_eq!(tokenize("**foo**"), vec![strong("**"), text("foo"), strong("**")]);
        assert_eq!(
            tokenize(" __foo__ "),
            vec![space(), strong("__"), text("foo"), strong("__"), space()]
        );
    }

    #[test]
    fn test_mixed_markers_do_not_merge() {
        assert_eq!(tokenize("**_"), vec![strong("**"), emphasis("_")]);
        assert_eq!(tokenize("__*"), vec![strong("__"), emphasis("*")]);
        assert_eq!(
            tokenize("_**foo**_"),
            vec![emphasis("_"), strong("**"), text("foo"), strong("**"), emphasis("_")]
        );
        assert_eq!(
            tokenize("__*foo*__"),
            vec![strong("__"), emphasis("*"), text("foo"), emphasis("*"), strong("__")]
        );
    }

    #[test]
    fn test_trailing_triple_closes() {
        assert_eq!(tokenize("***"), vec![strong("**"), emphasis("*")]);
        assert_eq!(tokenize("___"), vec![strong("__"), emphasis("_")]);
    }

    #[test]
    fn test_triple_markers() {
        assert_eq!(
            tokenize("***foo***"),
            vec![emphasis("*"), strong("**"), text("foo"), strong("**"), emphasis("*")]
        );
        assert_eq!(
            tokenize("___foo___ ___bar___"),
            vec![
                emphasis("_"),
                strong("__"),
                text("foo"),
                strong("__"),
                emphasis("_"),
                space(),
                emphasis("_"),
                strong("__"),
                text("bar"),
                strong("__"),
                emphasis("_"),
            ]
        );
    }

    #[test]
    fn test_triple_toggle_is_per_marker() {
        assert_eq!(
            tokenize("***a___b"),
            vec![
                emphasis("*"),
                strong("**"),
                text("a"),
                emphasis("_"),
                strong("__"),
                text("b"),
            ]
        );
    }

    #[test]
    fn test_long_marker_runs() {
        assert_eq!(tokenize("****"), vec![strong("**"), strong("**")]);
        assert_eq!(tokenize("*****"), vec![strong("**"), strong("**"), emphasis("*")]);
        assert_eq!(
            tokenize("*****x"),
            vec![strong("**"), emphasis("*"), strong("**"), text("x")]
        );
    }

    #[test]
    fn test_no_state_between_calls() {
        let tokenizer = MarkdownTokenizer::default();
        let first = tokenizer.tokenize("***a");
        let second = tokenizer.tokenize("***a");
        assert_eq!(first, second);
        assert_eq!(first[0], emphasis("*"));
    }

    #[test]
    fn test_brackets_and_parens() {
        let tokens = tokenize("foo [bar] baz");
        assert_eq!(tokens[0], text("foo "));
        assert_eq!(tokens[1], Token::new(TokenType::SquareBracket, "["));
        assert_eq!(tokens[3], Token::new(TokenType::SquareBracket, "]"));
        assert_eq!(tokens[1].is_opening(), Some(true));

        let tokens = tokenize("foo (bar) baz");
        assert_eq!(tokens[1], Token::new(TokenType::Parenthesis, "("));
        assert_eq!(tokens[3], Token::new(TokenType::Parenthesis, ")"));
        assert_eq!(tokens[3].is_opening(), Some(false));
    }

    #[test]
    fn test_single_glyphs_never_merge() {
        let tokens = tokenize("==--!!``<>");
        assert_eq!(tokens.len(), 10);
        assert_eq!(tokens[0], Token::new(TokenType::Equal, "="));
        assert_eq!(tokens[2], Token::new(TokenType::Dash, "-"));
        assert_eq!(tokens[4], Token::new(TokenType::Exclamation, "!"));
        assert_eq!(tokens[6], Token::new(TokenType::Backtick, "`"));
        assert_eq!(tokens[9], Token::new(TokenType::AngleBracket, ">"));
    }

    #[test]
    fn test_tokenize_rope_matches_str() {
        let source = "# Title\n\nSome *emphasis* and [a link](url).\n";
        let rope = Rope::from_str(source);
        let tokenizer = MarkdownTokenizer::default();
        assert_eq!(tokenizer.tokenize_rope(&rope), tokenizer.tokenize(source));
    }

    #[test]
    fn test_custom_limits() {
        let tokenizer = MarkdownTokenizer::new(TokenizerConfig {
            max_heading_level: 3,
            max_heading_indent: 0,
        });
        assert_eq!(tokenizer.tokenize("###"), vec![heading("###")]);
        assert_eq!(tokenizer.tokenize("####"), vec![text("####")]);
        assert_eq!(tokenizer.tokenize(" #"), vec![text(" #")]);
    }

    #[test]
    fn test_zero_heading_level_disables_headings() {
        let tokenizer = MarkdownTokenizer::new(TokenizerConfig {
            max_heading_level: 0,
            ..TokenizerConfig::default()
        });
        assert_eq!(tokenizer.tokenize("#"), vec![text("#")]);
        assert_eq!(
            tokenizer.tokenize("foo\n## bar"),
            vec![text("foo"), line_feed(), text("## bar")]
        );
    }
}
