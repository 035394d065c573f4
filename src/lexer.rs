//! Lexical analysis module for tokenizing Markdown input.
//!
//! The lexer works one line at a time. Within a line it repeatedly asks the
//! [`PatternCatalog`] for the highest-priority construct in the unconsumed
//! fragment, emits it as a token and continues after the end of the match.
//! Text before a mid-fragment match is dropped. A fragment nothing matches
//! becomes a single `Text` token.

pub mod patterns;
pub mod rules;
pub mod token;


pub use patterns::{Construct, Matcher, PatternCatalog, Span};
pub use token::{Token, TokenKind};

/// Turns Markdown text into a flat token sequence. Never fails.
#[derive(Debug, Clone, Copy)]
pub struct Lexer {
    catalog: &'static PatternCatalog,
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexer {
    /// Creates a lexer backed by the shared standard catalog.
    pub fn new() -> Self {
        Self {
            catalog: PatternCatalog::shared(),
        }
    }

    /// Creates a lexer backed by a caller-provided catalog.
    pub fn with_catalog(catalog: &'static PatternCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'static PatternCatalog {
        self.catalog
    }

    /// Tokenizes the whole document, line by line.
    pub fn lex<'input>(&self, markdown: &'input str) -> Vec<Token<'input>> {
        let mut tokens = Vec::new();
        for line in markdown.split('\n') {
            self.lex_line(line, &mut tokens);
        }
        tokens
    }

    fn lex_line<'input>(&self, line: &'input str, tokens: &mut Vec<Token<'input>>) {
        let mut fragment = line.trim();

        while !fragment.is_empty() {
            match self.catalog.first_match(fragment) {
                Some((construct, span)) => {
                    let token = Token::new(construct.token_kind(), span.slice(fragment));
                    tracing::trace!(?construct, kind = %token.kind, content = token.content, "matched");
                    tokens.push(token);
                    fragment = fragment[span.end..].trim();
                }
                None => {
                    tracing::trace!(content = fragment, "unmatched fragment kept as text");
                    tokens.push(Token::new(TokenKind::Text, fragment));
                    fragment = "";
                }
            }
        }
    }
}

/// Tokenizes `markdown` with the standard catalog.
pub fn lex(markdown: &str) -> Vec<Token<'_>> {
    Lexer::new().lex(markdown)
}
