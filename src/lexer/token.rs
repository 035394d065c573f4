use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The construct a token was recognised as.
///
/// Task-list items and strikethrough runs have no kind of their own at this
/// stage: they are lexed as `ListItem` and `Text` and told apart by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TokenKind {
    Text,
    Heading,
    Bold,
    Italic,
    Link,
    Image,
    ListItem,
    CodeBlock,
    InlineCode,
    Blockquote,
    HorizontalRule,
    Table,
}

impl TokenKind {
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Text => "Text",
            TokenKind::Heading => "Heading",
            TokenKind::Bold => "Bold",
            TokenKind::Italic => "Italic",
            TokenKind::Link => "Link",
            TokenKind::Image => "Image",
            TokenKind::ListItem => "ListItem",
            TokenKind::CodeBlock => "CodeBlock",
            TokenKind::InlineCode => "InlineCode",
            TokenKind::Blockquote => "Blockquote",
            TokenKind::HorizontalRule => "HorizontalRule",
            TokenKind::Table => "Table",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A lexed `(kind, raw text)` pair.
///
/// `content` is the entire matched substring, delimiters included, borrowed
/// from the lexer input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Token<'input> {
    pub kind: TokenKind,
    pub content: &'input str,
}

impl<'input> Token<'input> {
    pub fn new(kind: TokenKind, content: &'input str) -> Self {
        Self { kind, content }
    }
}
