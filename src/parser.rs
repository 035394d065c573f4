//! Parser: maps each token to exactly one node.
//!
//! Two token kinds are refined by re-testing their text: list items that look
//! like `- [x] ...` become task-list nodes, and text runs wrapped in `~~`
//! become strikethrough nodes.

use crate::ast::Node;
use crate::lexer::patterns::STRIKETHROUGH;
use crate::lexer::rules::parse_task_item;
use crate::lexer::{Token, TokenKind};


/// Stateless token-to-node mapper.
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser;

impl Parser {
    pub fn new() -> Self {
        Self
    }

    /// Builds one node per token, preserving order.
    pub fn parse<'input>(&self, tokens: &[Token<'input>]) -> Vec<Node<'input>> {
        tokens.iter().map(|token| self.parse_token(token)).collect()
    }

    fn parse_token<'input>(&self, token: &Token<'input>) -> Node<'input> {
        let content = token.content;
        match token.kind {
            TokenKind::Text => {
                if STRIKETHROUGH.is_match(content) {
                    Node::Strikethrough(content)
                } else {
                    Node::Text(content)
                }
            }
            TokenKind::Heading => Node::Heading(content),
            TokenKind::Bold => Node::Bold(content),
            TokenKind::Italic => Node::Italic(content),
            TokenKind::Link => Node::Link(content),
            TokenKind::Image => Node::Image(content),
            TokenKind::ListItem => {
                if parse_task_item(content).is_some() {
                    Node::TaskList(content)
                } else {
                    Node::ListItem(content)
                }
            }
            TokenKind::CodeBlock => Node::CodeBlock(content),
            TokenKind::InlineCode => Node::InlineCode(content),
            TokenKind::Blockquote => Node::Blockquote(content),
            TokenKind::HorizontalRule => Node::HorizontalRule(content),
            TokenKind::Table => Node::Table(content),
        }
    }
}

/// Parses a token sequence with a default parser.
pub fn parse<'input>(tokens: &[Token<'input>]) -> Vec<Node<'input>> {
    Parser::new().parse(tokens)
}
