// Core modules
pub mod ast;
pub mod codegen;
pub mod config;
pub mod error;
pub mod lexer;
pub mod parser;

// Re-export key types for public API
pub use ast::{Node, NodeKind};
pub use codegen::{HtmlRenderer, OutputConfig, OutputConfigBuilder};
pub use config::{EngineConfig, EngineConfigBuilder, MarkdownProcessor, MarkdownStandard};
pub use error::{MarkdownError, Result};
pub use lexer::{Lexer, PatternCatalog, Token, TokenKind};
pub use parser::Parser;

/// Converts a Markdown string to an HTML string.
///
/// This is the simplest entry point. It runs the complete pipeline with the
/// default configuration:
/// 1. **Lexical Analysis:** split each line into typed tokens
/// 2. **Parsing:** map every token to a node
/// 3. **Rendering:** emit one HTML fragment per node, each followed by a newline
///
/// The conversion never fails. Text that matches no construct is passed
/// through unchanged.
///
/// # Examples
///
/// ```
/// use fusion_markdown::to_html;
///
/// assert_eq!(to_html("# Hello, World!"), "<h1>Hello, World!</h1>\n");
/// ```
pub fn to_html(markdown: &str) -> String {
    MarkdownProcessor::default().convert_markdown_to_html(markdown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        assert_eq!(to_html("# Hello, World!"), "<h1>Hello, World!</h1>\n");
    }

    #[test]
    fn test_mixed_document() {
        let markdown = "# Main Title\n\nSome intro\n\n- First item\n- [x] Finished\n\n> A quote\n---\n[Docs](https://example.com)";
        let html = to_html(markdown);
        assert_eq!(
            html,
            "<h1>Main Title</h1>\n\
             Some intro\n\
             <li>First item</li>\n\
             <li><input type='checkbox' checked disabled> Finished</li>\n\
             <blockquote>A quote</blockquote>\n\
             <hr />\n\
             <a href=\"https://example.com\">Docs</a>\n"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(to_html(""), "");
    }
}
