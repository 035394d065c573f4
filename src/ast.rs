//! Node model for parsed Markdown.
//!
//! A document is a flat sequence of [`Node`]s, one per token. Every variant
//! keeps the raw matched text verbatim and knows how to turn itself into an
//! HTML fragment.

use std::fmt;
use std::fmt::Write as _;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::codegen::OutputConfig;
use crate::error::{MarkdownError, Result};
use crate::lexer::patterns::{BOLD, CODE_BLOCK, IMAGE, INLINE_CODE, ITALIC, LINK, STRIKETHROUGH};
use crate::lexer::rules::parse_task_item;

/// Discriminant of a [`Node`], without its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NodeKind {
    Text,
    Heading,
    Bold,
    Italic,
    ListItem,
    TaskList,
    CodeBlock,
    InlineCode,
    Blockquote,
    HorizontalRule,
    Table,
    Link,
    Image,
    Strikethrough,
}

impl NodeKind {
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Text => "Text",
            NodeKind::Heading => "Heading",
            NodeKind::Bold => "Bold",
            NodeKind::Italic => "Italic",
            NodeKind::ListItem => "ListItem",
            NodeKind::TaskList => "TaskList",
            NodeKind::CodeBlock => "CodeBlock",
            NodeKind::InlineCode => "InlineCode",
            NodeKind::Blockquote => "Blockquote",
            NodeKind::HorizontalRule => "HorizontalRule",
            NodeKind::Table => "Table",
            NodeKind::Link => "Link",
            NodeKind::Image => "Image",
            NodeKind::Strikethrough => "Strikethrough",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parsed unit of the document. Each variant carries its raw source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Node<'input> {
    Text(&'input str),
    Heading(&'input str),
    Bold(&'input str),
    Italic(&'input str),
    ListItem(&'input str),
    TaskList(&'input str),
    CodeBlock(&'input str),
    InlineCode(&'input str),
    Blockquote(&'input str),
    HorizontalRule(&'input str),
    Table(&'input str),
    Link(&'input str),
    Image(&'input str),
    Strikethrough(&'input str),
}

impl<'input> Node<'input> {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Text(_) => NodeKind::Text,
            Node::Heading(_) => NodeKind::Heading,
            Node::Bold(_) => NodeKind::Bold,
            Node::Italic(_) => NodeKind::Italic,
            Node::ListItem(_) => NodeKind::ListItem,
            Node::TaskList(_) => NodeKind::TaskList,
            Node::CodeBlock(_) => NodeKind::CodeBlock,
            Node::InlineCode(_) => NodeKind::InlineCode,
            Node::Blockquote(_) => NodeKind::Blockquote,
            Node::HorizontalRule(_) => NodeKind::HorizontalRule,
            Node::Table(_) => NodeKind::Table,
            Node::Link(_) => NodeKind::Link,
            Node::Image(_) => NodeKind::Image,
            Node::Strikethrough(_) => NodeKind::Strikethrough,
        }
    }

    /// The raw text this node was built from.
    pub fn content(&self) -> &'input str {
        match *self {
            Node::Text(content)
            | Node::Heading(content)
            | Node::Bold(content)
            | Node::Italic(content)
            | Node::ListItem(content)
            | Node::TaskList(content)
            | Node::CodeBlock(content)
            | Node::InlineCode(content)
            | Node::Blockquote(content)
            | Node::HorizontalRule(content)
            | Node::Table(content)
            | Node::Link(content)
            | Node::Image(content)
            | Node::Strikethrough(content) => content,
        }
    }

    /// Renders with the default output configuration.
    pub fn to_html(&self) -> String {
        self.render(&OutputConfig::default())
    }

    /// Renders this node, degrading to an empty fragment if its content
    /// cannot be re-parsed.
    pub fn render(&self, config: &OutputConfig) -> String {
        self.try_render(config).unwrap_or_else(|error| {
            tracing::warn!(kind = %self.kind(), %error, "rendering empty fragment");
            String::new()
        })
    }

    /// Renders this node, reporting content that no longer matches its own pattern.
    pub fn try_render(&self, config: &OutputConfig) -> Result<String> {
        let html = match *self {
            Node::Text(content) => content.to_string(),
            Node::Heading(content) => render_heading(content),
            Node::Bold(content) => {
                format!("<strong>{}</strong>", BOLD.replace_all(content, "${1}"))
            }
            Node::Italic(content) => format!("<em>{}</em>", ITALIC.replace_all(content, "${1}")),
            Node::ListItem(content) => format!("<li>{}</li>", strip_list_marker(content)),
            Node::TaskList(content) => self.render_task_item(content, config)?,
            Node::CodeBlock(content) => format!(
                "<pre><code>{}</code></pre>",
                CODE_BLOCK.replace_all(content, "${1}")
            ),
            Node::InlineCode(content) => {
                format!("<code>{}</code>", INLINE_CODE.replace_all(content, "${1}"))
            }
            Node::Blockquote(content) => format!(
                "<blockquote>{}</blockquote>",
                content.strip_prefix("> ").unwrap_or(content)
            ),
            Node::HorizontalRule(_) => "<hr />".to_string(),
            Node::Table(content) => render_table(content)?,
            Node::Link(content) => {
                let caps = LINK
                    .captures(content)
                    .ok_or_else(|| MarkdownError::reparse(self.kind(), content))?;
                format!("<a href=\"{}\">{}</a>", &caps[2], &caps[1])
            }
            Node::Image(content) => {
                let caps = IMAGE
                    .captures(content)
                    .ok_or_else(|| MarkdownError::reparse(self.kind(), content))?;
                format!("<img src=\"{}\" alt=\"{}\" />", &caps[2], &caps[1])
            }
            Node::Strikethrough(content) => {
                format!("<del>{}</del>", STRIKETHROUGH.replace_all(content, "${1}"))
            }
        };
        Ok(html)
    }

    fn render_task_item(&self, content: &str, config: &OutputConfig) -> Result<String> {
        let (checked, text) =
            parse_task_item(content).ok_or_else(|| MarkdownError::reparse(self.kind(), content))?;

        let mut html = String::from("<li><input type='checkbox'");
        if checked {
            html.push_str(" checked");
        }
        if config.disable_task_checkboxes {
            html.push_str(" disabled");
        }
        write!(html, "> {text}</li>")?;
        Ok(html)
    }
}

fn render_heading(content: &str) -> String {
    let level = content.chars().take_while(|&c| c == '#').count();
    let title = content.trim_start_matches('#').trim();
    format!("<h{level}>{title}</h{level}>")
}

fn strip_list_marker(content: &str) -> &str {
    content
        .strip_prefix("* ")
        .or_else(|| content.strip_prefix("- "))
        .unwrap_or(content)
}

fn render_table(content: &str) -> Result<String> {
    let mut html = String::from("<table><tbody>");
    for row in content.split('\n').filter(|line| line.starts_with('|')) {
        html.push_str("<tr>");
        for cell in row.trim_matches('|').split('|') {
            write!(html, "<td>{}</td>", cell.trim())?;
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> OutputConfig {
        OutputConfig::builder().disable_task_checkboxes(false).build()
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(Node::Heading("# Heading 1").to_html(), "<h1>Heading 1</h1>");
        assert_eq!(Node::Heading("### Third").to_html(), "<h3>Third</h3>");
        assert_eq!(Node::Heading("######   Six  ").to_html(), "<h6>Six</h6>");
    }

    #[test]
    fn test_inline_delimiters_are_stripped() {
        assert_eq!(Node::Bold("**Bold Text**").to_html(), "<strong>Bold Text</strong>");
        assert_eq!(Node::Italic("_Italic Text_").to_html(), "<em>Italic Text</em>");
        assert_eq!(Node::InlineCode("`x + 1`").to_html(), "<code>x + 1</code>");
        assert_eq!(
            Node::Strikethrough("~~Strikethrough Text~~").to_html(),
            "<del>Strikethrough Text</del>"
        );
        assert_eq!(
            Node::CodeBlock("```let x = 1;```").to_html(),
            "<pre><code>let x = 1;</code></pre>"
        );
    }

    #[test]
    fn test_text_is_emitted_verbatim() {
        assert_eq!(Node::Text("a < b & c").to_html(), "a < b & c");
    }

    #[test]
    fn test_list_items() {
        assert_eq!(Node::ListItem("- dash").to_html(), "<li>dash</li>");
        assert_eq!(Node::ListItem("* star").to_html(), "<li>star</li>");
    }

    #[test]
    fn test_blockquote_and_rule() {
        assert_eq!(
            Node::Blockquote("> quoted text").to_html(),
            "<blockquote>quoted text</blockquote>"
        );
        assert_eq!(Node::HorizontalRule("---").to_html(), "<hr />");
    }

    #[test]
    fn test_link_and_image() {
        assert_eq!(
            Node::Link("[Link Text](http://example.com)").to_html(),
            "<a href=\"http://example.com\">Link Text</a>"
        );
        assert_eq!(
            Node::Image("![Alt Text](http://example.com/image.png)").to_html(),
            "<img src=\"http://example.com/image.png\" alt=\"Alt Text\" />"
        );
    }

    #[test]
    fn test_task_items_with_and_without_disabled() {
        assert_eq!(
            Node::TaskList("- [x] Done").to_html(),
            "<li><input type='checkbox' checked disabled> Done</li>"
        );
        assert_eq!(
            Node::TaskList("- [ ] Open").to_html(),
            "<li><input type='checkbox' disabled> Open</li>"
        );
        assert_eq!(
            Node::TaskList("- [x] Done").render(&plain()),
            "<li><input type='checkbox' checked> Done</li>"
        );
        assert_eq!(
            Node::TaskList("- [ ] Open").render(&plain()),
            "<li><input type='checkbox'> Open</li>"
        );
    }

    #[test]
    fn test_table_rows_and_cells() {
        assert_eq!(
            Node::Table("| a | b |").to_html(),
            "<table><tbody><tr><td>a</td><td>b</td></tr></tbody></table>"
        );
        assert_eq!(
            Node::Table("| a |\n| b |\nignored").to_html(),
            "<table><tbody><tr><td>a</td></tr><tr><td>b</td></tr></tbody></table>"
        );
    }

    #[test]
    fn test_inconsistent_content_renders_empty() {
        let node = Node::Link("not a link");
        assert_eq!(
            node.try_render(&OutputConfig::default()),
            Err(MarkdownError::reparse(NodeKind::Link, "not a link"))
        );
        assert_eq!(node.to_html(), "");
        assert_eq!(Node::Image("[no](bang)").to_html(), "");
        assert_eq!(Node::TaskList("- plain").to_html(), "");
    }

    #[test]
    fn test_kind_and_content() {
        let node = Node::Strikethrough("~~x~~");
        assert_eq!(node.kind(), NodeKind::Strikethrough);
        assert_eq!(node.content(), "~~x~~");
        assert_eq!(NodeKind::TaskList.to_string(), "TaskList");
    }
}
