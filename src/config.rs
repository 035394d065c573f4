//! Configuration module for the public API.
//!
//! This module provides the engine configuration with a builder, and the
//! `MarkdownProcessor` that runs the lexer, parser and renderer in sequence.

use crate::ast::Node;
use crate::codegen::{HtmlRenderer, OutputConfig};
use crate::lexer::{Lexer, Token};
use crate::parser::Parser;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The Markdown dialect a processor is built for.
///
/// Only one dialect exists today; the value is recorded but does not change
/// any behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MarkdownStandard {
    #[default]
    CommonMark,
}

/// Main configuration struct for the processor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EngineConfig {
    /// Markdown dialect
    pub standard: MarkdownStandard,
    /// HTML output configuration
    pub output: OutputConfig,
}

impl EngineConfig {
    /// Creates a builder for configuring the processor.
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::new()
    }
}

/// Builder for EngineConfig.
#[derive(Debug, Default)]
pub struct EngineConfigBuilder {
    config: EngineConfig,
}

impl EngineConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the Markdown dialect
    pub fn standard(mut self, standard: MarkdownStandard) -> Self {
        self.config.standard = standard;
        self
    }

    /// Set the whole output configuration
    pub fn output(mut self, output: OutputConfig) -> Self {
        self.config.output = output;
        self
    }

    /// Emit or omit `disabled` on task-list checkboxes
    pub fn disable_task_checkboxes(mut self, disabled: bool) -> Self {
        self.config.output.disable_task_checkboxes = disabled;
        self
    }

    pub fn build(self) -> EngineConfig {
        self.config
    }
}

/// Converts Markdown to HTML through the lexer, parser and renderer.
///
/// A processor holds no mutable state, so one instance can serve any number
/// of conversions, including concurrent ones.
#[derive(Debug, Clone, Default)]
pub struct MarkdownProcessor {
    config: EngineConfig,
    lexer: Lexer,
    parser: Parser,
    renderer: HtmlRenderer,
}

impl MarkdownProcessor {
    /// Creates a processor for the given dialect with default output settings.
    pub fn new(standard: MarkdownStandard) -> Self {
        Self::with_config(EngineConfig::builder().standard(standard).build())
    }

    /// Creates a processor with a custom configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        let renderer = HtmlRenderer::new(config.output.clone());
        Self {
            config,
            lexer: Lexer::new(),
            parser: Parser::new(),
            renderer,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn standard(&self) -> MarkdownStandard {
        self.config.standard
    }

    /// Lexes `markdown` into tokens.
    pub fn tokenize<'input>(&self, markdown: &'input str) -> Vec<Token<'input>> {
        self.lexer.lex(markdown)
    }

    /// Lexes and parses `markdown` into nodes.
    pub fn parse<'input>(&self, markdown: &'input str) -> Vec<Node<'input>> {
        self.parser.parse(&self.tokenize(markdown))
    }

    /// Converts `markdown` to HTML. Every input produces some output.
    pub fn convert_markdown_to_html(&self, markdown: &str) -> String {
        let tokens = self.tokenize(markdown);
        let nodes = self.parser.parse(&tokens);
        let html = self.renderer.render(&nodes);
        tracing::debug!(
            standard = ?self.config.standard,
            tokens = tokens.len(),
            nodes = nodes.len(),
            bytes = html.len(),
            "converted markdown"
        );
        html
    }
}
