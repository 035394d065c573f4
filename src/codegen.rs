use crate::ast::Node;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration options for HTML output
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OutputConfig {
    /// Whether task-list checkboxes carry the `disabled` attribute
    pub disable_task_checkboxes: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            disable_task_checkboxes: true,
        }
    }
}

impl OutputConfig {
    pub fn builder() -> OutputConfigBuilder {
        OutputConfigBuilder::new()
    }
}

/// Builder pattern for OutputConfig
#[derive(Debug, Default)]
pub struct OutputConfigBuilder {
    config: OutputConfig,
}

impl OutputConfigBuilder {
    /// Creates a new OutputConfig builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit or omit `disabled` on task-list checkboxes
    pub fn disable_task_checkboxes(mut self, disabled: bool) -> Self {
        self.config.disable_task_checkboxes = disabled;
        self
    }

    /// Build the final OutputConfig
    pub fn build(self) -> OutputConfig {
        self.config
    }
}

/// Renders a node sequence to HTML, one fragment per line.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    config: OutputConfig,
}

impl HtmlRenderer {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OutputConfig {
        &self.config
    }

    pub fn render(&self, nodes: &[Node<'_>]) -> String {
        let mut html = String::new();
        for node in nodes {
            html.push_str(&node.render(&self.config));
            html.push('\n');
        }
        html
    }
}

/// Renders nodes with the default output configuration.
pub fn render(nodes: &[Node<'_>]) -> String {
    HtmlRenderer::default().render(nodes)
}
