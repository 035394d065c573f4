//! Error handling module for the Markdown converter.
//!
//! Errors never reach the caller of the conversion entry points. They exist so
//! that node rendering can report why a fragment was degraded to empty output.

use crate::ast::NodeKind;
use thiserror::Error;

/// Main error type for the Markdown converter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkdownError {
    /// A node's stored text no longer matches the pattern that produced it.
    #[error("{kind} content does not match its own pattern: {content:?}")]
    Reparse { kind: NodeKind, content: String },

    /// Writing into the output buffer failed.
    #[error("Generation error: {0}")]
    Fmt(#[from] std::fmt::Error),
}

/// Convenience type alias for Results in the Markdown converter.
pub type Result<T> = std::result::Result<T, MarkdownError>;

impl MarkdownError {
    /// Creates a new re-parse error for the given node kind and content.
    pub fn reparse(kind: NodeKind, content: impl Into<String>) -> Self {
        MarkdownError::Reparse {
            kind,
            content: content.into(),
        }
    }

    /// Returns the node kind associated with this error, if any.
    pub fn node_kind(&self) -> Option<NodeKind> {
        match self {
            MarkdownError::Reparse { kind, .. } => Some(*kind),
            MarkdownError::Fmt(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reparse_error_message() {
        let error = MarkdownError::reparse(NodeKind::Link, "[broken](");
        let message = error.to_string();
        assert!(message.contains("Link"));
        assert!(message.contains("[broken]("));
        assert_eq!(error.node_kind(), Some(NodeKind::Link));
    }

    #[test]
    fn test_fmt_error_conversion() {
        let error: MarkdownError = std::fmt::Error.into();
        assert_eq!(error.node_kind(), None);
        assert!(error.to_string().starts_with("Generation error"));
    }
}
