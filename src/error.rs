//! Rejection reasons and command feedback.
//!
//! Nothing in the core is fatal. Anomalous requests are turned away with a message the
//! status bar can show, so `GraphError`'s `Display` text doubles as user-facing wording.

use crate::types::{EdgeId, VertexId};
use thiserror::Error;

/// Why a graph mutation or command was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An edge from a vertex to itself was requested
    #[error("A vertex cannot be connected to itself.")]
    SelfLoop(VertexId),
    /// The unordered pair is already connected
    #[error("Edge between V{0} and V{1} already exists.")]
    DuplicateEdge(VertexId, VertexId),
    /// The referenced vertex is not in the graph
    #[error("Vertex V{0} does not exist.")]
    UnknownVertex(VertexId),
    /// The referenced edge is not in the graph
    #[error("Edge E{0} does not exist.")]
    UnknownEdge(EdgeId),
    /// Coordinates typed by the user were not finite numbers
    #[error("Enter valid numbers for both coordinates.")]
    InvalidCoordinates,
    /// A click in edge mode landed on empty canvas
    #[error("Click an existing vertex.")]
    NoVertexHere,
}

/// Outcome of a command, ready for the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    /// Whether the command changed anything
    pub success: bool,
    /// Text to show the user
    pub message: String,
}

impl Feedback {
    /// A command that applied.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// A command that was turned away and left the state untouched.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

impl From<GraphError> for Feedback {
    fn from(err: GraphError) -> Self {
        Feedback::rejected(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_are_user_facing() {
        assert_eq!(GraphError::NoVertexHere.to_string(), "Click an existing vertex.");
        assert_eq!(
            GraphError::DuplicateEdge(1, 2).to_string(),
            "Edge between V1 and V2 already exists."
        );
    }

    #[test]
    fn test_feedback_from_error_is_rejection() {
        let fb: Feedback = GraphError::UnknownVertex(9).into();
        assert!(!fb.success);
        assert_eq!(fb.message, "Vertex V9 does not exist.");
    }
}
