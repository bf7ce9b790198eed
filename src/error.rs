use std::fmt;
use thiserror::Error;

/// Hard failures while loading or persisting graphs and compiled node maps.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Failed to parse JSON: {0}")]
    JsonParse(String),

    #[error("Failed to serialize node map: {0}")]
    Serialize(String),

    #[error("I/O error on '{path}': {message}")]
    Io { path: String, message: String },
}

/// Errors that can occur when converting a custom editor format into a `BotGraph`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphConversionError {
    #[error("Invalid custom data: {0}")]
    Validation(String),
}

/// Reasons an inbound interaction could not be mapped onto the flow.
///
/// These are recoverable: the caller falls back to its unhandled-input path.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolveError {
    #[error("Button '{button_id}' is not part of this chatbot")]
    ButtonNotFound { button_id: String },

    #[error("Conversation is not waiting on any node")]
    NoParkedNode,

    #[error("Reply '{reply}' does not select any option of node '{node_id}'")]
    ReplyNotRecognised { node_id: String, reply: String },
}

/// Failures reported by the external send and persistence collaborators.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DispatchError {
    #[error("Sending node '{node_id}' failed: {message}")]
    Send { node_id: String, message: String },

    #[error("Conversation store failed: {0}")]
    Store(String),
}

/// Problems the compiler tolerated. Compilation continues past every one of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileWarning {
    MissingData {
        node_id: String,
    },
    MissingChild {
        parent_id: String,
        child_id: String,
    },
    UnknownNodeType {
        node_id: String,
        type_name: String,
    },
    EdgeSourceMissing {
        source_id: String,
        target_id: String,
    },
    EdgeTargetMissing {
        source_id: String,
        target_id: String,
    },
    DuplicateOutgoingEdge {
        source_id: String,
        previous_target: String,
        target_id: String,
    },
    ParentMissing {
        node_id: String,
        parent_id: String,
    },
    ChildNotInParent {
        node_id: String,
        parent_id: String,
    },
}

impl CompileWarning {
    /// The node the warning is about, for structured logging.
    pub fn node_id(&self) -> &str {
        match self {
            CompileWarning::MissingData { node_id }
            | CompileWarning::UnknownNodeType { node_id, .. }
            | CompileWarning::ParentMissing { node_id, .. }
            | CompileWarning::ChildNotInParent { node_id, .. } => node_id,
            CompileWarning::MissingChild { parent_id, .. } => parent_id,
            CompileWarning::EdgeSourceMissing { source_id, .. }
            | CompileWarning::EdgeTargetMissing { source_id, .. }
            | CompileWarning::DuplicateOutgoingEdge { source_id, .. } => source_id,
        }
    }
}

impl fmt::Display for CompileWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileWarning::MissingData { node_id } => {
                write!(f, "Node '{}' has no data, treating it as empty", node_id)
            }
            CompileWarning::MissingChild {
                parent_id,
                child_id,
            } => write!(
                f,
                "Child '{}' of node '{}' does not exist, using an empty label",
                child_id, parent_id
            ),
            CompileWarning::UnknownNodeType { node_id, type_name } => write!(
                f,
                "Node '{}' has unknown type '{}' and was compiled as text",
                node_id, type_name
            ),
            CompileWarning::EdgeSourceMissing {
                source_id,
                target_id,
            } => write!(
                f,
                "Edge '{}' -> '{}' starts at a node that does not exist",
                source_id, target_id
            ),
            CompileWarning::EdgeTargetMissing {
                source_id,
                target_id,
            } => write!(
                f,
                "Edge '{}' -> '{}' points at a node that does not exist",
                source_id, target_id
            ),
            CompileWarning::DuplicateOutgoingEdge {
                source_id,
                previous_target,
                target_id,
            } => write!(
                f,
                "Node '{}' has several outgoing edges, '{}' replaces '{}'",
                source_id, target_id, previous_target
            ),
            CompileWarning::ParentMissing { node_id, parent_id } => write!(
                f,
                "Node '{}' names parent '{}' which does not exist",
                node_id, parent_id
            ),
            CompileWarning::ChildNotInParent { node_id, parent_id } => write!(
                f,
                "Node '{}' is not listed among the children of its parent '{}'",
                node_id, parent_id
            ),
        }
    }
}
