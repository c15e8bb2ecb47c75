use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Tree node '{id}' not found in the {view} view")]
    NodeNotFound { view: String, id: String },

    #[error("Tree node '{id}' is not {expected}")]
    UnexpectedNode { id: String, expected: String },

    #[error("No {kind} selected")]
    NoSelection { kind: String },
}

impl CommandError {
    pub fn error_code(&self) -> &'static str {
        use crate::errors::codes::ErrorCode;

        match self {
            CommandError::NodeNotFound { .. } => ErrorCode::COMMAND_NODE_NOT_FOUND,
            CommandError::UnexpectedNode { .. } => ErrorCode::COMMAND_UNEXPECTED_NODE,
            CommandError::NoSelection { .. } => ErrorCode::COMMAND_NO_SELECTION,
        }
    }
}
