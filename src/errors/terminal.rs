use thiserror::Error;

#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("Failed to launch '{command}' in terminal '{title}': {reason}")]
    LaunchFailed {
        title: String,
        command: String,
        reason: String,
    },
}

impl TerminalError {
    pub fn error_code(&self) -> &'static str {
        use crate::errors::codes::ErrorCode;

        match self {
            TerminalError::LaunchFailed { .. } => ErrorCode::TERMINAL_LAUNCH_FAILED,
        }
    }
}
