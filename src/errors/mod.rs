pub mod codes;
pub mod command;
pub mod engine;
pub mod terminal;

use thiserror::Error;

use crate::errors::command::CommandError;
use crate::errors::engine::EngineError;
use crate::errors::terminal::TerminalError;

pub type ExplorerResult<T> = Result<T, ExplorerError>;

pub trait HasErrorCode {
    fn error_code(&self) -> &'static str;
}

#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Terminal(#[from] TerminalError),

    #[error(transparent)]
    Command(#[from] CommandError),
}

impl HasErrorCode for ExplorerError {
    fn error_code(&self) -> &'static str {
        match self {
            ExplorerError::Engine(e) => e.error_code(),
            ExplorerError::Terminal(e) => e.error_code(),
            ExplorerError::Command(e) => e.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::codes::ErrorCode;

    #[test]
    fn given_wrapped_errors_when_coded_then_code_of_inner_error_is_used() {
        let engine = ExplorerError::from(EngineError::ListImagesFailed {
            reason: "timeout".to_string(),
        });
        let terminal = ExplorerError::from(TerminalError::LaunchFailed {
            title: "web".to_string(),
            command: "docker run web".to_string(),
            reason: "no shell".to_string(),
        });
        let command = ExplorerError::from(CommandError::NoSelection {
            kind: "image".to_string(),
        });

        assert_eq!(engine.error_code(), ErrorCode::ENGINE_LIST_IMAGES_FAILED);
        assert_eq!(terminal.error_code(), ErrorCode::TERMINAL_LAUNCH_FAILED);
        assert_eq!(command.error_code(), ErrorCode::COMMAND_NO_SELECTION);
    }
}
