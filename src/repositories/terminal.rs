use mockall::automock;
use std::process::{Child, Command};
use tracing::{info, warn};

use crate::errors::terminal::TerminalError;

#[automock]
pub trait TerminalLauncher: Send + Sync {
    /// Runs `command` in a new terminal titled `title` without waiting for it.
    fn launch(&self, title: &str, command: &str) -> Result<(), TerminalError>;
}

/// Spawns commands through the platform shell, inheriting the service's stdio.
#[derive(Debug, Clone, Default)]
pub struct ShellTerminal;

impl ShellTerminal {
    pub fn new() -> ShellTerminal {
        ShellTerminal
    }

    fn spawn_shell_command(&self, command: &str) -> Result<Child, std::io::Error> {
        if cfg!(target_os = "windows") {
            Command::new("cmd").args(["/C", command]).spawn()
        } else {
            Command::new("sh").args(["-c", command]).spawn()
        }
    }
}

impl TerminalLauncher for ShellTerminal {
    fn launch(&self, title: &str, command: &str) -> Result<(), TerminalError> {
        info!(terminal = title, "Sending to terminal: {}", command);

        let mut child = self.spawn_shell_command(command).map_err(|e| {
            TerminalError::LaunchFailed {
                title: title.to_string(),
                command: command.to_string(),
                reason: e.to_string(),
            }
        })?;

        info!(terminal = title, pid = child.id(), "Terminal command started");

        let title = title.to_string();
        std::thread::spawn(move || match child.wait() {
            Ok(status) => info!(terminal = %title, "Terminal command finished: {}", status),
            Err(e) => warn!(terminal = %title, "Failed to wait for terminal command: {}", e),
        });

        Ok(())
    }
}
