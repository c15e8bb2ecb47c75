use tracing::info;

use crate::context::ExplorerContext;
use crate::errors::command::CommandError;
use crate::errors::ExplorerResult;
use crate::models::command::TerminalLaunch;
use crate::models::container_client::ContainerDescriptor;
use crate::models::tree::TreeNode;
use crate::repositories::container_client::ContainerClient;
use crate::repositories::terminal::TerminalLauncher;
use crate::usecases::terminal_commands::{exec_shell_command, follow_logs_command};

async fn container<C, T>(
    ctx: &ExplorerContext<C, T>,
    node_id: &str,
) -> Result<ContainerDescriptor, CommandError>
where
    C: ContainerClient + 'static,
    T: TerminalLauncher + 'static,
{
    match ctx.containers.find_node(node_id).await? {
        TreeNode::Container(container) => Ok(container),
        other => Err(CommandError::UnexpectedNode {
            id: other.id(),
            expected: "a container".to_string(),
        }),
    }
}

/// Attaches a shell chosen by the engine's OS type.
pub async fn open_shell<C, T>(
    ctx: &ExplorerContext<C, T>,
    node_id: &str,
) -> ExplorerResult<TerminalLaunch>
where
    C: ContainerClient + 'static,
    T: TerminalLauncher + 'static,
{
    let container = container(ctx, node_id).await?;
    let engine_type = ctx.client.get_engine_type().await?;
    let shell = ctx.settings.read().await.shell.for_engine(engine_type).to_string();
    info!(?engine_type, shell_command = %shell, "Opening shell in {}", container.id);

    let title = format!("Shell: {}", container.image);
    let command = exec_shell_command(&container.id, &shell);
    ctx.terminal.launch(&title, &command)?;

    Ok(TerminalLaunch {
        title,
        command,
        warnings: Vec::new(),
    })
}

pub async fn show_logs<C, T>(
    ctx: &ExplorerContext<C, T>,
    node_id: &str,
) -> ExplorerResult<TerminalLaunch>
where
    C: ContainerClient + 'static,
    T: TerminalLauncher + 'static,
{
    let container = container(ctx, node_id).await?;
    let command = follow_logs_command(&container.id);
    ctx.terminal.launch(&container.image, &command)?;

    Ok(TerminalLaunch {
        title: container.image,
        command,
        warnings: Vec::new(),
    })
}

/// Force-removes the container and refreshes the containers view.
pub async fn remove_container<C, T>(ctx: &ExplorerContext<C, T>, node_id: &str) -> ExplorerResult<()>
where
    C: ContainerClient + 'static,
    T: TerminalLauncher + 'static,
{
    let container = container(ctx, node_id).await?;
    ctx.client.remove_container(&container.id, true).await?;
    ctx.containers.refresh().await;
    Ok(())
}
