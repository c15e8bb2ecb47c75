use futures_util::future::try_join_all;
use tracing::{info, warn};

use crate::context::ExplorerContext;
use crate::errors::command::CommandError;
use crate::errors::ExplorerResult;
use crate::models::command::{TagSuggestion, TerminalLaunch};
use crate::models::tree::{ImageRow, TreeNode};
use crate::repositories::container_client::ContainerClient;
use crate::repositories::terminal::TerminalLauncher;
use crate::usecases::tagging::{image_tagging_properties, parse_tag_input, suggest_tag, TagPhase};
use crate::usecases::terminal_commands::run_image_command;

async fn image_row<C, T>(ctx: &ExplorerContext<C, T>, node_id: &str) -> Result<ImageRow, CommandError>
where
    C: ContainerClient + 'static,
    T: TerminalLauncher + 'static,
{
    match ctx.images.find_node(node_id).await? {
        TreeNode::Image { row, .. } => Ok(row),
        other => Err(CommandError::UnexpectedNode {
            id: other.id(),
            expected: "an image".to_string(),
        }),
    }
}

/// Starts a container from the image, publishing its exposed ports.
pub async fn run_image<C, T>(
    ctx: &ExplorerContext<C, T>,
    node_id: &str,
    interactive: bool,
) -> ExplorerResult<TerminalLaunch>
where
    C: ContainerClient + 'static,
    T: TerminalLauncher + 'static,
{
    let row = image_row(ctx, node_id).await?;
    let mut warnings = Vec::new();

    let ports = match ctx.client.get_exposed_ports(&row.image.id).await {
        Ok(ports) => ports,
        Err(e) => {
            let warning = format!("Unable to retrieve exposed ports: {}", e);
            warn!("{}", warning);
            warnings.push(warning);
            Vec::new()
        }
    };

    let command = run_image_command(&row.full_tag, &ports, interactive);
    ctx.terminal.launch(&row.full_tag, &command)?;

    Ok(TerminalLaunch {
        title: row.full_tag,
        command,
        warnings,
    })
}

pub async fn inspect_image<C, T>(
    ctx: &ExplorerContext<C, T>,
    node_id: &str,
) -> ExplorerResult<serde_json::Value>
where
    C: ContainerClient + 'static,
    T: TerminalLauncher + 'static,
{
    let row = image_row(ctx, node_id).await?;
    Ok(ctx.client.inspect_image(&row.image.id).await?)
}

pub async fn tag_suggestion<C, T>(
    ctx: &ExplorerContext<C, T>,
    node_id: &str,
) -> ExplorerResult<TagSuggestion>
where
    C: ContainerClient + 'static,
    T: TerminalLauncher + 'static,
{
    let row = image_row(ctx, node_id).await?;
    let default_registry_path = ctx.settings.read().await.default_registry_path.clone();
    Ok(suggest_tag(&row.full_tag, &default_registry_path))
}

/// Tags the image with `new_name`. A missing or blank name means the prompt was
/// dismissed and nothing happens.
pub async fn tag_image<C, T>(
    ctx: &ExplorerContext<C, T>,
    node_id: &str,
    new_name: Option<&str>,
) -> ExplorerResult<Option<String>>
where
    C: ContainerClient + 'static,
    T: TerminalLauncher + 'static,
{
    let row = image_row(ctx, node_id).await?;
    let default_registry_path = ctx.settings.read().await.default_registry_path.clone();

    let before = image_tagging_properties(&row.full_tag, &default_registry_path, TagPhase::Before);
    info!(properties = ?before, "Tagging image {}", row.full_tag);

    let Some(new_name) = new_name.map(str::trim).filter(|name| !name.is_empty()) else {
        info!("Tag prompt dismissed for {}", row.full_tag);
        return Ok(None);
    };

    let after = image_tagging_properties(new_name, &default_registry_path, TagPhase::After);
    info!(properties = ?after, "Tag chosen: {}", new_name);

    let (repo, tag) = parse_tag_input(new_name);
    ctx.client.tag_image(&row.image.id, &repo, &tag).await?;
    ctx.images.refresh().await;

    Ok(Some(new_name.to_string()))
}

/// Force-removes every selected image concurrently and refreshes the images view.
/// Returns the removed image ids.
pub async fn remove_images<C, T>(
    ctx: &ExplorerContext<C, T>,
    node_ids: &[String],
) -> ExplorerResult<Vec<String>>
where
    C: ContainerClient + 'static,
    T: TerminalLauncher + 'static,
{
    if node_ids.is_empty() {
        return Err(CommandError::NoSelection {
            kind: "image".to_string(),
        }
        .into());
    }

    let mut image_ids: Vec<String> = Vec::new();
    for node_id in node_ids {
        let row = image_row(ctx, node_id).await?;
        if !image_ids.contains(&row.image.id) {
            image_ids.push(row.image.id);
        }
    }

    info!("Removing image(s): {}", image_ids.join(", "));
    let result = try_join_all(image_ids.iter().map(|id| ctx.client.remove_image(id))).await;
    ctx.images.refresh().await;
    result?;

    Ok(image_ids)
}
