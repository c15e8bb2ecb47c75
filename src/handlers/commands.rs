use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::context::ExplorerContext;
use crate::errors::ExplorerResult;
use crate::handlers::views::NodeQuery;
use crate::models::command::{TagSuggestion, TerminalLaunch};
use crate::models::response::GenericResponse;
use crate::repositories::container_client::ContainerClient;
use crate::repositories::terminal::TerminalLauncher;
use crate::usecases::{container_commands, image_commands};

#[derive(Debug, Deserialize)]
pub struct NodeRequest {
    pub node: String,
}

#[derive(Debug, Deserialize)]
pub struct TagRequest {
    pub node: String,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SelectionRequest {
    #[serde(default)]
    pub nodes: Vec<String>,
}

pub async fn run_image<C, T>(
    State(ctx): State<ExplorerContext<C, T>>,
    Json(request): Json<NodeRequest>,
) -> ExplorerResult<Json<TerminalLaunch>>
where
    C: ContainerClient + 'static,
    T: TerminalLauncher + 'static,
{
    Ok(Json(image_commands::run_image(&ctx, &request.node, false).await?))
}

pub async fn run_image_interactive<C, T>(
    State(ctx): State<ExplorerContext<C, T>>,
    Json(request): Json<NodeRequest>,
) -> ExplorerResult<Json<TerminalLaunch>>
where
    C: ContainerClient + 'static,
    T: TerminalLauncher + 'static,
{
    Ok(Json(image_commands::run_image(&ctx, &request.node, true).await?))
}

pub async fn inspect_image<C, T>(
    State(ctx): State<ExplorerContext<C, T>>,
    Json(request): Json<NodeRequest>,
) -> ExplorerResult<Json<serde_json::Value>>
where
    C: ContainerClient + 'static,
    T: TerminalLauncher + 'static,
{
    Ok(Json(image_commands::inspect_image(&ctx, &request.node).await?))
}

pub async fn tag_suggestion<C, T>(
    State(ctx): State<ExplorerContext<C, T>>,
    Query(query): Query<NodeQuery>,
) -> ExplorerResult<Json<TagSuggestion>>
where
    C: ContainerClient + 'static,
    T: TerminalLauncher + 'static,
{
    let node_id = query.node.unwrap_or_default();
    Ok(Json(image_commands::tag_suggestion(&ctx, &node_id).await?))
}

pub async fn tag_image<C, T>(
    State(ctx): State<ExplorerContext<C, T>>,
    Json(request): Json<TagRequest>,
) -> ExplorerResult<GenericResponse<String>>
where
    C: ContainerClient + 'static,
    T: TerminalLauncher + 'static,
{
    let tagged = image_commands::tag_image(&ctx, &request.node, request.name.as_deref()).await?;
    Ok(match tagged {
        Some(name) => GenericResponse::result(name),
        None => GenericResponse::empty(),
    })
}

pub async fn remove_images<C, T>(
    State(ctx): State<ExplorerContext<C, T>>,
    Json(request): Json<SelectionRequest>,
) -> ExplorerResult<GenericResponse<String>>
where
    C: ContainerClient + 'static,
    T: TerminalLauncher + 'static,
{
    let removed = image_commands::remove_images(&ctx, &request.nodes).await?;
    Ok(GenericResponse::results(removed))
}

pub async fn open_shell<C, T>(
    State(ctx): State<ExplorerContext<C, T>>,
    Json(request): Json<NodeRequest>,
) -> ExplorerResult<Json<TerminalLaunch>>
where
    C: ContainerClient + 'static,
    T: TerminalLauncher + 'static,
{
    Ok(Json(container_commands::open_shell(&ctx, &request.node).await?))
}

pub async fn show_logs<C, T>(
    State(ctx): State<ExplorerContext<C, T>>,
    Json(request): Json<NodeRequest>,
) -> ExplorerResult<Json<TerminalLaunch>>
where
    C: ContainerClient + 'static,
    T: TerminalLauncher + 'static,
{
    Ok(Json(container_commands::show_logs(&ctx, &request.node).await?))
}

pub async fn remove_container<C, T>(
    State(ctx): State<ExplorerContext<C, T>>,
    Json(request): Json<NodeRequest>,
) -> ExplorerResult<GenericResponse<String>>
where
    C: ContainerClient + 'static,
    T: TerminalLauncher + 'static,
{
    container_commands::remove_container(&ctx, &request.node).await?;
    Ok(GenericResponse::result(request.node))
}
