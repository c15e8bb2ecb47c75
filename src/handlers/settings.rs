use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::context::ExplorerContext;
use crate::models::grouping::ImageGrouping;
use crate::models::settings::Settings;
use crate::repositories::container_client::ContainerClient;
use crate::repositories::terminal::TerminalLauncher;

#[derive(Debug, Deserialize)]
pub struct GroupingRequest {
    pub group_images_by: ImageGrouping,
}

#[derive(Debug, Deserialize)]
pub struct DefaultRegistryRequest {
    pub registry: String,
}

pub async fn get_settings<C, T>(State(ctx): State<ExplorerContext<C, T>>) -> Json<Settings>
where
    C: ContainerClient + 'static,
    T: TerminalLauncher + 'static,
{
    Json(ctx.settings().await)
}

pub async fn set_grouping<C, T>(
    State(ctx): State<ExplorerContext<C, T>>,
    Json(request): Json<GroupingRequest>,
) -> Json<Settings>
where
    C: ContainerClient + 'static,
    T: TerminalLauncher + 'static,
{
    ctx.set_grouping(request.group_images_by).await;
    Json(ctx.settings().await)
}

pub async fn set_default_registry<C, T>(
    State(ctx): State<ExplorerContext<C, T>>,
    Json(request): Json<DefaultRegistryRequest>,
) -> Json<Settings>
where
    C: ContainerClient + 'static,
    T: TerminalLauncher + 'static,
{
    ctx.set_registry_as_default(&request.registry).await;
    Json(ctx.settings().await)
}
