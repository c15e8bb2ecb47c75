use axum::extract::{Path, Query, State};
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::Json;
use futures_util::stream::{self, Stream, StreamExt};
use serde::Deserialize;
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::warn;

use crate::context::ExplorerContext;
use crate::errors::ExplorerResult;
use crate::models::response::GenericResponse;
use crate::models::tree::{TreeChange, TreeItem, ViewKind};
use crate::repositories::container_client::ContainerClient;
use crate::repositories::terminal::TerminalLauncher;
use crate::usecases::tree_items::tree_item;

#[derive(Debug, Deserialize)]
pub struct NodeQuery {
    pub node: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Visibility {
    pub visible: bool,
}

pub async fn get_children<C, T>(
    State(ctx): State<ExplorerContext<C, T>>,
    Path(view): Path<ViewKind>,
    Query(query): Query<NodeQuery>,
) -> ExplorerResult<Json<Vec<TreeItem>>>
where
    C: ContainerClient + 'static,
    T: TerminalLauncher + 'static,
{
    let children = ctx.view(view).get_children(query.node.as_deref()).await?;
    Ok(Json(children.iter().map(tree_item).collect()))
}

pub async fn get_item<C, T>(
    State(ctx): State<ExplorerContext<C, T>>,
    Path(view): Path<ViewKind>,
    Query(query): Query<NodeQuery>,
) -> ExplorerResult<Json<TreeItem>>
where
    C: ContainerClient + 'static,
    T: TerminalLauncher + 'static,
{
    let node_id = query.node.unwrap_or_default();
    let node = ctx.view(view).find_node(&node_id).await?;
    Ok(Json(tree_item(&node)))
}

pub async fn set_visibility<C, T>(
    State(ctx): State<ExplorerContext<C, T>>,
    Path(view): Path<ViewKind>,
    Json(visibility): Json<Visibility>,
) -> GenericResponse<bool>
where
    C: ContainerClient + 'static,
    T: TerminalLauncher + 'static,
{
    ctx.set_view_visible(view, visibility.visible).await;
    GenericResponse::result(ctx.is_view_polling(view).await)
}

pub async fn refresh<C, T>(
    State(ctx): State<ExplorerContext<C, T>>,
    Path(view): Path<ViewKind>,
) -> GenericResponse<ViewKind>
where
    C: ContainerClient + 'static,
    T: TerminalLauncher + 'static,
{
    ctx.refresh(view).await;
    GenericResponse::result(view)
}

/// Changes for `view` only. Lagging subscribers skip the missed changes; the
/// next one still tells the host to re-query. Ends when the sender is gone.
pub fn view_changes(
    receiver: broadcast::Receiver<TreeChange>,
    view: ViewKind,
) -> impl Stream<Item = TreeChange> + Send + 'static {
    stream::unfold(receiver, move |mut receiver| async move {
        loop {
            match receiver.recv().await {
                Ok(change) if change.view == view => return Some((change, receiver)),
                Ok(_) => continue,
                Err(RecvError::Lagged(skipped)) => {
                    warn!("{} change subscriber lagged by {} events", view.as_str(), skipped);
                    continue;
                }
                Err(RecvError::Closed) => return None,
            }
        }
    })
}

pub async fn events<C, T>(
    State(ctx): State<ExplorerContext<C, T>>,
    Path(view): Path<ViewKind>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>>
where
    C: ContainerClient + 'static,
    T: TerminalLauncher + 'static,
{
    let events = view_changes(ctx.subscribe(), view)
        .map(|change| Event::default().event("changed").json_data(&change));

    Sse::new(events).keep_alive(KeepAlive::default())
}
