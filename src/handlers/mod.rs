pub mod commands;
pub mod error;
pub mod settings;
pub mod views;

use axum::routing::{get, post, put};
use axum::Router;

use crate::context::ExplorerContext;
use crate::repositories::container_client::ContainerClient;
use crate::repositories::terminal::TerminalLauncher;

pub fn router<C, T>(ctx: ExplorerContext<C, T>) -> Router
where
    C: ContainerClient + 'static,
    T: TerminalLauncher + 'static,
{
    Router::new()
        .route("/views/{view}/children", get(views::get_children::<C, T>))
        .route("/views/{view}/item", get(views::get_item::<C, T>))
        .route("/views/{view}/visibility", put(views::set_visibility::<C, T>))
        .route("/views/{view}/refresh", post(views::refresh::<C, T>))
        .route("/views/{view}/events", get(views::events::<C, T>))
        .route("/commands/run-image", post(commands::run_image::<C, T>))
        .route(
            "/commands/run-image-interactive",
            post(commands::run_image_interactive::<C, T>),
        )
        .route("/commands/inspect-image", post(commands::inspect_image::<C, T>))
        .route("/commands/tag-suggestion", get(commands::tag_suggestion::<C, T>))
        .route("/commands/tag-image", post(commands::tag_image::<C, T>))
        .route("/commands/remove-images", post(commands::remove_images::<C, T>))
        .route("/commands/open-shell", post(commands::open_shell::<C, T>))
        .route("/commands/show-logs", post(commands::show_logs::<C, T>))
        .route(
            "/commands/remove-container",
            post(commands::remove_container::<C, T>),
        )
        .route("/settings", get(settings::get_settings::<C, T>))
        .route("/settings/grouping", put(settings::set_grouping::<C, T>))
        .route(
            "/settings/default-registry",
            put(settings::set_default_registry::<C, T>),
        )
        .with_state(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::container_client::ImageDescriptor;
    use crate::models::grouping::ImageGrouping;
    use crate::models::platform::HostPlatform;
    use crate::models::settings::Settings;
    use crate::models::tree::ViewKind;
    use crate::repositories::container_client::MockContainerClient;
    use crate::repositories::terminal::MockTerminalLauncher;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn context() -> ExplorerContext<MockContainerClient, MockTerminalLauncher> {
        let mut client = MockContainerClient::new();
        client.expect_list_images().returning(|| {
            Ok(vec![ImageDescriptor {
                id: "sha256:1".to_string(),
                repo_tags: vec!["foo:1".to_string()],
                created: 1,
            }])
        });
        client.expect_list_containers().returning(|| Ok(vec![]));
        let settings = Settings {
            group_images_by: ImageGrouping::None,
            ..Settings::default()
        };
        ExplorerContext::new(
            Arc::new(client),
            Arc::new(MockTerminalLauncher::new()),
            settings,
            HostPlatform::Linux,
        )
    }

    async fn send(
        ctx: &ExplorerContext<MockContainerClient, MockTerminalLauncher>,
        request: Request<Body>,
    ) -> (StatusCode, Value) {
        let response = router(ctx.clone()).oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn put_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("PUT")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn given_images_view_when_root_children_requested_then_rendered_items_are_returned() {
        let ctx = context();

        let (status, body) = send(&ctx, get("/views/images/children")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["id"], "sha256:1foo:1");
        assert_eq!(body[0]["label"], "foo:1");
        assert_eq!(body[0]["contextValue"], "image");
        assert_eq!(body.as_array().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn given_unknown_node_when_children_requested_then_not_found_problem() {
        let ctx = context();

        let (status, body) = send(&ctx, get("/views/images/children?node=missing")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "C100");
    }

    #[tokio::test(start_paused = true)]
    async fn given_containers_view_when_visibility_toggled_then_polling_state_is_returned() {
        let ctx = context();

        let (status, shown) = send(
            &ctx,
            put_json("/views/containers/visibility", json!({ "visible": true })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(shown, json!({ "result": true }));
        assert!(ctx.is_view_polling(ViewKind::Containers).await);
        assert!(!ctx.is_view_polling(ViewKind::Images).await);

        let (_, hidden) = send(
            &ctx,
            put_json("/views/containers/visibility", json!({ "visible": false })),
        )
        .await;
        assert_eq!(hidden, json!({ "result": false }));
        assert!(!ctx.is_view_polling(ViewKind::Containers).await);
    }

    #[tokio::test]
    async fn given_grouping_request_when_applied_then_settings_and_tree_follow() {
        let ctx = context();

        let (status, settings) = send(
            &ctx,
            put_json("/settings/grouping", json!({ "group_images_by": "repository" })),
        )
        .await;
        let (_, roots) = send(&ctx, get("/views/images/children")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(settings["group_images_by"], "repository");
        assert_eq!(roots[0]["id"], "group:foo");
    }
}
