use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};
use tracing::info;

use crate::models::grouping::ImageGrouping;
use crate::models::platform::HostPlatform;
use crate::models::settings::Settings;
use crate::models::tree::{TreeChange, ViewKind};
use crate::repositories::container_client::ContainerClient;
use crate::repositories::terminal::TerminalLauncher;
use crate::usecases::explorer::ExplorerView;
use crate::usecases::refresh::RefreshLoop;

const CHANGE_CHANNEL_CAPACITY: usize = 64;

/// Everything an explorer operation needs, built once at startup and passed
/// to every handler and command.
pub struct ExplorerContext<C, T>
where
    C: ContainerClient + 'static,
    T: TerminalLauncher + 'static,
{
    pub client: Arc<C>,
    pub terminal: Arc<T>,
    pub settings: Arc<RwLock<Settings>>,
    pub images: Arc<ExplorerView<C>>,
    pub containers: Arc<ExplorerView<C>>,
    image_refresh: Arc<RefreshLoop<ExplorerView<C>>>,
    container_refresh: Arc<RefreshLoop<ExplorerView<C>>>,
    changes: broadcast::Sender<TreeChange>,
}

impl<C, T> Clone for ExplorerContext<C, T>
where
    C: ContainerClient + 'static,
    T: TerminalLauncher + 'static,
{
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            terminal: Arc::clone(&self.terminal),
            settings: Arc::clone(&self.settings),
            images: Arc::clone(&self.images),
            containers: Arc::clone(&self.containers),
            image_refresh: Arc::clone(&self.image_refresh),
            container_refresh: Arc::clone(&self.container_refresh),
            changes: self.changes.clone(),
        }
    }
}

impl<C, T> ExplorerContext<C, T>
where
    C: ContainerClient + 'static,
    T: TerminalLauncher + 'static,
{
    pub fn new(client: Arc<C>, terminal: Arc<T>, settings: Settings, host: HostPlatform) -> Self {
        let settings = Arc::new(RwLock::new(settings));
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);

        let view = |kind| {
            Arc::new(ExplorerView::new(
                kind,
                Arc::clone(&client),
                Arc::clone(&settings),
                host,
                changes.clone(),
            ))
        };
        let images = view(ViewKind::Images);
        let containers = view(ViewKind::Containers);

        Self {
            image_refresh: Arc::new(RefreshLoop::new(Arc::clone(&images))),
            container_refresh: Arc::new(RefreshLoop::new(Arc::clone(&containers))),
            client,
            terminal,
            settings,
            images,
            containers,
            changes,
        }
    }

    pub fn view(&self, kind: ViewKind) -> &Arc<ExplorerView<C>> {
        match kind {
            ViewKind::Images => &self.images,
            ViewKind::Containers => &self.containers,
        }
    }

    fn refresh_loop(&self, kind: ViewKind) -> &Arc<RefreshLoop<ExplorerView<C>>> {
        match kind {
            ViewKind::Images => &self.image_refresh,
            ViewKind::Containers => &self.container_refresh,
        }
    }

    pub async fn set_view_visible(&self, kind: ViewKind, visible: bool) {
        let interval = self.settings.read().await.refresh_interval;
        self.refresh_loop(kind).set_visible(visible, interval).await;
    }

    pub async fn is_view_polling(&self, kind: ViewKind) -> bool {
        self.refresh_loop(kind).is_polling().await
    }

    pub async fn refresh(&self, kind: ViewKind) {
        self.view(kind).refresh().await
    }

    pub fn subscribe(&self) -> broadcast::Receiver<TreeChange> {
        self.changes.subscribe()
    }

    pub async fn settings(&self) -> Settings {
        self.settings.read().await.clone()
    }

    pub async fn set_grouping(&self, grouping: ImageGrouping) {
        info!(?grouping, "Grouping images");
        self.settings.write().await.group_images_by = grouping;
        self.images.refresh().await;
    }

    pub async fn set_registry_as_default(&self, registry: &str) {
        info!("Updated the default registry path to \"{}\"", registry);
        self.settings.write().await.default_registry_path = registry.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::engine::EngineError;
    use crate::models::container_client::{ContainerDescriptor, EngineType, ImageDescriptor};
    use crate::models::tree::TreeNode;
    use crate::repositories::terminal::MockTerminalLauncher;
    use crate::usecases::refresh::{RebuildOutcome, Refreshable};
    use async_trait::async_trait;
    use std::time::Duration;

    struct SlowImagesClient;

    #[async_trait]
    impl ContainerClient for SlowImagesClient {
        async fn list_images(&self) -> Result<Vec<ImageDescriptor>, EngineError> {
            tokio::time::sleep(Duration::from_millis(500)).await;
            Ok(vec![ImageDescriptor {
                id: "sha256:1".to_string(),
                repo_tags: vec!["foo:latest".to_string(), "foo:v1".to_string()],
                created: 1,
            }])
        }

        async fn list_containers(&self) -> Result<Vec<ContainerDescriptor>, EngineError> {
            Ok(vec![])
        }

        async fn remove_image(&self, _id: &str) -> Result<(), EngineError> {
            Ok(())
        }

        async fn remove_container(&self, _id: &str, _force: bool) -> Result<(), EngineError> {
            Ok(())
        }

        async fn tag_image(&self, _id: &str, _repo: &str, _tag: &str) -> Result<(), EngineError> {
            Ok(())
        }

        async fn inspect_image(&self, _id: &str) -> Result<serde_json::Value, EngineError> {
            Ok(serde_json::Value::Null)
        }

        async fn get_exposed_ports(&self, _image_id: &str) -> Result<Vec<String>, EngineError> {
            Ok(vec![])
        }

        async fn get_engine_type(&self) -> Result<EngineType, EngineError> {
            Ok(EngineType::Linux)
        }
    }

    fn context() -> ExplorerContext<SlowImagesClient, MockTerminalLauncher> {
        let settings = Settings {
            group_images_by: ImageGrouping::None,
            ..Settings::default()
        };
        ExplorerContext::new(
            Arc::new(SlowImagesClient),
            Arc::new(MockTerminalLauncher::new()),
            settings,
            HostPlatform::Linux,
        )
    }

    async fn root_ids(ctx: &ExplorerContext<SlowImagesClient, MockTerminalLauncher>) -> Vec<String> {
        let roots = ctx.images.get_children(None).await.unwrap();
        roots.iter().map(TreeNode::id).collect()
    }

    #[tokio::test(start_paused = true)]
    async fn given_tick_in_flight_when_grouping_changes_then_tree_uses_new_grouping() {
        let ctx = context();

        let (tick, ()) = tokio::join!(ctx.images.rebuild(), async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            ctx.set_grouping(ImageGrouping::Repository).await;
        });

        assert_eq!(tick, RebuildOutcome::Rebuilt);
        assert_eq!(ctx.settings().await.group_images_by, ImageGrouping::Repository);
        assert_eq!(root_ids(&ctx).await, vec!["group:foo"]);
    }

    #[tokio::test(start_paused = true)]
    async fn given_refresh_in_flight_when_grouping_changes_then_change_is_not_lost() {
        let ctx = context();

        tokio::join!(ctx.refresh(ViewKind::Images), async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            ctx.set_grouping(ImageGrouping::Repository).await;
        });

        assert_eq!(root_ids(&ctx).await, vec!["group:foo"]);
    }

    #[tokio::test(start_paused = true)]
    async fn given_explicit_refresh_in_flight_when_tick_fires_then_tick_is_skipped() {
        let ctx = context();

        let ((), tick) = tokio::join!(ctx.refresh(ViewKind::Images), async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            ctx.images.rebuild().await
        });

        assert_eq!(tick, RebuildOutcome::Skipped);
    }
}
