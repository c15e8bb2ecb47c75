use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::{broadcast, Mutex, RwLock};
use tracing::debug;

use crate::errors::command::CommandError;
use crate::models::platform::HostPlatform;
use crate::models::settings::Settings;
use crate::models::tree::{TreeChange, TreeNode, ViewKind};
use crate::repositories::container_client::ContainerClient;
use crate::usecases::containers::load_container_nodes;
use crate::usecases::images::load_image_nodes;
use crate::usecases::refresh::{RebuildOutcome, Refreshable};

/// One tree view: the last built snapshot plus the means to rebuild it.
pub struct ExplorerView<C>
where
    C: ContainerClient + 'static,
{
    kind: ViewKind,
    client: Arc<C>,
    settings: Arc<RwLock<Settings>>,
    host: HostPlatform,
    snapshot: RwLock<Option<Vec<TreeNode>>>,
    /// Serializes rebuilds so an older load never overwrites a newer snapshot.
    rebuild_lock: Mutex<()>,
    changes: broadcast::Sender<TreeChange>,
}

impl<C> ExplorerView<C>
where
    C: ContainerClient + 'static,
{
    pub fn new(
        kind: ViewKind,
        client: Arc<C>,
        settings: Arc<RwLock<Settings>>,
        host: HostPlatform,
        changes: broadcast::Sender<TreeChange>,
    ) -> Self {
        Self {
            kind,
            client,
            settings,
            host,
            snapshot: RwLock::new(None),
            rebuild_lock: Mutex::new(()),
            changes,
        }
    }

    async fn load(&self) -> Vec<TreeNode> {
        match self.kind {
            ViewKind::Images => {
                let grouping = self.settings.read().await.group_images_by;
                load_image_nodes(self.client.as_ref(), grouping, self.host).await
            }
            ViewKind::Containers => load_container_nodes(self.client.as_ref(), self.host).await,
        }
    }

    /// Children of `parent`, or the root nodes when `parent` is `None`.
    /// Root nodes are loaded on first use and served from the snapshot after that.
    pub async fn get_children(&self, parent: Option<&str>) -> Result<Vec<TreeNode>, CommandError> {
        match parent {
            None => Ok(self.root_nodes().await),
            Some(id) => Ok(self.find_node(id).await?.children()),
        }
    }

    async fn root_nodes(&self) -> Vec<TreeNode> {
        if let Some(nodes) = self.snapshot.read().await.as_ref() {
            return nodes.clone();
        }

        let nodes = self.load().await;
        self.snapshot.write().await.get_or_insert(nodes).clone()
    }

    pub async fn find_node(&self, id: &str) -> Result<TreeNode, CommandError> {
        self.root_nodes()
            .await
            .iter()
            .find_map(|node| node.find(id))
            .ok_or_else(|| CommandError::NodeNotFound {
                view: self.kind.as_str().to_string(),
                id: id.to_string(),
            })
    }

    /// Rebuilds after a settings change or a mutation. Waits for a rebuild already
    /// in flight, since that one may have read the state from before the change.
    pub async fn refresh(&self) {
        let _rebuilding = self.rebuild_lock.lock().await;
        self.replace_snapshot().await;
    }

    async fn replace_snapshot(&self) {
        let nodes = self.load().await;
        debug!(view = self.kind.as_str(), count = nodes.len(), "Rebuilt tree snapshot");
        *self.snapshot.write().await = Some(nodes);
        self.notify_changed(None);
    }

    pub fn notify_changed(&self, node: Option<String>) {
        // No subscribers is fine.
        let _ = self.changes.send(TreeChange {
            view: self.kind,
            node,
        });
    }
}

#[async_trait]
impl<C> Refreshable for ExplorerView<C>
where
    C: ContainerClient + 'static,
{
    fn name(&self) -> &str {
        self.kind.as_str()
    }

    async fn rebuild(&self) -> RebuildOutcome {
        let Ok(_rebuilding) = self.rebuild_lock.try_lock() else {
            return RebuildOutcome::Skipped;
        };

        self.replace_snapshot().await;
        RebuildOutcome::Rebuilt
    }
}
