use tracing::{debug, warn};

use crate::models::platform::HostPlatform;
use crate::models::tree::TreeNode;
use crate::repositories::container_client::ContainerClient;
use crate::usecases::fallback::docker_error_nodes;
use crate::usecases::sorting::sort_by_created_desc;

/// Fetches containers newest first, or the connection fallback rows.
pub async fn load_container_nodes<C>(client: &C, host: HostPlatform) -> Vec<TreeNode>
where
    C: ContainerClient + ?Sized,
{
    match client.list_containers().await {
        Ok(containers) => {
            debug!(count = containers.len(), "Fetched containers");
            let mut nodes: Vec<TreeNode> =
                containers.into_iter().map(TreeNode::Container).collect();
            sort_by_created_desc(&mut nodes);
            nodes
        }
        Err(e) => {
            warn!("Container fetch failed, showing fallback rows: {}", e);
            docker_error_nodes(&e.to_string(), host)
        }
    }
}
