use tracing::{debug, warn};

use crate::models::grouping::ImageGrouping;
use crate::models::platform::HostPlatform;
use crate::models::tree::TreeNode;
use crate::repositories::container_client::ContainerClient;
use crate::usecases::fallback::docker_error_nodes;
use crate::usecases::grouping::{expand_image_rows, group_image_rows};
use crate::usecases::sorting::sort_image_nodes;

/// Fetches images and arranges them for the images view. A failed fetch yields
/// the connection fallback rows instead.
pub async fn load_image_nodes<C>(
    client: &C,
    grouping: ImageGrouping,
    host: HostPlatform,
) -> Vec<TreeNode>
where
    C: ContainerClient + ?Sized,
{
    match client.list_images().await {
        Ok(images) => {
            debug!(count = images.len(), ?grouping, "Fetched images");
            sort_image_nodes(group_image_rows(expand_image_rows(images), grouping))
        }
        Err(e) => {
            warn!("Image fetch failed, showing fallback rows: {}", e);
            docker_error_nodes(&e.to_string(), host)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::engine::EngineError;
    use crate::models::container_client::ImageDescriptor;
    use crate::repositories::container_client::MockContainerClient;

    fn image(id: &str, tags: &[&str], created: i64) -> ImageDescriptor {
        ImageDescriptor {
            id: id.to_string(),
            repo_tags: tags.iter().map(|t| t.to_string()).collect(),
            created,
        }
    }

    fn failing_client() -> MockContainerClient {
        let mut client = MockContainerClient::new();
        client.expect_list_images().returning(|| {
            Err(EngineError::ListImagesFailed {
                reason: "connect ENOENT /var/run/docker.sock".to_string(),
            })
        });
        client
    }

    #[tokio::test]
    async fn given_fetch_failure_when_loaded_then_fallback_rows_for_every_grouping() {
        let client = failing_client();

        for grouping in [
            ImageGrouping::None,
            ImageGrouping::ImageId,
            ImageGrouping::Repository,
            ImageGrouping::RepositoryName,
        ] {
            let linux = load_image_nodes(&client, grouping, HostPlatform::Linux).await;
            let windows = load_image_nodes(&client, grouping, HostPlatform::Windows).await;

            assert_eq!(linux.len(), 4);
            assert_eq!(windows.len(), 3);
            assert!(matches!(linux[0], TreeNode::ErrorInfo { .. }));
            assert!(linux[1..].iter().all(|n| matches!(n, TreeNode::Link { .. })));
        }
    }

    #[tokio::test]
    async fn given_images_when_loaded_ungrouped_then_newest_rows_first() {
        let mut client = MockContainerClient::new();
        client.expect_list_images().returning(|| {
            Ok(vec![
                image("sha256:old", &["old:1"], 100),
                image("sha256:new", &["new:1", "new:2"], 200),
            ])
        });

        let nodes = load_image_nodes(&client, ImageGrouping::None, HostPlatform::Linux).await;

        let ids: Vec<String> = nodes.iter().map(TreeNode::id).collect();
        assert_eq!(
            ids,
            vec!["sha256:newnew:1", "sha256:newnew:2", "sha256:oldold:1"]
        );
    }

    #[tokio::test]
    async fn given_images_when_loaded_by_repository_then_groups_follow_discovery_order() {
        let mut client = MockContainerClient::new();
        client.expect_list_images().returning(|| {
            Ok(vec![
                image("sha256:1", &["web:1"], 100),
                image("sha256:2", &["api:1"], 300),
                image("sha256:3", &["web:2"], 200),
            ])
        });

        let nodes =
            load_image_nodes(&client, ImageGrouping::Repository, HostPlatform::Linux).await;

        let ids: Vec<String> = nodes.iter().map(TreeNode::id).collect();
        assert_eq!(ids, vec!["group:web", "group:api"]);
        let web_children: Vec<String> = nodes[0].children().iter().map(TreeNode::id).collect();
        assert_eq!(web_children, vec!["sha256:3web:2", "sha256:1web:1"]);
    }
}
