use crate::models::platform::HostPlatform;
use crate::models::tree::TreeNode;

pub const CONNECTION_ERROR_CONTEXT_VALUE: &str = "dockerConnectionError";

const CONNECTION_MESSAGE: &str = "Failed to connect. Is Docker installed and running?";
const INSTALL_DOCKER_URL: &str = "https://aka.ms/AA37qtj";
const TROUBLESHOOTING_URL: &str = "https://aka.ms/AA37qt2";
const LINUX_POST_INSTALL_URL: &str = "https://aka.ms/AA37yk6";

/// Rows shown in place of engine data when the engine cannot be reached.
/// The order is fixed and must not be re-sorted.
pub fn docker_error_nodes(error: &str, host: HostPlatform) -> Vec<TreeNode> {
    let mut nodes = vec![
        TreeNode::ErrorInfo {
            message: CONNECTION_MESSAGE.to_string(),
            detail: error.to_string(),
            context_value: CONNECTION_ERROR_CONTEXT_VALUE.to_string(),
        },
        link("Install Docker...", INSTALL_DOCKER_URL),
        link("Additional Troubleshooting...", TROUBLESHOOTING_URL),
    ];

    if host.is_linux() {
        nodes.push(link(
            "Manage Docker as a non-root user on Linux...",
            LINUX_POST_INSTALL_URL,
        ));
    }

    nodes
}

fn link(label: &str, url: &str) -> TreeNode {
    TreeNode::Link {
        label: label.to_string(),
        url: url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(nodes: &[TreeNode]) -> Vec<&str> {
        nodes
            .iter()
            .map(|node| match node {
                TreeNode::ErrorInfo { message, .. } => message.as_str(),
                TreeNode::Link { label, .. } => label.as_str(),
                _ => "unexpected",
            })
            .collect()
    }

    #[test]
    fn given_non_linux_host_when_built_then_three_rows_in_fixed_order() {
        let nodes = docker_error_nodes("connection refused", HostPlatform::MacOs);

        assert_eq!(
            labels(&nodes),
            vec![
                "Failed to connect. Is Docker installed and running?",
                "Install Docker...",
                "Additional Troubleshooting...",
            ]
        );
    }

    #[test]
    fn given_linux_host_when_built_then_non_root_link_is_appended() {
        let nodes = docker_error_nodes("permission denied", HostPlatform::Linux);

        assert_eq!(nodes.len(), 4);
        assert_eq!(
            nodes[3],
            TreeNode::Link {
                label: "Manage Docker as a non-root user on Linux...".to_string(),
                url: "https://aka.ms/AA37yk6".to_string(),
            }
        );
    }

    #[test]
    fn given_error_when_built_then_detail_carries_error_text() {
        let nodes = docker_error_nodes("socket not found", HostPlatform::Windows);

        assert!(matches!(
            &nodes[0],
            TreeNode::ErrorInfo { detail, context_value, .. }
                if detail == "socket not found" && context_value == "dockerConnectionError"
        ));
    }
}
