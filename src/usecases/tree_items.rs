use chrono::{DateTime, Utc};

use crate::models::container_client::{ContainerDescriptor, ContainerState};
use crate::models::grouping::ImageGrouping;
use crate::models::tree::{CollapsibleState, Icon, ImageGroup, ImageRow, TreeItem, TreeNode};
use crate::usecases::age::describe_age;
use crate::usecases::image_label::format_image_label;

pub const IMAGE_CONTEXT_VALUE: &str = "image";
pub const IMAGE_GROUP_CONTEXT_VALUE: &str = "imageGroup";
pub const LINK_CONTEXT_VALUE: &str = "openUrl";

pub fn tree_item(node: &TreeNode) -> TreeItem {
    tree_item_at(node, Utc::now())
}

/// Renders `node` for the host. `now` anchors the image age descriptions.
pub fn tree_item_at(node: &TreeNode, now: DateTime<Utc>) -> TreeItem {
    match node {
        TreeNode::Image { row, grouping } => image_item(row, *grouping, now),
        TreeNode::ImageGroup(group) => group_item(group),
        TreeNode::Container(container) => container_item(container),
        TreeNode::ErrorInfo {
            message,
            detail,
            context_value,
        } => TreeItem {
            id: node.id(),
            label: message.clone(),
            description: Some(String::new()),
            tooltip: Some(detail.clone()),
            icon: Icon::Warning,
            collapsible_state: CollapsibleState::None,
            context_value: context_value.clone(),
            url: None,
        },
        TreeNode::Link { label, url } => TreeItem {
            id: node.id(),
            label: label.clone(),
            description: None,
            tooltip: Some(url.clone()),
            icon: Icon::Link,
            collapsible_state: CollapsibleState::None,
            context_value: LINK_CONTEXT_VALUE.to_string(),
            url: Some(url.clone()),
        },
    }
}

fn image_item(row: &ImageRow, grouping: ImageGrouping, now: DateTime<Utc>) -> TreeItem {
    TreeItem {
        id: row.id(),
        label: format_image_label(&row.full_tag, &row.image, grouping.label_template()),
        description: Some(describe_age(row.image.created, now)),
        tooltip: Some(row.full_tag.clone()),
        icon: Icon::Application,
        collapsible_state: CollapsibleState::None,
        context_value: IMAGE_CONTEXT_VALUE.to_string(),
        url: None,
    }
}

fn group_item(group: &ImageGroup) -> TreeItem {
    let icon = match group.grouping {
        ImageGrouping::Repository => Icon::Repository,
        _ => Icon::ApplicationGroup,
    };

    TreeItem {
        id: group.id(),
        label: group.key.clone(),
        description: None,
        tooltip: None,
        icon,
        collapsible_state: CollapsibleState::Collapsed,
        context_value: IMAGE_GROUP_CONTEXT_VALUE.to_string(),
        url: None,
    }
}

fn container_item(container: &ContainerDescriptor) -> TreeItem {
    let name = container
        .names
        .first()
        .map(|name| name.strip_prefix('/').unwrap_or(name.as_str()))
        .unwrap_or_default();

    TreeItem {
        id: container.id.clone(),
        label: format!("{} ({}) ({})", container.image, name, container.status),
        description: None,
        tooltip: None,
        icon: container_icon(container),
        collapsible_state: CollapsibleState::None,
        context_value: format!("{}Container", container.state.as_str()),
        url: None,
    }
}

fn container_icon(container: &ContainerDescriptor) -> Icon {
    if container.status.contains("(unhealthy)") {
        return Icon::StatusWarning;
    }

    match container.state {
        ContainerState::Created | ContainerState::Dead | ContainerState::Exited => {
            Icon::StatusStop
        }
        ContainerState::Paused => Icon::StatusPause,
        ContainerState::Restarting => Icon::Restart,
        _ => Icon::StatusRun,
    }
}
