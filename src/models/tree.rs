use serde::{Deserialize, Serialize};

use crate::models::container_client::{ContainerDescriptor, ImageDescriptor};
use crate::models::grouping::ImageGrouping;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    Images,
    Containers,
}

impl ViewKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewKind::Images => "images",
            ViewKind::Containers => "containers",
        }
    }
}

/// One tag of one image. Untagged images get a single row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRow {
    pub image: ImageDescriptor,
    pub full_tag: String,
}

impl ImageRow {
    pub fn id(&self) -> String {
        format!("{}{}", self.image.id, self.full_tag)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageGroup {
    pub key: String,
    pub grouping: ImageGrouping,
    pub rows: Vec<ImageRow>,
}

impl ImageGroup {
    pub fn id(&self) -> String {
        format!("group:{}", self.key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    Image {
        row: ImageRow,
        grouping: ImageGrouping,
    },
    ImageGroup(ImageGroup),
    Container(ContainerDescriptor),
    ErrorInfo {
        message: String,
        detail: String,
        context_value: String,
    },
    Link {
        label: String,
        url: String,
    },
}

impl TreeNode {
    pub fn id(&self) -> String {
        match self {
            TreeNode::Image { row, .. } => row.id(),
            TreeNode::ImageGroup(group) => group.id(),
            TreeNode::Container(container) => container.id.clone(),
            TreeNode::ErrorInfo { context_value, .. } => context_value.clone(),
            TreeNode::Link { url, .. } => url.clone(),
        }
    }

    /// Creation time used for ordering, `None` for nodes that keep their position.
    pub fn created(&self) -> Option<i64> {
        match self {
            TreeNode::Image { row, .. } => Some(row.image.created),
            TreeNode::Container(container) => Some(container.created),
            _ => None,
        }
    }

    pub fn children(&self) -> Vec<TreeNode> {
        match self {
            TreeNode::ImageGroup(group) => group
                .rows
                .iter()
                .map(|row| TreeNode::Image {
                    row: row.clone(),
                    grouping: group.grouping,
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Searches this node and its children for `id`.
    pub fn find(&self, id: &str) -> Option<TreeNode> {
        if self.id() == id {
            return Some(self.clone());
        }
        self.children().into_iter().find(|child| child.id() == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CollapsibleState {
    None,
    Collapsed,
    Expanded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Icon {
    Application,
    ApplicationGroup,
    Repository,
    StatusRun,
    StatusStop,
    StatusPause,
    StatusWarning,
    Restart,
    Warning,
    Link,
}

/// What the host needs to render one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeItem {
    pub id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    pub icon: Icon,
    pub collapsible_state: CollapsibleState,
    pub context_value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Fired when a subtree changed. `node: None` means the whole view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeChange {
    pub view: ViewKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node: Option<String>,
}
