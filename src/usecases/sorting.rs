use std::cmp::Reverse;

use crate::models::tree::TreeNode;

/// Stable sort, newest first. Nodes without a creation time sort as oldest.
pub fn sort_by_created_desc(nodes: &mut [TreeNode]) {
    nodes.sort_by_key(|node| Reverse(node.created().unwrap_or(i64::MIN)));
}

/// Orders a freshly grouped images view: ungrouped rows first, newest first,
/// then groups in discovery order with their rows sorted the same way.
pub fn sort_image_nodes(nodes: Vec<TreeNode>) -> Vec<TreeNode> {
    let (mut leaves, groups): (Vec<TreeNode>, Vec<TreeNode>) = nodes
        .into_iter()
        .partition(|node| !matches!(node, TreeNode::ImageGroup(_)));

    sort_by_created_desc(&mut leaves);

    let groups = groups.into_iter().map(|node| match node {
        TreeNode::ImageGroup(mut group) => {
            group
                .rows
                .sort_by_key(|row| Reverse(row.image.created));
            TreeNode::ImageGroup(group)
        }
        other => other,
    });

    leaves.into_iter().chain(groups).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::container_client::ImageDescriptor;
    use crate::models::grouping::ImageGrouping;
    use crate::models::tree::{ImageGroup, ImageRow};

    fn row(id: &str, tag: &str, created: i64) -> ImageRow {
        ImageRow {
            image: ImageDescriptor {
                id: id.to_string(),
                repo_tags: vec![tag.to_string()],
                created,
            },
            full_tag: tag.to_string(),
        }
    }

    fn leaf(id: &str, tag: &str, created: i64) -> TreeNode {
        TreeNode::Image {
            row: row(id, tag, created),
            grouping: ImageGrouping::None,
        }
    }

    fn ids(nodes: &[TreeNode]) -> Vec<String> {
        nodes.iter().map(TreeNode::id).collect()
    }

    #[test]
    fn given_two_timestamps_when_sorted_then_newest_first() {
        let mut nodes = vec![leaf("a", "old:1", 100), leaf("b", "new:1", 200)];

        sort_by_created_desc(&mut nodes);

        assert_eq!(ids(&nodes), vec!["bnew:1", "aold:1"]);
    }

    #[test]
    fn given_ties_when_sorted_then_input_order_is_kept() {
        let mut nodes = vec![
            leaf("a", "x:1", 100),
            leaf("b", "y:1", 300),
            leaf("c", "z:1", 100),
            leaf("d", "w:1", 100),
        ];

        sort_by_created_desc(&mut nodes);

        assert_eq!(ids(&nodes), vec!["by:1", "ax:1", "cz:1", "dw:1"]);
    }

    #[test]
    fn given_sorted_nodes_when_sorted_again_then_order_is_unchanged() {
        let mut once = vec![
            leaf("a", "x:1", 5),
            leaf("b", "y:1", 5),
            leaf("c", "z:1", 9),
        ];
        sort_by_created_desc(&mut once);
        let mut twice = once.clone();

        sort_by_created_desc(&mut twice);

        assert_eq!(once, twice);
    }

    #[test]
    fn given_groups_and_leaves_when_sorted_then_leaves_come_first_and_groups_keep_order() {
        let nodes = vec![
            TreeNode::ImageGroup(ImageGroup {
                key: "zeta".to_string(),
                grouping: ImageGrouping::Repository,
                rows: vec![row("a", "zeta:1", 1), row("b", "zeta:2", 2)],
            }),
            leaf("c", ":x", 10),
            TreeNode::ImageGroup(ImageGroup {
                key: "alpha".to_string(),
                grouping: ImageGrouping::Repository,
                rows: vec![row("d", "alpha:1", 7)],
            }),
            leaf("e", ":y", 20),
        ];

        let sorted = sort_image_nodes(nodes);

        assert_eq!(ids(&sorted), vec!["e:y", "c:x", "group:zeta", "group:alpha"]);
        match &sorted[2] {
            TreeNode::ImageGroup(group) => {
                let tags: Vec<&str> = group.rows.iter().map(|r| r.full_tag.as_str()).collect();
                assert_eq!(tags, vec!["zeta:2", "zeta:1"]);
            }
            other => panic!("expected a group, got {:?}", other),
        }
    }
}
