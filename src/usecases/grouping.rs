use std::collections::HashMap;

use crate::models::container_client::{ImageDescriptor, UNTAGGED_FULL_TAG};
use crate::models::grouping::ImageGrouping;
use crate::models::tree::{ImageGroup, ImageRow, TreeNode};
use crate::usecases::image_label::format_image_label;

/// One row per repository tag, or a single `<none>:<none>` row for untagged images.
pub fn expand_image_rows(images: Vec<ImageDescriptor>) -> Vec<ImageRow> {
    images
        .into_iter()
        .flat_map(|image| {
            let tags = if image.repo_tags.is_empty() {
                vec![UNTAGGED_FULL_TAG.to_string()]
            } else {
                image.repo_tags.clone()
            };
            tags.into_iter().map(move |full_tag| ImageRow {
                image: image.clone(),
                full_tag,
            })
        })
        .collect()
}

/// Empty keys count as ungrouped.
pub fn group_key(row: &ImageRow, grouping: ImageGrouping) -> Option<String> {
    grouping
        .group_template()
        .map(|template| format_image_label(&row.full_tag, &row.image, template))
        .filter(|key| !key.is_empty())
}

/// Buckets rows by group key in first-seen order. Ungrouped rows become
/// top-level image nodes at the position their bucket was first seen.
pub fn group_image_rows(rows: Vec<ImageRow>, grouping: ImageGrouping) -> Vec<TreeNode> {
    let mut buckets: Vec<(Option<String>, Vec<ImageRow>)> = Vec::new();
    let mut positions: HashMap<Option<String>, usize> = HashMap::new();

    for row in rows {
        let key = group_key(&row, grouping);
        let position = *positions.entry(key.clone()).or_insert_with(|| {
            buckets.push((key, Vec::new()));
            buckets.len() - 1
        });
        buckets[position].1.push(row);
    }

    buckets
        .into_iter()
        .flat_map(|(key, rows)| match key {
            None => rows
                .into_iter()
                .map(|row| TreeNode::Image { row, grouping })
                .collect::<Vec<_>>(),
            Some(key) => vec![TreeNode::ImageGroup(ImageGroup {
                key,
                grouping,
                rows,
            })],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(id: &str, tags: &[&str], created: i64) -> ImageDescriptor {
        ImageDescriptor {
            id: id.to_string(),
            repo_tags: tags.iter().map(|t| t.to_string()).collect(),
            created,
        }
    }

    fn sample_images() -> Vec<ImageDescriptor> {
        vec![
            image("sha256:aaaaaaaaaaaaaaaa", &["foo:latest", "foo:v1"], 100),
            image("sha256:bbbbbbbbbbbbbbbb", &[], 200),
            image("sha256:cccccccccccccccc", &["registry.io/team/foo:2"], 300),
        ]
    }

    #[test]
    fn given_ungrouped_mode_when_grouped_then_leaf_count_is_sum_of_tags_or_one() {
        let images = sample_images();
        let expected: usize = images.iter().map(|i| i.repo_tags.len().max(1)).sum();

        let nodes = group_image_rows(expand_image_rows(images), ImageGrouping::None);

        assert_eq!(nodes.len(), expected);
        assert!(nodes
            .iter()
            .all(|node| matches!(node, TreeNode::Image { .. })));
    }

    #[test]
    fn given_image_without_tags_when_expanded_then_single_none_row() {
        let rows = expand_image_rows(vec![image("sha256:bbbb", &[], 1)]);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].full_tag, "<none>:<none>");
    }

    #[test]
    fn given_two_tags_of_one_repository_when_grouped_by_repository_then_one_group_with_two_rows() {
        let images = vec![image("sha256:abc123", &["foo:latest", "foo:v1"], 1)];

        let nodes = group_image_rows(expand_image_rows(images), ImageGrouping::Repository);

        assert_eq!(nodes.len(), 1);
        match &nodes[0] {
            TreeNode::ImageGroup(group) => {
                assert_eq!(group.key, "foo");
                assert_eq!(group.rows.len(), 2);
            }
            other => panic!("expected a group, got {:?}", other),
        }
    }

    #[test]
    fn given_repository_name_mode_when_grouped_then_registry_prefix_is_ignored() {
        let nodes = group_image_rows(
            expand_image_rows(sample_images()),
            ImageGrouping::RepositoryName,
        );

        let keys: Vec<String> = nodes.iter().map(TreeNode::id).collect();
        assert_eq!(keys, vec!["group:foo", "group:<none>"]);
        match &nodes[0] {
            TreeNode::ImageGroup(group) => assert_eq!(group.rows.len(), 3),
            other => panic!("expected a group, got {:?}", other),
        }
    }

    #[test]
    fn given_image_id_mode_when_grouped_then_tags_of_one_image_share_a_group() {
        let nodes = group_image_rows(expand_image_rows(sample_images()), ImageGrouping::ImageId);

        let keys: Vec<String> = nodes.iter().map(TreeNode::id).collect();
        assert_eq!(
            keys,
            vec!["group:aaaaaaaaaaaa", "group:bbbbbbbbbbbb", "group:cccccccccccc"]
        );
    }

    #[test]
    fn given_empty_group_key_when_grouped_then_row_falls_through_to_top_level() {
        let images = vec![
            image("sha256:1111", &[":orphan"], 1),
            image("sha256:2222", &["bar:1"], 2),
        ];

        let nodes = group_image_rows(expand_image_rows(images), ImageGrouping::Repository);

        assert_eq!(nodes.len(), 2);
        assert!(matches!(&nodes[0], TreeNode::Image { row, .. } if row.full_tag == ":orphan"));
        assert!(matches!(&nodes[1], TreeNode::ImageGroup(group) if group.key == "bar"));
    }
}
