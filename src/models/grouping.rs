use serde::{Deserialize, Serialize};

/// How image rows are bucketed under parent nodes in the images view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageGrouping {
    None,
    ImageId,
    #[default]
    Repository,
    RepositoryName,
}

impl ImageGrouping {
    /// Template used to derive a row's group key, `None` when rows are not grouped.
    pub fn group_template(&self) -> Option<&'static str> {
        match self {
            ImageGrouping::None => None,
            ImageGrouping::ImageId => Some("{shortImageId}"),
            ImageGrouping::Repository => Some("{repository}"),
            ImageGrouping::RepositoryName => Some("{repositoryName}"),
        }
    }

    pub fn label_template(&self) -> &'static str {
        match self {
            ImageGrouping::Repository => "{tag}",
            _ => "{fullTag}",
        }
    }
}
