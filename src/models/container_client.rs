use serde::{Deserialize, Serialize};

pub const UNTAGGED_FULL_TAG: &str = "<none>:<none>";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageDescriptor {
    pub id: String,
    pub repo_tags: Vec<String>,
    /// Unix seconds.
    pub created: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContainerDescriptor {
    pub id: String,
    pub image: String,
    pub names: Vec<String>,
    pub status: String,
    pub state: ContainerState,
    pub created: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerState {
    Created,
    Restarting,
    Running,
    Removing,
    Paused,
    Exited,
    Dead,
    Unknown,
}

impl ContainerState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerState::Created => "created",
            ContainerState::Restarting => "restarting",
            ContainerState::Running => "running",
            ContainerState::Removing => "removing",
            ContainerState::Paused => "paused",
            ContainerState::Exited => "exited",
            ContainerState::Dead => "dead",
            ContainerState::Unknown => "unknown",
        }
    }
}

impl From<&str> for ContainerState {
    fn from(value: &str) -> Self {
        match value {
            "created" => ContainerState::Created,
            "restarting" => ContainerState::Restarting,
            "running" => ContainerState::Running,
            "removing" => ContainerState::Removing,
            "paused" => ContainerState::Paused,
            "exited" => ContainerState::Exited,
            "dead" => ContainerState::Dead,
            _ => ContainerState::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EngineType {
    Linux,
    Windows,
}

impl EngineType {
    pub fn from_os_type(os_type: Option<&str>) -> Self {
        match os_type {
            Some(os) if os.eq_ignore_ascii_case("windows") => EngineType::Windows,
            _ => EngineType::Linux,
        }
    }
}

impl From<bollard::models::ImageSummary> for ImageDescriptor {
    fn from(value: bollard::models::ImageSummary) -> Self {
        ImageDescriptor {
            id: value.id,
            repo_tags: value.repo_tags,
            created: value.created,
        }
    }
}

impl From<bollard::models::ContainerSummary> for ContainerDescriptor {
    fn from(value: bollard::models::ContainerSummary) -> Self {
        ContainerDescriptor {
            id: value.id.unwrap_or_default(),
            image: value.image.unwrap_or_default(),
            names: value.names.unwrap_or_default(),
            status: value.status.unwrap_or_default(),
            state: value
                .state
                .as_deref()
                .map(ContainerState::from)
                .unwrap_or(ContainerState::Unknown),
            created: value.created.unwrap_or_default(),
        }
    }
}
