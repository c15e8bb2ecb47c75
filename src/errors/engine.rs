use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to connect to the container engine: {reason}")]
    ConnectionFailed { reason: String },

    #[error("Failed to list images: {reason}")]
    ListImagesFailed { reason: String },

    #[error("Failed to list containers: {reason}")]
    ListContainersFailed { reason: String },

    #[error("Failed to remove image {id}: {reason}")]
    RemoveImageFailed { id: String, reason: String },

    #[error("Failed to remove container {id}: {reason}")]
    RemoveContainerFailed { id: String, reason: String },

    #[error("Failed to tag image {id} as {repo}:{tag}: {reason}")]
    TagImageFailed {
        id: String,
        repo: String,
        tag: String,
        reason: String,
    },

    #[error("Failed to inspect image {id}: {reason}")]
    InspectImageFailed { id: String, reason: String },

    #[error("Failed to read engine info: {reason}")]
    InfoFailed { reason: String },
}

impl EngineError {
    pub fn error_code(&self) -> &'static str {
        use crate::errors::codes::ErrorCode;

        match self {
            EngineError::ConnectionFailed { .. } => ErrorCode::ENGINE_CONNECTION_FAILED,
            EngineError::ListImagesFailed { .. } => ErrorCode::ENGINE_LIST_IMAGES_FAILED,
            EngineError::ListContainersFailed { .. } => ErrorCode::ENGINE_LIST_CONTAINERS_FAILED,
            EngineError::RemoveImageFailed { .. } => ErrorCode::ENGINE_REMOVE_IMAGE_FAILED,
            EngineError::RemoveContainerFailed { .. } => {
                ErrorCode::ENGINE_REMOVE_CONTAINER_FAILED
            }
            EngineError::TagImageFailed { .. } => ErrorCode::ENGINE_TAG_IMAGE_FAILED,
            EngineError::InspectImageFailed { .. } => ErrorCode::ENGINE_INSPECT_IMAGE_FAILED,
            EngineError::InfoFailed { .. } => ErrorCode::ENGINE_INFO_FAILED,
        }
    }
}
