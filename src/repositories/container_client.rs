use async_trait::async_trait;
use mockall::automock;

use crate::errors::engine::EngineError;
use crate::models::container_client::{ContainerDescriptor, EngineType, ImageDescriptor};

#[automock]
#[async_trait]
pub trait ContainerClient: Send + Sync {
    /// Tagged images, dangling ones excluded.
    async fn list_images(&self) -> Result<Vec<ImageDescriptor>, EngineError>;
    /// Containers in every lifecycle state.
    async fn list_containers(&self) -> Result<Vec<ContainerDescriptor>, EngineError>;
    async fn remove_image(&self, id: &str) -> Result<(), EngineError>;
    async fn remove_container(&self, id: &str, force: bool) -> Result<(), EngineError>;
    async fn tag_image(&self, id: &str, repo: &str, tag: &str) -> Result<(), EngineError>;
    async fn inspect_image(&self, id: &str) -> Result<serde_json::Value, EngineError>;
    /// Ports declared with `EXPOSE`, formatted as `number/protocol`.
    async fn get_exposed_ports(&self, image_id: &str) -> Result<Vec<String>, EngineError>;
    async fn get_engine_type(&self) -> Result<EngineType, EngineError>;
}
