use async_trait::async_trait;
use bollard::container::{ListContainersOptions, RemoveContainerOptions};
use bollard::image::{ListImagesOptions, RemoveImageOptions, TagImageOptions};
use bollard::Docker;
use std::collections::HashMap;
use tracing::{debug, info};

use crate::errors::engine::EngineError;
use crate::models::container_client::{ContainerDescriptor, EngineType, ImageDescriptor};
use crate::repositories::container_client::ContainerClient;

const CONTAINER_STATUSES: [&str; 6] = [
    "created",
    "restarting",
    "running",
    "paused",
    "exited",
    "dead",
];

#[derive(Debug, Clone)]
pub struct DockerClient {
    docker: Docker,
}

impl DockerClient {
    pub fn new() -> Result<DockerClient, EngineError> {
        info!("Creating Docker client");
        let docker =
            Docker::connect_with_local_defaults().map_err(|e| EngineError::ConnectionFailed {
                reason: e.to_string(),
            })?;
        Ok(Self { docker })
    }
}

#[async_trait]
impl ContainerClient for DockerClient {
    async fn list_images(&self) -> Result<Vec<ImageDescriptor>, EngineError> {
        debug!("Listing images");
        let filters = HashMap::from([("dangling".to_string(), vec!["false".to_string()])]);
        let options = Some(ListImagesOptions::<String> {
            filters,
            ..Default::default()
        });

        let images = self
            .docker
            .list_images(options)
            .await
            .map_err(|e| EngineError::ListImagesFailed {
                reason: e.to_string(),
            })?
            .into_iter()
            .map(ImageDescriptor::from)
            .collect();

        Ok(images)
    }

    async fn list_containers(&self) -> Result<Vec<ContainerDescriptor>, EngineError> {
        debug!("Listing containers");
        let filters = HashMap::from([(
            "status".to_string(),
            CONTAINER_STATUSES.iter().map(|s| s.to_string()).collect(),
        )]);
        let options = Some(ListContainersOptions::<String> {
            all: true,
            filters,
            ..Default::default()
        });

        let containers = self
            .docker
            .list_containers(options)
            .await
            .map_err(|e| EngineError::ListContainersFailed {
                reason: e.to_string(),
            })?
            .into_iter()
            .map(ContainerDescriptor::from)
            .collect();

        Ok(containers)
    }

    async fn remove_image(&self, id: &str) -> Result<(), EngineError> {
        info!("Removing image: {}", id);
        let options = Some(RemoveImageOptions {
            force: true,
            ..Default::default()
        });

        self.docker
            .remove_image(id, options, None)
            .await
            .map_err(|e| EngineError::RemoveImageFailed {
                id: id.to_string(),
                reason: e.to_string(),
            })?;

        Ok(())
    }

    async fn remove_container(&self, id: &str, force: bool) -> Result<(), EngineError> {
        info!("Removing container: {} (force: {})", id, force);
        let options = Some(RemoveContainerOptions {
            force,
            ..Default::default()
        });

        self.docker
            .remove_container(id, options)
            .await
            .map_err(|e| EngineError::RemoveContainerFailed {
                id: id.to_string(),
                reason: e.to_string(),
            })
    }

    async fn tag_image(&self, id: &str, repo: &str, tag: &str) -> Result<(), EngineError> {
        info!("Tagging image {} as {}:{}", id, repo, tag);
        let options = Some(TagImageOptions { repo, tag });

        self.docker
            .tag_image(id, options)
            .await
            .map_err(|e| EngineError::TagImageFailed {
                id: id.to_string(),
                repo: repo.to_string(),
                tag: tag.to_string(),
                reason: e.to_string(),
            })
    }

    async fn inspect_image(&self, id: &str) -> Result<serde_json::Value, EngineError> {
        debug!("Inspecting image: {}", id);
        let inspect_failed = |reason: String| EngineError::InspectImageFailed {
            id: id.to_string(),
            reason,
        };

        let inspect = self
            .docker
            .inspect_image(id)
            .await
            .map_err(|e| inspect_failed(e.to_string()))?;

        serde_json::to_value(inspect).map_err(|e| inspect_failed(e.to_string()))
    }

    async fn get_exposed_ports(&self, image_id: &str) -> Result<Vec<String>, EngineError> {
        let inspect = self.docker.inspect_image(image_id).await.map_err(|e| {
            EngineError::InspectImageFailed {
                id: image_id.to_string(),
                reason: e.to_string(),
            }
        })?;

        let mut ports: Vec<String> = inspect
            .config
            .and_then(|config| config.exposed_ports)
            .map(|ports| ports.into_keys().collect())
            .unwrap_or_default();
        ports.sort();

        Ok(ports)
    }

    async fn get_engine_type(&self) -> Result<EngineType, EngineError> {
        let info = self
            .docker
            .info()
            .await
            .map_err(|e| EngineError::InfoFailed {
                reason: e.to_string(),
            })?;

        Ok(EngineType::from_os_type(info.os_type.as_deref()))
    }
}
