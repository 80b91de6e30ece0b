//! Volume endpoints

use reqwest::Method;

use super::{resource_path, Client, VOLUME_API_PREFIX};
use crate::common::ResourceKind;
use crate::transport::Transport;
use crate::types::{ListOptions, Volume, VolumeCreateOptions, VolumeMountOptions, VolumeUpdateOptions};
use crate::Result;

fn volume_path(name: &str) -> Result<String> {
    resource_path(VOLUME_API_PREFIX, ResourceKind::Volume, name)
}

impl<T: Transport> Client<T> {
    /// List volumes matching `opts`.
    pub async fn volume_list(&self, opts: &ListOptions) -> Result<Vec<Volume>> {
        self.list(VOLUME_API_PREFIX, opts.to_query()).await
    }

    /// Create a volume and return the id the server assigned to it.
    pub async fn volume_create(&self, opts: &VolumeCreateOptions) -> Result<String> {
        let id: String = self.create(VOLUME_API_PREFIX, opts).await?;
        tracing::info!(name = %opts.name, %id, "volume created");
        Ok(id)
    }

    /// Fetch a single volume by name.
    pub async fn volume(&self, name: &str) -> Result<Volume> {
        self.get(&volume_path(name)?).await
    }

    pub async fn volume_update(&self, name: &str, opts: &VolumeUpdateOptions) -> Result<()> {
        self.exec(Method::PUT, &volume_path(name)?, Some(opts), ResourceKind::Volume)
            .await
    }

    /// Delete a volume.
    ///
    /// Fails with [`ApiError::NoSuchVolume`](crate::ApiError::NoSuchVolume)
    /// on 404 and [`ApiError::VolumeInUse`](crate::ApiError::VolumeInUse)
    /// on 409.
    pub async fn volume_delete(&self, name: &str) -> Result<()> {
        self.exec(Method::DELETE, &volume_path(name)?, None::<&()>, ResourceKind::Volume)
            .await
    }

    /// Record `opts.client` as mounting the volume.
    pub async fn volume_mount(&self, name: &str, opts: &VolumeMountOptions) -> Result<()> {
        let path = format!("{}/mount", volume_path(name)?);
        self.exec(Method::POST, &path, Some(opts), ResourceKind::Volume)
            .await
    }

    pub async fn volume_unmount(&self, name: &str) -> Result<()> {
        let path = format!("{}/unmount", volume_path(name)?);
        self.exec(Method::POST, &path, None::<&()>, ResourceKind::Volume)
            .await
    }
}
