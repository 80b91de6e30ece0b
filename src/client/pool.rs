//! Pool endpoints

use reqwest::Method;

use super::{resource_path, Client, POOL_API_PREFIX};
use crate::common::ResourceKind;
use crate::transport::Transport;
use crate::types::{ListOptions, Pool, PoolCreateOptions};
use crate::Result;

fn pool_path(name: &str) -> Result<String> {
    resource_path(POOL_API_PREFIX, ResourceKind::Pool, name)
}

impl<T: Transport> Client<T> {
    pub async fn pool_list(&self, opts: &ListOptions) -> Result<Vec<Pool>> {
        self.list(POOL_API_PREFIX, opts.to_query()).await
    }

    /// Create a pool and return its id.
    pub async fn pool_create(&self, opts: &PoolCreateOptions) -> Result<String> {
        let id: String = self.create(POOL_API_PREFIX, opts).await?;
        tracing::info!(name = %opts.name, %id, "pool created");
        Ok(id)
    }

    pub async fn pool(&self, name: &str) -> Result<Pool> {
        self.get(&pool_path(name)?).await
    }

    /// Delete a pool. A pool still backing volumes answers 409, reported as
    /// [`ApiError::PoolInUse`](crate::ApiError::PoolInUse).
    pub async fn pool_delete(&self, name: &str) -> Result<()> {
        self.exec(Method::DELETE, &pool_path(name)?, None::<&()>, ResourceKind::Pool)
            .await
    }
}
