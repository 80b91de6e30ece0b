//! Node endpoints (read-only)

use super::{resource_path, Client, NODE_API_PREFIX};
use crate::common::ResourceKind;
use crate::transport::Transport;
use crate::types::{ListOptions, Node};
use crate::Result;

impl<T: Transport> Client<T> {
    pub async fn node_list(&self, opts: &ListOptions) -> Result<Vec<Node>> {
        self.list(NODE_API_PREFIX, opts.to_query()).await
    }

    pub async fn node(&self, name: &str) -> Result<Node> {
        self.get(&resource_path(NODE_API_PREFIX, ResourceKind::Node, name)?)
            .await
    }
}
