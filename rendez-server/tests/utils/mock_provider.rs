use anyhow::{Result, anyhow};
use async_trait::async_trait;
use rendez_server::IceServerProvider;
use serde_json::Value;

/// Canned relay-credential provider for exercising the HTTP surface without
/// an upstream issuer.
pub struct MockIceProvider {
    servers: Option<Vec<Value>>,
}

impl MockIceProvider {
    pub fn with_servers(servers: Vec<Value>) -> Self {
        Self {
            servers: Some(servers),
        }
    }

    pub fn failing() -> Self {
        Self { servers: None }
    }
}

#[async_trait]
impl IceServerProvider for MockIceProvider {
    async fn fetch_ice_servers(&self) -> Result<Vec<Value>> {
        match &self.servers {
            Some(servers) => Ok(servers.clone()),
            None => Err(anyhow!("upstream issuer unavailable")),
        }
    }
}
