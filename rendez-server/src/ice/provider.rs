use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

/// Upstream issuer of short-lived NAT-traversal relay credentials.
///
/// Invoked once per request, independent of any room or connection state.
/// The credential list is passed through to the caller verbatim.
#[async_trait]
pub trait IceServerProvider: Send + Sync {
    async fn fetch_ice_servers(&self) -> Result<Vec<Value>>;
}

const TWILIO_API_BASE: &str = "https://api.twilio.com/2010-04-01/Accounts";

/// Twilio network-traversal token issuer.
pub struct TwilioProvider {
    http: reqwest::Client,
    account_sid: String,
    auth_token: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    ice_servers: Vec<Value>,
}

impl TwilioProvider {
    pub fn new(account_sid: String, auth_token: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            account_sid,
            auth_token,
        }
    }
}

#[async_trait]
impl IceServerProvider for TwilioProvider {
    async fn fetch_ice_servers(&self) -> Result<Vec<Value>> {
        let url = format!("{TWILIO_API_BASE}/{}/Tokens.json", self.account_sid);

        let response = self
            .http
            .post(&url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .send()
            .await
            .context("token request failed")?
            .error_for_status()
            .context("token request rejected")?;

        let token: TokenResponse = response
            .json()
            .await
            .context("malformed token response")?;

        Ok(token.ice_servers)
    }
}
