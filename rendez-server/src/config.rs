use anyhow::{Context, Result};
use std::env;

const DEFAULT_PORT: u16 = 8080;

/// Process configuration, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub twilio_account_sid: String,
    pub twilio_auth_token: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            port: parse_port(env::var("PORT").ok())?,
            twilio_account_sid: env::var("TWILIO_ACCOUNT_SID")
                .context("TWILIO_ACCOUNT_SID is not set")?,
            twilio_auth_token: env::var("TWILIO_AUTH_TOKEN")
                .context("TWILIO_AUTH_TOKEN is not set")?,
        })
    }
}

fn parse_port(raw: Option<String>) -> Result<u16> {
    match raw {
        Some(raw) => raw.parse().context("PORT is not a valid port number"),
        None => Ok(DEFAULT_PORT),
    }
}
