//! Process-wide configuration, loaded once at startup.

use anyhow::{Context, Result};
use std::env;
use url::Url;

/// Default manager contact, used when `MANAGER_USERNAME` is not set
const DEFAULT_MANAGER_USERNAME: &str = "@sameer_shahoud";

/// Read-only configuration shared by every handler
#[derive(Debug, Clone)]
pub struct Config {
    /// Telegram bot token
    pub telegram_token: String,
    /// Hugging Face API token for the analysis calls
    pub hf_token: String,
    /// Model identifier passed to the completion endpoint
    pub model_name: String,
    /// Image reference for the payment QR code
    pub qr_code_url: Url,
    /// Telegram handle shown in the payment instructions
    pub manager_username: String,
}

impl Config {
    /// Load the configuration from the environment.
    ///
    /// Any missing required variable aborts startup with an error naming
    /// the variable.
    pub fn from_env() -> Result<Self> {
        let telegram_token = require("TELEGRAM_TOKEN")?;
        let hf_token = require("HF_TOKEN")?;
        let model_name = require("MODEL_NAME")?;
        let qr_code_url = require("QR_CODE_URL")?;
        let qr_code_url = Url::parse(&qr_code_url)
            .with_context(|| format!("QR_CODE_URL is not a valid URL: {qr_code_url}"))?;
        let manager_username =
            env::var("MANAGER_USERNAME").unwrap_or_else(|_| DEFAULT_MANAGER_USERNAME.to_string());

        Ok(Self {
            telegram_token,
            hf_token,
            model_name,
            qr_code_url,
            manager_username,
        })
    }
}

fn require(name: &str) -> Result<String> {
    env::var(name).with_context(|| format!("{name} must be set"))
}
