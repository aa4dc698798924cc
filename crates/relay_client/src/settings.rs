use std::{collections::HashMap, fs};

use serde::Deserialize;

use crate::error::RelayError;

pub const DEFAULT_API_BASE_URL: &str = "https://api.emailjs.com";

#[derive(Debug, Clone, Deserialize)]
pub struct RelaySettings {
    pub api_base_url: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl Default for RelaySettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
            service_id: "service_aixqk9g".into(),
            template_id: "template_gtbz8a7".into(),
            public_key: "c_l3SCXhBxY5u23kC".into(),
        }
    }
}

impl RelaySettings {
    pub fn validate(&self) -> Result<(), RelayError> {
        if self.api_base_url.trim().is_empty() {
            return Err(RelayError::Settings("api_base_url is empty".into()));
        }
        if self.service_id.trim().is_empty() {
            return Err(RelayError::Settings("service_id is empty".into()));
        }
        if self.template_id.trim().is_empty() {
            return Err(RelayError::Settings("template_id is empty".into()));
        }
        if self.public_key.trim().is_empty() {
            return Err(RelayError::Settings("public_key is empty".into()));
        }
        Ok(())
    }

    pub fn send_endpoint(&self) -> String {
        format!(
            "{}/api/v1.0/email/send",
            self.api_base_url.trim_end_matches('/')
        )
    }
}

/// Defaults, then `portfolio.toml` in the working directory, then environment
/// variables. Both the plain and the `APP__`-prefixed variable names are
/// honored.
pub fn load_settings() -> RelaySettings {
    let mut settings = RelaySettings::default();

    if let Ok(raw) = fs::read_to_string("portfolio.toml") {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("relay_api_base_url") {
                settings.api_base_url = v.clone();
            }
            if let Some(v) = file_cfg.get("relay_service_id") {
                settings.service_id = v.clone();
            }
            if let Some(v) = file_cfg.get("relay_template_id") {
                settings.template_id = v.clone();
            }
            if let Some(v) = file_cfg.get("relay_public_key") {
                settings.public_key = v.clone();
            }
        }
    }

    if let Ok(v) = std::env::var("RELAY_API_BASE_URL") {
        settings.api_base_url = v;
    }
    if let Ok(v) = std::env::var("APP__RELAY_API_BASE_URL") {
        settings.api_base_url = v;
    }

    if let Ok(v) = std::env::var("RELAY_SERVICE_ID") {
        settings.service_id = v;
    }
    if let Ok(v) = std::env::var("APP__RELAY_SERVICE_ID") {
        settings.service_id = v;
    }

    if let Ok(v) = std::env::var("RELAY_TEMPLATE_ID") {
        settings.template_id = v;
    }
    if let Ok(v) = std::env::var("APP__RELAY_TEMPLATE_ID") {
        settings.template_id = v;
    }

    if let Ok(v) = std::env::var("RELAY_PUBLIC_KEY") {
        settings.public_key = v;
    }
    if let Ok(v) = std::env::var("APP__RELAY_PUBLIC_KEY") {
        settings.public_key = v;
    }

    settings
}
