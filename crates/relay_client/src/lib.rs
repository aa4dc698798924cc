use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use shared::domain::ContactMessage;
use tracing::{debug, warn};

pub mod error;
pub mod settings;

pub use error::RelayError;
pub use settings::{load_settings, RelaySettings};

/// Seam for the outbound email-relay call. The caller awaits exactly one
/// resolution per submission; success carries no payload beyond "did not
/// error".
#[async_trait]
pub trait EmailRelay: Send + Sync {
    async fn send(&self, message: &ContactMessage) -> Result<(), RelayError>;
}

/// Null relay installed when no usable settings exist. Every submission fails
/// with a settings error instead of silently dropping the message.
pub struct MissingEmailRelay;

#[async_trait]
impl EmailRelay for MissingEmailRelay {
    async fn send(&self, _message: &ContactMessage) -> Result<(), RelayError> {
        Err(RelayError::Settings("no email relay configured".into()))
    }
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactMessage,
}

/// Client for the EmailJS-compatible REST API. One instance per backend
/// worker; the inner reqwest client pools connections.
pub struct EmailJsClient {
    http: Client,
    settings: RelaySettings,
}

impl EmailJsClient {
    pub fn new(settings: RelaySettings) -> Result<Self, RelayError> {
        settings.validate()?;
        Ok(Self {
            http: Client::new(),
            settings,
        })
    }
}

#[async_trait]
impl EmailRelay for EmailJsClient {
    async fn send(&self, message: &ContactMessage) -> Result<(), RelayError> {
        let body = SendEmailRequest {
            service_id: &self.settings.service_id,
            template_id: &self.settings.template_id,
            user_id: &self.settings.public_key,
            template_params: message,
        };

        debug!(
            service = %self.settings.service_id,
            template = %self.settings.template_id,
            "sending contact message through email relay"
        );

        let response = self
            .http
            .post(self.settings.send_endpoint())
            .json(&body)
            .send()
            .await
            .map_err(|source| RelayError::Transport { source })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "email relay rejected contact message");
            return Err(RelayError::Rejected { status });
        }

        debug!("email relay accepted contact message");
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
