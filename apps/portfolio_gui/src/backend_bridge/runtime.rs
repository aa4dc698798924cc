//! Backend worker: owns the tokio runtime and the email-relay client, drains
//! the UI command queue one command at a time.

use std::thread;

use crossbeam_channel::{Receiver, Sender};
use relay_client::{EmailJsClient, EmailRelay, MissingEmailRelay};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::media;

pub fn spawn_backend_thread(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let _ = ui_tx.try_send(UiEvent::Info("Backend worker starting...".to_string()));
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::Info(format!(
                    "Backend worker startup failure: {err}"
                )));
                return;
            }
        };

        runtime.block_on(async move {
            let relay: Box<dyn EmailRelay> = match EmailJsClient::new(relay_client::load_settings())
            {
                Ok(client) => Box::new(client),
                Err(err) => {
                    // Submissions will surface the failure banner instead of
                    // silently dropping messages.
                    tracing::error!("email relay unavailable: {err}");
                    Box::new(MissingEmailRelay)
                }
            };

            let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));

            while let Ok(cmd) = cmd_rx.recv() {
                handle_command(cmd, relay.as_ref(), &ui_tx).await;
            }
        });
    });
}

/// The submission guard upstream guarantees at most one in-flight contact
/// message, so commands are processed strictly in order here.
async fn handle_command(cmd: BackendCommand, relay: &dyn EmailRelay, ui_tx: &Sender<UiEvent>) {
    match cmd {
        BackendCommand::SendContactMessage { message } => match relay.send(&message).await {
            Ok(()) => {
                tracing::info!("contact message delivered through email relay");
                let _ = ui_tx.try_send(UiEvent::ContactSendOk);
            }
            Err(err) => {
                tracing::warn!(transport = err.is_transport(), "contact message failed: {err}");
                let _ = ui_tx.try_send(UiEvent::ContactSendFailed {
                    reason: err.to_string(),
                });
            }
        },
        BackendCommand::LoadImage { key, path } => match media::load_rgba_image(&path).await {
            Ok(image) => {
                let _ = ui_tx.try_send(UiEvent::ImageLoaded { key, image });
            }
            Err(err) => {
                tracing::warn!(?key, "image load failed: {err:#}");
                let _ = ui_tx.try_send(UiEvent::ImageLoadFailed {
                    key,
                    reason: format!("{err:#}"),
                });
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use crossbeam_channel::bounded;
    use relay_client::RelayError;
    use shared::domain::ContactMessage;

    use super::*;
    use crate::backend_bridge::commands::ImageKey;

    struct ScriptedRelay {
        fail_with: Option<String>,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl EmailRelay for ScriptedRelay {
        async fn send(&self, _message: &ContactMessage) -> Result<(), RelayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.fail_with {
                Some(reason) => Err(RelayError::Settings(reason.clone())),
                None => Ok(()),
            }
        }
    }

    fn sample_message() -> ContactMessage {
        ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[tokio::test]
    async fn relay_success_produces_a_single_ok_event() {
        let calls = Arc::new(AtomicUsize::new(0));
        let relay = ScriptedRelay {
            fail_with: None,
            calls: calls.clone(),
        };
        let (ui_tx, ui_rx) = bounded(8);

        handle_command(
            BackendCommand::SendContactMessage {
                message: sample_message(),
            },
            &relay,
            &ui_tx,
        )
        .await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(matches!(ui_rx.try_recv(), Ok(UiEvent::ContactSendOk)));
        assert!(ui_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn relay_failure_produces_a_failed_event_with_the_cause() {
        let relay = ScriptedRelay {
            fail_with: Some("stubbed outage".to_string()),
            calls: Arc::new(AtomicUsize::new(0)),
        };
        let (ui_tx, ui_rx) = bounded(8);

        handle_command(
            BackendCommand::SendContactMessage {
                message: sample_message(),
            },
            &relay,
            &ui_tx,
        )
        .await;

        match ui_rx.try_recv() {
            Ok(UiEvent::ContactSendFailed { reason }) => {
                assert!(reason.contains("stubbed outage"));
            }
            _ => panic!("expected ContactSendFailed"),
        }
    }

    #[tokio::test]
    async fn unreadable_image_produces_a_failed_event_for_its_key() {
        let relay = ScriptedRelay {
            fail_with: None,
            calls: Arc::new(AtomicUsize::new(0)),
        };
        let (ui_tx, ui_rx) = bounded(8);

        handle_command(
            BackendCommand::LoadImage {
                key: ImageKey::ProjectPreview(2),
                path: "assets/missing.jpg".to_string(),
            },
            &relay,
            &ui_tx,
        )
        .await;

        match ui_rx.try_recv() {
            Ok(UiEvent::ImageLoadFailed { key, .. }) => {
                assert_eq!(key, ImageKey::ProjectPreview(2));
            }
            _ => panic!("expected ImageLoadFailed"),
        }
    }
}
