//! Alert notification system
//!
//! Webhook delivery plus a background dispatcher so a slow endpoint never
//! delays the next check cycle.

use super::types::Alert;
use crate::config::WebhookConfig;
use crate::error::NotifyError;
use serde::Serialize;
use std::sync::mpsc::{self, Sender};
use std::thread::{self, JoinHandle};

/// Outcome of a notification attempt that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// The message reached the endpoint
    Sent,
    /// No endpoint is configured; nothing was attempted
    Skipped,
}

/// Notification channel trait
pub trait Notifier: Send + Sync {
    /// Deliver one message
    fn notify(&self, message: &str) -> Result<Delivery, NotifyError>;

    /// Channel name for identification
    fn name(&self) -> &str;
}

/// Receives alerts from the check loop
pub trait AlertSink {
    /// Hand an alert off for delivery without waiting on it
    fn dispatch(&self, alert: &Alert);
}

/// JSON body posted to the webhook
#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    content: &'a str,
}

/// Webhook notifier
///
/// Posts `{"content": message}`, which is what Discord-style webhooks expect.
pub struct WebhookNotifier {
    url: Option<String>,
    client: reqwest::blocking::Client,
}

impl WebhookNotifier {
    /// Create a notifier from configuration
    ///
    /// Fails when the HTTP client cannot be initialized.
    pub fn new(config: &WebhookConfig) -> Result<Self, NotifyError> {
        let client = reqwest::blocking::Client::builder().build()?;
        Ok(Self::with_client(config, client))
    }

    /// Create a notifier with a preconfigured HTTP client
    pub fn with_client(config: &WebhookConfig, client: reqwest::blocking::Client) -> Self {
        let url = config
            .is_configured()
            .then(|| config.url.trim().to_string());
        Self { url, client }
    }

    /// Whether messages will actually be sent
    pub fn is_configured(&self) -> bool {
        self.url.is_some()
    }
}

impl Notifier for WebhookNotifier {
    fn notify(&self, message: &str) -> Result<Delivery, NotifyError> {
        let Some(url) = &self.url else {
            log::warn!("Webhook URL not configured or is invalid. Skipping notification.");
            return Ok(Delivery::Skipped);
        };

        let response = self
            .client
            .post(url.as_str())
            .json(&WebhookPayload { content: message })
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Status(status.as_u16()));
        }

        log::info!("Webhook notification sent: {}", message);
        Ok(Delivery::Sent)
    }

    fn name(&self) -> &str {
        "webhook"
    }
}

/// Background notification dispatcher
///
/// Messages are queued to a single worker thread that delivers them in
/// order. Failures are logged and dropped. Dropping the dispatcher lets the
/// worker drain the queue and then joins it.
pub struct NotificationDispatcher {
    sender: Option<Sender<String>>,
    worker: Option<JoinHandle<()>>,
}

impl NotificationDispatcher {
    /// Start the worker thread
    pub fn spawn<N>(notifier: N) -> std::io::Result<Self>
    where
        N: Notifier + 'static,
    {
        let (sender, receiver) = mpsc::channel::<String>();

        let worker = thread::Builder::new()
            .name("hostwatch-notify".to_string())
            .spawn(move || {
                for message in receiver {
                    if let Err(e) = notifier.notify(&message) {
                        log::error!("Failed to notify via {}: {}", notifier.name(), e);
                    }
                }
                log::debug!("Notification worker stopped");
            })?;

        Ok(Self {
            sender: Some(sender),
            worker: Some(worker),
        })
    }

    /// Queue a message for delivery
    pub fn send(&self, message: String) -> Result<(), NotifyError> {
        self.sender
            .as_ref()
            .ok_or(NotifyError::WorkerStopped)?
            .send(message)
            .map_err(|_| NotifyError::WorkerStopped)
    }
}

impl AlertSink for NotificationDispatcher {
    fn dispatch(&self, alert: &Alert) {
        if let Err(e) = self.send(alert.message.clone()) {
            log::error!("Failed to queue {} alert: {}", alert.metric, e);
        }
    }
}

impl Drop for NotificationDispatcher {
    fn drop(&mut self) {
        // Closing the channel ends the worker loop once the queue is empty
        self.sender.take();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::error!("Notification worker panicked");
            }
        }
    }
}
