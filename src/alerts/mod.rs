//! Alert and notification system
//!
//! Provides threshold/cooldown alerting with webhook delivery.

mod manager;
mod notifier;
mod policy;
mod template;
mod types;

pub use manager::AlertManager;
pub use notifier::{AlertSink, Delivery, NotificationDispatcher, Notifier, WebhookNotifier};
pub use policy::{evaluate, PolicyConfig};
pub use template::{MessageTemplate, THRESHOLD_PLACEHOLDER};
pub use types::{Alert, CooldownState, Threshold, ThresholdConfig};
