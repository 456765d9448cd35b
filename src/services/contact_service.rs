use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::config::settings::ContactConfig;
use crate::error::Result;
use crate::models::contact::{ContactMessage, ContactOutcome, ContactRequest};
use crate::store::{self, keys, KeyValueStore};
use crate::validation;

/// Delivery hook invoked after a contact message is persisted. Delivery is
/// best-effort: a failure is reported in the outcome but never fails the
/// submission itself.
#[async_trait]
pub trait ContactNotifier: Send + Sync {
    async fn notify(&self, recipient: &str, message: &ContactMessage) -> Result<()>;
}

/// Notifier that records the message in the log stream
pub struct LogNotifier;

#[async_trait]
impl ContactNotifier for LogNotifier {
    async fn notify(&self, recipient: &str, message: &ContactMessage) -> Result<()> {
        info!(
            recipient,
            from = %message.email,
            name = %message.name,
            "nuevo mensaje de contacto: {}",
            message.message
        );
        Ok(())
    }
}

/// Contact-form intake: validate, persist, notify
pub struct ContactService {
    store: Arc<dyn KeyValueStore>,
    config: ContactConfig,
    notifier: Arc<dyn ContactNotifier>,
}

impl ContactService {
    /// Create a new contact service with the given store and notifier
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        config: ContactConfig,
        notifier: Arc<dyn ContactNotifier>,
    ) -> Self {
        Self {
            store,
            config,
            notifier,
        }
    }

    /// Persist a submission and hand it to the notifier. All fields are
    /// required; nothing is stored when validation fails.
    pub async fn submit(&self, request: ContactRequest) -> Result<ContactOutcome> {
        validation::validate_required("name", &request.name)?;
        validation::validate_email(&request.email)?;
        validation::validate_required("phone", &request.phone)?;
        validation::validate_required("message", &request.message)?;

        let mut messages: Vec<ContactMessage> =
            store::read_collection(self.store.as_ref(), keys::CONTACTS).await?;

        let id = messages.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        let message = ContactMessage {
            id,
            name: request.name,
            email: request.email,
            phone: request.phone,
            message: request.message,
            created_at: crate::utils::time::now_rfc3339(),
        };

        messages.push(message.clone());
        store::write_collection(self.store.as_ref(), keys::CONTACTS, &messages).await?;

        let email_sent = match self.notifier.notify(&self.config.recipient, &message).await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "contact notification failed");
                false
            }
        };

        Ok(ContactOutcome {
            message,
            email_sent,
        })
    }

    /// Newest-first listing of stored messages
    pub async fn recent(&self, limit: Option<usize>) -> Result<Vec<ContactMessage>> {
        let mut messages: Vec<ContactMessage> =
            store::read_collection(self.store.as_ref(), keys::CONTACTS).await?;
        messages.sort_by(|a, b| b.id.cmp(&a.id));
        messages.truncate(limit.unwrap_or(self.config.recent_limit));
        Ok(messages)
    }
}
