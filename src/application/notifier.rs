//! # Notification Dispatcher
//!
//! Sends lifecycle messages outside the current conversation: new-request alerts to the
//! admin and status updates to customers. Delivery is best-effort; failures are logged
//! and never reach the caller.

use crate::domain::traits::Messenger;
use crate::domain::types::{Reply, Request};
use crate::strings::notifications;
use std::sync::Arc;

pub struct NotificationDispatcher {
    messenger: Arc<dyn Messenger>,
    admin: Option<String>,
}

impl NotificationDispatcher {
    pub fn new(messenger: Arc<dyn Messenger>, admin: Option<String>) -> Self {
        Self { messenger, admin }
    }

    pub async fn notify_admin(&self, request: &Request) {
        let Some(admin) = &self.admin else {
            tracing::warn!(
                "No admin configured, request #{} was not forwarded",
                request.id
            );
            return;
        };
        let reply = notifications::admin_new_request(request);
        match self.messenger.send_to_user(admin, &reply).await {
            Ok(()) => tracing::info!("Request #{} forwarded to admin {}", request.id, admin),
            Err(e) => tracing::error!(
                "Failed to notify admin {} about request #{}: {}",
                admin,
                request.id,
                e
            ),
        }
    }

    pub async fn notify_customer(&self, user_id: &str, reply: &Reply) {
        match self.messenger.send_to_user(user_id, reply).await {
            Ok(()) => tracing::info!("Customer {} notified", user_id),
            Err(e) => tracing::error!("Failed to notify customer {}: {}", user_id, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{RequestData, RequestStatus};
    use crate::testing::RecordingMessenger;

    fn request() -> Request {
        Request {
            id: 1760860800000,
            user_id: "@client:example.org".to_string(),
            user_name: "Client".to_string(),
            created_at: chrono::Utc::now(),
            status: RequestStatus::New,
            data: RequestData {
                service: "Stretch ceilings".to_string(),
                area: 14.0,
                address: "Baltakhinova 17".to_string(),
                datetime: "Next week".to_string(),
                contacts: "Client +7 983".to_string(),
                comment: Some("Two rooms".to_string()),
            },
        }
    }

    #[tokio::test]
    async fn test_admin_receives_request_with_controls() {
        let messenger = Arc::new(RecordingMessenger::default());
        let dispatcher =
            NotificationDispatcher::new(messenger.clone(), Some("@owner:example.org".to_string()));
        dispatcher.notify_admin(&request()).await;

        let sent = messenger.sent_to("@owner:example.org");
        assert_eq!(sent.len(), 1);
        assert!(sent[0].text.contains("#1760860800000"));
        assert!(sent[0].text.contains("Baltakhinova 17"));
        assert!(sent[0].text.contains("Two rooms"));
        let buttons: usize = sent[0].keyboard.iter().map(|row| row.len()).sum();
        assert_eq!(buttons, 4);
    }

    #[tokio::test]
    async fn test_missing_admin_is_a_noop() {
        let messenger = Arc::new(RecordingMessenger::default());
        let dispatcher = NotificationDispatcher::new(messenger.clone(), None);
        dispatcher.notify_admin(&request()).await;
        assert!(messenger.sent().is_empty());
    }

    #[tokio::test]
    async fn test_delivery_failure_is_swallowed() {
        let messenger = Arc::new(RecordingMessenger::failing());
        let dispatcher =
            NotificationDispatcher::new(messenger.clone(), Some("@owner:example.org".to_string()));
        dispatcher.notify_admin(&request()).await;
        dispatcher
            .notify_customer("@client:example.org", &Reply::text("hello"))
            .await;
        assert!(messenger.sent().is_empty());
    }
}
