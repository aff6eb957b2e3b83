//! # Request Lifecycle
//!
//! Admin-only status changes (`new → in-progress → done`) and request listings.
//! Every gated operation checks the actor first; a denied call reads and writes nothing.

use crate::application::notifier::NotificationDispatcher;
use crate::application::store::RequestStore;
use crate::domain::types::{Request, RequestStatus};
use crate::strings::notifications;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LifecycleError {
    #[error("actor is not the configured admin")]
    PermissionDenied,
    #[error("request #{0} not found")]
    NotFound(u64),
}

/// Result of a status change. `changed` is false when the request already had the
/// target status; nothing was written and nobody was notified.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusChange {
    pub request: Request,
    pub changed: bool,
}

pub struct LifecycleController {
    store: Arc<RequestStore>,
    notifier: Arc<NotificationDispatcher>,
    admin: Option<String>,
}

impl LifecycleController {
    pub fn new(
        store: Arc<RequestStore>,
        notifier: Arc<NotificationDispatcher>,
        admin: Option<String>,
    ) -> Self {
        Self {
            store,
            notifier,
            admin,
        }
    }

    /// Case-insensitive match against the configured admin. No admin, no access.
    pub fn is_admin(&self, actor: &str) -> bool {
        self.admin
            .as_deref()
            .is_some_and(|admin| admin.to_lowercase() == actor.to_lowercase())
    }

    fn authorize(&self, actor: &str) -> Result<(), LifecycleError> {
        if self.is_admin(actor) {
            Ok(())
        } else {
            tracing::info!("Denied admin action for {}", actor);
            Err(LifecycleError::PermissionDenied)
        }
    }

    pub async fn mark_in_progress(&self, actor: &str, id: u64) -> Result<StatusChange, LifecycleError> {
        self.set_status(actor, id, RequestStatus::InProgress).await
    }

    pub async fn mark_done(&self, actor: &str, id: u64) -> Result<StatusChange, LifecycleError> {
        self.set_status(actor, id, RequestStatus::Done).await
    }

    async fn set_status(
        &self,
        actor: &str,
        id: u64,
        status: RequestStatus,
    ) -> Result<StatusChange, LifecycleError> {
        self.authorize(actor)?;

        let change = self
            .store
            .update(|requests| match requests.iter_mut().find(|r| r.id == id) {
                None => (Err(LifecycleError::NotFound(id)), false),
                Some(request) if request.status == status => (
                    Ok(StatusChange {
                        request: request.clone(),
                        changed: false,
                    }),
                    false,
                ),
                Some(request) => {
                    request.status = status;
                    (
                        Ok(StatusChange {
                            request: request.clone(),
                            changed: true,
                        }),
                        true,
                    )
                }
            })
            .await?;

        if change.changed {
            tracing::info!("Request #{} is now {}", id, status.label());
            let update = notifications::customer_status_update(&change.request);
            self.notifier
                .notify_customer(&change.request.user_id, &update)
                .await;
        }
        Ok(change)
    }

    /// The request's contact details, for the admin to reach the customer.
    pub async fn contact(&self, actor: &str, id: u64) -> Result<Request, LifecycleError> {
        self.authorize(actor)?;
        self.store
            .snapshot()
            .await
            .into_iter()
            .find(|r| r.id == id)
            .ok_or(LifecycleError::NotFound(id))
    }

    /// All requests, newest first.
    pub async fn list_all(&self, actor: &str) -> Result<Vec<Request>, LifecycleError> {
        self.authorize(actor)?;
        let mut requests = self.store.snapshot().await;
        requests.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(requests)
    }

    /// The user's own requests, in creation order. Open to everyone.
    pub async fn list_mine(&self, user_id: &str) -> Vec<Request> {
        self.store
            .snapshot()
            .await
            .into_iter()
            .filter(|r| r.user_id == user_id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{NewRequest, RequestData, UserRef};
    use crate::testing::RecordingMessenger;
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    const ADMIN: &str = "@Owner:example.org";

    struct Fixture {
        _dir: TempDir,
        store: Arc<RequestStore>,
        messenger: Arc<RecordingMessenger>,
        lifecycle: LifecycleController,
    }

    fn fixture(admin: Option<&str>) -> Fixture {
        let dir = TempDir::new().unwrap();
        let store = Arc::new(RequestStore::new(dir.path().join("requests.json")));
        let messenger = Arc::new(RecordingMessenger::default());
        let notifier = Arc::new(NotificationDispatcher::new(
            messenger.clone(),
            admin.map(str::to_string),
        ));
        let lifecycle =
            LifecycleController::new(store.clone(), notifier, admin.map(str::to_string));
        Fixture {
            _dir: dir,
            store,
            messenger,
            lifecycle,
        }
    }

    async fn seed(store: &RequestStore, user: &str, millis: i64) -> Request {
        store
            .append_and_save(NewRequest {
                user: UserRef::new(user, "Customer"),
                created_at: Utc.timestamp_millis_opt(millis).unwrap(),
                data: RequestData {
                    service: "Turnkey renovation".to_string(),
                    area: 42.0,
                    address: "Kommunisticheskaya 3".to_string(),
                    datetime: "This week".to_string(),
                    contacts: "Marina 8 914 000".to_string(),
                    comment: None,
                },
            })
            .await
    }

    #[tokio::test]
    async fn test_admin_check_is_case_insensitive() {
        let f = fixture(Some(ADMIN));
        assert!(f.lifecycle.is_admin("@owner:EXAMPLE.org"));
        assert!(!f.lifecycle.is_admin("@someone:example.org"));
    }

    #[tokio::test]
    async fn test_no_admin_configured_denies_everyone() {
        let f = fixture(None);
        let request = seed(&f.store, "@c:x", 1_000).await;
        assert!(!f.lifecycle.is_admin(""));
        assert_eq!(
            f.lifecycle.mark_done("@c:x", request.id).await,
            Err(LifecycleError::PermissionDenied)
        );
    }

    #[tokio::test]
    async fn test_non_admin_cannot_change_anything() {
        let f = fixture(Some(ADMIN));
        let request = seed(&f.store, "@c:x", 1_000).await;
        let before = std::fs::read_to_string(f.store.path()).unwrap();

        for result in [
            f.lifecycle.mark_in_progress("@c:x", request.id).await,
            f.lifecycle.mark_done("@c:x", request.id).await,
        ] {
            assert_eq!(result, Err(LifecycleError::PermissionDenied));
        }
        assert_eq!(
            f.lifecycle.contact("@c:x", request.id).await,
            Err(LifecycleError::PermissionDenied)
        );
        assert_eq!(
            f.lifecycle.list_all("@c:x").await,
            Err(LifecycleError::PermissionDenied)
        );

        assert_eq!(std::fs::read_to_string(f.store.path()).unwrap(), before);
        assert!(f.messenger.sent().is_empty());
    }

    #[tokio::test]
    async fn test_status_change_persists_and_notifies_customer() {
        let f = fixture(Some(ADMIN));
        let request = seed(&f.store, "@c:x", 1_000).await;

        let change = f.lifecycle.mark_in_progress(ADMIN, request.id).await.unwrap();
        assert!(change.changed);
        assert_eq!(change.request.status, RequestStatus::InProgress);
        assert_eq!(f.store.load_all()[0].status, RequestStatus::InProgress);

        let sent = f.messenger.sent_to("@c:x");
        assert_eq!(sent.len(), 1);
        assert!(sent[0].text.contains(&request.id.to_string()));
    }

    #[tokio::test]
    async fn test_done_twice_is_idempotent() {
        let f = fixture(Some(ADMIN));
        let request = seed(&f.store, "@c:x", 1_000).await;

        assert!(f.lifecycle.mark_done(ADMIN, request.id).await.unwrap().changed);
        let again = f.lifecycle.mark_done(ADMIN, request.id).await.unwrap();
        assert!(!again.changed);
        assert_eq!(again.request.status, RequestStatus::Done);
        assert_eq!(f.messenger.sent_to("@c:x").len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_id_changes_nothing() {
        let f = fixture(Some(ADMIN));
        let request = seed(&f.store, "@c:x", 1_000).await;

        assert_eq!(
            f.lifecycle.mark_done(ADMIN, 42).await,
            Err(LifecycleError::NotFound(42))
        );
        assert_eq!(
            f.lifecycle.contact(ADMIN, 42).await,
            Err(LifecycleError::NotFound(42))
        );
        assert_eq!(f.store.load_all()[0].status, RequestStatus::New);
        assert_eq!(f.lifecycle.contact(ADMIN, request.id).await.unwrap().id, request.id);
        assert!(f.messenger.sent().is_empty());
    }

    #[tokio::test]
    async fn test_listings() {
        let f = fixture(Some(ADMIN));
        seed(&f.store, "@a:x", 1_000).await;
        seed(&f.store, "@b:x", 3_000).await;
        seed(&f.store, "@a:x", 2_000).await;

        let all: Vec<u64> = f
            .lifecycle
            .list_all(ADMIN)
            .await
            .unwrap()
            .iter()
            .map(|r| r.id)
            .collect();
        // The third request was created at 2000 but got id 3001.
        assert_eq!(all, vec![3_000, 3_001, 1_000]);

        let mine: Vec<u64> = f.lifecycle.list_mine("@a:x").await.iter().map(|r| r.id).collect();
        assert_eq!(mine, vec![1_000, 3_001]);
        assert!(f.lifecycle.list_mine("@nobody:x").await.is_empty());
    }
}
