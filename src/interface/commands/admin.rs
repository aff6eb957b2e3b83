//! # Admin Commands
//!
//! Handles `.admin_contact`, `.admin_progress`, `.admin_done` and `.admin_requests`.
//! Only the configured admin may use them; the check lives in the lifecycle controller.

use crate::application::lifecycle::{LifecycleController, LifecycleError, StatusChange};
use crate::domain::traits::ChatProvider;
use crate::domain::types::{Reply, RequestStatus};
use crate::strings::{messages, notifications};
use anyhow::Result;

async fn report_error(chat: &impl ChatProvider, error: LifecycleError) -> Result<()> {
    match error {
        LifecycleError::PermissionDenied => super::notify(chat, messages::AUTH_DENIED).await,
        LifecycleError::NotFound(id) => super::notify(chat, &messages::request_not_found(id)).await,
    }
}

pub async fn handle_contact(
    lifecycle: &LifecycleController,
    chat: &impl ChatProvider,
    sender: &str,
    id: u64,
) -> Result<()> {
    match lifecycle.contact(sender, id).await {
        Ok(request) => super::send(chat, notifications::contact_card(&request)).await,
        Err(e) => report_error(chat, e).await,
    }
}

pub async fn handle_status(
    lifecycle: &LifecycleController,
    chat: &impl ChatProvider,
    sender: &str,
    id: u64,
    status: RequestStatus,
) -> Result<()> {
    let result = match status {
        RequestStatus::InProgress => lifecycle.mark_in_progress(sender, id).await,
        RequestStatus::Done => lifecycle.mark_done(sender, id).await,
        RequestStatus::New => {
            tracing::warn!("Refusing to move request #{} back to new", id);
            return Ok(());
        }
    };
    match result {
        Ok(StatusChange { request, changed: true }) => {
            super::notify(chat, &messages::status_changed(request.id, request.status)).await
        }
        Ok(StatusChange { request, changed: false }) => {
            super::notify(chat, &messages::status_unchanged(request.id, request.status)).await
        }
        Err(e) => report_error(chat, e).await,
    }
}

pub async fn handle_list(
    lifecycle: &LifecycleController,
    chat: &impl ChatProvider,
    sender: &str,
) -> Result<()> {
    match lifecycle.list_all(sender).await {
        Ok(requests) if requests.is_empty() => super::send(chat, Reply::text(messages::NO_REQUESTS)).await,
        Ok(requests) => super::send(chat, Reply::text(messages::all_requests(&requests))).await,
        Err(e) => report_error(chat, e).await,
    }
}
