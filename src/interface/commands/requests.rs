//! # My Requests Command
//!
//! Handles the `.myrequests` command: the caller's own requests with their status.

use crate::application::lifecycle::LifecycleController;
use crate::domain::traits::ChatProvider;
use crate::domain::types::{Reply, UserRef};
use crate::strings::messages;
use anyhow::Result;

pub async fn handle_my_requests(
    lifecycle: &LifecycleController,
    chat: &impl ChatProvider,
    user: &UserRef,
) -> Result<()> {
    let requests = lifecycle.list_mine(&user.id).await;
    let text = if requests.is_empty() {
        messages::NO_OWN_REQUESTS.to_string()
    } else {
        messages::my_requests(&requests)
    };
    super::send(chat, Reply::text(text)).await
}
