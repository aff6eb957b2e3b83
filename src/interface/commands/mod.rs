//! # Command Handlers
//!
//! Contains specific handler functions for each supported action (e.g., .start, .request, .admin_done).
//! These handlers are invoked by the Router.

pub mod admin;
pub mod calculator;
pub mod menu;
pub mod request;
pub mod requests;
pub mod start;

use crate::domain::traits::ChatProvider;
use crate::domain::types::Reply;
use anyhow::Result;

pub async fn send(chat: &impl ChatProvider, reply: Reply) -> Result<()> {
    chat.send_reply(&reply)
        .await
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!(e))
}

pub async fn notify(chat: &impl ChatProvider, text: &str) -> Result<()> {
    chat.send_notification(text)
        .await
        .map_err(|e| anyhow::anyhow!(e))
}
