//! # Domain Traits
//!
//! Abstract interfaces for the chat transport.
//! Allows for pluggable implementations in the Infrastructure layer.

use crate::domain::types::Reply;
use async_trait::async_trait;

/// Abstract interface for the room an inbound message arrived in (e.g., Matrix).
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send a reply (text and buttons) to the room, returning the message id.
    async fn send_reply(&self, reply: &Reply) -> Result<String, String>;

    /// Send a short notice (not tracked)
    async fn send_notification(&self, content: &str) -> Result<(), String>;

    /// Get the current room ID
    fn room_id(&self) -> String;
}

/// Reaches a user outside the current conversation (admin alerts, customer updates).
#[async_trait]
pub trait Messenger: Send + Sync {
    async fn send_to_user(&self, user_id: &str, reply: &Reply) -> Result<(), String>;
}
