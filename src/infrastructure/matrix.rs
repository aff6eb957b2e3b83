//! # Matrix Service Adapter
//!
//! Implements the `ChatProvider` and `Messenger` traits for the Matrix protocol using the `matrix_sdk`.
//! Matrix has no inline keyboards, so a button is rendered as the action identifier to send
//! (e.g. `` ✅ Confirm `.confirm` ``) and a URL button as a markdown link.

use crate::domain::traits::{ChatProvider, Messenger};
use crate::domain::types::{Button, ButtonTarget, Reply};
use async_trait::async_trait;
use matrix_sdk::Client;
use matrix_sdk::room::Room;
use matrix_sdk::ruma::UserId;
use matrix_sdk::ruma::events::room::message::RoomMessageEventContent;
use std::convert::TryFrom;

#[derive(Clone)]
pub struct MatrixService {
    room: Room,
}

impl MatrixService {
    pub fn new(room: Room) -> Self {
        Self { room }
    }
}

#[async_trait]
impl ChatProvider for MatrixService {
    fn room_id(&self) -> String {
        self.room.room_id().as_str().to_string()
    }

    async fn send_reply(&self, reply: &Reply) -> Result<String, String> {
        let content = render_markdown(reply);
        tracing::info!("Bot sending message to {}: {}", self.room_id(), content);
        self.room
            .send(RoomMessageEventContent::text_markdown(content))
            .await
            .map(|resp| resp.event_id.to_string())
            .map_err(|e| e.to_string())
    }

    async fn send_notification(&self, content: &str) -> Result<(), String> {
        self.room
            .send(RoomMessageEventContent::notice_markdown(content))
            .await
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}

/// Reaches users by id through their direct-message room, creating it on first contact.
#[derive(Clone)]
pub struct MatrixMessenger {
    client: Client,
}

impl MatrixMessenger {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    async fn dm_room(&self, user_id: &UserId) -> Result<Room, String> {
        if let Some(room) = self.client.get_dm_room(user_id) {
            return Ok(room);
        }
        tracing::info!("Opening direct chat with {}", user_id);
        self.client
            .create_dm(user_id)
            .await
            .map_err(|e| e.to_string())
    }
}

#[async_trait]
impl Messenger for MatrixMessenger {
    async fn send_to_user(&self, user_id: &str, reply: &Reply) -> Result<(), String> {
        let user_id = <&UserId>::try_from(user_id).map_err(|e| format!("{user_id}: {e}"))?;
        let room = self.dm_room(user_id).await?;
        room.send(RoomMessageEventContent::text_markdown(render_markdown(reply)))
            .await
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}

fn render_button(button: &Button) -> String {
    match &button.target {
        ButtonTarget::Action(action) => format!("{} `{}`", button.label, action),
        ButtonTarget::Url(url) => format!("[{}]({})", button.label, url),
    }
}

/// Text with hard line breaks, then one line per button row.
pub fn render_markdown(reply: &Reply) -> String {
    let mut out = reply.text.lines().collect::<Vec<_>>().join("  \n");
    if !reply.keyboard.is_empty() {
        let rows: Vec<String> = reply
            .keyboard
            .iter()
            .map(|row| row.iter().map(render_button).collect::<Vec<_>>().join(" · "))
            .collect();
        out.push_str("\n\n");
        out.push_str(&rows.join("  \n"));
    }
    out
}
