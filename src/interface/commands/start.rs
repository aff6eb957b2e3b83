//! # Start & Help Commands
//!
//! `.start` drops whatever form the user had open and shows the welcome page.
//! `.help` lists the commands; the admin also sees the admin section.

use crate::application::sessions::SessionStore;
use crate::domain::traits::ChatProvider;
use crate::domain::types::{Reply, UserRef};
use crate::strings;
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::Mutex;

pub async fn handle_start(
    sessions: &Arc<Mutex<SessionStore>>,
    chat: &impl ChatProvider,
    user: &UserRef,
) -> Result<()> {
    if sessions.lock().await.end(&user.id).is_some() {
        tracing::info!("Discarded open form of {} on .start", user.id);
    }
    super::send(chat, strings::menus::welcome()).await
}

pub async fn handle_help(chat: &impl ChatProvider, is_admin: bool) -> Result<()> {
    let mut text = strings::help::MAIN.to_string();
    if is_admin {
        text.push_str(strings::help::ADMIN);
    }
    super::send(chat, Reply::text(text)).await
}
