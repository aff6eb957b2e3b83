//! # Menu Navigation
//!
//! Static pages (`.menu`, `.prices`, `.info <topic>`, ...) and the keyword replies
//! for free text sent while no form is open. Neither touches the user's session.

use crate::domain::action::Action;
use crate::domain::traits::ChatProvider;
use crate::domain::types::Reply;
use crate::strings::menus;
use anyhow::Result;

/// Page for a navigation action, `None` for actions that are not plain pages.
pub fn page(action: Action) -> Option<Reply> {
    let reply = match action {
        Action::MainMenu => menus::welcome(),
        Action::CeilingMenu => menus::ceilings(),
        Action::Services => menus::services(),
        Action::ServiceInfo(topic) => menus::service_info(topic),
        Action::Prices => menus::prices(),
        Action::Contacts => menus::contacts(),
        Action::Phone => menus::phone(),
        Action::Portfolio => menus::portfolio(),
        Action::About => menus::about(),
        Action::Stats => menus::stats(),
        _ => return None,
    };
    Some(reply)
}

pub async fn handle_page(chat: &impl ChatProvider, action: Action) -> Result<()> {
    match page(action) {
        Some(reply) => super::send(chat, reply).await,
        None => {
            tracing::warn!("No menu page for {}", action);
            Ok(())
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Keyword {
    Greeting,
    Services,
    Contacts,
    Other,
}

const GREETING_STEMS: [&str; 4] = ["hello", "привет", "здравствуй", "good day"];
const GREETING_WORDS: [&str; 2] = ["hi", "hey"];
const SERVICE_STEMS: [&str; 6] = ["service", "work", "price", "услуг", "работ", "цен"];
const CONTACT_STEMS: [&str; 6] = ["contact", "phone", "call", "контакт", "телефон", "связ"];

/// First matching group wins, in the order greeting, services, contacts.
pub fn classify(text: &str) -> Keyword {
    let lowered = text.to_lowercase();
    let words: Vec<&str> = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();
    let has_stem = |stems: &[&str]| stems.iter().any(|s| lowered.contains(s));

    if has_stem(&GREETING_STEMS[..]) || words.iter().any(|w| GREETING_WORDS.contains(w)) {
        Keyword::Greeting
    } else if has_stem(&SERVICE_STEMS[..]) {
        Keyword::Services
    } else if has_stem(&CONTACT_STEMS[..]) {
        Keyword::Contacts
    } else {
        Keyword::Other
    }
}

pub async fn handle_free_text(chat: &impl ChatProvider, text: &str) -> Result<()> {
    let keyword = classify(text);
    tracing::debug!("Free text classified as {:?}", keyword);
    let reply = match keyword {
        Keyword::Greeting => menus::greeting(),
        Keyword::Services => menus::services_short(),
        Keyword::Contacts => menus::contacts_short(),
        Keyword::Other => menus::fallback(),
    };
    super::send(chat, reply).await
}
