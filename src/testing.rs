//! Recording doubles for the chat traits, shared by the unit tests.

use crate::domain::traits::{ChatProvider, Messenger};
use crate::domain::types::Reply;
use async_trait::async_trait;
use std::sync::Mutex;

/// A room that remembers everything sent to it.
#[derive(Default)]
pub struct RecordingChat {
    pub replies: Mutex<Vec<Reply>>,
    pub notices: Mutex<Vec<String>>,
}

impl RecordingChat {
    pub fn replies(&self) -> Vec<Reply> {
        self.replies.lock().unwrap().clone()
    }

    pub fn notices(&self) -> Vec<String> {
        self.notices.lock().unwrap().clone()
    }

    pub fn last_text(&self) -> String {
        self.replies
            .lock()
            .unwrap()
            .last()
            .map(|r| r.text.clone())
            .unwrap_or_default()
    }

    pub fn clear(&self) {
        self.replies.lock().unwrap().clear();
        self.notices.lock().unwrap().clear();
    }
}

#[async_trait]
impl ChatProvider for RecordingChat {
    async fn send_reply(&self, reply: &Reply) -> Result<String, String> {
        let mut replies = self.replies.lock().unwrap();
        replies.push(reply.clone());
        Ok(format!("$event{}", replies.len()))
    }

    async fn send_notification(&self, content: &str) -> Result<(), String> {
        self.notices.lock().unwrap().push(content.to_string());
        Ok(())
    }

    fn room_id(&self) -> String {
        "!room:test".to_string()
    }
}

/// Direct-message sink; can be told to fail every delivery.
#[derive(Default)]
pub struct RecordingMessenger {
    pub sent: Mutex<Vec<(String, Reply)>>,
    pub fail: bool,
}

impl RecordingMessenger {
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<(String, Reply)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_to(&self, user_id: &str) -> Vec<Reply> {
        self.sent()
            .into_iter()
            .filter(|(to, _)| to == user_id)
            .map(|(_, reply)| reply)
            .collect()
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn send_to_user(&self, user_id: &str, reply: &Reply) -> Result<(), String> {
        if self.fail {
            return Err("M_FORBIDDEN: delivery refused".to_string());
        }
        self.sent
            .lock()
            .unwrap()
            .push((user_id.to_string(), reply.clone()));
        Ok(())
    }
}
