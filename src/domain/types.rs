//! # Domain Types
//!
//! Common data structures used across the application logic:
//! persisted requests, wizard drafts, and the outbound reply model.

use crate::domain::action::Action;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Who sent an inbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRef {
    pub id: String,
    /// Display name at the time of the message.
    pub name: String,
}

impl UserRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RequestStatus {
    #[serde(rename = "new", alias = "новая")]
    New,
    #[serde(rename = "in-progress", alias = "в работе")]
    InProgress,
    #[serde(rename = "done", alias = "выполнена")]
    Done,
}

impl RequestStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RequestStatus::New => "new",
            RequestStatus::InProgress => "in progress",
            RequestStatus::Done => "done",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            RequestStatus::New => "🆕",
            RequestStatus::InProgress => "🔄",
            RequestStatus::Done => "✅",
        }
    }
}

/// The fields collected by the intake wizard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RequestData {
    pub service: String,
    pub area: f64,
    pub address: String,
    pub datetime: String,
    pub contacts: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// A persisted customer request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub id: u64,
    #[serde(deserialize_with = "string_or_number")]
    pub user_id: String,
    pub user_name: String,
    pub created_at: DateTime<Utc>,
    pub status: RequestStatus,
    pub data: RequestData,
}

/// Accepts user ids written as numbers by older versions of the file.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}

/// Everything needed to append a request; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewRequest {
    pub user: UserRef,
    pub created_at: DateTime<Utc>,
    pub data: RequestData,
}

/// Partially filled request owned by an active intake session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestDraft {
    pub service: Option<String>,
    pub area: Option<f64>,
    pub address: Option<String>,
    pub datetime: Option<String>,
    pub contacts: Option<String>,
    pub comment: Option<String>,
}

impl RequestDraft {
    pub fn with_service(service: impl Into<String>) -> Self {
        Self {
            service: Some(service.into()),
            ..Default::default()
        }
    }

    /// Returns the finished data, or `None` while a required field is missing.
    pub fn finalize(&self) -> Option<RequestData> {
        Some(RequestData {
            service: self.service.clone()?,
            area: self.area?,
            address: self.address.clone()?,
            datetime: self.datetime.clone()?,
            contacts: self.contacts.clone()?,
            comment: self.comment.clone(),
        })
    }
}

/// Where a button leads.
#[derive(Debug, Clone, PartialEq)]
pub enum ButtonTarget {
    Action(Action),
    Url(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub label: String,
    pub target: ButtonTarget,
}

impl Button {
    pub fn action(label: impl Into<String>, action: Action) -> Self {
        Self {
            label: label.into(),
            target: ButtonTarget::Action(action),
        }
    }

    pub fn url(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: ButtonTarget::Url(url.into()),
        }
    }
}

/// An outbound message: markdown text plus optional rows of buttons.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Reply {
    pub text: String,
    pub keyboard: Vec<Vec<Button>>,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: Vec::new(),
        }
    }

    pub fn with_keyboard(mut self, keyboard: Vec<Vec<Button>>) -> Self {
        self.keyboard = keyboard;
        self
    }

    /// Prepends a line (e.g. a validation notice) to the text.
    pub fn prefixed(mut self, line: &str) -> Self {
        self.text = format!("{line}\n\n{}", self.text);
        self
    }
}
