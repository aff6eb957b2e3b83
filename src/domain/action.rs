//! # Actions
//!
//! Structured form of everything a user can "press": bot commands, menu buttons,
//! wizard controls and admin controls. Inbound messages are parsed into an [`Inbound`]
//! exactly once at the boundary; handlers dispatch on the enum, never on raw strings.
//!
//! On Matrix a button is rendered as the identifier to send, e.g. `.date tomorrow`.

use crate::domain::catalog::{CeilingType, ServiceTopic};
use std::fmt;

/// Prefix that marks a message as an action identifier rather than free text.
pub const ACTION_PREFIX: char = '.';

/// Fixed date choices offered by the intake wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateChoice {
    Today,
    Tomorrow,
    ThisWeek,
    NextWeek,
    Manual,
}

impl DateChoice {
    pub fn code(&self) -> &'static str {
        match self {
            DateChoice::Today => "today",
            DateChoice::Tomorrow => "tomorrow",
            DateChoice::ThisWeek => "week",
            DateChoice::NextWeek => "nextweek",
            DateChoice::Manual => "manual",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "today" => Some(DateChoice::Today),
            "tomorrow" => Some(DateChoice::Tomorrow),
            "week" => Some(DateChoice::ThisWeek),
            "nextweek" => Some(DateChoice::NextWeek),
            "manual" => Some(DateChoice::Manual),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    // Commands
    Start,
    Help,
    Request,
    MyRequests,

    // Menu navigation
    MainMenu,
    CeilingMenu,
    Services,
    ServiceInfo(ServiceTopic),
    Calculator,
    Prices,
    Contacts,
    Phone,
    Portfolio,
    About,
    Stats,
    Consultation,
    RequestCall,

    // Wizard controls
    SelectService(usize),
    Date(DateChoice),
    Confirm,
    Cancel,
    Edit,
    CalcType(CeilingType),

    // Admin controls
    AdminContact(u64),
    AdminInProgress(u64),
    AdminDone(u64),
    AdminRequests,
}

impl Action {
    /// Parses an identifier such as `.admin_done 1718000000000` (prefix optional).
    pub fn parse(input: &str) -> Option<Action> {
        let body = input.trim();
        let body = body.strip_prefix(ACTION_PREFIX).unwrap_or(body);
        let (name, arg) = match body.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (body, ""),
        };
        let name = name.to_lowercase();
        let arg = arg.to_lowercase();

        let action = match (name.as_str(), arg.as_str()) {
            ("start", "") => Action::Start,
            ("help", "") => Action::Help,
            ("request", "") => Action::Request,
            ("myrequests", "") => Action::MyRequests,

            ("menu", "") => Action::MainMenu,
            ("ceilings", "") => Action::CeilingMenu,
            ("services", "") => Action::Services,
            ("info", code) => Action::ServiceInfo(ServiceTopic::from_code(code)?),
            ("calculator", "") => Action::Calculator,
            ("prices", "") => Action::Prices,
            ("contacts", "") => Action::Contacts,
            ("phone", "") => Action::Phone,
            ("portfolio", "") => Action::Portfolio,
            ("about", "") => Action::About,
            ("stats", "") => Action::Stats,
            ("consultation", "") => Action::Consultation,
            ("call", "") => Action::RequestCall,

            ("service", n) => Action::SelectService(n.parse().ok()?),
            ("date", code) => Action::Date(DateChoice::from_code(code)?),
            ("confirm", "") => Action::Confirm,
            ("cancel", "") => Action::Cancel,
            ("edit", "") => Action::Edit,
            ("calc", code) => Action::CalcType(CeilingType::from_code(code)?),

            ("admin_contact", id) => Action::AdminContact(id.parse().ok()?),
            ("admin_progress", id) => Action::AdminInProgress(id.parse().ok()?),
            ("admin_done", id) => Action::AdminDone(id.parse().ok()?),
            ("admin_requests", "") => Action::AdminRequests,
            _ => return None,
        };
        Some(action)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = ACTION_PREFIX;
        match self {
            Action::Start => write!(f, "{p}start"),
            Action::Help => write!(f, "{p}help"),
            Action::Request => write!(f, "{p}request"),
            Action::MyRequests => write!(f, "{p}myrequests"),
            Action::MainMenu => write!(f, "{p}menu"),
            Action::CeilingMenu => write!(f, "{p}ceilings"),
            Action::Services => write!(f, "{p}services"),
            Action::ServiceInfo(topic) => write!(f, "{p}info {}", topic.code()),
            Action::Calculator => write!(f, "{p}calculator"),
            Action::Prices => write!(f, "{p}prices"),
            Action::Contacts => write!(f, "{p}contacts"),
            Action::Phone => write!(f, "{p}phone"),
            Action::Portfolio => write!(f, "{p}portfolio"),
            Action::About => write!(f, "{p}about"),
            Action::Stats => write!(f, "{p}stats"),
            Action::Consultation => write!(f, "{p}consultation"),
            Action::RequestCall => write!(f, "{p}call"),
            Action::SelectService(n) => write!(f, "{p}service {n}"),
            Action::Date(choice) => write!(f, "{p}date {}", choice.code()),
            Action::Confirm => write!(f, "{p}confirm"),
            Action::Cancel => write!(f, "{p}cancel"),
            Action::Edit => write!(f, "{p}edit"),
            Action::CalcType(kind) => write!(f, "{p}calc {}", kind.code()),
            Action::AdminContact(id) => write!(f, "{p}admin_contact {id}"),
            Action::AdminInProgress(id) => write!(f, "{p}admin_progress {id}"),
            Action::AdminDone(id) => write!(f, "{p}admin_done {id}"),
            Action::AdminRequests => write!(f, "{p}admin_requests"),
        }
    }
}

/// A classified inbound message.
#[derive(Debug, Clone, PartialEq)]
pub enum Inbound {
    Action(Action),
    Text(String),
    /// Looked like an action identifier but did not parse.
    Unknown(String),
}

impl Inbound {
    pub fn parse(message: &str) -> Self {
        let msg = message.trim();
        if msg.starts_with(ACTION_PREFIX) {
            match Action::parse(msg) {
                Some(action) => Inbound::Action(action),
                None => Inbound::Unknown(msg.to_string()),
            }
        } else {
            Inbound::Text(msg.to_string())
        }
    }
}
