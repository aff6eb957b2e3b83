//! # Wizard Sessions
//!
//! Per-user wizard state. A user has at most one active wizard; beginning a new one
//! replaces whatever was in progress. Sessions live in memory only.

use crate::application::calculator::CalculatorState;
use crate::application::intake::IntakeState;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub enum Wizard {
    Intake(IntakeState),
    Calculator(CalculatorState),
}

#[derive(Debug)]
struct Session {
    wizard: Wizard,
    touched_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<String, Session>,
    ttl: Option<Duration>,
}

impl SessionStore {
    pub fn new(ttl: Option<Duration>) -> Self {
        Self {
            sessions: HashMap::new(),
            ttl,
        }
    }

    /// Starts (or replaces) the user's wizard. Returns the discarded one, if any.
    pub fn begin(&mut self, user_id: &str, wizard: Wizard, now: DateTime<Utc>) -> Option<Wizard> {
        self.sessions
            .insert(
                user_id.to_string(),
                Session {
                    wizard,
                    touched_at: now,
                },
            )
            .map(|s| s.wizard)
    }

    /// Removes and returns the user's wizard so a step can consume it.
    /// Put it back with [`SessionStore::begin`] if the dialog continues.
    pub fn take(&mut self, user_id: &str) -> Option<Wizard> {
        self.sessions.remove(user_id).map(|s| s.wizard)
    }

    pub fn end(&mut self, user_id: &str) -> Option<Wizard> {
        self.take(user_id)
    }

    pub fn is_active(&self, user_id: &str) -> bool {
        self.sessions.contains_key(user_id)
    }

    pub fn get(&self, user_id: &str) -> Option<&Wizard> {
        self.sessions.get(user_id).map(|s| &s.wizard)
    }

    /// Drops sessions idle for longer than the configured TTL. Returns how many.
    pub fn purge_expired(&mut self, now: DateTime<Utc>) -> usize {
        let Some(ttl) = self.ttl else {
            return 0;
        };
        let before = self.sessions.len();
        self.sessions.retain(|_, s| now - s.touched_at <= ttl);
        before - self.sessions.len()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::CeilingType;

    #[test]
    fn test_one_wizard_per_user() {
        let now = Utc::now();
        let mut store = SessionStore::new(None);
        assert!(store.begin("@a:x", Wizard::Intake(IntakeState::new()), now).is_none());

        let replaced = store.begin("@a:x", Wizard::Calculator(CalculatorState::SelectType), now);
        assert_eq!(replaced, Some(Wizard::Intake(IntakeState::new())));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("@a:x"), Some(&Wizard::Calculator(CalculatorState::SelectType)));

        store.begin("@b:x", Wizard::Intake(IntakeState::new()), now);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_take_removes_until_put_back() {
        let now = Utc::now();
        let mut store = SessionStore::new(None);
        let wizard = Wizard::Calculator(CalculatorState::EnterArea(CeilingType::Stretch));
        store.begin("@a:x", wizard.clone(), now);

        assert_eq!(store.take("@a:x"), Some(wizard.clone()));
        assert!(!store.is_active("@a:x"));
        store.begin("@a:x", wizard, now);
        assert!(store.is_active("@a:x"));
        assert!(store.end("@a:x").is_some());
        assert!(store.is_empty());
    }

    #[test]
    fn test_idle_sessions_expire() {
        let start = Utc::now();
        let mut store = SessionStore::new(Some(Duration::minutes(30)));
        store.begin("@old:x", Wizard::Intake(IntakeState::new()), start);
        store.begin("@fresh:x", Wizard::Intake(IntakeState::new()), start + Duration::minutes(20));

        assert_eq!(store.purge_expired(start + Duration::minutes(31)), 1);
        assert!(!store.is_active("@old:x"));
        assert!(store.is_active("@fresh:x"));
    }

    #[test]
    fn test_no_ttl_keeps_everything() {
        let start = Utc::now();
        let mut store = SessionStore::new(None);
        store.begin("@a:x", Wizard::Intake(IntakeState::new()), start);
        assert_eq!(store.purge_expired(start + Duration::days(365)), 0);
        assert!(store.is_active("@a:x"));
    }
}
