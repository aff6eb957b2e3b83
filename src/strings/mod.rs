//! # Strings Module
//!
//! Centralizes user-facing strings, menu pages, notification templates and log text.
//! Ensures consistency in messaging and easier localization/updates.

pub mod help;
pub mod logs;
pub mod menus;
pub mod messages;
pub mod notifications;
pub mod wizard;
