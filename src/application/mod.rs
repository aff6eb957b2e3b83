//! # Application Layer
//!
//! Contains the core business logic and orchestration of the bot.
//! This includes the wizards, the request store and lifecycle, notifications and command routing.

pub mod calculator;
pub mod intake;
pub mod lifecycle;
pub mod logging;
pub mod notifier;
pub mod router;
pub mod sessions;
pub mod store;
pub mod wizard;
