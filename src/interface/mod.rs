//! # Interface Layer
//!
//! The user-facing side of the bot: one handler per command or action.

pub mod commands;
