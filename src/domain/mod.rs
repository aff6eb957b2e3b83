//! # Domain Layer
//!
//! Core definitions, types, and traits that define the business domain of the application.
//! Independent of specific frameworks (mostly), serving as the contract for other layers.

pub mod action;
pub mod catalog;
pub mod config;
pub mod traits;
pub mod types;
