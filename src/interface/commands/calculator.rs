//! # Calculator Handler

use crate::application::calculator::{CalculatorState, CalculatorTransition};
use crate::application::sessions::{SessionStore, Wizard};
use crate::domain::traits::ChatProvider;
use crate::domain::types::UserRef;
use crate::strings;
use anyhow::Result;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;

pub async fn handle_begin(
    sessions: &Arc<Mutex<SessionStore>>,
    chat: &impl ChatProvider,
    user: &UserRef,
    now: DateTime<Utc>,
) -> Result<()> {
    let state = CalculatorState::SelectType;
    sessions
        .lock()
        .await
        .begin(&user.id, Wizard::Calculator(state), now);
    tracing::info!("Calculator started for {}", user.id);
    super::send(chat, strings::wizard::calculator_prompt(&state)).await
}

pub async fn handle_transition(
    chat: &impl ChatProvider,
    user: &UserRef,
    transition: CalculatorTransition,
) -> Result<()> {
    match transition {
        CalculatorTransition::Advanced(state) => {
            super::send(chat, strings::wizard::calculator_prompt(&state)).await
        }
        CalculatorTransition::Rejected(state, reason) => {
            let reply = strings::wizard::calculator_prompt(&state)
                .prefixed(strings::wizard::rejection(reason));
            super::send(chat, reply).await
        }
        CalculatorTransition::Estimated(estimate) => {
            tracing::info!(
                "Estimate for {}: {:?} {} m² -> {}..{}",
                user.id,
                estimate.kind,
                estimate.area,
                estimate.low,
                estimate.high
            );
            super::send(chat, strings::wizard::estimate(&estimate)).await
        }
        CalculatorTransition::Cancelled => {
            super::send(chat, strings::menus::with_main_menu(strings::messages::CALCULATION_CANCELLED)).await
        }
    }
}
