//! # Request Wizard Handler
//!
//! Opens the intake form and carries out the side effects of each intake transition:
//! the next prompt, the validation notice, or, on confirmation, persisting the
//! request, acknowledging the customer and alerting the admin (in that order).

use crate::application::intake::{IntakeState, IntakeTransition};
use crate::application::notifier::NotificationDispatcher;
use crate::application::sessions::{SessionStore, Wizard};
use crate::application::store::RequestStore;
use crate::domain::traits::ChatProvider;
use crate::domain::types::{NewRequest, Reply, UserRef};
use crate::strings;
use anyhow::Result;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;

/// `.request`, `.consultation`, `.call`: a fresh form replacing any open one.
pub async fn handle_begin(
    sessions: &Arc<Mutex<SessionStore>>,
    chat: &impl ChatProvider,
    user: &UserRef,
    now: DateTime<Utc>,
) -> Result<()> {
    let state = IntakeState::new();
    let prompt = strings::wizard::intake_prompt(&state);
    if let Some(previous) = sessions
        .lock()
        .await
        .begin(&user.id, Wizard::Intake(state), now)
    {
        tracing::info!("Replaced open form of {}: {:?}", user.id, previous);
    }
    tracing::info!("Intake started for {}", user.id);

    super::send(chat, Reply::text(strings::messages::REQUEST_INTRO)).await?;
    super::send(chat, prompt).await
}

/// `.service <n>` outside an intake form: start one with the service already chosen.
pub async fn handle_service_shortcut(
    sessions: &Arc<Mutex<SessionStore>>,
    chat: &impl ChatProvider,
    user: &UserRef,
    number: usize,
    now: DateTime<Utc>,
) -> Result<()> {
    let (state, notice) = match IntakeState::with_service(number) {
        Some(state) => (state, None),
        None => (
            IntakeState::new(),
            Some(strings::wizard::rejection(
                crate::application::wizard::Rejection::UnknownService,
            )),
        ),
    };
    let mut prompt = strings::wizard::intake_prompt(&state);
    if let Some(notice) = notice {
        prompt = prompt.prefixed(notice);
    }
    sessions
        .lock()
        .await
        .begin(&user.id, Wizard::Intake(state), now);
    tracing::info!("Intake started for {} via service shortcut {}", user.id, number);
    super::send(chat, prompt).await
}

/// Side effects of one intake step. The session has already been updated by the router.
pub async fn handle_transition(
    store: &RequestStore,
    notifier: &NotificationDispatcher,
    chat: &impl ChatProvider,
    user: &UserRef,
    transition: IntakeTransition,
    now: DateTime<Utc>,
) -> Result<()> {
    match transition {
        IntakeTransition::Advanced(state) => {
            super::send(chat, strings::wizard::intake_prompt(&state)).await
        }
        IntakeTransition::Rejected(state, reason) => {
            tracing::debug!("Intake input from {} rejected: {:?}", user.id, reason);
            let reply = strings::wizard::intake_prompt(&state)
                .prefixed(strings::wizard::rejection(reason));
            super::send(chat, reply).await
        }
        IntakeTransition::Submitted(data) => {
            let request = store
                .append_and_save(NewRequest {
                    user: user.clone(),
                    created_at: now,
                    data,
                })
                .await;
            tracing::info!("Request #{} created by {}", request.id, user.id);

            let ack = super::send(chat, Reply::text(strings::messages::request_created(&request))).await;
            notifier.notify_admin(&request).await;
            ack
        }
        IntakeTransition::Cancelled => {
            tracing::info!("Intake cancelled by {}", user.id);
            super::send(chat, strings::menus::with_main_menu(strings::messages::WIZARD_CANCELLED)).await
        }
        IntakeTransition::Restart => {
            super::send(chat, strings::menus::with_main_menu(strings::messages::EDIT_RESTART)).await
        }
    }
}
