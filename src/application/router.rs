//! # Command Router
//!
//! Routes incoming messages to the appropriate command handler (in `interface/commands`).
//! Each message is parsed once into an [`Inbound`]; free text goes to the user's open
//! wizard (or the keyword replies), actions are dispatched by an exhaustive match.

use anyhow::Result;
use chrono::{DateTime, Local, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::application::calculator::{CalculatorState, CalculatorTransition};
use crate::application::intake::IntakeTransition;
use crate::application::lifecycle::LifecycleController;
use crate::application::notifier::NotificationDispatcher;
use crate::application::sessions::{SessionStore, Wizard};
use crate::application::store::RequestStore;
use crate::application::wizard::WizardInput;
use crate::domain::action::{Action, Inbound};
use crate::domain::traits::ChatProvider;
use crate::domain::types::{RequestStatus, UserRef};
use crate::interface::commands;
use crate::strings;

enum Step {
    Intake(IntakeTransition),
    Calculator(CalculatorTransition),
}

pub struct CommandRouter {
    sessions: Arc<Mutex<SessionStore>>,
    store: Arc<RequestStore>,
    notifier: Arc<NotificationDispatcher>,
    lifecycle: Arc<LifecycleController>,
}

impl CommandRouter {
    pub fn new(
        sessions: Arc<Mutex<SessionStore>>,
        store: Arc<RequestStore>,
        notifier: Arc<NotificationDispatcher>,
        lifecycle: Arc<LifecycleController>,
    ) -> Self {
        Self {
            sessions,
            store,
            notifier,
            lifecycle,
        }
    }

    pub async fn route(&self, chat: &impl ChatProvider, user: &UserRef, message: &str) -> Result<()> {
        let now = Utc::now();
        let purged = self.sessions.lock().await.purge_expired(now);
        if purged > 0 {
            tracing::info!("Expired {} idle session(s)", purged);
        }

        let inbound = Inbound::parse(message);
        tracing::info!("Router dispatching {:?} sender='{}'", inbound, user.id);

        match inbound {
            // An open step may accept dotted text such as ".5" or "...".
            Inbound::Unknown(raw) => {
                if self.wizard_step(chat, user, WizardInput::Text(raw.clone()), now).await? {
                    Ok(())
                } else {
                    tracing::debug!("Unknown action identifier {:?}", raw);
                    commands::notify(chat, strings::messages::UNKNOWN_COMMAND).await
                }
            }
            Inbound::Text(text) => {
                if self.wizard_step(chat, user, WizardInput::Text(text.clone()), now).await? {
                    Ok(())
                } else {
                    commands::menu::handle_free_text(chat, &text).await
                }
            }
            Inbound::Action(action) => self.dispatch(chat, user, action, now).await,
        }
    }

    async fn dispatch(
        &self,
        chat: &impl ChatProvider,
        user: &UserRef,
        action: Action,
        now: DateTime<Utc>,
    ) -> Result<()> {
        match action {
            Action::Start => commands::start::handle_start(&self.sessions, chat, user).await,
            Action::Help => {
                commands::start::handle_help(chat, self.lifecycle.is_admin(&user.id)).await
            }
            Action::Request | Action::Consultation | Action::RequestCall => {
                commands::request::handle_begin(&self.sessions, chat, user, now).await
            }
            Action::Calculator => {
                commands::calculator::handle_begin(&self.sessions, chat, user, now).await
            }
            Action::MyRequests => {
                commands::requests::handle_my_requests(&self.lifecycle, chat, user).await
            }

            Action::MainMenu
            | Action::CeilingMenu
            | Action::Services
            | Action::ServiceInfo(_)
            | Action::Prices
            | Action::Contacts
            | Action::Phone
            | Action::Portfolio
            | Action::About
            | Action::Stats => commands::menu::handle_page(chat, action).await,

            Action::SelectService(n) => {
                if self.has_intake(&user.id).await {
                    self.wizard_step(chat, user, WizardInput::Action(action), now).await?;
                    Ok(())
                } else {
                    commands::request::handle_service_shortcut(&self.sessions, chat, user, n, now)
                        .await
                }
            }
            Action::CalcType(_) => {
                {
                    // A stray type button with nothing open starts the calculator.
                    let mut sessions = self.sessions.lock().await;
                    if !sessions.is_active(&user.id) {
                        sessions.begin(&user.id, Wizard::Calculator(CalculatorState::SelectType), now);
                    }
                }
                self.wizard_step(chat, user, WizardInput::Action(action), now).await?;
                Ok(())
            }
            Action::Cancel => {
                if self.wizard_step(chat, user, WizardInput::Action(action), now).await? {
                    Ok(())
                } else {
                    commands::send(chat, strings::menus::with_main_menu(strings::messages::NOTHING_TO_CANCEL)).await
                }
            }
            Action::Date(_) | Action::Confirm | Action::Edit => {
                if self.wizard_step(chat, user, WizardInput::Action(action), now).await? {
                    Ok(())
                } else {
                    commands::notify(chat, strings::messages::NO_ACTIVE_FORM).await
                }
            }

            Action::AdminContact(id) => {
                commands::admin::handle_contact(&self.lifecycle, chat, &user.id, id).await
            }
            Action::AdminInProgress(id) => {
                commands::admin::handle_status(&self.lifecycle, chat, &user.id, id, RequestStatus::InProgress)
                    .await
            }
            Action::AdminDone(id) => {
                commands::admin::handle_status(&self.lifecycle, chat, &user.id, id, RequestStatus::Done)
                    .await
            }
            Action::AdminRequests => {
                commands::admin::handle_list(&self.lifecycle, chat, &user.id).await
            }
        }
    }

    async fn has_intake(&self, user_id: &str) -> bool {
        matches!(
            self.sessions.lock().await.get(user_id),
            Some(Wizard::Intake(_))
        )
    }

    /// Feeds `input` to the user's open wizard. Returns `false` when none is open.
    ///
    /// The transition is computed and the session written back under the lock;
    /// replies, storage and notifications happen after it is released.
    async fn wizard_step(
        &self,
        chat: &impl ChatProvider,
        user: &UserRef,
        input: WizardInput,
        now: DateTime<Utc>,
    ) -> Result<bool> {
        let today = now.with_timezone(&Local).date_naive();
        let step = {
            let mut sessions = self.sessions.lock().await;
            match sessions.take(&user.id) {
                None => return Ok(false),
                Some(Wizard::Intake(state)) => {
                    let transition = state.advance(&input, today);
                    if let IntakeTransition::Advanced(next) | IntakeTransition::Rejected(next, _) =
                        &transition
                    {
                        sessions.begin(&user.id, Wizard::Intake(next.clone()), now);
                    }
                    Step::Intake(transition)
                }
                Some(Wizard::Calculator(state)) => {
                    let transition = state.advance(&input);
                    if let CalculatorTransition::Advanced(next)
                    | CalculatorTransition::Rejected(next, _) = &transition
                    {
                        sessions.begin(&user.id, Wizard::Calculator(*next), now);
                    }
                    Step::Calculator(transition)
                }
            }
        };

        match step {
            Step::Intake(transition) => {
                commands::request::handle_transition(
                    &self.store,
                    &self.notifier,
                    chat,
                    user,
                    transition,
                    now,
                )
                .await?
            }
            Step::Calculator(transition) => {
                commands::calculator::handle_transition(chat, user, transition).await?
            }
        }
        Ok(true)
    }
}
