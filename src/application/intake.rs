//! # Intake Wizard
//!
//! The request form as a state machine:
//! `SelectService → EnterArea → EnterAddress → ChooseDate [→ EnterManualDate]
//!  → EnterContacts → EnterComment → Confirm`.
//!
//! [`IntakeState::advance`] is pure: it consumes the state and one input and returns the
//! transition. Persisting, replying and notifying happen in the command handler.

use crate::application::wizard::{Rejection, WizardInput, longer_than, parse_area};
use crate::domain::action::{Action, DateChoice};
use crate::domain::catalog::intake_service;
use crate::domain::types::{RequestData, RequestDraft};
use chrono::NaiveDate;

/// Comment replies meaning "no comment".
const SKIP_TOKENS: [&str; 2] = ["skip", "пропустить"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeStep {
    SelectService,
    EnterArea,
    EnterAddress,
    ChooseDate,
    EnterManualDate,
    EnterContacts,
    EnterComment,
    Confirm,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntakeState {
    pub step: IntakeStep,
    pub draft: RequestDraft,
}

#[derive(Debug, Clone, PartialEq)]
pub enum IntakeTransition {
    /// Moved to a new step (or re-entered `EnterArea` through the service shortcut).
    Advanced(IntakeState),
    /// Input refused; state and draft unchanged.
    Rejected(IntakeState, Rejection),
    /// Confirmed; the draft is complete.
    Submitted(RequestData),
    Cancelled,
    /// "Edit" at confirmation: the form must be started over.
    Restart,
}

impl Default for IntakeState {
    fn default() -> Self {
        Self::new()
    }
}

impl IntakeState {
    pub fn new() -> Self {
        Self {
            step: IntakeStep::SelectService,
            draft: RequestDraft::default(),
        }
    }

    /// Entry straight at `EnterArea` with the service already chosen.
    /// Produces the same draft as choosing the service at `SelectService`.
    pub fn with_service(number: usize) -> Option<Self> {
        intake_service(number).map(|service| Self {
            step: IntakeStep::EnterArea,
            draft: RequestDraft::with_service(service),
        })
    }

    pub fn advance(self, input: &WizardInput, today: NaiveDate) -> IntakeTransition {
        match input {
            WizardInput::Action(Action::Cancel) => return IntakeTransition::Cancelled,
            WizardInput::Action(Action::SelectService(n)) => {
                return match Self::with_service(*n) {
                    Some(state) => IntakeTransition::Advanced(state),
                    None => self.reject(Rejection::UnknownService),
                };
            }
            _ => {}
        }

        match (self.step, input) {
            (IntakeStep::SelectService, WizardInput::Text(text)) => {
                match text.trim().parse().ok().and_then(Self::with_service) {
                    Some(state) => IntakeTransition::Advanced(state),
                    None => self.reject(Rejection::UnknownService),
                }
            }
            (IntakeStep::EnterArea, WizardInput::Text(text)) => match parse_area(text) {
                Some(area) => self.next(IntakeStep::EnterAddress, |d| d.area = Some(area)),
                None => self.reject(Rejection::InvalidArea),
            },
            (IntakeStep::EnterAddress, WizardInput::Text(text)) => match longer_than(text, 5) {
                Some(address) => self.next(IntakeStep::ChooseDate, |d| d.address = Some(address)),
                None => self.reject(Rejection::AddressTooShort),
            },
            (IntakeStep::ChooseDate, WizardInput::Action(Action::Date(choice))) => {
                match describe_date(*choice, today) {
                    Some(datetime) => {
                        self.next(IntakeStep::EnterContacts, |d| d.datetime = Some(datetime))
                    }
                    None => self.next(IntakeStep::EnterManualDate, |_| {}),
                }
            }
            (IntakeStep::EnterManualDate, WizardInput::Text(text)) => match longer_than(text, 3) {
                Some(datetime) => {
                    self.next(IntakeStep::EnterContacts, |d| d.datetime = Some(datetime))
                }
                None => self.reject(Rejection::DateTooShort),
            },
            (IntakeStep::EnterContacts, WizardInput::Text(text)) => match longer_than(text, 5) {
                Some(contacts) => {
                    self.next(IntakeStep::EnterComment, |d| d.contacts = Some(contacts))
                }
                None => self.reject(Rejection::ContactsTooShort),
            },
            (IntakeStep::EnterComment, WizardInput::Text(text)) => {
                let comment = parse_comment(text);
                self.next(IntakeStep::Confirm, |d| d.comment = comment)
            }
            (IntakeStep::Confirm, WizardInput::Action(Action::Confirm)) => {
                match self.draft.finalize() {
                    Some(data) => IntakeTransition::Submitted(data),
                    None => {
                        tracing::warn!("Confirmation reached with an incomplete draft: {:?}", self.draft);
                        IntakeTransition::Restart
                    }
                }
            }
            (IntakeStep::Confirm, WizardInput::Action(Action::Edit)) => IntakeTransition::Restart,
            (step, _) => self.reject(expected_input(step)),
        }
    }

    fn next(mut self, step: IntakeStep, fill: impl FnOnce(&mut RequestDraft)) -> IntakeTransition {
        fill(&mut self.draft);
        self.step = step;
        IntakeTransition::Advanced(self)
    }

    fn reject(self, reason: Rejection) -> IntakeTransition {
        IntakeTransition::Rejected(self, reason)
    }
}

fn expected_input(step: IntakeStep) -> Rejection {
    match step {
        IntakeStep::SelectService => Rejection::UnknownService,
        IntakeStep::EnterArea => Rejection::InvalidArea,
        IntakeStep::EnterAddress => Rejection::AddressTooShort,
        IntakeStep::ChooseDate => Rejection::DateChoiceExpected,
        IntakeStep::EnterManualDate => Rejection::DateTooShort,
        IntakeStep::EnterContacts => Rejection::ContactsTooShort,
        IntakeStep::EnterComment => Rejection::TextExpected,
        IntakeStep::Confirm => Rejection::DecisionExpected,
    }
}

/// Text for a fixed date choice, `None` for manual entry.
pub fn describe_date(choice: DateChoice, today: NaiveDate) -> Option<String> {
    match choice {
        DateChoice::Today => Some(format!("Today, {}", today.format("%A, %-d %B %Y"))),
        DateChoice::Tomorrow => {
            let tomorrow = today.succ_opt().unwrap_or(today);
            Some(format!("Tomorrow, {}", tomorrow.format("%A, %-d %B %Y")))
        }
        DateChoice::ThisWeek => Some("This week".to_string()),
        DateChoice::NextWeek => Some("Next week".to_string()),
        DateChoice::Manual => None,
    }
}

fn parse_comment(text: &str) -> Option<String> {
    let trimmed = text.trim();
    let lowered = trimmed.to_lowercase();
    if trimmed.is_empty() || SKIP_TOKENS.contains(&lowered.as_str()) {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn text(s: &str) -> WizardInput {
        WizardInput::Text(s.to_string())
    }

    fn action(a: Action) -> WizardInput {
        WizardInput::Action(a)
    }

    fn advanced(t: IntakeTransition) -> IntakeState {
        match t {
            IntakeTransition::Advanced(state) => state,
            other => panic!("expected Advanced, got {other:?}"),
        }
    }

    fn at_step(step: IntakeStep) -> IntakeState {
        let mut state = IntakeState::with_service(1).unwrap();
        state.draft.area = Some(20.0);
        state.draft.address = Some("Lenina 10".to_string());
        state.draft.datetime = Some("This week".to_string());
        state.draft.contacts = Some("Ivan +7 900".to_string());
        state.step = step;
        state
    }

    #[test]
    fn test_full_scenario_with_skipped_comment() {
        let state = IntakeState::new();
        let state = advanced(state.advance(&action(Action::SelectService(2)), today()));
        assert_eq!(state.step, IntakeStep::EnterArea);
        let state = advanced(state.advance(&text("25.5"), today()));
        let state = advanced(state.advance(&text("ул. Ленина 10"), today()));
        assert_eq!(state.step, IntakeStep::ChooseDate);
        let state = advanced(state.advance(&action(Action::Date(DateChoice::Tomorrow)), today()));
        let state = advanced(state.advance(&text("Ivan, +7 900 123 45 67"), today()));
        let state = advanced(state.advance(&text("Skip"), today()));
        assert_eq!(state.step, IntakeStep::Confirm);

        match state.advance(&action(Action::Confirm), today()) {
            IntakeTransition::Submitted(data) => {
                assert_eq!(data.service, "Multi-level ceilings");
                assert_eq!(data.area, 25.5);
                assert_eq!(data.address, "ул. Ленина 10");
                assert_eq!(data.datetime, "Tomorrow, Tuesday, 20 October 2026");
                assert_eq!(data.contacts, "Ivan, +7 900 123 45 67");
                assert_eq!(data.comment, None);
            }
            other => panic!("expected Submitted, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_area_advances_once_and_is_stored_unchanged() {
        for (input, expected) in [("1", 1.0), ("0.5", 0.5), ("25.5", 25.5), ("120", 120.0)] {
            let state = IntakeState::with_service(1).unwrap();
            let next = advanced(state.advance(&text(input), today()));
            assert_eq!(next.step, IntakeStep::EnterAddress);
            assert_eq!(next.draft.area, Some(expected));
        }
    }

    #[test]
    fn test_invalid_area_leaves_state_unchanged() {
        for input in ["0", "-4", "abc", "", "12 m2"] {
            let state = IntakeState::with_service(3).unwrap();
            let before = state.clone();
            match state.advance(&text(input), today()) {
                IntakeTransition::Rejected(after, reason) => {
                    assert_eq!(after, before);
                    assert_eq!(reason, Rejection::InvalidArea);
                }
                other => panic!("expected Rejected for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_address_needs_more_than_five_characters() {
        let state = at_step(IntakeStep::EnterAddress);
        assert!(matches!(
            state.clone().advance(&text("Lenin"), today()),
            IntakeTransition::Rejected(_, Rejection::AddressTooShort)
        ));
        let next = advanced(state.advance(&text("Lenina"), today()));
        assert_eq!(next.draft.address.as_deref(), Some("Lenina"));
    }

    #[test]
    fn test_manual_date_branch() {
        let state = at_step(IntakeStep::ChooseDate);
        let state = advanced(state.advance(&action(Action::Date(DateChoice::Manual)), today()));
        assert_eq!(state.step, IntakeStep::EnterManualDate);

        let rejected = state.clone().advance(&text("15"), today());
        assert!(matches!(rejected, IntakeTransition::Rejected(_, Rejection::DateTooShort)));

        let state = advanced(state.advance(&text("15 February, 14:00"), today()));
        assert_eq!(state.step, IntakeStep::EnterContacts);
        assert_eq!(state.draft.datetime.as_deref(), Some("15 February, 14:00"));
    }

    #[test]
    fn test_date_step_ignores_free_text() {
        let state = at_step(IntakeStep::ChooseDate);
        assert!(matches!(
            state.advance(&text("tomorrow please"), today()),
            IntakeTransition::Rejected(_, Rejection::DateChoiceExpected)
        ));
    }

    #[test]
    fn test_fixed_date_choices() {
        assert_eq!(
            describe_date(DateChoice::Today, today()).as_deref(),
            Some("Today, Monday, 19 October 2026")
        );
        assert_eq!(describe_date(DateChoice::ThisWeek, today()).as_deref(), Some("This week"));
        assert_eq!(describe_date(DateChoice::NextWeek, today()).as_deref(), Some("Next week"));
        assert_eq!(describe_date(DateChoice::Manual, today()), None);
    }

    #[test]
    fn test_contacts_and_comment() {
        let state = at_step(IntakeStep::EnterContacts);
        assert!(matches!(
            state.clone().advance(&text("Ivan"), today()),
            IntakeTransition::Rejected(_, Rejection::ContactsTooShort)
        ));
        let state = advanced(state.advance(&text("  Anna 8-900-000  "), today()));
        assert_eq!(state.draft.contacts.as_deref(), Some("Anna 8-900-000"));

        let with_comment = advanced(state.clone().advance(&text("Second floor, no lift"), today()));
        assert_eq!(with_comment.draft.comment.as_deref(), Some("Second floor, no lift"));

        let skipped = advanced(state.advance(&text("ПРОПУСТИТЬ"), today()));
        assert_eq!(skipped.draft.comment, None);
    }

    #[test]
    fn test_service_shortcut_matches_normal_path() {
        let normal = advanced(IntakeState::new().advance(&text("4"), today()));
        let shortcut = IntakeState::with_service(4).unwrap();
        assert_eq!(normal, shortcut);

        // From a later step the shortcut starts a fresh draft.
        let later = at_step(IntakeStep::EnterComment);
        let jumped = advanced(later.advance(&action(Action::SelectService(4)), today()));
        assert_eq!(jumped, shortcut);
    }

    #[test]
    fn test_unknown_service_is_rejected() {
        for input in [text("7"), text("ceilings"), action(Action::SelectService(0))] {
            assert!(matches!(
                IntakeState::new().advance(&input, today()),
                IntakeTransition::Rejected(_, Rejection::UnknownService)
            ));
        }
    }

    #[test]
    fn test_cancel_from_any_step() {
        for step in [IntakeStep::SelectService, IntakeStep::EnterAddress, IntakeStep::Confirm] {
            assert_eq!(
                at_step(step).advance(&action(Action::Cancel), today()),
                IntakeTransition::Cancelled
            );
        }
    }

    #[test]
    fn test_confirm_step_decisions() {
        let state = at_step(IntakeStep::Confirm);
        assert_eq!(state.clone().advance(&action(Action::Edit), today()), IntakeTransition::Restart);
        assert!(matches!(
            state.clone().advance(&text("yes"), today()),
            IntakeTransition::Rejected(_, Rejection::DecisionExpected)
        ));
        assert!(matches!(
            state.advance(&action(Action::Confirm), today()),
            IntakeTransition::Submitted(_)
        ));
    }

    #[test]
    fn test_confirm_only_accepted_at_confirm_step() {
        let state = at_step(IntakeStep::EnterContacts);
        assert!(matches!(
            state.advance(&action(Action::Confirm), today()),
            IntakeTransition::Rejected(_, Rejection::ContactsTooShort)
        ));
    }
}
