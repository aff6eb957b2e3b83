//! # Wizard Strings
//!
//! Step prompts and keyboards for the intake and calculator wizards, the validation
//! notices shown when a step refuses input, and the estimate card.

use crate::application::calculator::{CalculatorState, Estimate};
use crate::application::intake::{IntakeState, IntakeStep};
use crate::application::wizard::Rejection;
use crate::domain::action::{Action, DateChoice};
use crate::domain::catalog::{CeilingType, INTAKE_SERVICES};
use crate::domain::types::{Button, Reply, RequestDraft};
use crate::strings::messages::rubles;

const RULE: &str = "─────────────────────";

fn cancel_row() -> Vec<Button> {
    vec![Button::action("❌ Cancel", Action::Cancel)]
}

/// Prompt for the step `state` is waiting on, echoing the value entered last.
pub fn intake_prompt(state: &IntakeState) -> Reply {
    let d = &state.draft;
    let field = |v: &Option<String>| v.clone().unwrap_or_default();
    match state.step {
        IntakeStep::SelectService => {
            let mut text = String::from("📋 **Step 1 of 6**\n\nChoose a service:\n");
            for (i, service) in INTAKE_SERVICES.iter().enumerate() {
                text.push_str(&format!("\n{}. {}", i + 1, service));
            }
            let mut keyboard: Vec<Vec<Button>> = INTAKE_SERVICES
                .chunks(2)
                .enumerate()
                .map(|(row, pair)| {
                    pair.iter()
                        .enumerate()
                        .map(|(col, name)| {
                            Button::action(*name, Action::SelectService(row * 2 + col + 1))
                        })
                        .collect()
                })
                .collect();
            keyboard.push(cancel_row());
            Reply::text(text).with_keyboard(keyboard)
        }
        IntakeStep::EnterArea => Reply::text(format!(
            "📋 **Step 2 of 6**\n\nSelected service: {}\n\nEnter the room area (m²):",
            field(&d.service)
        ))
        .with_keyboard(vec![cancel_row()]),
        IntakeStep::EnterAddress => Reply::text(format!(
            "📋 **Step 3 of 6**\n\nArea: {} m²\n\nEnter the address for the measurement:",
            d.area.unwrap_or_default()
        ))
        .with_keyboard(vec![cancel_row()]),
        IntakeStep::ChooseDate => Reply::text(format!(
            "📋 **Step 4 of 6**\n\nAddress: {}\n\nChoose a convenient date for the measurement:",
            field(&d.address)
        ))
        .with_keyboard(vec![
            vec![
                Button::action("Today", Action::Date(DateChoice::Today)),
                Button::action("Tomorrow", Action::Date(DateChoice::Tomorrow)),
            ],
            vec![
                Button::action("This week", Action::Date(DateChoice::ThisWeek)),
                Button::action("Next week", Action::Date(DateChoice::NextWeek)),
            ],
            vec![Button::action("✍️ Enter a date", Action::Date(DateChoice::Manual))],
            cancel_row(),
        ]),
        IntakeStep::EnterManualDate => Reply::text(
            "📋 **Step 4 of 6 (continued)**\n\nEnter the preferred date and time for the measurement (for example: \"15 February, 14:00\"):",
        )
        .with_keyboard(vec![cancel_row()]),
        IntakeStep::EnterContacts => Reply::text(format!(
            "📋 **Step 5 of 6**\n\nDate: {}\n\nEnter your name and phone number:\nFor example: Ivan, +7 (983) 123-45-67",
            field(&d.datetime)
        ))
        .with_keyboard(vec![cancel_row()]),
        IntakeStep::EnterComment => Reply::text(format!(
            "📋 **Step 6 of 6**\n\nContacts: {}\n\nAdd a comment to the request (optional) or type \"skip\":",
            field(&d.contacts)
        ))
        .with_keyboard(vec![cancel_row()]),
        IntakeStep::Confirm => Reply::text(draft_summary(d)).with_keyboard(vec![
            vec![
                Button::action("✅ Confirm", Action::Confirm),
                Button::action("❌ Cancel", Action::Cancel),
            ],
            vec![Button::action("📝 Edit", Action::Edit)],
        ]),
    }
}

pub fn draft_summary(d: &RequestDraft) -> String {
    format!(
        "📋 **Please check your request:**\n\n\
         🏠 Service: {}\n\
         📐 Area: {} m²\n\
         📍 Address: {}\n\
         📅 Date: {}\n\
         👤 Contacts: {}\n\
         💬 Comment: {}",
        d.service.as_deref().unwrap_or_default(),
        d.area.unwrap_or_default(),
        d.address.as_deref().unwrap_or_default(),
        d.datetime.as_deref().unwrap_or_default(),
        d.contacts.as_deref().unwrap_or_default(),
        d.comment.as_deref().unwrap_or("None"),
    )
}

pub fn rejection(reason: Rejection) -> &'static str {
    match reason {
        Rejection::UnknownService => "⚠️ Please choose a service from the list.",
        Rejection::InvalidArea => "⚠️ Please enter a valid number (area in m², up to 100 000).",
        Rejection::AddressTooShort => "⚠️ Please enter the full address (more than 5 characters).",
        Rejection::DateChoiceExpected => "⚠️ Please pick one of the offered options.",
        Rejection::DateTooShort => "⚠️ Please enter a valid date.",
        Rejection::ContactsTooShort => "⚠️ Please enter your name and phone number.",
        Rejection::TextExpected => "⚠️ Please type your comment or \"skip\".",
        Rejection::DecisionExpected => "⚠️ Please confirm, cancel or edit the request.",
        Rejection::CeilingTypeExpected => "⚠️ Please choose a ceiling type from the list.",
    }
}

pub fn calculator_prompt(state: &CalculatorState) -> Reply {
    match state {
        CalculatorState::SelectType => {
            let mut text = String::from("📐 **Ceiling price calculator**\n\nChoose a ceiling type:\n");
            for (i, kind) in CeilingType::ALL.iter().enumerate() {
                text.push_str(&format!("\n{}. {} ({} ₽/m²)", i + 1, kind.name(), kind.unit_price()));
            }
            let mut keyboard: Vec<Vec<Button>> = CeilingType::ALL
                .chunks(2)
                .map(|pair| {
                    pair.iter()
                        .map(|kind| Button::action(kind.short_name(), Action::CalcType(*kind)))
                        .collect()
                })
                .collect();
            keyboard.push(cancel_row());
            Reply::text(text).with_keyboard(keyboard)
        }
        CalculatorState::EnterArea(kind) => Reply::text(format!(
            "📐 **Step 2 of 3**\n\nSelected: {}\n\nEnter the room area (m²):",
            kind.name()
        ))
        .with_keyboard(vec![cancel_row()]),
    }
}

pub fn estimate(e: &Estimate) -> Reply {
    let text = format!(
        "💰 **PRICE ESTIMATE**\n\n\
         {RULE}\n\n\
         🏠 Ceiling type:\n{kind}\n\n\
         📐 Room area:\n{area} m²\n\n\
         💵 Price per m²:\n{unit} ₽\n\n\
         {RULE}\n\n\
         📊 **ESTIMATED COST:**\n{low} - {high} ₽\n\n\
         {RULE}\n\n\
         💡 **Included:**\n\
         ✅ Ceiling material\n\
         ✅ Installation\n\
         ✅ Basic chandelier\n\n\
         🔧 **Paid separately:**\n\
         ❗ LED lighting\n\
         ❗ Corner profiles\n\
         ❗ Additional light fixtures\n\n\
         {RULE}\n\n\
         🎁 **Want an exact quote?**\nBook a free measurement!",
        kind = e.kind.name(),
        area = e.area,
        unit = e.unit_price,
        low = rubles(e.low),
        high = rubles(e.high),
    );
    Reply::text(text).with_keyboard(vec![
        vec![
            Button::action("🎯 Place a request", Action::Consultation),
            Button::action("📞 Request a call", Action::RequestCall),
        ],
        vec![
            Button::action("📊 All prices", Action::Prices),
            Button::action("🏠 Main menu", Action::MainMenu),
        ],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::calculator::price_range;

    #[test]
    fn test_every_step_names_its_position() {
        let mut state = IntakeState::with_service(1).unwrap();
        for (step, label) in [
            (IntakeStep::EnterArea, "Step 2 of 6"),
            (IntakeStep::EnterAddress, "Step 3 of 6"),
            (IntakeStep::ChooseDate, "Step 4 of 6"),
            (IntakeStep::EnterManualDate, "Step 4 of 6"),
            (IntakeStep::EnterContacts, "Step 5 of 6"),
            (IntakeStep::EnterComment, "Step 6 of 6"),
        ] {
            state.step = step;
            assert!(intake_prompt(&state).text.contains(label), "{step:?}");
        }
        assert!(intake_prompt(&IntakeState::new()).text.contains("Step 1 of 6"));
    }

    #[test]
    fn test_service_buttons_are_numbered_from_one() {
        let reply = intake_prompt(&IntakeState::new());
        let actions: Vec<Action> = reply
            .keyboard
            .iter()
            .flatten()
            .filter_map(|b| match &b.target {
                crate::domain::types::ButtonTarget::Action(a) => Some(*a),
                _ => None,
            })
            .collect();
        assert_eq!(
            actions,
            vec![
                Action::SelectService(1),
                Action::SelectService(2),
                Action::SelectService(3),
                Action::SelectService(4),
                Action::SelectService(5),
                Action::Cancel,
            ]
        );
    }

    #[test]
    fn test_summary_shows_missing_comment_as_none() {
        let draft = RequestDraft {
            service: Some("Interior design".to_string()),
            area: Some(30.0),
            address: Some("Lenina 10".to_string()),
            datetime: Some("Next week".to_string()),
            contacts: Some("Olga 555-12".to_string()),
            comment: None,
        };
        let text = draft_summary(&draft);
        assert!(text.contains("Area: 30 m²"));
        assert!(text.contains("Comment: None"));
    }

    #[test]
    fn test_estimate_card() {
        let (low, high) = price_range(2000, 10.0);
        let reply = estimate(&Estimate {
            kind: CeilingType::Stretch,
            area: 10.0,
            unit_price: 2000,
            low,
            high,
        });
        assert!(reply.text.contains("18 000 - 24 000 ₽"));
        assert_eq!(reply.keyboard.len(), 2);
    }
}
