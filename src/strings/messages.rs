//! # Messages
//!
//! Constant strings and format functions for user-facing notices:
//! errors, acknowledgements and request listings.

use crate::domain::types::{Request, RequestStatus};
use chrono::{DateTime, Local, Utc};

pub const AUTH_DENIED: &str = "⛔ **Authorization Denied**. This action is for the administrator only.";
pub const UNKNOWN_COMMAND: &str = "❓ Unknown command. Send `.help` for the list of commands.";

pub const REQUEST_INTRO: &str = "🎯 **New request**\n\nLet's fill in a short form to estimate the cost and book a measurement.";
pub const WIZARD_CANCELLED: &str = "❌ Request cancelled.\n\nIf you have any questions, you can start again from the main menu.";
pub const EDIT_RESTART: &str = "📝 To change the request, start the form again from the main menu.";
pub const CALCULATION_CANCELLED: &str = "❌ Calculation cancelled.";
pub const NOTHING_TO_CANCEL: &str = "Nothing to cancel.";
pub const NO_ACTIVE_FORM: &str = "This button belongs to a form that is no longer open. Send `.request` to start a new one.";

pub fn request_not_found(id: u64) -> String {
    format!("❌ Request #{id} not found.")
}

pub fn request_created(request: &Request) -> String {
    format!(
        "✅ **Request created!**\n\nRequest number: #{}\nStatus: {}\n\nWe will contact you shortly to clarify the details.\n\nThank you for choosing us!",
        request.id,
        request.status.label()
    )
}

pub fn status_changed(id: u64, status: RequestStatus) -> String {
    format!("✅ Request #{id} is now **{}**. The customer has been notified.", status.label())
}

pub fn status_unchanged(id: u64, status: RequestStatus) -> String {
    format!("ℹ️ Request #{id} is already **{}**.", status.label())
}

pub const NO_OWN_REQUESTS: &str = "📋 You have no requests yet.\n\nOrder a measurement: `.request`";
pub const NO_REQUESTS: &str = "📋 No requests yet.";

pub fn my_requests(requests: &[Request]) -> String {
    let mut out = String::from("📋 **Your requests:**\n");
    for (i, r) in requests.iter().enumerate() {
        out.push_str(&format!(
            "\n{}. {} #{}\n   📅 {}\n   🏠 {}\n   📍 {}\n   Status: {}\n",
            i + 1,
            r.status.emoji(),
            r.id,
            short_date(&r.created_at),
            r.data.service,
            r.data.address,
            r.status.label()
        ));
    }
    out
}

pub fn all_requests(requests: &[Request]) -> String {
    let mut out = String::from("📋 **All requests:**\n");
    for (i, r) in requests.iter().enumerate() {
        out.push_str(&format!(
            "\n{}. {} #{}\n   📅 {}\n   👤 {} ({})\n   🏠 {}\n   📍 {}\n   Status: {}\n",
            i + 1,
            r.status.emoji(),
            r.id,
            short_date(&r.created_at),
            r.user_name,
            r.user_id,
            r.data.service,
            r.data.address,
            r.status.label()
        ));
    }
    out
}

pub fn short_date(at: &DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%d.%m.%Y").to_string()
}

pub fn full_date(at: &DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%d.%m.%Y %H:%M").to_string()
}

/// Whole rubles with a space between thousands: `18 000`.
pub fn rubles(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::RequestData;

    #[test]
    fn test_rubles_grouping() {
        assert_eq!(rubles(0), "0");
        assert_eq!(rubles(999), "999");
        assert_eq!(rubles(18000), "18 000");
        assert_eq!(rubles(1234567), "1 234 567");
    }

    #[test]
    fn test_request_listing_numbers_entries() {
        let request = |id, status| Request {
            id,
            user_id: "@u:x".to_string(),
            user_name: "Sergei".to_string(),
            created_at: Utc::now(),
            status,
            data: RequestData {
                service: "Interior design".to_string(),
                area: 60.0,
                address: "Gagarina 44".to_string(),
                datetime: "Next week".to_string(),
                contacts: "Sergei 8 800".to_string(),
                comment: None,
            },
        };
        let text = all_requests(&[request(2, RequestStatus::Done), request(1, RequestStatus::New)]);
        assert!(text.contains("1. ✅ #2"));
        assert!(text.contains("2. 🆕 #1"));
        assert!(text.contains("Sergei (@u:x)"));

        let mine = my_requests(&[request(1, RequestStatus::InProgress)]);
        assert!(mine.contains("Status: in progress"));
        assert!(!mine.contains("@u:x"));
    }
}
