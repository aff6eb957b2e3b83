//! # Notification Templates
//!
//! Messages sent outside the current conversation: the new-request alert for the
//! admin, status updates for customers, and the customer contact card.

use crate::domain::action::Action;
use crate::domain::types::{Button, Reply, Request, RequestStatus};
use crate::strings::messages::full_date;

const RULE: &str = "─────────────────────";

pub fn admin_new_request(request: &Request) -> Reply {
    let d = &request.data;
    let text = format!(
        "🆕 **NEW REQUEST #{id}**\n\n\
         👤 Customer: {name}\n\
         🆔 Customer ID: {user}\n\
         📅 Created: {created}\n\n\
         📋 **Request details:**\n\n\
         🏠 Service: {service}\n\
         📐 Area: {area} m²\n\
         📍 Address: {address}\n\
         📅 Preferred date: {datetime}\n\
         👤 Contacts: {contacts}\n\
         💬 Comment: {comment}\n\n\
         {RULE}\n\n\
         Status: {status}",
        id = request.id,
        name = request.user_name,
        user = request.user_id,
        created = full_date(&request.created_at),
        service = d.service,
        area = d.area,
        address = d.address,
        datetime = d.datetime,
        contacts = d.contacts,
        comment = d.comment.as_deref().unwrap_or("None"),
        status = request.status.label(),
    );
    Reply::text(text).with_keyboard(vec![
        vec![Button::action("📞 Contact customer", Action::AdminContact(request.id))],
        vec![
            Button::action("🔄 In progress", Action::AdminInProgress(request.id)),
            Button::action("✅ Done", Action::AdminDone(request.id)),
        ],
        vec![Button::action("📊 All requests", Action::AdminRequests)],
    ])
}

pub fn customer_status_update(request: &Request) -> Reply {
    let text = match request.status {
        RequestStatus::InProgress => format!(
            "🔄 **Your request has been accepted!**\n\nRequest number: #{}\nStatus: {}\n\nWe will contact you shortly to clarify the details.",
            request.id,
            request.status.label()
        ),
        RequestStatus::Done => format!(
            "✅ **Your request is complete!**\n\nRequest number: #{}\nStatus: {}\n\nThank you for working with us! If you have more questions, we are always in touch.",
            request.id,
            request.status.label()
        ),
        RequestStatus::New => format!(
            "🆕 Request #{} is registered and waiting for a manager.",
            request.id
        ),
    };
    Reply::text(text)
}

pub fn matrix_to(user_id: &str) -> String {
    format!("https://matrix.to/#/{user_id}")
}

pub fn contact_card(request: &Request) -> Reply {
    let link = matrix_to(&request.user_id);
    let text = format!(
        "📞 **Customer contacts**\n\n\
         Request: #{}\n\
         👤 Customer: {}\n\
         🆔 ID: {}\n\
         📞 Contacts: {}\n\
         📍 Address: {}\n\n\
         {RULE}\n\n\
         To message the customer directly: {link}",
        request.id, request.user_name, request.user_id, request.data.contacts, request.data.address,
    );
    Reply::text(text).with_keyboard(vec![vec![Button::url("💬 Write to the customer", link)]])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{ButtonTarget, RequestData};

    fn request(status: RequestStatus) -> Request {
        Request {
            id: 77,
            user_id: "@anna:example.org".to_string(),
            user_name: "Anna".to_string(),
            created_at: chrono::Utc::now(),
            status,
            data: RequestData {
                service: "Stretch ceilings".to_string(),
                area: 25.5,
                address: "Lenina 10".to_string(),
                datetime: "This week".to_string(),
                contacts: "Anna +7 983".to_string(),
                comment: None,
            },
        }
    }

    #[test]
    fn test_admin_alert_lists_every_field() {
        let reply = admin_new_request(&request(RequestStatus::New));
        for needle in ["#77", "Anna", "@anna:example.org", "Stretch ceilings", "25.5 m²", "Lenina 10", "This week", "Anna +7 983", "Comment: None", "Status: new"] {
            assert!(reply.text.contains(needle), "missing {needle}");
        }
        assert_eq!(
            reply.keyboard[1][1].target,
            ButtonTarget::Action(Action::AdminDone(77))
        );
    }

    #[test]
    fn test_customer_updates_differ_by_status() {
        let accepted = customer_status_update(&request(RequestStatus::InProgress));
        let completed = customer_status_update(&request(RequestStatus::Done));
        assert!(accepted.text.contains("accepted"));
        assert!(completed.text.contains("complete"));
        assert!(completed.text.contains("#77"));
    }

    #[test]
    fn test_contact_card_links_to_customer() {
        let reply = contact_card(&request(RequestStatus::New));
        assert_eq!(
            reply.keyboard[0][0].target,
            ButtonTarget::Url("https://matrix.to/#/@anna:example.org".to_string())
        );
    }
}
