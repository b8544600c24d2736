//! Notification bodies sent by the intake and contact handlers.

use super::Email;
use crate::intake::Availability;

const SIGNATURE: &str = "Team LifeNest ❤️";

pub fn blood_donation_confirmation(to: &str, name: &str) -> Email {
    Email {
        to: to.to_string(),
        subject: "LifeNest Blood Donation Confirmation".to_string(),
        body: format!(
            "Dear {name},\nThank you for registering to donate blood with LifeNest.\n\n{SIGNATURE}"
        ),
    }
}

pub fn blood_request_received(
    to: &str,
    name: &str,
    blood_group: &str,
    availability: Availability,
) -> Email {
    Email {
        to: to.to_string(),
        subject: "LifeNest Blood Request Received".to_string(),
        body: format!(
            "Dear {name},\nYour blood request ({blood_group}) has been received.\nStatus: {status}\n\n{SIGNATURE}",
            status = availability.label(),
        ),
    }
}

pub fn organ_donation_confirmation(to: &str, name: &str, organ: &str) -> Email {
    Email {
        to: to.to_string(),
        subject: "LifeNest Organ Donation Confirmation".to_string(),
        body: format!(
            "Dear {name},\nThank you for donating an organ ({organ}) with LifeNest.\n\n{SIGNATURE}"
        ),
    }
}

pub fn organ_receiver_confirmation(to: &str, name: &str, organ_needed: &str) -> Email {
    Email {
        to: to.to_string(),
        subject: "LifeNest Organ Receiver Confirmation".to_string(),
        body: format!(
            "Dear {name},\nThank you for registering to receive an organ ({organ_needed}) with LifeNest.\nWe'll reach out when a suitable donor is available.\n\n{SIGNATURE}"
        ),
    }
}

pub fn query_received(to: &str, name: &str) -> Email {
    Email {
        to: to.to_string(),
        subject: "LifeNest Query Received".to_string(),
        body: format!(
            "Dear {name},\n\nThank you for reaching out to LifeNest.\nWe've received your query and will get back to you soon.\n\nBlessings,\n{SIGNATURE}"
        ),
    }
}

/// Forwards a feedback submission to the operator mailbox.
pub fn feedback_forward(
    operator: &str,
    name: &str,
    category: &str,
    rating: &str,
    message: &str,
) -> Email {
    Email {
        to: operator.to_string(),
        subject: format!("Feedback from {name}"),
        body: format!("Category: {category}\nRating: {rating}\nMessage: {message}"),
    }
}
