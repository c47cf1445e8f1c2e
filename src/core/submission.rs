//! Metadata attached to a contact message before it is handed to the
//! outbound transport. Delivery itself is not handled here.

use crate::core::classifier::Classifier;
use crate::domain::model::{ContactMessage, PracticeArea, UrgencyLevel};
use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize, Serializer};

pub const DEFAULT_SOURCE: &str = "Website - Contact Form";
const NOT_PROVIDED: &str = "Not provided";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionSettings {
    pub recipient: String,
    #[serde(default = "default_source")]
    pub source: String,
}

fn default_source() -> String {
    DEFAULT_SOURCE.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingSubmission {
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub consultation_subject: String,
    pub consultation_message: String,
    pub consultation_type: String,
    pub to_email: String,
    pub timestamp: String,
    pub date_only: String,
    pub time_only: String,
    pub day_of_week: String,
    pub reply_to: String,
    pub contact_preference: String,
    pub urgency_level: UrgencyLevel,
    #[serde(serialize_with = "serialize_area_label")]
    pub practice_area: PracticeArea,
    pub source: String,
    pub message_length: usize,
    pub has_phone: String,
}

fn serialize_area_label<S>(area: &PracticeArea, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(area.label())
}

/// Any non-empty phone field counts as a phone contact, even when it trims
/// down to nothing; only `client_phone` falls back to "Not provided".
fn phone_given(message: &ContactMessage) -> bool {
    message.phone.as_deref().is_some_and(|phone| !phone.is_empty())
}

fn trimmed_phone(message: &ContactMessage) -> Option<&str> {
    message
        .phone
        .as_deref()
        .map(str::trim)
        .filter(|phone| !phone.is_empty())
}

/// Builds the outgoing metadata for `message` as of `now`.
pub fn compose<Tz>(
    message: &ContactMessage,
    classifier: &Classifier,
    settings: &SubmissionSettings,
    now: &DateTime<Tz>,
) -> OutgoingSubmission
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let email = message.email.trim().to_lowercase();
    let has_phone = phone_given(message);
    let classification = classifier.classify(message);

    OutgoingSubmission {
        client_name: message.name.trim().to_string(),
        client_email: email.clone(),
        client_phone: trimmed_phone(message).unwrap_or(NOT_PROVIDED).to_string(),
        consultation_subject: message.subject.clone(),
        consultation_message: message.message.trim().to_string(),
        consultation_type: message.subject.clone(),
        to_email: settings.recipient.clone(),
        timestamp: now.format("%d/%m/%Y, %H:%M:%S").to_string(),
        date_only: now.format("%-m/%-d/%Y").to_string(),
        time_only: now.format("%-I:%M:%S %p").to_string(),
        day_of_week: now.format("%A").to_string(),
        reply_to: email,
        contact_preference: if has_phone { "Email or Phone" } else { "Email" }.to_string(),
        urgency_level: classification.urgency_level,
        practice_area: classification.practice_area,
        source: settings.source.clone(),
        message_length: message.message.chars().count(),
        has_phone: if has_phone { "Yes" } else { "No" }.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    fn settings() -> SubmissionSettings {
        SubmissionSettings {
            recipient: "contact@johnsmithlaw.com".to_string(),
            source: DEFAULT_SOURCE.to_string(),
        }
    }

    #[test]
    fn test_compose_with_phone() {
        let now = FixedOffset::west_opt(3 * 3600)
            .unwrap()
            .with_ymd_and_hms(2025, 3, 7, 14, 5, 9)
            .unwrap();
        let message = ContactMessage {
            name: "  Jane Roe ".to_string(),
            email: " Jane@Example.COM ".to_string(),
            phone: Some(" 5551234567 ".to_string()),
            subject: "Urgent divorce hearing".to_string(),
            message: "  Need help.  ".to_string(),
        };

        let out = compose(&message, &Classifier::default(), &settings(), &now);

        assert_eq!(out.client_name, "Jane Roe");
        assert_eq!(out.client_email, "jane@example.com");
        assert_eq!(out.reply_to, "jane@example.com");
        assert_eq!(out.client_phone, "5551234567");
        assert_eq!(out.contact_preference, "Email or Phone");
        assert_eq!(out.has_phone, "Yes");
        assert_eq!(out.consultation_message, "Need help.");
        assert_eq!(out.consultation_type, "Urgent divorce hearing");
        assert_eq!(out.urgency_level, UrgencyLevel::Urgent);
        assert_eq!(out.practice_area, PracticeArea::Family);
        assert_eq!(out.timestamp, "07/03/2025, 14:05:09");
        assert_eq!(out.date_only, "3/7/2025");
        assert_eq!(out.time_only, "2:05:09 PM");
        assert_eq!(out.day_of_week, "Friday");
        assert_eq!(out.message_length, 14);
    }

    #[test]
    fn test_whitespace_phone_still_counts_as_given() {
        let now = chrono::Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let message = ContactMessage {
            phone: Some("   ".to_string()),
            ..ContactMessage::with_subject("Question")
        };

        let out = compose(&message, &Classifier::default(), &settings(), &now);

        assert_eq!(out.client_phone, "Not provided");
        assert_eq!(out.contact_preference, "Email or Phone");
        assert_eq!(out.has_phone, "Yes");
        assert_eq!(out.urgency_level, UrgencyLevel::Normal);
        assert_eq!(out.practice_area, PracticeArea::GeneralConsultation);
    }

    #[test]
    fn test_missing_or_empty_phone() {
        let now = chrono::Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        for phone in [None, Some(String::new())] {
            let message = ContactMessage {
                phone,
                ..ContactMessage::with_subject("Question")
            };

            let out = compose(&message, &Classifier::default(), &settings(), &now);

            assert_eq!(out.client_phone, "Not provided");
            assert_eq!(out.contact_preference, "Email");
            assert_eq!(out.has_phone, "No");
        }
    }

    #[test]
    fn test_serializes_display_labels() {
        let now = chrono::Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let out = compose(
            &ContactMessage::with_subject("Tax audit"),
            &Classifier::default(),
            &settings(),
            &now,
        );
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["practice_area"], "Tax Law");
        assert_eq!(json["urgency_level"], "NORMAL");
        assert_eq!(json["source"], "Website - Contact Form");

        let general = compose(
            &ContactMessage::with_subject("Other"),
            &Classifier::default(),
            &settings(),
            &now,
        );
        let json = serde_json::to_value(&general).unwrap();
        assert_eq!(json["practice_area"], "General Consultation");
    }
}
