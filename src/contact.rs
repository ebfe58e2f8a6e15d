use serde::{Deserialize, Serialize};

pub const STATUS_CLEAR_MS: u32 = 5_000;
pub const CONTACT_ENDPOINT: &str = "/api/contact";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RelayResponse {
    pub fn sent() -> Self {
        Self {
            ok: true,
            error: None,
        }
    }

    pub fn failed(error: &str) -> Self {
        Self {
            ok: false,
            error: Some(error.to_string()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactLimits {
    pub name_chars: usize,
    pub email_chars: usize,
    pub message_chars: usize,
}

impl Default for ContactLimits {
    fn default() -> Self {
        Self {
            name_chars: 100,
            email_chars: 254,
            message_chars: 5_000,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactFieldError {
    MissingName,
    MissingEmail,
    InvalidEmail,
    MissingMessage,
    TooLong(ContactField),
}

impl ContactFieldError {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingName => "missing_name",
            Self::MissingEmail => "missing_email",
            Self::InvalidEmail => "invalid_email",
            Self::MissingMessage => "missing_message",
            Self::TooLong(ContactField::Name) => "name_too_long",
            Self::TooLong(ContactField::Email) => "email_too_long",
            Self::TooLong(ContactField::Message) => "message_too_long",
        }
    }

    pub fn field(self) -> ContactField {
        match self {
            Self::MissingName => ContactField::Name,
            Self::MissingEmail | Self::InvalidEmail => ContactField::Email,
            Self::MissingMessage => ContactField::Message,
            Self::TooLong(field) => field,
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            Self::MissingName => "Please tell me your name.",
            Self::MissingEmail => "An email address is needed to reply.",
            Self::InvalidEmail => "That email address does not look right.",
            Self::MissingMessage => "The message is empty.",
            Self::TooLong(_) => "That is a bit too long.",
        }
    }
}

fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
}

impl ContactMessage {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    pub fn validate(&self, limits: &ContactLimits) -> Result<ContactMessage, ContactFieldError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        if name.is_empty() {
            return Err(ContactFieldError::MissingName);
        }
        if name.chars().count() > limits.name_chars {
            return Err(ContactFieldError::TooLong(ContactField::Name));
        }

        if email.is_empty() {
            return Err(ContactFieldError::MissingEmail);
        }
        if email.chars().count() > limits.email_chars {
            return Err(ContactFieldError::TooLong(ContactField::Email));
        }
        if !looks_like_email(email) {
            return Err(ContactFieldError::InvalidEmail);
        }

        if message.is_empty() {
            return Err(ContactFieldError::MissingMessage);
        }
        if message.chars().count() > limits.message_chars {
            return Err(ContactFieldError::TooLong(ContactField::Message));
        }

        Ok(ContactMessage::new(name, email, message))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed,
}

impl SubmitStatus {
    pub fn message(self) -> Option<&'static str> {
        match self {
            Self::Sent => Some("Message sent!"),
            Self::Failed => Some("Failed to send"),
            Self::Idle | Self::Sending => None,
        }
    }

    pub fn button_label(self) -> &'static str {
        match self {
            Self::Sending => "Sending...",
            _ => "Send Message",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitTicket(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitRejected {
    AlreadySending,
    Invalid(ContactFieldError),
}

/// Form state. Every submission gets a ticket; late completions and status
/// timers holding an old ticket are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub draft: ContactMessage,
    status: SubmitStatus,
    field_error: Option<ContactFieldError>,
    latest: u64,
}

impl ContactForm {
    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn field_error(&self) -> Option<ContactFieldError> {
        self.field_error
    }

    pub fn set_field(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.draft.name = value,
            ContactField::Email => self.draft.email = value,
            ContactField::Message => self.draft.message = value,
        }
        if self.field_error.map(ContactFieldError::field) == Some(field) {
            self.field_error = None;
        }
    }

    pub fn begin_submit(
        &mut self,
        limits: &ContactLimits,
    ) -> Result<(SubmitTicket, ContactMessage), SubmitRejected> {
        if self.status == SubmitStatus::Sending {
            return Err(SubmitRejected::AlreadySending);
        }

        let message = match self.draft.validate(limits) {
            Ok(message) => message,
            Err(error) => {
                self.field_error = Some(error);
                return Err(SubmitRejected::Invalid(error));
            }
        };

        self.latest += 1;
        self.field_error = None;
        self.status = SubmitStatus::Sending;
        Ok((SubmitTicket(self.latest), message))
    }

    /// Returns whether the ticket was still current.
    pub fn finish(&mut self, ticket: SubmitTicket, ok: bool) -> bool {
        if ticket.0 != self.latest || self.status != SubmitStatus::Sending {
            return false;
        }

        if ok {
            self.status = SubmitStatus::Sent;
            self.draft = ContactMessage::default();
        } else {
            self.status = SubmitStatus::Failed;
        }
        true
    }

    pub fn clear_status(&mut self, ticket: SubmitTicket) {
        if ticket.0 == self.latest
            && matches!(self.status, SubmitStatus::Sent | SubmitStatus::Failed)
        {
            self.status = SubmitStatus::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set_field(ContactField::Name, " Ada ".to_string());
        form.set_field(ContactField::Email, "ada@example.com".to_string());
        form.set_field(ContactField::Message, "Hi there\n".to_string());
        form
    }

    #[test]
    fn validation_trims_and_reports_the_first_problem() {
        let limits = ContactLimits::default();

        let ok = ContactMessage::new("  Ada ", " ada@example.com ", " hello ")
            .validate(&limits)
            .expect("valid message");
        assert_eq!(ok, ContactMessage::new("Ada", "ada@example.com", "hello"));

        let cases = [
            (ContactMessage::new(" ", "", ""), ContactFieldError::MissingName),
            (ContactMessage::new("Ada", "  ", ""), ContactFieldError::MissingEmail),
            (ContactMessage::new("Ada", "ada@", "x"), ContactFieldError::InvalidEmail),
            (ContactMessage::new("Ada", "a b@c.io", "x"), ContactFieldError::InvalidEmail),
            (ContactMessage::new("Ada", "ada@host", "x"), ContactFieldError::InvalidEmail),
            (ContactMessage::new("Ada", "a@b.io", " \n"), ContactFieldError::MissingMessage),
        ];
        for (message, expected) in cases {
            assert_eq!(message.validate(&limits), Err(expected));
        }
    }

    #[test]
    fn limits_count_characters_not_bytes() {
        let limits = ContactLimits {
            message_chars: 3,
            ..ContactLimits::default()
        };

        assert!(ContactMessage::new("Ada", "a@b.io", "\u{1F680}\u{1F680}\u{1F680}")
            .validate(&limits)
            .is_ok());
        assert_eq!(
            ContactMessage::new("Ada", "a@b.io", "four").validate(&limits),
            Err(ContactFieldError::TooLong(ContactField::Message))
        );
        assert_eq!(
            ContactMessage::new(&"n".repeat(101), "a@b.io", "x")
                .validate(&ContactLimits::default())
                .map_err(ContactFieldError::as_str),
            Err("name_too_long")
        );
    }

    #[test]
    fn successful_send_resets_the_form_then_clears_status() {
        let mut form = filled();
        let limits = ContactLimits::default();

        let (ticket, message) = form.begin_submit(&limits).expect("submission starts");
        assert_eq!(message.name, "Ada");
        assert_eq!(form.status(), SubmitStatus::Sending);
        assert_eq!(
            form.begin_submit(&limits),
            Err(SubmitRejected::AlreadySending)
        );

        assert!(form.finish(ticket, true));
        assert_eq!(form.status().message(), Some("Message sent!"));
        assert_eq!(form.draft, ContactMessage::default());

        form.clear_status(ticket);
        assert_eq!(form.status(), SubmitStatus::Idle);
    }

    #[test]
    fn failure_keeps_the_draft_for_a_retry() {
        let mut form = filled();
        let (ticket, _) = form
            .begin_submit(&ContactLimits::default())
            .expect("submission starts");

        assert!(form.finish(ticket, false));
        assert_eq!(form.status().message(), Some("Failed to send"));
        assert_eq!(form.draft.email, "ada@example.com");
    }

    #[test]
    fn stale_timers_do_not_clear_a_newer_submission() {
        let mut form = filled();
        let limits = ContactLimits::default();

        let (first, _) = form.begin_submit(&limits).expect("first submission");
        form.finish(first, false);

        let (second, _) = form.begin_submit(&limits).expect("retry");
        form.clear_status(first);
        assert_eq!(form.status(), SubmitStatus::Sending);
        assert!(!form.finish(first, true));

        form.finish(second, false);
        form.clear_status(first);
        assert_eq!(form.status(), SubmitStatus::Failed);
        form.clear_status(second);
        assert_eq!(form.status(), SubmitStatus::Idle);
    }

    #[test]
    fn invalid_submit_flags_the_field_until_it_is_edited() {
        let mut form = ContactForm::default();
        form.set_field(ContactField::Name, "Ada".to_string());

        assert_eq!(
            form.begin_submit(&ContactLimits::default()),
            Err(SubmitRejected::Invalid(ContactFieldError::MissingEmail))
        );
        assert_eq!(form.status(), SubmitStatus::Idle);
        assert_eq!(form.field_error().map(ContactFieldError::field), Some(ContactField::Email));

        form.set_field(ContactField::Message, "x".to_string());
        assert!(form.field_error().is_some());
        form.set_field(ContactField::Email, "a@b.io".to_string());
        assert_eq!(form.field_error(), None);
    }

    #[test]
    fn relay_response_omits_empty_error() {
        assert_eq!(
            serde_json::to_string(&RelayResponse::sent()).expect("serializes"),
            r#"{"ok":true}"#
        );
        let parsed: RelayResponse =
            serde_json::from_str(r#"{"ok":false,"error":"upstream_status"}"#).expect("parses");
        assert_eq!(parsed, RelayResponse::failed("upstream_status"));
    }
}
