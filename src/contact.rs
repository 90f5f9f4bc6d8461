//! Contact form relay.
//!
//! The form is forwarded to a third-party form endpoint (Formspree by
//! default) as a form-encoded POST. Every attempt resolves to exactly one
//! `ContactStatus`; none of them is an error to the caller.

use serde::Serialize;
use tracing::{info, warn};

/// Formspree form that receives portfolio messages
pub const DEFAULT_ENDPOINT: &str = "https://formspree.io/f/xzzkajpn";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// One input of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn next(self) -> Field {
        match self {
            Field::Name => Field::Email,
            Field::Email => Field::Message,
            Field::Message => Field::Name,
        }
    }

    pub fn previous(self) -> Field {
        match self {
            Field::Name => Field::Message,
            Field::Email => Field::Name,
            Field::Message => Field::Email,
        }
    }

    /// Translation key of the field label
    pub fn label_key(self) -> &'static str {
        match self {
            Field::Name => "contact.name",
            Field::Email => "contact.email",
            Field::Message => "contact.message",
        }
    }
}

impl ContactForm {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    /// True when any required field is empty
    pub fn is_incomplete(&self) -> bool {
        self.name.is_empty() || self.email.is_empty() || self.message.is_empty()
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// How a notification should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

/// Outcome of one submission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactStatus {
    /// A required field was empty; nothing was sent
    MissingFields,
    /// The endpoint accepted the message (2xx)
    Sent,
    /// The endpoint answered with a non-2xx status
    Rejected,
    /// The request never got a response
    NetworkError,
}

impl ContactStatus {
    pub fn severity(&self) -> Severity {
        match self {
            ContactStatus::MissingFields => Severity::Warning,
            ContactStatus::Sent => Severity::Success,
            ContactStatus::Rejected | ContactStatus::NetworkError => Severity::Error,
        }
    }

    /// Translation key of the user-facing message
    pub fn message_key(&self) -> &'static str {
        match self {
            ContactStatus::MissingFields => "contact.fillFields",
            ContactStatus::Sent => "contact.success",
            ContactStatus::Rejected => "contact.error",
            ContactStatus::NetworkError => "contact.networkError",
        }
    }
}

/// Client for the form endpoint
#[derive(Debug, Clone)]
pub struct ContactRelay {
    client: reqwest::Client,
    endpoint: String,
}

impl ContactRelay {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Validate and send the form.
    ///
    /// Incomplete forms resolve to `MissingFields` without a request.
    pub async fn submit(&self, form: &ContactForm) -> ContactStatus {
        if form.is_incomplete() {
            return ContactStatus::MissingFields;
        }

        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .form(form)
            .send()
            .await;

        match response {
            Ok(response) if response.status().is_success() => {
                info!("Contact message delivered ({})", response.status());
                ContactStatus::Sent
            }
            Ok(response) => {
                let status = response.status();
                // Formspree explains rejections as {"errors": [...]}
                let body = response
                    .json::<serde_json::Value>()
                    .await
                    .map(|v| v.to_string())
                    .unwrap_or_default();
                warn!("Contact endpoint rejected message: {} - {}", status, body);
                ContactStatus::Rejected
            }
            Err(e) => {
                warn!("Contact request failed: {}", e);
                ContactStatus::NetworkError
            }
        }
    }
}

/// What `ContactSession::begin` decided
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// A request is already in flight
    Busy,
    /// Resolved without a request
    Done(ContactStatus),
    /// Send this form; call `finish` with the result
    Dispatch(ContactForm),
}

/// Form contents plus the in-flight flag, owned by the UI loop
#[derive(Debug, Default)]
pub struct ContactSession {
    pub form: ContactForm,
    sending: bool,
}

impl ContactSession {
    pub fn is_sending(&self) -> bool {
        self.sending
    }

    /// Start an attempt. Only `Dispatch` marks the session as sending.
    pub fn begin(&mut self) -> Submission {
        if self.sending {
            return Submission::Busy;
        }
        if self.form.is_incomplete() {
            return Submission::Done(ContactStatus::MissingFields);
        }
        self.sending = true;
        Submission::Dispatch(self.form.clone())
    }

    /// Complete an attempt; a delivered message clears the form
    pub fn finish(&mut self, status: ContactStatus) {
        self.sending = false;
        if status == ContactStatus::Sent {
            self.form.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn filled() -> ContactForm {
        ContactForm::new("Ada", "ada@example.com", "Hello there")
    }

    // ==================== Form Tests ====================

    #[test]
    fn test_incomplete_form() {
        assert!(ContactForm::default().is_incomplete());
        assert!(ContactForm::new("Ada", "", "Hi").is_incomplete());
        assert!(ContactForm::new("Ada", "a@b.c", "").is_incomplete());
        assert!(!filled().is_incomplete());
    }

    #[test]
    fn test_whitespace_counts_as_filled() {
        assert!(!ContactForm::new(" ", " ", " ").is_incomplete());
    }

    #[test]
    fn test_field_access() {
        let mut form = ContactForm::default();
        form.field_mut(Field::Email).push_str("x@y.z");
        assert_eq!(form.field(Field::Email), "x@y.z");
        assert_eq!(form.email, "x@y.z");
    }

    #[test]
    fn test_field_cycle() {
        assert_eq!(Field::Name.next(), Field::Email);
        assert_eq!(Field::Message.next(), Field::Name);
        assert_eq!(Field::Name.previous(), Field::Message);
        for field in Field::ALL {
            assert_eq!(field.next().previous(), field);
        }
    }

    // ==================== Status Tests ====================

    #[test]
    fn test_status_severity() {
        assert_eq!(ContactStatus::Sent.severity(), Severity::Success);
        assert_eq!(ContactStatus::MissingFields.severity(), Severity::Warning);
        assert_eq!(ContactStatus::Rejected.severity(), Severity::Error);
        assert_eq!(ContactStatus::NetworkError.severity(), Severity::Error);
    }

    #[test]
    fn test_status_message_keys_are_distinct() {
        let keys = [
            ContactStatus::MissingFields.message_key(),
            ContactStatus::Sent.message_key(),
            ContactStatus::Rejected.message_key(),
            ContactStatus::NetworkError.message_key(),
        ];
        for (i, a) in keys.iter().enumerate() {
            for b in &keys[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    // ==================== Session Tests ====================

    #[test]
    fn test_begin_incomplete_resolves_immediately() {
        let mut session = ContactSession::default();
        assert_eq!(
            session.begin(),
            Submission::Done(ContactStatus::MissingFields)
        );
        assert!(!session.is_sending());
    }

    #[test]
    fn test_begin_blocks_resubmission() {
        let mut session = ContactSession {
            form: filled(),
            ..Default::default()
        };

        assert_eq!(session.begin(), Submission::Dispatch(filled()));
        assert!(session.is_sending());
        assert_eq!(session.begin(), Submission::Busy);
    }

    #[test]
    fn test_finish_sent_clears_form() {
        let mut session = ContactSession {
            form: filled(),
            ..Default::default()
        };
        session.begin();
        session.finish(ContactStatus::Sent);

        assert!(!session.is_sending());
        assert_eq!(session.form, ContactForm::default());
    }

    #[test]
    fn test_finish_failure_keeps_form() {
        for status in [ContactStatus::Rejected, ContactStatus::NetworkError] {
            let mut session = ContactSession {
                form: filled(),
                ..Default::default()
            };
            session.begin();
            session.finish(status);

            assert!(!session.is_sending());
            assert_eq!(session.form, filled());
        }
    }

    // ==================== Relay Tests ====================

    #[tokio::test]
    async fn test_submit_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/f/test"))
            .and(header("accept", "application/json"))
            .and(body_string_contains("name=Ada"))
            .and(body_string_contains("email=ada%40example.com"))
            .and(body_string_contains("message=Hello+there"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"ok":true}"#))
            .expect(1)
            .mount(&server)
            .await;

        let relay = ContactRelay::new(format!("{}/f/test", server.uri()));
        assert_eq!(relay.submit(&filled()).await, ContactStatus::Sent);
    }

    #[tokio::test]
    async fn test_submit_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(422).set_body_string(r#"{"error":"bad"}"#))
            .mount(&server)
            .await;

        let relay = ContactRelay::new(server.uri());
        assert_eq!(relay.submit(&filled()).await, ContactStatus::Rejected);
    }

    #[tokio::test]
    async fn test_submit_incomplete_sends_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let relay = ContactRelay::new(server.uri());
        let form = ContactForm::new("Ada", "", "Hi");
        assert_eq!(relay.submit(&form).await, ContactStatus::MissingFields);
    }

    #[test]
    fn test_default_endpoint() {
        assert_eq!(DEFAULT_ENDPOINT, "https://formspree.io/f/xzzkajpn");
        assert_eq!(ContactRelay::new(DEFAULT_ENDPOINT).endpoint(), DEFAULT_ENDPOINT);
    }
}
