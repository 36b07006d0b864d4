//! Contact form submission against a mocked transport.

use std::cell::{Cell, RefCell};

use portfolio_core::contact::{FAILED_MESSAGE, INVALID_FORM_MESSAGE, NETWORK_ERROR_MESSAGE, SENT_MESSAGE};
use portfolio_core::{
    ContactConfig, ContactForm, NotificationKind, Submission, Transport, TransportError,
};

/// Answers every request with a fixed outcome and counts calls
struct MockTransport {
    outcome: Result<u16, TransportError>,
    calls: Cell<usize>,
    last: RefCell<Option<Submission>>,
}

impl MockTransport {
    fn new(outcome: Result<u16, TransportError>) -> Self {
        Self {
            outcome,
            calls: Cell::new(0),
            last: RefCell::new(None),
        }
    }
}

impl Transport for MockTransport {
    async fn post_form(&self, submission: &Submission) -> Result<u16, TransportError> {
        self.calls.set(self.calls.get() + 1);
        *self.last.borrow_mut() = Some(submission.clone());
        self.outcome.clone()
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("portfolio_core=debug")
        .with_test_writer()
        .try_init();
}

fn filled_form() -> ContactForm {
    init_tracing();
    let mut form = ContactForm::new(&ContactConfig::default());
    for (name, value) in [
        ("name", "Grace Hopper"),
        ("email", "grace@example.com"),
        ("subject", "Compilers"),
        ("message", "Let's talk."),
    ] {
        form.focus(name).unwrap();
        form.input(name, value).unwrap();
        form.blur(name).unwrap();
    }
    form
}

#[tokio::test]
async fn empty_required_field_never_sends() {
    let transport = MockTransport::new(Ok(200));
    let mut form = filled_form();
    form.input("message", "").unwrap();

    let toast = form.submit(&transport).await;

    assert_eq!(transport.calls.get(), 0);
    assert_eq!(toast.kind, NotificationKind::Error);
    assert_eq!(toast.message, INVALID_FORM_MESSAGE);
    assert!(form.field("message").unwrap().is_invalid());
    assert!(!form.is_submitting());
}

#[tokio::test]
async fn malformed_email_never_sends() {
    let transport = MockTransport::new(Ok(200));
    let mut form = filled_form();
    form.input("email", "not-an-email").unwrap();

    let toast = form.submit(&transport).await;

    assert_eq!(transport.calls.get(), 0);
    assert_eq!(toast.kind, NotificationKind::Error);
    assert!(form.field("email").unwrap().is_invalid());
    assert!(!form.field("name").unwrap().is_invalid());
}

#[tokio::test]
async fn successful_submission_resets_form_and_labels() {
    let transport = MockTransport::new(Ok(200));
    let mut form = filled_form();
    assert!(form.fields().iter().all(|f| f.label_active()));

    let toast = form.submit(&transport).await;

    assert_eq!(transport.calls.get(), 1);
    assert_eq!(toast.kind, NotificationKind::Success);
    assert_eq!(toast.message, SENT_MESSAGE);
    assert!(form.fields().iter().all(|f| f.value().is_empty()));
    assert!(form.fields().iter().all(|f| !f.label_active()));
    assert!(!form.is_submitting());

    let sent = transport.last.borrow().clone().unwrap();
    assert_eq!(sent.endpoint, ContactConfig::default().endpoint);
    assert_eq!(sent.fields.len(), 4);
    assert_eq!(sent.fields[0], ("name".to_string(), "Grace Hopper".to_string()));
}

#[tokio::test]
async fn rejected_submission_keeps_values() {
    let transport = MockTransport::new(Ok(422));
    let mut form = filled_form();

    let toast = form.submit(&transport).await;

    assert_eq!(transport.calls.get(), 1);
    assert_eq!(toast.message, FAILED_MESSAGE);
    assert_eq!(form.field("subject").unwrap().value(), "Compilers");
    assert!(!form.is_submitting());
}

#[tokio::test]
async fn network_failure_reenables_button_and_allows_retry() {
    let failing = MockTransport::new(Err(TransportError::Network("connection refused".into())));
    let mut form = filled_form();

    let toast = form.submit(&failing).await;
    assert_eq!(toast.message, NETWORK_ERROR_MESSAGE);
    assert!(!form.is_submitting());
    assert_eq!(form.submit_label(), "Send Message");

    let working = MockTransport::new(Ok(200));
    let toast = form.submit(&working).await;
    assert_eq!(toast.kind, NotificationKind::Success);
    assert_eq!(working.calls.get(), 1);
}
