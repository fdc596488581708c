//! Application submission: validate, persist, notify, redirect.
//!
//! Each stage returns a `Result` and the driver stops at the first failure.
//! A record that was persisted stays persisted when the webhook fails
//! afterwards; the visitor simply retries.

use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use url::form_urlencoded;

use crate::models::application::{
    ApplicationSnapshot, FieldViolation, FormState, NewApplication, NotificationPayload,
    SubmissionContext, validate_application,
};

pub const PERSISTENCE_FAILED: &str = "Erro ao salvar sua inscrição. Por favor, tente novamente.";
pub const NOTIFICATION_FAILED: &str = "Erro ao processar sua inscrição. Por favor, tente novamente.";
pub const GENERIC_FAILURE: &str =
    "Ocorreu um erro ao enviar sua inscrição. Por favor, tente novamente.";
pub const INVALID_PAGE_URL: &str =
    "Não foi possível identificar o endereço desta página. Recarregue e tente novamente.";

pub const CONFIRMATION_PATH: &str = "/obrigado";

/// Failure reported by the application store.
#[derive(Debug)]
pub struct StoreError(pub String);

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Store error: {}", self.0)
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError(e.to_string())
    }
}

/// Failure reported by the notification webhook.
#[derive(Debug)]
pub enum NotifyError {
    /// The receiver answered outside the 2xx range.
    Status(u16),
    /// The request never got an answer.
    Transport(String),
}

impl fmt::Display for NotifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotifyError::Status(code) => write!(f, "Webhook responded with status {code}"),
            NotifyError::Transport(e) => write!(f, "Webhook transport error: {e}"),
        }
    }
}

#[async_trait]
pub trait ApplicationStore: Send + Sync {
    async fn insert(&self, record: &NewApplication) -> Result<i64, StoreError>;
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, payload: &NotificationPayload, origin: &str) -> Result<(), NotifyError>;
}

/// Why a submission stopped after it had started.
#[derive(Debug)]
pub enum SubmitError {
    Persistence(StoreError),
    Notification(NotifyError),
    /// Anything else; carries a message fit for the visitor when there is one.
    Unclassified(Option<String>),
}

impl SubmitError {
    /// Text rendered next to the form. Collaborator errors never leak here.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Persistence(_) => PERSISTENCE_FAILED.to_string(),
            SubmitError::Notification(_) => NOTIFICATION_FAILED.to_string(),
            SubmitError::Unclassified(Some(msg)) => msg.clone(),
            SubmitError::Unclassified(None) => GENERIC_FAILURE.to_string(),
        }
    }
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Persistence(e) => write!(f, "Persistence failed: {e}"),
            SubmitError::Notification(e) => write!(f, "Notification failed: {e}"),
            SubmitError::Unclassified(Some(msg)) => write!(f, "Submission failed: {msg}"),
            SubmitError::Unclassified(None) => write!(f, "Submission failed"),
        }
    }
}

#[derive(Debug)]
pub enum SubmitOutcome {
    /// Both stages succeeded; redirect here.
    Redirect(String),
    /// The form did not pass validation; nothing was sent.
    Invalid(Vec<FieldViolation>),
    /// A stage failed; the message is stored on the form state.
    Failed(SubmitError),
    /// Another submission of the same form is still running.
    AlreadySubmitting,
}

/// `/obrigado?nome=<full name>`, spaces sent as `%20`.
pub fn confirmation_location(full_name: &str) -> String {
    // byte_serialize escapes a literal '+' as %2B, so any '+' left is a space.
    let name: String = form_urlencoded::byte_serialize(full_name.as_bytes()).collect();
    format!("{CONFIRMATION_PATH}?nome={}", name.replace('+', "%20"))
}

/// Run one submission against the session's form state.
///
/// The in-flight flag is always cleared before returning, whatever the outcome.
pub async fn submit(
    state: &mut FormState,
    page_url: &str,
    referrer: &str,
    store: &dyn ApplicationStore,
    notifier: &dyn Notifier,
) -> SubmitOutcome {
    if state.is_submitting {
        log::warn!("Submission ignored: one is already in flight");
        return SubmitOutcome::AlreadySubmitting;
    }

    let snapshot = state.snapshot();
    let violations = validate_application(&snapshot);
    if !violations.is_empty() {
        // A failure from an earlier attempt no longer describes this form.
        state.error = None;
        return SubmitOutcome::Invalid(violations);
    }

    if !state.begin_submit() {
        return SubmitOutcome::AlreadySubmitting;
    }

    let result = run_stages(&snapshot, page_url, referrer, store, notifier, Utc::now()).await;
    let outcome = match result {
        Ok(location) => SubmitOutcome::Redirect(location),
        Err(e) => {
            state.set_error(e.user_message());
            SubmitOutcome::Failed(e)
        }
    };

    state.finish_submit();
    outcome
}

async fn run_stages(
    snapshot: &ApplicationSnapshot,
    page_url: &str,
    referrer: &str,
    store: &dyn ApplicationStore,
    notifier: &dyn Notifier,
    now: DateTime<Utc>,
) -> Result<String, SubmitError> {
    let context = SubmissionContext::capture(page_url, referrer).map_err(|e| {
        log::warn!("Could not parse page URL {page_url:?}: {e}");
        SubmitError::Unclassified(Some(INVALID_PAGE_URL.to_string()))
    })?;
    let payload = NotificationPayload::build(snapshot, &context);

    let record = NewApplication::from_snapshot(snapshot, now);
    let id = store.insert(&record).await.map_err(|e| {
        log::error!("Failed to save application: {e}");
        SubmitError::Persistence(e)
    })?;
    log::info!("Application {id} saved for region '{}'", record.region);

    notifier
        .notify(&payload, &context.origin())
        .await
        .map_err(|e| match e {
            NotifyError::Transport(detail) => {
                log::error!("Webhook unreachable for application {id}: {detail}");
                SubmitError::Unclassified(None)
            }
            status => {
                log::error!("Webhook rejected application {id}: {status}");
                SubmitError::Notification(status)
            }
        })?;
    log::info!("Application {id} forwarded to webhook");

    Ok(confirmation_location(&snapshot.full_name))
}
