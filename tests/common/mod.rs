//! Shared test infrastructure: in-memory collaborators and HTTP helpers.
//!
//! - `RecordingStore` / `RecordingNotifier` stand in for Postgres and the webhook
//! - `services()` wires them into the shared `Services`
//! - `session_cookie()` / `csrf_token()` carry a browser session across requests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::ServiceResponse;
use async_trait::async_trait;

use jovem_aprendiz::models::application::{FormState, NewApplication, NotificationPayload};
use jovem_aprendiz::pipeline::{ApplicationStore, NotifyError, Notifier, StoreError};
use jovem_aprendiz::services::Services;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const PAGE_URL: &str = "https://inscricao.example.com/?utm_source=instagram&utm_campaign=julho";
pub const PAGE_ORIGIN: &str = "https://inscricao.example.com";
pub const REFERRER: &str = "https://www.instagram.com/";

// ============================================================================
// FAKE COLLABORATORS
// ============================================================================

/// Application store that keeps inserts in memory, or fails every insert.
#[derive(Default)]
pub struct RecordingStore {
    pub records: Mutex<Vec<NewApplication>>,
    pub fail: bool,
}

impl RecordingStore {
    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    pub fn records(&self) -> Vec<NewApplication> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl ApplicationStore for RecordingStore {
    async fn insert(&self, record: &NewApplication) -> Result<i64, StoreError> {
        if self.fail {
            return Err(StoreError("connection refused".to_string()));
        }
        let mut records = self.records.lock().unwrap();
        records.push(record.clone());
        Ok(records.len() as i64)
    }
}

pub enum NotifierMode {
    Accept,
    /// Accept after a pause, keeping the submission in flight meanwhile.
    Slow(Duration),
    Status(u16),
    Unreachable,
}

/// Notifier that records every call and answers according to its mode.
pub struct RecordingNotifier {
    pub calls: Mutex<Vec<(NotificationPayload, String)>>,
    pub mode: NotifierMode,
}

impl RecordingNotifier {
    pub fn new(mode: NotifierMode) -> Self {
        Self { calls: Mutex::new(vec![]), mode }
    }

    pub fn accepting() -> Self {
        Self::new(NotifierMode::Accept)
    }

    pub fn calls(&self) -> Vec<(NotificationPayload, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, payload: &NotificationPayload, origin: &str) -> Result<(), NotifyError> {
        self.calls.lock().unwrap().push((payload.clone(), origin.to_string()));
        match self.mode {
            NotifierMode::Accept => Ok(()),
            NotifierMode::Slow(pause) => {
                tokio::time::sleep(pause).await;
                Ok(())
            }
            NotifierMode::Status(code) => Err(NotifyError::Status(code)),
            NotifierMode::Unreachable => Err(NotifyError::Transport("connection reset".into())),
        }
    }
}

pub fn services(store: Arc<RecordingStore>, notifier: Arc<RecordingNotifier>) -> Services {
    Services::new(store, notifier)
}

// ============================================================================
// FORM FIXTURES
// ============================================================================

/// A minor's application with every field filled in.
pub fn minor_state() -> FormState {
    FormState {
        full_name: "Ana Silva".to_string(),
        whatsapp: "(19) 91234-5678".to_string(),
        responsible_name: "Maria da Silva".to_string(),
        responsible_phone: "(19) 3232-4567".to_string(),
        region: "Campinas Amoreiras".to_string(),
        ..FormState::default()
    }
}

// ============================================================================
// HTTP HELPERS
// ============================================================================

pub fn session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_secure(false)
        .build()
}

/// Session cookie set by a response, if the session changed.
pub fn session_cookie<B>(resp: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|c| c.name() == "id")
        .map(|c| c.into_owned())
}

/// CSRF token embedded in a rendered form.
pub fn csrf_token(html: &str) -> String {
    let re = regex::Regex::new(r#"name="csrf_token" value="([0-9a-f]{64})""#).unwrap();
    re.captures(html)
        .map(|c| c[1].to_string())
        .expect("no csrf token in page")
}

/// URL-encoded body for a POST to `/`.
pub fn form_body(fields: &[(&str, &str)]) -> String {
    serde_urlencoded::to_string(fields).unwrap()
}
