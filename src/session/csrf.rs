use actix_session::Session;

use crate::errors::AppError;

const CSRF_KEY: &str = "csrf_token";
const TOKEN_BYTES: usize = 32;

/// Get the CSRF token from the session, or generate a new one.
pub fn get_or_create_token(session: &Session) -> Result<String, AppError> {
    if let Ok(Some(token)) = session.get::<String>(CSRF_KEY) {
        return Ok(token);
    }
    let token = generate_token();
    session
        .insert(CSRF_KEY, &token)
        .map_err(|e| AppError::Session(e.to_string()))?;
    Ok(token)
}

/// Reject the post unless it carries this session's token.
pub fn validate_csrf(session: &Session, submitted: &str) -> Result<(), AppError> {
    match session.get::<String>(CSRF_KEY) {
        Ok(Some(stored)) if !stored.is_empty() && tokens_match(&stored, submitted) => Ok(()),
        _ => Err(AppError::Csrf),
    }
}

/// Hex-encoded random token, used for CSRF and for the form id.
pub(crate) fn generate_token() -> String {
    hex::encode(rand::random::<[u8; TOKEN_BYTES]>())
}

/// Compares every byte of equal-length tokens so timing does not reveal a prefix.
fn tokens_match(stored: &str, submitted: &str) -> bool {
    let (stored, submitted) = (stored.as_bytes(), submitted.as_bytes());
    if stored.len() != submitted.len() {
        return false;
    }
    let diff = stored
        .iter()
        .zip(submitted)
        .fold(0u8, |acc, (a, b)| acc | (a ^ b));
    diff == 0
}
