use actix_session::Session;

use crate::errors::AppError;
use crate::models::application::FormState;

const FORM_STATE_KEY: &str = "form_state";
const FORM_ID_KEY: &str = "form_id";

/// Form state of this session, or a fresh one.
pub fn load(session: &Session) -> FormState {
    match session.get::<FormState>(FORM_STATE_KEY) {
        Ok(Some(state)) => state,
        Ok(None) => FormState::default(),
        Err(e) => {
            log::warn!("Discarding unreadable form state: {e}");
            FormState::default()
        }
    }
}

/// Store the form state. Only the bounded copy goes into the cookie.
pub fn save(session: &Session, state: &FormState) -> Result<(), AppError> {
    session
        .insert(FORM_STATE_KEY, state.for_session())
        .map_err(|e| AppError::Session(e.to_string()))
}

/// Forget the form once it has been submitted.
pub fn discard(session: &Session) {
    session.remove(FORM_STATE_KEY);
}

/// Stable id of this session's form, used to key the in-flight registry.
pub fn form_id(session: &Session) -> Result<String, AppError> {
    if let Ok(Some(id)) = session.get::<String>(FORM_ID_KEY) {
        return Ok(id);
    }
    let id = super::csrf::generate_token();
    session
        .insert(FORM_ID_KEY, &id)
        .map_err(|e| AppError::Session(e.to_string()))?;
    Ok(id)
}
