pub mod queries;
pub mod state;
pub mod types;
pub mod validate;

pub use queries::PgApplicationStore;
pub use state::FormState;
pub use types::{
    ApplicationForm, ApplicationRecord, ApplicationSnapshot, Field, NewApplication,
    NotificationPayload, Region, SubmissionContext,
};
pub use validate::{FieldViolation, validate_application};
