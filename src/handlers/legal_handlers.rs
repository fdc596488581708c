use actix_web::HttpResponse;

use crate::content::{CONTACT_EMAIL, CONTACT_PHONE};
use crate::errors::{AppError, render};
use crate::templates_structs::{PrivacyTemplate, TermsTemplate};

pub async fn terms() -> Result<HttpResponse, AppError> {
    render(TermsTemplate { contact_email: CONTACT_EMAIL })
}

pub async fn privacy() -> Result<HttpResponse, AppError> {
    render(PrivacyTemplate {
        contact_email: CONTACT_EMAIL,
        contact_phone: CONTACT_PHONE,
    })
}
