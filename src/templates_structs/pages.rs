use askama::Template;

use crate::content;

#[derive(Template)]
#[template(path = "confirmation.html")]
pub struct ConfirmationTemplate {
    pub first_name: String,
    pub next_steps: &'static [&'static str],
}

impl ConfirmationTemplate {
    pub fn new(first_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            next_steps: content::NEXT_STEPS,
        }
    }
}

#[derive(Template)]
#[template(path = "terms.html")]
pub struct TermsTemplate {
    pub contact_email: &'static str,
}

#[derive(Template)]
#[template(path = "privacy.html")]
pub struct PrivacyTemplate {
    pub contact_email: &'static str,
    pub contact_phone: &'static str,
}
