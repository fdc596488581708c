use askama::Template;

use crate::content::{self, Card, FaqItem, Testimonial, VideoTestimonial};
use crate::models::application::{FieldViolation, FormState, Region};

/// One `<option>` of the region select.
pub struct RegionOption {
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Template)]
#[template(path = "application_form.html")]
pub struct ApplicationFormTemplate {
    pub state: FormState,
    pub error: Option<String>,
    pub violations: Vec<FieldViolation>,
    pub submitting: bool,
    pub page_url: String,
    pub referrer: String,
    pub csrf_token: String,
    pub regions: Vec<RegionOption>,
    pub logo_url: &'static str,
    pub open_positions: u32,
    pub contact_email: &'static str,
    pub contact_phone: &'static str,
    pub benefits: &'static [Card],
    pub testimonials: &'static [Testimonial],
    pub videos: &'static [VideoTestimonial],
    pub steps: &'static [Card],
    pub faq: &'static [FaqItem],
}

impl ApplicationFormTemplate {
    /// Form page for `state`; the error to show is taken from the caller.
    pub fn new(state: FormState, page_url: String, referrer: String, csrf_token: String) -> Self {
        let regions = Region::ALL
            .into_iter()
            .map(|r| RegionOption {
                label: r.label(),
                selected: r.label() == state.region,
            })
            .collect();
        let submitting = state.is_submitting;
        Self {
            state,
            error: None,
            violations: vec![],
            submitting,
            page_url,
            referrer,
            csrf_token,
            regions,
            logo_url: content::LOGO_URL,
            open_positions: content::OPEN_POSITIONS,
            contact_email: content::CONTACT_EMAIL,
            contact_phone: content::CONTACT_PHONE,
            benefits: content::BENEFITS,
            testimonials: content::TESTIMONIALS,
            videos: content::VIDEO_TESTIMONIALS,
            steps: content::STEPS,
            faq: content::FAQ,
        }
    }

    pub fn with_error(mut self, error: Option<String>) -> Self {
        self.error = error;
        self
    }

    pub fn with_violations(mut self, violations: Vec<FieldViolation>) -> Self {
        self.violations = violations;
        self
    }

    pub fn submitting(mut self) -> Self {
        self.submitting = true;
        self
    }
}
