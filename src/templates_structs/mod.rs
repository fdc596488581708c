// Template context structures for Askama templates.

mod application;
mod pages;

pub use self::application::{ApplicationFormTemplate, RegionOption};
pub use self::pages::{ConfirmationTemplate, PrivacyTemplate, TermsTemplate};
