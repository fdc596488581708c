pub mod application_handlers;
pub mod confirmation_handlers;
pub mod legal_handlers;
