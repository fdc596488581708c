pub mod csrf;
pub mod form;
pub mod in_flight;

pub use in_flight::{InFlightPermit, InFlightRegistry};
