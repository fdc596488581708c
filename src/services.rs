use std::sync::Arc;

use crate::pipeline::{ApplicationStore, Notifier};
use crate::session::InFlightRegistry;

/// Collaborators shared by every worker, registered as `web::Data<Services>`.
#[derive(Clone)]
pub struct Services {
    pub store: Arc<dyn ApplicationStore>,
    pub notifier: Arc<dyn Notifier>,
    pub in_flight: InFlightRegistry,
}

impl Services {
    pub fn new(store: Arc<dyn ApplicationStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            store,
            notifier,
            in_flight: InFlightRegistry::new(),
        }
    }
}
