use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Forms with a submission currently running, keyed by form id.
///
/// The session cookie travels with every request, so two concurrent posts
/// would each see `is_submitting == false`; this registry is the shared guard.
#[derive(Clone, Default)]
pub struct InFlightRegistry {
    running: Arc<Mutex<HashSet<String>>>,
}

/// Held while a submission runs; releases the form id on drop.
pub struct InFlightPermit {
    registry: InFlightRegistry,
    form_id: String,
}

impl InFlightRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `None` if the form already has a submission running.
    pub fn try_acquire(&self, form_id: &str) -> Option<InFlightPermit> {
        let mut set = self.running.lock().unwrap_or_else(|e| e.into_inner());
        if !set.insert(form_id.to_string()) {
            return None;
        }
        Some(InFlightPermit {
            registry: self.clone(),
            form_id: form_id.to_string(),
        })
    }

    pub fn is_running(&self, form_id: &str) -> bool {
        let set = self.running.lock().unwrap_or_else(|e| e.into_inner());
        set.contains(form_id)
    }
}

impl Drop for InFlightPermit {
    fn drop(&mut self) {
        let mut set = self.registry.running.lock().unwrap_or_else(|e| e.into_inner());
        set.remove(&self.form_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_acquire_fails_until_release() {
        let registry = InFlightRegistry::new();
        let permit = registry.try_acquire("form-a").unwrap();
        assert!(registry.try_acquire("form-a").is_none());
        assert!(registry.is_running("form-a"));

        // Other forms are independent.
        assert!(registry.try_acquire("form-b").is_some());

        drop(permit);
        assert!(!registry.is_running("form-a"));
        assert!(registry.try_acquire("form-a").is_some());
    }
}
