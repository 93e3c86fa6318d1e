//! Admin session flag
//!
//! Authentication happens outside the core; this only records the outcome.
//! A full promotion reset does not touch the flag.

use lj_core::LjResult;

use crate::backend::{KEY_ADMIN_LOGGED_IN, SharedBackend};

/// Typed accessor for the persisted admin login flag
pub struct AdminSession {
    backend: SharedBackend,
}

impl AdminSession {
    pub fn new(backend: SharedBackend) -> Self {
        Self { backend }
    }

    pub fn is_logged_in(&self) -> bool {
        self.backend
            .get(KEY_ADMIN_LOGGED_IN)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or(false)
    }

    pub fn set_logged_in(&self, logged_in: bool) -> LjResult<()> {
        self.backend
            .set(KEY_ADMIN_LOGGED_IN, if logged_in { "true" } else { "false" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryBackend;

    #[test]
    fn test_defaults_to_logged_out() {
        let session = AdminSession::new(MemoryBackend::shared());
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_set_and_clear() {
        let session = AdminSession::new(MemoryBackend::shared());

        session.set_logged_in(true).unwrap();
        assert!(session.is_logged_in());

        session.set_logged_in(false).unwrap();
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_garbage_value_reads_as_logged_out() {
        let backend = MemoryBackend::shared();
        backend.set(KEY_ADMIN_LOGGED_IN, "maybe").unwrap();

        let session = AdminSession::new(backend);
        assert!(!session.is_logged_in());
    }
}
