use std::cell::RefCell;
use std::rc::Rc;

use crate::utils::storage;

/// localStorage key holding the auth token.
const TOKEN_KEY: &str = "attendance_admin_token";

#[derive(Clone, Debug)]
enum Backend {
    /// Durable, origin-scoped browser storage. Survives reloads.
    Browser,
    /// Plain in-memory slot for tests.
    Memory(Rc<RefCell<Option<String>>>),
}

/// Holds the single auth token. Passed around explicitly (via Yew context)
/// instead of being looked up globally, so the API client and route guard
/// can be exercised against an in-memory session in tests.
///
/// Token presence is the only authentication signal checked client-side;
/// there is no expiry. A stale token shows up as failed API calls.
#[derive(Clone, Debug)]
pub struct Session {
    backend: Backend,
}

impl Session {
    pub fn browser() -> Self {
        Self {
            backend: Backend::Browser,
        }
    }

    pub fn in_memory() -> Self {
        Self {
            backend: Backend::Memory(Rc::new(RefCell::new(None))),
        }
    }

    pub fn token(&self) -> Option<String> {
        match &self.backend {
            Backend::Browser => storage::load_string(TOKEN_KEY),
            Backend::Memory(slot) => slot.borrow().clone(),
        }
    }

    pub fn set_token(&self, token: &str) {
        match &self.backend {
            Backend::Browser => {
                if let Err(e) = storage::save_string(TOKEN_KEY, token) {
                    log::error!("❌ Could not persist token: {}", e);
                }
            }
            Backend::Memory(slot) => *slot.borrow_mut() = Some(token.to_string()),
        }
    }

    pub fn clear_token(&self) {
        match &self.backend {
            Backend::Browser => {
                if let Err(e) = storage::remove(TOKEN_KEY) {
                    log::error!("❌ Could not clear token: {}", e);
                }
            }
            Backend::Memory(slot) => *slot.borrow_mut() = None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        match (&self.backend, &other.backend) {
            (Backend::Browser, Backend::Browser) => true,
            (Backend::Memory(a), Backend::Memory(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_session_stores_and_clears_token() {
        let session = Session::in_memory();
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);

        session.set_token("abc123");
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("abc123".to_string()));

        session.clear_token();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn cloned_session_shares_the_same_slot() {
        let session = Session::in_memory();
        let clone = session.clone();
        clone.set_token("tok");
        assert_eq!(session.token(), Some("tok".to_string()));
        assert_eq!(session, clone);
    }
}
