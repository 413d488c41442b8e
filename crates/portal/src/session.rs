use shared_types::{Role, Session, ROLE_KEY, TOKEN_KEY};
use std::cell::RefCell;
use std::collections::HashMap;

/// Persistent key/value storage holding the session entries.
///
/// The browser implementation writes through to `localStorage`; tests use
/// [`MemorySessionStore`].
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);

    /// Current role/token snapshot.
    fn session(&self) -> Session {
        Session::from_entries(self.get(ROLE_KEY), self.get(TOKEN_KEY))
    }

    /// Stored credential, ignoring blank values.
    fn token(&self) -> Option<String> {
        self.session().token
    }

    fn set_role(&self, role: Role) {
        self.set(ROLE_KEY, role.as_str());
    }

    fn set_token(&self, token: &str) {
        self.set(TOKEN_KEY, token);
    }

    /// Drop both session entries.
    fn clear(&self) {
        self.remove(TOKEN_KEY);
        self.remove(ROLE_KEY);
    }
}

/// In-memory store for tests and non-browser targets.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with a role and an optional token.
    pub fn with_session(role: Role, token: Option<&str>) -> Self {
        let store = Self::new();
        store.set_role(role);
        if let Some(token) = token {
            store.set_token(token);
        }
        store
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}
