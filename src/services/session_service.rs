// ============================================================================
// SESSION SERVICE - Persisted session (user / token / role keys)
// ============================================================================

use crate::error::PortalError;
use crate::models::Session;
use crate::utils::{load_from_storage, save_to_storage, SharedStore, ROLE_KEY, TOKEN_KEY, USER_KEY};

/// Reads and writes the signed-in user. Single tab, synchronous.
#[derive(Clone)]
pub struct SessionService {
    store: SharedStore,
}

impl SessionService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub fn save(&self, session: &Session) -> Result<(), PortalError> {
        save_to_storage(self.store.as_ref(), USER_KEY, session)?;
        self.store.set_item(ROLE_KEY, session.role.as_str())?;
        match session.token.as_deref() {
            Some(token) => self.store.set_item(TOKEN_KEY, token)?,
            None => self.store.remove_item(TOKEN_KEY),
        }
        log::info!("💾 [SESSION] Saved session for {} ({})", session.username, session.role);
        Ok(())
    }

    /// `None` when nothing is stored or the stored JSON is unreadable
    pub fn load(&self) -> Option<Session> {
        let mut session: Session = load_from_storage(self.store.as_ref(), USER_KEY)?;
        if session.token.is_none() {
            session.token = self.store.get_item(TOKEN_KEY);
        }
        Some(session)
    }

    pub fn clear(&self) {
        self.store.remove_item(USER_KEY);
        self.store.remove_item(TOKEN_KEY);
        self.store.remove_item(ROLE_KEY);
        log::info!("🗑️ [SESSION] Session cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::utils::MemoryStorage;

    #[test]
    fn save_then_load_returns_same_session() {
        let service = SessionService::new(MemoryStorage::shared());
        let mut session = Session::new("2021-0042", Role::Student);
        session.course_id = Some("it".to_string());
        session.token = Some("t0k".to_string());

        service.save(&session).unwrap();
        assert_eq!(service.load(), Some(session));
    }

    #[test]
    fn writes_role_and_token_keys() {
        let store = MemoryStorage::shared();
        let service = SessionService::new(store.clone());
        let mut session = Session::new("prof.reyes", Role::Professor);
        session.token = Some("abc".to_string());
        service.save(&session).unwrap();

        assert_eq!(store.get_item(ROLE_KEY).as_deref(), Some("professor"));
        assert_eq!(store.get_item(TOKEN_KEY).as_deref(), Some("abc"));
    }

    #[test]
    fn malformed_user_fails_soft() {
        let store = MemoryStorage::shared();
        store.set_item(USER_KEY, "{\"username\": 5").unwrap();
        let service = SessionService::new(store);
        assert_eq!(service.load(), None);
    }

    #[test]
    fn unknown_role_fails_soft() {
        let store = MemoryStorage::shared();
        store.set_item(USER_KEY, r#"{"username":"x","role":"janitor"}"#).unwrap();
        assert_eq!(SessionService::new(store).load(), None);
    }

    #[test]
    fn clear_removes_everything() {
        let store = MemoryStorage::shared();
        let service = SessionService::new(store.clone());
        let mut session = Session::new("root", Role::Admin);
        session.token = Some("abc".to_string());
        service.save(&session).unwrap();

        service.clear();
        assert_eq!(service.load(), None);
        assert_eq!(store.get_item(TOKEN_KEY), None);
        assert_eq!(store.get_item(ROLE_KEY), None);
    }

    #[test]
    fn separate_token_key_is_picked_up() {
        let store = MemoryStorage::shared();
        store.set_item(USER_KEY, r#"{"username":"root","role":"admin"}"#).unwrap();
        store.set_item(TOKEN_KEY, "legacy").unwrap();
        let session = SessionService::new(store).load().unwrap();
        assert_eq!(session.token.as_deref(), Some("legacy"));
    }
}
