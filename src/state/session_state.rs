// ============================================================================
// SESSION STATE - In-memory session mirrored to storage
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::error::PortalError;
use crate::models::Session;
use crate::services::SessionService;

#[derive(Clone)]
pub struct SessionState {
    pub session: Rc<RefCell<Option<Session>>>,
    service: SessionService,
}

impl SessionState {
    /// Starts from whatever is persisted
    pub fn restore(service: SessionService) -> Self {
        let session = service.load();
        Self {
            session: Rc::new(RefCell::new(session)),
            service,
        }
    }

    pub fn get_session(&self) -> Option<Session> {
        self.session.borrow().clone()
    }

    /// Replaces the session and persists it
    pub fn set_session(&self, session: Session) -> Result<(), PortalError> {
        self.service.save(&session)?;
        *self.session.borrow_mut() = Some(session);
        Ok(())
    }

    /// Applies `edit` to the current session and persists the result
    pub fn update<F>(&self, edit: F) -> Result<Session, PortalError>
    where
        F: FnOnce(&mut Session),
    {
        let mut session = self
            .get_session()
            .ok_or_else(|| PortalError::Auth("You are not signed in.".to_string()))?;
        edit(&mut session);
        self.set_session(session.clone())?;
        Ok(session)
    }

    pub fn clear(&self) {
        self.service.clear();
        *self.session.borrow_mut() = None;
    }

    pub fn service(&self) -> &SessionService {
        &self.service
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::utils::MemoryStorage;

    #[test]
    fn update_persists_and_returns_new_session() {
        let service = SessionService::new(MemoryStorage::shared());
        service.save(&Session::new("2021-0042", Role::Student)).unwrap();

        let state = SessionState::restore(service.clone());
        let updated = state
            .update(|s| s.email = Some("me@school.edu".to_string()))
            .unwrap();

        assert_eq!(updated.email.as_deref(), Some("me@school.edu"));
        assert_eq!(service.load(), Some(updated));
    }

    #[test]
    fn update_without_session_is_an_auth_error() {
        let state = SessionState::restore(SessionService::new(MemoryStorage::shared()));
        let err = state.update(|_| {}).unwrap_err();
        assert!(matches!(err, PortalError::Auth(_)));
    }

    #[test]
    fn clear_forgets_memory_and_storage() {
        let service = SessionService::new(MemoryStorage::shared());
        let state = SessionState::restore(service.clone());
        state.set_session(Session::new("root", Role::Admin)).unwrap();
        state.clear();
        assert!(state.get_session().is_none());
        assert!(service.load().is_none());
    }
}
