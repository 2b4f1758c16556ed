// ============================================================================
// APP STATE - Page-level state, built at page init and dropped on navigation
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::config::CONFIG;
use crate::models::Role;
use crate::services::{ActivityService, SessionService};
use crate::state::{DashboardState, NotificationState, SessionState};
use crate::utils::SharedStore;

/// Which part of the page needs to be redrawn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateType {
    /// Badge and, when open, the dropdown list
    Notifications,
    /// Subject cards grid
    Cards,
    RecentViews,
    /// Navbar name, avatar, profile form
    Profile,
}

#[derive(Clone)]
pub struct AppState {
    /// Portal of the current page
    pub role: Role,
    pub session: SessionState,
    pub activity: ActivityService,
    pub notifications: NotificationState,
    pub dashboard: Rc<RefCell<DashboardState>>,

    pub change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn(UpdateType)>>>>,
}

impl AppState {
    pub fn new(role: Role, store: SharedStore, course_id: &str) -> Self {
        Self {
            role,
            session: SessionState::restore(SessionService::new(store.clone())),
            activity: ActivityService::new(store),
            notifications: NotificationState::new(),
            dashboard: Rc::new(RefCell::new(DashboardState::new(course_id))),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Id used for notification and upload requests
    pub fn acting_user_id(&self) -> u64 {
        self.session
            .get_session()
            .map(|s| s.user_id(CONFIG.default_user_id))
            .unwrap_or(CONFIG.default_user_id)
    }

    pub fn log_activity(&self, action: &str) {
        self.activity.log_activity(self.role, action);
    }

    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn(UpdateType) + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    pub fn notify_subscribers(&self, update_type: UpdateType) {
        // Clone out first so a subscriber may subscribe again without a double borrow
        let subscribers: Vec<_> = self.change_subscribers.borrow().iter().cloned().collect();
        for callback in subscribers {
            callback(update_type);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use crate::models::Session;
    use crate::utils::MemoryStorage;

    #[test]
    fn acting_user_id_prefers_session_id() {
        let state = AppState::new(Role::Student, MemoryStorage::shared(), "it");
        assert_eq!(state.acting_user_id(), CONFIG.default_user_id);

        let mut session = Session::new("2021-0042", Role::Student);
        session.id = Some(42);
        state.session.set_session(session).unwrap();
        assert_eq!(state.acting_user_id(), 42);
    }

    #[test]
    fn subscribers_receive_update_type() {
        let state = AppState::new(Role::Professor, MemoryStorage::shared(), "it");
        let seen = Rc::new(Cell::new(None));
        let seen_in = seen.clone();
        state.subscribe_to_changes(move |update| seen_in.set(Some(update)));

        state.notify_subscribers(UpdateType::Cards);
        assert_eq!(seen.get(), Some(UpdateType::Cards));
    }

    #[test]
    fn restores_persisted_session() {
        let store = MemoryStorage::shared();
        SessionService::new(store.clone())
            .save(&Session::new("root", Role::Admin))
            .unwrap();
        let state = AppState::new(Role::Admin, store, "it");
        assert_eq!(state.session.get_session().map(|s| s.username), Some("root".to_string()));
    }
}
