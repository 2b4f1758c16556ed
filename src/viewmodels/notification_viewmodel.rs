// ============================================================================
// NOTIFICATION VIEWMODEL - Fetch, mark read, periodic poll
// ============================================================================
// No optimistic updates: every action POSTs then re-fetches. Failures are
// logged and the stale list stays on screen.
// ============================================================================

use gloo_timers::callback::Interval;
use crate::config::CONFIG;
use crate::services::ApiClient;
use crate::state::{AppState, UpdateType};

#[derive(Clone)]
pub struct NotificationViewModel {
    api: ApiClient,
    state: AppState,
}

impl NotificationViewModel {
    pub fn new(state: &AppState) -> Self {
        Self {
            api: ApiClient::new(),
            state: state.clone(),
        }
    }

    pub async fn refresh(&self) {
        let user_id = self.state.acting_user_id();
        let ticket = self.state.notifications.begin_fetch();

        match self.api.get_notifications(user_id).await {
            Ok(list) => {
                let count = list.len();
                if self.state.notifications.complete_fetch(ticket, list) {
                    log::info!("🔔 [NOTIF] {} notifications for user {}", count, user_id);
                    self.state.notify_subscribers(UpdateType::Notifications);
                }
            }
            Err(e) => {
                log::error!("❌ [NOTIF] Error fetching notifications: {}", e);
                self.state.notifications.fail_fetch(ticket);
            }
        }
    }

    pub async fn mark_read(&self, notification_id: u64) {
        let user_id = self.state.acting_user_id();
        self.state.notifications.invalidate_in_flight();

        if let Err(e) = self.api.mark_notification_read(notification_id, user_id).await {
            log::error!("❌ [NOTIF] Error marking {} as read: {}", notification_id, e);
        }
        self.refresh().await;
    }

    pub async fn mark_all_read(&self) {
        let user_id = self.state.acting_user_id();
        self.state.notifications.invalidate_in_flight();

        if let Err(e) = self.api.mark_all_notifications_read(user_id).await {
            log::error!("❌ [NOTIF] Error marking all as read: {}", e);
        }
        self.refresh().await;
    }

    /// Click outside the dropdown; re-renders only if it was open
    pub fn dismiss_dropdown(&self) {
        if self.state.notifications.close_dropdown() {
            self.state.notify_subscribers(UpdateType::Notifications);
        }
    }

    /// Opening the dropdown also triggers a fetch
    pub fn toggle_dropdown(&self) -> bool {
        let open = self.state.notifications.toggle_dropdown();
        self.state.notify_subscribers(UpdateType::Notifications);
        if open {
            let vm = self.clone();
            wasm_bindgen_futures::spawn_local(async move {
                vm.refresh().await;
            });
        }
        open
    }
}

/// Owns the poll timer; dropping it cancels polling
pub struct NotificationPoller {
    _interval: Interval,
}

impl NotificationPoller {
    /// Fetches once right away, then every `CONFIG.notification_poll_seconds`
    pub fn start(state: &AppState) -> Self {
        let vm = NotificationViewModel::new(state);

        let first = vm.clone();
        wasm_bindgen_futures::spawn_local(async move {
            first.refresh().await;
        });

        log::info!("⏰ [NOTIF] Polling every {}s", CONFIG.notification_poll_seconds);
        let interval = Interval::new(CONFIG.poll_interval_ms(), move || {
            let vm = vm.clone();
            wasm_bindgen_futures::spawn_local(async move {
                vm.refresh().await;
            });
        });

        Self { _interval: interval }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use crate::models::Role;
    use crate::utils::MemoryStorage;

    #[test]
    fn outside_click_closes_open_dropdown_once() {
        let state = AppState::new(Role::Student, MemoryStorage::shared(), "it");
        let renders = Rc::new(Cell::new(0));
        let renders_in = renders.clone();
        state.subscribe_to_changes(move |_| renders_in.set(renders_in.get() + 1));

        let vm = NotificationViewModel::new(&state);
        vm.dismiss_dropdown();
        assert_eq!(renders.get(), 0);

        state.notifications.toggle_dropdown();
        vm.dismiss_dropdown();
        assert!(!state.notifications.is_dropdown_open());
        assert_eq!(renders.get(), 1);
    }
}
