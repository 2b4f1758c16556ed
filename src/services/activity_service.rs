// ============================================================================
// ACTIVITY SERVICE - recentSubjects + {role}Activities in local storage
// ============================================================================

use crate::error::PortalError;
use crate::models::{ActivityLog, ActivityLogEntry, RecentView, RecentViews, Role};
use crate::utils::{load_from_storage, save_to_storage, SharedStore, RECENT_SUBJECTS_KEY};

#[derive(Clone)]
pub struct ActivityService {
    store: SharedStore,
}

impl ActivityService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub fn recent_views(&self) -> RecentViews {
        load_from_storage::<Vec<RecentView>>(self.store.as_ref(), RECENT_SUBJECTS_KEY)
            .map(RecentViews::from_entries)
            .unwrap_or_default()
    }

    pub fn push_recent_view(&self, view: RecentView) -> Result<RecentViews, PortalError> {
        let mut recent = self.recent_views();
        recent.push(view);
        save_to_storage(self.store.as_ref(), RECENT_SUBJECTS_KEY, &recent)?;
        Ok(recent)
    }

    pub fn activity_log(&self, role: Role) -> ActivityLog {
        load_from_storage::<Vec<ActivityLogEntry>>(self.store.as_ref(), role.activity_key())
            .map(ActivityLog::from_entries)
            .unwrap_or_default()
    }

    /// Stamps the entry with the current UTC time
    pub fn log_activity(&self, role: Role, action: &str) {
        let timestamp = chrono::Utc::now().to_rfc3339();
        if let Err(e) = self.log_activity_at(role, action, &timestamp) {
            log::warn!("⚠️ [ACTIVITY] Could not persist '{}': {}", action, e);
        }
    }

    pub fn log_activity_at(&self, role: Role, action: &str, timestamp: &str) -> Result<(), PortalError> {
        log::info!("📝 [ACTIVITY] {} activity: {}", role.label(), action);
        let mut activity = self.activity_log(role);
        activity.record(action, timestamp);
        save_to_storage(self.store.as_ref(), role.activity_key(), &activity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::MemoryStorage;

    fn view(code: &str) -> RecentView {
        RecentView {
            title: code.to_lowercase(),
            code: code.to_string(),
            year_level: None,
        }
    }

    #[test]
    fn recent_views_persist_across_service_instances() {
        let store = MemoryStorage::shared();
        let service = ActivityService::new(store.clone());
        service.push_recent_view(view("IT101")).unwrap();
        service.push_recent_view(view("IT102")).unwrap();

        let reopened = ActivityService::new(store);
        let recent = reopened.recent_views();
        assert_eq!(recent.entries()[0].code, "IT102");
        assert_eq!(recent.len(), 2);
    }

    #[test]
    fn activity_logs_are_kept_per_role() {
        let store = MemoryStorage::shared();
        let service = ActivityService::new(store.clone());
        service.log_activity_at(Role::Student, "Changed password", "t1").unwrap();
        service.log_activity_at(Role::Professor, "Logged in", "t2").unwrap();

        assert_eq!(service.activity_log(Role::Student).len(), 1);
        assert_eq!(service.activity_log(Role::Professor).entries()[0].action, "Logged in");
        assert!(store.get_item("studentActivities").is_some());
        assert!(service.activity_log(Role::Admin).is_empty());
    }

    #[test]
    fn log_never_exceeds_fifty() {
        let service = ActivityService::new(MemoryStorage::shared());
        for i in 0..75 {
            service.log_activity_at(Role::Student, &format!("a{}", i), "t").unwrap();
        }
        let log = service.activity_log(Role::Student);
        assert_eq!(log.len(), 50);
        assert_eq!(log.entries()[0].action, "a74");
    }

    #[test]
    fn corrupt_recent_list_starts_fresh() {
        let store = MemoryStorage::shared();
        store.set_item(RECENT_SUBJECTS_KEY, "oops").unwrap();
        let service = ActivityService::new(store);
        assert!(service.recent_views().is_empty());
        let recent = service.push_recent_view(view("GE1")).unwrap();
        assert_eq!(recent.len(), 1);
    }
}
