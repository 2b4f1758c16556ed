// ============================================================================
// DASHBOARD VIEWMODEL - Course heading, subject catalog, recent views
// ============================================================================

use crate::error::PortalError;
use crate::models::{RecentView, RecentViews, Subject, YearFilter};
use crate::services::ApiClient;
use crate::state::{AppState, UpdateType};
use crate::utils::ROADMAP_PAGE;

/// `Roadmap.html?id={code}&title={encoded title}`
pub fn roadmap_url(subject: &Subject) -> String {
    format!(
        "{}?id={}&title={}",
        ROADMAP_PAGE,
        urlencoding::encode(&subject.code),
        urlencoding::encode(&subject.title)
    )
}

pub struct DashboardViewModel {
    api: ApiClient,
    state: AppState,
}

impl DashboardViewModel {
    pub fn new(state: &AppState) -> Self {
        Self {
            api: ApiClient::new(),
            state: state.clone(),
        }
    }

    /// Fetches the heading and catalog once per page load
    pub async fn load(&self) -> Result<usize, PortalError> {
        let course_id = self.state.dashboard.borrow().course_id.clone();

        match self.api.get_course(&course_id).await {
            Ok(course) => {
                self.state.dashboard.borrow_mut().course_title = Some(course.title);
            }
            Err(e) => log::warn!("⚠️ [DASHBOARD] Course {} metadata unavailable: {}", course_id, e),
        }

        let subjects = self.api.get_subjects(&course_id).await?;
        let count = {
            let mut dashboard = self.state.dashboard.borrow_mut();
            dashboard.set_catalog(subjects);
            dashboard.catalog().len()
        };
        log::info!("📚 [DASHBOARD] {} active subjects loaded", count);
        self.state.notify_subscribers(UpdateType::Cards);
        Ok(count)
    }

    pub fn set_year_filter(&self, year: YearFilter) {
        self.state.dashboard.borrow_mut().set_year_filter(year);
        self.state.notify_subscribers(UpdateType::Cards);
    }

    pub fn set_search(&self, term: &str) {
        self.state.dashboard.borrow_mut().set_search(term);
        self.state.notify_subscribers(UpdateType::Cards);
    }

    pub fn toggle_show_all(&self) {
        self.state.dashboard.borrow_mut().toggle_show_all();
        self.state.notify_subscribers(UpdateType::Cards);
    }

    pub fn recent_views(&self) -> RecentViews {
        self.state.activity.recent_views()
    }

    /// Records the visit and returns the roadmap URL to open
    pub fn view_subject(&self, code: &str) -> Result<String, PortalError> {
        let subject = self
            .state
            .dashboard
            .borrow()
            .find_subject(code)
            .cloned()
            .ok_or_else(|| PortalError::Validation(format!("Unknown subject: {}", code)))?;

        if let Err(e) = self.state.activity.push_recent_view(RecentView::from(&subject)) {
            log::warn!("⚠️ [DASHBOARD] Could not save recent view: {}", e);
        }
        self.state
            .log_activity(&format!("Viewed subject: {} ({})", subject.title, subject.code));
        self.state.notify_subscribers(UpdateType::RecentViews);
        Ok(roadmap_url(&subject))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::utils::MemoryStorage;

    fn subject(code: &str, title: &str) -> Subject {
        Subject {
            code: code.to_string(),
            title: title.to_string(),
            year_level: Some(1),
            status: None,
        }
    }

    #[test]
    fn roadmap_url_encodes_title() {
        let url = roadmap_url(&subject("IT101", "Intro to Computing & Ethics"));
        assert_eq!(url, "Roadmap.html?id=IT101&title=Intro%20to%20Computing%20%26%20Ethics");
    }

    #[test]
    fn viewing_a_subject_records_recent_and_activity() {
        let state = AppState::new(Role::Student, MemoryStorage::shared(), "it");
        state
            .dashboard
            .borrow_mut()
            .set_catalog(vec![subject("IT101", "Programming 1"), subject("IT102", "Databases")]);
        let vm = DashboardViewModel::new(&state);

        vm.view_subject("IT101").unwrap();
        let url = vm.view_subject("IT102").unwrap();

        assert_eq!(url, "Roadmap.html?id=IT102&title=Databases");
        let recent = vm.recent_views();
        assert_eq!(recent.entries()[0].code, "IT102");
        assert_eq!(recent.len(), 2);
        assert_eq!(
            state.activity.activity_log(Role::Student).entries()[0].action,
            "Viewed subject: Databases (IT102)"
        );
    }

    #[test]
    fn unknown_subject_is_rejected() {
        let state = AppState::new(Role::Student, MemoryStorage::shared(), "it");
        let vm = DashboardViewModel::new(&state);
        assert!(vm.view_subject("NOPE").is_err());
    }
}
