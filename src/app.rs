// ============================================================================
// APP - Page bootstrap: guard, state, view bindings, poller
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use crate::config::CONFIG;
use crate::dom::{location_path, navigate, query_param};
use crate::models::Role;
use crate::routes::{guard, GuardDecision, Page};
use crate::services::SessionService;
use crate::state::{AppState, UpdateType};
use crate::utils::{BrowserStorage, SharedStore};
use crate::viewmodels::NotificationPoller;
use crate::views::{dashboard, login, notifications, profile};

pub struct App {
    state: AppState,
    page: Page,
    /// Dropped with the app, which stops polling
    _poller: Option<NotificationPoller>,
}

impl App {
    /// `Ok(None)` when the guard redirected away from this page
    pub fn start() -> Result<Option<Self>, JsValue> {
        let store: SharedStore = Rc::new(BrowserStorage);
        let path = location_path();
        let page = Page::from_path(&path);

        let session = SessionService::new(store.clone()).load();
        if let GuardDecision::Redirect(login) = guard(&path, session.as_ref()) {
            navigate(login)?;
            return Ok(None);
        }

        let role = page
            .role()
            .or_else(|| session.as_ref().map(|s| s.role))
            .unwrap_or(Role::Student);
        let course_id = query_param("course")
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| CONFIG.default_course_id.clone());

        log::info!("🚀 [APP] {} on {} (course {})", role.label(), path, course_id);
        let state = AppState::new(role, store, &course_id);

        let mut app = Self {
            state,
            page,
            _poller: None,
        };
        app.bind()?;
        Ok(Some(app))
    }

    fn bind(&mut self) -> Result<(), JsValue> {
        match self.page {
            Page::Login(role) => login::bind_login(&self.state, role),
            Page::Dashboard(_) => {
                self.subscribe_renderers();
                notifications::bind_notifications(&self.state)?;
                dashboard::bind_dashboard(&self.state)?;
                profile::bind_profile(&self.state)?;
                self._poller = Some(NotificationPoller::start(&self.state));
                Ok(())
            }
            Page::Other => Ok(()),
        }
    }

    fn subscribe_renderers(&self) {
        let state = self.state.clone();
        self.state.subscribe_to_changes(move |update| {
            let rendered = match update {
                UpdateType::Notifications => notifications::render_badge(&state)
                    .and_then(|_| notifications::render_dropdown(&state)),
                UpdateType::Cards => dashboard::render_cards(&state),
                UpdateType::RecentViews => dashboard::render_recent(&state),
                UpdateType::Profile => profile::render_identity(&state),
            };
            if let Err(e) = rendered {
                log::error!("❌ [APP] Render {:?} failed: {:?}", update, e);
            }
        });
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}
