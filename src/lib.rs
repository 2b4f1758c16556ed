// ============================================================================
// CAMPUS PORTAL - Browser client for the admin, student and professor portals
// ============================================================================
// MVVM:
// - Views: bind static page markup, render fragments (no logic)
// - ViewModels: UI logic, one controller per concern parametrized by Role
// - Services: HTTP + local storage only
// - State: Rc<RefCell> page state with change subscribers
// - Models: shapes shared with the backend
// ============================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
mod app;
mod dom;
mod views;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use crate::app::App;
use crate::config::CONFIG;
use crate::models::notification_id_from_js;
use crate::state::AppState;
use crate::viewmodels::{DashboardViewModel, NotificationViewModel};

// Lives for the page; navigation drops it
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Campus Portal - Rust + MVVM");

    if let Some(app) = App::start()? {
        APP.with(|cell| *cell.borrow_mut() = Some(app));
    }
    Ok(())
}

/// Runs `f` with the page state, if the app is up
fn with_state<F>(f: F)
where
    F: FnOnce(&AppState),
{
    APP.with(|cell| match cell.borrow().as_ref() {
        Some(app) => f(app.state()),
        None => log::warn!("⚠️ [APP] Not initialized"),
    });
}

// ============================================================================
// EXPORTS - Callable from inline handlers in the static pages
// ============================================================================

#[wasm_bindgen]
pub fn toggle_notifications() {
    with_state(|state| {
        NotificationViewModel::new(state).toggle_dropdown();
    });
}

#[wasm_bindgen]
pub fn mark_notification_read(notification_id: f64) {
    let Some(id) = notification_id_from_js(notification_id) else {
        log::warn!("⚠️ [NOTIF] Ignoring invalid id {}", notification_id);
        return;
    };
    with_state(|state| {
        let vm = NotificationViewModel::new(state);
        spawn_local(async move {
            vm.mark_read(id).await;
        });
    });
}

#[wasm_bindgen]
pub fn mark_all_notifications_read() {
    with_state(|state| {
        let vm = NotificationViewModel::new(state);
        spawn_local(async move {
            vm.mark_all_read().await;
        });
    });
}

#[wasm_bindgen]
pub fn toggle_show_all() {
    with_state(|state| DashboardViewModel::new(state).toggle_show_all());
}

#[wasm_bindgen]
pub fn view_subject(code: &str) {
    with_state(|state| views::dashboard::open_subject(state, code));
}

#[wasm_bindgen]
pub fn toggle_password_visibility(input_id: &str) -> bool {
    views::profile::toggle_password_visibility(input_id)
}

#[wasm_bindgen]
pub fn close_modal(modal_id: &str) {
    views::profile::set_modal(modal_id, false);
}

#[wasm_bindgen]
pub fn logout() {
    with_state(|state| views::profile::logout(state, state.role));
}
