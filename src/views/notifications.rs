// ============================================================================
// NOTIFICATIONS VIEW - Bell badge + dropdown list
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Node};
use crate::dom::{
    append_child, clear_children, get_element_by_id, on_click, on_document_click, set_class,
    set_text_content, set_visible, ElementBuilder,
};
use crate::models::Notification;
use crate::state::AppState;
use crate::viewmodels::NotificationViewModel;

pub const BELL_ID: &str = "notification-bell";
pub const BADGE_ID: &str = "notification-badge";
pub const DROPDOWN_ID: &str = "notification-dropdown";
pub const LIST_ID: &str = "notification-list";
pub const MARK_ALL_ID: &str = "mark-all-read";

pub fn render_badge(state: &AppState) -> Result<(), JsValue> {
    let Some(badge) = get_element_by_id(BADGE_ID) else {
        return Ok(());
    };
    match state.notifications.badge_text() {
        Some(text) => {
            set_text_content(&badge, &text);
            set_visible(&badge, true)
        }
        None => set_visible(&badge, false),
    }
}

pub fn render_dropdown(state: &AppState) -> Result<(), JsValue> {
    if let Some(dropdown) = get_element_by_id(DROPDOWN_ID) {
        set_class(&dropdown, "show", state.notifications.is_dropdown_open())?;
    }

    let Some(list) = get_element_by_id(LIST_ID) else {
        return Ok(());
    };
    clear_children(&list);

    let notifications = state.notifications.snapshot();
    if notifications.is_empty() {
        let empty = ElementBuilder::new("div")?
            .class("notification-empty")
            .text("No notifications")
            .build();
        return append_child(&list, &empty);
    }

    for notification in &notifications {
        append_child(&list, &render_notification_item(state, notification)?)?;
    }
    Ok(())
}

fn render_notification_item(state: &AppState, notification: &Notification) -> Result<Element, JsValue> {
    let class = if notification.is_read {
        "notification-item"
    } else {
        "notification-item unread"
    };

    let meta = format!("{} · {}", notification.kind_label(), notification.time_label());
    let item = ElementBuilder::new("div")?
        .class(class)
        .attr("data-id", &notification.id.to_string())?
        .child(ElementBuilder::new("div")?.class("notification-title").text(&notification.title).build())?
        .child(ElementBuilder::new("div")?.class("notification-message").text(&notification.message).build())?
        .child(ElementBuilder::new("div")?.class("notification-meta").text(&meta).build())?
        .build();

    if !notification.is_read {
        let state = state.clone();
        let id = notification.id;
        on_click(&item, move |_| {
            let vm = NotificationViewModel::new(&state);
            spawn_local(async move {
                vm.mark_read(id).await;
            });
        })?;
    }
    Ok(item)
}

pub fn bind_notifications(state: &AppState) -> Result<(), JsValue> {
    if let Some(bell) = get_element_by_id(BELL_ID) {
        let state = state.clone();
        on_click(&bell, move |event| {
            event.stop_propagation();
            NotificationViewModel::new(&state).toggle_dropdown();
        })?;
    }

    if let Some(button) = get_element_by_id(MARK_ALL_ID) {
        let state = state.clone();
        on_click(&button, move |event| {
            event.prevent_default();
            let vm = NotificationViewModel::new(&state);
            spawn_local(async move {
                vm.mark_all_read().await;
            });
        })?;
    }

    if let Some(dropdown) = get_element_by_id(DROPDOWN_ID) {
        let state = state.clone();
        on_document_click(move |event| {
            let inside = event
                .target()
                .and_then(|t| t.dyn_into::<Node>().ok())
                .map(|node| dropdown.contains(Some(&node)))
                .unwrap_or(false);
            if !inside {
                NotificationViewModel::new(&state).dismiss_dropdown();
            }
        })?;
    }

    render_badge(state)?;
    render_dropdown(state)
}
