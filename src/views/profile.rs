// ============================================================================
// PROFILE VIEW - Navbar identity, profile modal, password modal, logout
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use crate::config::CONFIG;
use crate::dom::{
    get_element_by_id, get_input, input_value, navigate, on_change, on_click, on_input, on_submit,
    set_attribute, set_class, set_input_value, set_text_by_id, set_visible,
};
use crate::models::Role;
use crate::state::AppState;
use crate::viewmodels::profile_viewmodel::password_strength;
use crate::viewmodels::{AuthViewModel, ProfileForm, ProfileViewModel};
use crate::views::message::{clear_message, show_error, show_message};

pub const PROFILE_NAME_ID: &str = "profile-name";
pub const PROFILE_AVATAR_ID: &str = "profile-avatar";
pub const PROFILE_MODAL_ID: &str = "profile-modal";
pub const PROFILE_OPEN_ID: &str = "open-profile";
pub const PROFILE_FORM_ID: &str = "profile-form";
pub const PROFILE_UPLOAD_ID: &str = "profile-upload";
pub const PROFILE_MESSAGE_ID: &str = "profile-message";

pub const PASSWORD_MODAL_ID: &str = "password-modal";
pub const PASSWORD_OPEN_ID: &str = "open-password";
pub const PASSWORD_FORM_ID: &str = "password-form";
pub const NEW_PASSWORD_ID: &str = "new-password";
pub const CONFIRM_PASSWORD_ID: &str = "confirm-password";
pub const CURRENT_PASSWORD_ID: &str = "current-password";
pub const STRENGTH_BAR_ID: &str = "password-strength";
pub const PASSWORD_MESSAGE_ID: &str = "password-message";

pub const LOGOUT_ID: &str = "logout-btn";

/// Name + avatar in the navbar
pub fn render_identity(state: &AppState) -> Result<(), JsValue> {
    let Some(session) = state.session.get_session() else {
        return Ok(());
    };
    set_text_by_id(PROFILE_NAME_ID, session.display_name());

    if let (Some(avatar), Some(url)) = (
        get_element_by_id(PROFILE_AVATAR_ID),
        session.avatar_url(&CONFIG.server_base_url),
    ) {
        set_attribute(&avatar, "src", &url)?;
        set_visible(&avatar, true)?;
    }
    Ok(())
}

fn fill_form(form: &ProfileForm) {
    set_input_value("profile-id", &form.user_id);
    set_input_value("profile-fullname", &form.full_name);
    set_input_value("profile-email", &form.email);
    set_input_value("profile-phone", &form.phone);
    set_input_value("profile-course", &form.course);
    set_input_value("profile-year", &form.year_level);
    set_input_value("profile-specialization", &form.specialization);
}

fn read_form() -> ProfileForm {
    ProfileForm {
        user_id: input_value("profile-id"),
        full_name: input_value("profile-fullname"),
        email: input_value("profile-email"),
        phone: input_value("profile-phone"),
        course: input_value("profile-course"),
        year_level: input_value("profile-year"),
        specialization: input_value("profile-specialization"),
    }
}

pub fn set_modal(id: &str, open: bool) {
    if let Some(modal) = get_element_by_id(id) {
        if set_class(&modal, "active", open).is_err() {
            log::warn!("⚠️ [VIEW] Could not toggle #{}", id);
        }
    }
}

pub fn bind_profile(state: &AppState) -> Result<(), JsValue> {
    if let Some(button) = get_element_by_id(PROFILE_OPEN_ID) {
        let state = state.clone();
        on_click(&button, move |_| {
            if let Some(form) = ProfileViewModel::new(&state).load_form() {
                fill_form(&form);
            }
            clear_message(PROFILE_MESSAGE_ID);
            set_modal(PROFILE_MODAL_ID, true);
        })?;
    }

    if let Some(form) = get_element_by_id(PROFILE_FORM_ID) {
        let state = state.clone();
        on_submit(&form, move || match ProfileViewModel::new(&state).submit(&read_form()) {
            Ok(_) => {
                show_message(PROFILE_MESSAGE_ID, "Profile updated successfully!", false);
                set_modal(PROFILE_MODAL_ID, false);
            }
            Err(e) => {
                log::error!("❌ [PROFILE] {}", e);
                show_error(PROFILE_MESSAGE_ID, &e);
            }
        })?;
    }

    if let Some(upload) = get_element_by_id(PROFILE_UPLOAD_ID) {
        let state = state.clone();
        on_change(&upload, move |event| {
            let file = event
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            let Some(file) = file else {
                return;
            };

            let vm = ProfileViewModel::new(&state);
            spawn_local(async move {
                match vm.upload_picture(&file).await {
                    Ok(_) => show_message(PROFILE_MESSAGE_ID, "Profile picture updated successfully!", false),
                    Err(e) => {
                        log::error!("❌ [PROFILE] Upload failed: {}", e);
                        show_error(PROFILE_MESSAGE_ID, &e);
                    }
                }
            });
        })?;
    }

    bind_password(state)?;
    bind_logout(state)?;
    render_identity(state)
}

fn bind_password(state: &AppState) -> Result<(), JsValue> {
    if let Some(button) = get_element_by_id(PASSWORD_OPEN_ID) {
        on_click(&button, move |_| {
            clear_message(PASSWORD_MESSAGE_ID);
            set_modal(PASSWORD_MODAL_ID, true);
        })?;
    }

    if let Some(input) = get_element_by_id(NEW_PASSWORD_ID) {
        on_input(&input, move |_| render_strength(&input_value(NEW_PASSWORD_ID)))?;
    }

    if let Some(form) = get_element_by_id(PASSWORD_FORM_ID) {
        let state = state.clone();
        on_submit(&form, move || {
            let vm = ProfileViewModel::new(&state);
            match vm.change_password(&input_value(NEW_PASSWORD_ID), &input_value(CONFIRM_PASSWORD_ID)) {
                Ok(()) => {
                    for id in [CURRENT_PASSWORD_ID, NEW_PASSWORD_ID, CONFIRM_PASSWORD_ID] {
                        set_input_value(id, "");
                    }
                    render_strength("");
                    show_message(PASSWORD_MESSAGE_ID, "Password changed successfully!", false);
                    set_modal(PASSWORD_MODAL_ID, false);
                }
                Err(e) => show_error(PASSWORD_MESSAGE_ID, &e),
            }
        })?;
    }
    Ok(())
}

fn render_strength(password: &str) {
    let Some(bar) = get_element_by_id(STRENGTH_BAR_ID) else {
        return;
    };
    let strength = password_strength(password);
    bar.set_class_name(&format!("password-strength {}", strength.level.css_class()));
}

/// Flips an input between `password` and `text`; returns true when now visible
pub fn toggle_password_visibility(input_id: &str) -> bool {
    let Some(input) = get_input(input_id) else {
        return false;
    };
    let reveal = input.type_() == "password";
    input.set_type(if reveal { "text" } else { "password" });
    reveal
}

fn bind_logout(state: &AppState) -> Result<(), JsValue> {
    let Some(button) = get_element_by_id(LOGOUT_ID) else {
        return Ok(());
    };
    let state = state.clone();
    on_click(&button, move |event| {
        event.prevent_default();
        logout(&state, state.role);
    })
}

pub fn logout(state: &AppState, role: Role) {
    let login = AuthViewModel::new(state).logout(role);
    if let Err(e) = navigate(login) {
        log::error!("❌ [AUTH] Navigation failed: {:?}", e);
    }
}
