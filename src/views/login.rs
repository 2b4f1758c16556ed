// ============================================================================
// LOGIN VIEW - Binds the static login form of each portal
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use crate::dom::{get_element_by_id, input_value, navigate, on_submit, set_text_content};
use crate::models::Role;
use crate::state::AppState;
use crate::viewmodels::AuthViewModel;
use crate::views::message::{clear_message, show_error, show_message};

pub const LOGIN_FORM_ID: &str = "loginForm";
pub const LOGIN_MESSAGE_ID: &str = "responseMessage";
pub const LOGIN_BUTTON_ID: &str = "loginButton";
pub const PASSWORD_INPUT_ID: &str = "password";

/// Admin form names its field `username`; the others use `identifier`
pub fn identifier_input_id(role: Role) -> &'static str {
    match role {
        Role::Admin => "username",
        Role::Student | Role::Professor => "identifier",
    }
}

pub fn bind_login(state: &AppState, role: Role) -> Result<(), JsValue> {
    let Some(form) = get_element_by_id(LOGIN_FORM_ID) else {
        log::warn!("⚠️ [LOGIN] #{} not found, nothing to bind", LOGIN_FORM_ID);
        return Ok(());
    };
    log::info!("🎬 [LOGIN] Binding {} login form", role.label());

    let state = state.clone();
    let busy = Rc::new(Cell::new(false));

    on_submit(&form, move || {
        if busy.get() {
            return;
        }
        let identifier = input_value(identifier_input_id(role));
        let password = input_value(PASSWORD_INPUT_ID);
        let vm = AuthViewModel::new(&state);
        let busy = busy.clone();

        busy.set(true);
        set_button(role, true);
        clear_message(LOGIN_MESSAGE_ID);

        spawn_local(async move {
            match vm.login(role, &identifier, &password).await {
                Ok(dashboard) => {
                    show_message(LOGIN_MESSAGE_ID, "Login successful! Redirecting...", false);
                    if let Err(e) = navigate(dashboard) {
                        log::error!("❌ [LOGIN] Navigation failed: {:?}", e);
                    }
                }
                Err(e) => {
                    log::error!("❌ [LOGIN] {}", e);
                    show_error(LOGIN_MESSAGE_ID, &e);
                }
            }
            busy.set(false);
            set_button(role, false);
        });
    })
}

fn set_button(role: Role, loading: bool) {
    let Some(button) = get_element_by_id(LOGIN_BUTTON_ID) else {
        return;
    };
    set_text_content(&button, &login_button_label(role, loading));
    let toggled = if loading {
        button.set_attribute("disabled", "")
    } else {
        button.remove_attribute("disabled")
    };
    if let Err(e) = toggled {
        log::warn!("⚠️ [LOGIN] Could not toggle #{}: {:?}", LOGIN_BUTTON_ID, e);
    }
}

fn login_button_label(role: Role, loading: bool) -> String {
    if loading {
        "Signing in...".to_string()
    } else {
        format!("Login as {}", role.label())
    }
}
