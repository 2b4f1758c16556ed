// ============================================================================
// INLINE MESSAGES - Replaces alert() with text rendered into the page
// ============================================================================

use crate::dom::{get_element_by_id, set_class, set_text_content, set_visible};
use crate::error::PortalError;

/// Writes `text` into the message slot `id`, styled as error or success
pub fn show_message(id: &str, text: &str, is_error: bool) {
    let Some(slot) = get_element_by_id(id) else {
        log::warn!("⚠️ [VIEW] No #{} on this page for: {}", id, text);
        return;
    };
    set_text_content(&slot, text);
    let styled = set_class(&slot, "error", is_error)
        .and_then(|_| set_class(&slot, "success", !is_error))
        .and_then(|_| set_visible(&slot, true));
    if styled.is_err() {
        log::warn!("⚠️ [VIEW] Could not style #{}", id);
    }
}

pub fn show_error(id: &str, err: &PortalError) {
    show_message(id, &err.user_message(), true);
}

pub fn clear_message(id: &str) {
    if let Some(slot) = get_element_by_id(id) {
        set_text_content(&slot, "");
        let _ = set_visible(&slot, false);
    }
}
