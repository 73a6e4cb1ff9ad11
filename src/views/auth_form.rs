use web_sys::Element;

use crate::dom::{append_child, clear_children, set_flag, set_text_content};
use crate::views::shared::render_error;

pub fn set_pending(button: &Element, pending: bool, busy_label: &str, idle_label: &str) {
    let _ = set_flag(button, "disabled", pending);
    set_text_content(button, if pending { busy_label } else { idle_label });
}

/// None limpia el error
pub fn show_form_error(container: &Element, message: Option<&str>) {
    clear_children(container);
    let Some(message) = message else {
        return;
    };
    match render_error(message) {
        Ok(banner) => {
            let _ = append_child(container, &banner);
        }
        Err(e) => log::error!("❌ [AUTH] {:?}", e),
    }
}
