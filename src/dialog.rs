//! Browser Dialogs

/// Ask the user with `window.confirm`. Anything but an explicit OK counts as no.
pub fn confirm(message: &str) -> bool {
    let Some(window) = web_sys::window() else {
        log::warn!("[DIALOG] No window available, treating confirm as cancelled");
        return false;
    };
    match window.confirm_with_message(message) {
        Ok(answer) => answer,
        Err(err) => {
            log::warn!("[DIALOG] confirm failed: {:?}", err);
            false
        }
    }
}
