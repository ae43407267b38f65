//! Blocking message box for fatal initialisation errors.

/// Title of the box shown when a sample fails to start.
pub const INIT_FAILED_TITLE: &str = "Initialization failed";

/// Shows `message` in a modal error box and waits for the user.
#[cfg(feature = "dialog")]
pub fn show_error(title: &str, message: &str) {
    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title(title)
        .set_description(message)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

/// Without the `dialog` feature the message only reaches the log.
#[cfg(not(feature = "dialog"))]
pub fn show_error(title: &str, message: &str) {
    log::error!("{title}: {message}");
}
