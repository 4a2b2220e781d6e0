//! Blocking completion dialog

use rfd::{MessageButtons, MessageDialog, MessageLevel};

/// Show `notice` in a modal dialog and wait for the user to dismiss it
pub fn show_completion(notice: &str) {
    MessageDialog::new()
        .set_title("VidTik")
        .set_description(notice)
        .set_level(MessageLevel::Info)
        .set_buttons(MessageButtons::Ok)
        .show();
}
