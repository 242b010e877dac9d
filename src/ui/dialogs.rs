use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

pub fn show_error(message: &str, detail: &str) {
    log::error!("{message}: {detail}");
    MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title("Error")
        .set_description(format!("{message}\n\n{detail}"))
        .set_buttons(MessageButtons::Ok)
        .show();
}

pub fn show_info(title: &str, message: &str) {
    MessageDialog::new()
        .set_level(MessageLevel::Info)
        .set_title(title)
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}

/// Blocks until the user answers; `true` on Ok.
pub fn confirm(title: &str, message: &str) -> bool {
    let answer = MessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title(title)
        .set_description(message)
        .set_buttons(MessageButtons::OkCancel)
        .show();
    answer == MessageDialogResult::Ok
}
