use async_trait::async_trait;

/// Asks the user to confirm an irreversible action
#[async_trait(?Send)]
pub trait ConfirmDialog {
    async fn confirm(&self, message: &str) -> bool;
}

/// `window.confirm` prompt
pub struct BrowserConfirm;

#[async_trait(?Send)]
impl ConfirmDialog for BrowserConfirm {
    async fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|win| win.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}
