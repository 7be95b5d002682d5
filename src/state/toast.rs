//! Transient notification state.
//!
//! Mutations never fail fatally in this fragment; errors surface here as
//! a dismissible message and control returns to the user.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Current transient error notification, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub message: Option<String>,
}

impl ToastState {
    /// Show an error notification, replacing any current one.
    pub fn error(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    /// Dismiss the current notification.
    pub fn clear(&mut self) {
        self.message = None;
    }
}
