//! Full page reload side effect.
//!
//! The registration flow reloads the page after a confirmed create so the
//! hosting portal re-fetches its advertisement list. Browser-only; the
//! SSR path is a no-op.

/// Reload the current page.
pub fn reload_page() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }
}
