//! Session token access for authenticated requests.
//!
//! Reads the bearer token the portal login flow stores in `localStorage`.
//! SSR paths return `None` so server rendering stays deterministic.

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "token";

/// Read the stored session token, if any.
pub fn stored_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok().flatten()?;
        storage.get_item(TOKEN_KEY).ok().flatten().filter(|t| !t.is_empty())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
