//! Base URL Persistence
//!
//! The one piece of state that outlives a page view: the API base URL,
//! kept in localStorage under `apiBaseUrl`.

use leptos::prelude::window;

const BASE_URL_KEY: &str = "apiBaseUrl";

/// Read the persisted base URL, if any
pub fn load_base_url() -> Option<String> {
    let storage = window().local_storage().ok()??;
    storage.get_item(BASE_URL_KEY).ok()?
}

/// Persist the base URL; quota or access errors are silently dropped
pub fn save_base_url(base_url: &str) {
    if let Ok(Some(storage)) = window().local_storage() {
        let _ = storage.set_item(BASE_URL_KEY, base_url);
    }
}
