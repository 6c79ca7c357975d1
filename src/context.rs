//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::query::ListQuery;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload the post list - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload the post list - write
    set_reload_trigger: WriteSignal<u32>,
    /// Configured API base URL (mirrors the persisted value)
    pub base_url: RwSignal<String>,
    /// Active sort/search parameters for the listing
    pub list_query: RwSignal<ListQuery>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        base_url: RwSignal<String>,
        list_query: RwSignal<ListQuery>,
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            base_url,
            list_query,
        }
    }

    /// Trigger a full re-fetch of the post list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}
