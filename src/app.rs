//! Masterblog Frontend App
//!
//! Main application component: configuration, create form, and post list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{BaseUrlBar, ListControls, NewPostForm, PostList};
use crate::context::AppContext;
use crate::models::Post;
use crate::query::ListQuery;
use crate::storage;

#[component]
pub fn App() -> impl IntoView {
    // State
    let (posts, set_posts) = signal(Vec::<Post>::new());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let base_url = RwSignal::new(storage::load_base_url().unwrap_or_default());
    let list_query = RwSignal::new(ListQuery::default());

    // Provide context to all children
    provide_context(AppContext::new(
        (reload_trigger, set_reload_trigger),
        base_url,
        list_query,
    ));

    // Load posts on mount (when a base URL was persisted) and whenever the
    // reload trigger or the sort/search query changes. The base URL itself is
    // read untracked so typing in the URL field does not refetch per keystroke.
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        let query = list_query.get();
        let base = base_url.get_untracked();
        if base.trim().is_empty() {
            return;
        }
        storage::save_base_url(&base);
        web_sys::console::log_1(
            &format!("[APP] Loading posts, trigger={}, query={:?}", trigger, query).into(),
        );
        spawn_local(async move {
            match api::list_posts(&base, &query).await {
                Ok(loaded) => {
                    web_sys::console::log_1(&format!("[APP] Loaded {} posts", loaded.len()).into());
                    set_posts.set(loaded);
                }
                // Previous render is left untouched on failure
                Err(e) => web_sys::console::error_1(&format!("Error: {}", e).into()),
            }
        });
    });

    view! {
        <div class="app-layout">
            <h1>"Masterblog"</h1>

            <BaseUrlBar />

            <NewPostForm />

            <ListControls />

            <PostList posts=posts />
        </div>
    }
}
