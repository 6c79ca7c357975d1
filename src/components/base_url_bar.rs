//! Base URL Bar Component
//!
//! Input for the API base URL plus a button to (re)load the post list.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::AppContext;

/// Base-URL input and Load button
#[component]
pub fn BaseUrlBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="base-url-bar">
            <input
                type="text"
                id="api-base-url"
                placeholder="API base URL, e.g. http://localhost:5002/api"
                prop:value=move || ctx.base_url.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    ctx.base_url.set(input.value());
                }
            />
            <button on:click=move |_| ctx.reload()>"Load Posts"</button>
        </div>
    }
}
