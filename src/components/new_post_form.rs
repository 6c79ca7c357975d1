//! New Post Form Component
//!
//! Four-field form for creating posts, with required-field validation.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::context::AppContext;
use crate::models::PostDraft;

/// Form for creating new posts
#[component]
pub fn NewPostForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (title, set_title) = signal(String::new());
    let (content, set_content) = signal(String::new());
    let (author, set_author) = signal(String::new());
    let (date, set_date) = signal(String::new());

    let create_post = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = PostDraft {
            title: title.get(),
            content: content.get(),
            author: author.get(),
            date: date.get(),
        };
        // The only user-facing error in the app: incomplete drafts are
        // rejected with a blocking alert and no request is sent.
        if !draft.is_complete() {
            let _ = window().alert_with_message("Please fill in all fields.");
            return;
        }
        let base = ctx.base_url.get();
        spawn_local(async move {
            match api::create_post(&base, &draft).await {
                Ok(post) => {
                    web_sys::console::log_1(&format!("Post added: {:?}", post).into());
                    set_title.set(String::new());
                    set_content.set(String::new());
                    set_author.set(String::new());
                    set_date.set(String::new());
                    ctx.reload();
                }
                // Inputs stay populated so the user can retry
                Err(e) => web_sys::console::error_1(&format!("Error: {}", e).into()),
            }
        });
    };

    let input_value = |ev: &web_sys::Event| {
        let target = ev.target().unwrap();
        target
            .dyn_ref::<web_sys::HtmlInputElement>()
            .unwrap()
            .value()
    };

    view! {
        <form class="new-post-form" on:submit=create_post>
            <input
                type="text"
                placeholder="Title"
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(input_value(&ev))
            />
            <textarea
                placeholder="Content"
                prop:value=move || content.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let area = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                    set_content.set(area.value());
                }
            ></textarea>
            <input
                type="text"
                placeholder="Author"
                prop:value=move || author.get()
                on:input=move |ev| set_author.set(input_value(&ev))
            />
            <input
                type="text"
                placeholder="Date (YYYY-MM-DD)"
                prop:value=move || date.get()
                on:input=move |ev| set_date.set(input_value(&ev))
            />
            <button type="submit">"Add Post"</button>
        </form>
    }
}
