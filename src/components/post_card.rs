//! Post Card Component
//!
//! One rendered post with Like/Update/Delete actions. "Update" swaps the
//! card to an in-place edit form seeded from the post's last-fetched record.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::context::AppContext;
use crate::models::{
    author_line, date_line, strip_label, Post, PostDraft, AUTHOR_LABEL, DATE_LABEL,
};

/// A single post, toggling between view and edit state
#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = post.id;
    let likes = post.likes;
    let title = post.title.clone();
    let content = post.content.clone();
    let author_text = author_line(&post);
    let date_text = date_line(&post);

    let (editing, set_editing) = signal(false);

    // Edit draft, seeded from the card's displayed text (label prefixes
    // stripped) each time the user enters edit mode. The display strings come
    // from the last-fetched record, not from reading the DOM back out.
    let (draft_title, set_draft_title) = signal(String::new());
    let (draft_content, set_draft_content) = signal(String::new());
    let (draft_author, set_draft_author) = signal(String::new());
    let (draft_date, set_draft_date) = signal(String::new());

    let begin_edit = {
        let title = title.clone();
        let content = content.clone();
        let author_text = author_text.clone();
        let date_text = date_text.clone();
        move |_| {
            set_draft_title.set(title.clone());
            set_draft_content.set(content.clone());
            set_draft_author.set(strip_label(&author_text, AUTHOR_LABEL).to_string());
            set_draft_date.set(strip_label(&date_text, DATE_LABEL).to_string());
            set_editing.set(true);
        }
    };

    let like = move |_| {
        let base = ctx.base_url.get();
        spawn_local(async move {
            match api::like_post(&base, id).await {
                Ok(liked) => {
                    web_sys::console::log_1(&format!("Post liked: {:?}", liked).into());
                    ctx.reload();
                }
                Err(e) => web_sys::console::error_1(&format!("Error: {}", e).into()),
            }
        });
    };

    let delete = move |_| {
        let base = ctx.base_url.get();
        spawn_local(async move {
            match api::delete_post(&base, id).await {
                Ok(()) => {
                    web_sys::console::log_1(&format!("Post deleted: {}", id).into());
                    ctx.reload();
                }
                Err(e) => web_sys::console::error_1(&format!("Error: {}", e).into()),
            }
        });
    };

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = PostDraft {
            title: draft_title.get(),
            content: draft_content.get(),
            author: draft_author.get(),
            date: draft_date.get(),
        };
        let base = ctx.base_url.get();
        spawn_local(async move {
            match api::update_post(&base, id, &draft).await {
                Ok(updated) => {
                    web_sys::console::log_1(&format!("Post updated: {:?}", updated).into());
                    set_editing.set(false);
                    ctx.reload();
                }
                // Form stays open and unsaved on failure
                Err(e) => web_sys::console::error_1(&format!("Error: {}", e).into()),
            }
        });
    };

    let cancel = move |_| {
        set_editing.set(false);
        ctx.reload();
    };

    let input_value = |ev: &web_sys::Event| {
        let target = ev.target().unwrap();
        target
            .dyn_ref::<web_sys::HtmlInputElement>()
            .unwrap()
            .value()
    };

    view! {
        <div class="post">
            <Show when=move || !editing.get()>
                <h2>{title.clone()}</h2>
                <p>{content.clone()}</p>
                <p>{author_text.clone()}</p>
                <p>{date_text.clone()}</p>
                <div class="buttons-wrapper">
                    <button class="post-like" on:click=like>
                        {format!("Like {}", likes)}
                    </button>
                    <button class="post-update" on:click=begin_edit.clone()>
                        "Update"
                    </button>
                    <button class="post-delete" on:click=delete>
                        "Delete"
                    </button>
                </div>
            </Show>
            <Show when=move || editing.get()>
                <form class="post-edit" on:submit=save>
                    <input
                        type="text"
                        prop:value=move || draft_title.get()
                        on:input=move |ev| set_draft_title.set(input_value(&ev))
                    />
                    <textarea
                        prop:value=move || draft_content.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let area = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                            set_draft_content.set(area.value());
                        }
                    ></textarea>
                    <input
                        type="text"
                        prop:value=move || draft_author.get()
                        on:input=move |ev| set_draft_author.set(input_value(&ev))
                    />
                    <input
                        type="text"
                        prop:value=move || draft_date.get()
                        on:input=move |ev| set_draft_date.set(input_value(&ev))
                    />
                    <button type="submit" class="save-button">"Save"</button>
                    <button type="button" on:click=cancel>"Cancel"</button>
                </form>
            </Show>
        </div>
    }
}
