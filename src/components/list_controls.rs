//! List Controls Component
//!
//! Sort selector and search box for the post listing. Both map onto the
//! backend's `?sort=&direction=` parameters and `/posts/search` endpoint.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::AppContext;
use crate::query::{SortDirection, SortField};

/// Sort buttons and search input
#[component]
pub fn ListControls() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // Search text is buffered locally and only applied on submit, so typing
    // does not fire a request per keystroke.
    let (search_text, set_search_text) = signal(String::new());

    let apply_search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.list_query
            .update(|query| query.search = search_text.get());
    };

    // First click sorts ascending, second click flips the direction
    let select_sort = move |field: SortField| {
        ctx.list_query.update(|query| {
            query.sort = match query.sort {
                Some((current, direction)) if current == field => {
                    Some((field, direction.toggled()))
                }
                _ => Some((field, SortDirection::Asc)),
            };
        });
    };

    let clear_sort = move |_| {
        ctx.list_query.update(|query| query.sort = None);
    };

    view! {
        <div class="list-controls">
            <div class="sort-row">
                <span class="sort-label">"Sort:"</span>
                {SortField::ALL
                    .iter()
                    .map(|&field| {
                        let label = move || {
                            match ctx.list_query.get().sort {
                                Some((current, direction)) if current == field => {
                                    format!("{} {}", field.as_str(), match direction {
                                        SortDirection::Asc => "↑",
                                        SortDirection::Desc => "↓",
                                    })
                                }
                                _ => field.as_str().to_string(),
                            }
                        };
                        let is_active = move || {
                            matches!(ctx.list_query.get().sort, Some((current, _)) if current == field)
                        };
                        view! {
                            <button
                                type="button"
                                class=move || {
                                    if is_active() { "sort-btn active" } else { "sort-btn" }
                                }
                                on:click=move |_| select_sort(field)
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
                <Show when=move || ctx.list_query.get().sort.is_some()>
                    <button type="button" class="sort-clear-btn" on:click=clear_sort>
                        "×"
                    </button>
                </Show>
            </div>

            <form class="search-row" on:submit=apply_search>
                <input
                    type="text"
                    placeholder="Search title, content, author..."
                    prop:value=move || search_text.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_search_text.set(input.value());
                    }
                />
                <button type="submit">"Search"</button>
                <Show when=move || !ctx.list_query.get().search.is_empty()>
                    <button
                        type="button"
                        on:click=move |_| {
                            set_search_text.set(String::new());
                            ctx.list_query.update(|query| query.search = String::new());
                        }
                    >
                        "Clear"
                    </button>
                </Show>
            </form>
        </div>
    }
}
