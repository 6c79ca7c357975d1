//! Post List Component
//!
//! Renders the fetched posts. The backing signal is replaced wholesale on
//! every listing, so the render always reflects the last server response.

use leptos::prelude::*;

use crate::components::PostCard;
use crate::models::Post;

/// Container for the rendered post list
#[component]
pub fn PostList(posts: ReadSignal<Vec<Post>>) -> impl IntoView {
    view! {
        <div class="post-container">
            <For
                each=move || posts.get()
                key=|post| {
                    // Key on every field so an in-place server edit (same id)
                    // still re-renders the card
                    (
                        post.id,
                        post.title.clone(),
                        post.content.clone(),
                        post.author.clone(),
                        post.date.clone(),
                        post.likes,
                    )
                }
                let:post
            >
                <PostCard post=post />
            </For>
        </div>
        <p class="post-count">{move || format!("{} posts", posts.get().len())}</p>
    }
}
