//! UI Components
//!
//! Reusable Leptos components.

mod base_url_bar;
mod list_controls;
mod new_post_form;
mod post_card;
mod post_list;

pub use base_url_bar::BaseUrlBar;
pub use list_controls::ListControls;
pub use new_post_form::NewPostForm;
pub use post_card::PostCard;
pub use post_list::PostList;
