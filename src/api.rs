//! Blog API Bindings
//!
//! One async function per backend endpoint, over gloo-net. Errors are
//! stringified at this boundary; callers decide whether to log or ignore.

use gloo_net::http::Request;

use crate::models::{Post, PostDraft};
use crate::query::ListQuery;

/// Join the user-supplied base URL with an endpoint path.
/// Tolerates a trailing slash in the configured base.
fn endpoint(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

fn post_path(id: u32) -> String {
    format!("/posts/{}", id)
}

/// GET `{base}/posts` (or `/posts/search`) per the active query
pub async fn list_posts(base: &str, query: &ListQuery) -> Result<Vec<Post>, String> {
    let url = endpoint(base, &query.path_and_query());
    let response = Request::get(&url).send().await.map_err(|e| e.to_string())?;
    response.json::<Vec<Post>>().await.map_err(|e| e.to_string())
}

/// POST `{base}/posts` with the four draft fields
pub async fn create_post(base: &str, draft: &PostDraft) -> Result<Post, String> {
    let response = Request::post(&endpoint(base, "/posts"))
        .json(draft)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    response.json::<Post>().await.map_err(|e| e.to_string())
}

/// GET `{base}/posts/{id}/like`. The backend increments the counter on GET;
/// the verb is kept for compatibility.
pub async fn like_post(base: &str, id: u32) -> Result<Post, String> {
    let url = endpoint(base, &format!("{}/like", post_path(id)));
    let response = Request::get(&url).send().await.map_err(|e| e.to_string())?;
    response.json::<Post>().await.map_err(|e| e.to_string())
}

/// DELETE `{base}/posts/{id}`. The response body is not inspected; the
/// follow-up listing is what reconciles the rendered state.
pub async fn delete_post(base: &str, id: u32) -> Result<(), String> {
    Request::delete(&endpoint(base, &post_path(id)))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    Ok(())
}

/// PUT `{base}/posts/{id}` with the edited draft
pub async fn update_post(base: &str, id: u32, draft: &PostDraft) -> Result<Post, String> {
    let response = Request::put(&endpoint(base, &post_path(id)))
        .json(draft)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    response.json::<Post>().await.map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_join() {
        assert_eq!(
            endpoint("http://localhost:5002/api", "/posts"),
            "http://localhost:5002/api/posts"
        );
        // Trailing slash on the configured base does not double up
        assert_eq!(
            endpoint("http://localhost:5002/api/", "/posts"),
            "http://localhost:5002/api/posts"
        );
    }

    #[test]
    fn test_post_paths() {
        assert_eq!(post_path(5), "/posts/5");
        assert_eq!(
            endpoint("http://h/api", &format!("{}/like", post_path(7))),
            "http://h/api/posts/7/like"
        );
    }

    #[test]
    fn test_listing_url_carries_query() {
        let query = ListQuery {
            sort: Some((crate::query::SortField::Author, Default::default())),
            search: String::new(),
        };
        assert_eq!(
            endpoint("http://h/api", &query.path_and_query()),
            "http://h/api/posts?sort=author&direction=asc"
        );
    }
}
