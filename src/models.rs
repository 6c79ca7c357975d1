//! Frontend Models
//!
//! Data structures matching the blog API.

use serde::{Deserialize, Serialize};

/// Post data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: u32,
    pub title: String,
    pub content: String,
    pub author: String,
    pub date: String,
    /// Older records in the backend's posts.json predate the like counter
    #[serde(default)]
    pub likes: u32,
}

/// The four writable post fields, the JSON body for create and update
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub author: String,
    pub date: String,
}

impl PostDraft {
    /// Names of the fields that are still empty, in display order
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.content.trim().is_empty() {
            missing.push("content");
        }
        if self.author.trim().is_empty() {
            missing.push("author");
        }
        if self.date.trim().is_empty() {
            missing.push("date");
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

pub const AUTHOR_LABEL: &str = "Author: ";
pub const DATE_LABEL: &str = "Date: ";

/// "Author: {author}" line as rendered on a post card
pub fn author_line(post: &Post) -> String {
    format!("{}{}", AUTHOR_LABEL, post.author)
}

/// "Date: {date}" line as rendered on a post card
pub fn date_line(post: &Post) -> String {
    format!("{}{}", DATE_LABEL, post.date)
}

/// Strip a known label prefix from a display line; passes unlabeled text through
pub fn strip_label<'a>(line: &'a str, label: &str) -> &'a str {
    line.strip_prefix(label).unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_post(id: u32) -> Post {
        Post {
            id,
            title: format!("Post {}", id),
            content: "Some content".to_string(),
            author: "Ada".to_string(),
            date: "2024-05-01".to_string(),
            likes: 2,
        }
    }

    fn make_draft() -> PostDraft {
        PostDraft {
            title: "Post 1".to_string(),
            content: "Some content".to_string(),
            author: "Ada".to_string(),
            date: "2024-05-01".to_string(),
        }
    }

    #[test]
    fn test_likes_defaults_to_zero() {
        let json = r#"{"id":1,"title":"A","content":"B","author":"C","date":"2024-01-01"}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.likes, 0);
    }

    #[test]
    fn test_draft_serializes_four_fields_only() {
        let draft = make_draft();
        let value: serde_json::Value = serde_json::to_value(&draft).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert_eq!(obj["title"], "Post 1");
        assert_eq!(obj["author"], "Ada");
        assert!(!obj.contains_key("id"));
        assert!(!obj.contains_key("likes"));
    }

    #[test]
    fn test_missing_fields() {
        let mut draft = make_draft();
        assert!(draft.is_complete());

        draft.author = "  ".to_string();
        draft.date = String::new();
        assert_eq!(draft.missing_fields(), vec!["author", "date"]);
        assert!(!draft.is_complete());
    }

    #[test]
    fn test_strip_label() {
        let post = make_post(3);
        assert_eq!(strip_label(&author_line(&post), AUTHOR_LABEL), "Ada");
        assert_eq!(strip_label(&date_line(&post), DATE_LABEL), "2024-05-01");
        // Text without the label is returned unchanged
        assert_eq!(strip_label("Ada", AUTHOR_LABEL), "Ada");
        // Labels embedded in the value survive a single strip
        assert_eq!(
            strip_label("Author: Author: Ada", AUTHOR_LABEL),
            "Author: Ada"
        );
    }
}
