//! List Query
//!
//! Sort and search parameters for the post listing. The backend sorts via
//! `/posts?sort=&direction=` and searches via `/posts/search?title=&content=&author=`.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped in query-string values
const QUERY: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'>')
    .add(b'=')
    .add(b'?');

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Content,
    Author,
    Date,
}

impl SortField {
    pub const ALL: &'static [SortField] = &[
        SortField::Title,
        SortField::Content,
        SortField::Author,
        SortField::Date,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Title => "title",
            SortField::Content => "content",
            SortField::Author => "author",
            SortField::Date => "date",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Current listing parameters; `Default` is the plain unsorted `/posts` view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQuery {
    pub sort: Option<(SortField, SortDirection)>,
    pub search: String,
}

impl ListQuery {
    /// Path and query string for the listing request, relative to the base URL.
    ///
    /// A non-empty search term routes to `/posts/search`, matched against
    /// title, content and author at once (the backend ORs the fields and
    /// its search endpoint does not sort).
    pub fn path_and_query(&self) -> String {
        let term = self.search.trim();
        if !term.is_empty() {
            let escaped = utf8_percent_encode(term, QUERY).to_string();
            return format!(
                "/posts/search?title={0}&content={0}&author={0}",
                escaped
            );
        }
        match self.sort {
            Some((field, direction)) => format!(
                "/posts?sort={}&direction={}",
                field.as_str(),
                direction.as_str()
            ),
            None => "/posts".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_is_plain_listing() {
        assert_eq!(ListQuery::default().path_and_query(), "/posts");
    }

    #[test]
    fn test_sorted_listing() {
        let query = ListQuery {
            sort: Some((SortField::Date, SortDirection::Desc)),
            search: String::new(),
        };
        assert_eq!(query.path_and_query(), "/posts?sort=date&direction=desc");
    }

    #[test]
    fn test_search_overrides_sort() {
        let query = ListQuery {
            sort: Some((SortField::Title, SortDirection::Asc)),
            search: "rust".to_string(),
        };
        assert_eq!(
            query.path_and_query(),
            "/posts/search?title=rust&content=rust&author=rust"
        );
    }

    #[test]
    fn test_search_term_is_escaped_and_trimmed() {
        let query = ListQuery {
            sort: None,
            search: "  a&b ".to_string(),
        };
        assert_eq!(
            query.path_and_query(),
            "/posts/search?title=a%26b&content=a%26b&author=a%26b"
        );
    }

    #[test]
    fn test_whitespace_search_is_plain_listing() {
        let query = ListQuery {
            sort: None,
            search: "   ".to_string(),
        };
        assert_eq!(query.path_and_query(), "/posts");
    }

    #[test]
    fn test_direction_toggle() {
        assert_eq!(SortDirection::Asc.toggled(), SortDirection::Desc);
        assert_eq!(SortDirection::default(), SortDirection::Asc);
    }
}
