use serde::{Deserialize, Serialize};

/// Paged list envelope.
///
/// The backend grew over time and its list endpoints do not agree on field
/// names: the rows arrive as `items`, `data` or `records`, and the paging
/// counters as `page`/`currentPage` and `totalPages`/`pageCount`. The aliases
/// below absorb that drift so callers see one shape. Pages are 1-based.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paged<T> {
    #[serde(alias = "data", alias = "records")]
    pub items: Vec<T>,
    #[serde(alias = "currentPage")]
    pub page: u32,
    #[serde(alias = "pageCount")]
    pub total_pages: u32,
}

impl<T> Paged<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            total_pages: 0,
        }
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_field_names() {
        let page: Paged<String> = serde_json::from_str(
            r#"{"items":["a","b"],"page":2,"totalPages":5}"#,
        )
        .unwrap();
        assert_eq!(page.items, vec!["a", "b"]);
        assert_eq!(page.page, 2);
        assert_eq!(page.total_pages, 5);
    }

    #[test]
    fn parses_legacy_field_names() {
        let page: Paged<i64> = serde_json::from_str(
            r#"{"data":[1,2,3],"currentPage":1,"pageCount":1}"#,
        )
        .unwrap();
        assert_eq!(page.items, vec![1, 2, 3]);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);

        let page: Paged<i64> = serde_json::from_str(
            r#"{"records":[7],"page":1,"totalPages":3}"#,
        )
        .unwrap();
        assert_eq!(page.items, vec![7]);
    }

    #[test]
    fn paging_cursors_are_one_based() {
        let first: Paged<i64> = Paged {
            items: vec![1],
            page: 1,
            total_pages: 3,
        };
        assert!(!first.has_prev());
        assert!(first.has_next());

        let last = Paged { page: 3, ..first.clone() };
        assert!(last.has_prev());
        assert!(!last.has_next());

        assert!(!Paged::<i64>::empty().has_next());
    }
}
