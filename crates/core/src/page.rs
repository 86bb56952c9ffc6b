//! Paginated list responses.

use serde::{Deserialize, Serialize};

/// One page of records as returned by the list endpoints.
///
/// `has_more` is whatever the API sent; it is never recomputed. Use
/// [`ListResponse::is_consistent`] when a caller wants to double-check it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub limit: u64,
    pub skip: u64,
    pub has_more: bool,
}

impl<T> ListResponse<T> {
    /// Value `has_more` should carry for well-formed API data:
    /// `skip + items.len() < total`.
    pub fn expected_has_more(&self) -> bool {
        self.end() < self.total
    }

    /// Whether the delivered `has_more` agrees with the page bounds.
    pub fn is_consistent(&self) -> bool {
        let consistent = self.has_more == self.expected_has_more();
        if !consistent {
            tracing::warn!(
                total = self.total,
                skip = self.skip,
                len = self.items.len(),
                has_more = self.has_more,
                "list response hasMore disagrees with page bounds"
            );
        }
        consistent
    }

    /// Offset of the next page, if the API reported one.
    pub fn next_skip(&self) -> Option<u64> {
        self.has_more.then(|| self.end())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Transform the items, keeping the paging fields.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> ListResponse<U> {
        ListResponse {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            limit: self.limit,
            skip: self.skip,
            has_more: self.has_more,
        }
    }

    fn end(&self) -> u64 {
        self.skip.saturating_add(self.items.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn page(len: usize, total: u64, skip: u64, has_more: bool) -> ListResponse<u32> {
        ListResponse {
            items: (0..len as u32).collect(),
            total,
            limit: 10,
            skip,
            has_more,
        }
    }

    #[test]
    fn decodes_camel_case_wire_shape() {
        let json = r#"{"items":[1,2],"total":5,"limit":2,"skip":0,"hasMore":true}"#;
        let resp: ListResponse<u32> = serde_json::from_str(json).unwrap();
        assert_eq!(resp.items, vec![1, 2]);
        assert!(resp.has_more);
        assert!(resp.is_consistent());
        assert_eq!(resp.next_skip(), Some(2));
    }

    #[test]
    fn last_page_has_no_next_skip() {
        let resp = page(3, 13, 10, false);
        assert!(resp.is_consistent());
        assert_eq!(resp.next_skip(), None);
    }

    #[test]
    fn delivered_has_more_is_trusted_even_when_wrong() {
        let resp = page(3, 13, 10, true);
        assert!(resp.has_more);
        assert!(!resp.expected_has_more());
        assert!(!resp.is_consistent());
    }

    #[test]
    fn map_keeps_paging_fields() {
        let resp = page(2, 4, 0, true).map(|n| n.to_string());
        assert_eq!(resp.items, vec!["0".to_string(), "1".to_string()]);
        assert_eq!((resp.total, resp.skip, resp.has_more), (4, 0, true));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: a page built the way the API builds it always passes
        /// the consistency check.
        #[test]
        fn well_formed_pages_are_consistent(
            total in 0u64..500,
            skip in 0u64..500,
            limit in 1u64..50,
        ) {
            let len = total.saturating_sub(skip).min(limit) as usize;
            let has_more = skip + (len as u64) < total;
            let resp = ListResponse {
                items: vec![(); len],
                total,
                limit,
                skip,
                has_more,
            };
            prop_assert!(resp.is_consistent());
            prop_assert_eq!(resp.next_skip().is_some(), has_more);
        }
    }
}
