//! Shared list and pagination types.

use serde::{Deserialize, Serialize};

use crate::clients::HttpRequestBuilder;

/// A page of resources plus the pagination metadata the API returned.
///
/// The metadata shape is owned by the remote schema; unknown fields are
/// tolerated so schema additions do not break decoding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListResource<T> {
    /// The decoded items on this page.
    pub items: Vec<T>,
    /// Pagination metadata, when the endpoint returns it.
    #[serde(default)]
    pub pagination: Pagination,
}

/// Pagination metadata attached to list responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// The page number of this response.
    #[serde(default)]
    pub page: Option<u64>,
    /// The page size used for this response.
    #[serde(default)]
    pub size: Option<u64>,
    /// Total number of items across all pages, when reported.
    #[serde(default)]
    pub total: Option<u64>,
}

/// Query parameters accepted by list endpoints.
///
/// Absent fields are omitted from the query string entirely.
///
/// # Example
///
/// ```rust
/// use streampay_sdk::resources::PaginationParams;
///
/// let params = PaginationParams {
///     page: Some(2),
///     size: Some(50),
///     ..PaginationParams::default()
/// };
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationParams {
    /// Page number to fetch.
    pub page: Option<u32>,
    /// Items per page.
    pub size: Option<u32>,
    /// Sort expression, passed through verbatim.
    pub sort: Option<String>,
}

impl PaginationParams {
    pub(crate) fn apply(&self, builder: HttpRequestBuilder) -> HttpRequestBuilder {
        builder
            .opt_query_param("page", self.page)
            .opt_query_param("size", self.size)
            .opt_query_param("sort", self.sort.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpMethod, HttpRequest};

    #[test]
    fn test_pagination_params_serialize_only_present_fields() {
        let params = PaginationParams {
            page: Some(3),
            size: None,
            sort: Some("created_at".to_string()),
        };
        let request = params
            .apply(HttpRequest::builder(HttpMethod::Get, "/api/v2/products"))
            .build();
        let built = request.build_wire("https://api.example.com", "ua").unwrap();
        assert_eq!(
            built.url,
            "https://api.example.com/api/v2/products?page=3&sort=created_at"
        );
    }

    #[test]
    fn test_list_resource_decodes_without_pagination() {
        let list: ListResource<String> =
            serde_json::from_str(r#"{"items":["a","b"]}"#).unwrap();
        assert_eq!(list.items, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(list.pagination, Pagination::default());
    }

    #[test]
    fn test_pagination_tolerates_unknown_fields() {
        let pagination: Pagination =
            serde_json::from_str(r#"{"page":1,"size":25,"total":99,"pages":4}"#).unwrap();
        assert_eq!(pagination.page, Some(1));
        assert_eq!(pagination.total, Some(99));
    }
}
