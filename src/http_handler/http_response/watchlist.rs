use super::response_common::SerdeJSONBodyHTTPResponseType;
use crate::http_handler::common::WatchlistEntry;

/// Body of `GET /users/{id}/watchlist`.
#[derive(serde::Deserialize, Debug)]
pub struct WatchlistResponse {
    data: Vec<WatchlistEntry>,
    pagination: Option<Pagination>,
}

impl SerdeJSONBodyHTTPResponseType for WatchlistResponse {}

impl WatchlistResponse {
    pub fn entries(&self) -> &[WatchlistEntry] { &self.data }
    pub fn into_entries(self) -> Vec<WatchlistEntry> { self.data }
    pub fn pagination(&self) -> Option<&Pagination> { self.pagination.as_ref() }
}

/// Shared pagination block on list endpoints.
#[derive(serde::Deserialize, Debug)]
pub struct Pagination {
    page: u32,
    limit: u32,
    total: Option<u64>,
}

impl Pagination {
    pub fn page(&self) -> u32 { self.page }
    pub fn limit(&self) -> u32 { self.limit }
    pub fn total(&self) -> Option<u64> { self.total }
}
