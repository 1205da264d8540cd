use super::response_common::SerdeJSONBodyHTTPResponseType;

/// Body of `GET /users/{id}/watchlist/check/{asteroid_id}`.
#[derive(serde::Deserialize, Debug)]
pub struct WatchlistCheckResponse {
    data: WatchlistCheck,
}

#[derive(serde::Deserialize, Debug)]
struct WatchlistCheck {
    is_in_watchlist: bool,
    watchlist_id: Option<String>,
}

impl SerdeJSONBodyHTTPResponseType for WatchlistCheckResponse {}

impl WatchlistCheckResponse {
    pub fn is_in_watchlist(&self) -> bool { self.data.is_in_watchlist }
    /// Row id of the matching watchlist entry, when the asteroid is saved.
    pub fn watchlist_id(&self) -> Option<&str> { self.data.watchlist_id.as_deref() }
}
