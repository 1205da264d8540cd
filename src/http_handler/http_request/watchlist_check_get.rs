use super::super::http_response::watchlist_check::WatchlistCheckResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

#[derive(Debug)]
pub struct WatchlistCheckRequest {
    endpoint: String,
}

impl WatchlistCheckRequest {
    pub fn new(user_id: &str, asteroid_id: &str) -> Self {
        Self { endpoint: format!("/users/{user_id}/watchlist/check/{asteroid_id}") }
    }
}

impl NoBodyHTTPRequestType for WatchlistCheckRequest {}

impl HTTPRequestType for WatchlistCheckRequest {
    type Response = WatchlistCheckResponse;
    fn endpoint(&self) -> &str { &self.endpoint }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
