use super::super::http_response::ack::AckResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

#[derive(Debug)]
pub struct WatchlistRemoveRequest {
    endpoint: String,
}

impl WatchlistRemoveRequest {
    pub fn new(watchlist_id: &str) -> Self {
        Self { endpoint: format!("/watchlist/{watchlist_id}") }
    }
}

impl NoBodyHTTPRequestType for WatchlistRemoveRequest {}

impl HTTPRequestType for WatchlistRemoveRequest {
    type Response = AckResponse;
    fn endpoint(&self) -> &str { &self.endpoint }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Delete }
}
