use super::super::http_response::watchlist::WatchlistResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

#[derive(Debug)]
pub struct WatchlistRequest {
    endpoint: String,
    page: u32,
    limit: u32,
}

impl WatchlistRequest {
    pub fn new(user_id: &str, page: u32, limit: u32) -> Self {
        Self { endpoint: format!("/users/{user_id}/watchlist"), page, limit }
    }
}

impl NoBodyHTTPRequestType for WatchlistRequest {}

impl HTTPRequestType for WatchlistRequest {
    type Response = WatchlistResponse;
    fn endpoint(&self) -> &str { &self.endpoint }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
    fn query_params(&self) -> Vec<(String, String)> {
        vec![
            (String::from("page"), self.page.to_string()),
            (String::from("limit"), self.limit.to_string()),
        ]
    }
}
