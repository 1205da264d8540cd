use super::super::http_response::asteroid_list::AsteroidListResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

/// Request type for the /asteroids endpoint.
#[derive(Debug, Default)]
pub struct AsteroidListRequest {
    page: Option<u32>,
    limit: Option<u32>,
}

impl AsteroidListRequest {
    /// Requests a specific page of the tracked set; `Default` fetches all.
    pub fn paged(page: u32, limit: u32) -> Self {
        Self { page: Some(page), limit: Some(limit) }
    }
}

impl NoBodyHTTPRequestType for AsteroidListRequest {}

impl HTTPRequestType for AsteroidListRequest {
    /// Type of the expected response.
    type Response = AsteroidListResponse;
    /// `str` object representing the specific endpoint.
    fn endpoint(&self) -> &'static str { "/asteroids" }
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
    fn query_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(page) = self.page {
            params.push((String::from("page"), page.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push((String::from("limit"), limit.to_string()));
        }
        params
    }
}
