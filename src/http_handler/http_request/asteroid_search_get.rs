use super::super::http_response::asteroid_list::AsteroidListResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

#[derive(Debug)]
pub struct AsteroidSearchRequest {
    query: String,
}

impl AsteroidSearchRequest {
    pub fn new(query: &str) -> Self { Self { query: String::from(query) } }
}

impl NoBodyHTTPRequestType for AsteroidSearchRequest {}

impl HTTPRequestType for AsteroidSearchRequest {
    type Response = AsteroidListResponse;
    fn endpoint(&self) -> &'static str { "/asteroids/search" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
    fn query_params(&self) -> Vec<(String, String)> {
        vec![(String::from("q"), self.query.clone())]
    }
}
