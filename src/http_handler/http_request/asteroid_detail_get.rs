use super::super::http_response::asteroid_detail::AsteroidDetailResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

#[derive(Debug)]
pub struct AsteroidDetailRequest {
    endpoint: String,
}

impl AsteroidDetailRequest {
    pub fn new(asteroid_id: &str) -> Self {
        Self { endpoint: format!("/asteroids/{asteroid_id}") }
    }
}

impl NoBodyHTTPRequestType for AsteroidDetailRequest {}

impl HTTPRequestType for AsteroidDetailRequest {
    type Response = AsteroidDetailResponse;
    fn endpoint(&self) -> &str { &self.endpoint }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
