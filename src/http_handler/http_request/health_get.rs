use super::super::http_response::health::HealthResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

/// Request type for the /health endpoint.
#[derive(Debug)]
pub struct HealthRequest {}

impl NoBodyHTTPRequestType for HealthRequest {}

impl HTTPRequestType for HealthRequest {
    /// Type of the expected response.
    type Response = HealthResponse;
    /// `str` object representing the specific endpoint.
    fn endpoint(&self) -> &'static str { "/health" }
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
