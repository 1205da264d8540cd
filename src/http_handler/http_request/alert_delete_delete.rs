use super::super::http_response::ack::AckResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

#[derive(Debug)]
pub struct AlertDeleteRequest {
    endpoint: String,
}

impl AlertDeleteRequest {
    pub fn new(alert_id: &str) -> Self { Self { endpoint: format!("/alerts/{alert_id}") } }
}

impl NoBodyHTTPRequestType for AlertDeleteRequest {}

impl HTTPRequestType for AlertDeleteRequest {
    type Response = AckResponse;
    fn endpoint(&self) -> &str { &self.endpoint }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Delete }
}
