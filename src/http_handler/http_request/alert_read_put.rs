use super::super::http_response::ack::AckResponse;
use super::request_common::{
    EMPTY_BODY, EmptyBody, HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType,
};

/// Request type for the /alerts/{id}/read endpoint.
#[derive(Debug)]
pub struct AlertReadRequest {
    endpoint: String,
}

impl AlertReadRequest {
    pub fn new(alert_id: &str) -> Self { Self { endpoint: format!("/alerts/{alert_id}/read") } }
}

impl JSONBodyHTTPRequestType for AlertReadRequest {
    /// The type of the json body.
    type Body = EmptyBody;
    /// Returns the serializable object.
    fn body(&self) -> &Self::Body { &EMPTY_BODY }
}

impl HTTPRequestType for AlertReadRequest {
    /// Type of the expected response.
    type Response = AckResponse;
    /// `str` object representing the specific endpoint.
    fn endpoint(&self) -> &str { &self.endpoint }
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Put }
}
