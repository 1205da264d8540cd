use super::super::http_response::login::SessionResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};

/// Request type for the /auth/login endpoint.
#[derive(serde::Serialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl JSONBodyHTTPRequestType for LoginRequest {
    /// The type of the json body.
    type Body = LoginRequest;
    /// Returns the serializable object.
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for LoginRequest {
    /// Type of the expected response.
    type Response = SessionResponse;
    /// `str` object representing the specific endpoint.
    fn endpoint(&self) -> &'static str { "/auth/login" }
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
