use super::super::http_response::login::SessionResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};

#[derive(serde::Serialize, Debug)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl JSONBodyHTTPRequestType for RegisterRequest {
    type Body = RegisterRequest;
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for RegisterRequest {
    type Response = SessionResponse;
    fn endpoint(&self) -> &'static str { "/auth/register" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
