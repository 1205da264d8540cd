use super::super::http_response::ack::AckResponse;
use super::request_common::{
    EMPTY_BODY, EmptyBody, HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType,
};

#[derive(Debug)]
pub struct AlertReadAllRequest {
    endpoint: String,
}

impl AlertReadAllRequest {
    pub fn new(user_id: &str) -> Self {
        Self { endpoint: format!("/users/{user_id}/alerts/read-all") }
    }
}

impl JSONBodyHTTPRequestType for AlertReadAllRequest {
    type Body = EmptyBody;
    fn body(&self) -> &Self::Body { &EMPTY_BODY }
}

impl HTTPRequestType for AlertReadAllRequest {
    type Response = AckResponse;
    fn endpoint(&self) -> &str { &self.endpoint }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Put }
}
