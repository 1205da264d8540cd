use super::super::http_response::alert_unread_count::AlertUnreadCountResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

#[derive(Debug)]
pub struct AlertUnreadCountRequest {
    endpoint: String,
}

impl AlertUnreadCountRequest {
    pub fn new(user_id: &str) -> Self {
        Self { endpoint: format!("/users/{user_id}/alerts/unread-count") }
    }
}

impl NoBodyHTTPRequestType for AlertUnreadCountRequest {}

impl HTTPRequestType for AlertUnreadCountRequest {
    type Response = AlertUnreadCountResponse;
    fn endpoint(&self) -> &str { &self.endpoint }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
