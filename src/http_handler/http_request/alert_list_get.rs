use super::super::http_response::alert_list::AlertListResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

#[derive(Debug)]
pub struct AlertListRequest {
    endpoint: String,
    page: u32,
    limit: u32,
    unread_only: bool,
}

impl AlertListRequest {
    pub fn new(user_id: &str, page: u32, limit: u32, unread_only: bool) -> Self {
        Self { endpoint: format!("/users/{user_id}/alerts"), page, limit, unread_only }
    }
}

impl NoBodyHTTPRequestType for AlertListRequest {}

impl HTTPRequestType for AlertListRequest {
    type Response = AlertListResponse;
    fn endpoint(&self) -> &str { &self.endpoint }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
    fn query_params(&self) -> Vec<(String, String)> {
        vec![
            (String::from("page"), self.page.to_string()),
            (String::from("limit"), self.limit.to_string()),
            (String::from("unread_only"), self.unread_only.to_string()),
        ]
    }
}
