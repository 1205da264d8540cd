use super::super::http_response::categorized_feed::CategorizedFeedResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

#[derive(Debug)]
pub struct CategorizedFeedRequest {}

impl NoBodyHTTPRequestType for CategorizedFeedRequest {}

impl HTTPRequestType for CategorizedFeedRequest {
    type Response = CategorizedFeedResponse;
    fn endpoint(&self) -> &'static str { "/asteroids/feed" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
