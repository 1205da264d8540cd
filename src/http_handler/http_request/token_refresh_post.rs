use super::super::http_response::token_refresh::TokenRefreshResponse;
use super::request_common::{
    EMPTY_BODY, EmptyBody, HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType,
};

#[derive(Debug)]
pub struct TokenRefreshRequest {}

impl JSONBodyHTTPRequestType for TokenRefreshRequest {
    type Body = EmptyBody;
    fn body(&self) -> &Self::Body { &EMPTY_BODY }
}

impl HTTPRequestType for TokenRefreshRequest {
    type Response = TokenRefreshResponse;
    fn endpoint(&self) -> &'static str { "/auth/refresh" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
