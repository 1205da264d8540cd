use super::super::http_response::token_verify::TokenVerifyResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

#[derive(Debug)]
pub struct TokenVerifyRequest {}

impl NoBodyHTTPRequestType for TokenVerifyRequest {}

impl HTTPRequestType for TokenVerifyRequest {
    type Response = TokenVerifyResponse;
    fn endpoint(&self) -> &'static str { "/auth/verify" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
