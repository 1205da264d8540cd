use super::response_common::SerdeJSONBodyHTTPResponseType;
use crate::http_handler::common::UserRecord;

/// Body of `GET /auth/verify`. A non-success status means the token was
/// rejected; the body itself only restates the user it belongs to.
#[derive(serde::Deserialize, Debug)]
pub struct TokenVerifyResponse {
    data: VerifiedSession,
}

#[derive(serde::Deserialize, Debug)]
struct VerifiedSession {
    user: Option<UserRecord>,
}

impl SerdeJSONBodyHTTPResponseType for TokenVerifyResponse {}

impl TokenVerifyResponse {
    pub fn user(&self) -> Option<&UserRecord> { self.data.user.as_ref() }
}
