use super::response_common::SerdeJSONBodyHTTPResponseType;
use crate::http_handler::common::UserRecord;

/// Body of `POST /auth/login` and `POST /auth/register`. The backend wraps
/// the session payload in a `data` envelope.
#[derive(serde::Deserialize, Debug)]
pub struct SessionResponse {
    data: SessionData,
}

#[derive(serde::Deserialize, Debug)]
struct SessionData {
    token: String,
    user: UserRecord,
}

impl SerdeJSONBodyHTTPResponseType for SessionResponse {}

impl SessionResponse {
    pub fn token(&self) -> &str { &self.data.token }
    pub fn user(&self) -> &UserRecord { &self.data.user }
    pub fn into_parts(self) -> (String, UserRecord) { (self.data.token, self.data.user) }
}
