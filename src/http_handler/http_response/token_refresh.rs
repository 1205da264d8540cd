use super::response_common::SerdeJSONBodyHTTPResponseType;

#[derive(serde::Deserialize, Debug)]
pub struct TokenRefreshResponse {
    data: TokenData,
}

#[derive(serde::Deserialize, Debug)]
struct TokenData {
    token: String,
}

impl SerdeJSONBodyHTTPResponseType for TokenRefreshResponse {}

impl TokenRefreshResponse {
    pub fn token(&self) -> &str { &self.data.token }
    pub fn into_token(self) -> String { self.data.token }
}
