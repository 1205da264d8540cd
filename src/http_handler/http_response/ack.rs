use super::response_common::SerdeJSONBodyHTTPResponseType;

/// Body of mutation endpoints that only acknowledge the change
/// (watchlist removal, alert read/delete).
#[derive(serde::Deserialize, Debug)]
pub struct AckResponse {
    success: Option<bool>,
    message: Option<String>,
}

impl SerdeJSONBodyHTTPResponseType for AckResponse {}

impl AckResponse {
    /// Backends omitting the flag acknowledged via the status code alone.
    pub fn success(&self) -> bool { self.success.unwrap_or(true) }
    pub fn message(&self) -> Option<&str> { self.message.as_deref() }
}
