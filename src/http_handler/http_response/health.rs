use super::response_common::SerdeJSONBodyHTTPResponseType;

#[derive(serde::Deserialize, Debug)]
pub struct HealthResponse {
    status: String,
    database: Option<String>,
    timestamp: Option<chrono::DateTime<chrono::Utc>>,
}

impl SerdeJSONBodyHTTPResponseType for HealthResponse {}

impl HealthResponse {
    pub fn status(&self) -> &str { &self.status }
    pub fn is_ok(&self) -> bool { self.status.eq_ignore_ascii_case("ok") }
    pub fn database(&self) -> Option<&str> { self.database.as_deref() }
    pub fn timestamp(&self) -> Option<chrono::DateTime<chrono::Utc>> { self.timestamp }
}
