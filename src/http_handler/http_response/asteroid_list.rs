use super::response_common::SerdeJSONBodyHTTPResponseType;
use crate::http_handler::common::AsteroidRecord;

/// Body of `GET /asteroids`: the full tracked set plus sync metadata.
#[derive(serde::Deserialize, Debug)]
pub struct AsteroidListResponse {
    count: Option<u64>,
    last_synced: Option<chrono::DateTime<chrono::Utc>>,
    asteroids: Vec<AsteroidRecord>,
}

impl SerdeJSONBodyHTTPResponseType for AsteroidListResponse {}

impl AsteroidListResponse {
    /// Count reported by the backend, falling back to the delivered length.
    pub fn count(&self) -> u64 { self.count.unwrap_or(self.asteroids.len() as u64) }
    pub fn last_synced(&self) -> Option<chrono::DateTime<chrono::Utc>> { self.last_synced }
    pub fn asteroids(&self) -> &[AsteroidRecord] { &self.asteroids }
    pub fn into_asteroids(self) -> Vec<AsteroidRecord> { self.asteroids }
}
