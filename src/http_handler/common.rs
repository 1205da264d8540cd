use super::http_request::request_common::RequestError;
use super::http_response::response_common::ResponseError;
use crate::feed_control::risk::RiskTier;
use strum_macros::Display;

/// One near-Earth object snapshot as delivered by the backend.
///
/// Records are immutable once received. The feed layer only derives new
/// values from them and never writes back.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone)]
pub struct AsteroidRecord {
    id: String,
    nasa_id: String,
    name: String,
    estimated_diameter_min_km: f64,
    estimated_diameter_max_km: f64,
    is_potentially_hazardous: bool,
    close_approach_date: Option<chrono::NaiveDate>,
    miss_distance_km: Option<f64>,
    miss_distance_lunar: Option<f64>,
    relative_velocity_kmh: f64,
    relative_velocity_kms: f64,
    orbiting_body: Option<String>,
    absolute_magnitude_h: Option<f64>,
    risk_level: Option<RiskTier>,
    view_count: Option<u64>,
}

impl AsteroidRecord {
    pub fn id(&self) -> &str { &self.id }
    pub fn nasa_id(&self) -> &str { &self.nasa_id }
    pub fn name(&self) -> &str { &self.name }
    pub fn estimated_diameter_min_km(&self) -> f64 { self.estimated_diameter_min_km }
    pub fn estimated_diameter_max_km(&self) -> f64 { self.estimated_diameter_max_km }
    pub fn is_potentially_hazardous(&self) -> bool { self.is_potentially_hazardous }
    pub fn close_approach_date(&self) -> Option<chrono::NaiveDate> { self.close_approach_date }
    pub fn miss_distance_km(&self) -> Option<f64> { self.miss_distance_km }
    pub fn miss_distance_lunar(&self) -> Option<f64> { self.miss_distance_lunar }
    pub fn relative_velocity_kmh(&self) -> f64 { self.relative_velocity_kmh }
    pub fn relative_velocity_kms(&self) -> f64 { self.relative_velocity_kms }
    pub fn orbiting_body(&self) -> Option<&str> { self.orbiting_body.as_deref() }
    pub fn absolute_magnitude_h(&self) -> Option<f64> { self.absolute_magnitude_h }
    /// Authoritative tier supplied by the backend, if any.
    pub fn risk_level(&self) -> Option<RiskTier> { self.risk_level }
    pub fn view_count(&self) -> u64 { self.view_count.unwrap_or(0) }
}

/// User account data as exposed by the backend (no credentials).
#[derive(serde::Deserialize, Debug, Clone)]
pub struct UserRecord {
    id: String,
    username: String,
    email: String,
    created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl UserRecord {
    pub fn id(&self) -> &str { &self.id }
    pub fn username(&self) -> &str { &self.username }
    pub fn email(&self) -> &str { &self.email }
    pub fn created_at(&self) -> Option<chrono::DateTime<chrono::Utc>> { self.created_at }
}

/// A saved watchlist row, joining a user to an asteroid with optional notes.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct WatchlistEntry {
    id: String,
    user_id: String,
    asteroid_id: String,
    notes: Option<String>,
    created_at: Option<chrono::DateTime<chrono::Utc>>,
    asteroid: Option<AsteroidRecord>,
}

impl WatchlistEntry {
    pub fn id(&self) -> &str { &self.id }
    pub fn user_id(&self) -> &str { &self.user_id }
    pub fn asteroid_id(&self) -> &str { &self.asteroid_id }
    pub fn notes(&self) -> Option<&str> { self.notes.as_deref() }
    pub fn created_at(&self) -> Option<chrono::DateTime<chrono::Utc>> { self.created_at }
    /// The joined asteroid record, when the backend expands it.
    pub fn asteroid(&self) -> Option<&AsteroidRecord> { self.asteroid.as_ref() }
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Copy, PartialEq, Eq, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AlertPriority {
    Low,
    Medium,
    High,
}

/// A user notification about an asteroid, pushed by the backend or
/// synthesized locally when a record turns dangerous between refreshes.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone)]
pub struct AlertRecord {
    id: String,
    user_id: Option<String>,
    asteroid_id: String,
    alert_type: String,
    message: String,
    #[serde(default)]
    is_read: bool,
    priority: Option<AlertPriority>,
    created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl AlertRecord {
    pub fn id(&self) -> &str { &self.id }
    pub fn user_id(&self) -> Option<&str> { self.user_id.as_deref() }
    pub fn asteroid_id(&self) -> &str { &self.asteroid_id }
    pub fn alert_type(&self) -> &str { &self.alert_type }
    pub fn message(&self) -> &str { &self.message }
    pub fn is_read(&self) -> bool { self.is_read }
    pub fn priority(&self) -> AlertPriority { self.priority.unwrap_or(AlertPriority::Medium) }
    pub fn created_at(&self) -> Option<chrono::DateTime<chrono::Utc>> { self.created_at }

    /// Builds a locally synthesized alert for a record that entered the
    /// dangerous tier. Local alerts carry a `local-` id prefix so they are
    /// never confused with backend rows.
    pub fn local_danger(record: &AsteroidRecord) -> Self {
        Self {
            id: format!("local-{}", record.id()),
            user_id: None,
            asteroid_id: String::from(record.id()),
            alert_type: String::from("high_risk"),
            message: format!(
                "{} is now classified dangerous (miss distance {})",
                record.name(),
                record
                    .miss_distance_km()
                    .map_or_else(|| String::from("unknown"), |d| format!("{d:.0} km")),
            ),
            is_read: false,
            priority: Some(AlertPriority::High),
            created_at: Some(chrono::Utc::now()),
        }
    }
}

#[derive(Debug, Display)]
pub enum HTTPError {
    HTTPRequestError(RequestError),
    HTTPResponseError(ResponseError),
}

impl std::error::Error for HTTPError {}

impl HTTPError {
    /// Whether the failure indicates the backend could not be reached at all.
    pub fn is_no_connection(&self) -> bool {
        matches!(self, HTTPError::HTTPResponseError(ResponseError::NoConnection))
    }

    /// Whether the backend rejected the session token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, HTTPError::HTTPResponseError(ResponseError::Unauthorized))
    }
}
