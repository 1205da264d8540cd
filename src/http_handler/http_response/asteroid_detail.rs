use super::response_common::SerdeJSONBodyHTTPResponseType;
use crate::http_handler::common::AsteroidRecord;

/// Body of `GET /asteroids/{id}`: the record itself plus detail-only fields.
#[derive(serde::Deserialize, Debug)]
pub struct AsteroidDetailResponse {
    #[serde(flatten)]
    asteroid: AsteroidRecord,
    close_approach_count: Option<u32>,
    hazardous_explanation: Option<String>,
    orbital_data: Option<OrbitalData>,
}

impl SerdeJSONBodyHTTPResponseType for AsteroidDetailResponse {}

impl AsteroidDetailResponse {
    pub fn asteroid(&self) -> &AsteroidRecord { &self.asteroid }
    pub fn close_approach_count(&self) -> Option<u32> { self.close_approach_count }
    pub fn hazardous_explanation(&self) -> Option<&str> { self.hazardous_explanation.as_deref() }
    pub fn orbital_data(&self) -> Option<&OrbitalData> { self.orbital_data.as_ref() }
}

/// Keplerian elements as published by the backend, kept as opaque strings
/// the way the upstream NASA payload delivers them.
#[derive(serde::Deserialize, Debug)]
pub struct OrbitalData {
    orbit_id: Option<String>,
    orbit_determination_date: Option<String>,
    eccentricity: Option<String>,
    semi_major_axis: Option<String>,
    inclination: Option<String>,
    orbital_period: Option<String>,
}

impl OrbitalData {
    pub fn orbit_id(&self) -> Option<&str> { self.orbit_id.as_deref() }
    pub fn orbit_determination_date(&self) -> Option<&str> {
        self.orbit_determination_date.as_deref()
    }
    pub fn eccentricity(&self) -> Option<&str> { self.eccentricity.as_deref() }
    pub fn semi_major_axis(&self) -> Option<&str> { self.semi_major_axis.as_deref() }
    pub fn inclination(&self) -> Option<&str> { self.inclination.as_deref() }
    pub fn orbital_period(&self) -> Option<&str> { self.orbital_period.as_deref() }
}
