use super::response_common::SerdeJSONBodyHTTPResponseType;
use crate::http_handler::common::AsteroidRecord;

#[derive(serde::Deserialize, Debug)]
pub struct CategorizedFeedResponse {
    safe: Vec<AsteroidRecord>,
    problematic: Vec<AsteroidRecord>,
    hazardous: Vec<AsteroidRecord>,
    dangerous: Vec<AsteroidRecord>,
    summary: Option<FeedSummary>,
}

impl SerdeJSONBodyHTTPResponseType for CategorizedFeedResponse {}

impl CategorizedFeedResponse {
    pub fn safe(&self) -> &[AsteroidRecord] { &self.safe }
    pub fn problematic(&self) -> &[AsteroidRecord] { &self.problematic }
    pub fn hazardous(&self) -> &[AsteroidRecord] { &self.hazardous }
    pub fn dangerous(&self) -> &[AsteroidRecord] { &self.dangerous }
    pub fn summary(&self) -> Option<&FeedSummary> { self.summary.as_ref() }
}

#[derive(serde::Deserialize, Debug)]
pub struct FeedSummary {
    total: u64,
    #[serde(rename = "riskBreakdown")]
    risk_breakdown: Option<RiskBreakdown>,
}

impl FeedSummary {
    pub fn total(&self) -> u64 { self.total }
    pub fn risk_breakdown(&self) -> Option<&RiskBreakdown> { self.risk_breakdown.as_ref() }
}

#[derive(serde::Deserialize, Debug)]
pub struct RiskBreakdown {
    #[serde(rename = "SAFE")]
    safe: u64,
    #[serde(rename = "PROBLEMATIC")]
    problematic: u64,
    #[serde(rename = "HAZARDOUS")]
    hazardous: u64,
    #[serde(rename = "DANGEROUS")]
    dangerous: u64,
}

impl RiskBreakdown {
    pub fn safe(&self) -> u64 { self.safe }
    pub fn problematic(&self) -> u64 { self.problematic }
    pub fn hazardous(&self) -> u64 { self.hazardous }
    pub fn dangerous(&self) -> u64 { self.dangerous }
}
