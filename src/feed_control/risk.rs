use crate::http_handler::AsteroidRecord;
use strum_macros::Display;

/// Hazardous records closer than this are escalated to `Dangerous`.
pub const DANGER_MISS_DISTANCE_KM: f64 = 500_000.0;
/// Non-hazardous records closer than this are flagged `Problematic`.
pub const PROBLEMATIC_MISS_DISTANCE_KM: f64 = 5_000_000.0;

/// Risk tier of a near-Earth object. The variant order is the tier order,
/// ascending from harmless to dangerous.
///
/// The wire format is the four-tier vocabulary; the legacy three-tier
/// vocabulary some backend revisions still emit is accepted as aliases
/// (`LOW`/`MEDIUM`/`HIGH`) and normalized on write.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Deserialize,
    serde::Serialize,
    Display,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum RiskTier {
    #[serde(alias = "LOW")]
    Safe,
    #[serde(alias = "MEDIUM")]
    Problematic,
    #[serde(alias = "HIGH")]
    Hazardous,
    Dangerous,
}

impl RiskTier {
    /// Fixed ordinal for the `riskiest` sort mode, most dangerous first.
    pub fn sort_rank(self) -> u8 {
        match self {
            RiskTier::Dangerous => 0,
            RiskTier::Hazardous => 1,
            RiskTier::Problematic => 2,
            RiskTier::Safe => 3,
        }
    }
}

/// Returns the risk tier of `record`.
///
/// A tier supplied by the backend is authoritative. Otherwise the tier is
/// derived from the hazard flag and the miss distance. Thresholds are strict,
/// so a record sitting exactly on a bound lands in the lower-risk tier.
///
/// A record without a miss distance stays `Safe` when it is not flagged
/// hazardous, and `Hazardous` when it is: the tighter `Dangerous` bound
/// cannot be evaluated, and missing data must neither escalate an unflagged
/// body nor downgrade a flagged one.
pub fn classify(record: &AsteroidRecord) -> RiskTier {
    if let Some(tier) = record.risk_level() {
        return tier;
    }
    match (record.is_potentially_hazardous(), record.miss_distance_km()) {
        (true, Some(d)) if d < DANGER_MISS_DISTANCE_KM => RiskTier::Dangerous,
        (true, _) => RiskTier::Hazardous,
        (false, Some(d)) if d < PROBLEMATIC_MISS_DISTANCE_KM => RiskTier::Problematic,
        (false, _) => RiskTier::Safe,
    }
}

/// Presentation attributes of a risk tier, consumed by display layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskPresentation {
    color_key: &'static str,
    badge_key: &'static str,
}

impl RiskPresentation {
    pub fn color_key(&self) -> &'static str { self.color_key }
    pub fn badge_key(&self) -> &'static str { self.badge_key }
}

/// Static tier-to-presentation table.
pub fn presentation_for(tier: RiskTier) -> RiskPresentation {
    match tier {
        RiskTier::Dangerous => {
            RiskPresentation { color_key: "destructive", badge_key: "badge-destructive" }
        }
        RiskTier::Hazardous => RiskPresentation { color_key: "hazard", badge_key: "badge-hazard" },
        RiskTier::Problematic => {
            RiskPresentation { color_key: "warning", badge_key: "badge-warning" }
        }
        RiskTier::Safe => RiskPresentation { color_key: "safe", badge_key: "badge-safe" },
    }
}
