use super::risk::{RiskTier, classify};
use crate::http_handler::AsteroidRecord;
use itertools::Itertools;
use std::cmp::Ordering;
use strum_macros::{Display, EnumString};

/// Weight of the proximity term in the trending score. Chosen so that a
/// record at a few thousand kilometres outranks even heavily viewed ones.
const TRENDING_PROXIMITY_SCALE: f64 = 1e9;

/// Named feed tabs of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum FeedCategory {
    Trending,
    Safe,
    Problematic,
    Hazardous,
    Dangerous,
}

/// Sort modes of the full list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum SortMode {
    Nearest,
    Riskiest,
    Fastest,
    Viewed,
}

/// Composes the records of one feed tab.
///
/// Tier tabs select the records whose classification matches exactly, in
/// input order. The trending tab reorders the full set by trending score,
/// descending. The input is never mutated.
pub fn compose_feed(records: &[AsteroidRecord], category: FeedCategory) -> Vec<AsteroidRecord> {
    match category {
        FeedCategory::Trending => {
            let mut composed = records.to_vec();
            composed.sort_by(|a, b| trending_score(b).total_cmp(&trending_score(a)));
            composed
        }
        FeedCategory::Safe => filter_tier(records, RiskTier::Safe),
        FeedCategory::Problematic => filter_tier(records, RiskTier::Problematic),
        FeedCategory::Hazardous => filter_tier(records, RiskTier::Hazardous),
        FeedCategory::Dangerous => filter_tier(records, RiskTier::Dangerous),
    }
}

/// Salience score of the trending tab: raw popularity plus a proximity term
/// that lets very close approaches outrank view counts. The `max(d, 1)`
/// guard keeps sub-kilometre distances from dividing by zero. Records
/// without a known miss distance score on popularity alone.
pub fn trending_score(record: &AsteroidRecord) -> f64 {
    let proximity =
        record.miss_distance_km().map_or(0.0, |d| TRENDING_PROXIMITY_SCALE / d.max(1.0));
    record.view_count() as f64 + proximity
}

fn filter_tier(records: &[AsteroidRecord], tier: RiskTier) -> Vec<AsteroidRecord> {
    records.iter().filter(|r| classify(r) == tier).cloned().collect()
}

/// Reorders the full list view. All sorts are stable: records with equal
/// keys keep their input order, so repeated application is a no-op.
pub fn sort_feed(records: &[AsteroidRecord], mode: SortMode) -> Vec<AsteroidRecord> {
    let mut sorted = records.to_vec();
    match mode {
        SortMode::Nearest => sorted.sort_by(cmp_miss_distance),
        SortMode::Riskiest => sorted.sort_by_key(|r| classify(r).sort_rank()),
        SortMode::Fastest => {
            sorted.sort_by(|a, b| b.relative_velocity_kms().total_cmp(&a.relative_velocity_kms()));
        }
        SortMode::Viewed => sorted.sort_by_key(|r| std::cmp::Reverse(r.view_count())),
    }
    sorted
}

/// Records without a miss distance sort after all located ones.
fn cmp_miss_distance(a: &AsteroidRecord, b: &AsteroidRecord) -> Ordering {
    match (a.miss_distance_km(), b.miss_distance_km()) {
        (Some(da), Some(db)) => da.total_cmp(&db),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Case-insensitive name search, with NASA id substring matching for
/// designation lookups. An empty query matches everything.
pub fn search_filter(records: &[AsteroidRecord], query: &str) -> Vec<AsteroidRecord> {
    let q = query.to_lowercase();
    if q.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|r| r.name().to_lowercase().contains(&q) || r.nasa_id().contains(&q))
        .cloned()
        .collect()
}

/// Records carrying the PHA flag, in input order.
pub fn hazardous_only(records: &[AsteroidRecord]) -> Vec<AsteroidRecord> {
    records.iter().filter(|r| r.is_potentially_hazardous()).cloned().collect()
}

/// Records approaching within the next `days` days of `today`. Records
/// without an approach date are excluded. `today` is passed in so the
/// composition stays deterministic.
pub fn upcoming_filter(
    records: &[AsteroidRecord],
    today: chrono::NaiveDate,
    days: u32,
) -> Vec<AsteroidRecord> {
    let horizon = today + chrono::Days::new(u64::from(days));
    records
        .iter()
        .filter(|r| r.close_approach_date().is_some_and(|d| d >= today && d <= horizon))
        .cloned()
        .collect()
}

/// Per-tier counters of a record set, as shown in the status strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskSummary {
    total: usize,
    safe: usize,
    problematic: usize,
    hazardous: usize,
    dangerous: usize,
}

impl RiskSummary {
    pub fn total(&self) -> usize { self.total }
    pub fn safe(&self) -> usize { self.safe }
    pub fn problematic(&self) -> usize { self.problematic }
    pub fn hazardous(&self) -> usize { self.hazardous }
    pub fn dangerous(&self) -> usize { self.dangerous }
}

impl std::fmt::Display for RiskSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} tracked: {} safe, {} problematic, {} hazardous, {} dangerous",
            self.total, self.safe, self.problematic, self.hazardous, self.dangerous
        )
    }
}

pub fn risk_summary(records: &[AsteroidRecord]) -> RiskSummary {
    let counts = records.iter().map(classify).counts();
    RiskSummary {
        total: records.len(),
        safe: counts.get(&RiskTier::Safe).copied().unwrap_or(0),
        problematic: counts.get(&RiskTier::Problematic).copied().unwrap_or(0),
        hazardous: counts.get(&RiskTier::Hazardous).copied().unwrap_or(0),
        dangerous: counts.get(&RiskTier::Dangerous).copied().unwrap_or(0),
    }
}

/// The four tier buckets plus summary, the shape of the categorized feed
/// view. Buckets preserve input order.
#[derive(Debug, Clone)]
pub struct CategorizedFeed {
    safe: Vec<AsteroidRecord>,
    problematic: Vec<AsteroidRecord>,
    hazardous: Vec<AsteroidRecord>,
    dangerous: Vec<AsteroidRecord>,
    summary: RiskSummary,
}

impl CategorizedFeed {
    pub fn safe(&self) -> &[AsteroidRecord] { &self.safe }
    pub fn problematic(&self) -> &[AsteroidRecord] { &self.problematic }
    pub fn hazardous(&self) -> &[AsteroidRecord] { &self.hazardous }
    pub fn dangerous(&self) -> &[AsteroidRecord] { &self.dangerous }
    pub fn summary(&self) -> RiskSummary { self.summary }
}

pub fn categorize(records: &[AsteroidRecord]) -> CategorizedFeed {
    let mut feed = CategorizedFeed {
        safe: Vec::new(),
        problematic: Vec::new(),
        hazardous: Vec::new(),
        dangerous: Vec::new(),
        summary: risk_summary(records),
    };
    for record in records {
        match classify(record) {
            RiskTier::Safe => feed.safe.push(record.clone()),
            RiskTier::Problematic => feed.problematic.push(record.clone()),
            RiskTier::Hazardous => feed.hazardous.push(record.clone()),
            RiskTier::Dangerous => feed.dangerous.push(record.clone()),
        }
    }
    feed
}
