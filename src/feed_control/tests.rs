use super::demo::demo_feed;
use super::feed::{
    FeedCategory, SortMode, categorize, compose_feed, hazardous_only, risk_summary, search_filter,
    sort_feed, trending_score, upcoming_filter,
};
use super::risk::{
    DANGER_MISS_DISTANCE_KM, PROBLEMATIC_MISS_DISTANCE_KM, RiskTier, classify, presentation_for,
};
use crate::http_handler::AsteroidRecord;
use itertools::Itertools;
use serde_json::json;

fn record(id: &str, hazardous: bool, miss_km: Option<f64>, vel_kms: f64, views: u64) -> AsteroidRecord {
    serde_json::from_value(json!({
        "id": id,
        "nasa_id": format!("9{id}"),
        "name": format!("Test Object {id}"),
        "estimated_diameter_min_km": 0.1,
        "estimated_diameter_max_km": 0.3,
        "is_potentially_hazardous": hazardous,
        "miss_distance_km": miss_km,
        "relative_velocity_kmh": vel_kms * 3600.0,
        "relative_velocity_kms": vel_kms,
        "view_count": views,
    }))
    .unwrap()
}

fn record_with_tier(id: &str, tier: &str) -> AsteroidRecord {
    serde_json::from_value(json!({
        "id": id,
        "nasa_id": format!("9{id}"),
        "name": format!("Test Object {id}"),
        "estimated_diameter_min_km": 0.1,
        "estimated_diameter_max_km": 0.3,
        "is_potentially_hazardous": false,
        "miss_distance_km": 20_000_000.0,
        "relative_velocity_kmh": 36_000.0,
        "relative_velocity_kms": 10.0,
        "risk_level": tier,
    }))
    .unwrap()
}

fn ids(records: &[AsteroidRecord]) -> Vec<&str> { records.iter().map(AsteroidRecord::id).collect() }

#[test]
fn classify_far_unflagged_record_is_safe() {
    let r = record("a", false, Some(PROBLEMATIC_MISS_DISTANCE_KM + 1.0), 10.0, 0);
    assert_eq!(classify(&r), RiskTier::Safe);
}

#[test]
fn classify_close_flagged_record_is_dangerous() {
    let r = record("a", true, Some(DANGER_MISS_DISTANCE_KM - 1.0), 10.0, 0);
    assert_eq!(classify(&r), RiskTier::Dangerous);
}

#[test]
fn classify_flagged_record_beyond_danger_bound_is_hazardous() {
    let r = record("a", true, Some(10_000_000.0), 10.0, 0);
    assert_eq!(classify(&r), RiskTier::Hazardous);
}

#[test]
fn classify_close_unflagged_record_is_problematic() {
    let r = record("a", false, Some(PROBLEMATIC_MISS_DISTANCE_KM - 1.0), 10.0, 0);
    assert_eq!(classify(&r), RiskTier::Problematic);
}

#[test]
fn classify_uses_strict_bounds() {
    // exactly on a threshold falls into the lower-risk tier
    let on_danger_bound = record("a", true, Some(DANGER_MISS_DISTANCE_KM), 10.0, 0);
    assert_eq!(classify(&on_danger_bound), RiskTier::Hazardous);
    let on_problematic_bound = record("b", false, Some(PROBLEMATIC_MISS_DISTANCE_KM), 10.0, 0);
    assert_eq!(classify(&on_problematic_bound), RiskTier::Safe);
}

#[test]
fn classify_fails_safe_on_missing_distance() {
    let unflagged = record("a", false, None, 10.0, 0);
    assert_eq!(classify(&unflagged), RiskTier::Safe);
    // a flagged record without a distance cannot be cleared of the tighter bound
    let flagged = record("b", true, None, 10.0, 0);
    assert_eq!(classify(&flagged), RiskTier::Hazardous);
}

#[test]
fn classify_prefers_authoritative_tier() {
    let r = record_with_tier("a", "DANGEROUS");
    assert_eq!(classify(&r), RiskTier::Dangerous);
}

#[test]
fn classify_accepts_legacy_vocabulary() {
    assert_eq!(classify(&record_with_tier("a", "LOW")), RiskTier::Safe);
    assert_eq!(classify(&record_with_tier("b", "MEDIUM")), RiskTier::Problematic);
    assert_eq!(classify(&record_with_tier("c", "HIGH")), RiskTier::Hazardous);
}

#[test]
fn tier_order_ascends_with_risk() {
    assert!(RiskTier::Safe < RiskTier::Problematic);
    assert!(RiskTier::Problematic < RiskTier::Hazardous);
    assert!(RiskTier::Hazardous < RiskTier::Dangerous);
    assert_eq!(RiskTier::Dangerous.sort_rank(), 0);
    assert_eq!(RiskTier::Safe.sort_rank(), 3);
}

#[test]
fn presentation_table_is_one_to_one() {
    let tiers = [RiskTier::Safe, RiskTier::Problematic, RiskTier::Hazardous, RiskTier::Dangerous];
    let colors: Vec<_> = tiers.iter().map(|t| presentation_for(*t).color_key()).collect();
    let badges: Vec<_> = tiers.iter().map(|t| presentation_for(*t).badge_key()).collect();
    assert_eq!(colors.iter().unique().count(), tiers.len());
    assert_eq!(badges.iter().unique().count(), tiers.len());
    assert_eq!(presentation_for(RiskTier::Dangerous).color_key(), "destructive");
}

#[test]
fn dangerous_tab_is_the_exact_dangerous_subset() {
    let records = vec![
        record("a", true, Some(400_000.0), 10.0, 0),
        record("b", false, Some(400_000.0), 10.0, 0),
        record("c", true, Some(450_000.0), 10.0, 0),
        record("d", true, Some(9_000_000.0), 10.0, 0),
    ];
    let dangerous = compose_feed(&records, FeedCategory::Dangerous);
    assert_eq!(ids(&dangerous), vec!["a", "c"]);
    for r in &dangerous {
        assert_eq!(classify(r), RiskTier::Dangerous);
    }
}

#[test]
fn tier_tabs_partition_the_input() {
    let records = demo_feed();
    let total: usize = [
        FeedCategory::Safe,
        FeedCategory::Problematic,
        FeedCategory::Hazardous,
        FeedCategory::Dangerous,
    ]
    .iter()
    .map(|c| compose_feed(&records, *c).len())
    .sum();
    assert_eq!(total, records.len());
}

#[test]
fn trending_ranks_close_approaches_over_view_counts() {
    let heavily_viewed_far = record("far", false, Some(12_000_000.0), 10.0, 250_000);
    let barely_viewed_close = record("close", false, Some(3_560.0), 10.0, 2);
    let records = vec![heavily_viewed_far, barely_viewed_close];
    let trending = compose_feed(&records, FeedCategory::Trending);
    assert_eq!(ids(&trending), vec!["close", "far"]);
}

#[test]
fn trending_score_guards_sub_kilometre_distances() {
    let grazing = record("a", false, Some(0.0), 10.0, 0);
    assert_eq!(trending_score(&grazing), 1e9);
    let unknown = record("b", false, None, 10.0, 500);
    assert_eq!(trending_score(&unknown), 500.0);
}

#[test]
fn nearest_sort_is_non_decreasing() {
    let records = vec![
        record("a", false, Some(6_078_000.0), 10.0, 0),
        record("b", true, Some(31_600.0), 10.0, 0),
        record("c", false, Some(450_000.0), 10.0, 0),
    ];
    let sorted = sort_feed(&records, SortMode::Nearest);
    // the Apophis-like close pass leads
    assert_eq!(ids(&sorted)[0], "b");
    assert!(
        sorted
            .iter()
            .tuple_windows()
            .all(|(x, y)| x.miss_distance_km().unwrap() <= y.miss_distance_km().unwrap())
    );
}

#[test]
fn nearest_sort_puts_unlocated_records_last() {
    let records = vec![
        record("a", false, None, 10.0, 0),
        record("b", false, Some(1_000.0), 10.0, 0),
    ];
    assert_eq!(ids(&sort_feed(&records, SortMode::Nearest)), vec!["b", "a"]);
}

#[test]
fn riskiest_sort_follows_the_rank_table() {
    let records = vec![
        record("safe", false, Some(9_000_000.0), 10.0, 0),
        record("dangerous", true, Some(100_000.0), 10.0, 0),
        record("problematic", false, Some(1_000_000.0), 10.0, 0),
        record("hazardous", true, Some(9_000_000.0), 10.0, 0),
    ];
    let sorted = sort_feed(&records, SortMode::Riskiest);
    assert_eq!(ids(&sorted), vec!["dangerous", "hazardous", "problematic", "safe"]);
}

#[test]
fn fastest_sort_descends_by_velocity() {
    let records = vec![
        record("slow", false, Some(1_000_000.0), 4.2, 0),
        record("fast", false, Some(1_000_000.0), 26.4, 0),
        record("mid", false, Some(1_000_000.0), 13.4, 0),
    ];
    assert_eq!(ids(&sort_feed(&records, SortMode::Fastest)), vec!["fast", "mid", "slow"]);
}

#[test]
fn viewed_sort_treats_missing_counts_as_zero() {
    let unviewed: AsteroidRecord = serde_json::from_value(json!({
        "id": "u",
        "nasa_id": "9u",
        "name": "Test Object u",
        "estimated_diameter_min_km": 0.1,
        "estimated_diameter_max_km": 0.3,
        "is_potentially_hazardous": false,
        "miss_distance_km": 1_000_000.0,
        "relative_velocity_kmh": 36_000.0,
        "relative_velocity_kms": 10.0,
    }))
    .unwrap();
    assert_eq!(unviewed.view_count(), 0);
    let records = vec![unviewed, record("v", false, Some(1_000_000.0), 10.0, 7)];
    assert_eq!(ids(&sort_feed(&records, SortMode::Viewed)), vec!["v", "u"]);
}

#[test]
fn sorts_are_stable_for_equal_keys() {
    let records = vec![
        record("first", false, Some(2_000_000.0), 10.0, 5),
        record("second", false, Some(2_000_000.0), 10.0, 5),
        record("third", false, Some(2_000_000.0), 10.0, 5),
    ];
    for mode in [SortMode::Nearest, SortMode::Riskiest, SortMode::Fastest, SortMode::Viewed] {
        assert_eq!(ids(&sort_feed(&records, mode)), vec!["first", "second", "third"], "{mode}");
    }
}

#[test]
fn sorting_twice_changes_nothing() {
    let records = demo_feed();
    for mode in [SortMode::Nearest, SortMode::Riskiest, SortMode::Fastest, SortMode::Viewed] {
        let once = sort_feed(&records, mode);
        let twice = sort_feed(&once, mode);
        assert_eq!(ids(&once), ids(&twice), "{mode}");
    }
}

#[test]
fn empty_input_yields_empty_output() {
    assert!(compose_feed(&[], FeedCategory::Trending).is_empty());
    assert!(compose_feed(&[], FeedCategory::Dangerous).is_empty());
    assert!(sort_feed(&[], SortMode::Nearest).is_empty());
    assert_eq!(risk_summary(&[]).total(), 0);
}

#[test]
fn composition_never_mutates_the_input() {
    let records = demo_feed();
    let before = ids(&records).iter().map(|s| String::from(*s)).collect::<Vec<_>>();
    let _ = compose_feed(&records, FeedCategory::Trending);
    let _ = sort_feed(&records, SortMode::Riskiest);
    assert_eq!(ids(&records), before);
}

#[test]
fn summary_counts_the_demo_snapshot() {
    let summary = risk_summary(&demo_feed());
    assert_eq!(summary.total(), 8);
    assert_eq!(summary.safe(), 4);
    assert_eq!(summary.problematic(), 2);
    assert_eq!(summary.hazardous(), 2);
    assert_eq!(summary.dangerous(), 0);
}

#[test]
fn categorize_matches_the_tier_tabs() {
    let records = demo_feed();
    let categorized = categorize(&records);
    assert_eq!(ids(categorized.safe()), ids(&compose_feed(&records, FeedCategory::Safe)));
    assert_eq!(
        ids(categorized.hazardous()),
        ids(&compose_feed(&records, FeedCategory::Hazardous))
    );
    assert_eq!(categorized.summary(), risk_summary(&records));
}

#[test]
fn search_matches_names_and_designations() {
    let records = demo_feed();
    let by_name = search_filter(&records, "apophis");
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].name(), "99942 Apophis");
    let by_nasa_id = search_filter(&records, "2099942");
    assert_eq!(by_nasa_id.len(), 1);
    assert_eq!(by_nasa_id[0].id(), by_name[0].id());
    assert_eq!(search_filter(&records, "").len(), records.len());
}

#[test]
fn hazardous_only_follows_the_pha_flag() {
    let flagged = hazardous_only(&demo_feed());
    assert_eq!(flagged.len(), 4);
    assert!(flagged.iter().all(AsteroidRecord::is_potentially_hazardous));
}

#[test]
fn upcoming_filter_respects_the_horizon() {
    let records = demo_feed();
    let today = chrono::NaiveDate::from_ymd_opt(2026, 2, 7).unwrap();
    let next_two_days = upcoming_filter(&records, today, 2);
    assert!(
        next_two_days
            .iter()
            .all(|r| r.close_approach_date().unwrap() <= today + chrono::Days::new(2))
    );
    assert_eq!(next_two_days.len(), 6);
    assert!(upcoming_filter(&records, today, 0).len() < next_two_days.len());
}

#[test]
fn category_and_mode_names_round_trip() {
    assert_eq!("trending".parse::<FeedCategory>().unwrap(), FeedCategory::Trending);
    assert_eq!("dangerous".parse::<FeedCategory>().unwrap(), FeedCategory::Dangerous);
    assert_eq!("nearest".parse::<SortMode>().unwrap(), SortMode::Nearest);
    assert_eq!(SortMode::Viewed.to_string(), "viewed");
}

#[test]
fn demo_snapshot_parses() {
    assert_eq!(demo_feed().len(), 8);
}
