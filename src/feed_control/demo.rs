use crate::http_handler::AsteroidRecord;
use std::sync::LazyLock;

/// Built-in snapshot served when the backend is unreachable, so the feed
/// keeps rendering in demos and local development. Mirrors one real-ish
/// week of close approaches; some records still carry the legacy tier
/// vocabulary on purpose.
static DEMO_FEED: LazyLock<Vec<AsteroidRecord>> = LazyLock::new(|| {
    serde_json::from_str(DEMO_FEED_JSON).unwrap()
});

pub(crate) fn demo_feed() -> Vec<AsteroidRecord> { DEMO_FEED.clone() }

const DEMO_FEED_JSON: &str = r#"[
  {
    "id": "1",
    "nasa_id": "3542519",
    "name": "2010 PK9",
    "estimated_diameter_min_km": 0.13,
    "estimated_diameter_max_km": 0.29,
    "is_potentially_hazardous": false,
    "close_approach_date": "2026-02-07",
    "miss_distance_km": 4523890,
    "miss_distance_lunar": 11.76,
    "relative_velocity_kmh": 48250,
    "relative_velocity_kms": 13.4,
    "orbiting_body": "Earth",
    "absolute_magnitude_h": 23.5,
    "risk_level": "LOW",
    "view_count": 342
  },
  {
    "id": "2",
    "nasa_id": "2277475",
    "name": "2005 YY128",
    "estimated_diameter_min_km": 0.58,
    "estimated_diameter_max_km": 1.3,
    "is_potentially_hazardous": true,
    "close_approach_date": "2026-02-08",
    "miss_distance_km": 2145600,
    "miss_distance_lunar": 5.58,
    "relative_velocity_kmh": 72100,
    "relative_velocity_kms": 20.03,
    "orbiting_body": "Earth",
    "absolute_magnitude_h": 20.1,
    "risk_level": "HIGH",
    "view_count": 1205
  },
  {
    "id": "3",
    "nasa_id": "54321098",
    "name": "2023 BU",
    "estimated_diameter_min_km": 0.004,
    "estimated_diameter_max_km": 0.008,
    "is_potentially_hazardous": false,
    "close_approach_date": "2026-02-07",
    "miss_distance_km": 3560,
    "miss_distance_lunar": 0.01,
    "relative_velocity_kmh": 33400,
    "relative_velocity_kms": 9.28,
    "orbiting_body": "Earth",
    "absolute_magnitude_h": 32.1,
    "risk_level": "LOW",
    "view_count": 5820
  },
  {
    "id": "4",
    "nasa_id": "2099942",
    "name": "99942 Apophis",
    "estimated_diameter_min_km": 0.31,
    "estimated_diameter_max_km": 0.45,
    "is_potentially_hazardous": true,
    "close_approach_date": "2026-02-09",
    "miss_distance_km": 6078000,
    "miss_distance_lunar": 15.81,
    "relative_velocity_kmh": 30700,
    "relative_velocity_kms": 8.53,
    "orbiting_body": "Earth",
    "absolute_magnitude_h": 19.7,
    "risk_level": "MEDIUM",
    "view_count": 9400
  },
  {
    "id": "5",
    "nasa_id": "2101955",
    "name": "Bennu",
    "estimated_diameter_min_km": 0.49,
    "estimated_diameter_max_km": 0.51,
    "is_potentially_hazardous": true,
    "close_approach_date": "2026-02-10",
    "miss_distance_km": 7500000,
    "miss_distance_lunar": 19.5,
    "relative_velocity_kmh": 28000,
    "relative_velocity_kms": 7.78,
    "orbiting_body": "Earth",
    "absolute_magnitude_h": 20.19,
    "risk_level": "MEDIUM",
    "view_count": 7800
  },
  {
    "id": "6",
    "nasa_id": "3840283",
    "name": "2019 OK",
    "estimated_diameter_min_km": 0.057,
    "estimated_diameter_max_km": 0.13,
    "is_potentially_hazardous": false,
    "close_approach_date": "2026-02-07",
    "miss_distance_km": 12340000,
    "miss_distance_lunar": 32.1,
    "relative_velocity_kmh": 88500,
    "relative_velocity_kms": 24.58,
    "orbiting_body": "Earth",
    "absolute_magnitude_h": 25.6,
    "risk_level": "SAFE",
    "view_count": 120
  },
  {
    "id": "7",
    "nasa_id": "2004953",
    "name": "1990 MU",
    "estimated_diameter_min_km": 2.0,
    "estimated_diameter_max_km": 4.4,
    "is_potentially_hazardous": true,
    "close_approach_date": "2026-02-11",
    "miss_distance_km": 3200000,
    "miss_distance_lunar": 8.32,
    "relative_velocity_kmh": 95200,
    "relative_velocity_kms": 26.44,
    "orbiting_body": "Earth",
    "absolute_magnitude_h": 17.2,
    "risk_level": "HAZARDOUS",
    "view_count": 3100
  },
  {
    "id": "8",
    "nasa_id": "3456789",
    "name": "2024 FG3",
    "estimated_diameter_min_km": 0.02,
    "estimated_diameter_max_km": 0.045,
    "is_potentially_hazardous": false,
    "close_approach_date": "2026-02-07",
    "miss_distance_km": 18900000,
    "miss_distance_lunar": 49.15,
    "relative_velocity_kmh": 15300,
    "relative_velocity_kms": 4.25,
    "orbiting_body": "Earth",
    "absolute_magnitude_h": 27.3,
    "view_count": 45
  }
]"#;
