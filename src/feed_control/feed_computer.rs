use super::demo::demo_feed;
use super::feed::{
    CategorizedFeed, FeedCategory, RiskSummary, SortMode, categorize, compose_feed, risk_summary,
    search_filter, sort_feed,
};
use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_request::asteroid_detail_get::AsteroidDetailRequest;
use crate::http_handler::http_request::asteroid_list_get::AsteroidListRequest;
use crate::http_handler::http_request::asteroid_search_get::AsteroidSearchRequest;
use crate::http_handler::http_request::feed_get::CategorizedFeedRequest;
use crate::http_handler::http_request::request_common::NoBodyHTTPRequestType;
use crate::http_handler::http_response::asteroid_detail::AsteroidDetailResponse;
use crate::http_handler::http_response::categorized_feed::CategorizedFeedResponse;
use crate::http_handler::{AsteroidRecord, HTTPError};
use crate::{info, warn};
use std::sync::Arc;

/// Holds the latest feed snapshot and answers all read paths over it.
///
/// The snapshot is replaced wholesale on refresh; composition and sorting
/// always derive fresh sequences and never touch the stored records.
#[derive(Debug)]
pub struct FeedComputer {
    asteroids: Vec<AsteroidRecord>,
    last_synced: Option<chrono::DateTime<chrono::Utc>>,
    /// Set while the snapshot is the built-in demo fallback.
    degraded: bool,
    request_client: Arc<HTTPClient>,
}

impl FeedComputer {
    pub async fn new(request_client: Arc<HTTPClient>) -> FeedComputer {
        let mut computer = FeedComputer {
            asteroids: Vec::new(),
            last_synced: None,
            degraded: false,
            request_client,
        };
        computer.update_feed().await;
        computer
    }

    /// Refetches the tracked set. An unreachable backend degrades to the
    /// built-in demo snapshot; any other failure keeps the previous one.
    pub async fn update_feed(&mut self) {
        match (AsteroidListRequest::default()).send_request(&self.request_client).await {
            Ok(list) => {
                self.last_synced = list.last_synced();
                self.asteroids = list.into_asteroids();
                if self.degraded {
                    info!("Backend reachable again, demo snapshot replaced");
                    self.degraded = false;
                }
            }
            Err(err) if err.is_no_connection() => {
                if !self.degraded {
                    warn!("Backend unreachable, serving built-in demo snapshot");
                    self.asteroids = demo_feed();
                    self.last_synced = None;
                    self.degraded = true;
                }
            }
            Err(err) => warn!("Feed refresh failed: {err}"),
        }
    }

    pub fn asteroids(&self) -> &[AsteroidRecord] { &self.asteroids }

    pub fn last_synced(&self) -> Option<chrono::DateTime<chrono::Utc>> { self.last_synced }

    pub fn is_degraded(&self) -> bool { self.degraded }

    pub fn record(&self, id: &str) -> Option<&AsteroidRecord> {
        self.asteroids.iter().find(|r| r.id() == id)
    }

    pub fn summary(&self) -> RiskSummary { risk_summary(&self.asteroids) }

    pub fn compose(&self, category: FeedCategory) -> Vec<AsteroidRecord> {
        compose_feed(&self.asteroids, category)
    }

    pub fn sorted(&self, mode: SortMode) -> Vec<AsteroidRecord> {
        sort_feed(&self.asteroids, mode)
    }

    pub fn search(&self, query: &str) -> Vec<AsteroidRecord> {
        search_filter(&self.asteroids, query)
    }

    pub fn categorized(&self) -> CategorizedFeed { categorize(&self.asteroids) }

    /// Fetches the detail view of a single asteroid straight from the
    /// backend; details are not cached in the snapshot.
    pub async fn fetch_detail(&self, id: &str) -> Result<AsteroidDetailResponse, HTTPError> {
        AsteroidDetailRequest::new(id).send_request(&self.request_client).await
    }

    /// Server-side search across the whole catalogue, reaching past the
    /// records held in the snapshot.
    pub async fn search_remote(&self, query: &str) -> Result<Vec<AsteroidRecord>, HTTPError> {
        let response = AsteroidSearchRequest::new(query).send_request(&self.request_client).await?;
        Ok(response.into_asteroids())
    }

    /// Fetches the backend's own categorized feed view. `categorized()` is
    /// the local equivalent over the current snapshot.
    pub async fn fetch_categorized(&self) -> Result<CategorizedFeedResponse, HTTPError> {
        (CategorizedFeedRequest {}).send_request(&self.request_client).await
    }
}
