use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_request::request_common::{
    JSONBodyHTTPRequestType, NoBodyHTTPRequestType, RequestError,
};
use crate::http_handler::http_request::watchlist_add_post::WatchlistAddRequest;
use crate::http_handler::http_request::watchlist_check_get::WatchlistCheckRequest;
use crate::http_handler::http_request::watchlist_get::WatchlistRequest;
use crate::http_handler::http_request::watchlist_note_put::WatchlistNoteRequest;
use crate::http_handler::http_request::watchlist_remove_delete::WatchlistRemoveRequest;
use crate::http_handler::{HTTPError, WatchlistEntry};
use crate::session_control::AuthManager;
use std::sync::Arc;

/// Manages the watchlist rows of the active session.
///
/// Every operation is user-scoped, so a missing session surfaces as
/// `RequestError::NotAuthenticated` before any request is sent.
pub struct WatchlistController {
    request_client: Arc<HTTPClient>,
    auth: Arc<AuthManager>,
}

impl WatchlistController {
    /// Default page size when fetching the saved rows
    const DEFAULT_PAGE_LIMIT: u32 = 50;

    pub fn new(request_client: Arc<HTTPClient>, auth: Arc<AuthManager>) -> Self {
        Self { request_client, auth }
    }

    /// Fetches the first page of the user's saved asteroids.
    pub async fn entries(&self) -> Result<Vec<WatchlistEntry>, HTTPError> {
        self.entries_paged(1, Self::DEFAULT_PAGE_LIMIT).await
    }

    pub async fn entries_paged(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<Vec<WatchlistEntry>, HTTPError> {
        let user_id = self.require_user().await?;
        let response =
            WatchlistRequest::new(&user_id, page, limit).send_request(&self.request_client).await?;
        Ok(response.into_entries())
    }

    /// Saves an asteroid with an optional note, returning the new row.
    pub async fn add(&self, asteroid_id: &str, notes: &str) -> Result<WatchlistEntry, HTTPError> {
        let user_id = self.require_user().await?;
        let response = WatchlistAddRequest::new(&user_id, asteroid_id, notes)
            .send_request(&self.request_client)
            .await?;
        Ok(response.into_entry())
    }

    /// Deletes a saved row by its watchlist id.
    pub async fn remove(&self, watchlist_id: &str) -> Result<(), HTTPError> {
        self.require_user().await?;
        WatchlistRemoveRequest::new(watchlist_id).send_request(&self.request_client).await?;
        Ok(())
    }

    /// Replaces the note on a saved row.
    pub async fn update_note(
        &self,
        watchlist_id: &str,
        notes: &str,
    ) -> Result<WatchlistEntry, HTTPError> {
        self.require_user().await?;
        let response = WatchlistNoteRequest::new(watchlist_id, notes)
            .send_request(&self.request_client)
            .await?;
        Ok(response.into_entry())
    }

    /// Returns the watchlist row id when the asteroid is already saved.
    pub async fn contains(&self, asteroid_id: &str) -> Result<Option<String>, HTTPError> {
        let user_id = self.require_user().await?;
        let response = WatchlistCheckRequest::new(&user_id, asteroid_id)
            .send_request(&self.request_client)
            .await?;
        Ok(response.watchlist_id().map(String::from).filter(|_| response.is_in_watchlist()))
    }

    async fn require_user(&self) -> Result<String, HTTPError> {
        self.auth
            .user_id()
            .await
            .ok_or(HTTPError::HTTPRequestError(RequestError::NotAuthenticated))
    }
}
