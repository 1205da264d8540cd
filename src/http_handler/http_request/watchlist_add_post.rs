use super::super::http_response::watchlist_entry::WatchlistEntryResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};

/// Request type for adding a row via the /users/{id}/watchlist endpoint.
#[derive(Debug)]
pub struct WatchlistAddRequest {
    endpoint: String,
    body: WatchlistAddBody,
}

#[derive(serde::Serialize, Debug)]
pub struct WatchlistAddBody {
    asteroid_id: String,
    notes: String,
}

impl WatchlistAddRequest {
    pub fn new(user_id: &str, asteroid_id: &str, notes: &str) -> Self {
        Self {
            endpoint: format!("/users/{user_id}/watchlist"),
            body: WatchlistAddBody {
                asteroid_id: String::from(asteroid_id),
                notes: String::from(notes),
            },
        }
    }
}

impl JSONBodyHTTPRequestType for WatchlistAddRequest {
    /// The type of the json body.
    type Body = WatchlistAddBody;
    /// Returns the serializable object.
    fn body(&self) -> &Self::Body { &self.body }
}

impl HTTPRequestType for WatchlistAddRequest {
    /// Type of the expected response.
    type Response = WatchlistEntryResponse;
    /// `str` object representing the specific endpoint.
    fn endpoint(&self) -> &str { &self.endpoint }
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
