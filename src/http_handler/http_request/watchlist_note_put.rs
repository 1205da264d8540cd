use super::super::http_response::watchlist_entry::WatchlistEntryResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};

#[derive(Debug)]
pub struct WatchlistNoteRequest {
    endpoint: String,
    body: WatchlistNoteBody,
}

#[derive(serde::Serialize, Debug)]
pub struct WatchlistNoteBody {
    notes: String,
}

impl WatchlistNoteRequest {
    pub fn new(watchlist_id: &str, notes: &str) -> Self {
        Self {
            endpoint: format!("/watchlist/{watchlist_id}"),
            body: WatchlistNoteBody { notes: String::from(notes) },
        }
    }
}

impl JSONBodyHTTPRequestType for WatchlistNoteRequest {
    type Body = WatchlistNoteBody;
    fn body(&self) -> &Self::Body { &self.body }
}

impl HTTPRequestType for WatchlistNoteRequest {
    type Response = WatchlistEntryResponse;
    fn endpoint(&self) -> &str { &self.endpoint }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Put }
}
