use super::response_common::SerdeJSONBodyHTTPResponseType;
use crate::http_handler::common::WatchlistEntry;

#[derive(serde::Deserialize, Debug)]
pub struct WatchlistEntryResponse {
    data: WatchlistEntry,
}

impl SerdeJSONBodyHTTPResponseType for WatchlistEntryResponse {}

impl WatchlistEntryResponse {
    pub fn entry(&self) -> &WatchlistEntry { &self.data }
    pub fn into_entry(self) -> WatchlistEntry { self.data }
}
