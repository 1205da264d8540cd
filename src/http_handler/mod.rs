pub use serde;
pub use reqwest;
pub use chrono;

pub mod http_client;
pub mod http_response;
pub mod http_request;
mod common;

pub use common::{
    AlertPriority, AlertRecord, AsteroidRecord, HTTPError, UserRecord, WatchlistEntry,
};
