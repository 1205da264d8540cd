use super::response_common::SerdeJSONBodyHTTPResponseType;
use super::watchlist::Pagination;
use crate::http_handler::common::AlertRecord;

#[derive(serde::Deserialize, Debug)]
pub struct AlertListResponse {
    data: Vec<AlertRecord>,
    pagination: Option<Pagination>,
}

impl SerdeJSONBodyHTTPResponseType for AlertListResponse {}

impl AlertListResponse {
    pub fn alerts(&self) -> &[AlertRecord] { &self.data }
    pub fn into_alerts(self) -> Vec<AlertRecord> { self.data }
    pub fn pagination(&self) -> Option<&Pagination> { self.pagination.as_ref() }
}
