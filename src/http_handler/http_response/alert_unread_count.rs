use super::response_common::SerdeJSONBodyHTTPResponseType;

#[derive(serde::Deserialize, Debug)]
pub struct AlertUnreadCountResponse {
    data: UnreadCount,
}

#[derive(serde::Deserialize, Debug)]
struct UnreadCount {
    unread_count: u64,
}

impl SerdeJSONBodyHTTPResponseType for AlertUnreadCountResponse {}

impl AlertUnreadCountResponse {
    pub fn unread_count(&self) -> u64 { self.data.unread_count }
}
