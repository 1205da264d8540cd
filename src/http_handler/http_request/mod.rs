pub mod alert_delete_delete;
pub mod alert_list_get;
pub mod alert_read_all_put;
pub mod alert_read_put;
pub mod alert_unread_count_get;
pub mod asteroid_detail_get;
pub mod asteroid_list_get;
pub mod asteroid_search_get;
pub mod feed_get;
pub mod health_get;
pub mod login_post;
pub mod register_post;
pub mod request_common;
pub mod token_refresh_post;
pub mod token_verify_get;
pub mod watchlist_add_post;
pub mod watchlist_check_get;
pub mod watchlist_get;
pub mod watchlist_note_put;
pub mod watchlist_remove_delete;
