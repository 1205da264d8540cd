use crate::http_handler::AlertRecord;
use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_request::alert_delete_delete::AlertDeleteRequest;
use crate::http_handler::http_request::alert_list_get::AlertListRequest;
use crate::http_handler::http_request::alert_read_all_put::AlertReadAllRequest;
use crate::http_handler::http_request::alert_read_put::AlertReadRequest;
use crate::http_handler::http_request::alert_unread_count_get::AlertUnreadCountRequest;
use crate::http_handler::http_request::request_common::{
    JSONBodyHTTPRequestType, NoBodyHTTPRequestType, RequestError,
};
use crate::http_handler::HTTPError;
use crate::session_control::AuthManager;
use crate::{alert, event, warn};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc::Receiver};
use tokio::time::interval;
use tokio_util::sync::CancellationToken;

/// Delivery target for alerts. The binary ships a console sink; other
/// frontends plug in here.
#[async_trait]
pub trait AlertSink: Send + Sync {
    async fn deliver(&self, alert: &AlertRecord);
}

pub struct ConsoleSink;

#[async_trait]
impl AlertSink for ConsoleSink {
    async fn deliver(&self, alert_record: &AlertRecord) {
        alert!(
            "({}) {} [{}]",
            alert_record.priority(),
            alert_record.message(),
            alert_record.alert_type()
        );
    }
}

/// Consumes alerts from the supervisor channel and the user's backend
/// inbox, deduplicates them and hands them to the sink exactly once.
pub struct AlertController {
    delivered: Mutex<HashSet<String>>,
    alert_rx: Mutex<Receiver<AlertRecord>>,
    sink: Box<dyn AlertSink>,
    auth: Arc<AuthManager>,
}

impl AlertController {
    /// Constant poll interval for the user's unread backend alerts
    const ALERT_POLL_INTERVAL: std::time::Duration = std::time::Duration::from_secs(30);
    /// Page size when draining unread alerts
    const ALERTS_PER_POLL: u32 = 20;
    /// Id prefix of alerts synthesized locally, never acknowledged upstream
    const LOCAL_ID_PREFIX: &'static str = "local-";

    pub fn new(alert_rx: Receiver<AlertRecord>, sink: Box<dyn AlertSink>, auth: Arc<AuthManager>) -> Self {
        Self {
            delivered: Mutex::new(HashSet::new()),
            alert_rx: Mutex::new(alert_rx),
            sink,
            auth,
        }
    }

    pub async fn run(self: Arc<Self>, handler: Arc<HTTPClient>, c_tok: CancellationToken) {
        let mut poll_interval = interval(Self::ALERT_POLL_INTERVAL);
        let mut alert_rx_locked = self.alert_rx.lock().await;
        loop {
            tokio::select! {
                () = c_tok.cancelled() => break,

                _ = poll_interval.tick() => self.poll_unread(&handler).await,

                Some(alert_record) = alert_rx_locked.recv() => {
                    self.handle_alert(alert_record, &handler).await;
                }
            }
        }
    }

    /// Drains the unread backend inbox of the active session, if any.
    async fn poll_unread(&self, handler: &Arc<HTTPClient>) {
        let Some(user_id) = self.auth.user_id().await else {
            return;
        };
        let req = AlertListRequest::new(&user_id, 1, Self::ALERTS_PER_POLL, true);
        match req.send_request(handler).await {
            Ok(list) => {
                for alert_record in list.into_alerts() {
                    self.handle_alert(alert_record, handler).await;
                }
            }
            Err(err) if err.is_no_connection() => event!("Alert poll skipped, no connection"),
            Err(err) => warn!("Alert poll failed: {err}"),
        }
    }

    /// Number of unread backend alerts of the active session.
    pub async fn unread_count(&self, handler: &Arc<HTTPClient>) -> Result<u64, HTTPError> {
        let user_id = self.require_user().await?;
        let response =
            AlertUnreadCountRequest::new(&user_id).send_request(handler).await?;
        Ok(response.unread_count())
    }

    /// Marks the whole backend inbox read without delivering anything.
    pub async fn mark_all_read(&self, handler: &Arc<HTTPClient>) -> Result<(), HTTPError> {
        let user_id = self.require_user().await?;
        AlertReadAllRequest::new(&user_id).send_request(handler).await?;
        Ok(())
    }

    /// Deletes one backend alert row.
    pub async fn dismiss(&self, alert_id: &str, handler: &Arc<HTTPClient>) -> Result<(), HTTPError> {
        self.require_user().await?;
        AlertDeleteRequest::new(alert_id).send_request(handler).await?;
        Ok(())
    }

    async fn require_user(&self) -> Result<String, HTTPError> {
        self.auth
            .user_id()
            .await
            .ok_or(HTTPError::HTTPRequestError(RequestError::NotAuthenticated))
    }

    async fn handle_alert(&self, alert_record: AlertRecord, handler: &Arc<HTTPClient>) {
        if !self.delivered.lock().await.insert(String::from(alert_record.id())) {
            return;
        }
        self.sink.deliver(&alert_record).await;
        // backend rows get acknowledged so the next poll skips them
        let is_local = alert_record.id().starts_with(Self::LOCAL_ID_PREFIX);
        if !is_local && self.auth.is_authenticated().await {
            match AlertReadRequest::new(alert_record.id()).send_request(handler).await {
                Ok(_) => event!("Alert {} acknowledged", alert_record.id()),
                Err(err) => warn!("Could not acknowledge alert {}: {err}", alert_record.id()),
            }
        }
    }
}
