use super::feed::FeedCategory;
use super::feed_computer::FeedComputer;
use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::{AlertRecord, AsteroidRecord};
use crate::{event, warn};
use futures::StreamExt;
use reqwest_eventsource::{Event, EventSource};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::{RwLock, mpsc, mpsc::Receiver};
use tokio::time::interval;
use tokio_util::sync::CancellationToken;

pub struct Supervisor {
    f_comp_lock: Arc<RwLock<FeedComputer>>,
    request_client: Arc<HTTPClient>,
    alert_monitor: mpsc::Sender<AlertRecord>,
}

impl Supervisor {
    /// Constant update interval for feed refreshes in the `run_feed_mon()` method
    const FEED_UPDATE_INTERVAL: std::time::Duration = std::time::Duration::from_secs(60);
    /// Constant reconnect delay after the live alert stream drops
    const HUB_RETRY_DELAY: std::time::Duration = std::time::Duration::from_secs(10);
    /// Server-sent-events endpoint carrying backend alert pushes
    const ALERT_STREAM_ENDPOINT: &'static str = "/events/alerts";
    /// Per-request timeout for the stream, far above the client default
    /// which would cut an idle subscription short
    const STREAM_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(24 * 3600);

    /// Creates a new instance of `Supervisor`
    pub fn new(
        f_comp_lock: Arc<RwLock<FeedComputer>>,
        request_client: Arc<HTTPClient>,
    ) -> (Supervisor, Receiver<AlertRecord>) {
        let (tx, rx) = mpsc::channel(32);
        (Self { f_comp_lock, request_client, alert_monitor: tx }, rx)
    }

    /// Starts the supervisor loop to periodically refresh the feed snapshot
    /// and raise an alert for every record newly classified dangerous.
    pub async fn run_feed_mon(&self, c_tok: CancellationToken) {
        let mut known_dangerous = {
            let f_comp = self.f_comp_lock.read().await;
            Self::dangerous_ids(&f_comp.compose(FeedCategory::Dangerous))
        };
        let mut update_interval = interval(Self::FEED_UPDATE_INTERVAL);
        // the first tick fires immediately and `new()` already fetched
        update_interval.tick().await;
        loop {
            tokio::select! {
                () = c_tok.cancelled() => break,
                _ = update_interval.tick() => {
                    let (dangerous, degraded) = {
                        let mut f_comp = self.f_comp_lock.write().await;
                        f_comp.update_feed().await;
                        (f_comp.compose(FeedCategory::Dangerous), f_comp.is_degraded())
                    };
                    let current = Self::dangerous_ids(&dangerous);
                    if !degraded {
                        for record in
                            dangerous.iter().filter(|r| !known_dangerous.contains(r.id()))
                        {
                            event!("Record {} entered the dangerous tier", record.id());
                            if self
                                .alert_monitor
                                .send(AlertRecord::local_danger(record))
                                .await
                                .is_err()
                            {
                                return;
                            }
                        }
                    }
                    known_dangerous = current;
                }
            }
        }
    }

    /// Subscribes to the backend's live alert stream and forwards every
    /// parsed alert to the controller channel, reconnecting after drops.
    pub async fn run_alert_hub(&self, c_tok: CancellationToken) {
        loop {
            let builder = self
                .request_client
                .request_builder(reqwest::Method::GET, Self::ALERT_STREAM_ENDPOINT)
                .timeout(Self::STREAM_TIMEOUT);
            let mut stream = match EventSource::new(builder) {
                Ok(stream) => stream,
                Err(err) => {
                    warn!("Could not open alert stream: {err}");
                    return;
                }
            };
            loop {
                tokio::select! {
                    () = c_tok.cancelled() => {
                        stream.close();
                        return;
                    }
                    next = stream.next() => match next {
                        Some(Ok(Event::Open)) => event!("Alert stream connected"),
                        Some(Ok(Event::Message(msg))) => {
                            match serde_json::from_str::<AlertRecord>(&msg.data) {
                                Ok(alert) => {
                                    if self.alert_monitor.send(alert).await.is_err() {
                                        stream.close();
                                        return;
                                    }
                                }
                                Err(err) => warn!("Discarding malformed alert push: {err}"),
                            }
                        }
                        Some(Err(err)) => {
                            event!("Alert stream dropped: {err}");
                            stream.close();
                            break;
                        }
                        None => break,
                    }
                }
            }
            tokio::select! {
                () = c_tok.cancelled() => return,
                () = tokio::time::sleep(Self::HUB_RETRY_DELAY) => {}
            }
        }
    }

    fn dangerous_ids(records: &[AsteroidRecord]) -> HashSet<String> {
        records.iter().map(|r| r.id().to_string()).collect()
    }
}
