#![allow(dead_code, clippy::similar_names)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
mod feed_control;
mod http_handler;
mod keychain;
mod logger;
mod session_control;

use crate::feed_control::feed::FeedCategory;
use crate::feed_control::risk::{RiskTier, classify, presentation_for};
use crate::feed_control::{AlertController, ConsoleSink, Supervisor};
use crate::http_handler::http_request::health_get::HealthRequest;
use crate::http_handler::http_request::request_common::NoBodyHTTPRequestType;
use crate::keychain::Keychain;
use std::{env, sync::Arc, time::Duration};
use tokio_util::sync::CancellationToken;

const STATUS_INTERVAL: Duration = Duration::from_secs(60);
const TRENDING_TOP_N: usize = 5;

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() {
    let base_url_var = env::var("NEO_API_BASE_URL");
    let base_url = base_url_var.as_ref().map_or("http://localhost:5000/api", |v| v.as_str());
    let keychain = Keychain::new(base_url).await;

    match (HealthRequest {}).send_request(&keychain.client()).await {
        Ok(health) => info!("Backend is {}", health.status()),
        Err(err) => warn!("Backend health check failed: {err}"),
    }

    if let (Ok(email), Ok(password)) = (env::var("NEO_USER_EMAIL"), env::var("NEO_USER_PASSWORD")) {
        match keychain.auth().login(&email, &password).await {
            Ok(user) => info!("Session opened for {}", user.username()),
            Err(err) => warn!("Login failed, continuing without a session: {err}"),
        }
    } else {
        log!("No credentials in the environment, running without a session");
    }
    if keychain.auth().is_authenticated().await {
        match keychain.w_cont().entries().await {
            Ok(entries) => info!("Watchlist holds {} asteroids", entries.len()),
            Err(err) => warn!("Could not fetch the watchlist: {err}"),
        }
    }

    let c_tok = CancellationToken::new();
    let (supervisor, alert_rx) = Supervisor::new(keychain.f_comp(), keychain.client());
    let supervisor = Arc::new(supervisor);
    let a_cont = Arc::new(AlertController::new(
        alert_rx,
        Box::new(ConsoleSink),
        keychain.auth(),
    ));

    let supervisor_clone = Arc::clone(&supervisor);
    let feed_tok = c_tok.clone();
    tokio::spawn(async move {
        supervisor_clone.run_feed_mon(feed_tok).await;
    });
    let supervisor_clone_clone = Arc::clone(&supervisor);
    let hub_tok = c_tok.clone();
    tokio::spawn(async move {
        supervisor_clone_clone.run_alert_hub(hub_tok).await;
    });
    if keychain.auth().is_authenticated().await {
        match a_cont.unread_count(&keychain.client()).await {
            Ok(count) => info!("{count} unread alerts waiting"),
            Err(err) => warn!("Could not fetch the unread alert count: {err}"),
        }
    }
    let a_cont_clone = Arc::clone(&a_cont);
    let handler = keychain.client();
    let alert_tok = c_tok.clone();
    tokio::spawn(async move {
        a_cont_clone.run(handler, alert_tok).await;
    });

    let mut status_interval = tokio::time::interval(STATUS_INTERVAL);
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Shutting down");
                c_tok.cancel();
                break;
            }
            _ = status_interval.tick() => {
                let f_comp_lock = keychain.f_comp();
                let f_comp = f_comp_lock.read().await;
                if f_comp.is_degraded() {
                    warn!("Feed degraded to the demo snapshot");
                }
                info!("{}", f_comp.summary());
                for record in f_comp.compose(FeedCategory::Trending).iter().take(TRENDING_TOP_N) {
                    let tier = classify(record);
                    let miss = record.miss_distance_km().map_or_else(
                        || String::from("miss distance unknown"),
                        |d| format!("{:.2}M km", d / 1_000_000.0),
                    );
                    log!(
                        "  {}{:<12}\x1b[0m {}: {}, {:.1} km/s, {} views",
                        tier_ansi(tier),
                        tier,
                        record.name(),
                        miss,
                        record.relative_velocity_kms(),
                        record.view_count(),
                    );
                }
            }
        }
    }
}

/// Maps the semantic color key of a tier onto the console palette.
fn tier_ansi(tier: RiskTier) -> &'static str {
    match presentation_for(tier).color_key() {
        "destructive" => "\x1b[1;31m",
        "hazard" => "\x1b[31m",
        "warning" => "\x1b[33m",
        _ => "\x1b[32m",
    }
}
