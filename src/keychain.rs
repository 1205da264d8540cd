use crate::feed_control::{FeedComputer, WatchlistController};
use crate::http_handler::http_client::HTTPClient;
use crate::session_control::AuthManager;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Struct representing the key components of the application, providing
/// access to the HTTP client, feed computer, auth manager and watchlist
/// controller.
#[derive(Clone)]
pub struct Keychain {
    /// The HTTP client for performing network requests.
    client: Arc<HTTPClient>,
    /// The auth manager owning the active session.
    auth: Arc<AuthManager>,
    /// The feed computer holding the latest asteroid snapshot.
    f_comp: Arc<RwLock<FeedComputer>>,
    /// The watchlist controller for the active session.
    w_cont: Arc<WatchlistController>,
}

impl Keychain {
    /// Creates a new instance of `Keychain` asynchronously.
    ///
    /// # Arguments
    /// - `url`: The base URL to initialize the HTTP client.
    ///
    /// # Returns
    /// A new instance of `Keychain` containing initialized subsystems.
    pub async fn new(url: &str) -> Self {
        let client = Arc::new(HTTPClient::new(url));
        let auth = Arc::new(AuthManager::new(Arc::clone(&client)));
        let w_cont = Arc::new(WatchlistController::new(Arc::clone(&client), Arc::clone(&auth)));
        let f_comp = Arc::new(RwLock::new(FeedComputer::new(Arc::clone(&client)).await));
        Self { client, auth, f_comp, w_cont }
    }

    /// Provides a cloned reference to the HTTP client.
    pub fn client(&self) -> Arc<HTTPClient> { Arc::clone(&self.client) }

    /// Provides a cloned reference to the auth manager.
    pub fn auth(&self) -> Arc<AuthManager> { Arc::clone(&self.auth) }

    /// Provides a cloned reference to the feed computer.
    pub fn f_comp(&self) -> Arc<RwLock<FeedComputer>> { Arc::clone(&self.f_comp) }

    /// Provides a cloned reference to the watchlist controller.
    pub fn w_cont(&self) -> Arc<WatchlistController> { Arc::clone(&self.w_cont) }
}
