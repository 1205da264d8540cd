use std::sync::RwLock;

/// A simple wrapper around `reqwest::Client` used to manage HTTP requests
/// with a preconfigured base URL and default settings.
///
/// This client is used for making REST API calls to the asteroid backend.
/// It sets a fixed timeout, holds the bearer token of the active session and
/// allows easy reuse of the HTTP client infrastructure.
#[derive(Debug)]
pub(crate) struct HTTPClient {
    /// The underlying `reqwest::Client` used to perform HTTP requests.
    client: reqwest::Client,
    /// Base URL for the API, prepended to all endpoint paths.
    base_url: String,
    /// Bearer token of the active session, attached to every request when set.
    token: RwLock<Option<String>>,
}

impl HTTPClient {
    /// Constructs a new `HTTPClient` with the given base URL.
    ///
    /// This client has a default request timeout of 15 seconds.
    ///
    /// # Arguments
    /// * `base_url` – The root URL for all HTTP requests (e.g., `"http://localhost:5000/api"`).
    ///
    /// # Returns
    /// A configured `HTTPClient` instance.
    pub(crate) fn new(base_url: &str) -> HTTPClient {
        HTTPClient {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(15))
                .build()
                .unwrap(),
            base_url: String::from(base_url),
            token: RwLock::new(None),
        }
    }

    /// Returns a reference to the internal `reqwest::Client`.
    pub(super) fn client(&self) -> &reqwest::Client { &self.client }
    /// Returns the base URL that the client was initialized with.
    pub(crate) fn url(&self) -> &str { self.base_url.as_str() }

    /// Stores the bearer token of a freshly opened session.
    pub(crate) fn set_token(&self, token: &str) {
        *self.token.write().unwrap() = Some(String::from(token));
    }

    /// Discards the stored bearer token, e.g. on logout or a rejected session.
    pub(crate) fn clear_token(&self) { *self.token.write().unwrap() = None; }

    /// Whether a bearer token is currently stored.
    pub(crate) fn has_token(&self) -> bool { self.token.read().unwrap().is_some() }

    /// Builds a request for `endpoint`, attaching the session token when present.
    pub(crate) fn request_builder(
        &self,
        method: reqwest::Method,
        endpoint: &str,
    ) -> reqwest::RequestBuilder {
        let builder = self.client.request(method, format!("{}{endpoint}", self.base_url));
        match self.token.read().unwrap().as_deref() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}
