use super::session::Session;
use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_request::login_post::LoginRequest;
use crate::http_handler::http_request::register_post::RegisterRequest;
use crate::http_handler::http_request::request_common::{
    JSONBodyHTTPRequestType, NoBodyHTTPRequestType,
};
use crate::http_handler::http_request::token_refresh_post::TokenRefreshRequest;
use crate::http_handler::http_request::token_verify_get::TokenVerifyRequest;
use crate::http_handler::{HTTPError, UserRecord};
use crate::{event, info};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Owns the active `Session` and performs every auth round trip.
///
/// The bearer token is propagated into the `HTTPClient` so all subsequent
/// requests carry it, and withdrawn again when the session ends.
pub struct AuthManager {
    request_client: Arc<HTTPClient>,
    session: RwLock<Option<Session>>,
}

impl AuthManager {
    pub fn new(request_client: Arc<HTTPClient>) -> Self {
        Self { request_client, session: RwLock::new(None) }
    }

    /// Opens a session for existing credentials.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserRecord, HTTPError> {
        let req = LoginRequest { email: String::from(email), password: String::from(password) };
        let response = req.send_request(&self.request_client).await?;
        let (token, user) = response.into_parts();
        self.open_session(token, user.clone()).await;
        Ok(user)
    }

    /// Creates an account and opens a session for it.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<UserRecord, HTTPError> {
        let req = RegisterRequest {
            username: String::from(username),
            email: String::from(email),
            password: String::from(password),
        };
        let response = req.send_request(&self.request_client).await?;
        let (token, user) = response.into_parts();
        self.open_session(token, user.clone()).await;
        Ok(user)
    }

    /// Ends the session locally. The backend holds no server-side session
    /// state, so no request is involved.
    pub async fn logout(&self) {
        self.request_client.clear_token();
        if self.session.write().await.take().is_some() {
            info!("Session closed");
        }
    }

    /// Rotates the bearer token of the active session.
    pub async fn refresh(&self) -> Result<(), HTTPError> {
        let response = TokenRefreshRequest {}.send_request(&self.request_client).await?;
        let token = response.into_token();
        self.request_client.set_token(&token);
        if let Some(session) = self.session.write().await.as_mut() {
            session.rotate_token(token);
        }
        event!("Session token rotated");
        Ok(())
    }

    /// Asks the backend whether the stored token is still accepted. A
    /// rejected token closes the session locally and returns `false`.
    pub async fn verify(&self) -> Result<bool, HTTPError> {
        match (TokenVerifyRequest {}).send_request(&self.request_client).await {
            Ok(_) => Ok(true),
            Err(err) if err.is_unauthorized() => {
                self.logout().await;
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }

    pub async fn is_authenticated(&self) -> bool { self.session.read().await.is_some() }

    pub async fn current_user(&self) -> Option<UserRecord> {
        self.session.read().await.as_ref().map(|s| s.user().clone())
    }

    pub async fn user_id(&self) -> Option<String> {
        self.session.read().await.as_ref().map(|s| String::from(s.user().id()))
    }

    async fn open_session(&self, token: String, user: UserRecord) {
        self.request_client.set_token(&token);
        *self.session.write().await = Some(Session::new(token, user));
    }
}
