use crate::http_handler::UserRecord;

/// One authenticated backend session: the bearer token and the user it
/// belongs to. Sessions are explicit values owned by the `AuthManager`;
/// nothing in the crate reads ambient session state.
#[derive(Debug, Clone)]
pub struct Session {
    token: String,
    user: UserRecord,
    opened_at: chrono::DateTime<chrono::Utc>,
}

impl Session {
    pub fn new(token: String, user: UserRecord) -> Self {
        Self { token, user, opened_at: chrono::Utc::now() }
    }

    pub fn token(&self) -> &str { &self.token }
    pub fn user(&self) -> &UserRecord { &self.user }
    pub fn opened_at(&self) -> chrono::DateTime<chrono::Utc> { self.opened_at }

    /// Replaces the bearer token after a refresh, keeping the user.
    pub(crate) fn rotate_token(&mut self, token: String) { self.token = token; }
}
