//! Login and signup against `/api/v1`.
//!
//! There is no token: a successful login returns the [`User`] record, and the
//! client identifies itself afterwards by sending that user's id.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Credentials, NewUser, User};

#[derive(Clone, Debug)]
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `POST /api/v1/login`. A 401 carries the plain-text reason in
    /// [`ApiError::Status`].
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let body = Credentials {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let user: User = self
            .client
            .send_json(self.client.post("/api/v1/login").json(&body))
            .await?;
        tracing::info!("Logged in as user {}", user.id);
        Ok(user)
    }

    /// `POST /api/v1/adduser`. Returns the created account.
    pub async fn signup(&self, name: &str, email: &str, password: &str) -> Result<User, ApiError> {
        let body = NewUser {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        self.client
            .send_json(self.client.post("/api/v1/adduser").json(&body))
            .await
    }
}
