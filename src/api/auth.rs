use super::ApiClient;
use crate::error::ApiError;
use crate::state::Profile;
use serde::{Deserialize, Serialize};

const LOGIN: &str = "/auth/login";
const REGISTER: &str = "/auth/register";

#[derive(Serialize)]
struct Credentials<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct AuthResponse {
    access_token: Option<String>,
    user: Option<Profile>,
}

impl ApiClient {
    pub async fn login(&self, username: &str, password: &str) -> Result<Profile, ApiError> {
        self.authenticate(LOGIN, username, password).await
    }

    pub async fn register(&self, username: &str, password: &str) -> Result<Profile, ApiError> {
        self.authenticate(REGISTER, username, password).await
    }

    async fn authenticate(
        &self,
        path: &str,
        username: &str,
        password: &str,
    ) -> Result<Profile, ApiError> {
        let request = self.post(path, &Credentials { username, password });
        let response: AuthResponse = self.send(request).await?;
        if let Some(token) = response.access_token {
            self.tokens.store(&token);
        }
        match response.user {
            Some(user) => Ok(user),
            None => self.current_user().await,
        }
    }
}
