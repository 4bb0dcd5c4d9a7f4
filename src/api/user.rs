use super::ApiClient;
use crate::error::ApiError;
use crate::state::Profile;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct UserResponse {
    user: Profile,
}

impl ApiClient {
    /// Any failure means there is no usable session, so the stored
    /// credential is dropped.
    pub async fn current_user(&self) -> Result<Profile, ApiError> {
        let request = self.authorized(self.get("/user"));
        match self.send::<UserResponse>(request).await {
            Ok(response) => Ok(response.user),
            Err(err) => {
                self.tokens.clear();
                Err(err)
            }
        }
    }
}
