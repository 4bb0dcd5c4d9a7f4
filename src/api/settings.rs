use super::{Ack, ApiClient};
use crate::error::ApiError;
use crate::state::Setting;

impl ApiClient {
    pub async fn update_setting(&self, setting: &Setting) -> Result<(), ApiError> {
        let request = self.authorized(self.post(setting.endpoint(), &setting.body()));
        self.send::<Ack>(request).await?;
        Ok(())
    }
}
