use super::ApiClient;
use crate::error::ApiError;
use crate::state::{Content, GenerationKind};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize)]
struct Prompt<'a> {
    prompt: &'a str,
}

/// The generated payload travels in `message`.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    message: Value,
}

impl ApiClient {
    pub async fn generate(&self, kind: GenerationKind, prompt: &str) -> Result<Content, ApiError> {
        let request = self.authorized(self.post(&kind.endpoint(), &Prompt { prompt }));
        let response: GenerateResponse = self.send(request).await?;
        Ok(Content::decode(kind, response.message))
    }
}
