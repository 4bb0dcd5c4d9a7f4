//! Thin wrappers around the CoCreate backend.
//!
//! Every call resolves to `Result<T, ApiError>`: a `{success: false, message}`
//! body becomes [`ApiError::Rejected`] whatever the HTTP status, so views only
//! ever match on the result.

mod auth;
mod generate;
mod generations;
mod settings;
mod user;

use crate::config::Config;
use crate::error::ApiError;
use crate::token::TokenStore;
use leptos::logging::{log, warn};
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: Config,
    tokens: TokenStore,
}

/// Body of endpoints that only acknowledge.
#[derive(Debug, Deserialize)]
struct Ack {
    #[serde(default)]
    #[allow(dead_code)]
    message: Value,
}

impl ApiClient {
    pub fn new(config: Config, tokens: TokenStore) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            tokens,
        }
    }

    pub fn tokens(&self) -> TokenStore {
        self.tokens
    }

    fn get(&self, path: &str) -> RequestBuilder {
        log!("GET {path}");
        self.http.get(self.config.endpoint(path))
    }

    fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> RequestBuilder {
        log!("POST {path}");
        self.http.post(self.config.endpoint(path)).json(body)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match self.tokens.read() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await.map_err(|err| {
            warn!("Request failed {err}");
            err
        })?;
        let status = response.status();
        let text = response.text().await?;
        decode(status.as_u16(), status.is_success(), &text).map_err(|err| {
            warn!("Backend answered {status}: {err}");
            err
        })
    }
}

fn decode<T: DeserializeOwned>(status: u16, ok: bool, text: &str) -> Result<T, ApiError> {
    let body: Value = match serde_json::from_str(text) {
        Ok(body) => body,
        Err(err) if ok => return Err(err.into()),
        Err(_) => return Err(ApiError::Status(status)),
    };
    if body.get("success").and_then(Value::as_bool) != Some(true) {
        return match body.get("message").and_then(Value::as_str) {
            Some(message) => Err(ApiError::Rejected(message.to_string())),
            None => Err(ApiError::Status(status)),
        };
    }
    Ok(serde_json::from_value(body)?)
}
