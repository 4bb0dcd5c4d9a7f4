use leptos::logging::warn;
use url::Url;

static PUBLIC_API_URL: Option<&'static str> = option_env!("PUBLIC_API_URL");

const DEFAULT_API_URL: &str = "http://localhost:8000";

pub const TOKEN_COOKIE: &str = "accessToken";
pub const PROFILE_STORAGE_KEY: &str = "userData";

/// How long transient notices stay on screen.
pub const NOTICE_MS: u32 = 3_000;
/// Characters of a generation shown before "Ver más".
pub const PREVIEW_CHARS: usize = 300;
/// Thread posts shown before "Ver más".
pub const PREVIEW_POSTS: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: Url,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_base(PUBLIC_API_URL)
    }

    fn from_base(base: Option<&str>) -> Self {
        let api_url = match base.map(Url::parse) {
            Some(Ok(url)) => url,
            Some(Err(err)) => {
                warn!("Invalid PUBLIC_API_URL ({err}), using {DEFAULT_API_URL}");
                Url::parse(DEFAULT_API_URL).expect("default api url")
            }
            None => Url::parse(DEFAULT_API_URL).expect("default api url"),
        };
        Self { api_url }
    }

    /// `path` is an absolute API path such as `/auth/login`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_url.as_str().trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint() {
        let config = Config::from_base(Some("https://api.cocreate.dev/v1/"));
        assert_eq!(
            config.endpoint("/auth/login"),
            "https://api.cocreate.dev/v1/auth/login"
        );

        let config = Config::from_base(None);
        assert_eq!(config.endpoint("/user"), "http://localhost:8000/user");
    }

    #[test]
    fn test_invalid_base_falls_back() {
        let config = Config::from_base(Some("not a url"));
        assert_eq!(config.api_url.as_str(), "http://localhost:8000/");
    }
}
