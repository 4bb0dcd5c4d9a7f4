use crate::config::TOKEN_COOKIE;
use leptos::document;
use leptos::logging::warn;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

/// Bearer credential kept in a same-site cookie. No expiry is set, so the
/// browser treats it as a session cookie.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenStore;

impl TokenStore {
    pub fn store(&self, token: &str) {
        write_cookie(&store_cookie(token));
    }

    pub fn read(&self) -> Option<String> {
        let cookies = html_document()?.cookie().ok()?;
        find_token(&cookies)
    }

    pub fn clear(&self) {
        write_cookie(&clear_cookie());
    }
}

fn html_document() -> Option<HtmlDocument> {
    document().dyn_into::<HtmlDocument>().ok()
}

fn write_cookie(cookie: &str) {
    let Some(doc) = html_document() else {
        warn!("No html document, cannot write cookie");
        return;
    };
    if let Err(err) = doc.set_cookie(cookie) {
        warn!("Could not write cookie {err:?}");
    }
}

fn store_cookie(token: &str) -> String {
    format!("{TOKEN_COOKIE}={token}; path=/; Secure; SameSite=Strict")
}

fn clear_cookie() -> String {
    format!("{TOKEN_COOKIE}=; path=/; Secure; SameSite=Strict; expires=Thu, 01 Jan 1970 00:00:00 GMT")
}

fn find_token(cookies: &str) -> Option<String> {
    cookies
        .split(';')
        .map(str::trim)
        .filter_map(|cookie| cookie.split_once('='))
        .find(|(name, _)| *name == TOKEN_COOKIE)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_strings() {
        assert_eq!(
            store_cookie("abc"),
            "accessToken=abc; path=/; Secure; SameSite=Strict"
        );
        assert!(clear_cookie().starts_with("accessToken=;"));
        assert!(clear_cookie().ends_with("expires=Thu, 01 Jan 1970 00:00:00 GMT"));
    }

    #[test]
    fn test_find_token() {
        assert_eq!(
            find_token("theme=dark; accessToken=eyJ.abc.def; lang=es"),
            Some("eyJ.abc.def".to_string())
        );
        // Padding in base64 tokens must survive.
        assert_eq!(find_token("accessToken=dG9rZW4="), Some("dG9rZW4=".to_string()));
        assert_eq!(find_token("theme=dark"), None);
        assert_eq!(find_token("accessToken="), None);
        assert_eq!(find_token(""), None);
        assert_eq!(find_token("myaccessToken=nope"), None);
    }
}
