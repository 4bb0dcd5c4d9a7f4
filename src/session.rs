use crate::api::ApiClient;
use crate::config::PROFILE_STORAGE_KEY;
use crate::state::Profile;
use crate::token::TokenStore;
use gloo_storage::{LocalStorage, Storage};
use leptos::logging::{log, warn};
use leptos::*;

/// Current profile plus whether the start-up fetch is still running. Writes
/// are persisted so a reload starts from the last known profile.
#[derive(Debug, Clone, Copy)]
pub struct Session {
    pub profile: RwSignal<Option<Profile>>,
    pub loading: RwSignal<bool>,
}

impl Session {
    pub fn restore() -> Self {
        let stored = LocalStorage::get::<Option<Profile>>(PROFILE_STORAGE_KEY)
            .ok()
            .flatten();
        Self {
            profile: create_rw_signal(stored),
            loading: create_rw_signal(true),
        }
    }

    pub fn set(&self, profile: Option<Profile>) {
        persist(profile.as_ref());
        self.profile.set(profile);
    }

    /// Edits the loaded profile in place; a no-op without one.
    pub fn patch(&self, edit: impl FnOnce(&mut Profile)) {
        self.profile.update(|profile| {
            if let Some(profile) = profile.as_mut() {
                edit(profile);
                persist(Some(profile));
            }
        });
    }

    pub fn finish_loading(&self) {
        self.loading.set(false);
    }

    pub fn logout(&self, tokens: TokenStore) {
        log!("Logging out");
        tokens.clear();
        self.set(None);
    }
}

fn persist(profile: Option<&Profile>) {
    match profile {
        Some(profile) => {
            if let Err(err) = LocalStorage::set(PROFILE_STORAGE_KEY, profile) {
                warn!("Could not persist profile {err:?}");
            }
        }
        None => LocalStorage::delete(PROFILE_STORAGE_KEY),
    }
}

/// Explicit application context shared by every view.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub session: Session,
    api: StoredValue<ApiClient>,
}

impl AppContext {
    pub fn new(session: Session, api: ApiClient) -> Self {
        Self {
            session,
            api: store_value(api),
        }
    }

    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    pub fn logout(&self) {
        self.session.logout(self.api.with_value(ApiClient::tokens));
    }
}

pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}
