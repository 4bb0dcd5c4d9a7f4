use crate::api::ApiClient;
use crate::config::Config;
use crate::guard;
use crate::session::{use_app, AppContext, Session};
use crate::state::GenerationKind;
use crate::token::TokenStore;
use crate::views::{Generate, Generations, Home, Login, Register, Settings, Setup};
use leptos::logging::log;
use leptos::*;
use leptos_router::*;

#[component]
pub fn App() -> impl IntoView {
    let session = Session::restore();
    let app = AppContext::new(session, ApiClient::new(Config::from_env(), TokenStore));
    provide_context(app);

    // The one start-up fetch; the guard stays inert until it settles.
    spawn_local(async move {
        match app.api().current_user().await {
            Ok(profile) => {
                log!("Session for {}", profile.username);
                session.set(Some(profile));
            }
            Err(err) => {
                log!("No session: {err}");
                session.set(None);
            }
        }
        session.finish_loading();
    });

    view! {
        <div class="bg-black min-h-dvh text-white">
            <Router>
                <Shell />
            </Router>
        </div>
    }
}

#[component]
fn Shell() -> impl IntoView {
    let app = use_app();
    let location = use_location();
    let navigate = use_navigate();

    create_effect(move |_| {
        let path = location.pathname.get();
        let loading = app.session.loading.get();
        let target = app
            .session
            .profile
            .with(|profile| guard::redirect(profile.as_ref(), loading, &path));
        if let Some(target) = target {
            log!("Redirecting {path} to {target}");
            navigate(target, Default::default());
        }
    });

    view! {
        <main class="flex flex-col gap-4 h-full w-full">
            <Routes>
                <Route path="/" view=Home />
                <Route path="/login" view=Login />
                <Route path="/register" view=Register />
                <Route path="/setup" view=Setup />
                <Route path="/settings" view=Settings />
                <Route path="/generations" view=Generations />
                <Route
                    path="/generate/video-script"
                    view=|| view! { <Generate kind=GenerationKind::VideoScript /> }
                />
                <Route
                    path="/generate/content-idea"
                    view=|| view! { <Generate kind=GenerationKind::ContentIdea /> }
                />
                <Route
                    path="/generate/newsletter"
                    view=|| view! { <Generate kind=GenerationKind::Newsletter /> }
                />
                <Route
                    path="/generate/thread"
                    view=|| view! { <Generate kind=GenerationKind::Thread /> }
                />
            </Routes>
        </main>
    }
}
