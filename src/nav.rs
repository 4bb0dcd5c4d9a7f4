use crate::session::use_app;
use leptos::*;
use leptos_router::A;

const LINK: &str = "text-sm text-white/50 hover:text-white";

#[component]
pub fn Header() -> impl IntoView {
    let app = use_app();
    let username = move || {
        app.session
            .profile
            .with(|profile| profile.as_ref().map(|profile| profile.username.clone()))
    };
    let logout = move |_| app.logout();

    view! {
        <header class="w-full flex items-center gap-4 p-4 border-b border-white/20">
            <A href="/" class="text-2xl font-bold grow">
                "CoCreate"
            </A>
            <A href="/generations" class=LINK>
                "Mis generaciones"
            </A>
            <A href="/settings" class=LINK>
                "Configuración"
            </A>
            {move || {
                username()
                    .map(|name| {
                        view! {
                            <span class="flex items-center gap-2 text-sm">
                                <Avatar />
                                {name}
                            </span>
                        }
                    })
            }}
            <button
                type="button"
                class="rounded-md border border-white/20 px-3 py-1.5 text-sm hover:bg-gray-900"
                on:click=logout
            >
                "Cerrar sesión"
            </button>
        </header>
    }
}

#[component]
pub fn Avatar() -> impl IntoView {
    view! {
        <div class="h-10 w-10 rounded-full bg-white/10 flex items-center justify-center text-white/50">
            <svg viewBox="0 0 24 24" width="22" fill="currentColor">
                <path d="M12 4a4 4 0 1 1 0 8 4 4 0 0 1 0-8Zm0 10c4.42 0 8 1.79 8 4v2H4v-2c0-2.21 3.58-4 8-4Z" />
            </svg>
        </div>
    }
}
