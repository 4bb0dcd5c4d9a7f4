use crate::nav::Header;
use crate::session::use_app;
use crate::state::GenerationKind;
use leptos::*;
use leptos_router::A;

#[component]
fn Tile(href: String, icon: &'static str, title: &'static str) -> impl IntoView {
    view! {
        <A href=href class="flex flex-col gap-1 items-center justify-center">
            <div class="h-40 w-full bg-white/10 rounded-md flex items-center justify-center text-4xl">
                {icon}
            </div>
            <span class="text-sm text-white/50">{title}</span>
        </A>
    }
}

#[component]
pub fn Home() -> impl IntoView {
    let app = use_app();
    let greeting = move || {
        app.session.profile.with(|profile| match profile {
            Some(profile) => format!("Hola, {}", profile.username),
            None => "Hola".to_string(),
        })
    };

    view! {
        <div class="flex flex-col gap-4 h-full w-full">
            <Header />
            <div class="flex flex-col gap-4 px-4 w-full max-w-4xl mx-auto">
                <h1 class="text-2xl font-semibold">{greeting}</h1>
                <div class="grid grid-cols-2 md:grid-cols-3 gap-4">
                    {GenerationKind::ALL
                        .into_iter()
                        .map(|kind| view! { <Tile href=kind.route() icon=kind.icon() title=kind.label() /> })
                        .collect_view()}
                    <Tile href="/generations".to_string() icon="🗂" title="Mis generaciones" />
                </div>
            </div>
        </div>
    }
}
