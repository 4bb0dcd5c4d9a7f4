use super::card::SaveToggle;
use super::content::ContentBody;
use crate::api::ApiClient;
use crate::loading::SubmitButton;
use crate::nav::Header;
use crate::notice::{flash, ErrorNotice};
use crate::session::use_app;
use crate::state::{Content, Generation, GenerationKind};
use leptos::leptos_dom::ev::SubmitEvent;
use leptos::logging::{log, warn};
use leptos::*;

/// The generate endpoint doesn't return an id, so the newest listed
/// generation is taken and confirmed by prompt. Another tab generating at the
/// same moment can still win this race.
async fn recover_generation(api: &ApiClient, prompt: &str) -> Option<Generation> {
    let newest = match api.generations().await {
        Ok(generations) => generations.into_iter().max_by_key(|generation| generation.id)?,
        Err(err) => {
            warn!("Could not list generations: {err}");
            return None;
        }
    };
    let confirmed = api.generation(newest.id).await.unwrap_or_else(|err| {
        warn!("Could not fetch generation {}: {err}", newest.id);
        newest
    });
    if confirmed.prompt != prompt {
        warn!("Newest generation {} has another prompt", confirmed.id);
        return None;
    }
    log!("Recovered generation {}", confirmed.id);
    Some(confirmed)
}

#[component]
pub fn Generate(kind: GenerationKind) -> impl IntoView {
    let app = use_app();
    let prompt = create_rw_signal(String::new());
    let pending = create_rw_signal(false);
    let error = create_rw_signal(None);
    let result = create_rw_signal(None::<Content>);
    let recovered = create_rw_signal(None::<Generation>);
    let author = Signal::derive(move || {
        app.session
            .profile
            .with(|profile| profile.as_ref().map(|profile| profile.username.clone()))
            .unwrap_or_default()
    });

    let generate = move |ev: SubmitEvent| {
        ev.prevent_default();
        let text = prompt.get();
        pending.set(true);
        spawn_local(async move {
            let api = app.api();
            match api.generate(kind, &text).await {
                Ok(content) => {
                    result.set(Some(content));
                    if kind == GenerationKind::VideoScript {
                        recovered.set(recover_generation(&api, &text).await);
                    }
                }
                Err(err) => flash(error, err.message_or("Ocurrió un error al generar el contenido")),
            }
            pending.set(false);
        });
    };

    let toggle_saved = Callback::new(move |_: ()| {
        let Some((id, saved)) = recovered.with(|generation| {
            generation
                .as_ref()
                .map(|generation| (generation.id, generation.saved))
        }) else {
            return;
        };
        spawn_local(async move {
            let api = app.api();
            let outcome = if saved {
                api.unsave_generation(id).await
            } else {
                api.save_generation(id).await
            };
            match outcome {
                Ok(()) => recovered.update(|generation| {
                    if let Some(generation) = generation.as_mut() {
                        generation.saved = !saved;
                    }
                }),
                Err(err) => flash(error, err.message_or("No se pudo actualizar la generación")),
            }
        });
    });

    let reset = move |_| {
        result.set(None);
        recovered.set(None);
    };

    view! {
        <div class="flex flex-col gap-4 h-full w-full">
            <Header />
            {move || match result.get() {
                Some(content) => {
                    view! {
                        <div class="flex flex-col gap-4 pb-6 px-4 w-full max-w-4xl mx-auto">
                            <div class="flex items-center gap-2">
                                <button
                                    type="button"
                                    class="rounded-md border border-white/20 p-2 hover:bg-gray-900"
                                    title="Volver a empezar"
                                    on:click=reset
                                >
                                    "↺"
                                </button>
                                {move || {
                                    recovered
                                        .with(|generation| generation.as_ref().map(|generation| generation.saved))
                                        .map(|saved| {
                                            view! {
                                                <SaveToggle
                                                    saved=Signal::derive(move || saved)
                                                    on_toggle=toggle_saved
                                                />
                                            }
                                        })
                                }}
                            </div>
                            <ContentBody content=content expanded=true author=author />
                        </div>
                    }
                        .into_view()
                }
                None => {
                    view! {
                        <form
                            class="flex flex-col items-center justify-center gap-2 px-4 w-full max-w-4xl mx-auto"
                            on:submit=generate
                        >
                            <h1 class="text-2xl font-semibold flex w-full mb-2">{kind.title()}</h1>
                            <textarea
                                rows="6"
                                class="w-full bg-white/10 outline-none rounded-md p-4 resize-none"
                                placeholder=kind.placeholder()
                                prop:value=prompt
                                on:input=move |ev| prompt.set(event_target_value(&ev))
                            ></textarea>
                            <SubmitButton pending=pending class="w-full">
                                {kind.action()}
                            </SubmitButton>
                            <ErrorNotice notice=error />
                        </form>
                    }
                        .into_view()
                }
            }}
        </div>
    }
}
