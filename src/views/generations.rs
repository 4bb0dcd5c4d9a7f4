use super::card::GenerationCard;
use crate::api::ApiClient;
use crate::export;
use crate::history::{saved_or_empty, History, Tab};
use crate::loading::Loading;
use crate::nav::Header;
use crate::notice::{flash, ErrorNotice};
use crate::session::use_app;
use leptos::logging::{error, log};
use leptos::*;
use std::collections::HashSet;

const LOAD_ERROR: &str = "Error al cargar las generaciones";

async fn fetch_history(api: ApiClient, tab: Tab) -> Result<History, String> {
    let mut history = History::default();
    match tab {
        Tab::All => {
            // Saved ids come first; without them everything shows unsaved.
            let saved_ids: HashSet<u64> = match api.saved_generations().await {
                Ok(saved) => saved.iter().map(|generation| generation.id).collect(),
                Err(err) => {
                    log!("Saved generations unavailable: {err}");
                    HashSet::new()
                }
            };
            let generations = api
                .generations()
                .await
                .map_err(|err| err.message_or(LOAD_ERROR))?;
            history.load_all(generations, saved_ids);
        }
        Tab::Saved => {
            history.load_saved(saved_or_empty(api.saved_generations().await, LOAD_ERROR)?)
        }
    }
    Ok(history)
}

#[component]
fn TabButton(tab: Tab, current: RwSignal<Tab>, label: &'static str) -> impl IntoView {
    view! {
        <button
            type="button"
            class=move || {
                if current.get() == tab {
                    "rounded-md p-2 text-sm font-semibold bg-white/10 text-white"
                } else {
                    "rounded-md p-2 text-sm font-semibold text-gray-500"
                }
            }
            on:click=move |_| current.set(tab)
        >
            {label}
        </button>
    }
}

#[component]
pub fn Generations() -> impl IntoView {
    let app = use_app();
    let tab = create_rw_signal(Tab::All);
    let error = create_rw_signal(None);
    let history = create_local_resource(
        move || tab.get(),
        move |tab| async move { fetch_history(app.api(), tab).await },
    );

    let toggle = Callback::new(move |(id, saved): (u64, bool)| {
        spawn_local(async move {
            let api = app.api();
            let outcome = if saved {
                api.unsave_generation(id).await
            } else {
                api.save_generation(id).await
            };
            match outcome {
                Ok(()) => history.update(|history| {
                    if let Some(Ok(history)) = history.as_mut() {
                        if saved {
                            history.mark_unsaved(id);
                        } else {
                            history.mark_saved(id);
                        }
                    }
                }),
                Err(err) => flash(error, err.message_or("No se pudo actualizar la generación")),
            }
        });
    });

    let export_all = move |_| {
        spawn_local(async move {
            match app.api().export_generations().await {
                Ok(generations) => match export::download(&generations) {
                    Ok(name) => log!("Exported {} generations to {name}", generations.len()),
                    Err(err) => {
                        error!("Export failed {err}");
                        flash(error, "No se pudo exportar las generaciones".to_string());
                    }
                },
                Err(err) => flash(error, err.message_or("Error al exportar las generaciones")),
            }
        });
    };

    view! {
        <div class="flex flex-col gap-4 h-full w-full">
            <Header />
            <div class="flex flex-col gap-4 px-4 w-full max-w-4xl mx-auto">
                <div class="flex justify-between items-center">
                    <h1 class="text-2xl font-semibold">"Mis generaciones"</h1>
                    <button
                        type="button"
                        class="rounded-md border border-white/20 px-3 py-2 hover:bg-gray-900"
                        on:click=export_all
                    >
                        "⭳ Exportar"
                    </button>
                </div>
                <div class="flex gap-1 w-fit rounded-md bg-white/5 p-1">
                    <TabButton tab=Tab::All current=tab label="Todas" />
                    <TabButton tab=Tab::Saved current=tab label="Guardadas" />
                </div>
                <Suspense fallback=move || {
                    view! { <Loading /> }
                }>
                    {move || {
                        history
                            .get()
                            .map(|result| match result {
                                Ok(history) if history.is_empty() => {
                                    view! {
                                        <div class="text-center py-8 text-gray-400">
                                            {history.empty_message()}
                                        </div>
                                    }
                                        .into_view()
                                }
                                Ok(history) => {
                                    view! {
                                        <div class="flex flex-col gap-4">
                                            {history
                                                .entries
                                                .into_iter()
                                                .map(|generation| {
                                                    view! { <GenerationCard generation=generation on_toggle=toggle /> }
                                                })
                                                .collect_view()}
                                        </div>
                                    }
                                        .into_view()
                                }
                                Err(message) => {
                                    view! { <p class="text-red-500 text-center py-8">{message}</p> }
                                        .into_view()
                                }
                            })
                    }}
                </Suspense>
                <div class="fixed bottom-4 right-4">
                    <ErrorNotice notice=error />
                </div>
            </div>
        </div>
    }
}
