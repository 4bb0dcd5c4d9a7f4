use crate::loading::SubmitButton;
use crate::notice::{flash, ErrorNotice};
use crate::session::use_app;
use crate::wizard::{Step, Wizard};
use leptos::leptos_dom::ev::SubmitEvent;
use leptos::logging::log;
use leptos::*;
use leptos_router::use_navigate;

#[component]
pub fn Setup() -> impl IntoView {
    let app = use_app();
    let navigate = use_navigate();
    let wizard = create_rw_signal(Wizard::default());
    let pending = create_rw_signal(false);
    let error = create_rw_signal(None);
    let step = create_memo(move |_| wizard.with(Wizard::step));

    let go_home = move || navigate("/", Default::default());

    let submit = {
        let go_home = go_home.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            let Some(setting) = wizard.with(Wizard::pending) else {
                return;
            };
            pending.set(true);
            let go_home = go_home.clone();
            spawn_local(async move {
                let outcome = app.api().update_setting(&setting).await;
                pending.set(false);
                if outcome.is_ok() {
                    app.session.patch(|profile| setting.apply(profile));
                }
                match wizard.try_update(|wizard| wizard.complete(outcome)) {
                    Some(Ok(Step::Done)) => {
                        log!("Setup complete");
                        go_home();
                    }
                    Some(Err(err)) => {
                        flash(error, err.message_or("No se pudo guardar la configuración"))
                    }
                    _ => {}
                }
            });
        }
    };

    // Skipping the optional step submits nothing.
    let skip = move |_: ev::MouseEvent| {
        if wizard.try_update(Wizard::skip).unwrap_or(false) {
            go_home();
        }
    };

    view! {
        <div class="flex flex-col items-center gap-2 px-4 justify-center min-h-dvh w-full">
            <h1 class="text-2xl font-bold">"¡Bienvenido a CoCreate!"</h1>
            <p class="text-sm text-white/50">
                {move || match step.get() {
                    Step::ContentType => {
                        view! {
                            "Para comenzar, cuentanos cual es tu "
                            <span class="text-white">"tipo de contenido"</span>
                            ":"
                        }
                    }
                    Step::TargetAudience => {
                        view! {
                            "Ahora, cuentanos cual es tu "
                            <span class="text-white">"público objetivo"</span>
                            ":"
                        }
                    }
                    Step::AdditionalContext | Step::Done => {
                        view! {
                            "Opcionalmente, tienes algo mas que decirnos como "
                            <span class="text-white">"contexto adicional"</span>
                            "?"
                        }
                    }
                }}
            </p>
            <div class="flex flex-col gap-2 w-full items-center md:w-96">
                <form class="flex flex-col gap-2 w-full" on:submit=submit>
                    <textarea
                        class="w-full h-40 p-2 resize-none rounded-md border border-white/20 bg-transparent"
                        placeholder=move || step.get().placeholder()
                        prop:value=move || wizard.with(|wizard| wizard.draft().to_string())
                        on:input=move |ev| {
                            wizard.update(|wizard| wizard.set_draft(event_target_value(&ev)))
                        }
                    ></textarea>
                    <div class="flex w-full gap-2">
                        <Show when=move || step.get() == Step::AdditionalContext>
                            <button
                                type="button"
                                class="w-full rounded-md border border-white/20 p-2 text-sm hover:bg-gray-900"
                                on:click=skip.clone()
                            >
                                "Saltar →"
                            </button>
                        </Show>
                        <SubmitButton pending=pending class="w-full">
                            "Continuar →"
                        </SubmitButton>
                    </div>
                </form>
                <ErrorNotice notice=error />
            </div>
        </div>
    }
}
