use crate::loading::SubmitButton;
use crate::nav::Header;
use crate::notice::{flash, ErrorNotice, Notice};
use crate::session::use_app;
use crate::state::Setting;
use leptos::leptos_dom::ev::SubmitEvent;
use leptos::*;

#[component]
fn SettingField(
    label: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <label class="flex flex-col gap-2 text-sm text-white/50">
            {label}
            <textarea
                class="w-full h-32 p-2 resize-none rounded-md border border-white/20 bg-transparent text-white"
                placeholder=placeholder
                prop:value=value
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        </label>
    }
}

#[component]
pub fn Settings() -> impl IntoView {
    let app = use_app();
    let content_type = create_rw_signal(String::new());
    let target_audience = create_rw_signal(String::new());
    let additional_context = create_rw_signal(String::new());
    let pending = create_rw_signal(false);
    let error = create_rw_signal(None);
    let success = create_rw_signal(None::<Notice>);

    create_effect(move |_| {
        app.session.profile.with(|profile| {
            if let Some(profile) = profile {
                content_type.set(profile.content_type.clone());
                target_audience.set(profile.target_audience.clone());
                additional_context.set(profile.additional_context.clone());
            }
        })
    });

    let save = move |ev: SubmitEvent| {
        ev.prevent_default();
        let settings = [
            Setting::ContentType(content_type.get()),
            Setting::TargetAudience(target_audience.get()),
            Setting::AdditionalContext(additional_context.get()),
        ];
        pending.set(true);
        spawn_local(async move {
            let api = app.api();
            // Sequential, stopping at the first rejection.
            for setting in &settings {
                if let Err(err) = api.update_setting(setting).await {
                    pending.set(false);
                    flash(
                        error,
                        err.message_or("Ocurrió un error al actualizar la configuración"),
                    );
                    return;
                }
            }
            app.session.patch(|profile| {
                for setting in &settings {
                    setting.apply(profile);
                }
            });
            pending.set(false);
            flash(success, "Configuración actualizada correctamente!".to_string());
        });
    };

    view! {
        <div class="flex flex-col gap-4 h-full w-full">
            <Header />
            <div class="flex flex-col items-center gap-4 px-4 max-w-4xl mx-auto w-full">
                <h1 class="text-2xl font-bold">"Configuración"</h1>
                <div class="flex flex-col gap-2 w-full items-center md:w-96">
                    <form class="flex flex-col gap-4 w-full" on:submit=save>
                        <SettingField
                            label="Tipo de contenido:"
                            placeholder="ej. tutoriales de javascript en español"
                            value=content_type
                        />
                        <SettingField
                            label="Público objetivo:"
                            placeholder="ej. estudiantes de ingeniería"
                            value=target_audience
                        />
                        <SettingField
                            label="Contexto adicional:"
                            placeholder="ej. tengo un curso de python que quiero promocionar cuando sea apropiado"
                            value=additional_context
                        />
                        <SubmitButton pending=pending class="w-full">
                            "Guardar cambios"
                        </SubmitButton>
                    </form>
                    <ErrorNotice notice=error />
                    {move || {
                        success.get().map(|notice| view! { <p class="text-green-500">{notice.message}</p> })
                    }}
                </div>
            </div>
        </div>
    }
}
