use super::login::Field;
use crate::loading::SubmitButton;
use crate::notice::{flash, ErrorNotice};
use crate::session::use_app;
use crate::validation::validate_register;
use leptos::leptos_dom::ev::SubmitEvent;
use leptos::*;
use leptos_router::{use_navigate, A};

#[component]
pub fn Register() -> impl IntoView {
    let app = use_app();
    let navigate = use_navigate();
    let username = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let confirm_password = create_rw_signal(String::new());
    let pending = create_rw_signal(false);
    let error = create_rw_signal(None);

    let register = move |ev: SubmitEvent| {
        ev.prevent_default();
        let username = username.get();
        let password = password.get();
        if let Err(err) = validate_register(&username, &password, &confirm_password.get()) {
            flash(error, err.to_string());
            return;
        }
        pending.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            let outcome = app.api().register(&username, &password).await;
            pending.set(false);
            match outcome {
                Ok(profile) => {
                    app.session.set(Some(profile));
                    navigate("/", Default::default());
                }
                Err(err) => flash(error, err.message_or("No se pudo crear la cuenta")),
            }
        });
    };

    view! {
        <div class="flex flex-col items-center gap-2 justify-center min-h-dvh w-full px-4">
            <div class="border border-white/20 p-4 rounded-lg w-full md:w-96 flex flex-col gap-4">
                <span class="text-2xl font-bold w-full">"CoCreate"</span>
                <form class="flex flex-col gap-2 w-full" on:submit=register>
                    <Field label="Usuario" placeholder="usuario" value=username />
                    <Field
                        label="Contraseña"
                        placeholder="*************"
                        kind="password"
                        value=password
                    />
                    <Field
                        label="Confirmar contraseña"
                        placeholder="*************"
                        kind="password"
                        value=confirm_password
                    />
                    <SubmitButton pending=pending>"Registrarse"</SubmitButton>
                </form>
                <ErrorNotice notice=error />
            </div>
            <div class="flex gap-1 w-full items-center justify-center">
                <span class="text-white/50">"¿Ya tienes una cuenta?"</span>
                <A href="/login" class="text-blue-500 font-medium">
                    "Inicia sesión"
                </A>
            </div>
        </div>
    }
}
