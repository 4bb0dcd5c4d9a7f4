mod api;
mod app;
mod config;
mod error;
mod export;
mod guard;
mod history;
mod loading;
mod markdown;
mod nav;
mod notice;
mod session;
mod state;
mod token;
mod validation;
mod views;
mod wizard;

use app::*;
use leptos::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(|| {
        view! { <App /> }
    })
}
