use super::content::ContentBody;
use crate::config::{PREVIEW_CHARS, PREVIEW_POSTS};
use crate::session::use_app;
use crate::state::{Content, Generation};
use leptos::*;

fn expand_label(content: &Content, expanded: bool) -> Option<String> {
    let hidden = match content {
        Content::Thread(posts) => posts.len().saturating_sub(PREVIEW_POSTS),
        other => other.text_len().saturating_sub(PREVIEW_CHARS),
    };
    if hidden == 0 {
        return None;
    }
    Some(match (expanded, content) {
        (true, _) => "Ver menos".to_string(),
        (false, Content::Thread(_)) => format!("Ver {hidden} tweets más"),
        (false, _) => "Ver más".to_string(),
    })
}

#[component]
pub fn SaveToggle(#[prop(into)] saved: Signal<bool>, on_toggle: Callback<()>) -> impl IntoView {
    view! {
        <button
            type="button"
            class="rounded-md border border-white/20 p-2 hover:bg-gray-900"
            title=move || if saved.get() { "Quitar de guardados" } else { "Guardar" }
            on:click=move |_| on_toggle.call(())
        >
            {move || if saved.get() { "★" } else { "☆" }}
        </button>
    }
}

/// One history entry. `on_toggle` receives the id and the saved state at
/// click time.
#[component]
pub fn GenerationCard(generation: Generation, on_toggle: Callback<(u64, bool)>) -> impl IntoView {
    let app = use_app();
    let expanded = create_rw_signal(false);
    let author = Signal::derive(move || {
        app.session
            .profile
            .with(|profile| profile.as_ref().map(|profile| profile.username.clone()))
            .unwrap_or_default()
    });
    let Generation {
        id,
        kind,
        prompt,
        content,
        saved,
        ..
    } = generation;
    let label_content = content.clone();
    let label = move || expand_label(&label_content, expanded.get());

    view! {
        <div class="bg-white/10 rounded-lg p-4 flex flex-col gap-4">
            <div class="flex justify-between items-center">
                <div>
                    <span class="text-xl font-semibold">{kind.label()}</span>
                    <h3 class="text-lg font-medium">{prompt}</h3>
                </div>
                <SaveToggle
                    saved=Signal::derive(move || saved)
                    on_toggle=Callback::new(move |_| on_toggle.call((id, saved)))
                />
            </div>
            <ContentBody content=content expanded=expanded author=author />
            {move || {
                label()
                    .map(|label| {
                        view! {
                            <button
                                type="button"
                                class="self-start rounded-md border border-white/20 px-3 py-1.5 text-sm hover:bg-gray-900"
                                on:click=move |_| expanded.update(|expanded| *expanded = !*expanded)
                            >
                                {label}
                            </button>
                        }
                    })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_label() {
        assert_eq!(expand_label(&Content::Markdown("corto".into()), false), None);

        let long = Content::Markdown("a".repeat(301));
        assert_eq!(expand_label(&long, false).as_deref(), Some("Ver más"));
        assert_eq!(expand_label(&long, true).as_deref(), Some("Ver menos"));

        let thread = Content::Thread(vec!["1".into(), "2".into(), "3".into(), "4".into()]);
        assert_eq!(expand_label(&thread, false).as_deref(), Some("Ver 2 tweets más"));
        assert_eq!(
            expand_label(&Content::Thread(vec!["1".into(), "2".into()]), false),
            None
        );
    }
}
