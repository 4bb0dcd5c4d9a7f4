use crate::config::{PREVIEW_CHARS, PREVIEW_POSTS};
use crate::markdown::{to_html, truncate};
use crate::nav::Avatar;
use crate::state::{Content, Newsletter};
use leptos::*;

fn shown(text: &str, expanded: bool) -> String {
    if expanded {
        text.to_string()
    } else {
        truncate(text, PREVIEW_CHARS)
    }
}

#[component]
fn Markdown(#[prop(into)] source: Signal<String>) -> impl IntoView {
    view! { <div class="markdown flex flex-col gap-2" inner_html=move || to_html(&source.get()) /> }
}

/// Renders a generated payload. Collapsed views cut long text and threads.
#[component]
pub fn ContentBody(
    content: Content,
    #[prop(into)] expanded: MaybeSignal<bool>,
    #[prop(into)] author: Signal<String>,
) -> impl IntoView {
    match content {
        Content::Markdown(text) => {
            view! { <Markdown source=Signal::derive(move || shown(&text, expanded.get())) /> }
                .into_view()
        }
        Content::Newsletter(newsletter) => {
            let Newsletter { title, subject, .. } = newsletter.clone();
            let body = newsletter.body();
            view! {
                <div class="flex flex-col gap-4">
                    <h1 class="text-2xl font-semibold flex w-full mb-2">{title}</h1>
                    <span class="text-sm text-gray-500">{subject}</span>
                    <Markdown source=Signal::derive(move || shown(&body, expanded.get())) />
                </div>
            }
            .into_view()
        }
        Content::Thread(posts) => {
            view! {
                <div class="flex flex-col gap-4">
                    {move || {
                        let count = if expanded.get() { posts.len() } else { PREVIEW_POSTS };
                        let visible: Vec<_> = posts.iter().take(count).cloned().collect();
                        let last = visible.len().saturating_sub(1);
                        visible
                            .into_iter()
                            .enumerate()
                            .map(|(index, post)| {
                                view! {
                                    <div class="relative flex flex-col items-start gap-2 border border-white/20 rounded-md p-4">
                                        <div class="flex items-center gap-2">
                                            <Avatar />
                                            <span>{author}</span>
                                        </div>
                                        <div class="markdown" inner_html=to_html(&post) />
                                        <Show when=move || index < last>
                                            <div class="absolute -bottom-4 w-px h-4 bg-white/20" />
                                        </Show>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            }
            .into_view()
        }
    }
}
