use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

use super::viewport::{go_to, DomViewport};
use crate::{
    content::BRAND,
    section::{self, Section},
};

/// Keep `active` on the section under the scroll probe for as long as the
/// owner lives.
pub fn use_scroll_tracker(active: ReadSignal<Section>, set_active: WriteSignal<Section>) {
    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        let current = active.get_untracked();
        let next = section::track_active(&DomViewport, current);
        if next != current {
            log::debug!("active section: {current} -> {next}");
            set_active.set(next);
        }
    });
}

#[component]
pub fn Brand(text: &'static str) -> impl IntoView {
    view! {
        <span class="text-green-600">"<"</span>
        {text}
        <span class="text-green-600">"/>"</span>
    }
}

#[component]
pub fn Navbar(active: ReadSignal<Section>) -> impl IntoView {
    view! {
        <nav class="navbar fixed top-0 inset-x-0 z-50 h-20 bg-black/80 backdrop-blur border-b border-green-900/60">
            <div class="mx-auto px-4 sm:px-6 lg:px-8 h-full max-w-7xl flex items-center justify-between">
                <div class="text-xl font-bold text-green-400">
                    <Brand text=BRAND />
                </div>
                <div class="flex gap-1 sm:gap-4">
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <button
                                    class=move || {
                                        if active.get() == section {
                                            "nav-link active px-3 py-2 rounded-md text-black bg-green-400"
                                        } else {
                                            "nav-link px-3 py-2 rounded-md text-green-400 hover:bg-green-900/40 transition-colors duration-200"
                                        }
                                    }
                                    on:click=move |_| go_to(section.id())
                                >
                                    {section.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn render(section: Section) -> String {
        Owner::new().with(|| {
            let (active, _) = signal(section);
            view! { <Navbar active /> }.to_html()
        })
    }

    #[test]
    fn test_highlights_only_active_section() {
        let html = render(Section::Projects);
        assert_eq!(html.matches("nav-link active").count(), 1);

        let start = html.find("nav-link active").expect("active link should render");
        let button = &html[start..];
        let end = button.find("</button>").expect("active link should be a button");
        assert!(button[..end].contains("Projects"));
        assert!(!button[..end].contains("Skills"));
    }

    #[test]
    fn test_links_in_document_order() {
        let html = render(Section::Home);
        let positions = Section::ALL
            .iter()
            .map(|s| html.find(s.label()).expect("every section should have a link"))
            .collect::<Vec<_>>();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains(BRAND));
    }
}
