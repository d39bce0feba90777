use leptos::prelude::*;

use super::icons::LucideIcon;
use crate::{content::CONTACT_LINKS, section::Section};

const COPYRIGHT: &str = concat!(
    "© ",
    env!("BUILD_YEAR"),
    " FullStack Developer Portfolio. Built with Rust & Leptos."
);

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id=Section::Contact.id() class="section contact-section py-24 px-4">
            <div class="contact-container max-w-4xl mx-auto text-center">
                <h2 class="section-title text-3xl sm:text-4xl font-bold text-green-400 mb-6">
                    "Get In Touch"
                </h2>
                <p class="contact-description text-gray-300 mb-12">
                    "Ready to build something amazing together? Let's discuss your next Full-Stack project."
                </p>
                <div class="contact-grid grid grid-cols-1 sm:grid-cols-3 gap-6 mb-12">
                    {CONTACT_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    class="contact-card flex flex-col items-center gap-3 p-6 rounded-lg border border-green-900/60 bg-black/70 text-green-400 hover:border-green-500 hover:text-green-200 transition-colors duration-200"
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    <LucideIcon icon=link.icon size=32 />
                                    <span>{link.label}</span>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="contact-footer text-gray-400 space-y-2">
                    <p>"Available for freelance projects and full-time opportunities."</p>
                    <p class="contact-tagline text-green-500">
                        "Let's build the future, one API at a time."
                    </p>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer relative z-10 py-6 text-center text-sm text-gray-500 border-t border-green-900/60">
            <p>{COPYRIGHT}</p>
        </footer>
    }
}
