use leptos::prelude::*;
use leptos_meta::Title;

use super::{
    background::{use_binary_rain, BinaryBackground, MatrixLines},
    contact::{ContactSection, Footer},
    icons::LucideIcon,
    navbar::{use_scroll_tracker, Brand, Navbar},
    projects::ProjectsSection,
    skills::SkillsSection,
    viewport::go_to,
};
use crate::{
    content::{Icon, OWNER},
    rain::BinaryString,
    section::Section,
};

/// The whole portfolio. Owns the page state; children only read it.
#[component]
pub fn HomePage() -> impl IntoView {
    let (active, set_active) = signal(Section::default());
    let (strings, set_strings) = signal(Vec::<BinaryString>::new());

    use_binary_rain(set_strings);
    use_scroll_tracker(active, set_active);

    view! {
        <Title text="Portfolio" />
        <div class="portfolio relative min-h-screen">
            <BinaryBackground strings />
            <MatrixLines />
            <Navbar active />
            <main class="main-content relative z-10 pt-20">
                <div class="text-center text-lg sm:text-2xl font-bold text-green-400 mt-8">
                    <Brand text=OWNER />
                </div>
                <Hero />
                <SkillsSection />
                <ProjectsSection />
                <ContactSection />
            </main>
            <Footer />
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section
            id=Section::Home.id()
            class="section hero-section flex min-h-screen items-center justify-center px-4"
        >
            <div class="hero-container max-w-3xl text-center">
                <div class="hero-icon inline-flex text-green-400 mb-8 animate-pulse">
                    <LucideIcon icon=Icon::Terminal size=80 />
                </div>
                <h1 class="hero-title text-5xl sm:text-7xl font-bold mb-6">
                    <span class="title-hello text-green-400">"Hello"</span>
                    <span class="title-world text-green-200">".World()"</span>
                </h1>
                <p class="hero-subtitle text-xl sm:text-2xl text-green-300 mb-6">
                    "Full-Stack Developer & System Engineer"
                </p>
                <div class="hero-description text-gray-300 leading-relaxed mb-10">
                    "Designing responsive web applications with clean, efficient code."
                    <br />
                    "Specializing in Back-end development, RESTful APIs, and database integration."
                </div>
                <div class="hero-buttons flex flex-col sm:flex-row gap-4 justify-center">
                    <button
                        class="btn btn-primary px-6 py-3 rounded-md font-bold bg-green-500 text-black hover:bg-green-400 transition-colors duration-200"
                        on:click=move |_| go_to(Section::Projects.id())
                    >
                        "View My Work"
                    </button>
                    <button
                        class="btn btn-secondary px-6 py-3 rounded-md font-bold border border-green-500 text-green-400 hover:bg-green-900/40 transition-colors duration-200"
                        on:click=move |_| go_to(Section::Contact.id())
                    >
                        "Get In Touch"
                    </button>
                </div>
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn test_renders_hero() {
        let html = Owner::new().with(|| view! { <Hero /> }.to_html());
        assert!(html.contains(r#"id="home""#));
        assert!(html.contains("Hello"));
        assert!(html.contains(".World()"));
        assert!(html.contains("View My Work"));
        assert!(html.contains("Get In Touch"));
    }
}
