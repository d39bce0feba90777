use leptos::prelude::*;

use super::icons::LucideIcon;
use crate::{
    content::{Icon, Project, PROJECTS},
    section::Section,
};

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="section projects-section py-24 px-4">
            <div class="projects-container max-w-6xl mx-auto">
                <h2 class="section-title text-3xl sm:text-4xl font-bold text-center text-green-400 mb-12">
                    "Featured Projects"
                </h2>
                <div class="projects-grid grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {PROJECTS
                        .iter()
                        .map(|project| view! { <ProjectCard project=*project /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <div class="project-card flex flex-col p-6 rounded-lg border border-green-900/60 bg-black/70 hover:border-green-500 transition-colors duration-200">
            <h3 class="project-title text-xl font-bold text-green-300 mb-3">{project.title}</h3>
            <p class="project-description text-gray-300 text-sm leading-relaxed mb-4 flex-grow">
                {project.description}
            </p>
            <div class="project-tech flex flex-wrap gap-2 mb-4">
                {project
                    .tech
                    .iter()
                    .map(|tech| {
                        view! {
                            <span class="tech-tag text-xs px-2 py-1 rounded bg-green-950 text-green-400">
                                {*tech}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="project-links flex gap-4 text-green-400">
                <a
                    href=project.github
                    class="project-link hover:text-green-200"
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label="Source code"
                >
                    <LucideIcon icon=Icon::Github size=20 />
                </a>
                <a
                    href=project.live
                    class="project-link hover:text-green-200"
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label="Live demo"
                >
                    <LucideIcon icon=Icon::ExternalLink size=20 />
                </a>
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn test_renders_every_project() {
        let html = Owner::new().with(|| view! { <ProjectsSection /> }.to_html());
        assert!(html.contains(r#"id="projects""#));
        assert_eq!(html.matches("project-card").count(), 3);
        assert_eq!(html.matches("project-link ").count(), 6);
        for project in PROJECTS.iter() {
            assert!(html.contains(project.github));
            assert!(html.contains(project.live));
            for tech in project.tech {
                assert!(html.contains(tech), "missing tag {tech}");
            }
        }
        assert_eq!(html.matches("tech-tag").count(), 9);
    }
}
