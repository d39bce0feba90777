use leptos::prelude::*;

use super::icons::LucideIcon;
use crate::{
    content::{stagger_delay, Skill, EXPERTISE, SKILLS},
    section::Section,
};

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <section id=Section::Skills.id() class="section skills-section py-24 px-4">
            <div class="skills-container max-w-5xl mx-auto">
                <h2 class="section-title text-3xl sm:text-4xl font-bold text-center text-green-400 mb-12">
                    "Technical Skills"
                </h2>
                <div class="skills-grid grid grid-cols-1 md:grid-cols-2 gap-6 mb-16">
                    {SKILLS
                        .iter()
                        .enumerate()
                        .map(|(index, skill)| view! { <SkillBar skill=*skill index /> })
                        .collect_view()}
                </div>
                <div class="skills-icons grid grid-cols-2 md:grid-cols-4 gap-6">
                    {EXPERTISE
                        .iter()
                        .map(|e| {
                            view! {
                                <div class="skill-icon flex flex-col items-center gap-3 p-6 rounded-lg border border-green-900/60 bg-black/60 text-green-400">
                                    <LucideIcon icon=e.icon size=40 />
                                    <p class="text-sm text-gray-300">{e.label}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillBar(skill: Skill, index: usize) -> impl IntoView {
    let level = format!("{}%", skill.level);
    view! {
        <div class="skill-item">
            <div class="skill-header flex justify-between mb-2">
                <span class="skill-name text-green-300">{skill.name}</span>
                <span class="skill-percentage text-green-500">{level.clone()}</span>
            </div>
            <div class="skill-bar h-2 rounded-full bg-green-950 overflow-hidden">
                <div
                    class="skill-progress h-full rounded-full bg-green-400"
                    style:width=level
                    style:animation-delay=stagger_delay(index)
                ></div>
            </div>
        </div>
    }
}
