//! About, skills and projects sections.
//!
//! Each section starts hidden and gains `visible` when the observer reports
//! it. Skill cards and project cards fade in one after another.

use dioxus::prelude::*;

use crate::content::{ABOUT_PARAGRAPHS, PROJECTS, SKILLS};
use crate::context::{use_page, PageContext};

/// Class list for a `.section`, with `visible` once revealed
pub(crate) fn section_class(page: &PageContext, id: &str, extra: &str) -> String {
    let mut class = String::from(extra);
    if !class.is_empty() {
        class.push(' ');
    }
    class.push_str("section");
    if page.is_revealed(id) {
        class.push_str(" visible");
    }
    class
}

fn item_class(base: &str, faded: bool) -> String {
    if faded {
        format!("{base} fade-in")
    } else {
        base.to_string()
    }
}

#[component]
pub fn About() -> Element {
    let page = use_page();
    let class = section_class(&page, "about", "");

    rsx! {
        section { id: "about", class: "{class}",
            div { class: "container",
                h2 { class: "section-title", "About Me" }
                div { class: "about-text",
                    for paragraph in ABOUT_PARAGRAPHS.iter() {
                        p { "{paragraph}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Skills() -> Element {
    let page = use_page();
    let class = section_class(&page, "skills", "");

    rsx! {
        section { id: "skills", class: "{class}",
            div { class: "container",
                h2 { class: "section-title", "Skills" }
                div { class: "skills-grid",
                    for (index, group) in SKILLS.iter().enumerate() {
                        div {
                            key: "{group.title}",
                            class: item_class("skill-card", page.is_faded("skills", index)),
                            i { class: "fas {group.icon}" }
                            h3 { "{group.title}" }
                            ul {
                                for item in group.items.iter() {
                                    li { "{item}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Projects() -> Element {
    let page = use_page();
    let class = section_class(&page, "projects", "");

    rsx! {
        section { id: "projects", class: "{class}",
            div { class: "container",
                h2 { class: "section-title", "Projects" }
                div { class: "projects-grid",
                    for (index, project) in PROJECTS.iter().enumerate() {
                        article {
                            key: "{project.title}",
                            class: item_class("project-card", page.is_faded("projects", index)),
                            h3 { "{project.title}" }
                            p { "{project.description}" }
                            div { class: "project-tags",
                                for tag in project.tags.iter() {
                                    span { class: "tag", "{tag}" }
                                }
                            }
                            a {
                                class: "project-link",
                                href: "{project.link}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                i { class: "fab fa-github" }
                                " Source"
                            }
                        }
                    }
                }
            }
        }
    }
}
