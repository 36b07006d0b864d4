//! Static page content.

/// A page section reachable from the nav bar
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct NavSection {
    pub id: &'static str,
    pub label: &'static str,
}

pub const SECTIONS: &[NavSection] = &[
    NavSection { id: "home", label: "Home" },
    NavSection { id: "about", label: "About" },
    NavSection { id: "skills", label: "Skills" },
    NavSection { id: "projects", label: "Projects" },
    NavSection { id: "contact", label: "Contact" },
];

pub const OWNER_NAME: &str = "Alex Morgan";
pub const HERO_INTRO: &str = "Hi, I'm";
pub const HERO_SUMMARY: &str =
    "I build reliable software that automates the boring parts and puts models to work where they help.";

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "I'm a software engineer focused on AI-assisted tooling, workflow automation and the web \
     services that tie them together.",
    "Most of my work sits between product and infrastructure: turning a rough idea into a \
     service that is observable, tested and easy to hand over.",
];

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SkillGroup {
    pub title: &'static str,
    pub icon: &'static str,
    pub items: &'static [&'static str],
}

/// Cards of the skills grid; each card is one staggered item
pub const SKILLS: &[SkillGroup] = &[
    SkillGroup {
        title: "Languages",
        icon: "fa-code",
        items: &["Rust", "Python", "TypeScript", "SQL"],
    },
    SkillGroup {
        title: "AI & Data",
        icon: "fa-brain",
        items: &["LLM integration", "Retrieval pipelines", "Evaluation harnesses"],
    },
    SkillGroup {
        title: "Automation",
        icon: "fa-robot",
        items: &["Workflow orchestration", "Browser automation", "CI/CD"],
    },
    SkillGroup {
        title: "Web",
        icon: "fa-globe",
        items: &["Dioxus", "React", "REST & WebSocket APIs"],
    },
];

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub link: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Inbox Triage Agent",
        description: "Classifies incoming support mail, drafts replies and routes edge cases to a human.",
        tags: &["Python", "LLM", "Automation"],
        link: "https://github.com/",
    },
    Project {
        title: "Release Notes Bot",
        description: "Turns merged pull requests into readable, grouped release notes on every tag.",
        tags: &["Rust", "GitHub API"],
        link: "https://github.com/",
    },
    Project {
        title: "Portfolio Site",
        description: "This page: a Dioxus web app with a typing hero, reveal-on-scroll and a contact form.",
        tags: &["Rust", "Dioxus", "WebAssembly"],
        link: "https://github.com/",
    },
];

/// Number of staggered items rendered in a section
pub fn stagger_item_count(section_id: &str) -> usize {
    match section_id {
        "projects" => PROJECTS.len(),
        "skills" => SKILLS.len(),
        _ => 0,
    }
}
