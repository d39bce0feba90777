//! Hand-authored page content. Everything here is fixed at compile time.

pub const BRAND: &str = "FullStack.Dev";
pub const OWNER: &str = "Menan.Mohamed.AboDahab";
pub const EMAIL: &str = "aboeldahabmenan@gmail.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Terminal,
    Database,
    Server,
    Code,
    Wallpaper,
    Mail,
    Github,
    Linkedin,
    ExternalLink,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Percentage, 0-100
    pub level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expertise {
    pub label: &'static str,
    pub icon: Icon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub github: &'static str,
    pub live: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Icon,
}

pub const SKILLS: [Skill; 6] = [
    Skill {
        name: "Node.js",
        level: 90,
    },
    Skill {
        name: ".Net",
        level: 85,
    },
    Skill {
        name: "MYSQL",
        level: 70,
    },
    Skill {
        name: "React",
        level: 70,
    },
    Skill {
        name: "Docker",
        level: 80,
    },
    Skill {
        name: "AWS",
        level: 75,
    },
];

pub const EXPERTISE: [Expertise; 4] = [
    Expertise {
        label: "Database Design",
        icon: Icon::Database,
    },
    Expertise {
        label: "Server Architecture",
        icon: Icon::Server,
    },
    Expertise {
        label: "API Development",
        icon: Icon::Code,
    },
    Expertise {
        label: "Frontend",
        icon: Icon::Wallpaper,
    },
];

pub const PROJECTS: [Project; 3] = [
    Project {
        title: "Mail Application",
        description: "Developed an email system where users can send, receive, and manage emails.",
        tech: &["Node.js", "MYSQL", "React"],
        github: "https://github.com/Menan-Mohamed/MailApplication",
        live: "https://drive.google.com/file/d/1tbEfP3HJs0Uza8qfJW3InkVsJc5lfNzU/view?usp=sharing",
    },
    Project {
        title: "Producer & Consumer Simulation",
        description: "Built a web-based simulation of the Producer-Consumer problem in real time.",
        tech: &["React", "WebSocket", "Node.js", "Threads"],
        github: "https://github.com/Menan-Mohamed/Producer_Consumer",
        live: "https://drive.google.com/file/d/17SGjchn9qbAPaVB1QHTaDdgdAs2DIz9k/view?usp=sharing",
    },
    Project {
        title: "Virtual Painter",
        description: "Designed a tool that lets users draw in the air using hand movements. Used OpenCV to track hand gestures and create virtual drawings.",
        tech: &["Python", "Computer Vision"],
        github: "https://github.com/Menan-Mohamed/VirtualPainter",
        live: "https://drive.google.com/file/d/1Wn1t1mKspPzt1vLziii6Slbo1z1k0Ac6/view?usp=sharing",
    },
];

pub const CONTACT_LINKS: [ContactLink; 3] = [
    ContactLink {
        label: "Email",
        href: "mailto:aboeldahabmenan@gmail.com",
        icon: Icon::Mail,
    },
    ContactLink {
        label: "GitHub",
        href: "https://github.com/Menan-Mohamed",
        icon: Icon::Github,
    },
    ContactLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/menan-mohamed-bb6625264/",
        icon: Icon::Linkedin,
    },
];

/// CSS `animation-delay` for the `index`th item of a staggered row (0.1s apart).
pub fn stagger_delay(index: usize) -> String {
    format!("{:.1}s", index as f64 * 0.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_table() {
        let expected = [
            ("Node.js", 90),
            (".Net", 85),
            ("MYSQL", 70),
            ("React", 70),
            ("Docker", 80),
            ("AWS", 75),
        ];
        assert_eq!(SKILLS.len(), expected.len());
        for (skill, (name, level)) in SKILLS.iter().zip(expected) {
            assert_eq!(skill.name, name);
            assert_eq!(skill.level, level);
        }
        assert!(SKILLS.iter().all(|s| s.level <= 100));
    }

    #[test]
    fn test_project_table() {
        assert_eq!(PROJECTS.len(), 3);

        let mail = &PROJECTS[0];
        assert_eq!(mail.title, "Mail Application");
        assert_eq!(mail.tech, &["Node.js", "MYSQL", "React"]);

        let sim = &PROJECTS[1];
        assert_eq!(sim.title, "Producer & Consumer Simulation");
        assert_eq!(sim.tech, &["React", "WebSocket", "Node.js", "Threads"]);

        let painter = &PROJECTS[2];
        assert_eq!(painter.title, "Virtual Painter");
        assert_eq!(painter.tech, &["Python", "Computer Vision"]);

        for p in PROJECTS.iter() {
            assert!(p.github.starts_with("https://github.com/Menan-Mohamed/"));
            assert!(p.live.starts_with("https://drive.google.com/"));
        }
    }

    #[test]
    fn test_contact_links() {
        let labels = CONTACT_LINKS.iter().map(|c| c.label).collect::<Vec<_>>();
        assert_eq!(labels, vec!["Email", "GitHub", "LinkedIn"]);
        assert_eq!(CONTACT_LINKS[0].href, format!("mailto:{}", EMAIL));
    }

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay(0), "0.0s");
        assert_eq!(stagger_delay(3), "0.3s");
        assert_eq!(stagger_delay(19), "1.9s");
    }
}
