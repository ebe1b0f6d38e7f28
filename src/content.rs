// SPDX-License-Identifier: MPL-2.0
//! Portfolio content shown on the page.
//!
//! All lists are fixed at build time. Order matters: it is the display order
//! and the only identity an entry has.

use crate::domain::portfolio::{IconKind, Proficiency, Project, Skill, SocialLink, Testimonial};

/// Brand shown in the navigation bar.
pub const BRAND: &str = "JamexTech";

/// Owner name used in the hero headline and footer.
pub const OWNER: &str = "Itam James";

/// Phrases cycled by the hero's typing headline.
pub const ROLES: &[&str] = &["Frontend Developer", "UI/UX Designer"];

pub const TAGLINE: &str = "Creating beautiful, responsive, and user-friendly web experiences.";

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        icon: IconKind::Github,
        url: "https://github.com/Codewarloc",
    },
    SocialLink {
        label: "LinkedIn",
        icon: IconKind::Linkedin,
        url: "https://linkedin.com",
    },
    SocialLink {
        label: "Email",
        icon: IconKind::Mail,
        url: "mailto:itamjames111@gmail.com",
    },
];

pub const SKILLS: &[Skill] = &[
    Skill {
        name: "Frontend Development",
        icon: IconKind::Monitor,
        proficiency: Proficiency::new(90),
    },
    Skill {
        name: "UI/UX Design",
        icon: IconKind::Palette,
        proficiency: Proficiency::new(85),
    },
    Skill {
        name: "Backend Development",
        icon: IconKind::Database,
        proficiency: Proficiency::new(75),
    },
    Skill {
        name: "React & TypeScript",
        icon: IconKind::Code,
        proficiency: Proficiency::new(95),
    },
    Skill {
        name: "Command Line & Git",
        icon: IconKind::Terminal,
        proficiency: Proficiency::new(80),
    },
    Skill {
        name: "Responsive Design",
        icon: IconKind::Globe,
        proficiency: Proficiency::new(90),
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Incredible Bridges Website",
        description: "A detailed documentary website about bridges and types of bridges",
        image: "https://images.pexels.com/photos/39284/macbook-apple-imac-computer-39284.jpeg",
        tags: &["React", "Node.js", "MongoDB"],
    },
    Project {
        title: "Task Management App",
        description: "Task management application with real-time collaboration features",
        image: "https://images.pexels.com/photos/265087/pexels-photo-265087.jpeg",
        tags: &["React", "TypeScript", "Tailwind"],
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "John Doe",
        feedback: "Itam did an amazing job on our website! The design is stunning and the user experience is flawless.",
        role: "CEO, TechCorp",
    },
    Testimonial {
        name: "Jane Smith",
        feedback: "Working with Itam was a pleasure. The project was delivered on time and exceeded our expectations.",
        role: "Product Manager, InnovateX",
    },
    Testimonial {
        name: "Samuel Green",
        feedback: "Highly professional and creative! Will definitely work with Itam again for future projects.",
        role: "Founder, StartUp Hub",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_levels_are_percentages() {
        assert!(SKILLS.iter().all(|s| s.proficiency.value() <= 100));
    }

    #[test]
    fn projects_have_tags() {
        assert!(PROJECTS.iter().all(|p| !p.tags.is_empty()));
    }

    #[test]
    fn project_images_are_https_urls() {
        assert!(PROJECTS.iter().all(|p| p.image.starts_with("https://")));
    }

    #[test]
    fn testimonials_are_non_empty() {
        assert_eq!(TESTIMONIALS.len(), 3);
    }

    #[test]
    fn hero_has_roles_to_type() {
        assert!(!ROLES.is_empty());
        assert!(ROLES.iter().all(|r| !r.is_empty()));
    }
}
