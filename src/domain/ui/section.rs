// SPDX-License-Identifier: MPL-2.0
//! Page sections and their scroll anchors.

/// A named section of the page, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    Skills,
    Projects,
    Testimonials,
    Contact,
}

impl SectionId {
    /// Every section in the order it appears on the page.
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Testimonials,
        SectionId::Contact,
    ];

    /// Sections reachable from the navigation bar, in link order.
    pub const NAV: [SectionId; 4] = [
        SectionId::Home,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// Position of the section in [`SectionId::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            SectionId::Home => 0,
            SectionId::Skills => 1,
            SectionId::Projects => 2,
            SectionId::Testimonials => 3,
            SectionId::Contact => 4,
        }
    }

    /// Anchor name of the section.
    #[must_use]
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Testimonials => "testimonials",
            SectionId::Contact => "contact",
        }
    }

    /// Link text: the anchor with its first letter capitalized.
    #[must_use]
    pub fn label(self) -> String {
        let anchor = self.anchor();
        let mut chars = anchor.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Resolves an anchor name back to its section.
    #[must_use]
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.anchor() == anchor)
    }

    #[must_use]
    pub fn is_in_nav(self) -> bool {
        Self::NAV.contains(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_sections_are_home_skills_projects_contact() {
        let anchors: Vec<_> = SectionId::NAV.iter().map(|s| s.anchor()).collect();
        assert_eq!(anchors, ["home", "skills", "projects", "contact"]);
    }

    #[test]
    fn labels_capitalize_anchor() {
        assert_eq!(SectionId::Home.label(), "Home");
        assert_eq!(SectionId::Contact.label(), "Contact");
    }

    #[test]
    fn anchors_are_unique_and_resolve() {
        for section in SectionId::ALL {
            assert_eq!(SectionId::from_anchor(section.anchor()), Some(section));
            let count = SectionId::ALL
                .iter()
                .filter(|other| other.anchor() == section.anchor())
                .count();
            assert_eq!(count, 1);
        }
        assert_eq!(SectionId::from_anchor("about"), None);
    }

    #[test]
    fn index_matches_document_order() {
        for (position, section) in SectionId::ALL.iter().enumerate() {
            assert_eq!(section.index(), position);
        }
    }

    #[test]
    fn testimonials_are_not_linked() {
        assert!(!SectionId::Testimonials.is_in_nav());
        assert!(SectionId::Skills.is_in_nav());
    }
}
