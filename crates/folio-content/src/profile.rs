//! Profile data: identity, focus areas, tech stack, and contact channels.

use crate::model::{ContactChannel, FocusArea, WorkPreference};

/// Site owner identity used by page chrome and the home page hero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub intro: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Vladyslav Kovalchuk",
    headline: "Frontend engineer building interfaces that work.",
    intro: "I help product teams ship reliable, performant web applications. Focused on React, TypeScript, and the kind of frontend architecture that holds up under real-world complexity.",
};

/// Focus areas shown on the home page.
pub const FOCUS_AREAS: &[FocusArea] = &[
    FocusArea {
        title: "Component architecture",
        description: "Designing systems that stay maintainable as products scale — clear boundaries, minimal coupling, predictable data flow.",
    },
    FocusArea {
        title: "Performance",
        description: "Keeping interfaces fast through measured optimization: code splitting, render efficiency, and disciplined dependency management.",
    },
    FocusArea {
        title: "Developer experience",
        description: "Building tools and patterns that help teams ship confidently — type safety, testing strategies, and clear documentation.",
    },
];

/// Working-environment preferences shown on the hire page.
pub const BEST_WITH: &[WorkPreference] = &[
    WorkPreference {
        title: "Product-driven teams",
        description: "I work best when engineers are close to the product decisions. I want to understand why we are building something, not just how.",
    },
    WorkPreference {
        title: "Complex web applications",
        description: "SPAs, dashboards, collaborative tools, developer-facing products — interfaces where architecture matters and performance is a feature.",
    },
    WorkPreference {
        title: "Teams that value code quality",
        description: "Testing, code review, incremental delivery. I prefer teams that move with confidence over teams that just move fast.",
    },
];

/// Tech stack tags shown on the hire page.
pub const TECH_STACK: &[&str] = &[
    "React",
    "TypeScript",
    "Next.js",
    "Tailwind CSS",
    "Node.js",
    "PostgreSQL",
    "Git",
    "Figma",
    "Storybook",
    "Playwright",
    "Vitest",
    "CI/CD",
];

/// Contact channels shown in the footer and on the hire page.
pub const CONTACTS: &[ContactChannel] = &[
    ContactChannel {
        label: "Email",
        href: "mailto:hello@vladkovalchuk.dev",
        handle: "hello@vladkovalchuk.dev",
    },
    ContactChannel {
        label: "GitHub",
        href: "https://github.com/vladyslav-kovalchuk",
        handle: "vladyslav-kovalchuk",
    },
    ContactChannel {
        label: "LinkedIn",
        href: "https://linkedin.com/in/vladyslav-kovalchuk",
        handle: "vladyslav-kovalchuk",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_hrefs_well_formed() {
        for contact in CONTACTS {
            assert!(
                contact.href.starts_with("https://") || contact.href.starts_with("mailto:"),
                "{}",
                contact.label
            );
        }
    }

    #[test]
    fn test_three_focus_areas() {
        assert_eq!(FOCUS_AREAS.len(), 3);
        assert_eq!(BEST_WITH.len(), 3);
    }
}
