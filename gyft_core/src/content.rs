//! The copy shown on the landing page. Everything here is a literal; the
//! components decide how it is laid out.

/// Language declared on the `<html>` element.
pub const LANG: &str = "en";

pub const BRAND: &str = "🎁 Gyft Ninja";

pub const VALUE_PROPOSITION_LEAD: &str = "Discover ";
pub const VALUE_PROPOSITION_HIGHLIGHT: &str = "unbelievable gift ideas";
pub const VALUE_PROPOSITION_TAIL: &str =
    " with AI-powered intelligence that knows exactly what your loved ones want";

pub const SUPPORTING_COPY: &str = "Stop guessing. Start giving gifts that create \
    unforgettable moments. Our intelligent platform analyzes personalities, \
    interests, and relationships to suggest the perfect gift every time.";

/// Label of the call-to-action button. The button is not wired to anything yet.
pub const CTA_LABEL: &str = "Find the Perfect Gift";

pub const FOOTER_TEXT: &str = "© 2024 Gyft Ninja - Making gift-giving an art form";

/// One card in the feature grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub heading: &'static str,
    pub description: &'static str,
    /// Text colour of the description.
    pub accent: &'static str,
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        icon: "🧠",
        heading: "AI-Powered Intelligence",
        description: "Advanced algorithms analyze personality traits and preferences",
        accent: "#14532d",
    },
    Feature {
        icon: "💝",
        heading: "Personalized Suggestions",
        description: "Tailored recommendations based on relationships and occasions",
        accent: "#7f1d1d",
    },
    Feature {
        icon: "✨",
        heading: "Unforgettable Moments",
        description: "Create lasting memories with gifts that truly matter",
        accent: "#bfa100",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_is_not_empty() {
        for s in [
            LANG,
            BRAND,
            VALUE_PROPOSITION_LEAD,
            VALUE_PROPOSITION_HIGHLIGHT,
            VALUE_PROPOSITION_TAIL,
            SUPPORTING_COPY,
            CTA_LABEL,
            FOOTER_TEXT,
        ] {
            assert!(!s.trim().is_empty());
        }

        for f in FEATURES {
            assert!(!f.icon.is_empty());
            assert!(!f.heading.is_empty());
            assert!(!f.description.is_empty());
            assert!(f.accent.starts_with('#'));
        }
    }

    #[test]
    fn supporting_copy_is_single_spaced() {
        assert!(!SUPPORTING_COPY.contains("  "));
        assert!(SUPPORTING_COPY.ends_with("the perfect gift every time."));
    }
}
