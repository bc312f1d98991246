use maud::{html, Markup};

use crate::{
    components::feature_card::feature_card,
    content::{
        BRAND, CTA_LABEL, FEATURES, FOOTER_TEXT, SUPPORTING_COPY, VALUE_PROPOSITION_HIGHLIGHT,
        VALUE_PROPOSITION_LEAD, VALUE_PROPOSITION_TAIL,
    },
    styles::{self, Style},
};

/// The landing page: hero with brand title and pitch, the call-to-action
/// button, a grid of feature cards and the footer.
///
/// The button has no handler. Clicking it does nothing until there is
/// something for it to talk to.
pub fn home() -> Markup {
    html! {
        div class=(styles::PAGE) {
            main class=(styles::MAIN) {
                div style=(hero_style()) {
                    h1 style=(title_style()) { (BRAND) }

                    p style=(pitch_style()) {
                        (VALUE_PROPOSITION_LEAD)
                        strong { (VALUE_PROPOSITION_HIGHLIGHT) }
                        (VALUE_PROPOSITION_TAIL)
                    }

                    div style="margin-bottom: 3rem" {
                        p style=(supporting_style()) { (SUPPORTING_COPY) }
                    }

                    div class=(styles::CTAS) {
                        button type="button" class=(styles::PRIMARY) style=(cta_style()) {
                            (CTA_LABEL)
                        }
                    }
                }

                div style=(feature_grid_style()) {
                    @for feature in &FEATURES {
                        (feature_card(feature))
                    }
                }
            }

            footer class=(styles::FOOTER) {
                p style=(footer_style()) { (FOOTER_TEXT) }
            }
        }
    }
}

fn hero_style() -> Style {
    Style::new()
        .with("display", "flex")
        .with("flex-direction", "column")
        .with("align-items", "center")
        .with("justify-content", "center")
        .with("max-width", "600px")
        .with("margin", "0 auto")
        .with("text-align", "center")
}

/// Gradient text: the gradient is painted as the background and clipped to
/// the glyphs.
fn title_style() -> Style {
    Style::new()
        .with("font-size", "3.5rem")
        .with("font-weight", "bold")
        .with("margin-bottom", "1rem")
        .with("background", "linear-gradient(135deg, #2ecc40 0%, #ffd700 60%, #e74c3c 100%)")
        .with("-webkit-background-clip", "text")
        .with("-webkit-text-fill-color", "transparent")
        .with("background-clip", "text")
        .with("text-shadow", "0 2px 12px rgba(255, 215, 0, 0.18)")
}

fn pitch_style() -> Style {
    Style::new()
        .with("font-size", "1.5rem")
        .with("margin-bottom", "2rem")
        .with("color", "#666")
        .with("line-height", "1.6")
}

fn supporting_style() -> Style {
    Style::new()
        .with("font-size", "1.1rem")
        .with("color", "#888")
        .with("margin-bottom", "2rem")
        .with("line-height", "1.7")
}

fn cta_style() -> Style {
    Style::new()
        .with("background", "linear-gradient(135deg, #ffd700 0%, #2ecc40 60%, #e74c3c 100%)")
        .with("border", "none")
        .with("font-size", "1.1rem")
        .with("font-weight", "700")
        .with("padding", "0 32px")
        .with("height", "56px")
        .with("color", "#1a1a1a")
        .extend(styles::glow())
        .with("border-radius", "32px")
        .with("letter-spacing", "0.02em")
}

/// Cards are at least 250px wide, so the grid drops to fewer columns on
/// narrow screens.
fn feature_grid_style() -> Style {
    Style::new()
        .with("display", "grid")
        .with("grid-template-columns", "repeat(auto-fit, minmax(250px, 1fr))")
        .with("gap", "2rem")
        .with("margin-top", "4rem")
        .with("max-width", "800px")
}

fn footer_style() -> Style {
    Style::new()
        .with("color", "#888")
        .with("font-size", "0.9rem")
        .with("text-align", "center")
}
