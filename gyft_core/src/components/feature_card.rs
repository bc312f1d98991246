use maud::{html, Markup};

use crate::{
    content::Feature,
    styles::{self, Style},
};

/// Renders one card of the feature grid: an icon, a heading and a short
/// description in the card's accent colour.
pub fn feature_card(feature: &Feature) -> Markup {
    let icon_style = Style::new()
        .with("font-size", "2.5rem")
        .with("margin-bottom", "1rem");

    let heading_style = Style::new()
        .with("margin-bottom", "0.5rem")
        .with("font-size", "1.2rem");

    let description_style = Style::new()
        .with("color", feature.accent)
        .with("font-size", "0.9rem")
        .with("font-weight", "600");

    html! {
        div style=(styles::card()) {
            div style=(icon_style) { (feature.icon) }
            h3 style=(heading_style) { (feature.heading) }
            p style=(description_style) { (feature.description) }
        }
    }
}
