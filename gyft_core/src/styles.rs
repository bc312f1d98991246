//! Class names from the page stylesheet plus a small builder for inline
//! `style` attributes.
//!
//! The class names carry a `page-module__` prefix so that they cannot clash
//! with anything in `globals.css`. Every name here must have a selector in
//! `assets/page.css`.

use std::fmt::{self, Display, Write};

use maud::{Escaper, Render};

pub const PAGE: &str = "page-module__page";
pub const MAIN: &str = "page-module__main";
pub const CTAS: &str = "page-module__ctas";
pub const PRIMARY: &str = "page-module__primary";
pub const FOOTER: &str = "page-module__footer";

/// All scoped class names, in the order they appear in the stylesheet.
pub const SCOPED_CLASSES: [&str; 5] = [PAGE, MAIN, CTAS, PRIMARY, FOOTER];

/// The three-colour glow used under the button and the feature cards.
pub const GLOW_SHADOW: &str = "0 4px 24px 0 rgba(255, 215, 0, 0.18), \
    0 1.5px 6px 0 rgba(46, 204, 64, 0.10), \
    0 1.5px 6px 0 rgba(231, 76, 60, 0.10)";

/// An ordered list of CSS declarations, rendered as the value of a `style`
/// attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    declarations: Vec<(&'static str, &'static str)>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a declaration. Properties are written in kebab-case, exactly as
    /// they appear in CSS.
    pub fn with(mut self, property: &'static str, value: &'static str) -> Self {
        self.declarations.push((property, value));
        self
    }

    /// Appends all of `other`'s declarations after our own.
    pub fn extend(mut self, other: Style) -> Self {
        self.declarations.extend(other.declarations);
        self
    }
}

impl Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, (property, value)) in self.declarations.iter().enumerate() {
            if idx > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{property}: {value}")?;
        }

        Ok(())
    }
}

impl Render for Style {
    fn render_to(&self, buffer: &mut String) {
        // Writing into a String cannot fail.
        let _ = write!(Escaper::new(buffer), "{self}");
    }
}

/// The glow shadow, for anything that should look raised off the page.
pub fn glow() -> Style {
    Style::new().with("box-shadow", GLOW_SHADOW)
}

/// Declarations shared by the feature cards.
pub fn card() -> Style {
    Style::new()
        .with("text-align", "center")
        .with("padding", "2rem")
        .with("border-radius", "16px")
        .with("background", "linear-gradient(120deg, #fffbe9 60%, #ffd700 100%)")
        .with("border", "1.5px solid #ffd700")
        .extend(glow())
        .with("color", "#1a1a1a")
}
