/// The static page metadata. The host turns this into the `<title>` and
/// description tags of the document head, which is what search engines and
/// social media previews pick up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metadata {
    pub title: &'static str,
    pub description: &'static str,
}

pub const METADATA: Metadata = Metadata {
    title: "Gyft Ninja - AI-Powered Gift Recommendations",
    description: "Discover unbelievable gift ideas with AI-powered intelligence. \
        Stop guessing, start giving gifts that create unforgettable moments.",
};
