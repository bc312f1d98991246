//! The stylesheets, embedded into the binary at compile time.

use std::borrow::Cow;

use log::warn;
use rust_embed::Embed;
use sha2::{Digest, Sha256};

#[derive(Embed)]
#[folder = "assets"]
#[include = "*.css"]
pub struct Asset;

/// URL path prefix under which assets are served, relative to the page.
pub const ASSET_PREFIX: &str = "assets/";

pub const GLOBAL_STYLESHEET: &str = "globals.css";
pub const PAGE_STYLESHEET: &str = "page.css";

/// Returns the contents of an embedded asset as text.
pub fn asset_text(path: &str) -> Option<String> {
    Asset::get(path).map(|file| String::from_utf8_lossy(&file.data).into_owned())
}

/// Returns a short sha256 of the asset's contents, or None if there is no such
/// asset.
pub fn fingerprint(path: &str) -> Option<String> {
    Asset::get(path).map(|file| {
        let digest = Sha256::digest(&file.data);
        let mut hex = format!("{digest:x}");
        hex.truncate(16);
        hex
    })
}

/// Returns the href to use in a `<link>` tag for the stylesheet at `path`. The
/// fingerprint goes in the query string so that browsers fetch the new file
/// whenever the stylesheet changes.
pub fn stylesheet_href(path: &str) -> String {
    match fingerprint(path) {
        Some(fp) => format!("{ASSET_PREFIX}{path}?v={fp}"),
        None => {
            warn!("Stylesheet {path} is not embedded, linking to it without a fingerprint");
            format!("{ASSET_PREFIX}{path}")
        }
    }
}

/// The names of all embedded assets.
pub fn asset_names() -> impl Iterator<Item = Cow<'static, str>> {
    Asset::iter()
}
