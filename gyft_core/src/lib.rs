#![forbid(unsafe_code)]

pub mod assets;
pub mod components;
pub mod content;
mod error;
pub mod metadata;
pub mod site;
pub mod styles;

pub use error::GyftError;
