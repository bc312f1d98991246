//! The components module contains Maud "partials". The highest-level component
//! is 'layout', which provides the document shell (head metadata and body) for
//! any page; 'page' is the landing page itself, built from smaller partials
//! such as the feature card.

pub mod feature_card;
pub mod layout;
pub mod page;

#[cfg(test)]
pub(crate) mod dom;
