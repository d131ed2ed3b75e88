//! Text preprocessing in front of the diff engine.
//!
//! [`normalize`] applies the case / whitespace flags of a request, then
//! [`tokenize`] splits the result into borrowed elements for the chosen
//! [`DiffMode`](crate::diff::model::DiffMode).

pub mod normalize;
pub mod tokenize;

pub use normalize::normalize;
pub use tokenize::tokenize;
