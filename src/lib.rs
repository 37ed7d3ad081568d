/// The four character classes a password can be assembled from, and their alphabets.
pub mod charset;
/// Clipboard handling for front ends that want to hand a generated password to the user.
pub mod clipboard;
/// Reading of the user settings file, `settings.toml`.
pub mod config;
/// Password generation that guarantees at least one character from every selected class.
pub mod generator;
/// Heuristic strength rating of a password, on a 0 to 100 scale.
pub mod strength;

pub(crate) mod error;

pub use crate::error::{Error, Result};
