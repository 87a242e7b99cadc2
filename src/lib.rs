//! Generate a placeholder set of PWA icons.
//!
//! Each icon is a square PNG with a ringed background, a ball and a small
//! highlight. Binaries built without the `raster` feature write a browser-based
//! generator page instead.

pub mod error;
pub mod fallback;
pub mod icon;
pub mod icon_gen;
pub mod install;
pub mod manifest;
pub mod render;

pub use error::{Error, Result};
pub use icon_gen::{generate_icons, Args, Outcome};
