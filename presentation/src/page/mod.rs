//! Landing page
//!
//! - [`content`]: the static marketing copy
//! - [`landing::LandingPage`]: renders it for the terminal

pub mod content;
pub mod landing;

pub use landing::LandingPage;
