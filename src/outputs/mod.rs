//! Renderers for a finished fetch.
//!
//! # Submodules
//!
//! - [`cards`]: One Markdown-style card per article for reading in a terminal
//! - [`json`]: The article list as pretty-printed JSON for piping elsewhere

pub mod cards;
pub mod json;
