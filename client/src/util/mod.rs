//! Browser and presentation helpers shared by the board components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keeps `web_sys` access and style-string building out of the components so
//! the pure parts can be tested natively.

pub mod browser;
pub mod local_storage;
pub mod note_style;
