//! Reactive board state shared through Leptos context.

pub mod board;
pub mod handle;
