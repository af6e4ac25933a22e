//! Property tests for navmenu.
//!
//! Properties use randomized input generation to explore edge cases and
//! protect invariants like "never panics" and "renders the same twice".
//!
//! Run with: `cargo test --test properties`

#[path = "properties/render.rs"]
mod render;

#[path = "properties/identity.rs"]
mod identity;

#[path = "properties/markup.rs"]
mod markup;
