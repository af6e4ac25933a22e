//! Markup primitives
//!
//! Small building blocks the menu engine renders through:
//!
//! - `escape` - HTML escaping and tag stripping
//! - `attributes` - ordered attribute map with merge semantics
//! - `tag` - a named element with content buffers and a level

mod attributes;
mod escape;
mod tag;

pub use attributes::{AttrValue, Attributes};
pub use escape::{esc, strip_tags};
pub use tag::{Tag, TagHandler};
