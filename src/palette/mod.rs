//! Named collections of crayons.
//!
//! - [`CrayonBox`]: crayons stored by name, with a permanent `"base"` entry
//! - [`BoxError`]: why a store or remove was refused

mod crayon_box;
mod error;

pub use crayon_box::{CrayonBox, BASE};
pub use error::BoxError;
