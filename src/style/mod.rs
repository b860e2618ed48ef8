//! Style codes and the crayons that draw with them.
//!
//! - [`Style`]: a single SGR code
//! - [`StyleCategory`]: the numeric range a code belongs to
//! - [`Crayon`]: an ordered list of codes bound to an [`Output`](crate::Output)
//! - [`colorize`]: one-shot wrapping without keeping a crayon around

mod code;
mod crayon;

pub use code::{Style, StyleCategory};
pub use crayon::{colorize, Crayon, ESCAPE};
