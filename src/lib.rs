//! # Crayons - ANSI SGR styling with a monochrome fallback
//!
//! Build a [`Crayon`] from [`Style`] codes, then use it to wrap strings or
//! draw text to an [`Output`]. When the output is not an interactive
//! terminal, crayons draw plain text.
//!
//! ## Quick Start
//!
//! ```rust
//! use crayons::{Output, Style};
//!
//! let (output, capture) = Output::capture(false);
//! let crayon = output.crayon([Style::FgBrightCyan, Style::BgBlack]);
//!
//! crayon.print("hello").unwrap();
//! assert_eq!(capture.contents(), "\x1b[96;40mhello\x1b[0m");
//! ```
//!
//! On a real program, start from [`Output::stdout`], which turns styling
//! off when stdout isn't a terminal.
//!
//! ## Outputs
//!
//! An [`Output`] bundles the sink with a monochrome flag. Every crayon keeps
//! a handle to the output it was built on, so:
//!
//! - [`Output::set_sink`] redirects every crayon at once
//! - [`Output::set_monochrome`] turns styling off for every crayon, and
//!   while it is on a crayon can't turn its own styling back on
//!
//! ## Boxes
//!
//! A [`CrayonBox`] keeps crayons by name, with a permanent `"base"` entry
//! that [`CrayonBox::pick`] returns for unknown names:
//!
//! ```rust
//! use std::sync::Arc;
//! use crayons::{BoxError, CrayonBox, Output, Style};
//!
//! let (output, _capture) = Output::capture(false);
//! let mut crayons = CrayonBox::new(&output, None);
//! crayons.store("error", Arc::new(output.crayon([Style::FgRed, Style::Bold]))).unwrap();
//!
//! assert_eq!(crayons.pick("error").wrap("boom"), "\x1b[31;1mboom\x1b[0m");
//! assert_eq!(crayons.remove("base"), Err(BoxError::RemoveBase));
//! ```

pub mod output;
pub mod palette;
pub mod style;

pub use output::{Capture, Output, OutputMode};
pub use palette::{BoxError, CrayonBox, BASE};
pub use style::{colorize, Crayon, Style, StyleCategory, ESCAPE};
