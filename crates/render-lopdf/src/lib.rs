//! PDF renderer for badge scenes using lopdf.
//!
//! The whole document is built as an in-memory object graph and serialized
//! in one pass. Text uses the standard Helvetica faces, so no font programs
//! are embedded.

mod content;
mod renderer;
mod xobject;

pub use renderer::{FONT_BOLD, FONT_REGULAR, LopdfRenderer};
