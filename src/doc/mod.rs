//! The discipline-config document dialect.
//!
//! A front-matter block between two `---` marker lines holds nested
//! key/value and list data; everything after the closing marker is free-form
//! prose. [`render`] and [`parse_front_matter`] implement the two halves of
//! the same grammar: everything the renderer can emit must survive a parse
//! with no information loss.

mod parse;
mod render;

pub use parse::parse_front_matter;
pub use render::render;

/// Where the rendered document lives, relative to the project root. This
/// crate only produces and re-reads the text; writing it there is the
/// caller's job.
pub const CONFIG_RELATIVE_PATH: &str = ".stackscan/stack.local.md";

/// Front-matter delimiter, used verbatim for both the opening and closing
/// marker line.
pub const FRONT_MATTER_MARKER: &str = "---";
