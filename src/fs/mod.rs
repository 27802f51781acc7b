//! Filesystem abstraction for testable probing

mod mock;
mod real;
mod r#trait;

pub use mock::MockFileSystem;
pub use r#trait::{DirEntry, FileSystem};
pub use real::RealFileSystem;
