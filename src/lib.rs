//! stackscan - heuristic project stack detection
//!
//! This library infers a project's technology stack from a small, fixed set
//! of filesystem probes and dependency manifests, and renders the result as
//! a front-matter config document that can be read back losslessly.
//!
//! # Core Concepts
//!
//! - **Detection**: priority-ordered tables map marker files, lockfiles, and
//!   dependency names to a flat stack profile; first match wins per field
//! - **Structure inference**: workspace member directories are classified
//!   into semantic roles (API app, web app, shared package) by name
//! - **The document dialect**: a restricted front-matter grammar (two
//!   nesting levels plus lists of scalars) rendered and parsed by matching
//!   hand-rolled halves, with no general-purpose document library
//!
//! # Example
//!
//! ```no_run
//! use stackscan::{detect, render, parse_front_matter, RealFileSystem};
//! use std::path::Path;
//!
//! let fs = RealFileSystem::new();
//! let config = detect(&fs, Path::new("."));
//! let document = render(&config);
//!
//! // Later, possibly after hand-edits:
//! let view = parse_front_matter(&document);
//! assert_eq!(view["disciplines"]["plan_enforcement"], true);
//! ```
//!
//! # Project Structure
//!
//! - [`fs`]: filesystem probing abstraction (real and mock)
//! - [`manifest`]: package.json access and dependency collection
//! - [`detect`]: classifier, structure inference, verification extraction
//! - [`doc`]: the renderer/parser pair for the config dialect

pub mod cli;
pub mod detect;
pub mod doc;
pub mod fs;
pub mod manifest;
pub mod util;

pub use detect::{
    detect, DisciplineFlags, ProjectConfig, StackProfile, StructureProfile, VerificationMap,
};
pub use doc::{parse_front_matter, render, CONFIG_RELATIVE_PATH};
pub use fs::{FileSystem, MockFileSystem, RealFileSystem};
pub use manifest::{DependencySet, PackageManifest};
pub use util::{init_default, init_from_env, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
