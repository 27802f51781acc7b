//! Subcommand handlers. Each returns a process exit code.

use crate::cli::commands::{DetectArgs, ReadArgs};
use crate::detect::detect;
use crate::doc::{parse_front_matter, render, CONFIG_RELATIVE_PATH};
use crate::fs::RealFileSystem;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, error};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to write {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn project_root(arg: &Option<PathBuf>) -> PathBuf {
    arg.clone().unwrap_or_else(|| PathBuf::from("."))
}

/// Runs detection and prints (or writes) the rendered document.
pub fn handle_detect(args: &DetectArgs) -> i32 {
    let root = project_root(&args.project_root);
    let fs = RealFileSystem::new();

    let config = detect(&fs, &root);
    let document = render(&config);

    match &args.output {
        Some(path) => match write_output(path, &document) {
            Ok(()) => {
                debug!(path = %path.display(), "wrote rendered document");
                0
            }
            Err(err) => {
                error!("{err}");
                1
            }
        },
        None => {
            print!("{document}");
            0
        }
    }
}

fn write_output(path: &Path, document: &str) -> Result<(), CliError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| CliError::WriteOutput {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }
    std::fs::write(path, document).map_err(|source| CliError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads the config document back and prints its front-matter as JSON.
///
/// Always exits 0: a missing or malformed document prints `{}`.
pub fn handle_read(args: &ReadArgs) -> i32 {
    let root = project_root(&args.project_root);
    let config_path = root.join(CONFIG_RELATIVE_PATH);

    let parsed = match std::fs::read_to_string(&config_path) {
        Ok(text) => parse_front_matter(&text),
        Err(err) => {
            debug!(path = %config_path.display(), error = %err, "config document unreadable");
            serde_json::Value::Object(serde_json::Map::new())
        }
    };

    let json = serde_json::to_string(&parsed).unwrap_or_else(|_| "{}".to_string());
    println!("{json}");
    0
}
