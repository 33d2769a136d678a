//! Resolve the platform data directory used for persisted picker state.
//!
//! A `MOJIBOX_DATA_DIR` environment override wins over the
//! platform-appropriate location provided by the `directories` crate.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "mojibox";
const APPLICATION: &str = "mojibox";

const DATA_DIR_ENV: &str = "MOJIBOX_DATA_DIR";

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .ok_or_else(|| anyhow!("unable to determine project directories for mojibox"))
}

/// Resolve an override directory from an environment variable.
///
/// An empty value counts as unset so shell defaults like
/// `MOJIBOX_DATA_DIR=` do not redirect storage into the working directory.
fn dir_from_env(name: &str) -> Option<PathBuf> {
    let value = env::var_os(name)?;
    if value.is_empty() {
        None
    } else {
        Some(PathBuf::from(value))
    }
}

/// Return the data directory that stores the recently-used emoji list.
pub fn get_data_dir() -> Result<PathBuf> {
    if let Some(dir) = dir_from_env(DATA_DIR_ENV) {
        return Ok(dir);
    }

    Ok(project_dirs()?.data_local_dir().to_path_buf())
}
