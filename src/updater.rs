//! Persistence of a computed version bump
//!
//! Rewrites the `current_version` entry in the configuration file and every
//! occurrence of the old version string in the configured files. All file
//! contents are read and transformed before anything is written, so a read
//! failure leaves the project untouched.

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::config::Config;
use crate::error::{EbumpError, Result};
use crate::ui;

/// Old and new version strings of one bump
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VersionUpdate<'a> {
    pub old: &'a str,
    pub new: &'a str,
}

/// Apply a version update to the configuration file and the configured files.
///
/// With `dry_run` set, reports what would be written and modifies nothing.
pub fn apply_update(
    config_path: &Path,
    config: &Config,
    update: &VersionUpdate,
    dry_run: bool,
) -> Result<()> {
    let mut writes: Vec<(PathBuf, String)> = Vec::new();

    let config_text = fs::read_to_string(config_path).map_err(|e| {
        EbumpError::config(format!("cannot read '{}': {}", config_path.display(), e))
    })?;
    let rewritten = rewrite_current_version(&config_text, update.new)?;
    writes.push((config_path.to_path_buf(), rewritten));

    for file in &config.files {
        let path = Path::new(file);
        let text = fs::read_to_string(path)
            .map_err(|e| EbumpError::config(format!("cannot read '{}': {}", file, e)))?;
        if !text.contains(update.old) {
            ui::display_status(&format!("No occurrence of {} in '{}'", update.old, file));
            continue;
        }
        writes.push((path.to_path_buf(), text.replace(update.old, update.new)));
    }

    if dry_run {
        for (path, _) in &writes {
            ui::display_status(&format!("Would update '{}'", path.display()));
        }
        return Ok(());
    }

    for (path, content) in writes {
        fs::write(&path, content)?;
        ui::display_success(&format!("Updated '{}'", path.display()));
    }
    Ok(())
}

/// Replace the value of the `current_version` entry in a TOML document.
fn rewrite_current_version(text: &str, new_version: &str) -> Result<String> {
    let re = Regex::new(r#"(?m)^(\s*current_version\s*=\s*")([^"]*)(")"#)
        .map_err(|e| EbumpError::config(format!("internal pattern error: {}", e)))?;
    if !re.is_match(text) {
        return Err(EbumpError::config(
            "no 'current_version' entry found in the configuration file",
        ));
    }
    Ok(re
        .replace(text, |caps: &regex::Captures| {
            format!("{}{}{}", &caps[1], new_version, &caps[3])
        })
        .into_owned())
}
