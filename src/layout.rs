//! Path layout rules mapping logical section names to paths inside the
//! project root.

use std::path::{Component, Path, PathBuf};

use crate::constants::{
    CMD_DIR, CONFIG_DIR, DOC_DIR, EXAMPLE_DIR, PKG_DIR, SOURCE_EXTENSION, TYPES_DIR, VERSION_DIR,
};
use crate::error::{Error, Result};

/// Checks that `name` stays inside the directory it is joined onto.
///
/// Only plain path segments are accepted. An absolute name would replace the
/// base under `Path::join`, and `..` would climb out of it.
///
/// # Errors
/// * `Error::ValidationError` naming the offending `field`
pub fn validate_relative(field: &str, name: &str) -> Result<()> {
    let plain = Path::new(name)
        .components()
        .all(|component| matches!(component, Component::Normal(_)));
    if !plain {
        return Err(Error::ValidationError(format!(
            "{field} '{name}' must be a relative path without '.' or '..' segments"
        )));
    }
    Ok(())
}

/// Removes one trailing source suffix (`.go`) from a section key.
///
/// Only the exact suffix is removed, so `"logo.go"` becomes `"logo"` and
/// `"go"` stays `"go"`.
pub fn strip_source_suffix(key: &str) -> &str {
    let suffix = format!(".{SOURCE_EXTENSION}");
    key.strip_suffix(suffix.as_str())
        .filter(|stem| !stem.is_empty())
        .unwrap_or(key)
}

/// `<name>.<ext>`
pub fn source_file_name(name: &str) -> String {
    format!("{name}.{SOURCE_EXTENSION}")
}

pub fn version_path(root: &Path) -> PathBuf {
    root.join(VERSION_DIR).join(source_file_name(VERSION_DIR))
}

pub fn example_path(root: &Path) -> PathBuf {
    root.join(EXAMPLE_DIR).join(source_file_name(EXAMPLE_DIR))
}

/// A lone command sits directly in `cmd/`, several each get their own directory.
pub fn command_path(root: &Path, name: &str, total: usize) -> PathBuf {
    if total == 1 {
        root.join(CMD_DIR).join(source_file_name(name))
    } else {
        root.join(CMD_DIR).join(name).join(source_file_name(name))
    }
}

/// A lone package is written as `pkg/pkg.<ext>` regardless of its name.
pub fn package_path(root: &Path, name: &str, total: usize) -> PathBuf {
    if total == 1 {
        root.join(PKG_DIR).join(source_file_name(PKG_DIR))
    } else {
        root.join(PKG_DIR).join(name).join(source_file_name(name))
    }
}

pub fn doc_path(root: &Path, name: &str) -> PathBuf {
    root.join(DOC_DIR).join(name)
}

pub fn type_path(root: &Path, name: &str) -> PathBuf {
    root.join(TYPES_DIR).join(source_file_name(name))
}

pub fn config_path(root: &Path, name: &str) -> PathBuf {
    root.join(CONFIG_DIR).join(name)
}

pub fn catalog_path(root: &Path, name: &str) -> PathBuf {
    root.join(name).join(source_file_name(name))
}

/// Package path component used by the Makefile's `go install` lines.
pub fn command_install_path(name: &str, total: usize) -> String {
    if total == 1 {
        CMD_DIR.to_string()
    } else {
        format!("{CMD_DIR}/{name}")
    }
}
