//! Configuration document discovery and decoding.
//! A configuration path is either a single document or a directory whose
//! top-level documents are all picked up.

use globset::{Glob, GlobSet, GlobSetBuilder};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::constants::CONFIG_PATTERNS;
use crate::error::{Error, Result};
use crate::model::ProjectModel;

/// Textual formats a project description can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Toml,
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Picks the format from the file extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        match path.as_ref().extension()?.to_str()? {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Decodes `content` into a project model.
    pub fn decode(self, content: &str) -> std::result::Result<ProjectModel, String> {
        match self {
            Self::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

/// Builds the set of file name patterns recognized as configuration documents.
pub fn config_patterns() -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in CONFIG_PATTERNS {
        builder.add(Glob::new(pattern).map_err(|e| Error::ConfigError(e.to_string()))?);
    }
    builder.build().map_err(|e| Error::ConfigError(e.to_string()))
}

/// Resolves a configuration path into the list of documents to process.
///
/// # Errors
/// * `Error::ValidationError` if `path` is empty
/// * `Error::ConfigError` if the named document does not exist, the directory
///   cannot be listed, or it holds no recognized document
pub fn discover_documents(path: &str) -> Result<Vec<PathBuf>> {
    let path = path.trim();
    if path.is_empty() {
        return Err(Error::ValidationError("configuration path is empty".to_string()));
    }

    let path = PathBuf::from(path);
    if DocumentFormat::from_path(&path).is_some() {
        if !path.is_file() {
            return Err(Error::ConfigError(format!(
                "configuration file '{}' does not exist",
                path.display()
            )));
        }
        debug!("Using configuration document {}", path.display());
        return Ok(vec![path]);
    }

    let patterns = config_patterns()?;
    let mut documents = Vec::new();
    for entry in WalkDir::new(&path).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            Error::ConfigError(format!("cannot list directory '{}': {}", path.display(), e))
        })?;
        if !entry.file_type().is_file() || !patterns.is_match(entry.file_name()) {
            continue;
        }
        debug!("Found configuration document {}", entry.path().display());
        documents.push(entry.into_path());
    }

    if documents.is_empty() {
        return Err(Error::ConfigError(format!(
            "directory '{}' contains no configuration documents (tried: {})",
            path.display(),
            CONFIG_PATTERNS.join(", ")
        )));
    }
    Ok(documents)
}

/// Reads and decodes a single configuration document.
///
/// # Errors
/// * `Error::IoError` if the document cannot be read
/// * `Error::DecodeError` if the document is malformed, is not UTF-8 or has an
///   unknown format
pub fn decode_document(path: &Path) -> Result<ProjectModel> {
    let format = DocumentFormat::from_path(path).ok_or_else(|| Error::DecodeError {
        path: path.to_path_buf(),
        message: "unrecognized document format".to_string(),
    })?;
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    let content = String::from_utf8(bytes).map_err(|e| Error::DecodeError {
        path: path.to_path_buf(),
        message: format!("document is not valid UTF-8: {e}"),
    })?;

    format
        .decode(&content)
        .map_err(|message| Error::DecodeError { path: path.to_path_buf(), message })
}

/// Decodes every document, keeping the path each model came from.
///
/// Documents that describe nothing at all are skipped. The first malformed
/// document aborts the whole batch.
///
/// # Errors
/// * `Error::DecodeError` on the first malformed document
/// * `Error::ConfigError` if no usable model remains
pub fn load_config_documents(paths: &[PathBuf]) -> Result<Vec<(PathBuf, ProjectModel)>> {
    let mut models = Vec::new();
    for path in paths {
        let model = decode_document(path)?;
        if model == ProjectModel::default() {
            warn!("Skipping empty configuration document {}", path.display());
            continue;
        }
        models.push((path.clone(), model));
    }

    if models.is_empty() {
        return Err(Error::ConfigError("no usable configuration documents".to_string()));
    }
    Ok(models)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_format_from_path() {
        assert_eq!(DocumentFormat::from_path("a.toml"), Some(DocumentFormat::Toml));
        assert_eq!(DocumentFormat::from_path("a.json"), Some(DocumentFormat::Json));
        assert_eq!(DocumentFormat::from_path("a.yml"), Some(DocumentFormat::Yaml));
        assert_eq!(DocumentFormat::from_path("a.yaml"), Some(DocumentFormat::Yaml));
        assert_eq!(DocumentFormat::from_path("configs"), None);
        assert_eq!(DocumentFormat::from_path("a.txt"), None);
    }

    #[test]
    fn test_config_patterns() {
        let patterns = config_patterns().unwrap();
        assert!(patterns.is_match("project.toml"));
        assert!(patterns.is_match("project.yml"));
        assert!(!patterns.is_match("project.toml.bak"));
        assert!(!patterns.is_match("README.md"));
    }
}
