//! Error handling for the scaffolder application.
//! Defines the error taxonomy and result alias used throughout the crate.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for scaffolder operations.
///
/// This enum represents every failure that can occur while discovering,
/// decoding and materializing project descriptions.
#[derive(Error, Debug)]
pub enum Error {
    /// A required field (title, destination path, configuration path) is missing.
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// No usable configuration documents were found.
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// A configuration document could not be decoded.
    #[error("Decode error in '{}': {message}.", .path.display())]
    DecodeError { path: PathBuf, message: String },

    /// The project root already exists and holds files.
    #[error(
        "Destination '{}' already exists and is not empty; remove it or choose another destination.",
        .0.display()
    )]
    DestinationNotEmpty(PathBuf),

    /// A directory or file could not be created.
    #[error("IO error at '{}': {source}.", .path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A built-in template failed to render.
    #[error("Template error: {0}.")]
    TemplateError(String),

    /// The run was cancelled before the work started.
    #[error("Generation cancelled.")]
    Cancelled,

    /// A generation task did not run to completion.
    #[error("Task error: {0}.")]
    TaskError(String),

    /// One or more projects failed to generate.
    #[error("Generation failed for {} project(s):\n{}", .0.len(), FailureList(.0))]
    GenerationFailed(Vec<BuildFailure>),
}

impl Error {
    /// Wraps an [`io::Error`] together with the path that was being created.
    pub fn io<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Error::IoError { path: path.into(), source }
    }
}

impl From<minijinja::Error> for Error {
    fn from(err: minijinja::Error) -> Self {
        Error::TemplateError(err.to_string())
    }
}

/// The failure of a single project generation task.
#[derive(Debug)]
pub struct BuildFailure {
    /// Configuration document the failing project was decoded from.
    pub document: PathBuf,
    pub error: Error,
}

impl fmt::Display for BuildFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.document.display(), self.error)
    }
}

struct FailureList<'a>(&'a [BuildFailure]);

impl fmt::Display for FailureList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, failure) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  - {failure}")?;
        }
        Ok(())
    }
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
