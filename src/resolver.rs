//! Fan-out of independent generation runs, one per configuration document.

use log::{debug, error, info, warn};
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;

use crate::builder::Builder;
use crate::error::{BuildFailure, Error, Result};
use crate::loader::{discover_documents, load_config_documents};

/// Discovers configuration documents and drives one [`Builder`] per document.
#[derive(Debug)]
pub struct Resolver {
    cancel: CancellationToken,
    paths: Vec<PathBuf>,
}

impl Resolver {
    /// Creates a resolver for a single document or a directory of documents.
    ///
    /// # Errors
    /// * `Error::ValidationError` if `path` is empty
    /// * `Error::ConfigError` if no configuration document can be found
    pub fn new<S: AsRef<str>>(cancel: CancellationToken, path: S) -> Result<Self> {
        let paths = discover_documents(path.as_ref())?;
        Ok(Self { cancel, paths })
    }

    /// Documents this resolver will process, in discovery order.
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Decodes every document and generates all projects concurrently.
    ///
    /// Every document is decoded before any project is generated, so a
    /// malformed document leaves the filesystem untouched. Generation runs
    /// are independent: one failing project never stops its siblings, and
    /// every failure is reported.
    ///
    /// # Returns
    /// * `Result<Vec<PathBuf>>` - Roots of the generated projects, in document order
    ///
    /// # Errors
    /// * `Error::DecodeError` if any document is malformed
    /// * `Error::ConfigError` if no usable document remains
    /// * `Error::Cancelled` if cancellation stopped every run before it started
    /// * `Error::GenerationFailed` listing each document whose run failed
    pub async fn start(&self) -> Result<Vec<PathBuf>> {
        let models = load_config_documents(&self.paths)?;
        info!("Generating {} project(s)", models.len());

        let mut outcomes = Vec::with_capacity(models.len());
        for (document, model) in models {
            if self.cancel.is_cancelled() {
                warn!("Cancelled before generating {}", document.display());
                outcomes.push((document, None));
                continue;
            }

            debug!("Dispatching {}", document.display());
            let cancel = self.cancel.clone();
            let handle =
                tokio::task::spawn_blocking(move || Builder::new(model).run(&cancel));
            outcomes.push((document, Some(handle)));
        }

        let total = outcomes.len();
        let mut roots = Vec::with_capacity(total);
        let mut failures = Vec::new();
        for (document, handle) in outcomes {
            let result = match handle {
                None => Err(Error::Cancelled),
                Some(handle) => match handle.await {
                    Ok(result) => result,
                    Err(e) => Err(Error::TaskError(e.to_string())),
                },
            };

            match result {
                Ok(root) => roots.push(root),
                Err(error) => {
                    error!("Generation from {} failed: {}", document.display(), error);
                    failures.push(BuildFailure { document, error });
                }
            }
        }

        if failures.is_empty() {
            return Ok(roots);
        }
        if failures.len() == total && failures.iter().all(|f| matches!(f.error, Error::Cancelled))
        {
            return Err(Error::Cancelled);
        }
        Err(Error::GenerationFailed(failures))
    }

    /// Requests cooperative cancellation of every run that has not finished.
    pub fn stop(&self) {
        info!("Stopping generation");
        self.cancel.cancel();
    }
}
