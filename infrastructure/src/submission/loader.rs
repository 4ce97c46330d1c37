//! Loader for classifier output files
//!
//! A submission file holds one classifier response: either the bare JSON
//! classification object or the raw LLM text with a fenced JSON block.

use grader_domain::{ClassificationParseError, SubmissionClassification, parse_classification_response};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading a submission file
#[derive(Error, Debug)]
pub enum SubmissionLoadError {
    #[error("could not read submission file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("submission file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ClassificationParseError,
    },
}

impl SubmissionLoadError {
    pub fn path(&self) -> &Path {
        match self {
            SubmissionLoadError::Io { path, .. } | SubmissionLoadError::Parse { path, .. } => path,
        }
    }
}

/// Reads classifier output files into [`SubmissionClassification`]s
#[derive(Debug, Clone, Default)]
pub struct SubmissionLoader;

impl SubmissionLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load one submission file.
    ///
    /// When the content does not carry a `submission_id`, the file stem is
    /// used, so `alice-hw3.json` becomes submission `alice-hw3`.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<SubmissionClassification, SubmissionLoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SubmissionLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut submission =
            parse_classification_response(&content).map_err(|source| SubmissionLoadError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        if submission.submission_id.is_empty()
            && let Some(stem) = path.file_stem()
        {
            submission.submission_id = stem.to_string_lossy().into_owned();
        }

        debug!(
            "Loaded submission '{}' ({} classification(s)) from {}",
            submission.submission_id,
            submission.classifications.len(),
            path.display()
        );
        Ok(submission)
    }

    /// Load several files, keeping each outcome in input order
    pub fn load_all<P: AsRef<Path>>(
        &self,
        paths: &[P],
    ) -> Vec<Result<SubmissionClassification, SubmissionLoadError>> {
        paths.iter().map(|p| self.load(p)).collect()
    }
}
