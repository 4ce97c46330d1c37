//! Classification file loading

mod loader;

pub use loader::{SubmissionLoadError, SubmissionLoader};
