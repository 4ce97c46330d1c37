//! Single rubric file loading

use grader_application::RubricSourceError;
use grader_domain::{Rubric, RubricDefinition};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load and validate one rubric file.
///
/// Errors name the rubric by the file stem, since a file that fails to parse
/// has no trustworthy id of its own.
pub fn load_rubric_file(path: impl AsRef<Path>) -> Result<Rubric, RubricSourceError> {
    let path = path.as_ref();
    let label = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let content = fs::read_to_string(path).map_err(|e| RubricSourceError::Unreadable {
        rubric_id: label.clone(),
        message: format!("{}: {}", path.display(), e),
    })?;

    parse_rubric(&label, &content)
}

pub(crate) fn parse_rubric(label: &str, content: &str) -> Result<Rubric, RubricSourceError> {
    let definition: RubricDefinition =
        serde_json::from_str(content).map_err(|e| RubricSourceError::Malformed {
            rubric_id: label.to_string(),
            message: e.to_string(),
        })?;

    let rubric_id = definition.id.clone();
    let rubric = Rubric::new(definition).map_err(|source| RubricSourceError::Invalid {
        rubric_id: if rubric_id.is_empty() {
            label.to_string()
        } else {
            rubric_id
        },
        source,
    })?;

    debug!(
        "Loaded rubric '{}' ({} criteria, {} points)",
        rubric.id(),
        rubric.criteria().len(),
        rubric.total_points_possible()
    );
    Ok(rubric)
}
