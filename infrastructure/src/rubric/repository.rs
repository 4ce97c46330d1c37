//! Directory-backed rubric repository

use super::file::parse_rubric;
use grader_application::{RubricSource, RubricSourceError};
use grader_domain::Rubric;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, warn};

/// Rubric repository reading `<dir>/<rubric_id>.json`
///
/// Each rubric is parsed and validated on first use, then cached; later
/// lookups share the same `Arc<Rubric>`.
pub struct JsonRubricRepository {
    dir: PathBuf,
    cache: Mutex<HashMap<String, Arc<Rubric>>>,
}

impl JsonRubricRepository {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    fn path_for(&self, rubric_id: &str) -> Option<PathBuf> {
        let is_plain_name = !rubric_id.is_empty()
            && !rubric_id.starts_with('.')
            && !rubric_id.contains(['/', '\\']);
        is_plain_name.then(|| self.dir.join(format!("{}.json", rubric_id)))
    }

    fn read(&self, rubric_id: &str) -> Result<Rubric, RubricSourceError> {
        let path = self
            .path_for(rubric_id)
            .filter(|p| p.is_file())
            .ok_or_else(|| RubricSourceError::NotFound(rubric_id.to_string()))?;

        debug!("Reading rubric '{}' from {}", rubric_id, path.display());
        let content = fs::read_to_string(&path).map_err(|e| RubricSourceError::Unreadable {
            rubric_id: rubric_id.to_string(),
            message: format!("{}: {}", path.display(), e),
        })?;

        let rubric = parse_rubric(rubric_id, &content)?;
        if rubric.id() != rubric_id {
            return Err(RubricSourceError::Malformed {
                rubric_id: rubric_id.to_string(),
                message: format!(
                    "{} declares rubric id '{}'",
                    path.display(),
                    rubric.id()
                ),
            });
        }
        Ok(rubric)
    }
}

impl RubricSource for JsonRubricRepository {
    fn load(&self, rubric_id: &str) -> Result<Arc<Rubric>, RubricSourceError> {
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(rubric) = cache.get(rubric_id) {
            return Ok(Arc::clone(rubric));
        }

        let rubric = Arc::new(self.read(rubric_id)?);
        cache.insert(rubric_id.to_string(), Arc::clone(&rubric));
        Ok(rubric)
    }

    fn available(&self) -> Vec<String> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Could not list rubric directory {}: {}", self.dir.display(), e);
                return Vec::new();
            }
        };

        let mut ids: Vec<String> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
            .filter_map(|path| path.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .collect();
        ids.sort();
        ids
    }
}
