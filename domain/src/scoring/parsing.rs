//! Parsing classifier responses
//!
//! Classifiers are asked for a JSON object, but LLM responses often wrap it in
//! a fenced code block or surround it with prose. This module digs the object
//! out before handing it to serde.

use super::classification::SubmissionClassification;
use thiserror::Error;

/// Why a classifier response could not be turned into classifications
#[derive(Error, Debug)]
pub enum ClassificationParseError {
    #[error("no JSON object found in classifier response")]
    NoJson,

    #[error("classifier response does not match the classification schema: {0}")]
    Schema(#[from] serde_json::Error),
}

/// Parse a classifier response into a [`SubmissionClassification`].
///
/// Tries, in order:
/// 1. ` ```json ` (or bare ` ``` `) fenced blocks
/// 2. The whole response as JSON
/// 3. The outermost `{ ... }` span inside surrounding prose
///
/// ```
/// use grader_domain::scoring::parse_classification_response;
///
/// let response = "Here you go:\n```json\n{\"classifications\": [{\"criterion_id\": \"design\", \"level\": \"Good\"}]}\n```";
/// let parsed = parse_classification_response(response).unwrap();
/// assert_eq!(parsed.classifications.len(), 1);
/// ```
pub fn parse_classification_response(
    response: &str,
) -> Result<SubmissionClassification, ClassificationParseError> {
    let mut last_error = None;

    for block in fenced_blocks(response) {
        match serde_json::from_str(&block) {
            Ok(parsed) => return Ok(parsed),
            Err(e) => last_error = Some(e),
        }
    }

    let trimmed = response.trim();
    if trimmed.starts_with('{') {
        match serde_json::from_str(trimmed) {
            Ok(parsed) => return Ok(parsed),
            Err(e) => last_error = Some(e),
        }
    }

    if let (Some(start), Some(end)) = (response.find('{'), response.rfind('}'))
        && start < end
    {
        match serde_json::from_str(&response[start..=end]) {
            Ok(parsed) => return Ok(parsed),
            Err(e) => last_error = Some(e),
        }
    }

    Err(last_error.map_or(ClassificationParseError::NoJson, ClassificationParseError::Schema))
}

/// Contents of ```json / ``` fenced blocks, in order of appearance
fn fenced_blocks(response: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut in_block = false;
    let mut current = String::new();

    for line in response.lines() {
        let trimmed = line.trim();
        if !in_block && (trimmed == "```json" || trimmed == "```") {
            in_block = true;
            current.clear();
        } else if in_block && trimmed == "```" {
            in_block = false;
            blocks.push(std::mem::take(&mut current));
        } else if in_block {
            current.push_str(line);
            current.push('\n');
        }
    }

    blocks
}
