//! Rubric adapters
//!
//! Implementations of the [`RubricSource`](grader_application::RubricSource)
//! port. Rubric files are JSON documents in the shape of
//! [`RubricDefinition`](grader_domain::RubricDefinition).

mod file;
mod memory;
mod repository;

pub use file::load_rubric_file;
pub use memory::InMemoryRubricSource;
pub use repository::JsonRubricRepository;
