//! Progress reporting while a batch is scored

pub mod reporter;
