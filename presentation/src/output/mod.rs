//! Output formatting for assessment results

pub mod console;
pub mod formatter;
