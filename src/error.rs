//! Error types for carta

use thiserror::Error;

use crate::types::Violation;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The requested id does not match any stored item. Carries the raw
    /// path identifier for logging; the HTTP body uses a fixed message.
    #[error("Menu item not found: {0}")]
    NotFound(String),

    /// One or more fields of the candidate item failed validation.
    /// Every violated field is listed, not only the first.
    #[error("Invalid menu item: {}", format_violations(.0))]
    Validation(Vec<Violation>),
}

impl Error {
    pub fn not_found(id: impl ToString) -> Self {
        Error::NotFound(id.to_string())
    }
}

fn format_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.field)
        .collect::<Vec<_>>()
        .join(", ")
}
