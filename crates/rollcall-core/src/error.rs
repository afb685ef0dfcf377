use thiserror::Error;

/// Errors returned by every `EventStore` back end.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Event not found: {id}")]
    NotFound { id: String },

    #[error("Store backend error: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn not_found(id: &str) -> Self {
        Self::NotFound { id: id.to_string() }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
