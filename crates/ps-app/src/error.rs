use ps_core::ports::RecordSourceError;

/// Input rejected before any side effect or fetch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a valid number (got {input:?})")]
    InvalidBulkCount { input: String },

    #[error("Invalid page size: {size}. Must be between 1 and {max}")]
    InvalidPageSize { size: u32, max: u32 },

    #[error("Invalid page number: {0}. Must be at least 1")]
    InvalidPageNumber(u32),

    #[error("Already on the first page")]
    NoPreviousPage,

    #[error("Already on the last page")]
    NoNextPage,

    #[error("Record {0} is not on the displayed page")]
    RecordNotOnPage(String),
}

/// Error type for browse session actions
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to fetch page {page}: {source}")]
    Fetch {
        page: u32,
        #[source]
        source: RecordSourceError,
    },
}

impl SessionError {
    pub fn is_validation(&self) -> bool {
        matches!(self, SessionError::Validation(_))
    }
}
