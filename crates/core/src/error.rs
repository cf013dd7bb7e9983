#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Unknown lotId: {lot_id}")]
    LotNotFound { lot_id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Auth(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Store error: {0}")]
    Store(String),
}
