use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not authenticated; run `mejora auth login`")]
    NotAuthenticated,

    #[error("session storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("session store error: {0}")]
    StoreError(String),

    #[error("profile serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
