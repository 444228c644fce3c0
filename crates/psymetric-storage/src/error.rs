use thiserror::Error;
use uuid::Uuid;

use psymetric_scoring::error::ScoringError;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("scale not found: {0}")]
    ScaleNotFound(String),

    #[error("administration not found: {0}")]
    AdministrationNotFound(Uuid),

    #[error("scale '{0}' already has administrations and cannot be replaced")]
    ScaleInUse(String),

    #[error("scale '{scale_id}' has no item {sequence}")]
    UnknownItem { scale_id: String, sequence: u32 },

    #[error("administration {0} is completed and no longer accepts answers")]
    AdministrationCompleted(Uuid),

    #[error("catalog_version {found} is newer than this build supports ({supported})")]
    UnsupportedCatalogVersion { found: u32, supported: u32 },

    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("storage lock poisoned")]
    LockPoisoned,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Scoring(#[from] ScoringError),
}

impl From<StorageError> for ScoringError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::ScaleNotFound(id) => ScoringError::UnknownScale(id),
            StorageError::AdministrationNotFound(id) => ScoringError::UnknownAdministration(id),
            StorageError::Scoring(inner) => inner,
            other => ScoringError::Storage(other.to_string()),
        }
    }
}
