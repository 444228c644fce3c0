use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("administration {0} is already completed")]
    AlreadyCompleted(Uuid),
}
