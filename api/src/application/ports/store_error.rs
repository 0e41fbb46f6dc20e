/// Failure of a single-row insert against one of the entity tables.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("duplicate key")]
    DuplicateKey,
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}
