use thiserror::Error;

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error(transparent)]
    Database(#[from] surrealdb::Error),
    #[error("record {0} does not have an integer key")]
    InvalidKey(String),
    #[error("{0} statement returned no record")]
    NoRecord(&'static str),
}
