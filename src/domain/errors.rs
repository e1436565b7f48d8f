use thiserror::Error;

/// Errors returned by place operations
///
/// Messages are meant for end users. Storage failures never carry the
/// underlying diagnostic; it is logged where the failure is classified.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlaceError {
    /// The place does not exist, or belongs to another team
    #[error("Place not found")]
    NotFound,

    #[error("A place with this name already exists")]
    DuplicateName,

    /// The place changed between read and write
    #[error("Place was modified concurrently, please retry")]
    ConcurrentModification,

    #[error("There are no places that haven't been skipped or visited recently")]
    NoEligiblePlaces,

    #[error("{0}")]
    Validation(String),

    #[error("Database error")]
    Storage,
}

impl PlaceError {
    /// Returns true for the two kinds of write conflict
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            PlaceError::DuplicateName | PlaceError::ConcurrentModification
        )
    }
}

pub type PlaceResult<T> = Result<T, PlaceError>;
