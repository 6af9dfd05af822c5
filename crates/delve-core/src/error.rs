use crate::dungeon::LocationId;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when building or querying locations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// A direction label was empty.
    #[error("direction cannot be empty")]
    EmptyDirection,

    /// The direction is already used by another exit of the same location.
    #[error("direction already exists: \"{0}\"")]
    DuplicateDirection(String),

    /// The requested location ID does not exist in the dungeon.
    #[error("location not found: {0}")]
    LocationNotFound(LocationId),

    /// A location with the same name already exists in the dungeon.
    #[error("location already exists: \"{0}\"")]
    DuplicateName(String),
}

/// Coarse classification of a [`CoreError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed a value that can never be valid.
    InvalidArgument,
    /// The value clashes with existing state.
    Conflict,
    /// A referenced location does not exist.
    NotFound,
}

impl CoreError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyDirection => ErrorKind::InvalidArgument,
            Self::DuplicateDirection(_) | Self::DuplicateName(_) => ErrorKind::Conflict,
            Self::LocationNotFound(_) => ErrorKind::NotFound,
        }
    }
}
