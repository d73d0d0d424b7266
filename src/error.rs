use crate::TypeInfo;
use thiserror::Error;

/// Errors returned by the checked extraction paths of [`AnyValue`](crate::AnyValue)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BadAnyCast {
    /// The value was requested from an empty container
    #[error("bad any cast: requested `{requested}` from an empty value")]
    Empty { requested: TypeInfo },
    /// The stored type is not exactly the requested type
    #[error("bad any cast: stored `{stored}`, requested `{requested}`")]
    TypeMismatch {
        stored: TypeInfo,
        requested: TypeInfo,
    },
}

impl BadAnyCast {
    /// The type the caller asked for
    pub fn requested(&self) -> TypeInfo {
        match self {
            BadAnyCast::Empty { requested } | BadAnyCast::TypeMismatch { requested, .. } => {
                *requested
            }
        }
    }

    pub(crate) fn new(stored: TypeInfo, requested: TypeInfo) -> Self {
        if stored.is_void() {
            BadAnyCast::Empty { requested }
        } else {
            BadAnyCast::TypeMismatch { stored, requested }
        }
    }
}

/// Returned by the checked accessors of [`Optional`](crate::Optional) when no value is held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Error)]
#[error("optional has no value")]
pub struct EmptyAccess;

/// Any error produced by this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VocabError {
    #[error(transparent)]
    BadAnyCast(#[from] BadAnyCast),
    #[error(transparent)]
    EmptyAccess(#[from] EmptyAccess),
}
