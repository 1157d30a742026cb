use super::StructuredError;
use crate::types::ErrorOption;

/// Code of a batch synthesized from several opaque causes.
pub const BATCH_CODE: &str = "BatchError";
/// Message of a batch synthesized from several opaque causes.
pub const BATCH_MESSAGE: &str = "multiple errors occurred";
/// Code of every [`StructuredError::validation`] error.
pub const VALIDATION_CODE: &str = "ValidationError";
/// Code of every [`StructuredError::internal`] error.
pub const INTERNAL_CODE: &str = "InternalError";
/// Code of every [`StructuredError::unknown`] error.
pub const UNKNOWN_CODE: &str = "UnknownError";

/// Which named constructor produced a [`StructuredError`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
    strum_macros::VariantNames,
)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    Base,
    Batch,
    NotFound,
    Preconditions,
    Validation,
    Internal,
    Unauthorized,
    Unauthenticated,
    Unknown,
}

impl ErrorKind {
    /// The code every error of this kind carries, or `None` when the caller picks it.
    pub fn fixed_code(self) -> Option<&'static str> {
        match self {
            Self::Validation => Some(VALIDATION_CODE),
            Self::Internal => Some(INTERNAL_CODE),
            Self::Unknown => Some(UNKNOWN_CODE),
            Self::Base
            | Self::Batch
            | Self::NotFound
            | Self::Preconditions
            | Self::Unauthorized
            | Self::Unauthenticated => None,
        }
    }
}

impl StructuredError {
    pub fn not_found(
        code: impl Into<String>,
        message: impl Into<String>,
        options: impl IntoIterator<Item = ErrorOption>,
    ) -> Self {
        Self::with_kind(ErrorKind::NotFound, code, message, options)
    }

    pub fn preconditions(
        code: impl Into<String>,
        message: impl Into<String>,
        options: impl IntoIterator<Item = ErrorOption>,
    ) -> Self {
        Self::with_kind(ErrorKind::Preconditions, code, message, options)
    }

    /// A [`VALIDATION_CODE`] error.
    pub fn validation(
        message: impl Into<String>,
        options: impl IntoIterator<Item = ErrorOption>,
    ) -> Self {
        Self::with_kind(ErrorKind::Validation, VALIDATION_CODE, message, options)
    }

    /// An [`INTERNAL_CODE`] error.
    pub fn internal(
        message: impl Into<String>,
        options: impl IntoIterator<Item = ErrorOption>,
    ) -> Self {
        Self::with_kind(ErrorKind::Internal, INTERNAL_CODE, message, options)
    }

    pub fn unauthorized(
        code: impl Into<String>,
        message: impl Into<String>,
        options: impl IntoIterator<Item = ErrorOption>,
    ) -> Self {
        Self::with_kind(ErrorKind::Unauthorized, code, message, options)
    }

    pub fn unauthenticated(
        code: impl Into<String>,
        message: impl Into<String>,
        options: impl IntoIterator<Item = ErrorOption>,
    ) -> Self {
        Self::with_kind(ErrorKind::Unauthenticated, code, message, options)
    }

    /// An [`UNKNOWN_CODE`] error.
    pub fn unknown(
        message: impl Into<String>,
        options: impl IntoIterator<Item = ErrorOption>,
    ) -> Self {
        Self::with_kind(ErrorKind::Unknown, UNKNOWN_CODE, message, options)
    }
}
