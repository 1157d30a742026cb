use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use crate::format::join_errors;
use crate::structured::StructuredError;

/// A wrapped causal error. Shared so collapsed batches reuse the same values.
pub type Cause = Arc<dyn StdError + Send + Sync + 'static>;

/// Wrap any error into a [`Cause`].
pub fn cause<E>(err: E) -> Cause
where
    E: StdError + Send + Sync + 'static,
{
    Arc::new(err)
}

/// Capability of errors that carry a classification code and a message.
///
/// [`StructuredError`] has it built in. Other implementers are recognised by
/// [`as_coded`] only when wrapped through [`cause_coded`]; a plain [`cause`]
/// erases the capability.
pub trait CodedError: StdError {
    /// Short whitespace-free phrase classifying the error.
    fn code(&self) -> &str;

    /// Free-form detail message.
    fn message(&self) -> &str;
}

/// Wrap a [`CodedError`] into a [`Cause`] that keeps the capability visible to [`as_coded`].
///
/// The cause renders and chains like `err`, but downcasts to `E` no longer succeed.
pub fn cause_coded<E>(err: E) -> Cause
where
    E: CodedError + Send + Sync + 'static,
{
    Arc::new(CodedCause(Box::new(err)))
}

struct CodedCause(Box<dyn CodedError + Send + Sync>);

impl fmt::Debug for CodedCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for CodedCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

impl StdError for CodedCause {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

/// Probe `err` for the [`CodedError`] capability.
pub fn as_coded<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a dyn CodedError> {
    if let Some(structured) = err.downcast_ref::<StructuredError>() {
        return Some(structured as &dyn CodedError);
    }
    err.downcast_ref::<CodedCause>()
        .map(|coded| &*coded.0 as &dyn CodedError)
}

/// Several causes that render as a single error, one display string per line.
#[derive(Debug, Clone, Default, thiserror::Error)]
#[error("{}", join_errors(.0))]
pub struct ErrorList(pub Vec<Cause>);

impl From<Vec<Cause>> for ErrorList {
    fn from(causes: Vec<Cause>) -> Self {
        Self(causes)
    }
}

impl From<&[Cause]> for ErrorList {
    fn from(causes: &[Cause]) -> Self {
        Self(causes.to_vec())
    }
}
