use std::error::Error as StdError;
use std::fmt;

use crate::error::{Cause, CodedError, cause, cause_coded};

/// A construction step applied to the cause list of a new error.
///
/// Options run in the order they are passed to the constructor. Each one may
/// append zero or more causes; none of them can remove or reorder causes.
pub struct ErrorOption(Box<dyn FnOnce(&mut Vec<Cause>) + Send>);

impl ErrorOption {
    pub(crate) fn apply(self, causes: &mut Vec<Cause>) {
        (self.0)(causes);
    }
}

impl fmt::Debug for ErrorOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ErrorOption")
    }
}

/// Append `err` as a cause.
pub fn with_error<E>(err: E) -> ErrorOption
where
    E: StdError + Send + Sync + 'static,
{
    with_cause(cause(err))
}

/// Append `err` as a cause that keeps its [`CodedError`] capability, so it can
/// be promoted when it ends up first in a batch.
pub fn with_coded_error<E>(err: E) -> ErrorOption
where
    E: CodedError + Send + Sync + 'static,
{
    with_cause(cause_coded(err))
}

/// Append `err` as a cause when present. `None` leaves the cause list untouched.
pub fn with_optional_error<E>(err: Option<E>) -> ErrorOption
where
    E: StdError + Send + Sync + 'static,
{
    ErrorOption(Box::new(move |causes| {
        if let Some(err) = err {
            causes.push(cause(err));
        }
    }))
}

/// Append an already shared cause, keeping its identity.
pub fn with_cause(err: Cause) -> ErrorOption {
    ErrorOption(Box::new(move |causes| causes.push(err)))
}

/// Append every cause in `errs`, in order. An empty collection is a no-op.
pub fn with_errors<I>(errs: I) -> ErrorOption
where
    I: IntoIterator<Item = Cause>,
{
    let errs: Vec<Cause> = errs.into_iter().collect();
    ErrorOption(Box::new(move |causes| {
        if !errs.is_empty() {
            causes.extend(errs);
        }
    }))
}
