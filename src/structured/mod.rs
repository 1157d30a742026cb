pub mod chain;
pub mod kinds;

use std::error::Error as StdError;
use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::error::{Cause, CodedError, ErrorList, as_coded};
use crate::format::{FormatOption, sprint_error};
use crate::types::{ErrorOption, with_errors};

use self::kinds::{BATCH_CODE, BATCH_MESSAGE, ErrorKind};

/// An error carrying a classification code, a message and zero or more wrapped causes.
///
/// Immutable once built. Causes keep insertion order and the first one is
/// privileged when several are collapsed into a batch (see [`Self::causal_error`]).
pub struct StructuredError {
    kind: ErrorKind,
    code: String,
    message: String,
    causes: Vec<Cause>,
    /// Backs the borrow handed out by [`StdError::source`]; never read by `causal_error`.
    collapsed: OnceLock<Cause>,
}

impl StructuredError {
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        options: impl IntoIterator<Item = ErrorOption>,
    ) -> Self {
        Self::with_kind(ErrorKind::Base, code, message, options)
    }

    /// Build a batch error explicitly. Batches synthesized by [`Self::causal_error`] come from here too.
    pub fn batch(
        code: impl Into<String>,
        message: impl Into<String>,
        options: impl IntoIterator<Item = ErrorOption>,
    ) -> Self {
        Self::with_kind(ErrorKind::Batch, code, message, options)
    }

    pub(crate) fn with_kind(
        kind: ErrorKind,
        code: impl Into<String>,
        message: impl Into<String>,
        options: impl IntoIterator<Item = ErrorOption>,
    ) -> Self {
        let mut causes = Vec::new();
        for option in options {
            option.apply(&mut causes);
        }
        Self {
            kind,
            code: code.into(),
            message: message.into(),
            causes,
            collapsed: OnceLock::new(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn is_kind(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Every wrapped cause, in insertion order. Empty when there are none.
    pub fn all_causes(&self) -> &[Cause] {
        &self.causes
    }

    /// The causes collapsed into a single error.
    ///
    /// - no causes: `None`
    /// - one cause: that cause, same handle
    /// - several: a fresh batch. When the first cause is itself coded the batch
    ///   takes its code and message and wraps the remaining causes; otherwise it
    ///   is a [`BATCH_CODE`] batch wrapping all of them.
    ///
    /// Computed on every call.
    pub fn causal_error(&self) -> Option<Cause> {
        match self.causes.as_slice() {
            [] => None,
            [only] => Some(Arc::clone(only)),
            [first, rest @ ..] => Some(self.collapse(first, rest).into_cause()),
        }
    }

    /// Same as [`Self::causal_error`], for chain walking.
    ///
    /// Returns the collapsed cause, `None` when there is none. Never panics.
    pub fn unwrap(&self) -> Option<Cause> {
        self.causal_error()
    }

    pub fn into_cause(self) -> Cause {
        Arc::new(self)
    }

    fn collapse(&self, first: &Cause, rest: &[Cause]) -> StructuredError {
        if let Some(coded) = as_coded(&**first) {
            tracing::trace!(
                causes = self.causes.len(),
                promoted = true,
                code = coded.code(),
                "collapsing causes into batch"
            );
            return Self::batch(
                coded.code(),
                coded.message(),
                [with_errors(rest.iter().cloned())],
            );
        }

        tracing::trace!(
            causes = self.causes.len(),
            promoted = false,
            code = BATCH_CODE,
            "collapsing causes into batch"
        );
        Self::batch(
            BATCH_CODE,
            BATCH_MESSAGE,
            [with_errors(self.causes.iter().cloned())],
        )
    }

    /// True when [`Self::unwrap`] yields a batch equal to `self`.
    pub(crate) fn reproduces_itself(&self) -> bool {
        self.causes.len() >= 2
            && self.code == BATCH_CODE
            && self.message == BATCH_MESSAGE
            && as_coded(&*self.causes[0]).is_none()
    }
}

impl Clone for StructuredError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            code: self.code.clone(),
            message: self.message.clone(),
            causes: self.causes.clone(),
            collapsed: OnceLock::new(),
        }
    }
}

impl fmt::Debug for StructuredError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructuredError")
            .field("kind", &self.kind)
            .field("code", &self.code)
            .field("message", &self.message)
            .field("causes", &self.causes)
            .finish()
    }
}

impl fmt::Display for StructuredError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = if self.causes.is_empty() {
            sprint_error(&self.code, &self.message, &[])
        } else {
            sprint_error(
                &self.code,
                &self.message,
                &[FormatOption::OriginalError(&ErrorList::from(
                    self.causes.as_slice(),
                ))],
            )
        };
        f.write_str(&rendered)
    }
}

impl StdError for StructuredError {
    /// The collapsed cause, as [`StructuredError::causal_error`] computes it.
    ///
    /// A batch that would unwrap to an equal batch has no source, so walks
    /// over `source()` end there, like [`chain::Chain`].
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self.causes.as_slice() {
            [] => None,
            [only] => Some(&**only),
            _ if self.reproduces_itself() => None,
            [first, rest @ ..] => {
                let collapsed = self
                    .collapsed
                    .get_or_init(|| self.collapse(first, rest).into_cause());
                Some(&**collapsed)
            }
        }
    }
}

impl CodedError for StructuredError {
    fn code(&self) -> &str {
        &self.code
    }

    fn message(&self) -> &str {
        &self.message
    }
}
