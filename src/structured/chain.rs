use super::StructuredError;
use super::kinds::ErrorKind;
use crate::error::{Cause, as_coded};

/// Follows [`StructuredError::unwrap`] links.
///
/// Opaque errors end the chain. So does a `BatchError` batch with an opaque
/// first cause, since unwrapping it yields an equal batch.
pub struct Chain {
    next: Option<Cause>,
}

impl Iterator for Chain {
    type Item = Cause;

    fn next(&mut self) -> Option<Cause> {
        let current = self.next.take()?;
        self.next = current
            .downcast_ref::<StructuredError>()
            .filter(|structured| !structured.reproduces_itself())
            .and_then(StructuredError::unwrap);
        Some(current)
    }
}

/// Depth-first, pre-order walk over every cause in a cause tree.
pub struct Walk {
    stack: Vec<Cause>,
}

impl Walk {
    fn new(causes: &[Cause]) -> Self {
        Self {
            stack: causes.iter().rev().cloned().collect(),
        }
    }
}

impl Iterator for Walk {
    type Item = Cause;

    fn next(&mut self) -> Option<Cause> {
        let current = self.stack.pop()?;
        if let Some(structured) = current.downcast_ref::<StructuredError>() {
            self.stack
                .extend(structured.all_causes().iter().rev().cloned());
        }
        Some(current)
    }
}

impl StructuredError {
    /// Collapsed causes reachable through repeated [`Self::unwrap`] calls, nearest first.
    pub fn chain(&self) -> Chain {
        Chain {
            next: self.unwrap(),
        }
    }

    /// Every wrapped cause, recursively, without collapsing anything.
    pub fn walk(&self) -> Walk {
        Walk::new(self.all_causes())
    }

    /// First cause in [`Self::walk`] order carrying `code`.
    pub fn find_code(&self, code: &str) -> Option<Cause> {
        self.walk()
            .find(|c| as_coded(&**c).is_some_and(|coded| coded.code() == code))
    }

    /// First cause in [`Self::walk`] order tagged with `kind`.
    pub fn find_kind(&self, kind: ErrorKind) -> Option<Cause> {
        self.walk().find(|c| {
            c.downcast_ref::<StructuredError>()
                .is_some_and(|structured| structured.is_kind(kind))
        })
    }
}
