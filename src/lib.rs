#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::dbg_macro,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::panic,
    )
)]

pub mod error;
pub mod format;
pub mod structured;
pub mod types;

pub use error::{Cause, CodedError, ErrorList, as_coded, cause, cause_coded};
pub use format::{FormatOption, join_errors, sprint_error};
pub use structured::StructuredError;
pub use structured::chain::{Chain, Walk};
pub use structured::kinds::{
    BATCH_CODE, BATCH_MESSAGE, ErrorKind, INTERNAL_CODE, UNKNOWN_CODE, VALIDATION_CODE,
};
pub use types::{
    ErrorOption, with_cause, with_coded_error, with_error, with_errors, with_optional_error,
};
