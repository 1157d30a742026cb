use std::error::Error as StdError;

use crate::error::Cause;

/// Separator placed before a rendered cause block.
pub const CAUSED_BY: &str = "\n caused by: ";

/// An annotation appended to the base `"<code>: <message>"` line by [`sprint_error`].
#[derive(Debug, Clone, Copy)]
pub enum FormatOption<'a> {
    /// Extra detail rendered as `"\n\t<extra>"`.
    Extra(&'a str),
    /// A causal error rendered as `"\n caused by: <err>"`.
    OriginalError(&'a dyn StdError),
}

impl FormatOption<'_> {
    fn apply(&self, msg: &mut String) {
        match self {
            Self::Extra(extra) => {
                msg.push_str("\n\t");
                msg.push_str(extra);
            }
            Self::OriginalError(err) => {
                msg.push_str(CAUSED_BY);
                msg.push_str(&err.to_string());
            }
        }
    }
}

/// Render `code` and `message` as `"<code>: <message>"`, then apply each option in order.
pub fn sprint_error(code: &str, message: &str, options: &[FormatOption<'_>]) -> String {
    let mut msg = format!("{code}: {message}");
    for option in options {
        option.apply(&mut msg);
    }
    msg
}

/// Display strings of `causes` joined by newlines. Empty input yields `""`.
pub fn join_errors(causes: &[Cause]) -> String {
    let mut msg = String::new();
    for (i, cause) in causes.iter().enumerate() {
        if i > 0 {
            msg.push('\n');
        }
        msg.push_str(&cause.to_string());
    }
    msg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorList, cause};

    #[derive(Debug, thiserror::Error)]
    #[error("{0}")]
    struct Plain(&'static str);

    #[test]
    fn base_line_only() {
        assert_eq!(
            sprint_error("some_error", "error doing something", &[]),
            "some_error: error doing something"
        );
    }

    #[test]
    fn extra_info_is_indented_on_its_own_line() {
        assert_eq!(
            sprint_error(
                "some_error",
                "error doing something",
                &[FormatOption::Extra("test of test")]
            ),
            "some_error: error doing something\n\ttest of test"
        );
    }

    #[test]
    fn original_error_is_appended_after_caused_by() {
        let original = Plain("original error");
        assert_eq!(
            sprint_error(
                "some_error",
                "error doing something",
                &[FormatOption::OriginalError(&original)]
            ),
            "some_error: error doing something\n caused by: original error"
        );
    }

    #[test]
    fn options_apply_in_order() {
        let original = Plain("original error");
        assert_eq!(
            sprint_error(
                "some_error",
                "error doing something",
                &[
                    FormatOption::Extra("test of test"),
                    FormatOption::OriginalError(&original),
                ]
            ),
            "some_error: error doing something\n\ttest of test\n caused by: original error"
        );
        assert_eq!(
            sprint_error(
                "some_error",
                "error doing something",
                &[
                    FormatOption::OriginalError(&original),
                    FormatOption::Extra("test of test"),
                ]
            ),
            "some_error: error doing something\n caused by: original error\n\ttest of test"
        );
    }

    #[test]
    fn empty_code_and_message_still_render_separator() {
        assert_eq!(sprint_error("", "", &[]), ": ");
    }

    #[test]
    fn join_errors_handles_zero_one_and_many() {
        assert_eq!(join_errors(&[]), "");
        assert_eq!(join_errors(&[cause(Plain("single error"))]), "single error");
        assert_eq!(
            join_errors(&[cause(Plain("first error")), cause(Plain("second error"))]),
            "first error\nsecond error"
        );
    }

    #[test]
    fn error_list_renders_like_join_errors() {
        let causes = vec![cause(Plain("first error")), cause(Plain("second error"))];
        let list = ErrorList::from(causes.as_slice());
        assert_eq!(list.to_string(), join_errors(&causes));
        assert_eq!(
            sprint_error("code", "message", &[FormatOption::OriginalError(&list)]),
            "code: message\n caused by: first error\nsecond error"
        );
    }
}
