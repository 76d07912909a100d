//! Regular-expression assertions.

use crate::driver::{check, check_usage, Mode};
use crate::errors::AssertionResult;
use crate::message::Message;
use crate::regexp;
use crate::testing::TestContext;
use regex::Regex;

fn match_with<C>(
    t: &C,
    mode: Mode,
    text: &str,
    re: &Regex,
    want: bool,
    message: Message,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    let relation = if want { "to match" } else { "not to match" };
    check(
        t,
        mode,
        regexp::is_match(text, re) == want,
        || format!("expect {:?} {} /{}/", text, relation, re.as_str()),
        message,
    )
}

fn match_string_with<C>(
    t: &C,
    mode: Mode,
    text: &str,
    pattern: &str,
    want: bool,
    message: Message,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    let relation = if want { "to match" } else { "not to match" };
    check_usage(
        t,
        mode,
        regexp::is_match_str(text, pattern).map(|matched| matched == want),
        || format!("expect {:?} {} /{}/", text, relation, pattern),
        message,
    )
}

/// Asserts that `text` matches the compiled expression `re`.
pub fn is_match<C>(
    t: &C,
    text: impl AsRef<str>,
    re: &Regex,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    match_with(t, Mode::Continue, text.as_ref(), re, true, message.into())
}

pub fn is_match_now<C>(
    t: &C,
    text: impl AsRef<str>,
    re: &Regex,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    match_with(t, Mode::Stop, text.as_ref(), re, true, message.into())
}

pub fn not_match<C>(
    t: &C,
    text: impl AsRef<str>,
    re: &Regex,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    match_with(t, Mode::Continue, text.as_ref(), re, false, message.into())
}

pub fn not_match_now<C>(
    t: &C,
    text: impl AsRef<str>,
    re: &Regex,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    match_with(t, Mode::Stop, text.as_ref(), re, false, message.into())
}

/// Asserts that `text` matches `pattern`. The pattern is compiled once per
/// process; an invalid pattern panics.
pub fn match_string<C>(
    t: &C,
    text: impl AsRef<str>,
    pattern: &str,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    match_string_with(t, Mode::Continue, text.as_ref(), pattern, true, message.into())
}

pub fn match_string_now<C>(
    t: &C,
    text: impl AsRef<str>,
    pattern: &str,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    match_string_with(t, Mode::Stop, text.as_ref(), pattern, true, message.into())
}

pub fn not_match_string<C>(
    t: &C,
    text: impl AsRef<str>,
    pattern: &str,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    match_string_with(t, Mode::Continue, text.as_ref(), pattern, false, message.into())
}

pub fn not_match_string_now<C>(
    t: &C,
    text: impl AsRef<str>,
    pattern: &str,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    match_string_with(t, Mode::Stop, text.as_ref(), pattern, false, message.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::T;
    use std::panic::{self, AssertUnwindSafe};

    #[test]
    fn test_is_match() {
        let t = T::new("TestIsMatch");
        let re = Regex::new(r"^[a-z]+\[[0-9]+\]$").unwrap();
        assert!(is_match(&t, "adam[23]", &re, Message::Default).is_ok());
        assert!(not_match(&t, "adam[23", &re, Message::Default).is_ok());
        assert!(!t.failed());

        let err = is_match(&t, "Job[99]", &re, Message::Default).unwrap_err();
        insta::assert_snapshot!(err, @r#"assert error: expect "Job[99]" to match /^[a-z]+\[[0-9]+\]$/"#);
    }

    #[test]
    fn test_match_string() {
        let t = T::new("TestMatchString");
        assert!(match_string(&t, "Hello world", r"^Hello", Message::Default).is_ok());
        assert!(not_match_string(&t, "Hello world", r"^world", Message::Default).is_ok());
        assert!(!t.failed());

        let err = not_match_string(&t, "Hello world", "world$", Message::Default).unwrap_err();
        insta::assert_snapshot!(err, @r#"assert error: expect "Hello world" not to match /world$/"#);
    }

    #[test]
    fn test_invalid_pattern_panics() {
        let t = T::new("TestInvalidPattern");
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let _ = match_string(&t, "text", "(", Message::Default);
        }));
        assert!(result.is_err());
        assert!(!t.failed());
    }
}
