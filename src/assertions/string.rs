//! Substring, prefix and suffix assertions.

use crate::driver::{check, Mode};
use crate::errors::AssertionResult;
use crate::message::Message;
use crate::predicate;
use crate::testing::TestContext;

#[derive(Clone, Copy)]
enum Relation {
    Contains,
    Prefix,
    Suffix,
}

impl Relation {
    fn holds(self, s: &str, part: &str) -> bool {
        match self {
            Relation::Contains => predicate::contains_string(s, part),
            Relation::Prefix => predicate::has_prefix(s, part),
            Relation::Suffix => predicate::has_suffix(s, part),
        }
    }

    fn describe(self, want: bool) -> &'static str {
        match (self, want) {
            (Relation::Contains, true) => "to contain",
            (Relation::Contains, false) => "not to contain",
            (Relation::Prefix, true) => "to have prefix",
            (Relation::Prefix, false) => "not to have prefix",
            (Relation::Suffix, true) => "to have suffix",
            (Relation::Suffix, false) => "not to have suffix",
        }
    }
}

fn string_with<C>(
    t: &C,
    mode: Mode,
    relation: Relation,
    s: &str,
    part: &str,
    want: bool,
    message: Message,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    check(
        t,
        mode,
        relation.holds(s, part) == want,
        || format!("expect {:?} {} {:?}", s, relation.describe(want), part),
        message,
    )
}

/// Asserts that `s` contains `substr`.
pub fn contains_string<C>(
    t: &C,
    s: impl AsRef<str>,
    substr: impl AsRef<str>,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    string_with(
        t,
        Mode::Continue,
        Relation::Contains,
        s.as_ref(),
        substr.as_ref(),
        true,
        message.into(),
    )
}

pub fn contains_string_now<C>(
    t: &C,
    s: impl AsRef<str>,
    substr: impl AsRef<str>,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    string_with(
        t,
        Mode::Stop,
        Relation::Contains,
        s.as_ref(),
        substr.as_ref(),
        true,
        message.into(),
    )
}

pub fn not_contains_string<C>(
    t: &C,
    s: impl AsRef<str>,
    substr: impl AsRef<str>,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    string_with(
        t,
        Mode::Continue,
        Relation::Contains,
        s.as_ref(),
        substr.as_ref(),
        false,
        message.into(),
    )
}

pub fn not_contains_string_now<C>(
    t: &C,
    s: impl AsRef<str>,
    substr: impl AsRef<str>,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    string_with(
        t,
        Mode::Stop,
        Relation::Contains,
        s.as_ref(),
        substr.as_ref(),
        false,
        message.into(),
    )
}

/// Asserts that `s` starts with `prefix`.
pub fn has_prefix<C>(
    t: &C,
    s: impl AsRef<str>,
    prefix: impl AsRef<str>,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    string_with(
        t,
        Mode::Continue,
        Relation::Prefix,
        s.as_ref(),
        prefix.as_ref(),
        true,
        message.into(),
    )
}

pub fn has_prefix_now<C>(
    t: &C,
    s: impl AsRef<str>,
    prefix: impl AsRef<str>,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    string_with(t, Mode::Stop, Relation::Prefix, s.as_ref(), prefix.as_ref(), true, message.into())
}

pub fn not_has_prefix<C>(
    t: &C,
    s: impl AsRef<str>,
    prefix: impl AsRef<str>,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    string_with(
        t,
        Mode::Continue,
        Relation::Prefix,
        s.as_ref(),
        prefix.as_ref(),
        false,
        message.into(),
    )
}

pub fn not_has_prefix_now<C>(
    t: &C,
    s: impl AsRef<str>,
    prefix: impl AsRef<str>,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    string_with(t, Mode::Stop, Relation::Prefix, s.as_ref(), prefix.as_ref(), false, message.into())
}

/// Asserts that `s` ends with `suffix`.
pub fn has_suffix<C>(
    t: &C,
    s: impl AsRef<str>,
    suffix: impl AsRef<str>,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    string_with(
        t,
        Mode::Continue,
        Relation::Suffix,
        s.as_ref(),
        suffix.as_ref(),
        true,
        message.into(),
    )
}

pub fn has_suffix_now<C>(
    t: &C,
    s: impl AsRef<str>,
    suffix: impl AsRef<str>,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    string_with(t, Mode::Stop, Relation::Suffix, s.as_ref(), suffix.as_ref(), true, message.into())
}

pub fn not_has_suffix<C>(
    t: &C,
    s: impl AsRef<str>,
    suffix: impl AsRef<str>,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    string_with(
        t,
        Mode::Continue,
        Relation::Suffix,
        s.as_ref(),
        suffix.as_ref(),
        false,
        message.into(),
    )
}

pub fn not_has_suffix_now<C>(
    t: &C,
    s: impl AsRef<str>,
    suffix: impl AsRef<str>,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    string_with(t, Mode::Stop, Relation::Suffix, s.as_ref(), suffix.as_ref(), false, message.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::T;

    #[test]
    fn test_contains_string() {
        let t = T::new("TestContainsString");
        assert!(contains_string(&t, "Hello world", "world", Message::Default).is_ok());
        assert!(contains_string(&t, "Hello world", "", Message::Default).is_ok());
        assert!(not_contains_string(&t, "Hello world", "World", Message::Default).is_ok());
        assert!(!t.failed());

        let err = contains_string(&t, "Hello", "world", Message::Default).unwrap_err();
        insta::assert_snapshot!(err, @r#"assert error: expect "Hello" to contain "world""#);
    }

    #[test]
    fn test_prefix_and_suffix() {
        let t = T::new("TestPrefixSuffix");
        assert!(has_prefix(&t, "Hello world", "Hello", Message::Default).is_ok());
        assert!(not_has_prefix(&t, "Hello world", "world", Message::Default).is_ok());
        assert!(has_suffix(&t, String::from("Hello world"), "world", Message::Default).is_ok());
        assert!(not_has_suffix(&t, "Hello world", "Hello", Message::Default).is_ok());
        assert!(!t.failed());

        let err = has_suffix(&t, "Hello world", "Hello", Message::Default).unwrap_err();
        insta::assert_snapshot!(err, @r#"assert error: expect "Hello world" to have suffix "Hello""#);
        let err = not_has_prefix(&t, "Hello world", "Hello", Message::Default).unwrap_err();
        insta::assert_snapshot!(err, @r#"assert error: expect "Hello world" not to have prefix "Hello""#);
    }
}
