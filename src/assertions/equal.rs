//! Equality assertions.

use crate::compare::is_float_equal;
use crate::driver::{check, check_usage, Mode};
use crate::equal::{is_deep_equal, is_equal};
use crate::errors::AssertionResult;
use crate::message::Message;
use crate::testing::TestContext;
use crate::value::{Reflect, Value};

fn type_name(value: &Value) -> String {
    value
        .type_of()
        .map_or_else(|| "nil".to_string(), |ty| ty.to_string())
}

fn equal_with<C>(
    t: &C,
    mode: Mode,
    actual: Value,
    expected: Value,
    want: bool,
    message: Message,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    let op = if want { "==" } else { "!=" };
    check(
        t,
        mode,
        is_equal(&actual, &expected) == want,
        || format!("{} {} {}", actual, op, expected),
        message,
    )
}

fn deep_equal_with<C>(
    t: &C,
    mode: Mode,
    actual: Value,
    expected: Value,
    want: bool,
    message: Message,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    let op = if want { "==" } else { "!=" };
    check(
        t,
        mode,
        is_deep_equal(&actual, &expected) == want,
        || {
            format!(
                "{} ({}) {} {} ({})",
                actual,
                type_name(&actual),
                op,
                expected,
                type_name(&expected)
            )
        },
        message,
    )
}

fn float_equal_with<C>(
    t: &C,
    mode: Mode,
    actual: Value,
    expected: Value,
    epsilon: f64,
    want: bool,
    message: Message,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    let op = if want { "<=" } else { ">" };
    check_usage(
        t,
        mode,
        is_float_equal(&actual, &expected, epsilon).map(|equal| equal == want),
        || format!("|{} - {}| {} {}", actual, expected, op, epsilon),
        message,
    )
}

/// Asserts that `actual` equals `expected`. Numbers of one family compare
/// by value whatever their width; see [`is_equal`].
pub fn equal<C>(
    t: &C,
    actual: impl Reflect,
    expected: impl Reflect,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    equal_with(t, Mode::Continue, actual.to_value(), expected.to_value(), true, message.into())
}

pub fn equal_now<C>(
    t: &C,
    actual: impl Reflect,
    expected: impl Reflect,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    equal_with(t, Mode::Stop, actual.to_value(), expected.to_value(), true, message.into())
}

pub fn not_equal<C>(
    t: &C,
    actual: impl Reflect,
    expected: impl Reflect,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    equal_with(t, Mode::Continue, actual.to_value(), expected.to_value(), false, message.into())
}

pub fn not_equal_now<C>(
    t: &C,
    actual: impl Reflect,
    expected: impl Reflect,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    equal_with(t, Mode::Stop, actual.to_value(), expected.to_value(), false, message.into())
}

/// Asserts that `actual` and `expected` have the same type and the same
/// structure; see [`is_deep_equal`].
pub fn deep_equal<C>(
    t: &C,
    actual: impl Reflect,
    expected: impl Reflect,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    deep_equal_with(t, Mode::Continue, actual.to_value(), expected.to_value(), true, message.into())
}

pub fn deep_equal_now<C>(
    t: &C,
    actual: impl Reflect,
    expected: impl Reflect,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    deep_equal_with(t, Mode::Stop, actual.to_value(), expected.to_value(), true, message.into())
}

pub fn not_deep_equal<C>(
    t: &C,
    actual: impl Reflect,
    expected: impl Reflect,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    deep_equal_with(
        t,
        Mode::Continue,
        actual.to_value(),
        expected.to_value(),
        false,
        message.into(),
    )
}

pub fn not_deep_equal_now<C>(
    t: &C,
    actual: impl Reflect,
    expected: impl Reflect,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    deep_equal_with(t, Mode::Stop, actual.to_value(), expected.to_value(), false, message.into())
}

/// Asserts that `|actual - expected| <= epsilon`. Both operands must be
/// numbers and `epsilon` must be non-negative.
pub fn float_equal<C>(
    t: &C,
    actual: impl Reflect,
    expected: impl Reflect,
    epsilon: f64,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    float_equal_with(
        t,
        Mode::Continue,
        actual.to_value(),
        expected.to_value(),
        epsilon,
        true,
        message.into(),
    )
}

pub fn float_equal_now<C>(
    t: &C,
    actual: impl Reflect,
    expected: impl Reflect,
    epsilon: f64,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    float_equal_with(
        t,
        Mode::Stop,
        actual.to_value(),
        expected.to_value(),
        epsilon,
        true,
        message.into(),
    )
}

pub fn float_not_equal<C>(
    t: &C,
    actual: impl Reflect,
    expected: impl Reflect,
    epsilon: f64,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    float_equal_with(
        t,
        Mode::Continue,
        actual.to_value(),
        expected.to_value(),
        epsilon,
        false,
        message.into(),
    )
}

pub fn float_not_equal_now<C>(
    t: &C,
    actual: impl Reflect,
    expected: impl Reflect,
    epsilon: f64,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    float_equal_with(
        t,
        Mode::Stop,
        actual.to_value(),
        expected.to_value(),
        epsilon,
        false,
        message.into(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::T;

    #[test]
    fn test_equal() {
        let t = T::new("TestEqual");
        assert!(equal(&t, 1, 1, Message::Default).is_ok());
        assert!(equal(&t, "abc", "abc".to_string(), Message::Default).is_ok());
        assert!(equal(&t, vec![1, 2], [1u8, 2], Message::Default).is_err());
        assert!(equal(&t, vec![1, 2], vec![1u8, 2], Message::Default).is_ok());

        let err = equal(&t, 1, 2, Message::Default).unwrap_err();
        insta::assert_snapshot!(err, @"assert error: 1 == 2");
    }

    #[test]
    fn test_not_equal() {
        let t = T::new("TestNotEqual");
        assert!(not_equal(&t, 1, 2, Message::Default).is_ok());
        assert!(not_equal(&t, -1, u64::MAX, Message::Default).is_ok());

        let err = not_equal(&t, 1, 1u64, Message::Default).unwrap_err();
        insta::assert_snapshot!(err, @"assert error: 1 != 1");
    }

    #[test]
    fn test_deep_equal() {
        let t = T::new("TestDeepEqual");
        assert!(deep_equal(&t, vec!["a"], vec!["a"], Message::Default).is_ok());
        assert!(not_deep_equal(&t, 1, 1i64, Message::Default).is_ok());

        let err = deep_equal(&t, 1, 1i64, Message::Default).unwrap_err();
        insta::assert_snapshot!(err, @"assert error: 1 (i32) == 1 (i64)");
    }

    #[test]
    fn test_float_equal() {
        let t = T::new("TestFloatEqual");
        assert!(float_equal(&t, 1.0, 1.0 + 1e-10, 1e-7, Message::Default).is_ok());
        assert!(float_not_equal(&t, 1.0, 1.1, 1e-7, Message::Default).is_ok());

        let err = float_equal(&t, 1.0, 1.5, 0.1, Message::Default).unwrap_err();
        insta::assert_snapshot!(err, @"assert error: |1 - 1.5| <= 0.1");
    }

    #[test]
    fn test_custom_message() {
        let t = T::new("TestCustomMessage");
        let err = equal(&t, 1, 2, crate::message!("want {}", 2)).unwrap_err();
        assert_eq!(err.message(), "want 2");
    }
}
