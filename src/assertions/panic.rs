//! Panic assertions.
//!
//! The callback runs on the caller's thread. Stopping the enclosing test
//! from inside the callback is not treated as a panic of the callback.

use crate::capture::{capture, captured_equals};
use crate::driver::{check, Mode};
use crate::errors::AssertionResult;
use crate::message::Message;
use crate::testing::TestContext;
use crate::value::{Reflect, Value};

fn panic_with<C, F>(t: &C, mode: Mode, f: F, want: bool, message: Message) -> AssertionResult
where
    C: TestContext + ?Sized,
    F: FnOnce(),
{
    let payload = capture(f);
    check(
        t,
        mode,
        payload.is_some() == want,
        || match &payload {
            Some(payload) => format!("expect no panic, got {}", payload),
            None => "expect function to panic".to_string(),
        },
        message,
    )
}

fn panic_of_with<C, F>(
    t: &C,
    mode: Mode,
    f: F,
    expected: Value,
    want: bool,
    message: Message,
) -> AssertionResult
where
    C: TestContext + ?Sized,
    F: FnOnce(),
{
    let payload = capture(f);
    check(
        t,
        mode,
        captured_equals(payload.as_ref(), &expected) == want,
        || match (&payload, want) {
            (Some(payload), true) => format!("expect panic with {}, got {}", expected, payload),
            (None, true) => format!("expect panic with {}, got no panic", expected),
            (_, false) => format!("expect no panic with {}", expected),
        },
        message,
    )
}

/// Asserts that `f` panics.
pub fn panic<C, F>(t: &C, f: F, message: impl Into<Message>) -> AssertionResult
where
    C: TestContext + ?Sized,
    F: FnOnce(),
{
    panic_with(t, Mode::Continue, f, true, message.into())
}

pub fn panic_now<C, F>(t: &C, f: F, message: impl Into<Message>) -> AssertionResult
where
    C: TestContext + ?Sized,
    F: FnOnce(),
{
    panic_with(t, Mode::Stop, f, true, message.into())
}

pub fn not_panic<C, F>(t: &C, f: F, message: impl Into<Message>) -> AssertionResult
where
    C: TestContext + ?Sized,
    F: FnOnce(),
{
    panic_with(t, Mode::Continue, f, false, message.into())
}

pub fn not_panic_now<C, F>(t: &C, f: F, message: impl Into<Message>) -> AssertionResult
where
    C: TestContext + ?Sized,
    F: FnOnce(),
{
    panic_with(t, Mode::Stop, f, false, message.into())
}

/// Asserts that `f` panics with a payload equal to `expected`.
///
/// `panic!` messages are compared as strings. A payload raised with
/// [`std::panic::panic_any`] is compared by value when it is a [`Value`], a
/// scalar or a boxed error; any other payload matches nothing but itself.
/// `expected` of [`Value::Nil`] matches a callback that does not panic.
pub fn panic_of<C, F>(
    t: &C,
    f: F,
    expected: impl Reflect,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
    F: FnOnce(),
{
    panic_of_with(t, Mode::Continue, f, expected.to_value(), true, message.into())
}

pub fn panic_of_now<C, F>(
    t: &C,
    f: F,
    expected: impl Reflect,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
    F: FnOnce(),
{
    panic_of_with(t, Mode::Stop, f, expected.to_value(), true, message.into())
}

pub fn not_panic_of<C, F>(
    t: &C,
    f: F,
    unexpected: impl Reflect,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
    F: FnOnce(),
{
    panic_of_with(t, Mode::Continue, f, unexpected.to_value(), false, message.into())
}

pub fn not_panic_of_now<C, F>(
    t: &C,
    f: F,
    unexpected: impl Reflect,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
    F: FnOnce(),
{
    panic_of_with(t, Mode::Stop, f, unexpected.to_value(), false, message.into())
}
