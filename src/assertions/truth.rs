//! Nil-ness and truthiness assertions.

use crate::driver::{check, Mode};
use crate::errors::AssertionResult;
use crate::message::Message;
use crate::predicate;
use crate::testing::TestContext;
use crate::value::{Reflect, Value};

fn nil_with<C>(t: &C, mode: Mode, value: Value, want: bool, message: Message) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    let expect = if want { "nil" } else { "not nil" };
    check(
        t,
        mode,
        predicate::is_nil(&value) == want,
        || format!("expect {}, got {}", expect, value),
        message,
    )
}

fn truthy_with<C>(t: &C, mode: Mode, value: Value, want: bool, message: Message) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    let expect = if want { "truthy" } else { "falsy" };
    check(
        t,
        mode,
        predicate::is_true(&value) == want,
        || format!("expect {} value, got {}", expect, value),
        message,
    )
}

/// Asserts that `value` is nil: the absence marker, or a nil slice, map,
/// pointer, interface, channel or function.
pub fn nil<C>(t: &C, value: impl Reflect, message: impl Into<Message>) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    nil_with(t, Mode::Continue, value.to_value(), true, message.into())
}

pub fn nil_now<C>(t: &C, value: impl Reflect, message: impl Into<Message>) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    nil_with(t, Mode::Stop, value.to_value(), true, message.into())
}

pub fn not_nil<C>(t: &C, value: impl Reflect, message: impl Into<Message>) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    nil_with(t, Mode::Continue, value.to_value(), false, message.into())
}

pub fn not_nil_now<C>(t: &C, value: impl Reflect, message: impl Into<Message>) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    nil_with(t, Mode::Stop, value.to_value(), false, message.into())
}

/// Asserts that `value` is truthy: not nil, not an empty slice and not the
/// zero value of its type.
pub fn is_true<C>(t: &C, value: impl Reflect, message: impl Into<Message>) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    truthy_with(t, Mode::Continue, value.to_value(), true, message.into())
}

pub fn is_true_now<C>(t: &C, value: impl Reflect, message: impl Into<Message>) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    truthy_with(t, Mode::Stop, value.to_value(), true, message.into())
}

pub fn not_true<C>(t: &C, value: impl Reflect, message: impl Into<Message>) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    truthy_with(t, Mode::Continue, value.to_value(), false, message.into())
}

pub fn not_true_now<C>(t: &C, value: impl Reflect, message: impl Into<Message>) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    truthy_with(t, Mode::Stop, value.to_value(), false, message.into())
}
