//! Ordering assertions.
//!
//! Operands must be integers, floats or strings. Integers of either sign
//! compare safely against each other; any other mix, such as a number
//! against a string, is a usage error and panics.

use crate::compare::{compare, CompareMask};
use crate::driver::{check_usage, Mode};
use crate::errors::AssertionResult;
use crate::message::Message;
use crate::testing::TestContext;
use crate::value::{Reflect, Value};

fn order_with<C>(
    t: &C,
    mode: Mode,
    left: Value,
    right: Value,
    want: CompareMask,
    op: &str,
    message: Message,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    check_usage(
        t,
        mode,
        compare(&left, &right, want),
        || format!("{} {} {}", left, op, right),
        message,
    )
}

/// Asserts that `left > right`.
pub fn gt<C>(
    t: &C,
    left: impl Reflect,
    right: impl Reflect,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    order_with(
        t,
        Mode::Continue,
        left.to_value(),
        right.to_value(),
        CompareMask::GREATER,
        ">",
        message.into(),
    )
}

pub fn gt_now<C>(
    t: &C,
    left: impl Reflect,
    right: impl Reflect,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    order_with(
        t,
        Mode::Stop,
        left.to_value(),
        right.to_value(),
        CompareMask::GREATER,
        ">",
        message.into(),
    )
}

/// Asserts that `left >= right`.
pub fn gte<C>(
    t: &C,
    left: impl Reflect,
    right: impl Reflect,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    let want = CompareMask::GREATER | CompareMask::EQUAL;
    order_with(t, Mode::Continue, left.to_value(), right.to_value(), want, ">=", message.into())
}

pub fn gte_now<C>(
    t: &C,
    left: impl Reflect,
    right: impl Reflect,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    let want = CompareMask::GREATER | CompareMask::EQUAL;
    order_with(t, Mode::Stop, left.to_value(), right.to_value(), want, ">=", message.into())
}

/// Asserts that `left < right`.
pub fn lt<C>(
    t: &C,
    left: impl Reflect,
    right: impl Reflect,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    order_with(
        t,
        Mode::Continue,
        left.to_value(),
        right.to_value(),
        CompareMask::LESS,
        "<",
        message.into(),
    )
}

pub fn lt_now<C>(
    t: &C,
    left: impl Reflect,
    right: impl Reflect,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    order_with(
        t,
        Mode::Stop,
        left.to_value(),
        right.to_value(),
        CompareMask::LESS,
        "<",
        message.into(),
    )
}

/// Asserts that `left <= right`.
pub fn lte<C>(
    t: &C,
    left: impl Reflect,
    right: impl Reflect,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    let want = CompareMask::LESS | CompareMask::EQUAL;
    order_with(t, Mode::Continue, left.to_value(), right.to_value(), want, "<=", message.into())
}

pub fn lte_now<C>(
    t: &C,
    left: impl Reflect,
    right: impl Reflect,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    let want = CompareMask::LESS | CompareMask::EQUAL;
    order_with(t, Mode::Stop, left.to_value(), right.to_value(), want, "<=", message.into())
}
