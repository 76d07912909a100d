//! Collection membership assertions.

use crate::driver::{check_usage, Mode};
use crate::errors::AssertionResult;
use crate::message::Message;
use crate::predicate;
use crate::testing::TestContext;
use crate::value::{Reflect, Value};

fn contains_with<C>(
    t: &C,
    mode: Mode,
    source: Value,
    elem: Value,
    want: bool,
    message: Message,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    let relation = if want { "to contain" } else { "not to contain" };
    check_usage(
        t,
        mode,
        predicate::contains_element(&source, &elem).map(|found| found == want),
        || format!("expect {} {} {}", source, relation, elem),
        message,
    )
}

/// Asserts that the slice or array `source` holds an element equal to
/// `elem`.
///
/// Panics if `source` is not a slice or an array (optionally behind one
/// pointer) or if `elem` cannot be one of its elements.
pub fn contains_element<C>(
    t: &C,
    source: impl Reflect,
    elem: impl Reflect,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    contains_with(t, Mode::Continue, source.to_value(), elem.to_value(), true, message.into())
}

pub fn contains_element_now<C>(
    t: &C,
    source: impl Reflect,
    elem: impl Reflect,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    contains_with(t, Mode::Stop, source.to_value(), elem.to_value(), true, message.into())
}

pub fn not_contains_element<C>(
    t: &C,
    source: impl Reflect,
    elem: impl Reflect,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    contains_with(t, Mode::Continue, source.to_value(), elem.to_value(), false, message.into())
}

pub fn not_contains_element_now<C>(
    t: &C,
    source: impl Reflect,
    elem: impl Reflect,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    contains_with(t, Mode::Stop, source.to_value(), elem.to_value(), false, message.into())
}
