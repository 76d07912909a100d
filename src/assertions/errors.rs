//! Error-chain assertions.

use crate::driver::{check, Mode};
use crate::errors::AssertionResult;
use crate::message::Message;
use crate::predicate::is_error_match;
use crate::testing::TestContext;
use std::error::Error;

fn is_error_with<C, E>(
    t: &C,
    mode: Mode,
    err: &(dyn Error + 'static),
    target: &E,
    want: bool,
    message: Message,
) -> AssertionResult
where
    C: TestContext + ?Sized,
    E: Error + PartialEq + 'static,
{
    let relation = if want { "to match" } else { "not to match" };
    check(
        t,
        mode,
        is_error_match(err, target) == want,
        || format!("expect error \"{}\" {} \"{}\"", err, relation, target),
        message,
    )
}

/// Asserts that `err`, or an error in its source chain, equals `target`.
pub fn is_error<C, E>(
    t: &C,
    err: &(dyn Error + 'static),
    target: &E,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
    E: Error + PartialEq + 'static,
{
    is_error_with(t, Mode::Continue, err, target, true, message.into())
}

pub fn is_error_now<C, E>(
    t: &C,
    err: &(dyn Error + 'static),
    target: &E,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
    E: Error + PartialEq + 'static,
{
    is_error_with(t, Mode::Stop, err, target, true, message.into())
}

pub fn not_is_error<C, E>(
    t: &C,
    err: &(dyn Error + 'static),
    target: &E,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
    E: Error + PartialEq + 'static,
{
    is_error_with(t, Mode::Continue, err, target, false, message.into())
}

pub fn not_is_error_now<C, E>(
    t: &C,
    err: &(dyn Error + 'static),
    target: &E,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
    E: Error + PartialEq + 'static,
{
    is_error_with(t, Mode::Stop, err, target, false, message.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::T;
    use thiserror::Error;

    #[derive(Debug, PartialEq, Error)]
    enum StoreError {
        #[error("key {0} not found")]
        NotFound(String),
        #[error("store is read-only")]
        ReadOnly,
    }

    #[derive(Debug, Error)]
    #[error("request failed")]
    struct RequestError(#[source] StoreError);

    #[test]
    fn test_is_error() {
        let t = T::new("TestIsError");
        let err = StoreError::NotFound("a".into());
        assert!(is_error(&t, &err, &StoreError::NotFound("a".into()), Message::Default).is_ok());
        assert!(not_is_error(&t, &err, &StoreError::ReadOnly, Message::Default).is_ok());
        assert!(!t.failed());

        let err = is_error(&t, &err, &StoreError::ReadOnly, Message::Default).unwrap_err();
        insta::assert_snapshot!(err, @r#"assert error: expect error "key a not found" to match "store is read-only""#);
    }

    #[test]
    fn test_is_error_walks_sources() {
        let t = T::new("TestIsErrorChain");
        let err = RequestError(StoreError::ReadOnly);
        assert!(is_error(&t, &err, &StoreError::ReadOnly, Message::Default).is_ok());
        assert!(not_is_error(&t, &err, &StoreError::NotFound("a".into()), Message::Default).is_ok());
        assert!(!t.failed());
    }
}
