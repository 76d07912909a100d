//! Shared execution path of every assertion.

use crate::errors::{AssertionError, UsageResult};
use crate::message::Message;
use crate::testing::TestContext;
use std::fmt::Display;

/// Whether a failed assertion lets the unit continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Continue,
    Stop,
}

/// Result of evaluating one assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    FailedContinue,
    FailedStop,
}

impl Outcome {
    fn new(passed: bool, mode: Mode) -> Self {
        match (passed, mode) {
            (true, _) => Outcome::Passed,
            (false, Mode::Continue) => Outcome::FailedContinue,
            (false, Mode::Stop) => Outcome::FailedStop,
        }
    }
}

/// Reports the outcome of a predicate to `t`.
///
/// On failure the error is recorded with [`TestContext::error`]; in
/// [`Mode::Stop`], or when the context is configured to fail fast, the unit
/// is then stopped and this call does not return.
pub fn check<C, D>(
    t: &C,
    mode: Mode,
    passed: bool,
    default: D,
    message: Message,
) -> Result<(), AssertionError>
where
    C: TestContext + ?Sized,
    D: FnOnce() -> String,
{
    let mode = if t.config().fail_fast { Mode::Stop } else { mode };

    let outcome = Outcome::new(passed, mode);
    if outcome == Outcome::Passed {
        log::trace!("{}: assertion passed", t.name());
        return Ok(());
    }

    let err = AssertionError::new(message.resolve(&t.config().prefix, default));
    log::warn!("{}: {}", t.name(), err);
    t.error(&err);

    if outcome == Outcome::FailedStop {
        t.fail_now();
    }
    Err(err)
}

/// Like [`check`], for predicates that can be misused. A usage error is a
/// bug in the test itself and panics instead of failing the assertion.
pub fn check_usage<C, D>(
    t: &C,
    mode: Mode,
    passed: UsageResult<bool>,
    default: D,
    message: Message,
) -> Result<(), AssertionError>
where
    C: TestContext + ?Sized,
    D: FnOnce() -> String,
{
    match passed {
        Ok(passed) => check(t, mode, passed, default, message),
        Err(err) => usage_panic(err),
    }
}

pub fn usage_panic(err: impl Display) -> ! {
    log::error!("invalid assertion: {}", err);
    panic!("{}", err)
}
