#![doc(
    html_root_url = "https://docs.rs/assert-kit/0.1.0",
    issue_tracker_base_url = "https://github.com/storyscript/assert-kit/issues/"
)]

//! Type-aware test assertions.
//!
//! Assertions compare dynamically-typed operands: a `u8` equals an `i64`
//! holding the same number, `-1` is less than `u64::MAX`, and a slice of
//! `i32` contains a `u64`. A failed assertion records an
//! [`AssertionError`] on its test context and, in its `_now` form, stops the
//! test. Misusing an assertion, such as ordering a number against a string,
//! panics.
//!
//! ```
//! use assert_kit::{testing, Message};
//!
//! testing::test("TestScores", |t| {
//!     let scores = vec![90u8, 75, 60];
//!
//!     let _ = assert_kit::contains_element(t, &scores, 75, Message::Default);
//!     let _ = assert_kit::gt_now(t, scores[0], -1, Message::Default);
//!     let _ = assert_kit::equal(t, scores.len(), 3, assert_kit::message!("want {} scores", 3));
//! });
//! ```
//!
//! ## Modules
//!
//! - [`assertions`] - Assertion functions taking an explicit test context
//! - [`assertion`] - The [`Assertion`] wrapper binding a context once
//! - [`testing`] - The [`TestContext`] trait and the [`T`] context
//! - [`value`] - Operands as dynamically-typed [`Value`]s
//! - [`kind`] - Kind and family classification of values
//! - [`compare`] - Ordering and tolerance-based numeric equality
//! - [`equal`] - Plain and deep equality
//! - [`predicate`] - Nil-ness, truthiness and containment
//! - [`regexp`] - Cached regular-expression matching
//! - [`capture`] - Panic interception
//! - [`driver`] - Shared failure reporting of every assertion
//! - [`config`] - Configuration loaded from TOML
//! - [`errors`] - Error types

pub mod assertion;
pub mod assertions;
pub mod capture;
pub mod compare;
pub mod config;
pub mod driver;
pub mod equal;
pub mod errors;
pub mod kind;
pub mod message;
pub mod predicate;
pub mod regexp;
pub mod testing;
pub mod value;

// Re-exports for convenient access to core types
pub use assertion::Assertion;
pub use assertions::*;
pub use config::Config;
pub use errors::{AssertionError, AssertionResult, ConfigError, UsageError, UsageResult};
pub use kind::{Family, Kind};
pub use message::Message;
pub use testing::{TestContext, T};
pub use value::{Reflect, Type, Value};
