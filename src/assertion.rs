//! Stateful assertion wrapper.

use crate::assertions;
use crate::errors::AssertionResult;
use crate::message::Message;
use crate::testing::{TestContext, T};
use crate::value::Reflect;
use regex::Regex;
use std::error::Error;

/// Binds a test context once and exposes every assertion as a method.
///
/// ```
/// use assert_kit::{testing, Assertion};
///
/// testing::test("TestUsers", |t| {
///     let a = Assertion::new(t);
///     let users = vec!["alice", "bob"];
///
///     let _ = a.contains_element(&users, "bob");
///     let _ = a.with_message("users must not be empty").is_true(&users);
///     a.run("lookup", |a| {
///         let _ = a.equal(users.len(), 2);
///     });
/// });
/// ```
#[derive(Debug)]
pub struct Assertion<'t, C: TestContext + ?Sized = T> {
    t: &'t C,
    message: Message,
}

impl<'t, C: TestContext + ?Sized> Assertion<'t, C> {
    pub fn new(t: &'t C) -> Self {
        Self {
            t,
            message: Message::Default,
        }
    }

    /// The bound test context.
    pub fn t(&self) -> &'t C {
        self.t
    }

    /// A wrapper over the same context whose assertions fail with `message`
    /// instead of their default message.
    pub fn with_message(&self, message: impl Into<Message>) -> Self {
        Self {
            t: self.t,
            message: message.into(),
        }
    }

    fn message(&self) -> Message {
        self.message.clone()
    }

    /// See [`assertions::equal`].
    pub fn equal(&self, actual: impl Reflect, expected: impl Reflect) -> AssertionResult {
        assertions::equal(self.t, actual, expected, self.message())
    }

    pub fn equal_now(&self, actual: impl Reflect, expected: impl Reflect) -> AssertionResult {
        assertions::equal_now(self.t, actual, expected, self.message())
    }

    pub fn not_equal(&self, actual: impl Reflect, expected: impl Reflect) -> AssertionResult {
        assertions::not_equal(self.t, actual, expected, self.message())
    }

    pub fn not_equal_now(&self, actual: impl Reflect, expected: impl Reflect) -> AssertionResult {
        assertions::not_equal_now(self.t, actual, expected, self.message())
    }

    /// See [`assertions::deep_equal`].
    pub fn deep_equal(&self, actual: impl Reflect, expected: impl Reflect) -> AssertionResult {
        assertions::deep_equal(self.t, actual, expected, self.message())
    }

    pub fn deep_equal_now(&self, actual: impl Reflect, expected: impl Reflect) -> AssertionResult {
        assertions::deep_equal_now(self.t, actual, expected, self.message())
    }

    pub fn not_deep_equal(&self, actual: impl Reflect, expected: impl Reflect) -> AssertionResult {
        assertions::not_deep_equal(self.t, actual, expected, self.message())
    }

    pub fn not_deep_equal_now(
        &self,
        actual: impl Reflect,
        expected: impl Reflect,
    ) -> AssertionResult {
        assertions::not_deep_equal_now(self.t, actual, expected, self.message())
    }

    /// See [`assertions::float_equal`].
    pub fn float_equal(
        &self,
        actual: impl Reflect,
        expected: impl Reflect,
        epsilon: f64,
    ) -> AssertionResult {
        assertions::float_equal(self.t, actual, expected, epsilon, self.message())
    }

    pub fn float_equal_now(
        &self,
        actual: impl Reflect,
        expected: impl Reflect,
        epsilon: f64,
    ) -> AssertionResult {
        assertions::float_equal_now(self.t, actual, expected, epsilon, self.message())
    }

    pub fn float_not_equal(
        &self,
        actual: impl Reflect,
        expected: impl Reflect,
        epsilon: f64,
    ) -> AssertionResult {
        assertions::float_not_equal(self.t, actual, expected, epsilon, self.message())
    }

    pub fn float_not_equal_now(
        &self,
        actual: impl Reflect,
        expected: impl Reflect,
        epsilon: f64,
    ) -> AssertionResult {
        assertions::float_not_equal_now(self.t, actual, expected, epsilon, self.message())
    }

    /// See [`assertions::nil`].
    pub fn nil(&self, value: impl Reflect) -> AssertionResult {
        assertions::nil(self.t, value, self.message())
    }

    pub fn nil_now(&self, value: impl Reflect) -> AssertionResult {
        assertions::nil_now(self.t, value, self.message())
    }

    pub fn not_nil(&self, value: impl Reflect) -> AssertionResult {
        assertions::not_nil(self.t, value, self.message())
    }

    pub fn not_nil_now(&self, value: impl Reflect) -> AssertionResult {
        assertions::not_nil_now(self.t, value, self.message())
    }

    /// See [`assertions::is_true`].
    pub fn is_true(&self, value: impl Reflect) -> AssertionResult {
        assertions::is_true(self.t, value, self.message())
    }

    pub fn is_true_now(&self, value: impl Reflect) -> AssertionResult {
        assertions::is_true_now(self.t, value, self.message())
    }

    pub fn not_true(&self, value: impl Reflect) -> AssertionResult {
        assertions::not_true(self.t, value, self.message())
    }

    pub fn not_true_now(&self, value: impl Reflect) -> AssertionResult {
        assertions::not_true_now(self.t, value, self.message())
    }

    /// See [`assertions::gt`].
    pub fn gt(&self, left: impl Reflect, right: impl Reflect) -> AssertionResult {
        assertions::gt(self.t, left, right, self.message())
    }

    pub fn gt_now(&self, left: impl Reflect, right: impl Reflect) -> AssertionResult {
        assertions::gt_now(self.t, left, right, self.message())
    }

    pub fn gte(&self, left: impl Reflect, right: impl Reflect) -> AssertionResult {
        assertions::gte(self.t, left, right, self.message())
    }

    pub fn gte_now(&self, left: impl Reflect, right: impl Reflect) -> AssertionResult {
        assertions::gte_now(self.t, left, right, self.message())
    }

    pub fn lt(&self, left: impl Reflect, right: impl Reflect) -> AssertionResult {
        assertions::lt(self.t, left, right, self.message())
    }

    pub fn lt_now(&self, left: impl Reflect, right: impl Reflect) -> AssertionResult {
        assertions::lt_now(self.t, left, right, self.message())
    }

    pub fn lte(&self, left: impl Reflect, right: impl Reflect) -> AssertionResult {
        assertions::lte(self.t, left, right, self.message())
    }

    pub fn lte_now(&self, left: impl Reflect, right: impl Reflect) -> AssertionResult {
        assertions::lte_now(self.t, left, right, self.message())
    }

    /// See [`assertions::contains_element`].
    pub fn contains_element(&self, source: impl Reflect, elem: impl Reflect) -> AssertionResult {
        assertions::contains_element(self.t, source, elem, self.message())
    }

    pub fn contains_element_now(
        &self,
        source: impl Reflect,
        elem: impl Reflect,
    ) -> AssertionResult {
        assertions::contains_element_now(self.t, source, elem, self.message())
    }

    pub fn not_contains_element(
        &self,
        source: impl Reflect,
        elem: impl Reflect,
    ) -> AssertionResult {
        assertions::not_contains_element(self.t, source, elem, self.message())
    }

    pub fn not_contains_element_now(
        &self,
        source: impl Reflect,
        elem: impl Reflect,
    ) -> AssertionResult {
        assertions::not_contains_element_now(self.t, source, elem, self.message())
    }

    pub fn contains_string(&self, s: impl AsRef<str>, substr: impl AsRef<str>) -> AssertionResult {
        assertions::contains_string(self.t, s, substr, self.message())
    }

    pub fn contains_string_now(
        &self,
        s: impl AsRef<str>,
        substr: impl AsRef<str>,
    ) -> AssertionResult {
        assertions::contains_string_now(self.t, s, substr, self.message())
    }

    pub fn not_contains_string(
        &self,
        s: impl AsRef<str>,
        substr: impl AsRef<str>,
    ) -> AssertionResult {
        assertions::not_contains_string(self.t, s, substr, self.message())
    }

    pub fn not_contains_string_now(
        &self,
        s: impl AsRef<str>,
        substr: impl AsRef<str>,
    ) -> AssertionResult {
        assertions::not_contains_string_now(self.t, s, substr, self.message())
    }

    pub fn has_prefix(&self, s: impl AsRef<str>, prefix: impl AsRef<str>) -> AssertionResult {
        assertions::has_prefix(self.t, s, prefix, self.message())
    }

    pub fn has_prefix_now(&self, s: impl AsRef<str>, prefix: impl AsRef<str>) -> AssertionResult {
        assertions::has_prefix_now(self.t, s, prefix, self.message())
    }

    pub fn not_has_prefix(&self, s: impl AsRef<str>, prefix: impl AsRef<str>) -> AssertionResult {
        assertions::not_has_prefix(self.t, s, prefix, self.message())
    }

    pub fn not_has_prefix_now(
        &self,
        s: impl AsRef<str>,
        prefix: impl AsRef<str>,
    ) -> AssertionResult {
        assertions::not_has_prefix_now(self.t, s, prefix, self.message())
    }

    pub fn has_suffix(&self, s: impl AsRef<str>, suffix: impl AsRef<str>) -> AssertionResult {
        assertions::has_suffix(self.t, s, suffix, self.message())
    }

    pub fn has_suffix_now(&self, s: impl AsRef<str>, suffix: impl AsRef<str>) -> AssertionResult {
        assertions::has_suffix_now(self.t, s, suffix, self.message())
    }

    pub fn not_has_suffix(&self, s: impl AsRef<str>, suffix: impl AsRef<str>) -> AssertionResult {
        assertions::not_has_suffix(self.t, s, suffix, self.message())
    }

    pub fn not_has_suffix_now(
        &self,
        s: impl AsRef<str>,
        suffix: impl AsRef<str>,
    ) -> AssertionResult {
        assertions::not_has_suffix_now(self.t, s, suffix, self.message())
    }

    /// See [`assertions::map_has_key`].
    pub fn map_has_key(&self, map: impl Reflect, key: impl Reflect) -> AssertionResult {
        assertions::map_has_key(self.t, map, key, self.message())
    }

    pub fn map_has_key_now(&self, map: impl Reflect, key: impl Reflect) -> AssertionResult {
        assertions::map_has_key_now(self.t, map, key, self.message())
    }

    pub fn not_map_has_key(&self, map: impl Reflect, key: impl Reflect) -> AssertionResult {
        assertions::not_map_has_key(self.t, map, key, self.message())
    }

    pub fn not_map_has_key_now(&self, map: impl Reflect, key: impl Reflect) -> AssertionResult {
        assertions::not_map_has_key_now(self.t, map, key, self.message())
    }

    pub fn map_has_value(&self, map: impl Reflect, value: impl Reflect) -> AssertionResult {
        assertions::map_has_value(self.t, map, value, self.message())
    }

    pub fn map_has_value_now(&self, map: impl Reflect, value: impl Reflect) -> AssertionResult {
        assertions::map_has_value_now(self.t, map, value, self.message())
    }

    pub fn not_map_has_value(&self, map: impl Reflect, value: impl Reflect) -> AssertionResult {
        assertions::not_map_has_value(self.t, map, value, self.message())
    }

    pub fn not_map_has_value_now(&self, map: impl Reflect, value: impl Reflect) -> AssertionResult {
        assertions::not_map_has_value_now(self.t, map, value, self.message())
    }

    pub fn is_match(&self, text: impl AsRef<str>, re: &Regex) -> AssertionResult {
        assertions::is_match(self.t, text, re, self.message())
    }

    pub fn is_match_now(&self, text: impl AsRef<str>, re: &Regex) -> AssertionResult {
        assertions::is_match_now(self.t, text, re, self.message())
    }

    pub fn not_match(&self, text: impl AsRef<str>, re: &Regex) -> AssertionResult {
        assertions::not_match(self.t, text, re, self.message())
    }

    pub fn not_match_now(&self, text: impl AsRef<str>, re: &Regex) -> AssertionResult {
        assertions::not_match_now(self.t, text, re, self.message())
    }

    /// See [`assertions::match_string`].
    pub fn match_string(&self, text: impl AsRef<str>, pattern: &str) -> AssertionResult {
        assertions::match_string(self.t, text, pattern, self.message())
    }

    pub fn match_string_now(&self, text: impl AsRef<str>, pattern: &str) -> AssertionResult {
        assertions::match_string_now(self.t, text, pattern, self.message())
    }

    pub fn not_match_string(&self, text: impl AsRef<str>, pattern: &str) -> AssertionResult {
        assertions::not_match_string(self.t, text, pattern, self.message())
    }

    pub fn not_match_string_now(&self, text: impl AsRef<str>, pattern: &str) -> AssertionResult {
        assertions::not_match_string_now(self.t, text, pattern, self.message())
    }

    /// See [`assertions::is_error`].
    pub fn is_error<E: Error + PartialEq + 'static>(
        &self,
        err: &(dyn Error + 'static),
        target: &E,
    ) -> AssertionResult {
        assertions::is_error(self.t, err, target, self.message())
    }

    pub fn is_error_now<E: Error + PartialEq + 'static>(
        &self,
        err: &(dyn Error + 'static),
        target: &E,
    ) -> AssertionResult {
        assertions::is_error_now(self.t, err, target, self.message())
    }

    pub fn not_is_error<E: Error + PartialEq + 'static>(
        &self,
        err: &(dyn Error + 'static),
        target: &E,
    ) -> AssertionResult {
        assertions::not_is_error(self.t, err, target, self.message())
    }

    pub fn not_is_error_now<E: Error + PartialEq + 'static>(
        &self,
        err: &(dyn Error + 'static),
        target: &E,
    ) -> AssertionResult {
        assertions::not_is_error_now(self.t, err, target, self.message())
    }

    /// See [`assertions::panic`].
    pub fn panic<F: FnOnce()>(&self, f: F) -> AssertionResult {
        assertions::panic(self.t, f, self.message())
    }

    pub fn panic_now<F: FnOnce()>(&self, f: F) -> AssertionResult {
        assertions::panic_now(self.t, f, self.message())
    }

    pub fn not_panic<F: FnOnce()>(&self, f: F) -> AssertionResult {
        assertions::not_panic(self.t, f, self.message())
    }

    pub fn not_panic_now<F: FnOnce()>(&self, f: F) -> AssertionResult {
        assertions::not_panic_now(self.t, f, self.message())
    }

    /// See [`assertions::panic_of`].
    pub fn panic_of<F: FnOnce()>(&self, f: F, expected: impl Reflect) -> AssertionResult {
        assertions::panic_of(self.t, f, expected, self.message())
    }

    pub fn panic_of_now<F: FnOnce()>(&self, f: F, expected: impl Reflect) -> AssertionResult {
        assertions::panic_of_now(self.t, f, expected, self.message())
    }

    pub fn not_panic_of<F: FnOnce()>(&self, f: F, unexpected: impl Reflect) -> AssertionResult {
        assertions::not_panic_of(self.t, f, unexpected, self.message())
    }

    pub fn not_panic_of_now<F: FnOnce()>(&self, f: F, unexpected: impl Reflect) -> AssertionResult {
        assertions::not_panic_of_now(self.t, f, unexpected, self.message())
    }
}

impl<'t, C: TestContext> Assertion<'t, C> {
    /// Runs `body` as a named sub-test with a wrapper bound to the child
    /// context. Returns whether the sub-test passed.
    pub fn run<F>(&self, name: &str, body: F) -> bool
    where
        F: FnOnce(&Assertion<'_, C>),
    {
        self.t.run(name, |t| body(&Assertion::new(t)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_methods_forward_to_context() {
        let t = T::new("TestAssertion");
        let a = Assertion::new(&t);

        assert!(a.equal(1, 1u8).is_ok());
        assert!(a.deep_equal(vec!["x"], vec!["x"]).is_ok());
        assert!(a.gte(3, 3).is_ok());
        assert!(a.has_prefix("assert-kit", "assert").is_ok());
        assert!(a.nil(None::<String>).is_ok());
        assert!(!t.failed());

        assert!(a.lt(2, 1).is_err());
        assert!(t.failed());
        assert_eq!(t.errors().len(), 1);
    }

    #[test]
    fn test_with_message() {
        let t = T::new("TestWithMessage");
        let a = Assertion::new(&t);

        let err = a.with_message("custom").equal(1, 2).unwrap_err();
        assert_eq!(err.message(), "custom");

        let err = a.equal(1, 2).unwrap_err();
        assert_eq!(err.message(), "assert error: 1 == 2");
    }

    #[test]
    fn test_run() {
        let t = T::new("TestRun");
        let a = Assertion::new(&t);
        let mut names = Vec::new();

        assert!(a.run("test Run", |a| names.push(a.t().name().to_string())));
        assert!(!a.run("failing", |a| {
            let _ = a.is_true(false);
        }));

        assert_eq!(names, vec!["TestRun/test_Run"]);
        assert!(t.failed());
        assert_eq!(
            t.report(),
            vec!["TestRun/failing: assert error: expect truthy value, got false"]
        );
    }

    #[test]
    fn test_now_stops_sub_test() {
        let t = T::new("TestNow");
        let a = Assertion::new(&t);
        let mut reached = false;

        a.run("stop", |a| {
            let mut m = HashMap::new();
            m.insert("a", 1);
            let _ = a.map_has_key_now(&m, "b");
            reached = true;
        });

        assert!(!reached);
        assert!(t.failed());
    }
}
