//! Map lookup assertions.
//!
//! A key or value whose type the map cannot hold is simply absent. Only a
//! non-map operand is a usage error.

use crate::driver::{check_usage, Mode};
use crate::errors::AssertionResult;
use crate::message::Message;
use crate::predicate;
use crate::testing::TestContext;
use crate::value::{Reflect, Value};

fn has_key_with<C>(
    t: &C,
    mode: Mode,
    map: Value,
    key: Value,
    want: bool,
    message: Message,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    let relation = if want { "to have key" } else { "not to have key" };
    check_usage(
        t,
        mode,
        predicate::map_has_key(&map, &key).map(|found| found == want),
        || format!("expect {} {} {}", map, relation, key),
        message,
    )
}

fn has_value_with<C>(
    t: &C,
    mode: Mode,
    map: Value,
    value: Value,
    want: bool,
    message: Message,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    let relation = if want { "to have value" } else { "not to have value" };
    check_usage(
        t,
        mode,
        predicate::map_has_value(&map, &value).map(|found| found == want),
        || format!("expect {} {} {}", map, relation, value),
        message,
    )
}

/// Asserts that `map` holds `key`.
pub fn map_has_key<C>(
    t: &C,
    map: impl Reflect,
    key: impl Reflect,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    has_key_with(t, Mode::Continue, map.to_value(), key.to_value(), true, message.into())
}

pub fn map_has_key_now<C>(
    t: &C,
    map: impl Reflect,
    key: impl Reflect,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    has_key_with(t, Mode::Stop, map.to_value(), key.to_value(), true, message.into())
}

pub fn not_map_has_key<C>(
    t: &C,
    map: impl Reflect,
    key: impl Reflect,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    has_key_with(t, Mode::Continue, map.to_value(), key.to_value(), false, message.into())
}

pub fn not_map_has_key_now<C>(
    t: &C,
    map: impl Reflect,
    key: impl Reflect,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    has_key_with(t, Mode::Stop, map.to_value(), key.to_value(), false, message.into())
}

/// Asserts that `map` holds `value` under some key.
pub fn map_has_value<C>(
    t: &C,
    map: impl Reflect,
    value: impl Reflect,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    has_value_with(t, Mode::Continue, map.to_value(), value.to_value(), true, message.into())
}

pub fn map_has_value_now<C>(
    t: &C,
    map: impl Reflect,
    value: impl Reflect,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    has_value_with(t, Mode::Stop, map.to_value(), value.to_value(), true, message.into())
}

pub fn not_map_has_value<C>(
    t: &C,
    map: impl Reflect,
    value: impl Reflect,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    has_value_with(t, Mode::Continue, map.to_value(), value.to_value(), false, message.into())
}

pub fn not_map_has_value_now<C>(
    t: &C,
    map: impl Reflect,
    value: impl Reflect,
    message: impl Into<Message>,
) -> AssertionResult
where
    C: TestContext + ?Sized,
{
    has_value_with(t, Mode::Stop, map.to_value(), value.to_value(), false, message.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::T;
    use std::collections::{BTreeMap, HashMap};
    use std::panic::{self, AssertUnwindSafe};

    fn scores() -> HashMap<&'static str, i32> {
        let mut m = HashMap::new();
        m.insert("alice", 90);
        m.insert("bob", 75);
        m
    }

    #[test]
    fn test_map_has_key() {
        let t = T::new("TestMapHasKey");
        assert!(map_has_key(&t, scores(), "alice", Message::Default).is_ok());
        assert!(not_map_has_key(&t, scores(), "carol", Message::Default).is_ok());
        assert!(not_map_has_key(&t, scores(), 1, Message::Default).is_ok());
        assert!(not_map_has_key(&t, HashMap::<String, i32>::new(), "a", Message::Default).is_ok());
        assert!(!t.failed());

        let mut ordered = BTreeMap::new();
        ordered.insert(1u8, "one");
        let err = map_has_key(&t, &ordered, 2u8, Message::Default).unwrap_err();
        insta::assert_snapshot!(err, @"assert error: expect map[1:one] to have key 2");
    }

    #[test]
    fn test_map_has_value() {
        let t = T::new("TestMapHasValue");
        assert!(map_has_value(&t, scores(), 75, Message::Default).is_ok());
        assert!(not_map_has_value(&t, scores(), 60, Message::Default).is_ok());
        // The map holds i32 values, an i64 is never found.
        assert!(not_map_has_value(&t, scores(), 75i64, Message::Default).is_ok());
        assert!(!t.failed());
    }

    #[test]
    fn test_map_any_values() {
        let t = T::new("TestMapAnyValues");
        let mut m: HashMap<String, Value> = HashMap::new();
        m.insert("id".into(), 7u64.to_value());
        m.insert("name".into(), "seven".to_value());
        assert!(map_has_value(&t, &m, 7i32, Message::Default).is_ok());
        assert!(map_has_value(&t, &m, "seven", Message::Default).is_ok());
    }

    #[test]
    fn test_not_a_map_panics() {
        let t = T::new("TestNotAMap");
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let _ = map_has_key(&t, vec![1, 2], 0, Message::Default);
        }));
        assert!(result.is_err());
    }
}
