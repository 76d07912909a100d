//! Value equality.
//!
//! [`is_equal`] answers "is this logically the same value": numbers of one
//! family compare by value whatever their width, a signed integer equals an
//! unsigned one holding the same number, and containers compare element by
//! element with the same rules.
//!
//! [`is_deep_equal`] answers "is this exactly the same value": the declared
//! types must match and the structure must match recursively.

use crate::compare::is_mixed_sign_equal;
use crate::kind::{same_family, Family, Kind};
use crate::value::{Type, Value};

pub fn is_equal(x: &Value, y: &Value) -> bool {
    match (x, y) {
        (Value::Nil, Value::Nil) => true,
        (Value::Nil, _) | (_, Value::Nil) => false,

        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Int(a, _), Value::Int(b, _)) => a == b,
        (Value::Uint(a, _), Value::Uint(b, _)) => a == b,
        (Value::Int(signed, _), Value::Uint(unsigned, _))
        | (Value::Uint(unsigned, _), Value::Int(signed, _)) => {
            is_mixed_sign_equal(*signed, *unsigned)
        }
        (Value::Float(a, _), Value::Float(b, _)) => a == b,
        // Both halves are already promoted to f64.
        (Value::Complex(ar, ai, _), Value::Complex(br, bi, _)) => ar == br && ai == bi,
        (Value::String(a), Value::String(b)) => a.as_bytes() == b.as_bytes(),

        (
            Value::Slice {
                elem: a_elem,
                items: a,
            },
            Value::Slice {
                elem: b_elem,
                items: b,
            },
        ) => {
            is_elem_compatible(a_elem, b_elem)
                && is_elements_equal(a.as_deref().unwrap_or(&[]), b.as_deref().unwrap_or(&[]))
        }
        (
            Value::Array {
                elem: a_elem,
                items: a,
            },
            Value::Array {
                elem: b_elem,
                items: b,
            },
        ) => is_elem_compatible(a_elem, b_elem) && is_elements_equal(a, b),
        (Value::Map { entries: a, .. }, Value::Map { entries: b, .. }) => is_entries_equal(
            a.as_deref().unwrap_or(&[]),
            b.as_deref().unwrap_or(&[]),
            is_equal,
        ),
        (
            Value::Struct {
                name: a_name,
                fields: a_fields,
            },
            Value::Struct {
                name: b_name,
                fields: b_fields,
            },
        ) => {
            a_name == b_name
                && a_fields.len() == b_fields.len()
                && a_fields
                    .iter()
                    .zip(b_fields)
                    .all(|((a_field, a), (b_field, b))| a_field == b_field && is_equal(a, b))
        }
        (Value::Pointer { target: a, .. }, Value::Pointer { target: b, .. }) => match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => is_pointee_equal(a, b),
            _ => false,
        },
        (Value::Interface { inner: a, .. }, Value::Interface { inner: b, .. }) => match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => is_equal(a, b),
            _ => false,
        },
        (Value::Chan { handle: a, .. }, Value::Chan { handle: b, .. })
        | (Value::Func { handle: a, .. }, Value::Func { handle: b, .. }) => a == b,

        _ => false,
    }
}

/// Element types of two collections may differ in width or sign, but not in
/// family. An `any` element type holds values of every type.
fn is_elem_compatible(a: &Type, b: &Type) -> bool {
    a.kind() == Kind::Interface
        || b.kind() == Kind::Interface
        || same_family(a, b) != Family::Different
}

fn is_elements_equal(a: &[Value], b: &[Value]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(a, b)| is_equal(a, b))
}

/// Pointers are followed once. Pointers found behind them must be deeply
/// equal.
fn is_pointee_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Pointer { .. }, _) | (_, Value::Pointer { .. }) => is_deep_equal(a, b),
        _ => is_equal(a, b),
    }
}

/// Same number of entries, and every entry of `a` has a matching key in `b`
/// holding a matching value.
fn is_entries_equal(
    a: &[(Value, Value)],
    b: &[(Value, Value)],
    eq: fn(&Value, &Value) -> bool,
) -> bool {
    a.len() == b.len()
        && a.iter().all(|(a_key, a_value)| {
            b.iter()
                .find(|(b_key, _)| eq(a_key, b_key))
                .map_or(false, |(_, b_value)| eq(a_value, b_value))
        })
}

pub fn is_deep_equal(x: &Value, y: &Value) -> bool {
    if x.type_of() != y.type_of() {
        return false;
    }

    match (x, y) {
        (Value::Nil, Value::Nil) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Int(a, _), Value::Int(b, _)) => a == b,
        (Value::Uint(a, _), Value::Uint(b, _)) => a == b,
        (Value::Float(a, _), Value::Float(b, _)) => a == b,
        (Value::Complex(ar, ai, _), Value::Complex(br, bi, _)) => ar == br && ai == bi,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Slice { items: a, .. }, Value::Slice { items: b, .. }) => match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => is_elements_deep_equal(a, b),
            _ => false,
        },
        (Value::Array { items: a, .. }, Value::Array { items: b, .. }) => {
            is_elements_deep_equal(a, b)
        }
        (Value::Map { entries: a, .. }, Value::Map { entries: b, .. }) => match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => is_entries_equal(a, b, is_deep_equal),
            _ => false,
        },
        (Value::Struct { fields: a, .. }, Value::Struct { fields: b, .. }) => {
            a.len() == b.len()
                && a
                    .iter()
                    .zip(b)
                    .all(|((a_field, a), (b_field, b))| a_field == b_field && is_deep_equal(a, b))
        }
        (Value::Pointer { target: a, .. }, Value::Pointer { target: b, .. })
        | (Value::Interface { inner: a, .. }, Value::Interface { inner: b, .. }) => {
            match (a, b) {
                (None, None) => true,
                (Some(a), Some(b)) => is_deep_equal(a, b),
                _ => false,
            }
        }
        (Value::Chan { handle: a, .. }, Value::Chan { handle: b, .. }) => a == b,
        // Functions are only deeply equal when both are nil.
        (Value::Func { handle: a, .. }, Value::Func { handle: b, .. }) => {
            a.is_none() && b.is_none()
        }
        _ => false,
    }
}

fn is_elements_deep_equal(a: &[Value], b: &[Value]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(a, b)| is_deep_equal(a, b))
}
