//! Ordering and numeric comparison.
//!
//! Same-family operands compare in their native representation. A signed
//! and an unsigned integer are compared without converting one into the
//! other's range, so `-1` is never mistaken for `u64::MAX`.

use crate::errors::{UsageError, UsageResult};
use crate::value::Value;
use std::cmp::Ordering;
use std::ops::BitOr;

/// Set of wanted comparison outcomes, e.g. `EQUAL | GREATER` for `>=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompareMask(u8);

impl CompareMask {
    pub const EQUAL: CompareMask = CompareMask(0b001);
    pub const GREATER: CompareMask = CompareMask(0b010);
    pub const LESS: CompareMask = CompareMask(0b100);

    pub fn contains(self, other: CompareMask) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether the actual relation is one of the wanted outcomes. An
    /// unordered relation (a NaN operand) matches nothing.
    pub fn accepts(self, ordering: Option<Ordering>) -> bool {
        match ordering {
            Some(Ordering::Equal) => self.contains(CompareMask::EQUAL),
            Some(Ordering::Greater) => self.contains(CompareMask::GREATER),
            Some(Ordering::Less) => self.contains(CompareMask::LESS),
            None => false,
        }
    }
}

impl BitOr for CompareMask {
    type Output = CompareMask;

    fn bitor(self, rhs: CompareMask) -> CompareMask {
        CompareMask(self.0 | rhs.0)
    }
}

/// Whether the value may be used with the ordering assertions.
pub fn is_orderable(value: &Value) -> bool {
    value.kind().is_orderable()
}

/// Compares `a` against `b`, returning whether the relation is in `want`.
pub fn compare(a: &Value, b: &Value, want: CompareMask) -> UsageResult<bool> {
    Ok(want.accepts(order(a, b)?))
}

/// Relation of `a` to `b`. `None` when a float operand is NaN.
pub fn order(a: &Value, b: &Value) -> UsageResult<Option<Ordering>> {
    for value in [a, b] {
        if !is_orderable(value) {
            return Err(UsageError::NotOrderable {
                value: value.to_string(),
                kind: value.kind(),
            });
        }
    }

    let ordering = match (a, b) {
        (Value::Int(x, _), Value::Int(y, _)) => Some(x.cmp(y)),
        (Value::Uint(x, _), Value::Uint(y, _)) => Some(x.cmp(y)),
        (Value::Float(x, _), Value::Float(y, _)) => x.partial_cmp(y),
        (Value::String(x), Value::String(y)) => Some(x.as_bytes().cmp(y.as_bytes())),
        (Value::Int(signed, _), Value::Uint(unsigned, _)) => {
            Some(mixed_sign_order(*signed, *unsigned))
        }
        (Value::Uint(unsigned, _), Value::Int(signed, _)) => {
            Some(mixed_sign_order(*signed, *unsigned).reverse())
        }
        _ => {
            return Err(UsageError::Mismatched {
                left: a.kind(),
                right: b.kind(),
            })
        }
    };

    Ok(ordering)
}

/// Relation of a signed integer to an unsigned one.
///
/// A negative signed value is less than every unsigned value, and an
/// unsigned value above `i64::MAX` is greater than every signed value.
pub fn mixed_sign_order(signed: i64, unsigned: u64) -> Ordering {
    if signed < 0 {
        return Ordering::Less;
    }
    if unsigned > i64::MAX as u64 {
        return Ordering::Less;
    }
    signed.cmp(&(unsigned as i64))
}

pub fn is_mixed_sign_equal(signed: i64, unsigned: u64) -> bool {
    mixed_sign_order(signed, unsigned) == Ordering::Equal
}

/// Converts a numeric value into `f64`.
pub fn as_f64(value: &Value) -> UsageResult<f64> {
    match value {
        Value::Int(i, _) => Ok(*i as f64),
        Value::Uint(u, _) => Ok(*u as f64),
        Value::Float(x, _) => Ok(*x),
        other => Err(UsageError::NotNumeric {
            value: other.to_string(),
            kind: other.kind(),
        }),
    }
}

/// Tolerance-based equality: `|a - b| <= epsilon`.
pub fn is_float_equal(a: &Value, b: &Value, epsilon: f64) -> UsageResult<bool> {
    if epsilon.is_nan() || epsilon < 0.0 {
        return Err(UsageError::InvalidEpsilon(epsilon));
    }
    let (a, b) = (as_f64(a)?, as_f64(b)?);
    Ok((a - b).abs() <= epsilon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::Kind;
    use crate::value::Reflect;

    fn cmp(a: impl Reflect, b: impl Reflect, want: CompareMask) -> bool {
        compare(&a.to_value(), &b.to_value(), want).unwrap()
    }

    #[test]
    fn test_same_family() {
        assert!(cmp(2, 1, CompareMask::GREATER));
        assert!(cmp(1i8, 2i64, CompareMask::LESS));
        assert!(cmp(3u8, 3u64, CompareMask::EQUAL));
        assert!(cmp(3.14, 1.68f32, CompareMask::GREATER));
        assert!(cmp("BCD", "ABC", CompareMask::GREATER));
        assert!(!cmp(2, 2, CompareMask::GREATER));
        assert!(cmp(2, 2, CompareMask::GREATER | CompareMask::EQUAL));
    }

    #[test]
    fn test_mixed_sign() {
        assert!(cmp(-1, u64::MAX, CompareMask::LESS));
        assert!(cmp(u64::MAX, i64::MAX, CompareMask::GREATER));
        assert!(cmp(0, 0u8, CompareMask::EQUAL));
        assert!(cmp(i64::MAX, i64::MAX as u64, CompareMask::EQUAL));
        assert!(cmp(5u32, 7i16, CompareMask::LESS));
        assert!(!is_mixed_sign_equal(-1, u64::MAX));
    }

    fn assert_trichotomy<V: Reflect + Copy + std::fmt::Debug>(values: &[V]) {
        for &a in values {
            for &b in values {
                let held = [
                    cmp(a, b, CompareMask::LESS),
                    cmp(a, b, CompareMask::EQUAL),
                    cmp(a, b, CompareMask::GREATER),
                ];
                assert_eq!(held.iter().filter(|h| **h).count(), 1, "{:?} vs {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_trichotomy() {
        assert_trichotomy(&[-3i64, 0, 7, i64::MIN, i64::MAX]);
        assert_trichotomy(&[0u64, 1, 7, u64::MAX]);
        assert_trichotomy(&[0u8, 128, u8::MAX]);
        assert_trichotomy(&[-1.5f64, -0.0, 0.0, 2.25, f64::INFINITY, f64::NEG_INFINITY]);
        assert_trichotomy(&[0.5f32, 1.0, f32::MAX]);
        assert_trichotomy(&["", "a", "ab", "b", "\u{e9}"]);
    }

    #[test]
    fn test_nan_matches_nothing() {
        let all = CompareMask::LESS | CompareMask::EQUAL | CompareMask::GREATER;
        assert!(!cmp(f64::NAN, 1.0, all));
    }

    #[test]
    fn test_usage_errors() {
        let err = compare(&1i32.to_value(), &"x".to_value(), CompareMask::GREATER).unwrap_err();
        assert!(matches!(err, UsageError::Mismatched { .. }));

        let err = compare(&1i32.to_value(), &1.0f64.to_value(), CompareMask::EQUAL).unwrap_err();
        assert!(matches!(err, UsageError::Mismatched { .. }));

        let err = compare(&true.to_value(), &false.to_value(), CompareMask::EQUAL).unwrap_err();
        assert!(matches!(err, UsageError::NotOrderable { kind: Kind::Bool, .. }));
    }

    #[test]
    fn test_float_equal() {
        let eq = |a: f64, b: f64, eps: f64| is_float_equal(&a.to_value(), &b.to_value(), eps).unwrap();
        assert!(eq(1.0, 1.0 + 1e-10, 1e-7));
        assert!(!eq(1.0, 1.00001, 1e-7));
        assert!(eq(0.5, 0.5, 0.0));
        assert!(!eq(f64::NAN, f64::NAN, 1.0));
        assert!(is_float_equal(&1i32.to_value(), &1.0f32.to_value(), 1e-9).unwrap());
    }

    #[test]
    fn test_float_equal_rejects_non_numbers() {
        assert!(matches!(
            is_float_equal(&"1".to_value(), &1.0f64.to_value(), 0.1),
            Err(UsageError::NotNumeric { .. })
        ));
        assert!(matches!(
            is_float_equal(&1.0f64.to_value(), &1.0f64.to_value(), -0.1),
            Err(UsageError::InvalidEpsilon(_))
        ));
    }
}
