//! Predicates behind the assertions: nil-ness, truthiness and containment.

use crate::equal::is_equal;
use crate::errors::{UsageError, UsageResult};
use crate::kind::{is_assignable, same_family, Family, Kind};
use crate::value::{Type, Value};
use std::error::Error;

/// Whether the value is nil. Only channels, functions, maps, pointers,
/// interfaces and slices can be nil; scalars never are.
pub fn is_nil(value: &Value) -> bool {
    match value {
        Value::Nil => true,
        other if !other.kind().is_nillable() => false,
        Value::Slice { items, .. } => items.is_none(),
        Value::Map { entries, .. } => entries.is_none(),
        Value::Pointer { target, .. } => target.is_none(),
        Value::Interface { inner, .. } => inner.is_none(),
        Value::Chan { handle, .. } | Value::Func { handle, .. } => handle.is_none(),
        _ => false,
    }
}

/// Whether the value is truthy: not nil, not empty for slices, and not the
/// zero value of its type otherwise.
pub fn is_true(value: &Value) -> bool {
    match value {
        Value::Nil => false,
        Value::Slice { items, .. } => items.as_ref().map_or(false, |items| !items.is_empty()),
        other => !is_zero(other),
    }
}

/// Whether the value is the zero value of its type. Floats are zero only
/// when every bit is clear, so `-0.0` is not zero.
pub fn is_zero(value: &Value) -> bool {
    match value {
        Value::Nil => true,
        Value::Bool(b) => !*b,
        Value::Int(i, _) => *i == 0,
        Value::Uint(u, _) => *u == 0,
        Value::Float(x, _) => x.to_bits() == 0,
        Value::Complex(re, im, _) => re.to_bits() == 0 && im.to_bits() == 0,
        Value::String(s) => s.is_empty(),
        Value::Array { items, .. } => items.iter().all(is_zero),
        Value::Struct { fields, .. } => fields.iter().all(|(_, value)| is_zero(value)),
        nillable => is_nil(nillable),
    }
}

/// Whether `source` holds an element equal to `elem`.
///
/// `source` must be a slice or an array, possibly behind one pointer, and
/// the element must be of the collection's element family. Anything else is
/// a usage error.
pub fn contains_element(source: &Value, elem: &Value) -> UsageResult<bool> {
    let collection = match source {
        Value::Pointer {
            target: Some(target),
            ..
        } => target.as_ref(),
        other => other,
    };

    let (elem_type, items) = match collection {
        Value::Slice { elem, items } => (elem, items.as_deref().unwrap_or(&[])),
        Value::Array { elem, items } => (elem, items.as_slice()),
        other => return Err(UsageError::NotArray { kind: other.kind() }),
    };

    if !is_element_compatible(elem_type, elem) {
        return Err(UsageError::NotSameType {
            expected: elem_type.to_string(),
            actual: elem
                .type_of()
                .map_or_else(|| "nil".to_string(), |ty| ty.to_string()),
        });
    }

    Ok(items.iter().any(|item| is_equal(item, elem)))
}

fn is_element_compatible(elem_type: &Type, elem: &Value) -> bool {
    if elem_type.kind() == Kind::Interface {
        return true;
    }
    match elem.type_of() {
        Some(ty) => same_family(elem_type, &ty) != Family::Different,
        None => false,
    }
}

pub fn contains_string(s: &str, substr: &str) -> bool {
    s.contains(substr)
}

pub fn has_prefix(s: &str, prefix: &str) -> bool {
    s.starts_with(prefix)
}

pub fn has_suffix(s: &str, suffix: &str) -> bool {
    s.ends_with(suffix)
}

/// Entries of a map operand, or `None` when the map is nil or empty.
fn map_entries<'a>(map: &'a Value) -> UsageResult<Option<(&'a Type, &'a Type, &'a [(Value, Value)])>> {
    match map {
        Value::Nil => Ok(None),
        Value::Map {
            key,
            value,
            entries,
        } => Ok(entries
            .as_deref()
            .filter(|entries| !entries.is_empty())
            .map(|entries| (key, value, entries))),
        other => Err(UsageError::NotMap { kind: other.kind() }),
    }
}

/// Whether the map holds `key`.
///
/// A key whose type cannot be stored as the map's key is simply not found;
/// only a non-map operand is a usage error.
pub fn map_has_key(map: &Value, key: &Value) -> UsageResult<bool> {
    let Some((key_type, _, entries)) = map_entries(map)? else {
        return Ok(false);
    };
    let assignable = key
        .type_of()
        .map_or(false, |ty| is_assignable(&ty, key_type));
    if !assignable {
        return Ok(false);
    }

    Ok(entries.iter().any(|(k, _)| is_equal(k, key)))
}

/// Whether the map holds `value` under any key. Type mismatches are not
/// found, as with [`map_has_key`].
pub fn map_has_value(map: &Value, value: &Value) -> UsageResult<bool> {
    let Some((_, value_type, entries)) = map_entries(map)? else {
        return Ok(false);
    };
    let assignable = value
        .type_of()
        .map_or(false, |ty| is_assignable(&ty, value_type));
    if !assignable {
        return Ok(false);
    }

    Ok(entries.iter().any(|(_, v)| is_equal(v, value)))
}

/// Whether `err`, or any error in its [`source`](Error::source) chain, is of
/// type `E` and equal to `target`.
pub fn is_error_match<E>(err: &(dyn Error + 'static), target: &E) -> bool
where
    E: Error + PartialEq + 'static,
{
    let mut current = Some(err);
    while let Some(err) = current {
        if err.downcast_ref::<E>().map_or(false, |err| err == target) {
            return true;
        }
        current = err.source();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{IntWidth, Reflect};
    use std::collections::HashMap;
    use std::fmt;

    #[test]
    fn test_is_nil() {
        assert!(is_nil(&Value::Nil));
        assert!(is_nil(&Value::nil_slice(Type::Int(IntWidth::I32))));
        assert!(!is_nil(&Vec::<i32>::new().to_value()));
        assert!(is_nil(&None::<i32>.to_value()));
        assert!(!is_nil(&Some(1i32).to_value()));
        assert!(is_nil(&Value::nil_error()));
        assert!(is_nil(&Value::nil_map(Type::String, Type::String)));
        assert!(!is_nil(&0i32.to_value()));
        assert!(!is_nil(&"".to_value()));
        assert!(!is_nil(&false.to_value()));
    }

    #[test]
    fn test_is_true() {
        assert!(is_true(&1i32.to_value()));
        assert!(is_true(&"test".to_value()));
        assert!(is_true(&vec![0i32].to_value()));
        assert!(is_true(&(-0.0f64).to_value()));
        assert!(!is_true(&0i32.to_value()));
        assert!(!is_true(&"".to_value()));
        assert!(!is_true(&Vec::<i32>::new().to_value()));
        assert!(!is_true(&Value::nil_slice(Type::String)));
        assert!(!is_true(&Value::Nil));
        assert!(!is_true(&[0i32, 0].to_value()));
        assert!(is_true(&[0i32, 1].to_value()));
        assert!(!is_true(&Value::structure("S", [("a", 0i32.to_value())])));
    }

    #[test]
    fn test_contains_element() {
        let v = vec![1i32, 2, 3].to_value();
        assert!(contains_element(&v, &3i32.to_value()).unwrap());
        assert!(!contains_element(&v, &4i32.to_value()).unwrap());
        assert!(contains_element(&v, &3u64.to_value()).unwrap());
        assert!(contains_element(&[1i64, 2].to_value(), &2i8.to_value()).unwrap());
        assert!(!contains_element(&Vec::<i32>::new().to_value(), &1i32.to_value()).unwrap());
    }

    #[test]
    fn test_contains_element_through_pointer() {
        let v = Some(vec!["a", "b"]).to_value();
        assert!(contains_element(&v, &"b".to_value()).unwrap());
    }

    #[test]
    fn test_contains_element_usage_errors() {
        assert!(matches!(
            contains_element(&"not a collection".to_value(), &1i32.to_value()),
            Err(UsageError::NotArray { kind: Kind::String })
        ));
        assert!(matches!(
            contains_element(&vec![1i32, 2].to_value(), &"1".to_value()),
            Err(UsageError::NotSameType { .. })
        ));
        assert!(matches!(
            contains_element(&None::<Vec<i32>>.to_value(), &1i32.to_value()),
            Err(UsageError::NotArray { kind: Kind::Pointer })
        ));
    }

    #[test]
    fn test_contains_element_any_slice() {
        let v = vec![1i32.to_value(), "x".to_value()].to_value();
        assert!(contains_element(&v, &"x".to_value()).unwrap());
        assert!(!contains_element(&v, &true.to_value()).unwrap());
    }

    #[test]
    fn test_map_has_key() {
        let mut m = HashMap::new();
        m.insert("a".to_string(), 1i32);
        let m = m.to_value();

        assert!(map_has_key(&m, &"a".to_value()).unwrap());
        assert!(!map_has_key(&m, &"b".to_value()).unwrap());
        assert!(!map_has_key(&m, &1i32.to_value()).unwrap());
        assert!(!map_has_key(&Value::Nil, &"a".to_value()).unwrap());
        assert!(!map_has_key(&HashMap::<String, i32>::new().to_value(), &"a".to_value()).unwrap());
    }

    #[test]
    fn test_map_has_value() {
        let mut m = HashMap::new();
        m.insert("a", 1i32);
        let m = m.to_value();

        assert!(map_has_value(&m, &1i32.to_value()).unwrap());
        assert!(!map_has_value(&m, &2i32.to_value()).unwrap());
        assert!(!map_has_value(&m, &"a".to_value()).unwrap());
        assert!(!map_has_value(&m, &1i64.to_value()).unwrap());
    }

    #[test]
    fn test_map_usage_error() {
        assert!(matches!(
            map_has_key(&vec![1i32].to_value(), &0i32.to_value()),
            Err(UsageError::NotMap { kind: Kind::Slice })
        ));
        assert!(matches!(
            map_has_value(&"m".to_value(), &0i32.to_value()),
            Err(UsageError::NotMap { kind: Kind::String })
        ));
    }

    #[derive(Debug, PartialEq)]
    struct NotFound(&'static str);

    impl fmt::Display for NotFound {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{} not found", self.0)
        }
    }

    impl Error for NotFound {}

    #[derive(Debug)]
    struct Wrapped(NotFound);

    impl fmt::Display for Wrapped {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "lookup failed")
        }
    }

    impl Error for Wrapped {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_is_error_match() {
        let err = NotFound("user");
        assert!(is_error_match(&err, &NotFound("user")));
        assert!(!is_error_match(&err, &NotFound("group")));

        let wrapped = Wrapped(NotFound("user"));
        assert!(is_error_match(&wrapped, &NotFound("user")));
        assert!(!is_error_match(&wrapped, &NotFound("group")));
    }
}
