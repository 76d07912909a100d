//! Panic interception.

use crate::equal::is_equal;
use crate::testing::is_stop_signal;
use crate::value::{Reflect, Value};
use std::any::Any;
use std::error::Error;
use std::panic::{self, AssertUnwindSafe};

/// Type name of payloads that cannot be reflected.
pub const OPAQUE_PAYLOAD: &str = "Box<dyn Any + Send>";

/// Runs `f`, returning the payload of its panic, or `None` if it returned
/// normally.
///
/// A test unit that stops itself from inside `f` is not a panic of `f`; the
/// unwind is resumed so it still reaches the unit boundary.
pub fn capture<F: FnOnce()>(f: F) -> Option<Value> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(()) => None,
        Err(payload) if is_stop_signal(payload.as_ref()) => panic::resume_unwind(payload),
        Err(payload) => Some(payload_to_value(payload)),
    }
}

/// Lowers a panic payload. Payloads of a reflectable scalar type, `String`,
/// `&'static str`, [`Value`] and boxed errors keep their value; anything
/// else becomes an opaque `Box<dyn Any + Send>` interface.
fn payload_to_value(payload: Box<dyn Any + Send>) -> Value {
    macro_rules! lower {
        ($payload:ident: $($ty:ty),* $(,)?) => {
            $(
                let $payload = match $payload.downcast::<$ty>() {
                    Ok(value) => return Reflect::to_value(&*value),
                    Err(payload) => payload,
                };
            )*
        };
    }

    lower!(
        payload: Value, String, &'static str, bool,
        i8, i16, i32, i64, isize,
        u8, u16, u32, u64, usize,
        f32, f64,
    );

    let payload = match payload.downcast::<Box<dyn Error + Send + Sync>>() {
        Ok(err) => return Value::error(&**err),
        Err(payload) => payload,
    };
    match payload.downcast::<Box<dyn Error + Send>>() {
        Ok(err) => Value::error(&**err),
        Err(_) => Value::Interface {
            name: OPAQUE_PAYLOAD.to_string(),
            inner: Some(Box::new(Value::String("opaque panic payload".to_string()))),
        },
    }
}

/// Whether a captured payload equals `expected`. No panic is compared as
/// [`Value::Nil`].
pub fn captured_equals(payload: Option<&Value>, expected: &Value) -> bool {
    is_equal(payload.unwrap_or(&Value::Nil), expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_no_panic() {
        assert!(capture(|| {}).is_none());
    }

    #[test]
    fn test_capture_message() {
        let payload = capture(|| panic!("some error")).unwrap();
        assert!(is_equal(&payload, &"some error".to_value()));

        let payload = capture(|| panic!("code {}", 42)).unwrap();
        assert!(is_equal(&payload, &"code 42".to_value()));
    }

    #[test]
    fn test_capture_value_payload() {
        let payload = capture(|| std::panic::panic_any(7i32.to_value())).unwrap();
        assert!(is_equal(&payload, &7i64.to_value()));
    }

    #[test]
    fn test_capture_scalar_payloads() {
        let payload = capture(|| std::panic::panic_any(42i32)).unwrap();
        assert!(is_equal(&payload, &42u8.to_value()));
        assert_eq!(payload.to_string(), "42");

        let payload = capture(|| std::panic::panic_any(true)).unwrap();
        assert!(is_equal(&payload, &true.to_value()));

        let payload = capture(|| std::panic::panic_any(2.5f32)).unwrap();
        assert!(is_equal(&payload, &2.5f64.to_value()));
    }

    #[test]
    fn test_capture_error_payload() {
        let err: Box<dyn Error + Send + Sync> = "disk full".into();
        let payload = capture(move || std::panic::panic_any(err)).unwrap();
        assert_eq!(payload.type_of().map(|ty| ty.to_string()).as_deref(), Some("error"));
        insta::assert_snapshot!(payload, @"disk full");
    }

    #[test]
    fn test_capture_opaque_payload() {
        struct Unknown;

        let payload = capture(|| std::panic::panic_any(Unknown)).unwrap();
        assert_eq!(payload.type_of().map(|ty| ty.to_string()).as_deref(), Some(OPAQUE_PAYLOAD));
        insta::assert_snapshot!(payload, @"opaque panic payload");
        assert!(!is_equal(&payload, &"opaque panic payload".to_value()));
    }

    #[test]
    fn test_captured_equals() {
        let payload = capture(|| panic!("boom"));
        assert!(captured_equals(payload.as_ref(), &"boom".to_value()));
        assert!(!captured_equals(payload.as_ref(), &"bang".to_value()));
        assert!(captured_equals(None, &Value::Nil));
        assert!(!captured_equals(None, &"boom".to_value()));
    }
}
