//! Dynamically-typed values inspected by the assertion engine.
//!
//! Every operand handed to an assertion is lowered into a [`Value`] through
//! the [`Reflect`] trait. A value remembers its declared [`Type`], so the
//! engine can tell `1i32` from `1i64` (deep equality) while still treating
//! them as the same number (plain equality).

use std::collections::{BTreeMap, HashMap};
use std::error::Error;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Bit width of a signed integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntWidth {
    I8,
    I16,
    I32,
    I64,
    Isize,
}

/// Bit width of an unsigned integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UintWidth {
    U8,
    U16,
    U32,
    U64,
    Usize,
}

/// Precision of a float, or of each half of a complex number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatWidth {
    F32,
    F64,
}

/// Declared type of a value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Bool,
    Int(IntWidth),
    Uint(UintWidth),
    Float(FloatWidth),
    Complex(FloatWidth),
    String,
    Slice(Box<Type>),
    Array(Box<Type>, usize),
    Map(Box<Type>, Box<Type>),
    Struct(String),
    Pointer(Box<Type>),
    /// A dynamically-typed slot; `any` accepts values of every type.
    Interface(String),
    Chan(Box<Type>),
    Func(String),
}

impl Type {
    /// The `any` interface, static type of [`Value`] itself.
    pub fn any() -> Self {
        Type::Interface("any".to_string())
    }

    pub fn slice(elem: Type) -> Self {
        Type::Slice(Box::new(elem))
    }

    pub fn map(key: Type, value: Type) -> Self {
        Type::Map(Box::new(key), Box::new(value))
    }

    pub fn pointer(pointee: Type) -> Self {
        Type::Pointer(Box::new(pointee))
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Bool => write!(f, "bool"),
            Type::Int(width) => f.write_str(match width {
                IntWidth::I8 => "i8",
                IntWidth::I16 => "i16",
                IntWidth::I32 => "i32",
                IntWidth::I64 => "i64",
                IntWidth::Isize => "isize",
            }),
            Type::Uint(width) => f.write_str(match width {
                UintWidth::U8 => "u8",
                UintWidth::U16 => "u16",
                UintWidth::U32 => "u32",
                UintWidth::U64 => "u64",
                UintWidth::Usize => "usize",
            }),
            Type::Float(FloatWidth::F32) => write!(f, "f32"),
            Type::Float(FloatWidth::F64) => write!(f, "f64"),
            Type::Complex(FloatWidth::F32) => write!(f, "complex64"),
            Type::Complex(FloatWidth::F64) => write!(f, "complex128"),
            Type::String => write!(f, "string"),
            Type::Slice(elem) => write!(f, "[]{}", elem),
            Type::Array(elem, len) => write!(f, "[{}]{}", len, elem),
            Type::Map(key, value) => write!(f, "map[{}]{}", key, value),
            Type::Struct(name) => f.write_str(name),
            Type::Pointer(pointee) => write!(f, "*{}", pointee),
            Type::Interface(name) => f.write_str(name),
            Type::Chan(elem) => write!(f, "chan {}", elem),
            Type::Func(signature) => write!(f, "func{}", signature),
        }
    }
}

/// Identity of a channel or function value. Two handles are equal only if
/// they were copied from the same [`Handle::unique`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(u64);

impl Handle {
    pub fn unique() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Handle(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// A runtime value together with its declared type.
#[derive(Debug, Clone)]
pub enum Value {
    /// The absence marker. Has no type.
    Nil,
    Bool(bool),
    Int(i64, IntWidth),
    Uint(u64, UintWidth),
    Float(f64, FloatWidth),
    Complex(f64, f64, FloatWidth),
    String(String),
    /// `items` is `None` for a nil slice.
    Slice {
        elem: Type,
        items: Option<Vec<Value>>,
    },
    Array {
        elem: Type,
        items: Vec<Value>,
    },
    /// `entries` is `None` for a nil map.
    Map {
        key: Type,
        value: Type,
        entries: Option<Vec<(Value, Value)>>,
    },
    Struct {
        name: String,
        fields: Vec<(String, Value)>,
    },
    Pointer {
        pointee: Type,
        target: Option<Box<Value>>,
    },
    Interface {
        name: String,
        inner: Option<Box<Value>>,
    },
    Chan {
        elem: Type,
        handle: Option<Handle>,
    },
    Func {
        signature: String,
        handle: Option<Handle>,
    },
}

impl Value {
    /// Declared type, or `None` for [`Value::Nil`].
    pub fn type_of(&self) -> Option<Type> {
        let ty = match self {
            Value::Nil => return None,
            Value::Bool(_) => Type::Bool,
            Value::Int(_, width) => Type::Int(*width),
            Value::Uint(_, width) => Type::Uint(*width),
            Value::Float(_, width) => Type::Float(*width),
            Value::Complex(_, _, width) => Type::Complex(*width),
            Value::String(_) => Type::String,
            Value::Slice { elem, .. } => Type::Slice(Box::new(elem.clone())),
            Value::Array { elem, items } => Type::Array(Box::new(elem.clone()), items.len()),
            Value::Map { key, value, .. } => Type::Map(Box::new(key.clone()), Box::new(value.clone())),
            Value::Struct { name, .. } => Type::Struct(name.clone()),
            Value::Pointer { pointee, .. } => Type::Pointer(Box::new(pointee.clone())),
            Value::Interface { name, .. } => Type::Interface(name.clone()),
            Value::Chan { elem, .. } => Type::Chan(Box::new(elem.clone())),
            Value::Func { signature, .. } => Type::Func(signature.clone()),
        };
        Some(ty)
    }

    pub fn complex64(re: f32, im: f32) -> Self {
        Value::Complex(f64::from(re), f64::from(im), FloatWidth::F32)
    }

    pub fn complex128(re: f64, im: f64) -> Self {
        Value::Complex(re, im, FloatWidth::F64)
    }

    pub fn nil_slice(elem: Type) -> Self {
        Value::Slice { elem, items: None }
    }

    pub fn nil_map(key: Type, value: Type) -> Self {
        Value::Map {
            key,
            value,
            entries: None,
        }
    }

    /// A non-nil pointer to `target`.
    pub fn pointer_to(target: Value) -> Self {
        let pointee = target.type_of().unwrap_or_else(Type::any);
        Value::Pointer {
            pointee,
            target: Some(Box::new(target)),
        }
    }

    pub fn structure<N, F>(name: N, fields: F) -> Self
    where
        N: Into<String>,
        F: IntoIterator<Item = (&'static str, Value)>,
    {
        Value::Struct {
            name: name.into(),
            fields: fields
                .into_iter()
                .map(|(field, value)| (field.to_string(), value))
                .collect(),
        }
    }

    /// An `error` interface holding the error's message.
    pub fn error(err: &dyn Error) -> Self {
        Value::Interface {
            name: "error".to_string(),
            inner: Some(Box::new(Value::String(err.to_string()))),
        }
    }

    /// A nil `error` interface.
    pub fn nil_error() -> Self {
        Value::Interface {
            name: "error".to_string(),
            inner: None,
        }
    }

    /// A fresh, non-nil channel.
    pub fn chan(elem: Type) -> Self {
        Value::Chan {
            elem,
            handle: Some(Handle::unique()),
        }
    }

    /// A fresh, non-nil function.
    pub fn func(signature: impl Into<String>) -> Self {
        Value::Func {
            signature: signature.into(),
            handle: Some(Handle::unique()),
        }
    }
}

/// Lowers a Rust value into a [`Value`].
///
/// `static_type` describes the type even when no instance exists, which is
/// how an empty `Vec<u8>` still knows its element type.
pub trait Reflect {
    fn static_type() -> Type;

    fn to_value(&self) -> Value;
}

impl Reflect for Value {
    fn static_type() -> Type {
        Type::any()
    }

    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl<T: Reflect + ?Sized> Reflect for &T {
    fn static_type() -> Type {
        T::static_type()
    }

    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl Reflect for bool {
    fn static_type() -> Type {
        Type::Bool
    }

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

macro_rules! reflect_signed {
    ($($ty:ty => $width:ident),* $(,)?) => {
        $(
            impl Reflect for $ty {
                fn static_type() -> Type {
                    Type::Int(IntWidth::$width)
                }

                fn to_value(&self) -> Value {
                    Value::Int(*self as i64, IntWidth::$width)
                }
            }
        )*
    };
}

macro_rules! reflect_unsigned {
    ($($ty:ty => $width:ident),* $(,)?) => {
        $(
            impl Reflect for $ty {
                fn static_type() -> Type {
                    Type::Uint(UintWidth::$width)
                }

                fn to_value(&self) -> Value {
                    Value::Uint(*self as u64, UintWidth::$width)
                }
            }
        )*
    };
}

reflect_signed!(i8 => I8, i16 => I16, i32 => I32, i64 => I64, isize => Isize);
reflect_unsigned!(u8 => U8, u16 => U16, u32 => U32, u64 => U64, usize => Usize);

impl Reflect for f32 {
    fn static_type() -> Type {
        Type::Float(FloatWidth::F32)
    }

    fn to_value(&self) -> Value {
        Value::Float(f64::from(*self), FloatWidth::F32)
    }
}

impl Reflect for f64 {
    fn static_type() -> Type {
        Type::Float(FloatWidth::F64)
    }

    fn to_value(&self) -> Value {
        Value::Float(*self, FloatWidth::F64)
    }
}

impl Reflect for str {
    fn static_type() -> Type {
        Type::String
    }

    fn to_value(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl Reflect for String {
    fn static_type() -> Type {
        Type::String
    }

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl<T: Reflect> Reflect for [T] {
    fn static_type() -> Type {
        Type::slice(T::static_type())
    }

    fn to_value(&self) -> Value {
        Value::Slice {
            elem: T::static_type(),
            items: Some(self.iter().map(Reflect::to_value).collect()),
        }
    }
}

impl<T: Reflect> Reflect for Vec<T> {
    fn static_type() -> Type {
        Type::slice(T::static_type())
    }

    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn static_type() -> Type {
        Type::Array(Box::new(T::static_type()), N)
    }

    fn to_value(&self) -> Value {
        Value::Array {
            elem: T::static_type(),
            items: self.iter().map(Reflect::to_value).collect(),
        }
    }
}

/// `None` is a nil pointer, `Some` points at its content.
impl<T: Reflect> Reflect for Option<T> {
    fn static_type() -> Type {
        Type::pointer(T::static_type())
    }

    fn to_value(&self) -> Value {
        Value::Pointer {
            pointee: T::static_type(),
            target: self.as_ref().map(|inner| Box::new(inner.to_value())),
        }
    }
}

impl<T: Reflect> Reflect for Box<T> {
    fn static_type() -> Type {
        Type::pointer(T::static_type())
    }

    fn to_value(&self) -> Value {
        Value::Pointer {
            pointee: T::static_type(),
            target: Some(Box::new(self.as_ref().to_value())),
        }
    }
}

fn map_value<'a, K, V, I>(entries: I) -> Value
where
    K: Reflect + 'a,
    V: Reflect + 'a,
    I: Iterator<Item = (&'a K, &'a V)>,
{
    Value::Map {
        key: K::static_type(),
        value: V::static_type(),
        entries: Some(entries.map(|(k, v)| (k.to_value(), v.to_value())).collect()),
    }
}

impl<K: Reflect, V: Reflect, S> Reflect for HashMap<K, V, S> {
    fn static_type() -> Type {
        Type::map(K::static_type(), V::static_type())
    }

    fn to_value(&self) -> Value {
        map_value(self.iter())
    }
}

impl<K: Reflect, V: Reflect> Reflect for BTreeMap<K, V> {
    fn static_type() -> Type {
        Type::map(K::static_type(), V::static_type())
    }

    fn to_value(&self) -> Value {
        map_value(self.iter())
    }
}

fn write_list<'a, I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    I: IntoIterator<Item = &'a Value>,
{
    f.write_str("[")?;
    for (idx, item) in items.into_iter().enumerate() {
        if idx > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{}", item)?;
    }
    f.write_str("]")
}

fn write_float(f: &mut fmt::Formatter<'_>, value: f64, width: FloatWidth) -> fmt::Result {
    match width {
        FloatWidth::F32 => write!(f, "{}", value as f32),
        FloatWidth::F64 => write!(f, "{}", value),
    }
}

/// Renders values the way failure messages show operands: `[1 2 3]`,
/// `map[a:1]`, `{1 two}`, `&{1}`, `<nil>`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("<nil>"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i, _) => write!(f, "{}", i),
            Value::Uint(u, _) => write!(f, "{}", u),
            Value::Float(x, width) => write_float(f, *x, *width),
            Value::Complex(re, im, width) => {
                f.write_str("(")?;
                write_float(f, *re, *width)?;
                if im.is_sign_negative() {
                    f.write_str("-")?;
                } else {
                    f.write_str("+")?;
                }
                write_float(f, im.abs(), *width)?;
                f.write_str("i)")
            }
            Value::String(s) => f.write_str(s),
            Value::Slice { items, .. } => write_list(f, items.iter().flatten()),
            Value::Array { items, .. } => write_list(f, items),
            Value::Map { entries, .. } => {
                // Entry order of hash maps is unstable, render sorted.
                let mut rendered: Vec<String> = entries
                    .iter()
                    .flatten()
                    .map(|(k, v)| format!("{}:{}", k, v))
                    .collect();
                rendered.sort();
                write!(f, "map[{}]", rendered.join(" "))
            }
            Value::Struct { fields, .. } => {
                f.write_str("{")?;
                for (idx, (_, value)) in fields.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", value)?;
                }
                f.write_str("}")
            }
            Value::Pointer { target: None, .. } => f.write_str("<nil>"),
            Value::Pointer {
                target: Some(target),
                ..
            } => write!(f, "&{}", target),
            Value::Interface { inner: None, .. } => f.write_str("<nil>"),
            Value::Interface {
                inner: Some(inner), ..
            } => write!(f, "{}", inner),
            Value::Chan { handle: None, .. } | Value::Func { handle: None, .. } => {
                f.write_str("<nil>")
            }
            Value::Chan {
                handle: Some(Handle(id)),
                ..
            } => write!(f, "chan#{}", id),
            Value::Func {
                handle: Some(Handle(id)),
                ..
            } => write!(f, "func#{}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widths_are_kept() {
        assert_eq!(1i8.to_value().type_of(), Some(Type::Int(IntWidth::I8)));
        assert_eq!(1u64.to_value().type_of(), Some(Type::Uint(UintWidth::U64)));
        assert_eq!(1.5f32.to_value().type_of(), Some(Type::Float(FloatWidth::F32)));
        assert_eq!(Value::Nil.type_of(), None);
    }

    #[test]
    fn test_empty_vec_knows_element_type() {
        let empty: Vec<u16> = Vec::new();
        assert_eq!(
            empty.to_value().type_of(),
            Some(Type::slice(Type::Uint(UintWidth::U16)))
        );
    }

    #[test]
    fn test_array_type_carries_length() {
        assert_eq!(
            [1i32, 2, 3].to_value().type_of(),
            Some(Type::Array(Box::new(Type::Int(IntWidth::I32)), 3))
        );
    }

    #[test]
    fn test_option_is_pointer() {
        let none: Option<i32> = None;
        assert!(matches!(none.to_value(), Value::Pointer { target: None, .. }));
        assert!(matches!(Some(1i32).to_value(), Value::Pointer { target: Some(_), .. }));
    }

    #[test]
    fn test_handles_are_unique() {
        assert_ne!(Handle::unique(), Handle::unique());
    }

    #[test]
    fn test_display() {
        let mut map = HashMap::new();
        map.insert("b", 2i32);
        map.insert("a", 1);

        insta::assert_snapshot!(vec![1i32, 2, 3].to_value(), @"[1 2 3]");
        insta::assert_snapshot!(map.to_value(), @"map[a:1 b:2]");
        insta::assert_snapshot!(Value::structure("Point", [("x", 1i32.to_value()), ("y", "two".to_value())]), @"{1 two}");
        insta::assert_snapshot!(Some(3i32).to_value(), @"&3");
        insta::assert_snapshot!(Value::nil_error(), @"<nil>");
        insta::assert_snapshot!(Value::complex128(1.0, -2.5), @"(1-2.5i)");
        insta::assert_snapshot!(0.1f32.to_value(), @"0.1");
    }

    #[test]
    fn test_type_display() {
        assert_eq!(
            Type::map(Type::String, Type::slice(Type::Int(IntWidth::I64))).to_string(),
            "map[string][]i64"
        );
        assert_eq!(Type::pointer(Type::Struct("Point".into())).to_string(), "*Point");
    }
}
