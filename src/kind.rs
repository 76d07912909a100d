//! Classification of values into kinds and numeric families.

use crate::value::{Type, Value};
use std::fmt;

/// Classification tag of a value. Every bit width of a numeric family maps
/// to the same kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Tag of the absence marker.
    Invalid,
    Bool,
    SignedInt,
    UnsignedInt,
    Float,
    Complex,
    String,
    Slice,
    Array,
    Map,
    Struct,
    Pointer,
    Interface,
    Channel,
    Function,
}

impl Kind {
    /// Kinds whose values can be nil.
    pub fn is_nillable(self) -> bool {
        matches!(
            self,
            Kind::Channel
                | Kind::Function
                | Kind::Map
                | Kind::Pointer
                | Kind::Interface
                | Kind::Slice
        )
    }

    /// Kinds accepted by the ordering assertions.
    pub fn is_orderable(self) -> bool {
        matches!(
            self,
            Kind::SignedInt | Kind::UnsignedInt | Kind::Float | Kind::String
        )
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Invalid => "invalid",
            Kind::Bool => "bool",
            Kind::SignedInt => "signed integer",
            Kind::UnsignedInt => "unsigned integer",
            Kind::Float => "float",
            Kind::Complex => "complex",
            Kind::String => "string",
            Kind::Slice => "slice",
            Kind::Array => "array",
            Kind::Map => "map",
            Kind::Struct => "struct",
            Kind::Pointer => "pointer",
            Kind::Interface => "interface",
            Kind::Channel => "channel",
            Kind::Function => "function",
        };
        f.write_str(name)
    }
}

impl Type {
    pub fn kind(&self) -> Kind {
        match self {
            Type::Bool => Kind::Bool,
            Type::Int(_) => Kind::SignedInt,
            Type::Uint(_) => Kind::UnsignedInt,
            Type::Float(_) => Kind::Float,
            Type::Complex(_) => Kind::Complex,
            Type::String => Kind::String,
            Type::Slice(_) => Kind::Slice,
            Type::Array(..) => Kind::Array,
            Type::Map(..) => Kind::Map,
            Type::Struct(_) => Kind::Struct,
            Type::Pointer(_) => Kind::Pointer,
            Type::Interface(_) => Kind::Interface,
            Type::Chan(_) => Kind::Channel,
            Type::Func(_) => Kind::Function,
        }
    }
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Nil => Kind::Invalid,
            Value::Bool(_) => Kind::Bool,
            Value::Int(..) => Kind::SignedInt,
            Value::Uint(..) => Kind::UnsignedInt,
            Value::Float(..) => Kind::Float,
            Value::Complex(..) => Kind::Complex,
            Value::String(_) => Kind::String,
            Value::Slice { .. } => Kind::Slice,
            Value::Array { .. } => Kind::Array,
            Value::Map { .. } => Kind::Map,
            Value::Struct { .. } => Kind::Struct,
            Value::Pointer { .. } => Kind::Pointer,
            Value::Interface { .. } => Kind::Interface,
            Value::Chan { .. } => Kind::Channel,
            Value::Func { .. } => Kind::Function,
        }
    }
}

/// How two types relate for comparison purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    /// Same family; compare by value.
    Same,
    /// One signed and one unsigned integer.
    MixedSign,
    Different,
}

/// Relates two types, ignoring the bit width of numeric families.
///
/// Containers (slices, arrays, maps, pointers, interfaces) relate by kind
/// alone; their content is compared element by element afterwards. Every
/// other kind requires the exact same type.
pub fn same_family(a: &Type, b: &Type) -> Family {
    match (a.kind(), b.kind()) {
        (Kind::SignedInt, Kind::UnsignedInt) | (Kind::UnsignedInt, Kind::SignedInt) => {
            Family::MixedSign
        }
        (Kind::SignedInt, Kind::SignedInt)
        | (Kind::UnsignedInt, Kind::UnsignedInt)
        | (Kind::Float, Kind::Float)
        | (Kind::Complex, Kind::Complex)
        | (Kind::Slice, Kind::Slice)
        | (Kind::Array, Kind::Array)
        | (Kind::Map, Kind::Map)
        | (Kind::Pointer, Kind::Pointer)
        | (Kind::Interface, Kind::Interface) => Family::Same,
        _ if a == b => Family::Same,
        _ => Family::Different,
    }
}

/// Whether a value of type `from` can be stored where `to` is declared.
pub fn is_assignable(from: &Type, to: &Type) -> bool {
    from == to || to.kind() == Kind::Interface
}
