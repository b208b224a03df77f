//! Scalar property types and values

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed-width numeric types a PLY property can be declared with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarType {
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
}

impl ScalarType {
    /// Resolve a header type name, accepting both the legacy and sized spellings
    pub fn from_name(name: &str) -> Option<Self> {
        let ty = match name {
            "char" | "int8" => ScalarType::I8,
            "uchar" | "uint8" => ScalarType::U8,
            "short" | "int16" => ScalarType::I16,
            "ushort" | "uint16" => ScalarType::U16,
            "int" | "int32" => ScalarType::I32,
            "uint" | "uint32" => ScalarType::U32,
            "int64" => ScalarType::I64,
            "uint64" => ScalarType::U64,
            "float" | "float32" => ScalarType::F32,
            "double" | "float64" => ScalarType::F64,
            _ => return None,
        };
        Some(ty)
    }

    /// Name written back into headers
    pub fn name(&self) -> &'static str {
        match self {
            ScalarType::I8 => "char",
            ScalarType::U8 => "uchar",
            ScalarType::I16 => "short",
            ScalarType::U16 => "ushort",
            ScalarType::I32 => "int",
            ScalarType::U32 => "uint",
            ScalarType::I64 => "int64",
            ScalarType::U64 => "uint64",
            ScalarType::F32 => "float",
            ScalarType::F64 => "double",
        }
    }

    /// Encoded width in bytes
    pub fn size(&self) -> usize {
        match self {
            ScalarType::I8 | ScalarType::U8 => 1,
            ScalarType::I16 | ScalarType::U16 => 2,
            ScalarType::I32 | ScalarType::U32 | ScalarType::F32 => 4,
            ScalarType::I64 | ScalarType::U64 | ScalarType::F64 => 8,
        }
    }

    pub fn is_integer(&self) -> bool {
        !matches!(self, ScalarType::F32 | ScalarType::F64)
    }

    /// Parse a text token as a value of this type
    pub fn parse_token(&self, token: &str) -> Option<Scalar> {
        let value = match self {
            ScalarType::I8 => Scalar::I8(token.parse().ok()?),
            ScalarType::U8 => Scalar::U8(token.parse().ok()?),
            ScalarType::I16 => Scalar::I16(token.parse().ok()?),
            ScalarType::U16 => Scalar::U16(token.parse().ok()?),
            ScalarType::I32 => Scalar::I32(token.parse().ok()?),
            ScalarType::U32 => Scalar::U32(token.parse().ok()?),
            ScalarType::I64 => Scalar::I64(token.parse().ok()?),
            ScalarType::U64 => Scalar::U64(token.parse().ok()?),
            ScalarType::F32 => Scalar::F32(token.parse().ok()?),
            ScalarType::F64 => Scalar::F64(token.parse().ok()?),
        };
        Some(value)
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single typed value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Scalar {
    I8(i8),
    U8(u8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    F32(f32),
    F64(f64),
}

impl Scalar {
    pub fn scalar_type(&self) -> ScalarType {
        match self {
            Scalar::I8(_) => ScalarType::I8,
            Scalar::U8(_) => ScalarType::U8,
            Scalar::I16(_) => ScalarType::I16,
            Scalar::U16(_) => ScalarType::U16,
            Scalar::I32(_) => ScalarType::I32,
            Scalar::U32(_) => ScalarType::U32,
            Scalar::I64(_) => ScalarType::I64,
            Scalar::U64(_) => ScalarType::U64,
            Scalar::F32(_) => ScalarType::F32,
            Scalar::F64(_) => ScalarType::F64,
        }
    }

    /// Widen to f64, lossy for 64-bit integers beyond 2^53
    pub fn as_f64(&self) -> f64 {
        match *self {
            Scalar::I8(v) => v as f64,
            Scalar::U8(v) => v as f64,
            Scalar::I16(v) => v as f64,
            Scalar::U16(v) => v as f64,
            Scalar::I32(v) => v as f64,
            Scalar::U32(v) => v as f64,
            Scalar::I64(v) => v as f64,
            Scalar::U64(v) => v as f64,
            Scalar::F32(v) => v as f64,
            Scalar::F64(v) => v,
        }
    }

    /// Interpret as a list length. `None` for negative or non-integer values.
    pub fn as_len(&self) -> Option<usize> {
        match *self {
            Scalar::I8(v) => usize::try_from(v).ok(),
            Scalar::U8(v) => Some(v as usize),
            Scalar::I16(v) => usize::try_from(v).ok(),
            Scalar::U16(v) => Some(v as usize),
            Scalar::I32(v) => usize::try_from(v).ok(),
            Scalar::U32(v) => usize::try_from(v).ok(),
            Scalar::I64(v) => usize::try_from(v).ok(),
            Scalar::U64(v) => usize::try_from(v).ok(),
            Scalar::F32(_) | Scalar::F64(_) => None,
        }
    }

    /// Build a length prefix of the given integer type.
    /// `None` if the type is a float or `len` does not fit.
    pub fn from_len(ty: ScalarType, len: usize) -> Option<Self> {
        let value = match ty {
            ScalarType::I8 => Scalar::I8(i8::try_from(len).ok()?),
            ScalarType::U8 => Scalar::U8(u8::try_from(len).ok()?),
            ScalarType::I16 => Scalar::I16(i16::try_from(len).ok()?),
            ScalarType::U16 => Scalar::U16(u16::try_from(len).ok()?),
            ScalarType::I32 => Scalar::I32(i32::try_from(len).ok()?),
            ScalarType::U32 => Scalar::U32(u32::try_from(len).ok()?),
            ScalarType::I64 => Scalar::I64(i64::try_from(len).ok()?),
            ScalarType::U64 => Scalar::U64(u64::try_from(len).ok()?),
            ScalarType::F32 | ScalarType::F64 => return None,
        };
        Some(value)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::I8(v) => write!(f, "{}", v),
            Scalar::U8(v) => write!(f, "{}", v),
            Scalar::I16(v) => write!(f, "{}", v),
            Scalar::U16(v) => write!(f, "{}", v),
            Scalar::I32(v) => write!(f, "{}", v),
            Scalar::U32(v) => write!(f, "{}", v),
            Scalar::I64(v) => write!(f, "{}", v),
            Scalar::U64(v) => write!(f, "{}", v),
            Scalar::F32(v) => write!(f, "{}", v),
            Scalar::F64(v) => write!(f, "{}", v),
        }
    }
}
