//! Property schema definitions

use crate::scalar::{Scalar, ScalarType};
use serde::{Deserialize, Serialize};

/// Declared type of a property: a single scalar or a length-prefixed list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyType {
    Scalar(ScalarType),
    List { count: ScalarType, item: ScalarType },
}

impl PropertyType {
    /// Whether `value` has the shape and item type this property declares
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (PropertyType::Scalar(ty), Value::Scalar(s)) => s.scalar_type() == *ty,
            (PropertyType::List { count, item }, Value::List(items)) => {
                Scalar::from_len(*count, items.len()).is_some()
                    && items.iter().all(|s| s.scalar_type() == *item)
            }
            _ => false,
        }
    }
}

/// A named property declaration within an element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDef {
    pub name: String,
    pub property_type: PropertyType,
}

impl PropertyDef {
    pub fn new(name: impl Into<String>, property_type: PropertyType) -> Self {
        Self {
            name: name.into(),
            property_type,
        }
    }

    pub fn scalar(name: impl Into<String>, ty: ScalarType) -> Self {
        Self::new(name, PropertyType::Scalar(ty))
    }

    pub fn list(name: impl Into<String>, count: ScalarType, item: ScalarType) -> Self {
        Self::new(name, PropertyType::List { count, item })
    }
}

/// The value of one property in one record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Scalar(Scalar),
    List(Vec<Scalar>),
}

impl Value {
    pub fn as_scalar(&self) -> Option<Scalar> {
        match self {
            Value::Scalar(s) => Some(*s),
            Value::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Scalar]> {
        match self {
            Value::Scalar(_) => None,
            Value::List(items) => Some(items),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.as_scalar().map(|s| s.as_f64())
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        Value::Scalar(scalar)
    }
}

impl From<Vec<Scalar>> for Value {
    fn from(items: Vec<Scalar>) -> Self {
        Value::List(items)
    }
}
