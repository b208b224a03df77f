//! Elements and their records

use crate::error::{Error, Result};
use crate::property::{PropertyDef, Value};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One entry of an element, holding a value per property in schema order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    values: Vec<Value>,
}

impl Record {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A named, schema-typed collection of records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub name: String,
    properties: Vec<PropertyDef>,
    records: Vec<Record>,
}

impl Element {
    /// Create an element with the given schema and no records.
    ///
    /// Property names must be unique; the header parser enforces this for
    /// parsed documents.
    pub fn new(name: impl Into<String>, properties: Vec<PropertyDef>) -> Self {
        Self {
            name: name.into(),
            properties,
            records: Vec::new(),
        }
    }

    /// Create an element with room for `capacity` records
    pub fn with_capacity(name: impl Into<String>, properties: Vec<PropertyDef>, capacity: usize) -> Self {
        Self {
            name: name.into(),
            properties,
            records: Vec::with_capacity(capacity),
        }
    }

    pub fn properties(&self) -> &[PropertyDef] {
        &self.properties
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Position of a property in the schema
    pub fn property_index(&self, name: &str) -> Option<usize> {
        self.properties.iter().position(|p| p.name == name)
    }

    /// Look up a field of a record by property name
    pub fn get(&self, record: usize, property: &str) -> Option<&Value> {
        let index = self.property_index(property)?;
        self.records.get(record)?.values.get(index)
    }

    /// Append a record whose values are already in schema order
    pub fn push_record(&mut self, record: Record) -> Result<()> {
        if record.values.len() != self.properties.len() {
            return Err(Error::schema_mismatch(
                &self.name,
                format!("expected {} values, got {}", self.properties.len(), record.values.len()),
            ));
        }
        for (property, value) in self.properties.iter().zip(&record.values) {
            if !property.property_type.accepts(value) {
                return Err(Error::schema_mismatch(
                    &self.name,
                    format!("value {:?} does not fit property '{}'", value, property.name),
                ));
            }
        }
        self.records.push(record);
        Ok(())
    }

    /// Append a record given as `(name, value)` pairs in any order.
    /// Values are stored in schema order.
    pub fn push_named<I, S>(&mut self, fields: I) -> Result<()>
    where
        I: IntoIterator<Item = (S, Value)>,
        S: AsRef<str>,
    {
        let mut by_name: HashMap<String, Value> = HashMap::new();
        for (name, value) in fields {
            let name = name.as_ref();
            if self.property_index(name).is_none() {
                return Err(Error::schema_mismatch(&self.name, format!("unknown property '{}'", name)));
            }
            if by_name.insert(name.to_string(), value).is_some() {
                return Err(Error::schema_mismatch(&self.name, format!("property '{}' given twice", name)));
            }
        }

        let mut values = Vec::with_capacity(self.properties.len());
        for property in &self.properties {
            let value = by_name.remove(&property.name).ok_or_else(|| {
                Error::schema_mismatch(&self.name, format!("missing property '{}'", property.name))
            })?;
            values.push(value);
        }
        self.push_record(Record::new(values))
    }

    /// Copy of this element keeping only the records at `indices`, in the
    /// order given.
    ///
    /// # Panics
    ///
    /// Panics if any index is not below `len()`.
    pub fn select(&self, indices: &[usize]) -> Element {
        Element {
            name: self.name.clone(),
            properties: self.properties.clone(),
            records: indices.iter().map(|&i| self.records[i].clone()).collect(),
        }
    }
}
