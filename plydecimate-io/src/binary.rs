//! Binary body encoding with fixed-width scalars in a declared byte order

use crate::header::ElementDecl;
use byteorder::{ByteOrder, ReadBytesExt, WriteBytesExt};
use plydecimate_core::{Element, Error, PropertyType, Record, Result, Scalar, ScalarType, Value};
use std::io::{self, Write};

fn read_scalar<B: ByteOrder>(cursor: &mut &[u8], ty: ScalarType) -> io::Result<Scalar> {
    let value = match ty {
        ScalarType::I8 => Scalar::I8(cursor.read_i8()?),
        ScalarType::U8 => Scalar::U8(cursor.read_u8()?),
        ScalarType::I16 => Scalar::I16(cursor.read_i16::<B>()?),
        ScalarType::U16 => Scalar::U16(cursor.read_u16::<B>()?),
        ScalarType::I32 => Scalar::I32(cursor.read_i32::<B>()?),
        ScalarType::U32 => Scalar::U32(cursor.read_u32::<B>()?),
        ScalarType::I64 => Scalar::I64(cursor.read_i64::<B>()?),
        ScalarType::U64 => Scalar::U64(cursor.read_u64::<B>()?),
        ScalarType::F32 => Scalar::F32(cursor.read_f32::<B>()?),
        ScalarType::F64 => Scalar::F64(cursor.read_f64::<B>()?),
    };
    Ok(value)
}

fn write_scalar<B: ByteOrder, W: Write>(writer: &mut W, scalar: Scalar) -> io::Result<()> {
    match scalar {
        Scalar::I8(v) => writer.write_i8(v),
        Scalar::U8(v) => writer.write_u8(v),
        Scalar::I16(v) => writer.write_i16::<B>(v),
        Scalar::U16(v) => writer.write_u16::<B>(v),
        Scalar::I32(v) => writer.write_i32::<B>(v),
        Scalar::U32(v) => writer.write_u32::<B>(v),
        Scalar::I64(v) => writer.write_i64::<B>(v),
        Scalar::U64(v) => writer.write_u64::<B>(v),
        Scalar::F32(v) => writer.write_f32::<B>(v),
        Scalar::F64(v) => writer.write_f64::<B>(v),
    }
}

/// Error raised for a record that ran out of bytes
fn truncated(decl: &ElementDecl, record: usize, err: io::Error) -> Error {
    if err.kind() == io::ErrorKind::UnexpectedEof {
        Error::TruncatedData {
            element: decl.name.clone(),
            record,
            expected: decl.count,
        }
    } else {
        Error::Io(err)
    }
}

fn read_record<B: ByteOrder>(cursor: &mut &[u8], decl: &ElementDecl, record: usize) -> Result<Record> {
    let mut values = Vec::with_capacity(decl.properties.len());
    for property in &decl.properties {
        let value = match property.property_type {
            PropertyType::Scalar(ty) => {
                Value::Scalar(read_scalar::<B>(cursor, ty).map_err(|e| truncated(decl, record, e))?)
            }
            PropertyType::List { count, item } => {
                let len = read_scalar::<B>(cursor, count).map_err(|e| truncated(decl, record, e))?;
                let len = len.as_len().ok_or_else(|| Error::MalformedRecord {
                    element: decl.name.clone(),
                    record,
                    message: format!("negative list length {} for '{}'", len, property.name),
                })?;
                // Check the payload is there before allocating for it.
                if cursor.len() < len.saturating_mul(item.size()) {
                    return Err(Error::TruncatedData {
                        element: decl.name.clone(),
                        record,
                        expected: decl.count,
                    });
                }
                let mut items = Vec::with_capacity(len);
                for _ in 0..len {
                    items.push(read_scalar::<B>(cursor, item).map_err(|e| truncated(decl, record, e))?);
                }
                Value::List(items)
            }
        };
        values.push(value);
    }
    Ok(Record::new(values))
}

/// Read every declared element from a binary body
pub fn read_elements<B: ByteOrder>(body: &[u8], decls: &[ElementDecl]) -> Result<Vec<Element>> {
    let mut cursor = body;
    let mut elements = Vec::with_capacity(decls.len());

    for decl in decls {
        // A fixed-width element can be bounds-checked up front.
        let fixed_width: Option<usize> = decl
            .properties
            .iter()
            .map(|p| match p.property_type {
                PropertyType::Scalar(ty) => Some(ty.size()),
                PropertyType::List { .. } => None,
            })
            .sum();
        let capacity = match fixed_width {
            Some(width) if width > 0 => decl.count.min(cursor.len() / width),
            _ => decl.count.min(cursor.len()),
        };

        let mut element = Element::with_capacity(decl.name.clone(), decl.properties.clone(), capacity);
        for record in 0..decl.count {
            element.push_record(read_record::<B>(&mut cursor, decl, record)?)?;
        }
        tracing::trace!(element = %decl.name, records = decl.count, "decoded binary element");
        elements.push(element);
    }

    if !cursor.is_empty() {
        tracing::debug!(bytes = cursor.len(), "ignoring trailing bytes after the last element");
    }
    Ok(elements)
}

/// Write the records of one element in binary form
pub fn write_element<B: ByteOrder, W: Write>(writer: &mut W, element: &Element) -> Result<()> {
    for record in element.records() {
        for (property, value) in element.properties().iter().zip(record.values()) {
            match (property.property_type, value) {
                (PropertyType::Scalar(_), Value::Scalar(scalar)) => write_scalar::<B, W>(writer, *scalar)?,
                (PropertyType::List { count, .. }, Value::List(items)) => {
                    let len = Scalar::from_len(count, items.len()).ok_or_else(|| Error::SchemaMismatch {
                        element: element.name.clone(),
                        message: format!("{} items do not fit a {} count", items.len(), count),
                    })?;
                    write_scalar::<B, W>(writer, len)?;
                    for item in items {
                        write_scalar::<B, W>(writer, *item)?;
                    }
                }
                _ => {
                    return Err(Error::SchemaMismatch {
                        element: element.name.clone(),
                        message: format!("value shape does not match property '{}'", property.name),
                    })
                }
            }
        }
    }
    Ok(())
}
