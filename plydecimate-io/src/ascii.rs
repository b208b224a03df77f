//! Text body encoding: one whitespace-separated line per record

use crate::header::ElementDecl;
use plydecimate_core::{Element, Error, PropertyType, Record, Result, Scalar, ScalarType, Value};
use std::io::Write;

fn malformed_record(element: &str, record: usize, message: impl Into<String>) -> Error {
    Error::MalformedRecord {
        element: element.to_string(),
        record,
        message: message.into(),
    }
}

/// Pulls tokens off one record line, turning failures into record errors
struct Tokens<'a> {
    inner: std::str::SplitAsciiWhitespace<'a>,
    element: &'a str,
    record: usize,
}

impl<'a> Tokens<'a> {
    fn scalar(&mut self, ty: ScalarType, property: &str) -> Result<Scalar> {
        let token = self.inner.next().ok_or_else(|| {
            malformed_record(self.element, self.record, format!("missing value for '{}'", property))
        })?;
        ty.parse_token(token).ok_or_else(|| {
            malformed_record(
                self.element,
                self.record,
                format!("'{}' is not a valid {} for '{}'", token, ty, property),
            )
        })
    }
}

fn parse_record(line: &str, decl: &ElementDecl, record: usize) -> Result<Record> {
    let mut tokens = Tokens {
        inner: line.split_ascii_whitespace(),
        element: &decl.name,
        record,
    };

    let mut values = Vec::with_capacity(decl.properties.len());
    for property in &decl.properties {
        let value = match property.property_type {
            PropertyType::Scalar(ty) => Value::Scalar(tokens.scalar(ty, &property.name)?),
            PropertyType::List { count, item } => {
                let len = tokens.scalar(count, &property.name)?.as_len().ok_or_else(|| {
                    malformed_record(&decl.name, record, format!("negative list length for '{}'", property.name))
                })?;
                // The length comes from the file; a line cannot hold more items than bytes.
                let mut items = Vec::with_capacity(len.min(line.len()));
                for _ in 0..len {
                    items.push(tokens.scalar(item, &property.name)?);
                }
                Value::List(items)
            }
        };
        values.push(value);
    }

    if let Some(extra) = tokens.inner.next() {
        return Err(malformed_record(&decl.name, record, format!("unexpected trailing value '{}'", extra)));
    }
    Ok(Record::new(values))
}

/// Read every declared element from a text body
pub fn read_elements(body: &[u8], decls: &[ElementDecl]) -> Result<Vec<Element>> {
    let mut lines = body
        .split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        .filter(|line| !line.iter().all(u8::is_ascii_whitespace));

    let mut elements = Vec::with_capacity(decls.len());
    for decl in decls {
        // Each record needs at least two bytes of body text.
        let capacity = decl.count.min(body.len() / 2);
        let mut element = Element::with_capacity(decl.name.clone(), decl.properties.clone(), capacity);

        for record in 0..decl.count {
            let raw = lines.next().ok_or_else(|| Error::TruncatedData {
                element: decl.name.clone(),
                record,
                expected: decl.count,
            })?;
            let line = std::str::from_utf8(raw)
                .map_err(|_| malformed_record(&decl.name, record, "line is not valid text"))?;
            element.push_record(parse_record(line, decl, record)?)?;
        }
        elements.push(element);
    }

    if lines.next().is_some() {
        tracing::debug!("ignoring trailing lines after the last element");
    }
    Ok(elements)
}

/// Write the records of one element as text lines
pub fn write_element<W: Write>(writer: &mut W, element: &Element) -> Result<()> {
    for record in element.records() {
        let mut first = true;
        for (property, value) in element.properties().iter().zip(record.values()) {
            match (property.property_type, value) {
                (PropertyType::Scalar(_), Value::Scalar(scalar)) => {
                    if !first {
                        write!(writer, " ")?;
                    }
                    write!(writer, "{}", scalar)?;
                }
                (PropertyType::List { count, .. }, Value::List(items)) => {
                    let len = Scalar::from_len(count, items.len()).ok_or_else(|| Error::SchemaMismatch {
                        element: element.name.clone(),
                        message: format!("{} items do not fit a {} count", items.len(), count),
                    })?;
                    if !first {
                        write!(writer, " ")?;
                    }
                    write!(writer, "{}", len)?;
                    for item in items {
                        write!(writer, " {}", item)?;
                    }
                }
                _ => {
                    return Err(Error::SchemaMismatch {
                        element: element.name.clone(),
                        message: format!("value shape does not match property '{}'", property.name),
                    })
                }
            }
            first = false;
        }
        writeln!(writer)?;
    }
    Ok(())
}
