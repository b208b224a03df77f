//! PLY header tokenizing and writing

use plydecimate_core::{Document, Element, Error, PlyFormat, PropertyDef, PropertyType, Result, ScalarType};
use std::io::Write;

/// An element declaration: the schema plus how many records follow
#[derive(Debug, Clone, PartialEq)]
pub struct ElementDecl {
    pub name: String,
    pub count: usize,
    pub properties: Vec<PropertyDef>,
}

/// Everything declared before `end_header`
#[derive(Debug, Clone, PartialEq)]
pub struct PlyHeader {
    pub format: PlyFormat,
    pub version: String,
    pub comments: Vec<String>,
    pub obj_info: Vec<String>,
    pub elements: Vec<ElementDecl>,
}

impl PlyHeader {
    /// Empty document carrying this header's metadata
    pub fn to_document(&self) -> Document {
        let mut doc = Document::new(self.format);
        doc.version = self.version.clone();
        doc.comments = self.comments.clone();
        doc.obj_info = self.obj_info.clone();
        doc
    }
}

fn malformed(line: usize, message: impl Into<String>) -> Error {
    Error::MalformedHeader {
        line,
        message: message.into(),
    }
}

/// Text following a leading keyword, minus one separating blank
fn rest_after<'a>(line: &'a str, keyword: &str) -> &'a str {
    let rest = &line[keyword.len()..];
    rest.strip_prefix(' ')
        .or_else(|| rest.strip_prefix('\t'))
        .unwrap_or(rest)
}

fn parse_type(name: &str) -> Result<ScalarType> {
    ScalarType::from_name(name).ok_or_else(|| Error::UnsupportedType {
        type_name: name.to_string(),
    })
}

/// Records of a property-less element carry no data, so a non-zero count
/// cannot be checked against the body.
fn check_has_properties(element: Option<&ElementDecl>, line: usize) -> Result<()> {
    match element {
        Some(e) if e.properties.is_empty() && e.count > 0 => Err(malformed(
            line,
            format!("element '{}' declares {} records but no properties", e.name, e.count),
        )),
        _ => Ok(()),
    }
}

/// Tokenize the header at the start of `bytes`.
///
/// Returns the header and the offset of the first body byte.
pub fn parse_header(bytes: &[u8]) -> Result<(PlyHeader, usize)> {
    let mut format: Option<(PlyFormat, String)> = None;
    let mut comments = Vec::new();
    let mut obj_info = Vec::new();
    let mut elements: Vec<ElementDecl> = Vec::new();

    let mut offset = 0;
    let mut line_no = 0;

    loop {
        if offset >= bytes.len() {
            return Err(malformed(line_no, "missing end_header"));
        }
        let remaining = &bytes[offset..];
        let (raw, next_offset) = match remaining.iter().position(|&b| b == b'\n') {
            Some(pos) => (&remaining[..pos], offset + pos + 1),
            None => (remaining, bytes.len()),
        };
        offset = next_offset;
        line_no += 1;

        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        let line = std::str::from_utf8(raw)
            .map_err(|_| malformed(line_no, "header line is not valid text"))?;

        if line_no == 1 {
            if line.trim_end() != "ply" {
                return Err(malformed(line_no, "missing 'ply' magic"));
            }
            continue;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(&keyword) = tokens.first() else {
            continue;
        };

        match keyword {
            "format" => {
                if format.is_some() {
                    return Err(malformed(line_no, "duplicate format line"));
                }
                if tokens.len() != 3 {
                    return Err(malformed(line_no, "expected 'format <encoding> <version>'"));
                }
                let encoding = PlyFormat::from_keyword(tokens[1])
                    .ok_or_else(|| malformed(line_no, format!("unknown encoding '{}'", tokens[1])))?;
                format = Some((encoding, tokens[2].to_string()));
            }
            "comment" => comments.push(rest_after(line.trim_start(), "comment").to_string()),
            "obj_info" => obj_info.push(rest_after(line.trim_start(), "obj_info").to_string()),
            "element" => {
                if tokens.len() != 3 {
                    return Err(malformed(line_no, "expected 'element <name> <count>'"));
                }
                let name = tokens[1];
                let count = tokens[2]
                    .parse::<usize>()
                    .map_err(|_| malformed(line_no, format!("invalid element count '{}'", tokens[2])))?;
                if elements.iter().any(|e| e.name == name) {
                    return Err(malformed(line_no, format!("duplicate element '{}'", name)));
                }
                check_has_properties(elements.last(), line_no)?;
                elements.push(ElementDecl {
                    name: name.to_string(),
                    count,
                    properties: Vec::new(),
                });
            }
            "property" => {
                let element = elements
                    .last_mut()
                    .ok_or_else(|| malformed(line_no, "property declared before any element"))?;
                let property = match tokens.as_slice() {
                    ["property", "list", count, item, name] => {
                        let count = parse_type(count)?;
                        if !count.is_integer() {
                            return Err(Error::UnsupportedType {
                                type_name: format!("list count type {}", count),
                            });
                        }
                        PropertyDef::list(*name, count, parse_type(item)?)
                    }
                    ["property", "list", ..] => {
                        return Err(malformed(line_no, "expected 'property list <count-type> <item-type> <name>'"));
                    }
                    ["property", ty, name] => PropertyDef::scalar(*name, parse_type(ty)?),
                    _ => return Err(malformed(line_no, "expected 'property <type> <name>'")),
                };
                if element.properties.iter().any(|p| p.name == property.name) {
                    return Err(malformed(
                        line_no,
                        format!("duplicate property '{}' in element '{}'", property.name, element.name),
                    ));
                }
                element.properties.push(property);
            }
            "end_header" => {
                check_has_properties(elements.last(), line_no)?;
                break;
            }
            other => return Err(malformed(line_no, format!("unknown keyword '{}'", other))),
        }
    }

    let (format, version) = format.ok_or_else(|| malformed(line_no, "missing format line"))?;

    Ok((
        PlyHeader {
            format,
            version,
            comments,
            obj_info,
            elements,
        },
        offset,
    ))
}

fn write_property<W: Write>(writer: &mut W, property: &PropertyDef) -> Result<()> {
    match property.property_type {
        PropertyType::Scalar(ty) => writeln!(writer, "property {} {}", ty, property.name)?,
        PropertyType::List { count, item } => {
            writeln!(writer, "property list {} {} {}", count, item, property.name)?
        }
    }
    Ok(())
}

fn write_element_decl<W: Write>(writer: &mut W, element: &Element) -> Result<()> {
    writeln!(writer, "element {} {}", element.name, element.len())?;
    for property in element.properties() {
        write_property(writer, property)?;
    }
    Ok(())
}

/// Write the header describing `doc`, including the `end_header` line
pub fn write_header<W: Write>(writer: &mut W, doc: &Document) -> Result<()> {
    writeln!(writer, "ply")?;
    writeln!(writer, "format {} {}", doc.format, doc.version)?;
    for comment in &doc.comments {
        writeln!(writer, "comment {}", comment)?;
    }
    for info in &doc.obj_info {
        writeln!(writer, "obj_info {}", info)?;
    }
    for element in doc.elements() {
        write_element_decl(writer, element)?;
    }
    writeln!(writer, "end_header")?;
    Ok(())
}
