//! PLY format support
//!
//! Reads and writes whole PLY documents in ASCII and binary (little/big
//! endian) form. Elements, property schemas, comments and obj_info lines are
//! kept in file order so a parsed document serializes back to an equivalent
//! file.

use crate::header::{parse_header, write_header};
use crate::{ascii, binary};
use byteorder::{BigEndian, LittleEndian};
use plydecimate_core::{Document, PlyFormat, Result};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

pub struct PlyReader;
pub struct PlyWriter;

impl PlyReader {
    /// Parse a complete PLY file held in memory
    pub fn parse(bytes: &[u8]) -> Result<Document> {
        let (header, body_offset) = parse_header(bytes)?;
        tracing::debug!(
            format = %header.format,
            elements = header.elements.len(),
            header_bytes = body_offset,
            "parsed PLY header"
        );

        let body = &bytes[body_offset..];
        let elements = match header.format {
            PlyFormat::Ascii => ascii::read_elements(body, &header.elements)?,
            PlyFormat::BinaryLittleEndian => binary::read_elements::<LittleEndian>(body, &header.elements)?,
            PlyFormat::BinaryBigEndian => binary::read_elements::<BigEndian>(body, &header.elements)?,
        };

        let mut doc = header.to_document();
        for element in elements {
            doc.add_element(element)?;
        }
        Ok(doc)
    }

    /// Read and parse everything from `reader`
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Document> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::parse(&bytes)
    }

    /// Read and parse a PLY file from disk
    pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Document> {
        let bytes = std::fs::read(path)?;
        Self::parse(&bytes)
    }
}

impl PlyWriter {
    /// Encode `doc` using its own format and byte order
    pub fn serialize(doc: &Document) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        Self::write_to(doc, &mut out)?;
        Ok(out)
    }

    /// Write `doc` to `writer`
    pub fn write_to<W: Write>(doc: &Document, writer: &mut W) -> Result<()> {
        write_header(writer, doc)?;
        for element in doc.elements() {
            match doc.format {
                PlyFormat::Ascii => ascii::write_element(writer, element)?,
                PlyFormat::BinaryLittleEndian => binary::write_element::<LittleEndian, W>(writer, element)?,
                PlyFormat::BinaryBigEndian => binary::write_element::<BigEndian, W>(writer, element)?,
            }
        }
        Ok(())
    }

    /// Write `doc` to a file on disk
    pub fn write_file<P: AsRef<Path>>(doc: &Document, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(doc, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
