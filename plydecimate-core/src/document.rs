//! Whole-file document model

use crate::element::Element;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Physical encoding of the document body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlyFormat {
    Ascii,
    BinaryLittleEndian,
    BinaryBigEndian,
}

impl PlyFormat {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "ascii" => Some(PlyFormat::Ascii),
            "binary_little_endian" => Some(PlyFormat::BinaryLittleEndian),
            "binary_big_endian" => Some(PlyFormat::BinaryBigEndian),
            _ => None,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            PlyFormat::Ascii => "ascii",
            PlyFormat::BinaryLittleEndian => "binary_little_endian",
            PlyFormat::BinaryBigEndian => "binary_big_endian",
        }
    }

    pub fn is_binary(&self) -> bool {
        !matches!(self, PlyFormat::Ascii)
    }
}

impl fmt::Display for PlyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// An ordered set of elements plus header metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub format: PlyFormat,
    pub version: String,
    pub comments: Vec<String>,
    pub obj_info: Vec<String>,
    elements: Vec<Element>,
}

impl Document {
    /// Create an empty version 1.0 document
    pub fn new(format: PlyFormat) -> Self {
        Self {
            format,
            version: "1.0".to_string(),
            comments: Vec::new(),
            obj_info: Vec::new(),
            elements: Vec::new(),
        }
    }

    /// Append an element. Names must be unique within a document.
    pub fn add_element(&mut self, element: Element) -> Result<()> {
        if self.element(&element.name).is_some() {
            return Err(Error::DuplicateElement { name: element.name });
        }
        self.elements.push(element);
        Ok(())
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn element(&self, name: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.name == name)
    }

    pub fn element_mut(&mut self, name: &str) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.name == name)
    }

    pub fn element_names(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().map(|e| e.name.as_str())
    }

    /// Swap in a replacement for the element of the same name, keeping its
    /// position. Returns the element that was replaced.
    pub fn replace_element(&mut self, element: Element) -> Result<Element> {
        let slot = self
            .element_mut(&element.name)
            .ok_or_else(|| Error::UnknownElement { name: element.name.clone() })?;
        Ok(std::mem::replace(slot, element))
    }
}
