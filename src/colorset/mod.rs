/*!
 Contains logic and data structures used to parse and generate colorset
 archives.

 ## Overview

 A [`ColorSet`] is an insertion-ordered collection of named [`ColorPair`]s.
 It round-trips through two representations:

 - the binary colorset archive, built on [`ColorSetStream`]
 - an XML property list (see [`dictionary`])

 ## Archive layout

 All multi-byte values are big-endian.

 | Field         | Type                 | Value                             |
 | ------------- | -------------------- | --------------------------------- |
 | magic         | `u64`                | `0x434F4C4F52534554` (`COLORSET`) |
 | major version | `u32`                | `2`                               |
 | minor version | `u32`                | `0`                               |
 | entry count   | `u32`                |                                   |
 | name          | `u32` length + UTF-8 | per entry                         |
 | has variant   | `u8`                 | per entry, `0` or `1`             |
 | primary color | 4 × `f32`            | per entry, red through alpha      |
 | variant color | 4 × `f32`            | per entry, only when flagged      |
*/

use std::{collections::HashMap, fs, path::Path};

use crate::{
    error::{colorset::ColorSetError, stream::StreamError},
    model::{Color, ColorPair},
    stream::ColorSetStream,
};

pub mod dictionary;
mod tests;

/// `COLORSET` in ASCII
pub(crate) const MAGIC: u64 = 0x434F4C4F52534554;
pub(crate) const MAJOR: u32 = 2;
pub(crate) const MINOR: u32 = 0;

/// Smallest possible encoded entry: empty name prefix, variant flag, one color
const MIN_ENTRY_SIZE: u64 = 4 + 1 + 16;

/// The on-disk representation to use when writing a colorset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Binary,
    Xml,
}

/// An insertion-ordered collection of named color pairs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorSet {
    /// The color pairs defined by this set, keyed by name
    pairs: HashMap<String, ColorPair>,
    /// Names in insertion order
    order: Vec<String>,
    /// Child sets searched when a name is not found in this set
    children: Vec<ColorSet>,
}

impl ColorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of entries in this set, not counting children
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Whether this set itself defines `name`
    pub fn contains(&self, name: &str) -> bool {
        self.pairs.contains_key(name)
    }

    /// Gets a named color pair, falling back to child sets in the order they
    /// were added when the name is absent here
    pub fn get(&self, name: &str) -> Option<&ColorPair> {
        if let Some(pair) = self.pairs.get(name) {
            return Some(pair);
        }
        self.children.iter().find_map(|child| child.get(name))
    }

    /// Iterates this set's entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColorPair)> {
        self.order
            .iter()
            .filter_map(|name| self.pairs.get(name).map(|pair| (name.as_str(), pair)))
    }

    /// The entry names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Inserts or replaces the pair stored under `name`; the last write for a
    /// given name wins
    pub fn insert(&mut self, name: &str, pair: ColorPair) {
        if self.pairs.insert(name.to_string(), pair).is_none() {
            self.order.push(name.to_string());
        }
    }

    /// Adds a color only if no entry exists with the same name
    pub fn add_color(&mut self, name: &str, color: Color) {
        self.add_color_with_variant(name, color, None);
    }

    /// Adds a color and variant only if no entry exists with the same name
    pub fn add_color_with_variant(&mut self, name: &str, color: Color, variant: Option<Color>) {
        if !self.pairs.contains_key(name) {
            self.insert(name, ColorPair::new(color, variant));
        }
    }

    /// Sets a color, replacing any existing entry with the same name
    pub fn set_color(&mut self, name: &str, color: Color) {
        self.insert(name, ColorPair::new(color, None));
    }

    /// Sets a color and variant, replacing any existing entry with the same name
    pub fn set_color_with_variant(&mut self, name: &str, color: Color, variant: Option<Color>) {
        self.insert(name, ColorPair::new(color, variant));
    }

    /// Adds a child set; lookups fall back to children when a name is not
    /// present in this set, letting several sets combine into one
    pub fn add_child(&mut self, child: ColorSet) {
        self.children.push(child);
    }

    /// Encodes this set as binary archive bytes
    pub fn to_data(&self) -> Vec<u8> {
        let mut stream = ColorSetStream::new();

        stream.append_u64(MAGIC);
        stream.append_u32(MAJOR);
        stream.append_u32(MINOR);
        debug_assert!(self.order.len() <= u32::MAX as usize);
        stream.append_u32(self.order.len() as u32);

        for (name, pair) in self.iter() {
            stream.append_string(name);
            stream.append_bool(pair.variant.is_some());
            stream.append_color(&pair.color);
            if let Some(variant) = &pair.variant {
                stream.append_color(variant);
            }
        }

        stream.into_data()
    }

    /// Decodes a set from raw bytes.
    ///
    /// Accepts the binary archive, recognized by its magic tag, or the XML
    /// property-list representation. Decoding is all-or-nothing: on error no
    /// partial set is returned.
    pub fn from_data(data: &[u8]) -> Result<ColorSet, ColorSetError> {
        if data.len() >= 8 && data[..8] == MAGIC.to_be_bytes() {
            return Self::from_binary(data);
        }

        dictionary::from_xml_data(data).map_err(|why| match why {
            ColorSetError::Plist(_) => ColorSetError::InvalidFormat(
                "data is neither a colorset archive nor a property list".to_string(),
            ),
            other => other,
        })
    }

    fn from_binary(data: &[u8]) -> Result<ColorSet, ColorSetError> {
        let mut stream = ColorSetStream::from_bytes(data);

        let magic = stream
            .read_u64()
            .map_err(|_| ColorSetError::InvalidFormat("missing magic tag".to_string()))?;
        if magic != MAGIC {
            return Err(ColorSetError::InvalidFormat(format!(
                "unknown magic tag {magic:#018x}"
            )));
        }

        let major = stream
            .read_u32()
            .map_err(|_| ColorSetError::InvalidFormat("missing major version".to_string()))?;
        let minor = stream
            .read_u32()
            .map_err(|_| ColorSetError::InvalidFormat("missing minor version".to_string()))?;
        if major != MAJOR || minor > MINOR {
            return Err(ColorSetError::InvalidFormat(format!(
                "unsupported archive version {major}.{minor}"
            )));
        }

        let declared = stream
            .read_u32()
            .map_err(|_| ColorSetError::InvalidFormat("missing entry count".to_string()))?;

        // A corrupt count field would otherwise drive a long parse loop
        if u64::from(declared) * MIN_ENTRY_SIZE > stream.remaining() as u64 {
            return Err(ColorSetError::InvalidFormat(format!(
                "entry count {declared} exceeds available data"
            )));
        }

        let mut set = ColorSet::new();

        for parsed in 0..declared {
            let name = stream
                .read_string()
                .map_err(|why| Self::entry_error(why, parsed, declared))?;
            let has_variant = stream
                .read_bool()
                .map_err(|why| Self::entry_error(why, parsed, declared))?;
            let color = stream
                .read_color()
                .map_err(|why| Self::entry_error(why, parsed, declared))?;
            let variant = if has_variant {
                Some(
                    stream
                        .read_color()
                        .map_err(|why| Self::entry_error(why, parsed, declared))?,
                )
            } else {
                None
            };

            // Duplicate names are not an error; the last occurrence wins
            set.insert(&name, ColorPair::new(color, variant));
        }

        Ok(set)
    }

    fn entry_error(why: StreamError, parsed: u32, declared: u32) -> ColorSetError {
        match why {
            StreamError::OutOfBounds(_, _) => ColorSetError::Truncated(parsed, declared),
            other => ColorSetError::Stream(other),
        }
    }

    /// The property-list representation of this set
    pub fn to_plist(&self) -> plist::Value {
        dictionary::to_plist(self)
    }

    /// Builds a set from its property-list representation
    pub fn from_plist(value: &plist::Value) -> Result<ColorSet, ColorSetError> {
        dictionary::from_plist(value)
    }

    /// Encodes this set as an XML property list
    pub fn to_xml_data(&self) -> Result<Vec<u8>, ColorSetError> {
        dictionary::to_xml_data(self)
    }

    /// Reads a colorset file in either representation
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<ColorSet, ColorSetError> {
        let data = fs::read(path).map_err(ColorSetError::Io)?;
        Self::from_data(&data)
    }

    /// Writes this set to a file in the requested representation
    pub fn write_to<P: AsRef<Path>>(&self, path: P, format: Format) -> Result<(), ColorSetError> {
        let data = match format {
            Format::Binary => self.to_data(),
            Format::Xml => self.to_xml_data()?,
        };
        fs::write(path, data).map_err(ColorSetError::Io)
    }
}
