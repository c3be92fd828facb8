/*!
 The property-list representation of a colorset.

 The XML form mirrors the binary archive as a dictionary:

 ```xml
 <dict>
     <key>magic</key> <integer><!-- 0x434F4C4F52534554 --></integer>
     <key>major</key> <integer>2</integer>
     <key>minor</key> <integer>0</integer>
     <key>colors</key>
     <dict>
         <key>Background</key>
         <dict>
             <key>color</key>   <dict> red/green/blue/alpha reals </dict>
             <key>variant</key> <dict> red/green/blue/alpha reals </dict>
         </dict>
     </dict>
 </dict>
 ```

 Entries that do not form a valid color dictionary are skipped rather than
 failing the whole set, matching how the archive treats duplicate names as
 recoverable.
*/

use std::io::Cursor;

use plist::{Dictionary, Integer, Value};

use crate::{
    colorset::{ColorSet, MAGIC, MAJOR, MINOR},
    error::colorset::ColorSetError,
    model::{Color, ColorPair},
};

/// Builds the property-list value describing `set`
pub(crate) fn to_plist(set: &ColorSet) -> Value {
    let mut colors = Dictionary::new();
    for (name, pair) in set.iter() {
        colors.insert(name.to_string(), pair_to_plist(pair));
    }

    let mut root = Dictionary::new();
    root.insert("magic".to_string(), Value::Integer(Integer::from(MAGIC)));
    root.insert("major".to_string(), Value::Integer(Integer::from(MAJOR)));
    root.insert("minor".to_string(), Value::Integer(Integer::from(MINOR)));
    root.insert("colors".to_string(), Value::Dictionary(colors));

    Value::Dictionary(root)
}

/// Builds a set from a parsed property-list value
pub(crate) fn from_plist(value: &Value) -> Result<ColorSet, ColorSetError> {
    let root = value.as_dictionary().ok_or_else(|| {
        ColorSetError::InvalidFormat("property list root is not a dictionary".to_string())
    })?;

    let magic = extract_uint(root, "magic")?;
    if magic != MAGIC {
        return Err(ColorSetError::InvalidFormat(format!(
            "unknown magic tag {magic:#018x}"
        )));
    }

    let major = extract_uint(root, "major")?;
    let minor = extract_uint(root, "minor")?;
    if major != u64::from(MAJOR) || minor > u64::from(MINOR) {
        return Err(ColorSetError::InvalidFormat(format!(
            "unsupported archive version {major}.{minor}"
        )));
    }

    let mut set = ColorSet::new();

    if let Some(colors) = root.get("colors").and_then(Value::as_dictionary) {
        for (name, entry) in colors {
            let Some(entry) = entry.as_dictionary() else {
                continue;
            };
            let Some(color) = entry.get("color").and_then(plist_to_color) else {
                continue;
            };
            let variant = entry.get("variant").and_then(plist_to_color);

            set.insert(name, ColorPair::new(color, variant));
        }
    }

    Ok(set)
}

/// Serializes `set` as XML property-list bytes
pub(crate) fn to_xml_data(set: &ColorSet) -> Result<Vec<u8>, ColorSetError> {
    let mut buffer = Vec::new();
    to_plist(set)
        .to_writer_xml(&mut buffer)
        .map_err(ColorSetError::Plist)?;
    Ok(buffer)
}

/// Parses property-list bytes, XML or binary plist, into a set
pub(crate) fn from_xml_data(data: &[u8]) -> Result<ColorSet, ColorSetError> {
    let value = Value::from_reader(Cursor::new(data)).map_err(ColorSetError::Plist)?;
    from_plist(&value)
}

fn pair_to_plist(pair: &ColorPair) -> Value {
    let mut dict = Dictionary::new();
    dict.insert("color".to_string(), color_to_plist(&pair.color));
    if let Some(variant) = &pair.variant {
        dict.insert("variant".to_string(), color_to_plist(variant));
    }
    Value::Dictionary(dict)
}

fn color_to_plist(color: &Color) -> Value {
    let mut dict = Dictionary::new();
    dict.insert("red".to_string(), Value::Real(f64::from(color.r)));
    dict.insert("green".to_string(), Value::Real(f64::from(color.g)));
    dict.insert("blue".to_string(), Value::Real(f64::from(color.b)));
    dict.insert("alpha".to_string(), Value::Real(f64::from(color.a)));
    Value::Dictionary(dict)
}

fn plist_to_color(value: &Value) -> Option<Color> {
    let dict = value.as_dictionary()?;
    Some(Color::new(
        extract_component(dict, "red")?,
        extract_component(dict, "green")?,
        extract_component(dict, "blue")?,
        extract_component(dict, "alpha")?,
    ))
}

fn extract_component(dict: &Dictionary, key: &str) -> Option<f32> {
    dict.get(key)?.as_real().map(|component| component as f32)
}

fn extract_uint(dict: &Dictionary, key: &str) -> Result<u64, ColorSetError> {
    dict.get(key)
        .and_then(Value::as_unsigned_integer)
        .ok_or_else(|| ColorSetError::InvalidFormat(format!("missing integer key {key}")))
}
