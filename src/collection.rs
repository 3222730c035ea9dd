//! Sampled colormaps by name, and their JSON form
//!
//! ```text
//! {
//!   "name": [[r, g, b], [r, g, b], …],
//!   …
//! }
//! ```

use std::{fmt, io::{Read, Write}};
use rgb::RGB8;
use serde::{Deserialize, Deserializer, Serialize, Serializer,
            de::{MapAccess, Visitor}, ser::SerializeMap};
use crate::Error;

/// An ordered mapping from colormap names to their sampled colors.
/// Names keep their insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaletteCollection {
    entries: Vec<(String, Vec<RGB8>)>,
}

impl PaletteCollection {
    pub fn new() -> Self { Self::default() }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Add the colors of `name`.  If `name` is already present, its
    /// colors are replaced and it keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, colors: Vec<RGB8>) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, c)) => *c = colors,
            None => self.entries.push((name, colors)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&[RGB8]> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, c)| c.as_slice())
    }

    /// Names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Names in alphabetical order.
    pub fn names_sorted(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.names().collect();
        names.sort_unstable();
        names
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[RGB8])> {
        self.entries.iter().map(|(n, c)| (n.as_str(), c.as_slice()))
    }

    /// Reorder the entries alphabetically by name.
    pub fn sort_by_name(&mut self) {
        self.entries.sort_by(|(a, _), (b, _)| a.cmp(b));
    }

    /// Colors of `name` packed as `0xRRGGBB`.
    ///
    /// ```
    /// use rgb::RGB8;
    /// use colormap_sampler::PaletteCollection;
    /// let mut c = PaletteCollection::new();
    /// c.insert("rb", vec![RGB8::new(255, 0, 0), RGB8::new(0, 0, 255)]);
    /// assert_eq!(c.packed("rb"), Some(vec![0xff0000, 0x0000ff]));
    /// assert_eq!(c.packed("none"), None);
    /// ```
    pub fn packed(&self, name: &str) -> Option<Vec<u32>> {
        self.get(name).map(|colors| colors.iter().map(|&c| pack(c)).collect())
    }

    /// Write the collection as JSON, indented by 2 spaces.
    pub fn to_writer(&self, w: impl Write) -> Result<(), Error> {
        serde_json::to_writer_pretty(w, self)?;
        Ok(())
    }

    /// Read a collection written by [`PaletteCollection::to_writer`].
    /// Every color must be an array of 3 integers in 0 ..= 255.
    pub fn from_reader(r: impl Read) -> Result<Self, Error> {
        Ok(serde_json::from_reader(r)?)
    }
}

fn pack(c: RGB8) -> u32 {
    (c.r as u32) << 16 | (c.g as u32) << 8 | c.b as u32
}

impl Serialize for PaletteCollection {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        let mut map = s.serialize_map(Some(self.entries.len()))?;
        for (name, colors) in &self.entries {
            let rgb: Vec<[u8; 3]> = colors.iter().map(|c| [c.r, c.g, c.b]).collect();
            map.serialize_entry(name, &rgb)?;
        }
        map.end()
    }
}

struct CollectionVisitor;

impl<'de> Visitor<'de> for CollectionVisitor {
    type Value = PaletteCollection;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map from colormap names to lists of [r, g, b]")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A)
                                     -> Result<Self::Value, A::Error> {
        let mut collection = PaletteCollection::new();
        while let Some((name, rgb)) = access.next_entry::<String, Vec<[u8; 3]>>()? {
            let colors = rgb.into_iter().map(|[r, g, b]| RGB8 { r, g, b }).collect();
            collection.insert(name, colors);
        }
        Ok(collection)
    }
}

impl<'de> Deserialize<'de> for PaletteCollection {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_map(CollectionVisitor)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn sample_collection() -> PaletteCollection {
        let mut c = PaletteCollection::new();
        c.insert("zebra", vec![RGB8::new(0, 0, 0), RGB8::new(255, 255, 255)]);
        c.insert("apple", vec![RGB8::new(1, 2, 3), RGB8::new(4, 5, 6)]);
        c
    }

    #[test]
    fn insertion_order() {
        let mut c = sample_collection();
        assert_eq!(c.names().collect::<Vec<_>>(), ["zebra", "apple"]);
        assert_eq!(c.names_sorted(), ["apple", "zebra"]);
        c.insert("zebra", vec![RGB8::new(9, 9, 9); 2]);
        assert_eq!(c.len(), 2);
        assert_eq!(c.names().next(), Some("zebra"));
        assert_eq!(c.get("zebra"), Some(&[RGB8::new(9, 9, 9); 2][..]));
        c.sort_by_name();
        assert_eq!(c.names().collect::<Vec<_>>(), ["apple", "zebra"]);
    }

    #[test]
    fn json_layout() {
        let mut c = PaletteCollection::new();
        c.insert("g", vec![RGB8::new(0, 0, 0), RGB8::new(255, 128, 7)]);
        let mut out = Vec::new();
        c.to_writer(&mut out).unwrap();
        let expected = "{\n  \"g\": [\n    [\n      0,\n      0,\n      0\n    ],\n    \
                        [\n      255,\n      128,\n      7\n    ]\n  ]\n}";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn read_back_keeps_order() {
        let c = sample_collection();
        let mut out = Vec::new();
        c.to_writer(&mut out).unwrap();
        let d = PaletteCollection::from_reader(&out[..]).unwrap();
        assert_eq!(c, d);
        assert_eq!(d.packed("apple"), Some(vec![0x010203, 0x040506]));
    }

    #[test]
    fn malformed_json() {
        for bad in [r#"{"a": [[1, 2]]}"#, r#"{"a": [[1, 2, 256]]}"#,
                    r#"{"a": [[1, 2, -1]]}"#, r#"["a"]"#, r#"{"a": [1, 2, 3]}"#] {
            match PaletteCollection::from_reader(bad.as_bytes()) {
                Err(Error::Json(_)) => (),
                r => panic!("{bad}: {r:?}"),
            }
        }
    }
}
