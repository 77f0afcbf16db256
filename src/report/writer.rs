//! Streaming hierarchical JSON writer
//!
//! Renders arbitrarily deep object/array structures in a single forward pass
//! with O(depth) state. Sibling separation follows one rule: a comma is
//! emitted before a token exactly when the token's nesting depth equals the
//! depth of the previously written token. Entering a deeper level (first
//! child) or returning from a closed one never separates, and neither does
//! closing a container that received no tokens.
//!
//! Fragments produced by a nested writer at a matching start level can be
//! spliced verbatim with [`JsonWriter::write_raw`]; raw text carries its own
//! indentation, so only the separator/newline decision is applied.

use std::fmt::Display;
use std::io::{self, Write};

const INDENT: &str = "    ";

/// Float wrapper rendering with the report's fixed 2-decimal precision
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fixed(pub f64);

impl Display for Fixed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Incremental writer of nested JSON sections over an output sink
pub struct JsonWriter<W: Write> {
    sink: W,
    level: i32,
    prev_level: i32,
    initialized: bool,
    just_opened: bool,
}

impl<W: Write> JsonWriter<W> {
    /// Writer starting at the document root
    pub fn new(sink: W) -> Self {
        Self::with_level(sink, 0)
    }

    /// Writer producing a fragment whose tokens sit at `start_level`.
    ///
    /// Used to pre-render group entries that are later spliced into the
    /// document at the same depth.
    pub fn with_level(sink: W, start_level: i32) -> Self {
        Self {
            sink,
            level: start_level,
            prev_level: start_level - 1,
            initialized: false,
            just_opened: false,
        }
    }

    /// Current nesting depth
    pub fn level(&self) -> i32 {
        self.level
    }

    /// Consume the writer and return the sink
    pub fn into_inner(self) -> W {
        self.sink
    }

    pub fn open_object(&mut self) -> io::Result<()> {
        self.do_open(None, "{")
    }

    pub fn open_named_object(&mut self, name: &str) -> io::Result<()> {
        self.do_open(Some(name), "{")
    }

    pub fn open_array(&mut self, name: &str) -> io::Result<()> {
        self.do_open(Some(name), "[")
    }

    pub fn close_object(&mut self) -> io::Result<()> {
        self.do_close("}")
    }

    pub fn close_array(&mut self) -> io::Result<()> {
        self.do_close("]")
    }

    /// Emit a quoted key/value pair; every value is rendered via `Display`
    /// and quoted, floats go through [`Fixed`]
    pub fn write_field<T: Display>(&mut self, name: &str, value: T) -> io::Result<()> {
        self.token_start()?;
        write!(self.sink, "\"{}\": \"{}\"", name, value)
    }

    /// Emit an explicitly empty array value
    pub fn write_empty_array(&mut self, name: &str) -> io::Result<()> {
        self.token_start()?;
        write!(self.sink, "\"{}\": []", name)
    }

    /// Splice pre-serialized text; the separator/newline decision applies,
    /// indentation is taken from the raw text itself
    pub fn write_raw(&mut self, raw: &str) -> io::Result<()> {
        self.prepare()?;
        self.sink.write_all(raw.as_bytes())
    }

    fn do_open(&mut self, name: Option<&str>, bracket: &str) -> io::Result<()> {
        self.token_start()?;
        if let Some(name) = name {
            write!(self.sink, "\"{}\": ", name)?;
        }
        self.sink.write_all(bracket.as_bytes())?;
        self.level += 1;
        self.just_opened = true;
        Ok(())
    }

    fn do_close(&mut self, bracket: &str) -> io::Result<()> {
        self.level -= 1;
        self.token_start()?;
        self.sink.write_all(bracket.as_bytes())
    }

    fn token_start(&mut self) -> io::Result<()> {
        self.prepare()?;
        for _ in 0..self.level {
            self.sink.write_all(INDENT.as_bytes())?;
        }
        Ok(())
    }

    fn prepare(&mut self) -> io::Result<()> {
        // a close directly after its own open would land at the open's
        // depth and read as a sibling; empty containers get no separator
        if self.level == self.prev_level && !self.just_opened {
            self.sink.write_all(b",")?;
        }
        self.just_opened = false;
        self.prev_level = self.level;
        if self.initialized {
            self.sink.write_all(b"\n")?;
        }
        self.initialized = true;
        Ok(())
    }
}

/// Render a fragment at the given start level into a string
pub fn fragment<F>(start_level: i32, write: F) -> io::Result<String>
where
    F: FnOnce(&mut JsonWriter<&mut Vec<u8>>) -> io::Result<()>,
{
    let mut buf = Vec::new();
    let mut writer = JsonWriter::with_level(&mut buf, start_level);
    write(&mut writer)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F>(write: F) -> String
    where
        F: FnOnce(&mut JsonWriter<&mut Vec<u8>>) -> io::Result<()>,
    {
        fragment(0, write).unwrap()
    }

    #[test]
    fn test_flat_object() {
        let out = render(|w| {
            w.open_object()?;
            w.write_field("version", "1")?;
            w.write_field("count", 3)?;
            w.close_object()
        });
        assert_eq!(out, "{\n    \"version\": \"1\",\n    \"count\": \"3\"\n}");
    }

    #[test]
    fn test_sibling_separators_per_level() {
        let out = render(|w| {
            w.open_object()?;
            w.open_array("items")?;
            w.open_object()?;
            w.write_field("a", 1)?;
            w.close_object()?;
            w.open_object()?;
            w.write_field("a", 2)?;
            w.close_object()?;
            w.close_array()?;
            w.close_object()
        });
        // two siblings in the array -> exactly one comma at that level,
        // none after an open or before a close
        assert_eq!(
            out,
            "{\n    \"items\": [\n        {\n            \"a\": \"1\"\n        },\n        {\n            \"a\": \"2\"\n        }\n    ]\n}"
        );
    }

    #[test]
    fn test_balanced_output() {
        let out = render(|w| {
            w.open_object()?;
            w.open_array("groups")?;
            for i in 0..3 {
                w.open_object()?;
                w.write_field("id", i)?;
                w.open_array("children")?;
                w.open_object()?;
                w.write_field("leaf", "x")?;
                w.close_object()?;
                w.close_array()?;
                w.close_object()?;
            }
            w.close_array()?;
            w.close_object()
        });
        assert_eq!(
            out.matches('{').count(),
            out.matches('}').count()
        );
        assert_eq!(
            out.matches('[').count(),
            out.matches(']').count()
        );
        // 3 sibling group objects -> 2 separators at the array level
        assert_eq!(out.matches("},\n").count(), 2);
    }

    #[test]
    fn test_fixed_precision_values() {
        let out = render(|w| {
            w.open_object()?;
            w.write_field("value", Fixed(std::f64::consts::PI))?;
            w.write_field("whole", Fixed(4.0))?;
            w.close_object()
        });
        assert!(out.contains("\"value\": \"3.14\""));
        assert!(out.contains("\"whole\": \"4.00\""));
    }

    #[test]
    fn test_empty_array_field() {
        let out = render(|w| {
            w.open_object()?;
            w.write_field("shapeIDCount", 0)?;
            w.write_empty_array("shapeIDs")?;
            w.close_object()
        });
        assert!(out.contains("\"shapeIDs\": []"));
    }

    #[test]
    fn test_first_token_has_no_leading_newline() {
        let out = render(|w| w.open_object().and_then(|_| w.close_object()));
        assert_eq!(out, "{\n}");
    }

    #[test]
    fn test_empty_containers_close_without_separator() {
        // the close lands back at the open's depth; only true siblings
        // are comma-separated
        let out = render(|w| {
            w.open_object()?;
            w.open_array("items")?;
            w.open_object()?;
            w.close_object()?;
            w.open_object()?;
            w.close_object()?;
            w.close_array()?;
            w.close_object()
        });
        assert_eq!(
            out,
            "{\n    \"items\": [\n        {\n        },\n        {\n        }\n    ]\n}"
        );
    }

    #[test]
    fn test_raw_splice_keeps_own_indentation() {
        let inner = fragment(2, |w| {
            w.open_object()?;
            w.write_field("a", "1")?;
            w.close_object()
        })
        .unwrap();
        assert!(inner.starts_with("        {"));

        let out = render(|w| {
            w.open_object()?;
            w.open_array("items")?;
            w.write_raw(&inner)?;
            w.write_raw(&inner)?;
            w.close_array()?;
            w.close_object()
        });
        // two raw siblings at the same depth get separated once
        assert_eq!(out.matches("},\n").count(), 1);
        assert!(out.ends_with("    ]\n}"));
    }

    #[test]
    fn test_fragment_start_level_indentation() {
        let out = fragment(1, |w| {
            w.open_object()?;
            w.write_field("x", "y")?;
            w.close_object()
        })
        .unwrap();
        assert_eq!(out, "    {\n        \"x\": \"y\"\n    }");
    }
}
