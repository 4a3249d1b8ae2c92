//! Encoding helpers for values that end up inside page markup.

use std::borrow::Cow;
use std::io;

use serde::Serialize;
use serde_json::ser::Formatter;

/// Replaces the HTML special characters `&`, `<`, `>`, `"` and `'` with
/// their entities. Borrows the input when nothing needs replacing.
pub fn html_encode(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }

    let mut encoded = String::with_capacity(value.len() + 16);
    for ch in value.chars() {
        match ch {
            '&' => encoded.push_str("&amp;"),
            '<' => encoded.push_str("&lt;"),
            '>' => encoded.push_str("&gt;"),
            '"' => encoded.push_str("&quot;"),
            '\'' => encoded.push_str("&#039;"),
            _ => encoded.push(ch),
        }
    }
    Cow::Owned(encoded)
}

/// Compact JSON formatter that also escapes `<`, `>`, `&` and `'` inside
/// strings, so the output can be dropped into an inline `<script>` block or
/// an HTML attribute without closing it early.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScriptSafeFormatter;

impl Formatter for ScriptSafeFormatter {
    fn write_string_fragment<W>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (index, byte) in fragment.bytes().enumerate() {
            let escaped = match byte {
                b'<' => "\\u003C",
                b'>' => "\\u003E",
                b'&' => "\\u0026",
                b'\'' => "\\u0027",
                _ => continue,
            };
            writer.write_all(&fragment.as_bytes()[start..index])?;
            writer.write_all(escaped.as_bytes())?;
            start = index + 1;
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }
}

/// Serializes `value` as compact JSON using [`ScriptSafeFormatter`].
///
/// # Errors
///
/// Returns an error if `value` fails to serialize, e.g. a map with
/// non-string keys.
pub fn to_script_json<T>(value: &T) -> serde_json::Result<String>
where
    T: ?Sized + Serialize,
{
    let mut buffer = Vec::with_capacity(128);
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, ScriptSafeFormatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(buffer)
        .map_err(<serde_json::Error as serde::ser::Error>::custom)
}
