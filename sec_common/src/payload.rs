//! Decoded response payload and its plain-text rendering.
//!
//! The backend's schema is not fixed, so a `Payload` is a thin wrapper over an
//! untyped `serde_json::Value`. Object keys keep their document order.
//!
//! The `Display` impl writes the payload as a literal:
//! - strings single-quoted (`'AAPL'`), or double-quoted when they contain `'` but no `"`
//!   (`"it's"`); backslashes, the chosen quote and control characters are escaped,
//! - arrays as `[a, b]` and objects as `{'key': value}`,
//! - `true`/`false`/`null` as `True`/`False`/`None`,
//! - numbers as serde_json prints them.
use std::fmt::{self, Display, Formatter, Write};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::endpoint::View;
use crate::error::RequestError;
use crate::result::Result;

/// JSON-decoded response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(Value);

impl Payload {
    /// Wrap an already decoded value.
    pub fn new(value: Value) -> Self {
        Payload(value)
    }

    /// Decode a payload from a response body.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        Ok(Payload(serde_json::from_slice(body)?))
    }

    /// Value stored under a top-level `key`, if the payload is an object holding it.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.as_object().and_then(|map| map.get(key))
    }

    /// Narrow the payload to the part described by `view`.
    pub fn select(self, view: View) -> Result<Payload> {
        match view {
            View::Whole => Ok(self),
            View::Key(key) => self
                .get(key)
                .cloned()
                .map(Payload)
                .ok_or_else(|| RequestError::MissingKey(key.to_string())),
        }
    }

    /// Compact JSON text of the payload.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.0)?)
    }
}

impl Display for Payload {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_literal(f, &self.0)
    }
}

fn write_literal<W: Write>(out: &mut W, value: &Value) -> fmt::Result {
    match value {
        Value::Null => out.write_str("None"),
        Value::Bool(true) => out.write_str("True"),
        Value::Bool(false) => out.write_str("False"),
        Value::Number(n) => write!(out, "{}", n),
        Value::String(s) => write_quoted(out, s),
        Value::Array(items) => {
            out.write_char('[')?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.write_str(", ")?;
                }
                write_literal(out, item)?;
            }
            out.write_char(']')
        }
        Value::Object(map) => {
            out.write_char('{')?;
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.write_str(", ")?;
                }
                write_quoted(out, key)?;
                out.write_str(": ")?;
                write_literal(out, item)?;
            }
            out.write_char('}')
        }
    }
}

fn write_quoted<W: Write>(out: &mut W, s: &str) -> fmt::Result {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    out.write_char(quote)?;
    for c in s.chars() {
        match c {
            '\\' => out.write_str("\\\\")?,
            c if c == quote => {
                out.write_char('\\')?;
                out.write_char(c)?;
            }
            '\n' => out.write_str("\\n")?,
            '\r' => out.write_str("\\r")?,
            '\t' => out.write_str("\\t")?,
            c if c.is_control() => write!(out, "\\x{:02x}", c as u32)?,
            c => out.write_char(c)?,
        }
    }
    out.write_char(quote)
}
