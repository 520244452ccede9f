//! classify — display helpers for raw LMDB keys and values.
//!
//! Keys:
//! - valid UTF-8 is shown as text;
//! - anything else is shown as `0x` + lowercase hex.
//!
//! Values get a short type label (no deserialization is attempted):
//! - `str`       — UTF-8 text made of printable chars plus `\n`, `\r`, `\t`;
//! - `int/bytes` — non-text of width 1, 2, 4 or 8 (a hint, nothing is decoded);
//! - `bytes`     — everything else;
//! - `None`      — the value is absent.
//!
//! All functions are total: every byte sequence has a display string.

use std::fmt;
use unicode_general_category::{get_general_category, GeneralCategory};

/// Probable content type of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Absent,
    Str,
    IntBytes,
    Bytes,
}

impl ValueKind {
    pub fn label(self) -> &'static str {
        match self {
            ValueKind::Absent => "None",
            ValueKind::Str => "str",
            ValueKind::IntBytes => "int/bytes",
            ValueKind::Bytes => "bytes",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Key as text if it is valid UTF-8, otherwise `0x<hex>`.
pub fn classify_key(key: &[u8]) -> String {
    match std::str::from_utf8(key) {
        Ok(s) => s.to_string(),
        Err(_) => format!("0x{}", to_hex(key)),
    }
}

/// Guess the content type of a value.
pub fn classify_value(value: Option<&[u8]>) -> ValueKind {
    let Some(v) = value else {
        return ValueKind::Absent;
    };

    if let Ok(text) = std::str::from_utf8(v) {
        if text.chars().all(|c| is_printable(c) || matches!(c, '\n' | '\r' | '\t')) {
            return ValueKind::Str;
        }
    }

    match v.len() {
        1 | 2 | 4 | 8 => ValueKind::IntBytes,
        _ => ValueKind::Bytes,
    }
}

/// `"<label> (<len> bytes)"`, or `"None"` for an absent value.
pub fn describe_value(value: Option<&[u8]>) -> String {
    match value {
        None => ValueKind::Absent.label().to_string(),
        Some(v) => format!("{} ({} bytes)", classify_value(Some(v)), v.len()),
    }
}

pub fn to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        s.push_str(&format!("{:02x}", b));
    }
    s
}

/// Printable the way `str.isprintable` sees it: ASCII space is printable;
/// control, format, surrogate, private-use, unassigned and every separator
/// other than U+0020 are not.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    !matches!(
        get_general_category(c),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::Surrogate
            | GeneralCategory::PrivateUse
            | GeneralCategory::Unassigned
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
            | GeneralCategory::SpaceSeparator
    )
}
