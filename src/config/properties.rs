//! `.properties` reader.
//!
//! Follows the `java.util.Properties` text format:
//! - `key=value`, `key: value` and `key value` pairs
//! - `#`/`!` comment lines and blank lines
//! - a line ending in an odd number of `\` continues on the next line, whose
//!   leading whitespace is dropped
//! - escapes `\t`, `\n`, `\r`, `\f`, `\uXXXX`, and `\<char>` for any other char
//!   (`\=`, `\:`, `\ `, `\\`)
//!
//! Leading whitespace is skipped and everything after the separator is kept.
//! Later entries win.

use crate::error::ConfigError;

/// One `key = value` entry with the 1-based line it starts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Property {
    pub line: usize,
    pub key: String,
    pub value: String,
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0c')
}

pub(crate) fn parse(source: &str) -> Result<Vec<Property>, ConfigError> {
    let lines: Vec<&str> = source.lines().collect();
    let mut properties = Vec::new();
    let mut idx = 0;

    while idx < lines.len() {
        let start = idx + 1;
        let first = lines[idx].trim_start_matches(is_blank);
        idx += 1;
        if first.is_empty() || first.starts_with('#') || first.starts_with('!') {
            continue;
        }

        let mut logical = String::new();
        let mut current = first;
        while continues(current) {
            logical.push_str(&current[..current.len() - 1]);
            match lines.get(idx) {
                Some(next) => {
                    current = next.trim_start_matches(is_blank);
                    idx += 1;
                }
                None => {
                    current = "";
                    break;
                }
            }
        }
        logical.push_str(current);

        properties.push(split_entry(&logical, start)?);
    }

    Ok(properties)
}

/// Whether a natural line ends in an unescaped backslash.
fn continues(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

fn split_entry(logical: &str, line: usize) -> Result<Property, ConfigError> {
    let mut key_end = logical.len();
    let mut escaped = false;
    for (i, c) in logical.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '=' || c == ':' || is_blank(c) {
            key_end = i;
            break;
        }
    }

    let mut rest = logical[key_end..].trim_start_matches(is_blank);
    if let Some(after) = rest.strip_prefix(['=', ':']) {
        rest = after.trim_start_matches(is_blank);
    }

    let malformed = || ConfigError::MalformedLine {
        line,
        content: logical.to_string(),
    };
    let key = unescape(&logical[..key_end]).ok_or_else(malformed)?;
    if key.is_empty() {
        return Err(malformed());
    }
    let value = unescape(rest).ok_or_else(malformed)?;

    Ok(Property { line, key, value })
}

/// Decode escapes; `None` on a malformed `\u` sequence.
fn unescape(raw: &str) -> Option<String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\x0c'),
            Some('u') => {
                let unit = read_hex4(&mut chars)?;
                if (0xD800..0xDC00).contains(&unit) {
                    // high surrogate: the low half must follow as another \u
                    if chars.next() != Some('\\') || chars.next() != Some('u') {
                        return None;
                    }
                    let low = read_hex4(&mut chars)?;
                    if !(0xDC00..0xE000).contains(&low) {
                        return None;
                    }
                    let code = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
                    out.push(char::from_u32(code)?);
                } else {
                    out.push(char::from_u32(unit)?);
                }
            }
            Some(other) => out.push(other),
            None => {}
        }
    }
    Some(out)
}

fn read_hex4(chars: &mut std::str::Chars<'_>) -> Option<u32> {
    let mut value = 0;
    for _ in 0..4 {
        value = value * 16 + chars.next()?.to_digit(16)?;
    }
    Some(value)
}

/// Parse a `true`/`false` flag.
pub(crate) fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason: "expected true or false".to_string(),
        }),
    }
}
