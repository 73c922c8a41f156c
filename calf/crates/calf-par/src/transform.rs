//! Singleton token transforms.
//!
//! Integer, float, and string tokens are refined into parsed scalar
//! forms as they pass through the parser; everything else is carried
//! through untouched. The string transform owns termination and escape
//! validation, because the token table deliberately accepts string
//! prefixes.

use std::str::Chars;

use calf_lex::{Token, TokenKind};

use crate::error::ParseError;
use crate::form::{FloatLit, Form, IntLit, StrLit};

/// Refine a flat token into a form, parsing scalar literals.
pub(crate) fn refine(token: Token) -> Result<Form, ParseError> {
    match token.kind {
        TokenKind::Integer => refine_integer(token),
        TokenKind::Float => refine_float(token),
        TokenKind::String => refine_string(token),
        _ => Ok(Form::Atom(token)),
    }
}

fn refine_integer(token: Token) -> Result<Form, ParseError> {
    match token.text.parse::<i64>() {
        Ok(value) => Ok(Form::Int(IntLit { value, token })),
        Err(_) => Err(ParseError::NumericOverflow { token }),
    }
}

fn refine_float(token: Token) -> Result<Form, ParseError> {
    match token.text.parse::<f64>() {
        Ok(value) => Ok(Form::Float(FloatLit { value, token })),
        Err(_) => Err(ParseError::BadNumber { token }),
    }
}

fn refine_string(token: Token) -> Result<Form, ParseError> {
    match decode_string(&token.text) {
        Ok(value) => Ok(Form::Str(StrLit { value, token })),
        Err(reason) => Err(ParseError::BadString { token, reason }),
    }
}

/// Strip the quotes off a raw string literal and decode it.
///
/// Triple-quoted strings are verbatim; ordinary strings get backslash
/// escapes applied. Returns the failure reason for unterminated or
/// malformed literals.
pub(crate) fn decode_string(raw: &str) -> Result<String, String> {
    if let Some(rest) = raw.strip_prefix("\"\"\"") {
        return match rest.strip_suffix("\"\"\"") {
            Some(body) => Ok(body.to_string()),
            None => Err("unterminated triple-quoted string".to_string()),
        };
    }

    let Some(rest) = raw.strip_prefix('"') else {
        return Err("string literal must start with a quote".to_string());
    };
    match rest.strip_suffix('"') {
        Some(body) => unescape(body),
        None => Err("unterminated string literal".to_string()),
    }
}

/// Apply backslash escapes: `\n \r \t \\ \" \' \0 \xNN \uNNNN`.
fn unescape(body: &str) -> Result<String, String> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some(escape) = chars.next() else {
            return Err("unterminated escape sequence".to_string());
        };
        match escape {
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            '\\' => out.push('\\'),
            '"' => out.push('"'),
            '\'' => out.push('\''),
            '0' => out.push('\0'),
            'x' => out.push(hex_escape(&mut chars, 2)?),
            'u' => out.push(hex_escape(&mut chars, 4)?),
            other => return Err(format!("unknown escape sequence: \\{other}")),
        }
    }
    Ok(out)
}

fn hex_escape(chars: &mut Chars<'_>, digits: usize) -> Result<char, String> {
    let mut hex = String::with_capacity(digits);
    for _ in 0..digits {
        match chars.next() {
            Some(h) if h.is_ascii_hexdigit() => hex.push(h),
            _ => return Err("invalid hex escape sequence".to_string()),
        }
    }
    let code = u32::from_str_radix(&hex, 16).map_err(|_| "invalid hex escape sequence".to_string())?;
    char::from_u32(code).ok_or_else(|| format!("invalid character escape: U+{code:04X}"))
}
