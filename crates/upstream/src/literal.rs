//! Reader for Python data literals, the format served by Jenkins' `api/python`.
//!
//! Only literal syntax is accepted: dicts, lists, tuples, strings, numbers,
//! `True`, `False` and `None`. The result is a [`serde_json::Value`] so the
//! usual serde derive machinery can take it from there.

use serde::de::DeserializeOwned;
use serde_json::{Map, Number, Value};
use thiserror::Error;

const MAX_DEPTH: usize = 128;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LiteralError {
    #[error("unexpected end of input at offset {0}")]
    UnexpectedEnd(usize),

    #[error("unexpected character {found:?} at offset {offset}")]
    UnexpectedChar { found: char, offset: usize },

    #[error("invalid escape sequence at offset {0}")]
    InvalidEscape(usize),

    #[error("invalid number {text:?} at offset {offset}")]
    InvalidNumber { text: String, offset: usize },

    #[error("dict key at offset {0} is not a string")]
    UnsupportedKey(usize),

    #[error("literal nested deeper than {MAX_DEPTH} levels at offset {0}")]
    TooDeep(usize),

    #[error("trailing characters at offset {0}")]
    TrailingCharacters(usize),
}

/// Parses a single Python literal into a JSON value.
///
/// # Errors
/// Returns error if `input` is not exactly one well-formed literal.
pub fn parse_literal(input: &str) -> Result<Value, LiteralError> {
    let mut parser = Parser { input, pos: 0 };
    let value = parser.value(0)?;
    parser.skip_whitespace();
    if parser.pos < input.len() {
        return Err(LiteralError::TrailingCharacters(parser.pos));
    }
    Ok(value)
}

/// Parses a Python literal and deserializes it into `T`.
///
/// # Errors
/// Returns error if the literal is malformed or does not match `T`.
pub fn from_literal<T: DeserializeOwned>(input: &str) -> anyhow::Result<T> {
    Ok(serde_json::from_value(parse_literal(input)?)?)
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn unexpected(&self) -> LiteralError {
        match self.peek() {
            Some(found) => LiteralError::UnexpectedChar {
                found,
                offset: self.pos,
            },
            None => LiteralError::UnexpectedEnd(self.pos),
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), LiteralError> {
        self.skip_whitespace();
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    fn value(&mut self, depth: usize) -> Result<Value, LiteralError> {
        self.skip_whitespace();
        if depth > MAX_DEPTH {
            return Err(LiteralError::TooDeep(self.pos));
        }
        match self.peek() {
            Some('{') => self.dict(depth),
            Some('[') => self.sequence(']', depth).map(|(items, _)| Value::Array(items)),
            Some('(') => self.tuple(depth),
            Some('\'' | '"') => self.string().map(Value::String),
            Some('u' | 'U') if self.prefixed_string() => {
                self.pos += 1;
                self.string().map(Value::String)
            }
            Some(c) if c.is_ascii_digit() || c == '-' || c == '+' || c == '.' => self.number(),
            Some(c) if c.is_alphabetic() || c == '_' => self.keyword(),
            _ => Err(self.unexpected()),
        }
    }

    /// `u'...'`, the unicode prefix older Pythons print.
    fn prefixed_string(&self) -> bool {
        matches!(self.input[self.pos + 1..].chars().next(), Some('\'' | '"'))
    }

    fn keyword(&mut self) -> Result<Value, LiteralError> {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_alphanumeric() || c == '_') {
            self.bump();
        }
        match &self.input[start..self.pos] {
            "True" => Ok(Value::Bool(true)),
            "False" => Ok(Value::Bool(false)),
            "None" => Ok(Value::Null),
            _ => {
                self.pos = start;
                Err(self.unexpected())
            }
        }
    }

    fn number(&mut self) -> Result<Value, LiteralError> {
        let start = self.pos;
        while matches!(
            self.peek(),
            Some(c) if c.is_ascii_alphanumeric() || matches!(c, '.' | '+' | '-' | '_')
        ) {
            // a sign is only part of the number at the start or right after an exponent
            let c = self.peek().unwrap_or_default();
            if matches!(c, '+' | '-')
                && self.pos != start
                && !matches!(self.input[..self.pos].chars().last(), Some('e' | 'E'))
            {
                break;
            }
            self.bump();
        }
        let text = &self.input[start..self.pos];
        let invalid = || LiteralError::InvalidNumber {
            text: text.to_string(),
            offset: start,
        };
        let digits = text.replace('_', "");
        let unsigned = digits.trim_start_matches(['+', '-']);
        if !unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
            return Err(invalid());
        }
        if let Ok(int) = digits.parse::<i64>() {
            return Ok(Value::Number(int.into()));
        }
        if let Ok(int) = digits.trim_start_matches('+').parse::<u64>() {
            return Ok(Value::Number(int.into()));
        }
        digits
            .parse::<f64>()
            .ok()
            .filter(|float| float.is_finite())
            .and_then(Number::from_f64)
            .map(Value::Number)
            .ok_or_else(invalid)
    }

    fn string(&mut self) -> Result<String, LiteralError> {
        let quote = self.bump().ok_or(LiteralError::UnexpectedEnd(self.pos))?;
        let mut out = String::new();
        loop {
            let offset = self.pos;
            match self.bump() {
                None => return Err(LiteralError::UnexpectedEnd(offset)),
                Some(c) if c == quote => return Ok(out),
                Some('\n') => {
                    return Err(LiteralError::UnexpectedChar {
                        found: '\n',
                        offset,
                    });
                }
                Some('\\') => self.escape(offset, &mut out)?,
                Some(c) => out.push(c),
            }
        }
    }

    fn escape(&mut self, offset: usize, out: &mut String) -> Result<(), LiteralError> {
        let c = self.bump().ok_or(LiteralError::UnexpectedEnd(self.pos))?;
        match c {
            '\n' => {}
            '\\' | '\'' | '"' => out.push(c),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'v' => out.push('\u{b}'),
            'a' => out.push('\u{7}'),
            '0' => out.push('\0'),
            'x' => out.push(self.hex_escape(2, offset)?),
            'u' => out.push(self.hex_escape(4, offset)?),
            'U' => out.push(self.hex_escape(8, offset)?),
            // unknown escapes keep their backslash
            other => {
                out.push('\\');
                out.push(other);
            }
        }
        Ok(())
    }

    fn hex_escape(&mut self, len: usize, offset: usize) -> Result<char, LiteralError> {
        let end = self.pos + len;
        let digits = self
            .input
            .get(self.pos..end)
            .ok_or(LiteralError::InvalidEscape(offset))?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(LiteralError::InvalidEscape(offset));
        }
        self.pos = end;
        u32::from_str_radix(digits, 16)
            .ok()
            .and_then(char::from_u32)
            .ok_or(LiteralError::InvalidEscape(offset))
    }

    /// Comma separated values up to `close`, trailing comma allowed.
    ///
    /// The flag tells whether the last item was followed by a comma.
    fn sequence(&mut self, close: char, depth: usize) -> Result<(Vec<Value>, bool), LiteralError> {
        self.bump();
        let mut items = Vec::new();
        let mut trailing_comma = false;
        loop {
            self.skip_whitespace();
            if self.peek() == Some(close) {
                self.bump();
                return Ok((items, trailing_comma));
            }
            items.push(self.value(depth + 1)?);
            self.skip_whitespace();
            match self.peek() {
                Some(',') => {
                    self.bump();
                    trailing_comma = true;
                }
                Some(c) if c == close => trailing_comma = false,
                _ => return Err(self.unexpected()),
            }
        }
    }

    /// `(x)` is a parenthesized value, `(x,)` and `(x, y)` are tuples.
    fn tuple(&mut self, depth: usize) -> Result<Value, LiteralError> {
        let (mut items, trailing_comma) = self.sequence(')', depth)?;
        if items.len() == 1 && !trailing_comma {
            return Ok(items.remove(0));
        }
        Ok(Value::Array(items))
    }

    fn dict(&mut self, depth: usize) -> Result<Value, LiteralError> {
        self.bump();
        let mut map = Map::new();
        loop {
            self.skip_whitespace();
            if self.peek() == Some('}') {
                self.bump();
                return Ok(Value::Object(map));
            }
            let key_offset = self.pos;
            let key = match self.value(depth + 1)? {
                Value::String(key) => key,
                _ => return Err(LiteralError::UnsupportedKey(key_offset)),
            };
            self.expect(':')?;
            let value = self.value(depth + 1)?;
            map.insert(key, value);
            self.skip_whitespace();
            match self.peek() {
                Some(',') => {
                    self.bump();
                }
                Some('}') => {}
                _ => return Err(self.unexpected()),
            }
        }
    }
}
