use crate::attributes::{Attributes, Value};
use crate::codec::DecodeMode;
use crate::error::{Error, Result};

/// Lexical unit of a member list
#[derive(Debug, Clone, Copy, PartialEq)]
enum Token<'a> {
    /// Text between a pair of double quotes, quotes excluded
    Quoted(&'a str),
    /// Unquoted run up to the next `,` or end of input
    Bare(&'a str),
    Colon,
    Comma,
}

struct Tokenizer<'a> {
    rest: &'a str,
}

impl<'a> Tokenizer<'a> {
    fn new(input: &'a str) -> Self {
        Self { rest: input }
    }

    fn next_token(&mut self) -> Result<Option<Token<'a>>> {
        let Some(first) = self.rest.chars().next() else {
            return Ok(None);
        };

        let token = match first {
            '"' => {
                let body = &self.rest[1..];
                let end = body.find('"').ok_or_else(|| {
                    Error::FormatMalformedSegment("unterminated string".to_string())
                })?;
                self.rest = &body[end + 1..];
                Token::Quoted(&body[..end])
            }
            ':' => {
                self.rest = &self.rest[1..];
                Token::Colon
            }
            ',' => {
                self.rest = &self.rest[1..];
                Token::Comma
            }
            _ => {
                let end = self.rest.find(',').unwrap_or(self.rest.len());
                let bare = &self.rest[..end];
                self.rest = &self.rest[end..];
                Token::Bare(bare)
            }
        };

        Ok(Some(token))
    }
}

/// Parse a `{...}` body and insert its members into `attributes` in order
///
/// Nothing is inserted when the body is rejected.
pub fn decode_into(body: &str, attributes: &mut Attributes, mode: DecodeMode) -> Result<()> {
    let inner = body
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .ok_or_else(|| {
            Error::FormatMalformedSegment("body must be enclosed in '{' and '}'".to_string())
        })?;

    for (name, value) in extract_members(inner, mode)? {
        attributes.set(name, value);
    }

    Ok(())
}

fn extract_members(inner: &str, mode: DecodeMode) -> Result<Vec<(&str, Value)>> {
    let mut tokens = Tokenizer::new(inner);
    let mut members = Vec::new();

    let Some(mut token) = tokens.next_token()? else {
        return Ok(members);
    };

    loop {
        let name = match token {
            Token::Quoted(name) if !name.is_empty() => name,
            Token::Quoted(_) => {
                return Err(Error::FormatMalformedSegment("empty member name".to_string()));
            }
            other => return Err(unexpected(other, "member name")),
        };

        match tokens.next_token()? {
            Some(Token::Colon) => {}
            Some(other) => return Err(unexpected(other, "':'")),
            None => return Err(end_of_input("':'")),
        }

        match tokens.next_token()? {
            Some(Token::Quoted(text)) => members.push((name, Value::String(text.to_string()))),
            Some(Token::Bare(text)) => {
                if let Some(value) = infer_value(name, text, mode)? {
                    members.push((name, value));
                }
            }
            Some(other) => return Err(unexpected(other, "value")),
            None => return Err(end_of_input("value")),
        }

        match tokens.next_token()? {
            None => return Ok(members),
            Some(Token::Comma) => {}
            Some(other) => return Err(unexpected(other, "',' or end of body")),
        }

        token = tokens.next_token()?.ok_or_else(|| end_of_input("member name"))?;
    }
}

/// Type an unquoted value: float if it has a `.`, boolean if it mentions
/// `true`/`false`, integer otherwise.
///
/// `Ok(None)` means the member is dropped. This only happens in lenient mode
/// for values that fail integer parsing, for compatibility with tokens issued
/// by earlier implementations.
fn infer_value(name: &str, text: &str, mode: DecodeMode) -> Result<Option<Value>> {
    if text.contains('.') {
        return text.parse::<f64>().map(|f| Some(Value::Float(f))).map_err(|e| {
            Error::FormatInvalidNumber(format!("member '{name}' is not a float: {e}"))
        });
    }

    if text.contains("true") || text.contains("false") {
        return match (text, mode) {
            ("true", _) => Ok(Some(Value::Boolean(true))),
            ("false", _) => Ok(Some(Value::Boolean(false))),
            (_, DecodeMode::Lenient) => Ok(Some(Value::Boolean(
                text.eq_ignore_ascii_case("true"),
            ))),
            (_, DecodeMode::Strict) => Err(Error::FormatMalformedSegment(format!(
                "member '{name}' is not a boolean literal"
            ))),
        };
    }

    match text.parse::<i64>() {
        Ok(i) => Ok(Some(Value::Integer(i))),
        Err(e) => match mode {
            DecodeMode::Lenient => {
                tracing::warn!(member = name, "dropping member with unparseable integer value");
                Ok(None)
            }
            DecodeMode::Strict => Err(Error::FormatInvalidNumber(format!(
                "member '{name}' is not an integer: {e}"
            ))),
        },
    }
}

fn unexpected(token: Token<'_>, expected: &str) -> Error {
    let found = match token {
        Token::Quoted(_) => "string",
        Token::Bare(_) => "unquoted value",
        Token::Colon => "':'",
        Token::Comma => "','",
    };
    Error::FormatMalformedSegment(format!("expected {expected}, found {found}"))
}

fn end_of_input(expected: &str) -> Error {
    Error::FormatMalformedSegment(format!("expected {expected}, found end of body"))
}
