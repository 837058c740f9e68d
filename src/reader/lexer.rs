use nom::bytes::complete::take_until;
use nom::character::complete::char;
use nom::sequence::delimited;
use nom::IResult;
use thiserror::Error;

/// Offset of the character that decides which layout a line uses. Both
/// known catalogue layouts put a quote here if and only if the name is
/// quote-delimited.
const PROBE_OFFSET: usize = 4;

/// Failure classes for a single catalogue line.
#[derive(Error, Debug, PartialEq)]
pub enum LineError {
    #[error("malformed line: {0}")]
    MalformedLine(&'static str),

    #[error("expected at least {expected} comma-separated fields, found {found}")]
    FieldCount { expected: usize, found: usize },
}

/// The two known catalogue line layouts.
#[derive(Debug, PartialEq)]
pub enum Layout {
    /// The name is quote-delimited and may contain commas.
    QuotedName,
    /// Three comma-separated fields, no quoting.
    UnquotedName,
}

pub fn detect_layout(line: &str) -> Result<Layout, LineError> {
    match line.chars().nth(PROBE_OFFSET) {
        Some('"') => Ok(Layout::QuotedName),
        Some(_) => Ok(Layout::UnquotedName),
        None => Err(LineError::MalformedLine("line shorter than the layout probe")),
    }
}

fn quoted(input: &str) -> IResult<&str, &str> {
    delimited(char('"'), take_until("\""), char('"'))(input)
}

/// Extract the quote-delimited name of a quoted-name line. The scan is
/// bounded to the line: a quote that is never closed fails instead of
/// reading past the end.
pub fn quoted_name(line: &str) -> Result<&str, LineError> {
    let (quote_offset, _) = line
        .char_indices()
        .nth(PROBE_OFFSET)
        .ok_or(LineError::MalformedLine("line shorter than the layout probe"))?;

    match quoted(&line[quote_offset..]) {
        Ok((_rest, name)) => Ok(name),
        Err(_) => Err(LineError::MalformedLine("unterminated quoted name")),
    }
}
