//! Line-oriented parsing of interactive answers
//!
//! Every prompt consumes exactly one line. A malformed answer throws the
//! whole line away, so leftovers never bleed into the next prompt.

use crate::error::{InputError, SessionError};
use crate::menu::MenuChoice;
use std::io::BufRead;

/// Reads one line without its terminator. A closed stream is `EndOfInput`.
pub fn read_line<R: BufRead>(input: &mut R) -> Result<String, SessionError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(SessionError::EndOfInput);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(line)
}

pub fn parse_count(line: &str) -> Result<usize, InputError> {
    let token = line.trim();
    let value: i64 = token
        .parse()
        .map_err(|_| InputError::CountNotANumber(token.to_string()))?;
    if value < 0 {
        return Err(InputError::NegativeCount(value));
    }
    usize::try_from(value).map_err(|_| InputError::CountNotANumber(token.to_string()))
}

pub fn parse_grade(line: &str) -> Result<f64, InputError> {
    let token = line.trim();
    let value: f64 = token
        .parse()
        .map_err(|_| InputError::GradeNotANumber(token.to_string()))?;
    if !value.is_finite() {
        return Err(InputError::GradeNotANumber(token.to_string()));
    }
    if value < 0.0 {
        return Err(InputError::NegativeGrade(value));
    }
    // "-0" slips past the sign check; store it as plain zero
    Ok(value.abs())
}

pub fn parse_choice(line: &str) -> Result<MenuChoice, InputError> {
    let token = line.trim();
    let number: i64 = token
        .parse()
        .map_err(|_| InputError::ChoiceNotANumber(token.to_string()))?;
    MenuChoice::from_number(number).ok_or(InputError::UnknownChoice(number))
}
