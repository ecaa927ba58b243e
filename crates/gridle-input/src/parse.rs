//! String-to-value parsing helpers.

use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

use gridle_core::{LongPosition, Position};

/// Errors from the parsing helpers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Fewer delimited fields than the target shape needs.
    #[error("expected {expected} fields, found {found}")]
    MissingFields { expected: usize, found: usize },
    #[error(transparent)]
    Int(#[from] ParseIntError),
    #[error(transparent)]
    Float(#[from] ParseFloatError),
}

/// Split `s` on `delimiter`, trim each field, and drop the empty ones.
///
/// `"a,  b ,  ,,c"` split on `","` gives `["a", "b", "c"]`.
pub fn split_trim<'a>(s: &'a str, delimiter: &str) -> Vec<&'a str> {
    s.split(delimiter)
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .collect()
}

/// Parse a delimited `row, col` pair into a [`Position`].
pub fn parse_position(s: &str, delimiter: &str) -> Result<Position, ParseError> {
    let fields = fields(s, delimiter, 2)?;
    Ok(Position::new(fields[0].parse()?, fields[1].parse()?))
}

/// Parse a delimited `row, col` pair into a [`LongPosition`].
pub fn parse_long_position(s: &str, delimiter: &str) -> Result<LongPosition, ParseError> {
    let fields = fields(s, delimiter, 2)?;
    Ok(LongPosition::new(fields[0].parse()?, fields[1].parse()?))
}

/// Parse two delimited floats.
pub fn parse_vec2(s: &str, delimiter: &str) -> Result<[f32; 2], ParseError> {
    let fields = fields(s, delimiter, 2)?;
    Ok([fields[0].parse()?, fields[1].parse()?])
}

/// Parse three delimited floats.
pub fn parse_vec3(s: &str, delimiter: &str) -> Result<[f32; 3], ParseError> {
    let fields = fields(s, delimiter, 3)?;
    Ok([fields[0].parse()?, fields[1].parse()?, fields[2].parse()?])
}

fn fields<'a>(s: &'a str, delimiter: &str, expected: usize) -> Result<Vec<&'a str>, ParseError> {
    let fields = split_trim(s, delimiter);
    if fields.len() < expected {
        return Err(ParseError::MissingFields { expected, found: fields.len() });
    }
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_trim_drops_empty_fields() {
        assert_eq!(split_trim("a,  b ,  ,,c", ","), vec!["a", "b", "c"]);
        assert_eq!(split_trim("x : y", ":"), vec!["x", "y"]);
        assert_eq!(split_trim("a b  c", " "), vec!["a", "b", "c"]);
        assert_eq!(split_trim("", ","), Vec::<&str>::new());
        assert_eq!(split_trim(" , , ", ","), Vec::<&str>::new());
    }

    #[test]
    fn positions_parse_from_pairs() {
        assert_eq!(parse_position("3, -4", ",").unwrap(), Position::new(3, -4));
        assert_eq!(parse_position("10:20", ":").unwrap(), Position::new(10, 20));
        assert_eq!(
            parse_long_position("10000000000, 1", ",").unwrap(),
            LongPosition::new(10_000_000_000, 1)
        );
    }

    #[test]
    fn extra_fields_are_ignored() {
        assert_eq!(parse_position("1, 2, 3", ",").unwrap(), Position::new(1, 2));
    }

    #[test]
    fn missing_fields_are_reported() {
        assert_eq!(
            parse_position("7", ","),
            Err(ParseError::MissingFields { expected: 2, found: 1 })
        );
        assert_eq!(
            parse_vec3("1.0, 2.0", ","),
            Err(ParseError::MissingFields { expected: 3, found: 2 })
        );
    }

    #[test]
    fn numeric_errors_pass_through() {
        assert!(matches!(parse_position("a, b", ","), Err(ParseError::Int(_))));
        assert!(matches!(parse_vec2("x, y", ","), Err(ParseError::Float(_))));
    }

    #[test]
    fn float_vectors_parse() {
        assert_eq!(parse_vec2("1.5, -2.5", ",").unwrap(), [1.5, -2.5]);
        assert_eq!(parse_vec3("1, 2.25, 3", ",").unwrap(), [1.0, 2.25, 3.0]);
    }

    #[test]
    fn wide_pairs_overflow_narrow_parsing() {
        assert!(matches!(parse_position("10000000000, 1", ","), Err(ParseError::Int(_))));
    }
}
