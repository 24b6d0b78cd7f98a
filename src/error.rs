use std::num::ParseIntError;

use quick_error::quick_error;

quick_error! {
    #[derive(Debug)]
    pub enum Error {
        InvalidValue(input: String, err: ParseIntError) {
            display("Not an integer: {:?} ({})", input, err)
            source(err)
        }
    }
}

/// Parses a user-supplied node value, ignoring surrounding whitespace.
pub fn parse_value(raw: &str) -> Result<i64, Error> {
    raw.trim()
        .parse::<i64>()
        .map_err(|e| Error::InvalidValue(raw.to_string(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("42").unwrap(), 42);
        assert_eq!(parse_value(" -7\n").unwrap(), -7);
        assert!(parse_value("abc").is_err());
        assert!(parse_value("").is_err());
        assert!(parse_value("1.5").is_err());
        let err = parse_value("x1").unwrap_err();
        assert!(err.to_string().starts_with("Not an integer: \"x1\""));
    }
}
