//! Error types for storage URI parsing.

use std::fmt;

/// Error returned when a storage URI fails to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

/// Specific parsing error types, one per failure site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// URI is empty
    Empty,
    /// A prefix client-parameter run starting with `[` never closes
    UnterminatedParams,
    /// No `:` found after the scheme name
    MissingScheme,
    /// Scheme is not in the whitelist
    UnknownScheme {
        /// The scheme that was found
        found: String,
    },
    /// Scheme is not followed by `//`
    MissingSchemeSeparator,
    /// Nothing follows `scheme://`
    EmptyAfterScheme,
    /// The user segment of `user:password@` is empty
    EmptyUser,
    /// Userinfo before `@` has no `:` separating user from password
    MissingPasswordSeparator,
    /// A `:` in the authority is followed by no port at all
    EmptyPort,
    /// The port contains a character other than a digit or `-`
    InvalidPortChar {
        /// The offending character
        char: char,
        /// Position within the port text
        position: usize,
    },
    /// The host section is empty
    EmptyHost,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse storage URI '{}': ", self.input)?;
        match &self.kind {
            ParseErrorKind::Empty => write!(f, "input is empty"),
            ParseErrorKind::UnterminatedParams => {
                write!(f, "client parameter run is missing its closing ']'")
            }
            ParseErrorKind::MissingScheme => {
                write!(f, "missing scheme; expected '<scheme>://' at the start")
            }
            ParseErrorKind::UnknownScheme { found } => {
                write!(
                    f,
                    "unknown scheme '{found}'; expected one of file, http, https, s3, s3s"
                )
            }
            ParseErrorKind::MissingSchemeSeparator => {
                write!(f, "scheme must be followed by '//'")
            }
            ParseErrorKind::EmptyAfterScheme => {
                write!(f, "nothing follows the scheme separator")
            }
            ParseErrorKind::EmptyUser => {
                write!(f, "user segment before '@' is empty")
            }
            ParseErrorKind::MissingPasswordSeparator => {
                write!(f, "userinfo before '@' has no ':' separator")
            }
            ParseErrorKind::EmptyPort => write!(f, "':' in authority with no port after it"),
            ParseErrorKind::InvalidPortChar { char, position } => {
                write!(
                    f,
                    "invalid port character '{char}' at position {position}; only digits and '-' allowed"
                )
            }
            ParseErrorKind::EmptyHost => write!(f, "host section is empty"),
        }
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_input() {
        let err = ParseError {
            input: "bogus".to_string(),
            kind: ParseErrorKind::MissingScheme,
        };
        let msg = err.to_string();
        assert!(msg.contains("bogus"));
        assert!(msg.contains("missing scheme"));
    }

    #[test]
    fn display_unknown_scheme_names_whitelist() {
        let err = ParseError {
            input: "ftp://x".to_string(),
            kind: ParseErrorKind::UnknownScheme {
                found: "ftp".to_string(),
            },
        };
        assert!(err.to_string().contains("s3s"));
    }
}
