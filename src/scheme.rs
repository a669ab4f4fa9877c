//! Scheme whitelist for storage URIs.

use std::fmt;
use std::str::FromStr;

use crate::error::{ParseError, ParseErrorKind};

/// A whitelisted storage URI scheme.
///
/// Only these five schemes are representable; anything else is rejected
/// at parse time.
///
/// # Examples
///
/// ```
/// use storage_uri::Scheme;
///
/// let scheme = Scheme::parse("s3").unwrap();
/// assert_eq!(scheme, Scheme::S3);
/// assert!(!scheme.is_filelike());
/// assert!(Scheme::parse("ftp").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// Local file access (`file://`); carries no authority section.
    File,
    /// Plain HTTP.
    Http,
    /// HTTP over TLS.
    Https,
    /// Object storage.
    S3,
    /// Object storage over TLS.
    S3s,
}

impl Scheme {
    /// Looks up a scheme name in the whitelist.
    ///
    /// Matching is exact and case-sensitive.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "file" => Some(Self::File),
            "http" => Some(Self::Http),
            "https" => Some(Self::Https),
            "s3" => Some(Self::S3),
            "s3s" => Some(Self::S3s),
            _ => None,
        }
    }

    /// Returns the scheme name as it appears in a URI.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Http => "http",
            Self::Https => "https",
            Self::S3 => "s3",
            Self::S3s => "s3s",
        }
    }

    /// Returns true if this scheme has no host, user/password, or port
    /// section.
    #[must_use]
    pub const fn is_filelike(self) -> bool {
        matches!(self, Self::File)
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scheme {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseError {
            input: s.to_string(),
            kind: ParseErrorKind::UnknownScheme {
                found: s.to_string(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_whitelisted_schemes() {
        assert_eq!(Scheme::parse("file"), Some(Scheme::File));
        assert_eq!(Scheme::parse("http"), Some(Scheme::Http));
        assert_eq!(Scheme::parse("https"), Some(Scheme::Https));
        assert_eq!(Scheme::parse("s3"), Some(Scheme::S3));
        assert_eq!(Scheme::parse("s3s"), Some(Scheme::S3s));
    }

    #[test]
    fn parse_unknown_scheme_fails() {
        assert_eq!(Scheme::parse("ftp"), None);
        assert_eq!(Scheme::parse(""), None);
        assert_eq!(Scheme::parse("FILE"), None);
    }

    #[test]
    fn only_file_is_filelike() {
        assert!(Scheme::File.is_filelike());
        assert!(!Scheme::Http.is_filelike());
        assert!(!Scheme::Https.is_filelike());
        assert!(!Scheme::S3.is_filelike());
        assert!(!Scheme::S3s.is_filelike());
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(Scheme::S3s.to_string(), "s3s");
    }

    #[test]
    fn from_str_unknown_reports_found() {
        let err = "gopher".parse::<Scheme>().unwrap_err();
        assert!(matches!(
            err.kind,
            ParseErrorKind::UnknownScheme { found } if found == "gopher"
        ));
    }
}
