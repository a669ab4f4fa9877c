//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use storage_uri::prelude::*;
//!
//! let uri = StorageUri::parse("s3://bucket.example.com/key").unwrap();
//! assert_eq!(uri.scheme(), Scheme::S3);
//! ```

pub use crate::{
    // Core types
    Constraint, ParamList, Scheme, StorageUri,
    // Builder
    BuildOptions,
    // Codec
    decode, decode_all, encode,
    // Errors
    ParseError, ParseErrorKind,
    // Allow-sets
    PATH_ALLOW, QUERY_ALLOW,
};
