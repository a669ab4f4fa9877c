//! Parser and builder for storage-location URIs.
//!
//! This crate implements the URI micro-syntax used by a data-access layer to
//! address resources over several protocols: local file, HTTP(S), and the
//! `s3`/`s3s` object-storage variants. Beyond the usual
//! scheme/authority/path/query/fragment decomposition it supports:
//!
//! - bracket-delimited **client parameters** before the scheme and after the
//!   fragment, merged into one ordered list where prefixed entries shadow
//!   suffixed duplicates;
//! - a query-splitting convention separating a **projection** sub-clause
//!   from a **selection** sub-clause;
//! - a percent-encoding codec with configurable pass-through character sets.
//!
//! # Quick Start
//!
//! ```rust
//! use storage_uri::{BuildOptions, Scheme, StorageUri};
//!
//! let mut uri = StorageUri::parse(
//!     "[trace=1]s3://user:pass@mybucket.example.com:9000/key?name=val&X=Y",
//! )
//! .unwrap();
//!
//! assert_eq!(uri.scheme(), Scheme::S3);
//! assert_eq!(uri.host(), Some("mybucket.example.com"));
//! assert_eq!(uri.projection(), Some("name=val"));
//! assert_eq!(uri.selection(), Some("&X=Y"));
//! assert_eq!(uri.lookup_param("trace"), Some("1"));
//!
//! let rebuilt = uri.build(None, None, BuildOptions::all());
//! assert_eq!(
//!     rebuilt,
//!     "[trace=1]s3://user:pass@mybucket.example.com:9000/key?name=val&X=Y",
//! );
//! ```
//!
//! # Scheme Whitelist
//!
//! Only `file`, `http`, `https`, `s3`, and `s3s` parse; `file` is the sole
//! file-like scheme and carries no authority section. This whitelist and
//! the bracket-parameter extension are deliberately non-standard; full
//! RFC 3986 compliance is a non-goal.
//!
//! # Concurrency
//!
//! Parsing is pure and idempotent. Each [`StorageUri`] is exclusively owned
//! by its creator; operations on different instances need no
//! synchronization, while mutation of a single instance must be serialized
//! by the caller.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod builder;
mod constants;
mod constraint;
mod error;
mod escape;
mod params;
pub mod prelude;
mod scheme;
mod uri;

pub use builder::BuildOptions;
pub use constants::{PATH_ALLOW, QUERY_ALLOW};
pub use constraint::Constraint;
pub use error::{ParseError, ParseErrorKind};
pub use escape::{decode, decode_all, encode};
pub use params::ParamList;
pub use scheme::Scheme;
pub use uri::StorageUri;
