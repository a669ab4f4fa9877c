//! Shared constant tables for parsing and encoding.

/// Characters the percent codec leaves unescaped in path-like content.
pub const PATH_ALLOW: &str =
    "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ!#$&'()*+,-./:;=?@_~";

/// Characters the percent codec leaves unescaped in query-like content.
pub const QUERY_ALLOW: &str =
    "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ!#$&'()*+,-./:;=?@_~";
