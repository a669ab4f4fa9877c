//! Percent encoding and decoding with configurable pass-through sets.
//!
//! Both directions operate byte-wise and never fail: a malformed escape is
//! passed through literally rather than rejected. The asymmetry around `+`
//! is deliberate and load-bearing: [`encode`] turns a space into `+`, but
//! [`decode`] converts `+` back to a space only when the `only` set
//! explicitly contains `+`.

/// Percent-encodes `text` against an allow-set.
///
/// A space becomes `+`; a byte present in `allow` is copied verbatim; every
/// other byte becomes `%` followed by two lowercase hex digits.
///
/// # Examples
///
/// ```
/// use storage_uri::{encode, PATH_ALLOW};
///
/// assert_eq!(encode("a b", PATH_ALLOW), "a+b");
/// assert_eq!(encode("a|b", PATH_ALLOW), "a%7cb");
/// ```
#[must_use]
pub fn encode(text: &str, allow: &str) -> String {
    let allow = allow.as_bytes();
    let mut out = String::with_capacity(text.len());
    for &b in text.as_bytes() {
        if b == b' ' {
            out.push('+');
        } else if allow.contains(&b) {
            out.push(char::from(b));
        } else {
            out.push('%');
            out.push(hex_digit(b >> 4));
            out.push(hex_digit(b & 0x0f));
        }
    }
    out
}

/// Percent-decodes `text`, restricted to an optional `only` set.
///
/// A `+` becomes a space only when `only` is present and contains `+`;
/// otherwise it passes through unchanged. A `%` followed by two hex digits
/// (either case) is converted to that byte only when `only` is `None` or
/// contains the decoded byte; otherwise the `%` is emitted literally and
/// the following characters are left for the normal scan. Malformed escapes
/// always pass through literally.
///
/// # Examples
///
/// ```
/// use storage_uri::decode;
///
/// assert_eq!(decode("a+b", None), "a+b");
/// assert_eq!(decode("a+b", Some("+")), "a b");
/// assert_eq!(decode("a%7cb", None), "a|b");
/// assert_eq!(decode("a%7cb", Some("x")), "a%7cb");
/// assert_eq!(decode("50%", None), "50%");
/// ```
#[must_use]
pub fn decode(text: &str, only: Option<&str>) -> String {
    let bytes = text.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b == b'+' && only.is_some_and(|o| o.as_bytes().contains(&b'+')) {
            out.push(b' ');
            i += 1;
            continue;
        }
        if b == b'%' && i + 2 < bytes.len() {
            let (hi, lo) = (bytes[i + 1], bytes[i + 2]);
            if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() {
                let byte = (from_hex(hi) << 4) | from_hex(lo);
                if only.is_none_or(|o| o.as_bytes().contains(&byte)) {
                    out.push(byte);
                    i += 3;
                    continue;
                }
            }
        }
        out.push(b);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Percent-decodes `text` with no restriction set.
///
/// Equivalent to `decode(text, None)`: every well-formed `%xx` escape is
/// decoded and `+` passes through unchanged.
#[must_use]
pub fn decode_all(text: &str) -> String {
    decode(text, None)
}

fn hex_digit(nibble: u8) -> char {
    char::from(if nibble < 10 {
        b'0' + nibble
    } else {
        b'a' + (nibble - 10)
    })
}

const fn from_hex(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => 10 + (c - b'a'),
        _ => 10 + (c - b'A'),
    }
}
