//! Ordered client-parameter list codec.

use std::fmt;
use std::str::FromStr;

/// An ordered list of client-parameter key/value pairs.
///
/// Decoded from the ampersand-joined parameter text a parse produces by
/// merging the prefix and suffix bracket runs (prefix first). Order of
/// first appearance is preserved, and [`ParamList::get`] returns the first
/// pair whose key matches: that is the mechanism by which prefix parameters
/// deliberately override same-named suffix parameters.
///
/// # Examples
///
/// ```
/// use storage_uri::ParamList;
///
/// let list = ParamList::decode("trace=1&cache&trace=0");
/// assert_eq!(list.get("trace"), Some("1"));
/// assert_eq!(list.get("cache"), Some(""));
/// assert_eq!(list.to_string(), "[trace=1][cache][trace=0]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParamList {
    pairs: Vec<(String, String)>,
}

impl ParamList {
    /// Decodes ampersand-joined parameter text into ordered pairs.
    ///
    /// Each token is split at its first `=`; a token without `=` yields the
    /// key with an empty value, not an absent one.
    #[must_use]
    pub fn decode(raw: &str) -> Self {
        let pairs = raw
            .split('&')
            .map(|token| match token.split_once('=') {
                Some((key, value)) => (key.to_string(), value.to_string()),
                None => (token.to_string(), String::new()),
            })
            .collect();
        Self { pairs }
    }

    /// Returns the value of the first pair whose key equals `key`.
    ///
    /// Later duplicates are shadowed.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if the list holds no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns an iterator over the pairs in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Re-renders the list as bracketed tokens.
    ///
    /// Each pair becomes `[key=value]`, or `[key]` when the value is empty.
    /// Duplicates are emitted verbatim in list order.
    #[must_use]
    pub fn to_bracket_string(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.pairs {
            out.push('[');
            out.push_str(key);
            if !value.is_empty() {
                out.push('=');
                out.push_str(value);
            }
            out.push(']');
        }
        out
    }
}

impl fmt::Display for ParamList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_bracket_string())
    }
}

impl FromStr for ParamList {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::decode(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_single_pair() {
        let list = ParamList::decode("key=value");
        assert_eq!(list.len(), 1);
        assert_eq!(list.get("key"), Some("value"));
    }

    #[test]
    fn decode_preserves_order() {
        let list = ParamList::decode("b=2&a=1&c=3");
        let keys: Vec<_> = list.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn decode_missing_equals_yields_empty_value() {
        let list = ParamList::decode("flag");
        assert_eq!(list.get("flag"), Some(""));
    }

    #[test]
    fn decode_splits_at_first_equals_only() {
        let list = ParamList::decode("key=a=b");
        assert_eq!(list.get("key"), Some("a=b"));
    }

    #[test]
    fn get_returns_first_occurrence() {
        let list = ParamList::decode("x=1&x=2");
        assert_eq!(list.get("x"), Some("1"));
    }

    #[test]
    fn get_missing_key_returns_none() {
        let list = ParamList::decode("a=1");
        assert_eq!(list.get("b"), None);
    }

    #[test]
    fn get_is_exact_match() {
        let list = ParamList::decode("abc=1");
        assert_eq!(list.get("ab"), None);
    }

    #[test]
    fn bracket_form_omits_empty_values() {
        let list = ParamList::decode("a=1&b&c=3");
        assert_eq!(list.to_bracket_string(), "[a=1][b][c=3]");
    }

    #[test]
    fn bracket_form_keeps_duplicates() {
        let list = ParamList::decode("x=1&x=2");
        assert_eq!(list.to_bracket_string(), "[x=1][x=2]");
    }

    #[test]
    fn decode_is_idempotent_per_input() {
        assert_eq!(ParamList::decode("a=1&b"), ParamList::decode("a=1&b"));
    }
}
