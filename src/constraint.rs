//! Constraint (query) text and the projection/selection splitter.

use std::fmt;

/// The query section of a storage URI, split into its sub-clauses.
///
/// The raw text (without the leading `?`) splits at the first `&`: the
/// projection is everything before it, the selection everything from it
/// onward *including* that `&`. The inclusion is a compatibility
/// requirement, not an oversight: `projection + selection` reconcatenates
/// to the original text.
///
/// # Examples
///
/// ```
/// use storage_uri::Constraint;
///
/// let c = Constraint::parse("name=val&X=Y").unwrap();
/// assert_eq!(c.text(), "name=val&X=Y");
/// assert_eq!(c.projection(), Some("name=val"));
/// assert_eq!(c.selection(), Some("&X=Y"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    text: String,
    projection: Option<String>,
    selection: Option<String>,
}

impl Constraint {
    /// Splits constraint text into projection and selection.
    ///
    /// One leading `?` is stripped if present. Returns `None` when the
    /// remaining text is empty, since an empty constraint is normalized to
    /// absent.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let text = input.strip_prefix('?').unwrap_or(input);
        if text.is_empty() {
            return None;
        }

        let (projection, selection) = match text.find('&') {
            None => (Some(text.to_string()), None),
            Some(0) => (None, Some(text.to_string())),
            Some(amp) => (
                Some(text[..amp].to_string()),
                Some(text[amp..].to_string()),
            ),
        };

        Some(Self {
            text: text.to_string(),
            projection,
            selection,
        })
    }

    /// Returns the raw constraint text, without the leading `?`.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the sub-clause before the first `&`, if non-empty.
    #[must_use]
    pub fn projection(&self) -> Option<&str> {
        self.projection.as_deref()
    }

    /// Returns the sub-clause from the first `&` onward, including that
    /// `&`.
    #[must_use]
    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
