//! Normalisation of `expand` / `fields` selectors.

use std::fmt;

/// A comma-delimited list of names sent as the `expand` or `fields` query
/// parameter.
///
/// Built from a single string (used as given) or from any sequence of
/// strings (trimmed, empty items dropped, joined with `,`). An empty
/// selector clears the parameter.
///
/// # Example
///
/// ```rust
/// use yii_model::rest::Selector;
///
/// assert_eq!(Selector::from(vec!["profile", "posts"]).as_str(), "profile,posts");
/// assert_eq!(Selector::from("id,name").as_str(), "id,name");
/// assert!(Selector::from(Vec::<String>::new()).is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selector(String);

impl Selector {
    fn join<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = items
            .into_iter()
            .map(|item| item.as_ref().trim().to_string())
            .filter(|item| !item.is_empty())
            .collect::<Vec<_>>()
            .join(",");
        Self(joined)
    }

    /// Returns the comma-joined value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the selector names nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Converts into the stored form, `None` when empty.
    #[must_use]
    pub fn into_value(self) -> Option<String> {
        Some(self.0).filter(|s| !s.is_empty())
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Selector {
    fn from(value: &str) -> Self {
        Self(value.trim().to_string())
    }
}

impl From<String> for Selector {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<&String> for Selector {
    fn from(value: &String) -> Self {
        Self::from(value.as_str())
    }
}

impl<S: AsRef<str>> From<Vec<S>> for Selector {
    fn from(items: Vec<S>) -> Self {
        Self::join(items)
    }
}

impl<S: AsRef<str>> From<&[S]> for Selector {
    fn from(items: &[S]) -> Self {
        Self::join(items)
    }
}

impl<S: AsRef<str>, const N: usize> From<[S; N]> for Selector {
    fn from(items: [S; N]) -> Self {
        Self::join(items)
    }
}
