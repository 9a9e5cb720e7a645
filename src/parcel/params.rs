//! Command-line parameter values and the build argument tokenizer.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// A single command-line parameter value.
///
/// Build arguments either carry text (`-key value`, `-key=value`) or are
/// bare flags (`-key`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CliValue {
    /// Textual value
    Text(String),
    /// Boolean flag
    Flag(bool),
}

impl CliValue {
    /// Returns the text, or `None` for flags.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CliValue::Text(text) => Some(text),
            CliValue::Flag(_) => None,
        }
    }
}

impl fmt::Display for CliValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliValue::Text(text) => f.write_str(text),
            CliValue::Flag(flag) => write!(f, "{flag}"),
        }
    }
}

impl From<&str> for CliValue {
    fn from(text: &str) -> Self {
        CliValue::Text(text.to_string())
    }
}

impl From<String> for CliValue {
    fn from(text: String) -> Self {
        CliValue::Text(text)
    }
}

impl From<bool> for CliValue {
    fn from(flag: bool) -> Self {
        CliValue::Flag(flag)
    }
}

/// Key/value map of build arguments.
///
/// Keys are case-sensitive and stored without their leading `-`.
/// Ordered so that diagnostics and JSON output are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CliMap {
    entries: BTreeMap<String, CliValue>,
}

impl CliMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenizes raw build arguments into a map.
    ///
    /// See [`tokenize`].
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tokenize(tokens)
    }

    /// Inserts a value, returning the previous one for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<CliValue>) -> Option<CliValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<CliValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Returns the value for a key.
    pub fn get(&self, key: &str) -> Option<&CliValue> {
        self.entries.get(key)
    }

    /// Returns the first value found among `keys`, with the key that matched.
    pub fn first_of<'k>(&self, keys: &[&'k str]) -> Option<(&'k str, &CliValue)> {
        keys.iter()
            .find_map(|key| self.entries.get(*key).map(|value| (*key, value)))
    }

    /// Returns the value's text form for a key.
    ///
    /// Flags render as `true`/`false`, matching how the build tooling has
    /// always stringified them.
    pub fn get_string(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(ToString::to_string)
    }

    /// Returns true if the key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Removes a key, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<CliValue> {
        self.entries.remove(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CliValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}

/// Converts a flat list of build tokens into a key/value map.
///
/// - Tokens start with `-`; anything else is skipped unless consumed as a value.
/// - `-key=value` splits on the first `=`.
/// - `-key value` pairs with the next token when it does not start with `-`.
/// - An unpaired `-key` becomes a `true` flag.
///
/// Later occurrences of a key overwrite earlier ones.
pub fn tokenize<I, S>(tokens: I) -> CliMap
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let tokens: Vec<S> = tokens.into_iter().collect();
    let mut map = CliMap::new();
    let mut i = 0;

    while i < tokens.len() {
        let token: &str = tokens[i].as_ref();
        let next: Option<&str> = tokens.get(i + 1).map(|t| t.as_ref());
        i += 1;

        let Some(body) = token.strip_prefix('-') else {
            continue;
        };

        let (key, value) = if let Some((key, value)) = body.split_once('=') {
            (key, CliValue::from(value))
        } else if let Some(next) = next.filter(|t| !t.starts_with('-')) {
            i += 1;
            (body, CliValue::from(next))
        } else {
            (body, CliValue::Flag(true))
        };

        log::debug!("{} = {}", key, value);
        map.insert(key, value);
    }

    map
}
