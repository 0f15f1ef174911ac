use std::collections::HashMap;

use crate::{engine::validator::ParseResult, error::ParseError};

/// Values for single-letter variables.
///
/// A variable is substituted only when a whole token consists of exactly one
/// ASCII letter that has a binding. Lookups are case-sensitive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Variables {
    values: HashMap<char, f64>,
}

impl Variables {
    /// Creates an empty set of bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes bindings from a flat JSON object such as `{"a": 6, "b": -1.5}`.
    ///
    /// Keys that are not a single ASCII letter can never match a token; they
    /// are skipped with a warning.
    ///
    /// # Example
    /// ```
    /// use stepcalc::engine::bindings::Variables;
    ///
    /// let vars = Variables::from_json(r#"{"a": 6, "b": -1.5}"#).unwrap();
    /// assert_eq!(vars.get('a'), Some(6.0));
    /// assert_eq!(vars.get('b'), Some(-1.5));
    /// assert!(Variables::from_json(r#"{"a": "six"}"#).is_err());
    /// ```
    pub fn from_json(json: &str) -> ParseResult<Self> {
        let decoded: HashMap<String, f64> = serde_json::from_str(json.trim()).map_err(|e| {
            ParseError::MalformedVariableBindings { details: e.to_string() }
        })?;

        let mut variables = Self::new();
        for (key, value) in decoded {
            match single_letter(&key) {
                Some(name) => variables.insert(name, value),
                None => log::warn!("ignoring binding {key:?}: variable names are single letters"),
            }
        }

        Ok(variables)
    }

    /// Binds `name` to `value`, replacing any earlier binding.
    pub fn insert(&mut self, name: char, value: f64) {
        self.values.insert(name, value);
    }

    #[must_use]
    pub fn get(&self, name: char) -> Option<f64> {
        self.values.get(&name).copied()
    }

    /// Resolves a candidate number token. Returns the bound value when `text`
    /// is a single letter with a binding.
    #[must_use]
    pub fn resolve(&self, text: &str) -> Option<f64> {
        single_letter(text).and_then(|name| self.get(name))
    }
}

impl FromIterator<(char, f64)> for Variables {
    fn from_iter<T: IntoIterator<Item = (char, f64)>>(iter: T) -> Self {
        Self { values: iter.into_iter().collect(), }
    }
}

/// Splits `expression[,bindings]` at the first comma.
///
/// # Example
/// ```
/// use stepcalc::engine::bindings::split_bindings;
///
/// assert_eq!(split_bindings(r#"20*a,{"a":6}"#), ("20*a", Some(r#"{"a":6}"#)));
/// assert_eq!(split_bindings("2+2"), ("2+2", None));
/// ```
#[must_use]
pub fn split_bindings(input: &str) -> (&str, Option<&str>) {
    match input.split_once(',') {
        Some((expression, bindings)) => (expression, Some(bindings)),
        None => (input, None),
    }
}

fn single_letter(text: &str) -> Option<char> {
    let mut chars = text.chars();

    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Some(c),
        _ => None,
    }
}
