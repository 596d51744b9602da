use std::str::FromStr;

use thiserror::Error;
use tracing::debug;
use unicase::UniCase;

use crate::lexer::field_prefix;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AliasError {
    #[error("alias `{0}` contains whitespace and can never match a single term")]
    Whitespace(String),
    #[error("alias `{0}` starts with `-` and would always be read as a negation")]
    Negated(String),
    #[error("alias `{0}` starts with a field prefix and would always be read as field-scoped")]
    FieldScoped(String),
}

/// Shortcut terms recognized by the lexer, compared with Unicode case
/// folding.
#[derive(Debug, Clone, Default)]
pub struct AliasSet {
    // Sorted by folded form, no two entries fold alike.
    aliases: Vec<String>,
}

impl AliasSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the alias was not present yet. The first spelling
    /// inserted is kept.
    pub fn insert(&mut self, alias: impl AsRef<str>) -> bool {
        let alias = alias.as_ref();

        match self.search(alias) {
            Ok(_) => false,
            Err(index) => {
                self.aliases.insert(index, alias.to_string());
                true
            }
        }
    }

    pub fn contains(&self, term: &str) -> bool {
        self.search(term).is_ok()
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// Aliases as inserted, in case-insensitive order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.aliases.iter().map(String::as_str)
    }

    fn search(&self, term: &str) -> Result<usize, usize> {
        let term = UniCase::unicode(term);

        self.aliases
            .binary_search_by(|alias| UniCase::unicode(alias.as_str()).cmp(&term))
    }
}

impl PartialEq for AliasSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|alias| other.contains(alias))
    }
}

impl Eq for AliasSet {}

fn validate(alias: &str) -> Result<(), AliasError> {
    if alias.chars().any(char::is_whitespace) {
        Err(AliasError::Whitespace(alias.to_string()))
    } else if alias.starts_with('-') {
        Err(AliasError::Negated(alias.to_string()))
    } else if field_prefix(alias).is_some() {
        Err(AliasError::FieldScoped(alias.to_string()))
    } else {
        Ok(())
    }
}

impl<S: AsRef<str>> FromIterator<S> for AliasSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut aliases = Self::new();
        aliases.extend(iter);
        aliases
    }
}

impl<S: AsRef<str>> Extend<S> for AliasSet {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for alias in iter {
            self.insert(alias);
        }
    }
}

/// Parses a comma-separated alias list, as stored in preferences.
impl FromStr for AliasSet {
    type Err = AliasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut aliases = Self::new();

        for alias in s.split(',').map(str::trim).filter(|alias| !alias.is_empty()) {
            if let Err(error) = validate(alias) {
                debug!(%error, "rejected alias configuration");
                return Err(error);
            }

            aliases.insert(alias);
        }

        debug!(aliases = aliases.len(), "loaded alias configuration");
        Ok(aliases)
    }
}
