//! Generic pattern table
//!
//! Every phrase-level rule (informal terms, clichés, vague expressions) is a
//! table of compiled patterns carrying some metadata. One matcher serves them
//! all.

use regex::{Regex, RegexBuilder};

use crate::error::LexiconError;

/// Compile a lexicon pattern: case-insensitive, Unicode word boundaries
pub(crate) fn compile(pattern: &str) -> Result<Regex, LexiconError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| LexiconError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}

/// A compiled pattern with its metadata
#[derive(Debug, Clone)]
pub struct PatternEntry<M> {
    regex: Regex,
    guard: Option<Regex>,
    meta: M,
}

impl<M> PatternEntry<M> {
    /// Metadata attached to this entry
    pub fn meta(&self) -> &M {
        &self.meta
    }

    /// Source pattern
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// First accepted match in `text`.
    ///
    /// With a guard, a match is rejected when the remainder of its line
    /// matches the guard; scanning continues with the next occurrence.
    pub fn first_match<'t>(&self, text: &'t str) -> Option<&'t str> {
        match &self.guard {
            None => self.regex.find(text).map(|m| m.as_str()),
            Some(guard) => self
                .regex
                .find_iter(text)
                .find(|m| {
                    let rest = &text[m.end()..];
                    let line = rest.split('\n').next().unwrap_or("");
                    !guard.is_match(line)
                })
                .map(|m| m.as_str()),
        }
    }
}

/// Ordered table of patterns
#[derive(Debug, Clone)]
pub struct PatternTable<M> {
    entries: Vec<PatternEntry<M>>,
}

impl<M> Default for PatternTable<M> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<M> PatternTable<M> {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile and append an entry
    pub fn push(&mut self, pattern: &str, meta: M) -> Result<(), LexiconError> {
        self.push_guarded(pattern, None, meta)
    }

    /// Compile and append an entry with an optional trailing-context guard
    pub fn push_guarded(
        &mut self,
        pattern: &str,
        guard: Option<&str>,
        meta: M,
    ) -> Result<(), LexiconError> {
        let regex = compile(pattern)?;
        let guard = guard.map(compile).transpose()?;
        self.entries.push(PatternEntry { regex, guard, meta });
        Ok(())
    }

    /// Entries that match somewhere in `text`, in table order, with the
    /// literal text of their first accepted match
    pub fn matches<'a>(&'a self, text: &'a str) -> impl Iterator<Item = (&'a M, &'a str)> + 'a {
        self.entries
            .iter()
            .filter_map(move |entry| entry.first_match(text).map(|m| (&entry.meta, m)))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries
    pub fn iter(&self) -> impl Iterator<Item = &PatternEntry<M>> {
        self.entries.iter()
    }
}
