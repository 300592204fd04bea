//! Immutable word lists loaded once per process.
//!
//! Every list is a flat comma-separated constant. Entries are trimmed and
//! lowercased on load; a list that is empty or contains an empty entry is a
//! fatal `PipelineError::LexiconLoad`, since the feature schema depends on all
//! lexicons being present.

use indexmap::IndexSet;
use tracing::info;

use crate::constants::lexicon::{
    CLIMATE, DEMOCRATIC, NEWS, REPUBLICAN, STOPWORDS, TIER_ONE, US_STATES,
};
use crate::errors::PipelineError;
use crate::types::{LexiconEntry, LexiconName};

mod lists;

/// Named, ordered, deduplicated set of lowercase entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lexicon {
    name: LexiconName,
    entries: IndexSet<LexiconEntry>,
}

impl Lexicon {
    /// Build a lexicon from already-split entries (trimmed and lowercased here).
    pub fn from_entries<I, S>(name: impl Into<LexiconName>, entries: I) -> Result<Self, PipelineError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = name.into();
        let mut collected = IndexSet::new();
        for (position, entry) in entries.into_iter().enumerate() {
            let entry = entry.as_ref().trim();
            if entry.is_empty() {
                return Err(PipelineError::LexiconLoad {
                    lexicon: name,
                    reason: format!("entry {position} is empty"),
                });
            }
            collected.insert(entry.to_lowercase());
        }
        if collected.is_empty() {
            return Err(PipelineError::LexiconLoad {
                lexicon: name,
                reason: "list has no entries".to_string(),
            });
        }
        Ok(Self {
            name,
            entries: collected,
        })
    }

    /// Lexicon name used in logs and errors.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a successfully loaded lexicon.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Case-insensitive whole-token membership.
    pub fn contains(&self, token: &str) -> bool {
        if self.entries.contains(token) {
            return true;
        }
        let lowered = token.to_lowercase();
        lowered != token && self.entries.contains(lowered.as_str())
    }

    /// Number of distinct entries occurring as a substring of `text`.
    ///
    /// Iterates the lexicon, not the text, so the result is bounded by `len()`.
    /// Short entries also match inside longer words ("ice" in "voice").
    pub fn association_count(&self, text: &str) -> usize {
        self.entries
            .iter()
            .filter(|entry| text.contains(entry.as_str()))
            .count()
    }
}

/// Parse a flat comma-separated list into a lexicon.
pub fn parse_word_list(name: impl Into<LexiconName>, raw: &str) -> Result<Lexicon, PipelineError> {
    let name = name.into();
    if raw.trim().is_empty() {
        return Err(PipelineError::LexiconLoad {
            lexicon: name,
            reason: "list is empty".to_string(),
        });
    }
    Lexicon::from_entries(name, raw.split(','))
}

/// Raw comma-separated sources for every lexicon in the store.
///
/// `Default` returns the built-in lists.
#[derive(Clone, Debug)]
pub struct LexiconSources<'a> {
    /// State abbreviations.
    pub us_states: &'a str,
    /// News-association words.
    pub news: &'a str,
    /// Climate-association words.
    pub climate: &'a str,
    /// Democratic-party-association words.
    pub democratic: &'a str,
    /// Republican-party-association words.
    pub republican: &'a str,
    /// Tier-1 basic vocabulary.
    pub tier_one: &'a str,
    /// Stopwords dropped by the lemmatizer.
    pub stopwords: &'a str,
}

impl Default for LexiconSources<'static> {
    fn default() -> Self {
        Self {
            us_states: lists::US_STATE_WORDS,
            news: lists::NEWS_WORDS,
            climate: lists::CLIMATE_WORDS,
            democratic: lists::DEMOCRATIC_WORDS,
            republican: lists::REPUBLICAN_WORDS,
            tier_one: lists::TIER_ONE_WORDS,
            stopwords: lists::STOPWORDS,
        }
    }
}

/// Process-wide read-only lexicons, built once and shared by reference.
#[derive(Clone, Debug)]
pub struct LexiconStore {
    /// Lowercase US state (and DC) abbreviations.
    pub us_states: Lexicon,
    /// News-association words.
    pub news: Lexicon,
    /// Climate-association words.
    pub climate: Lexicon,
    /// Democratic-party-association words.
    pub democratic: Lexicon,
    /// Republican-party-association words.
    pub republican: Lexicon,
    /// Tier-1 basic vocabulary used to find uncommon terms.
    pub tier_one: Lexicon,
    /// Stopwords dropped by the lemmatizer.
    pub stopwords: Lexicon,
}

impl LexiconStore {
    /// Load the built-in lists.
    pub fn load() -> Result<Self, PipelineError> {
        Self::from_sources(&LexiconSources::default())
    }

    /// Load from explicit sources; any malformed list aborts the whole load.
    pub fn from_sources(sources: &LexiconSources<'_>) -> Result<Self, PipelineError> {
        let store = Self {
            us_states: parse_word_list(US_STATES, sources.us_states)?,
            news: parse_word_list(NEWS, sources.news)?,
            climate: parse_word_list(CLIMATE, sources.climate)?,
            democratic: parse_word_list(DEMOCRATIC, sources.democratic)?,
            republican: parse_word_list(REPUBLICAN, sources.republican)?,
            tier_one: parse_word_list(TIER_ONE, sources.tier_one)?,
            stopwords: parse_word_list(STOPWORDS, sources.stopwords)?,
        };
        info!(
            "[stance:lexicon] loaded {} lexicons: {}",
            store.all().len(),
            store
                .all()
                .iter()
                .map(|lexicon| format!("{}={}", lexicon.name(), lexicon.len()))
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(store)
    }

    /// Topic lexicons in feature-column order (news, climate, democratic, republican).
    pub fn association_lexicons(&self) -> [&Lexicon; 4] {
        [&self.news, &self.climate, &self.democratic, &self.republican]
    }

    fn all(&self) -> [&Lexicon; 7] {
        [
            &self.us_states,
            &self.news,
            &self.climate,
            &self.democratic,
            &self.republican,
            &self.tier_one,
            &self.stopwords,
        ]
    }
}
