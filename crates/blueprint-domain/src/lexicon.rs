//! Lexicon module - cue words that drive the extraction heuristics
//!
//! The lexicon is configuration data: a table of categories to word sets that
//! can be extended or localised without touching extraction logic. Cues are
//! stored lowercased and matched as substrings against lowercased text.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Category of cue words
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CueCategory {
    /// Causal connectives (because, therefore, …)
    Cause,

    /// Inclusion markers (include, 含)
    Inclusion,

    /// Time references (today, before, …)
    Time,

    /// Verb endings and copulas marking a relation token
    Verb,
}

impl CueCategory {
    /// All categories
    pub const ALL: [CueCategory; 4] = [
        CueCategory::Cause,
        CueCategory::Inclusion,
        CueCategory::Time,
        CueCategory::Verb,
    ];

    /// Get the category name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            CueCategory::Cause => "cause",
            CueCategory::Inclusion => "inclusion",
            CueCategory::Time => "time",
            CueCategory::Verb => "verb",
        }
    }
}

impl fmt::Display for CueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cue-word table keyed by category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "LexiconTable", into = "LexiconTable")]
pub struct Lexicon {
    cause: BTreeSet<String>,
    inclusion: BTreeSet<String>,
    time: BTreeSet<String>,
    verb: BTreeSet<String>,
}

/// Serialized shape of the lexicon: one word list per category
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct LexiconTable {
    #[serde(default)]
    cause: BTreeSet<String>,
    #[serde(default)]
    inclusion: BTreeSet<String>,
    #[serde(default)]
    time: BTreeSet<String>,
    #[serde(default)]
    verb: BTreeSet<String>,
}

impl Lexicon {
    /// Default causal connectives
    pub const CAUSE_WORDS: &'static [&'static str] = &[
        "because", "therefore", "so", "hence", "thus", "ので", "だから", "ゆえに",
    ];

    /// Default inclusion markers
    pub const INCLUSION_WORDS: &'static [&'static str] = &["含", "include"];

    /// Default time references
    pub const TIME_WORDS: &'static [&'static str] = &[
        "today", "now", "later", "before", "after", "昨日", "今日", "明日",
    ];

    /// Default verb cues
    pub const VERB_CUES: &'static [&'static str] = &[
        "する", "した", "なる", "be", "is", "are", "do", "make", "cause",
    ];

    /// A lexicon with no cues in any category
    pub fn empty() -> Self {
        Self::from(LexiconTable::default())
    }

    /// Add cues to a category, returning the extended lexicon
    ///
    /// # Examples
    ///
    /// ```
    /// use blueprint_domain::{CueCategory, Lexicon};
    ///
    /// let lexicon = Lexicon::default().with_cues(CueCategory::Cause, ["Consequently"]);
    /// assert!(lexicon.matches(CueCategory::Cause, "and CONSEQUENTLY it fell"));
    /// ```
    pub fn with_cues<I, S>(mut self, category: CueCategory, cues: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set = self.cues_mut(category);
        set.extend(
            cues.into_iter()
                .map(|c| c.as_ref().trim().to_lowercase())
                .filter(|c| !c.is_empty()),
        );
        self
    }

    /// The cue set of a category
    pub fn cues(&self, category: CueCategory) -> &BTreeSet<String> {
        match category {
            CueCategory::Cause => &self.cause,
            CueCategory::Inclusion => &self.inclusion,
            CueCategory::Time => &self.time,
            CueCategory::Verb => &self.verb,
        }
    }

    fn cues_mut(&mut self, category: CueCategory) -> &mut BTreeSet<String> {
        match category {
            CueCategory::Cause => &mut self.cause,
            CueCategory::Inclusion => &mut self.inclusion,
            CueCategory::Time => &mut self.time,
            CueCategory::Verb => &mut self.verb,
        }
    }

    /// Whether any cue of the category occurs in `text` (case-insensitive)
    pub fn matches(&self, category: CueCategory, text: &str) -> bool {
        self.matches_lowercased(category, &text.to_lowercase())
    }

    /// Like [`Lexicon::matches`] for text the caller has already lowercased
    pub fn matches_lowercased(&self, category: CueCategory, lowered: &str) -> bool {
        self.cues(category).iter().any(|cue| lowered.contains(cue.as_str()))
    }

    /// Total number of cues across all categories
    pub fn len(&self) -> usize {
        CueCategory::ALL.iter().map(|c| self.cues(*c).len()).sum()
    }

    /// Whether every category is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::empty()
            .with_cues(CueCategory::Cause, Self::CAUSE_WORDS)
            .with_cues(CueCategory::Inclusion, Self::INCLUSION_WORDS)
            .with_cues(CueCategory::Time, Self::TIME_WORDS)
            .with_cues(CueCategory::Verb, Self::VERB_CUES)
    }
}

impl From<LexiconTable> for Lexicon {
    fn from(table: LexiconTable) -> Self {
        let empty = Self {
            cause: BTreeSet::new(),
            inclusion: BTreeSet::new(),
            time: BTreeSet::new(),
            verb: BTreeSet::new(),
        };
        empty
            .with_cues(CueCategory::Cause, table.cause)
            .with_cues(CueCategory::Inclusion, table.inclusion)
            .with_cues(CueCategory::Time, table.time)
            .with_cues(CueCategory::Verb, table.verb)
    }
}

impl From<Lexicon> for LexiconTable {
    fn from(lexicon: Lexicon) -> Self {
        Self {
            cause: lexicon.cause,
            inclusion: lexicon.inclusion,
            time: lexicon.time,
            verb: lexicon.verb,
        }
    }
}
