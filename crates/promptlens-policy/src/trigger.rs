//! Rule trigger definitions

use aho_corasick::AhoCorasick;
use promptlens_core::{Error, Result};
use regex::RegexSet;
use serde::{Deserialize, Serialize};

/// Trigger condition for a rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
#[serde(rename_all = "lowercase")]
pub enum Trigger {
    /// Regex pattern set matched against the raw text; fires if any pattern matches.
    ///
    /// Flags such as case-insensitivity are written inline, e.g. `(?is)`.
    Pattern {
        /// The patterns to match
        patterns: Vec<String>,
    },

    /// Substring keyword list; fires if any keyword occurs.
    Keyword {
        /// Keywords to look for
        keywords: Vec<String>,

        /// Match against the lower-cased text instead of the raw text
        #[serde(default = "default_true")]
        case_insensitive: bool,
    },
}

impl Trigger {
    /// Pattern trigger from string literals
    pub fn pattern<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Pattern {
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    /// Case-insensitive keyword trigger
    pub fn keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Keyword {
            keywords: keywords.into_iter().map(Into::into).collect(),
            case_insensitive: true,
        }
    }

    /// Exact-case keyword trigger
    pub fn exact<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Keyword {
            keywords: keywords.into_iter().map(Into::into).collect(),
            case_insensitive: false,
        }
    }

    /// Compile this trigger into a matcher
    pub fn compile(&self) -> Result<Matcher> {
        match self {
            Self::Pattern { patterns } => {
                if patterns.is_empty() {
                    return Err(Error::policy("pattern trigger has no patterns"));
                }
                let set = RegexSet::new(patterns).map_err(|e| {
                    Error::policy(format!("Failed to compile pattern set: {}", e))
                })?;
                Ok(Matcher::Pattern(set))
            }
            Self::Keyword {
                keywords,
                case_insensitive,
            } => {
                if keywords.is_empty() || keywords.iter().any(|k| k.is_empty()) {
                    return Err(Error::policy("keyword trigger needs non-empty keywords"));
                }
                let needles: Vec<String> = if *case_insensitive {
                    keywords.iter().map(|k| k.to_lowercase()).collect()
                } else {
                    keywords.clone()
                };
                let ac = AhoCorasick::new(&needles).map_err(|e| {
                    Error::policy(format!("Failed to build keyword matcher: {}", e))
                })?;
                Ok(Matcher::Keyword {
                    automaton: ac,
                    case_insensitive: *case_insensitive,
                })
            }
        }
    }
}

fn default_true() -> bool {
    true
}

/// Text under evaluation, with the lower-cased form computed once
#[derive(Debug)]
pub struct EvaluationContext<'a> {
    /// Text as submitted
    pub raw: &'a str,

    /// Lower-cased text for case-insensitive keywords
    pub lowered: String,
}

impl<'a> EvaluationContext<'a> {
    /// Prepare a context for the given text
    pub fn new(raw: &'a str) -> Self {
        Self {
            raw,
            lowered: raw.to_lowercase(),
        }
    }
}

/// A compiled trigger
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Compiled regex set
    Pattern(RegexSet),

    /// Compiled keyword automaton
    Keyword {
        /// Automaton over the keywords (lower-cased when case-insensitive)
        automaton: AhoCorasick,
        /// Whether to search the lower-cased text
        case_insensitive: bool,
    },
}

impl Matcher {
    /// Check whether the trigger fires for this text
    pub fn is_match(&self, ctx: &EvaluationContext<'_>) -> bool {
        match self {
            Self::Pattern(set) => set.is_match(ctx.raw),
            Self::Keyword {
                automaton,
                case_insensitive,
            } => {
                let haystack = if *case_insensitive {
                    ctx.lowered.as_str()
                } else {
                    ctx.raw
                };
                automaton.is_match(haystack)
            }
        }
    }
}
