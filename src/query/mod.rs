//! Query parsing module
//!
//! Parses the compact keyword syntax accepted by book search:
//! - Plain keyword: `programming`
//! - Exclusion: `java-spring` (books matching `java`, minus any whose title
//!   or subtitle mentions `spring`)
//!
//! At most one operator may appear. `|` is counted toward that limit but has
//! no search behaviour of its own.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use thiserror::Error;

/// Delimiter separating the include term from the exclude term
pub const NOT_DELIMITER: char = '-';

/// Reserved delimiter; counted as an operator, never split on
pub const OR_DELIMITER: char = '|';

/// Characters a keyword may not contain
static DISALLOWED_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[{}\[\]/?.,;:)*~`!^_+<>@#$%&\\=('"]"#).unwrap());

/// Why a search or page argument was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("keyword is empty")]
    Empty,
    #[error("keyword contains disallowed character '{0}'")]
    DisallowedCharacter(char),
    #[error("keyword contains {0} operators, at most one is allowed")]
    TooManyOperators(usize),
    #[error("keyword may not start or end with '{0}'")]
    MisplacedOperator(char),
    #[error("invalid page '{0}'")]
    InvalidPage(String),
}

/// Parsed form of a raw keyword
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeywordExpression {
    /// Search the catalog for the keyword as-is
    Plain { keyword: String },
    /// Search for `include`, then drop records mentioning `exclude`
    IncludeExclude { include: String, exclude: String },
}

impl KeywordExpression {
    /// Parse and validate a raw keyword
    pub fn parse(raw: &str) -> Result<Self, QueryError> {
        if raw.trim().is_empty() {
            return Err(QueryError::Empty);
        }

        if let Some(m) = DISALLOWED_CHARS.find(raw) {
            // a match is never empty
            let c = m.as_str().chars().next().unwrap_or_default();
            return Err(QueryError::DisallowedCharacter(c));
        }

        let not_count = raw.matches(NOT_DELIMITER).count();
        let or_count = raw.matches(OR_DELIMITER).count();
        if not_count + or_count >= 2 {
            return Err(QueryError::TooManyOperators(not_count + or_count));
        }

        for delimiter in [OR_DELIMITER, NOT_DELIMITER] {
            if raw.starts_with(delimiter) || raw.ends_with(delimiter) {
                return Err(QueryError::MisplacedOperator(delimiter));
            }
        }

        // With one delimiter that is neither first nor last, both sides are non-empty
        match raw.split_once(NOT_DELIMITER) {
            Some((include, exclude)) => Ok(Self::IncludeExclude {
                include: include.to_string(),
                exclude: exclude.to_string(),
            }),
            None => Ok(Self::Plain {
                keyword: raw.to_string(),
            }),
        }
    }

    /// The term sent to the remote catalog
    pub fn search_term(&self) -> &str {
        match self {
            Self::Plain { keyword } => keyword,
            Self::IncludeExclude { include, .. } => include,
        }
    }

    /// The exclusion term, if any
    pub fn exclude_term(&self) -> Option<&str> {
        match self {
            Self::Plain { .. } => None,
            Self::IncludeExclude { exclude, .. } => Some(exclude),
        }
    }
}

impl fmt::Display for KeywordExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain { keyword } => write!(f, "{}", keyword),
            Self::IncludeExclude { include, exclude } => {
                write!(f, "{}{}{}", include, NOT_DELIMITER, exclude)
            }
        }
    }
}

/// Parse a raw page argument into a 1-based page index.
///
/// The argument must contain a digit and, after trimming, consist only of
/// ASCII digits forming a positive integer. Signs are rejected.
pub fn parse_page(raw: &str) -> Result<u32, QueryError> {
    let invalid = || QueryError::InvalidPage(raw.to_string());

    if !raw.chars().any(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let digits = raw.trim();
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    match digits.parse::<u32>() {
        Ok(page) if page >= 1 => Ok(page),
        _ => Err(invalid()),
    }
}
