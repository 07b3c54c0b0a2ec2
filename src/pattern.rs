use crate::error::ConfigError;
use std::fmt;

const WILDCARD: char = '*';

#[derive(Clone, Debug, PartialEq, Eq)]
enum PatternKind {
    Exact(String),
    /// Fixed prefix, always ending in `/` (or empty for a lone `*`).
    Prefix(String),
}

/// Path template a CORS policy is registered for: an exact path such as
/// `/api/status`, or a prefix ending in `/*` such as `/public/*`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourcePattern {
    raw: String,
    kind: PatternKind,
}

impl ResourcePattern {
    pub fn parse(pattern: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: &'static str| ConfigError::InvalidResourcePattern {
            pattern: pattern.to_string(),
            reason,
        };

        if pattern == "*" {
            return Ok(Self {
                raw: pattern.to_string(),
                kind: PatternKind::Prefix(String::new()),
            });
        }
        if !pattern.starts_with('/') {
            return Err(invalid("must start with `/`"));
        }
        if pattern
            .chars()
            .any(|ch| ch.is_whitespace() || ch.is_control() || matches!(ch, '?' | '#'))
        {
            return Err(invalid("must not contain whitespace, `?` or `#`"));
        }

        let kind = match pattern.find(WILDCARD) {
            None => PatternKind::Exact(pattern.to_string()),
            Some(index) if index == pattern.len() - 1 && pattern.ends_with("/*") => {
                PatternKind::Prefix(pattern[..index].to_string())
            }
            Some(_) => return Err(invalid("`*` is only allowed as a trailing `/*` segment")),
        };

        Ok(Self {
            raw: pattern.to_string(),
            kind,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self.kind, PatternKind::Prefix(_))
    }

    pub fn matches(&self, path: &str) -> bool {
        match &self.kind {
            PatternKind::Exact(exact) => path == exact,
            PatternKind::Prefix(prefix) => path.starts_with(prefix.as_str()),
        }
    }
}

impl fmt::Display for ResourcePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
#[path = "pattern_test.rs"]
mod pattern_test;
