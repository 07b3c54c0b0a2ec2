use indexmap::IndexSet;
use regex_automata::meta::{BuildError, Regex};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Callback deciding whether a well-formed request origin is allowed.
pub type OriginPredicateFn = dyn Fn(&str) -> bool + Send + Sync;

const MAX_PATTERN_LENGTH: usize = 50_000;
const MAX_ORIGIN_LENGTH: usize = 4_096;
const NULL_ORIGIN: &str = "null";

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("failed to compile origin pattern `{pattern}`")]
    Build {
        pattern: String,
        #[source]
        source: Box<BuildError>,
    },
    #[error("origin pattern length {length} exceeds maximum allowed {max}")]
    TooLong { length: usize, max: usize },
}

/// Non-literal origin check: a compiled pattern or an arbitrary callback.
#[derive(Clone)]
pub enum OriginPredicate {
    Pattern(Regex),
    Callback(Arc<OriginPredicateFn>),
}

impl OriginPredicate {
    /// Compiles `pattern` anchored at both ends: it must match the whole
    /// origin, not a substring of it.
    pub fn pattern(pattern: &str) -> Result<Self, PatternError> {
        if pattern.len() > MAX_PATTERN_LENGTH {
            return Err(PatternError::TooLong {
                length: pattern.len(),
                max: MAX_PATTERN_LENGTH,
            });
        }

        let anchored = format!("^(?:{pattern})$");
        let regex = Regex::new(&anchored).map_err(|err| PatternError::Build {
            pattern: pattern.to_owned(),
            source: Box::new(err),
        })?;
        Ok(Self::Pattern(regex))
    }

    pub fn callback<F>(callback: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self::Callback(Arc::new(callback))
    }

    fn accepts(&self, origin: &str) -> bool {
        match self {
            OriginPredicate::Pattern(regex) => regex.is_match(origin.as_bytes()),
            OriginPredicate::Callback(callback) => callback(origin),
        }
    }
}

impl fmt::Debug for OriginPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OriginPredicate::Pattern(regex) => f.debug_tuple("Pattern").field(regex).finish(),
            OriginPredicate::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

/// Which request origins a resource grants access to.
#[derive(Clone, Debug)]
pub enum OriginPolicy {
    Any,
    ExactSet(IndexSet<String>),
    Predicate(OriginPredicate),
}

impl Default for OriginPolicy {
    fn default() -> Self {
        Self::ExactSet(IndexSet::new())
    }
}

impl OriginPolicy {
    pub fn any() -> Self {
        Self::Any
    }

    pub fn exact<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::ExactSet(origins.into_iter().map(Into::into).collect())
    }

    pub fn pattern(pattern: &str) -> Result<Self, PatternError> {
        OriginPredicate::pattern(pattern).map(Self::Predicate)
    }

    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(OriginPredicate::callback(predicate))
    }

    pub fn is_any(&self) -> bool {
        matches!(self, OriginPolicy::Any)
    }

    /// Returns whether `request_origin` is allowed. Absent and malformed
    /// origins never match.
    pub fn matches(&self, request_origin: Option<&str>) -> bool {
        let Some(origin) = request_origin else {
            return false;
        };

        if origin == NULL_ORIGIN {
            return match self {
                OriginPolicy::ExactSet(origins) => origins.contains(NULL_ORIGIN),
                _ => false,
            };
        }

        if !is_well_formed_origin(origin) {
            return false;
        }

        match self {
            OriginPolicy::Any => true,
            OriginPolicy::ExactSet(origins) => origins.contains(origin),
            OriginPolicy::Predicate(predicate) => predicate.accepts(origin),
        }
    }
}

/// Checks the serialized `scheme://host[:port]` shape of an origin.
pub fn is_well_formed_origin(value: &str) -> bool {
    if value.is_empty() || value.len() > MAX_ORIGIN_LENGTH {
        return false;
    }

    let Some((scheme, authority)) = value.split_once("://") else {
        return false;
    };

    let mut scheme_bytes = scheme.bytes();
    match scheme_bytes.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    if !scheme_bytes.all(|byte| byte.is_ascii_alphanumeric() || matches!(byte, b'+' | b'-' | b'.'))
    {
        return false;
    }

    let (host, port) = match authority.rsplit_once(':') {
        // Bracketed IPv6 hosts contain colons of their own.
        Some((host, port)) if !port.contains(']') => (host, Some(port)),
        _ => (authority, None),
    };

    if host.is_empty()
        || host
            .chars()
            .any(|ch| ch.is_whitespace() || ch.is_control() || matches!(ch, '/' | '?' | '#' | '@'))
    {
        return false;
    }

    match port {
        Some(port) => !port.is_empty() && port.bytes().all(|byte| byte.is_ascii_digit()),
        None => true,
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
