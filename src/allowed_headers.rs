use crate::constants::LIST_SEPARATOR;
use crate::util::{equals_ignore_case, normalize_lower, split_header_list};
use std::collections::HashSet;

/// Request headers a resource accepts in preflight negotiation.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AllowedHeaders {
    List(Vec<String>),
    /// Every requested header is accepted and echoed back.
    Any,
}

impl Default for AllowedHeaders {
    fn default() -> Self {
        AllowedHeaders::List(Vec::new())
    }
}

impl AllowedHeaders {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut deduped: Vec<String> = Vec::new();
        for value in values.into_iter() {
            let trimmed = value.into().trim().to_string();
            if trimmed.is_empty() {
                continue;
            }
            if seen.insert(normalize_lower(&trimmed)) {
                deduped.push(trimmed);
            }
        }

        Self::List(deduped)
    }

    pub fn any() -> Self {
        Self::Any
    }

    /// Returns true when every header named in `request_headers` is allowed.
    /// A missing or blank request line asks for nothing and is always allowed.
    pub fn allows_headers(&self, request_headers: Option<&str>) -> bool {
        match self {
            Self::Any => true,
            Self::List(allowed) => split_header_list(request_headers.unwrap_or_default()).all(
                |header| {
                    allowed
                        .iter()
                        .any(|allowed_header| equals_ignore_case(allowed_header, header))
                },
            ),
        }
    }

    /// Value for `Access-Control-Allow-Headers` once the request was accepted.
    pub fn header_value(&self, request_headers: Option<&str>) -> Option<String> {
        let value = match self {
            Self::List(values) => values.join(LIST_SEPARATOR),
            Self::Any => split_header_list(request_headers.unwrap_or_default())
                .collect::<Vec<_>>()
                .join(LIST_SEPARATOR),
        };

        if value.is_empty() { None } else { Some(value) }
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &str> {
        let values = match self {
            Self::Any => None,
            Self::List(values) => Some(values.iter().map(String::as_str)),
        };
        values.into_iter().flatten()
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
