use crate::constants::{LIST_SEPARATOR, method};
use indexmap::IndexSet;
use once_cell::sync::Lazy;

static DEFAULT_METHODS: Lazy<IndexSet<String>> = Lazy::new(|| {
    [
        method::GET,
        method::HEAD,
        method::PUT,
        method::PATCH,
        method::POST,
        method::DELETE,
    ]
    .into_iter()
    .map(str::to_owned)
    .collect()
});

/// Methods a resource accepts in preflight negotiation.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AllowedMethods {
    /// Any requested method is granted; the grant echoes the requested method.
    Any,
    /// Uppercased, deduplicated, in declaration order.
    List(IndexSet<String>),
}

impl AllowedMethods {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(
            values
                .into_iter()
                .map(|value| value.into().trim().to_ascii_uppercase())
                .filter(|value| !value.is_empty())
                .collect(),
        )
    }

    pub fn any() -> Self {
        Self::Any
    }

    pub fn allows_method(&self, requested: &str) -> bool {
        let requested = requested.trim();
        if requested.is_empty() {
            return false;
        }

        match self {
            AllowedMethods::Any => true,
            AllowedMethods::List(values) => values
                .iter()
                .any(|value| value.eq_ignore_ascii_case(requested)),
        }
    }

    /// Value for `Access-Control-Allow-Methods` once `requested` was accepted.
    pub fn header_value(&self, requested: &str) -> Option<String> {
        match self {
            AllowedMethods::Any => Some(requested.trim().to_ascii_uppercase()),
            AllowedMethods::List(values) if values.is_empty() => None,
            AllowedMethods::List(values) => Some(
                values
                    .iter()
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(LIST_SEPARATOR),
            ),
        }
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &str> {
        let values = match self {
            AllowedMethods::Any => None,
            AllowedMethods::List(values) => Some(values.iter().map(String::as_str)),
        };
        values.into_iter().flatten()
    }
}

impl Default for AllowedMethods {
    fn default() -> Self {
        Self::List(DEFAULT_METHODS.clone())
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
