use crate::origin::OriginPolicy;
use serde::Deserialize;

/// Declared `origins` option.
#[derive(Clone, Debug, Deserialize)]
#[serde(from = "RawOrigins")]
pub enum OriginsOption {
    /// `"*"`
    Wildcard,
    /// A single origin string or a list of them.
    List(Vec<String>),
    /// `{ "pattern": "<regex>" }`
    Pattern(String),
    /// Already-built policy, only available programmatically.
    Policy(OriginPolicy),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawOrigins {
    One(String),
    Many(Vec<String>),
    Pattern(PatternOrigins),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct PatternOrigins {
    pattern: String,
}

impl From<RawOrigins> for OriginsOption {
    fn from(raw: RawOrigins) -> Self {
        match raw {
            RawOrigins::One(value) if value.trim() == "*" => OriginsOption::Wildcard,
            RawOrigins::One(value) => OriginsOption::List(vec![value]),
            RawOrigins::Many(values) => OriginsOption::List(values),
            RawOrigins::Pattern(PatternOrigins { pattern }) => OriginsOption::Pattern(pattern),
        }
    }
}

/// Declared `allow_methods` / `allow_headers` option: a list, or the
/// string `"*"`. Any other string is rejected on resolve.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ListOrWildcard {
    Wildcard(String),
    List(Vec<String>),
}

impl ListOrWildcard {
    pub fn wildcard() -> Self {
        Self::Wildcard("*".to_string())
    }

    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

/// Options declared for one resource, or as process-wide defaults. Every
/// field is optional: unset fields inherit from the next layer.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceOptions {
    pub origins: Option<OriginsOption>,
    pub allow_credentials: Option<bool>,
    pub allow_methods: Option<ListOrWildcard>,
    pub allow_headers: Option<ListOrWildcard>,
    pub expose_headers: Option<Vec<String>>,
    pub max_age: Option<u64>,
    pub allow_private_network: Option<bool>,
    pub preflight_status: Option<u16>,
}

/// Process-wide defaults share the shape of per-resource options.
pub type CorsDefaults = ResourceOptions;

impl ResourceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses options from a JSON object; unknown keys are rejected.
    pub fn from_json_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    pub fn any_origin(mut self) -> Self {
        self.origins = Some(OriginsOption::Wildcard);
        self
    }

    pub fn origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.origins = Some(OriginsOption::List(
            origins.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Allows origins matching `pattern`. The whole origin must match; the
    /// pattern is anchored at both ends when compiled.
    pub fn origin_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.origins = Some(OriginsOption::Pattern(pattern.into()));
        self
    }

    pub fn origin_policy(mut self, policy: OriginPolicy) -> Self {
        self.origins = Some(OriginsOption::Policy(policy));
        self
    }

    pub fn allow_credentials(mut self, enabled: bool) -> Self {
        self.allow_credentials = Some(enabled);
        self
    }

    pub fn allow_methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_methods = Some(ListOrWildcard::list(methods));
        self
    }

    pub fn allow_any_method(mut self) -> Self {
        self.allow_methods = Some(ListOrWildcard::wildcard());
        self
    }

    pub fn allow_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_headers = Some(ListOrWildcard::list(headers));
        self
    }

    pub fn allow_any_header(mut self) -> Self {
        self.allow_headers = Some(ListOrWildcard::wildcard());
        self
    }

    pub fn expose_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expose_headers = Some(headers.into_iter().map(Into::into).collect());
        self
    }

    pub fn max_age(mut self, seconds: u64) -> Self {
        self.max_age = Some(seconds);
        self
    }

    pub fn allow_private_network(mut self, enabled: bool) -> Self {
        self.allow_private_network = Some(enabled);
        self
    }

    pub fn preflight_status(mut self, status: u16) -> Self {
        self.preflight_status = Some(status);
        self
    }

    /// Layers `self` over `defaults`: declared fields win, absent ones inherit.
    pub fn merged_over(&self, defaults: &CorsDefaults) -> ResourceOptions {
        ResourceOptions {
            origins: self.origins.clone().or_else(|| defaults.origins.clone()),
            allow_credentials: self.allow_credentials.or(defaults.allow_credentials),
            allow_methods: self
                .allow_methods
                .clone()
                .or_else(|| defaults.allow_methods.clone()),
            allow_headers: self
                .allow_headers
                .clone()
                .or_else(|| defaults.allow_headers.clone()),
            expose_headers: self
                .expose_headers
                .clone()
                .or_else(|| defaults.expose_headers.clone()),
            max_age: self.max_age.or(defaults.max_age),
            allow_private_network: self.allow_private_network.or(defaults.allow_private_network),
            preflight_status: self.preflight_status.or(defaults.preflight_status),
        }
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
