use crate::origin::PatternError;
use thiserror::Error;

/// Problems detected while registering resources. Any of these means the
/// host should refuse to start rather than serve with an ambiguous policy.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid CORS configuration document: {0}")]
    Document(#[from] serde_json::Error),
    #[error("`{origin}` is not a valid origin; expected scheme://host[:port] or null")]
    InvalidOrigin { origin: String },
    #[error("invalid origin pattern: {0}")]
    InvalidOriginPattern(#[from] PatternError),
    #[error("`{method}` is not a valid HTTP method name")]
    InvalidMethod { method: String },
    #[error("`{header}` is not a valid HTTP header name")]
    InvalidHeader { header: String },
    #[error("option `{option}` accepts a list or \"*\", got `{value}`")]
    InvalidWildcard { option: &'static str, value: String },
    #[error("invalid resource pattern `{pattern}`: {reason}")]
    InvalidResourcePattern {
        pattern: String,
        reason: &'static str,
    },
    #[error("preflight status {status} is outside the 2xx range")]
    InvalidPreflightStatus { status: u16 },
}
