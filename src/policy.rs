use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::constants::DEFAULT_PREFLIGHT_STATUS;
use crate::error::ConfigError;
use crate::exposed_headers::ExposedHeaders;
use crate::options::{CorsDefaults, ListOrWildcard, OriginsOption, ResourceOptions};
use crate::origin::{OriginPolicy, is_well_formed_origin};
use crate::util::is_http_token;
use tracing::warn;

/// Canonical, fully merged CORS configuration of one resource.
#[derive(Clone, Debug)]
pub struct ResourcePolicy {
    pub origin_policy: OriginPolicy,
    pub allow_credentials: bool,
    pub allowed_methods: AllowedMethods,
    pub allowed_headers: AllowedHeaders,
    pub exposed_headers: ExposedHeaders,
    pub max_age: Option<u64>,
    pub allow_private_network: bool,
    pub preflight_status: u16,
}

impl Default for ResourcePolicy {
    fn default() -> Self {
        Self {
            origin_policy: OriginPolicy::default(),
            allow_credentials: false,
            allowed_methods: AllowedMethods::default(),
            allowed_headers: AllowedHeaders::default(),
            exposed_headers: ExposedHeaders::default(),
            max_age: None,
            allow_private_network: false,
            preflight_status: DEFAULT_PREFLIGHT_STATUS,
        }
    }
}

impl ResourcePolicy {
    /// Merges `declared` over `defaults` and validates the result.
    pub fn resolve(
        declared: &ResourceOptions,
        defaults: &CorsDefaults,
    ) -> Result<Self, ConfigError> {
        let merged = declared.merged_over(defaults);
        let fallback = ResourcePolicy::default();

        let origin_policy = match merged.origins {
            Some(origins) => resolve_origins(origins)?,
            None => fallback.origin_policy,
        };
        let allowed_methods = match merged.allow_methods {
            Some(methods) => resolve_methods(methods)?,
            None => fallback.allowed_methods,
        };
        let allowed_headers = match merged.allow_headers {
            Some(headers) => resolve_headers(headers)?,
            None => fallback.allowed_headers,
        };
        let exposed_headers = match merged.expose_headers {
            Some(headers) => {
                let exposed = ExposedHeaders::list(headers);
                if let Some(invalid) = exposed.iter().find(|header| !is_http_token(header)) {
                    return Err(ConfigError::InvalidHeader {
                        header: invalid.clone(),
                    });
                }
                exposed
            }
            None => fallback.exposed_headers,
        };
        let preflight_status = merged.preflight_status.unwrap_or(fallback.preflight_status);
        if !(200..300).contains(&preflight_status) {
            return Err(ConfigError::InvalidPreflightStatus {
                status: preflight_status,
            });
        }

        let policy = Self {
            origin_policy,
            allow_credentials: merged.allow_credentials.unwrap_or(fallback.allow_credentials),
            allowed_methods,
            allowed_headers,
            exposed_headers,
            max_age: merged.max_age,
            allow_private_network: merged
                .allow_private_network
                .unwrap_or(fallback.allow_private_network),
            preflight_status,
        };

        if policy.allow_credentials && policy.origin_policy.is_any() {
            warn!("wildcard origins combined with credentials; allowed origins will be echoed");
        }

        Ok(policy)
    }
}

fn resolve_origins(origins: OriginsOption) -> Result<OriginPolicy, ConfigError> {
    match origins {
        OriginsOption::Wildcard => Ok(OriginPolicy::Any),
        OriginsOption::List(values) => {
            let mut exact = Vec::with_capacity(values.len());
            for value in values {
                let trimmed = value.trim();
                if trimmed == "*" {
                    return Err(ConfigError::InvalidOrigin { origin: value });
                }
                if trimmed != "null" && !is_well_formed_origin(trimmed) {
                    return Err(ConfigError::InvalidOrigin { origin: value });
                }
                exact.push(trimmed.to_string());
            }
            Ok(OriginPolicy::exact(exact))
        }
        OriginsOption::Pattern(pattern) => Ok(OriginPolicy::pattern(&pattern)?),
        OriginsOption::Policy(policy) => Ok(policy),
    }
}

fn resolve_methods(methods: ListOrWildcard) -> Result<AllowedMethods, ConfigError> {
    match methods {
        ListOrWildcard::Wildcard(value) if value.trim() == "*" => Ok(AllowedMethods::Any),
        ListOrWildcard::Wildcard(value) => Err(ConfigError::InvalidWildcard {
            option: "allow_methods",
            value,
        }),
        ListOrWildcard::List(values) => {
            let allowed = AllowedMethods::list(values);
            if allowed.iter().any(|entry| entry == "*") {
                return Err(ConfigError::InvalidWildcard {
                    option: "allow_methods",
                    value: "[\"*\"]".to_string(),
                });
            }
            if let Some(invalid) = allowed.iter().find(|method| !is_http_token(method)) {
                return Err(ConfigError::InvalidMethod {
                    method: invalid.to_string(),
                });
            }
            Ok(allowed)
        }
    }
}

fn resolve_headers(headers: ListOrWildcard) -> Result<AllowedHeaders, ConfigError> {
    match headers {
        ListOrWildcard::Wildcard(value) if value.trim() == "*" => Ok(AllowedHeaders::Any),
        ListOrWildcard::Wildcard(value) => Err(ConfigError::InvalidWildcard {
            option: "allow_headers",
            value,
        }),
        ListOrWildcard::List(values) => {
            let allowed = AllowedHeaders::list(values);
            if allowed.iter().any(|entry| entry == "*") {
                return Err(ConfigError::InvalidWildcard {
                    option: "allow_headers",
                    value: "[\"*\"]".to_string(),
                });
            }
            if let Some(invalid) = allowed.iter().find(|header| !is_http_token(header)) {
                return Err(ConfigError::InvalidHeader {
                    header: invalid.to_string(),
                });
            }
            Ok(allowed)
        }
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
