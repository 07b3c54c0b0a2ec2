use crate::classification::{Classification, classify};
use crate::context::RequestContext;
use crate::error::ConfigError;
use crate::header_builder::HeaderBuilder;
use crate::headers::{HeaderCollection, Headers};
use crate::options::{CorsDefaults, ResourceOptions};
use crate::policy::ResourcePolicy;
use crate::result::{CorsDecision, PreflightResponse};
use tracing::debug;

/// CORS policy engine evaluating requests against one [`ResourcePolicy`].
#[derive(Clone, Debug)]
pub struct Cors {
    policy: ResourcePolicy,
}

impl Cors {
    /// Resolves `options` over the built-in defaults.
    pub fn new(options: ResourceOptions) -> Result<Self, ConfigError> {
        Self::with_defaults(options, &CorsDefaults::default())
    }

    pub fn with_defaults(
        options: ResourceOptions,
        defaults: &CorsDefaults,
    ) -> Result<Self, ConfigError> {
        ResourcePolicy::resolve(&options, defaults).map(Self::from_policy)
    }

    pub fn from_policy(policy: ResourcePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ResourcePolicy {
        &self.policy
    }

    pub fn check(&self, request: &RequestContext<'_>) -> CorsDecision {
        match classify(request) {
            Classification::NotCors => CorsDecision::NotApplicable,
            Classification::SimpleCors => match self.build_simple_headers(request) {
                Some(headers) => CorsDecision::Simple(headers),
                None => CorsDecision::PassThrough,
            },
            Classification::Preflight => {
                CorsDecision::Preflight(self.build_preflight_response(request))
            }
        }
    }

    /// Headers for a simple cross-origin request, or `None` when the origin
    /// is rejected and the request should pass through unannotated.
    pub fn build_simple_headers(&self, request: &RequestContext<'_>) -> Option<Headers> {
        let builder = HeaderBuilder::new(&self.policy);
        let Some(origin_headers) = builder.build_origin_headers(request) else {
            debug!(origin = ?request.origin, "CORS: origin not allowed, passing through");
            return None;
        };

        let mut headers = HeaderCollection::new();
        headers.extend(origin_headers);
        headers.extend(builder.build_credentials_header());
        headers.extend(builder.build_exposed_headers());
        Some(headers.into_headers())
    }

    /// Terminal response for a preflight. Grant headers are present only
    /// when origin, method and every requested header are allowed.
    pub fn build_preflight_response(&self, request: &RequestContext<'_>) -> PreflightResponse {
        let denied = PreflightResponse {
            status: self.policy.preflight_status,
            headers: Headers::new(),
        };

        let builder = HeaderBuilder::new(&self.policy);
        let Some(origin_headers) = builder.build_origin_headers(request) else {
            debug!(origin = ?request.origin, "CORS preflight: origin not allowed");
            return denied;
        };

        let requested_method = request.access_control_request_method.unwrap_or_default();
        if !self.policy.allowed_methods.allows_method(requested_method) {
            debug!(method = requested_method, "CORS preflight: method not allowed");
            return denied;
        }

        let requested_headers = request.access_control_request_headers;
        if !self.policy.allowed_headers.allows_headers(requested_headers) {
            debug!(
                headers = requested_headers.unwrap_or_default(),
                "CORS preflight: headers not allowed"
            );
            return denied;
        }

        let mut headers = HeaderCollection::with_estimate(7);
        headers.extend(origin_headers);
        headers.extend(builder.build_credentials_header());
        headers.extend(builder.build_methods_header(requested_method));
        headers.extend(builder.build_allowed_headers(requested_headers));
        headers.extend(builder.build_max_age_header());
        headers.extend(builder.build_private_network_header(request));

        PreflightResponse {
            status: self.policy.preflight_status,
            headers: headers.into_headers(),
        }
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
