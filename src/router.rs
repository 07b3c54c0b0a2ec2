use crate::constants::header;
use crate::context::RequestContext;
use crate::cors::Cors;
use crate::error::ConfigError;
use crate::headers::Headers;
use crate::options::{CorsDefaults, ResourceOptions};
use crate::pattern::ResourcePattern;
use crate::result::{CorsDecision, PreflightResponse};
use tracing::{debug, warn};

/// Inbound request abstraction supplied by the host framework.
pub trait CorsRequest {
    fn method(&self) -> &str;
    /// Case-insensitive header lookup; `None` when absent or not valid text.
    fn header(&self, name: &str) -> Option<&str>;
    fn path(&self) -> &str;

    fn cors_context(&self) -> RequestContext<'_> {
        RequestContext {
            method: self.method(),
            origin: self.header(header::ORIGIN),
            access_control_request_method: self.header(header::ACCESS_CONTROL_REQUEST_METHOD),
            access_control_request_headers: self.header(header::ACCESS_CONTROL_REQUEST_HEADERS),
            access_control_request_private_network: self
                .header(header::ACCESS_CONTROL_REQUEST_PRIVATE_NETWORK)
                .is_some_and(|value| value.trim().eq_ignore_ascii_case("true")),
        }
    }
}

/// What the host does next with a dispatched request.
#[derive(Debug)]
pub enum RouterOutcome<R> {
    /// Continue through the pipeline; merge `headers` into the eventual response.
    Forwarded { request: R, headers: Headers },
    /// Send this response as-is; no handler may run.
    Terminal(PreflightResponse),
}

#[derive(Clone, Debug)]
struct Route {
    pattern: ResourcePattern,
    cors: Cors,
}

/// Static table of resource patterns and their resolved policies. Built once
/// at startup; lookups take `&self` and need no synchronization.
#[derive(Clone, Debug, Default)]
pub struct CorsRouter {
    defaults: CorsDefaults,
    routes: Vec<Route>,
}

impl CorsRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults(defaults: CorsDefaults) -> Self {
        Self {
            defaults,
            routes: Vec::new(),
        }
    }

    pub fn defaults(&self) -> &CorsDefaults {
        &self.defaults
    }

    /// Registers `options` for `pattern`. Patterns are tried in
    /// registration order and the first match wins; re-registering an
    /// existing pattern is ignored after its options validate.
    pub fn register(
        &mut self,
        pattern: &str,
        options: ResourceOptions,
    ) -> Result<&mut Self, ConfigError> {
        let pattern = ResourcePattern::parse(pattern)?;
        let cors = Cors::with_defaults(options, &self.defaults)?;

        if self.routes.iter().any(|route| route.pattern == pattern) {
            warn!(pattern = %pattern, "CORS resource registered twice; keeping the first registration");
            return Ok(self);
        }
        debug!(pattern = %pattern, "registered CORS resource");

        self.routes.push(Route { pattern, cors });
        Ok(self)
    }

    /// Builder-style [`Self::register`].
    pub fn resource(mut self, pattern: &str, options: ResourceOptions) -> Result<Self, ConfigError> {
        self.register(pattern, options)?;
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Policy engine of the first pattern matching `path`.
    pub fn route(&self, path: &str) -> Option<&Cors> {
        self.routes
            .iter()
            .find(|route| route.pattern.matches(path))
            .map(|route| &route.cors)
    }

    /// Decision for a request on `path`; unmatched paths are not CORS-handled.
    pub fn decide(&self, path: &str, request: &RequestContext<'_>) -> CorsDecision {
        match self.route(path) {
            Some(cors) => cors.check(request),
            None => CorsDecision::NotApplicable,
        }
    }

    pub fn dispatch<R: CorsRequest>(&self, request: R) -> RouterOutcome<R> {
        let decision = self.decide(request.path(), &request.cors_context());
        debug!(path = request.path(), ?decision, "CORS dispatch");

        match decision {
            CorsDecision::Preflight(response) => RouterOutcome::Terminal(response),
            CorsDecision::Simple(headers) => RouterOutcome::Forwarded { request, headers },
            CorsDecision::PassThrough | CorsDecision::NotApplicable => RouterOutcome::Forwarded {
                request,
                headers: Headers::new(),
            },
        }
    }
}

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;
