use crate::constants::header;
use crate::context::RequestContext;
use crate::headers::HeaderCollection;
use crate::policy::ResourcePolicy;

pub(crate) struct HeaderBuilder<'a> {
    policy: &'a ResourcePolicy,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(policy: &'a ResourcePolicy) -> Self {
        Self { policy }
    }

    /// Returns `None` when the request origin is not allowed.
    ///
    /// A wildcard policy answers `*` only without credentials; with
    /// credentials the request origin is echoed and caches vary on it.
    pub(crate) fn build_origin_headers(
        &self,
        request: &RequestContext<'_>,
    ) -> Option<HeaderCollection> {
        if !self.policy.origin_policy.matches(request.origin) {
            return None;
        }
        let origin = request.origin?;

        let mut headers = HeaderCollection::with_estimate(2);
        if self.policy.origin_policy.is_any() && !self.policy.allow_credentials {
            headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");
        } else {
            headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
            headers.add_vary(header::ORIGIN);
        }
        Some(headers)
    }

    pub(crate) fn build_credentials_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        if self.policy.allow_credentials {
            headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
        }
        headers
    }

    pub(crate) fn build_methods_header(&self, requested_method: &str) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        if let Some(value) = self.policy.allowed_methods.header_value(requested_method) {
            headers.push(header::ACCESS_CONTROL_ALLOW_METHODS, value);
        }
        headers
    }

    pub(crate) fn build_allowed_headers(&self, requested_headers: Option<&str>) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        if let Some(value) = self.policy.allowed_headers.header_value(requested_headers) {
            headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, value);
        }
        headers
    }

    pub(crate) fn build_exposed_headers(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        if let Some(value) = self.policy.exposed_headers.header_value() {
            headers.push(header::ACCESS_CONTROL_EXPOSE_HEADERS, value);
        }
        headers
    }

    pub(crate) fn build_max_age_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        if let Some(seconds) = self.policy.max_age {
            headers.push(header::ACCESS_CONTROL_MAX_AGE, seconds.to_string());
        }
        headers
    }

    pub(crate) fn build_private_network_header(
        &self,
        request: &RequestContext<'_>,
    ) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        if self.policy.allow_private_network && request.access_control_request_private_network {
            headers.push(header::ACCESS_CONTROL_ALLOW_PRIVATE_NETWORK, "true");
        }
        headers
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
