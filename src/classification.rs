use crate::constants::method;
use crate::context::RequestContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    NotCors,
    SimpleCors,
    Preflight,
}

/// Labels a request. Preflight needs `OPTIONS`, an `Origin` and an
/// `Access-Control-Request-Method`; any other request carrying `Origin`
/// is a simple CORS request.
pub fn classify(ctx: &RequestContext<'_>) -> Classification {
    if ctx.origin.is_none() {
        return Classification::NotCors;
    }

    if ctx.method.eq_ignore_ascii_case(method::OPTIONS)
        && ctx.access_control_request_method.is_some()
    {
        Classification::Preflight
    } else {
        Classification::SimpleCors
    }
}

impl RequestContext<'_> {
    pub fn classify(&self) -> Classification {
        classify(self)
    }
}

#[cfg(test)]
#[path = "classification_test.rs"]
mod classification_test;
