use crate::headers::Headers;

/// Terminal answer to a preflight request: empty body, a 2xx status and
/// whatever grant headers the policy produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreflightResponse {
    pub status: u16,
    pub headers: Headers,
}

impl PreflightResponse {
    /// True when the preflight carries an `Access-Control-Allow-Origin` grant.
    pub fn is_granted(&self) -> bool {
        !self.headers.is_empty()
    }
}

/// Overall decision returned by the policy engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsDecision {
    /// No `Origin` header; nothing to add.
    NotApplicable,
    /// Cross-origin request whose origin was rejected; continue unannotated.
    PassThrough,
    /// Cross-origin request whose response must carry these headers.
    Simple(Headers),
    /// Preflight; the request ends here with this response.
    Preflight(PreflightResponse),
}
