use super::headers::{header_value, vary_values};
use cors_router::{CorsDecision, Headers, PreflightResponse, RouterOutcome};

pub fn assert_simple(decision: CorsDecision) -> Headers {
    match decision {
        CorsDecision::Simple(headers) => headers,
        other => panic!("expected simple decision, got {:?}", other),
    }
}

pub fn assert_preflight(decision: CorsDecision) -> PreflightResponse {
    match decision {
        CorsDecision::Preflight(response) => response,
        other => panic!("expected preflight decision, got {:?}", other),
    }
}

pub fn assert_forwarded<R: std::fmt::Debug>(outcome: RouterOutcome<R>) -> (R, Headers) {
    match outcome {
        RouterOutcome::Forwarded { request, headers } => (request, headers),
        other => panic!("expected forwarded outcome, got {:?}", other),
    }
}

pub fn assert_terminal<R: std::fmt::Debug>(outcome: RouterOutcome<R>) -> PreflightResponse {
    match outcome {
        RouterOutcome::Terminal(response) => response,
        other => panic!("expected terminal outcome, got {:?}", other),
    }
}

pub fn assert_header_eq(headers: &Headers, name: &str, expected: &str) {
    assert_eq!(
        header_value(headers, name),
        Some(expected),
        "header {name} mismatch"
    );
}

pub fn assert_vary_eq<I, S>(headers: &Headers, expected: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let expected = expected.into_iter().map(Into::into).collect();
    assert_eq!(vary_values(headers), expected);
}
