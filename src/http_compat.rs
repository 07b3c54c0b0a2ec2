//! Glue between the engine and the `http` crate's request/response types.

use crate::constants::header;
use crate::headers::Headers;
use crate::result::PreflightResponse;
use crate::router::CorsRequest;
use http::header::{HeaderMap, HeaderName, HeaderValue};
use http::{Request, Response, StatusCode};

impl<B> CorsRequest for Request<B> {
    fn method(&self) -> &str {
        Request::method(self).as_str()
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers().get(name).and_then(|value| value.to_str().ok())
    }

    fn path(&self) -> &str {
        self.uri().path()
    }
}

/// Copies `headers` into `map`. `Vary` entries are appended so values set by
/// the handler survive; other CORS headers replace existing ones. Entries
/// that are not valid header names or values are skipped.
pub fn apply_headers(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in headers.iter() {
        let (Ok(header_name), Ok(header_value)) = (
            HeaderName::try_from(name.as_str()),
            HeaderValue::from_str(value),
        ) else {
            continue;
        };

        if name.eq_ignore_ascii_case(header::VARY) {
            map.append(header_name, header_value);
        } else {
            map.insert(header_name, header_value);
        }
    }
}

impl PreflightResponse {
    /// Builds the terminal response with an empty (`Default`) body.
    pub fn into_http_response<B: Default>(self) -> Response<B> {
        let mut response = Response::new(B::default());
        *response.status_mut() = StatusCode::from_u16(self.status).unwrap_or(StatusCode::OK);
        apply_headers(response.headers_mut(), &self.headers);
        response
    }
}

#[cfg(test)]
#[path = "http_compat_test.rs"]
mod http_compat_test;
