use cors_router::constants::{header, method};
use cors_router::{
    Cors, CorsDecision, CorsRequest, CorsRouter, RequestContext, ResourceOptions, RouterOutcome,
};

/// Owned request used to drive [`CorsRouter::dispatch`].
#[derive(Debug, Clone, Default)]
pub struct TestRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
}

impl CorsRequest for TestRequest {
    fn method(&self) -> &str {
        &self.method
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    fn path(&self) -> &str {
        &self.path
    }
}

pub struct SimpleRequestBuilder {
    method: String,
    path: String,
    origin: Option<String>,
}

impl SimpleRequestBuilder {
    pub fn new() -> Self {
        Self {
            method: method::GET.into(),
            path: "/".into(),
            origin: None,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn check(self, cors: &Cors) -> CorsDecision {
        let ctx = RequestContext {
            method: &self.method,
            origin: self.origin.as_deref(),
            ..RequestContext::default()
        };
        cors.check(&ctx)
    }

    pub fn build(self) -> TestRequest {
        let mut headers = Vec::new();
        if let Some(origin) = self.origin {
            headers.push((header::ORIGIN.to_string(), origin));
        }
        TestRequest {
            method: self.method,
            path: self.path,
            headers,
        }
    }

    pub fn dispatch(self, router: &CorsRouter) -> RouterOutcome<TestRequest> {
        router.dispatch(self.build())
    }
}

#[derive(Default)]
pub struct PreflightRequestBuilder {
    path: Option<String>,
    origin: Option<String>,
    request_method: Option<String>,
    request_headers: Option<String>,
    private_network: bool,
}

impl PreflightRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn request_method(mut self, method: impl Into<String>) -> Self {
        self.request_method = Some(method.into());
        self
    }

    pub fn request_headers(mut self, headers: impl Into<String>) -> Self {
        self.request_headers = Some(headers.into());
        self
    }

    pub fn private_network(mut self, enabled: bool) -> Self {
        self.private_network = enabled;
        self
    }

    pub fn check(self, cors: &Cors) -> CorsDecision {
        let ctx = RequestContext {
            method: method::OPTIONS,
            origin: self.origin.as_deref(),
            access_control_request_method: self.request_method.as_deref(),
            access_control_request_headers: self.request_headers.as_deref(),
            access_control_request_private_network: self.private_network,
        };
        cors.check(&ctx)
    }

    pub fn build(self) -> TestRequest {
        let mut headers = Vec::new();
        let entries = [
            (header::ORIGIN, self.origin),
            (header::ACCESS_CONTROL_REQUEST_METHOD, self.request_method),
            (header::ACCESS_CONTROL_REQUEST_HEADERS, self.request_headers),
        ];
        for (name, value) in entries {
            if let Some(value) = value {
                headers.push((name.to_string(), value));
            }
        }
        if self.private_network {
            headers.push((
                header::ACCESS_CONTROL_REQUEST_PRIVATE_NETWORK.to_string(),
                "true".to_string(),
            ));
        }
        TestRequest {
            method: method::OPTIONS.to_string(),
            path: self.path.unwrap_or_else(|| "/".to_string()),
            headers,
        }
    }

    pub fn dispatch(self, router: &CorsRouter) -> RouterOutcome<TestRequest> {
        router.dispatch(self.build())
    }
}

pub fn cors(options: ResourceOptions) -> Cors {
    Cors::new(options).expect("valid CORS configuration")
}

pub fn simple_request() -> SimpleRequestBuilder {
    SimpleRequestBuilder::new()
}

pub fn preflight_request() -> PreflightRequestBuilder {
    PreflightRequestBuilder::new()
}
