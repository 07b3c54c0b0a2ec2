//! CORS decision engine with path-based resource routing.
//!
//! Declare a policy per path pattern on a [`CorsRouter`], then hand each
//! request to [`CorsRouter::dispatch`]: preflights come back as a terminal
//! [`PreflightResponse`], everything else is forwarded with the headers to
//! merge into the eventual response.

mod allowed_headers;
mod allowed_methods;
mod classification;
mod config;
pub mod constants;
mod context;
mod cors;
mod error;
mod exposed_headers;
mod header_builder;
mod headers;
#[cfg(feature = "http")]
mod http_compat;
mod options;
mod origin;
mod pattern;
mod policy;
mod result;
mod router;
mod util;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use classification::{Classification, classify};
pub use config::{ResourceEntry, RouterConfig};
pub use context::RequestContext;
pub use cors::Cors;
pub use error::ConfigError;
pub use exposed_headers::ExposedHeaders;
pub use headers::Headers;
#[cfg(feature = "http")]
pub use http_compat::apply_headers;
pub use options::{CorsDefaults, ListOrWildcard, OriginsOption, ResourceOptions};
pub use origin::{
    OriginPolicy, OriginPredicate, OriginPredicateFn, PatternError, is_well_formed_origin,
};
pub use pattern::ResourcePattern;
pub use policy::ResourcePolicy;
pub use result::{CorsDecision, PreflightResponse};
pub use router::{CorsRequest, CorsRouter, RouterOutcome};
pub use util::{equals_ignore_case, normalize_lower};
