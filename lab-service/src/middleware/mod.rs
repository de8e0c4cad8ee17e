//! Shared middleware: request tracking and per-client rate limiting

pub mod rate_limit;
pub mod request_tracking;

pub use rate_limit::{client_ip, rate_limit_middleware, ClientRateLimit};
pub use request_tracking::{
    request_id_layer, request_id_propagation_layer, sensitive_headers_layer, SENSITIVE_HEADERS,
};
