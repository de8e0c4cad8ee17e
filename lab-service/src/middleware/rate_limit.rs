//! Governor-based per-client rate limiting
//!
//! Clients are keyed by IP address: the first `x-forwarded-for` entry when
//! the service runs behind a proxy, otherwise the peer socket address.
//! Each client may issue `max_requests` requests per window; the quota
//! replenishes continuously rather than resetting at window boundaries.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::Request,
    middleware::Next,
    response::Response,
};
use governor::{clock::DefaultClock, state::keyed::DefaultKeyedStateStore, Quota, RateLimiter};

use crate::{config::RateLimitConfig, error::Error};

type ClientLimiter = RateLimiter<IpAddr, DefaultKeyedStateStore<IpAddr>, DefaultClock>;

/// Shared per-client limiter, cheap to clone into middleware state
#[derive(Clone)]
pub struct ClientRateLimit {
    limiter: Arc<ClientLimiter>,
    config: RateLimitConfig,
}

impl std::fmt::Debug for ClientRateLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientRateLimit")
            .field("config", &self.config)
            .field("limiter", &"<RateLimiter>")
            .finish()
    }
}

impl ClientRateLimit {
    /// Build a limiter allowing `max_requests` per `window_secs` per client
    pub fn new(config: RateLimitConfig) -> Self {
        let burst = NonZeroU32::new(config.max_requests).unwrap_or(NonZeroU32::MIN);
        let replenish = (config.window() / burst.get()).max(Duration::from_millis(1));

        let quota = Quota::with_period(replenish)
            .map(|quota| quota.allow_burst(burst))
            .unwrap_or_else(|| Quota::per_second(burst));

        Self {
            limiter: Arc::new(RateLimiter::keyed(quota)),
            config,
        }
    }

    /// The configuration this limiter was built from
    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }

    /// Consume one request from the client's quota
    pub fn check(&self, client: IpAddr) -> Result<(), Error> {
        self.limiter.check_key(&client).map_err(|not_until| {
            let wait = not_until.wait_time_from(governor::clock::Clock::now(&DefaultClock::default()));
            // Round up so clients never retry a moment too early
            let retry_after_secs = wait.as_secs() + u64::from(wait.subsec_nanos() > 0);
            tracing::warn!(client = %client, retry_after_secs, "Client rate limited");
            Error::RateLimited { retry_after_secs }
        })
    }
}

/// Resolve the client address used as the rate limit key
pub fn client_ip<B>(request: &Request<B>) -> IpAddr {
    let forwarded = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .and_then(|first| first.trim().parse::<IpAddr>().ok());

    forwarded
        .or_else(|| {
            request
                .extensions()
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| addr.ip())
        })
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
}

/// Rate limiting middleware for axum
///
/// Mount with `axum::middleware::from_fn_with_state(limit, rate_limit_middleware)`.
pub async fn rate_limit_middleware(
    State(limit): State<ClientRateLimit>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, Error> {
    limit.check(client_ip(&request))?;
    Ok(next.run(request).await)
}
