use std::time::Duration;

use crate::config::settings::ApiConfig;

/// User-Agent sent with every status request
pub fn user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), crate::pkg_version())
}

/// Build the HTTP client used to talk to the status API.
///
/// The client is created once at startup and owned by the fetcher, so the
/// connection pool survives across poll cycles.
///
/// # Features
/// - **Timeouts**: request and connect timeouts come from `[api]`; a poll can
///   never hang past `request_timeout`
/// - **Compression**: gzip, deflate, brotli and zstd responses are accepted
/// - **Security**: Rustls for TLS (no OpenSSL dependency)
pub fn build_http_client(config: &ApiConfig) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        // Timeouts
        .timeout(Duration::from_secs(config.request_timeout))
        .connect_timeout(Duration::from_secs(config.connect_timeout))
        // One endpoint, polled every few seconds
        .pool_max_idle_per_host(1)
        .pool_idle_timeout(Duration::from_secs(90))
        // Enable compression (gzip, deflate, brotli, zstd)
        .gzip(true)
        .deflate(true)
        .brotli(true)
        .zstd(true)
        .user_agent(user_agent())
        .build()
}
