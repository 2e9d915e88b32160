use std::time::Duration;

use reqwest::Client;

use crate::error::TtsError;

/// HTTP client for speech providers
///
/// Audio generation is slow compared to text completion, so speech calls get
/// their own client and timeout.
pub fn http_client(timeout: Duration) -> crate::error::Result<Client> {
    let mut headers = http::HeaderMap::new();
    headers.insert(http::header::CONNECTION, http::HeaderValue::from_static("keep-alive"));

    Client::builder()
        .timeout(timeout)
        .pool_idle_timeout(Some(Duration::from_secs(5)))
        .tcp_nodelay(true)
        .default_headers(headers)
        .build()
        .map_err(|e| TtsError::ConfigError(format!("failed to build HTTP client: {e}")))
}
