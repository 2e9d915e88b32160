use castwright_config::CorsConfig;
use http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Build a Tower CORS layer from configuration
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let mut layer = CorsLayer::new()
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request());

    layer = if config.allows_any_origin() && !config.credentials {
        layer.allow_origin(AllowOrigin::any())
    } else if config.allows_any_origin() {
        // Credentials cannot be combined with a literal `*`
        layer.allow_origin(AllowOrigin::mirror_request())
    } else {
        let origins: Vec<HeaderValue> = config.origins.iter().filter_map(|o| o.parse().ok()).collect();
        layer.allow_origin(origins)
    };

    if config.credentials {
        layer = layer.allow_credentials(true);
    }

    if let Some(duration) = config.max_age_duration() {
        layer = layer.max_age(duration);
    }

    layer
}
