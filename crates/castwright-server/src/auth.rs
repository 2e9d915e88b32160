use std::sync::Arc;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use castwright_auth::AuthProvider;
use castwright_core::AuthenticatedUser;

/// Identity of the caller, `None` when anonymous
#[derive(Debug, Clone, Default)]
pub struct CurrentUser(pub Option<AuthenticatedUser>);

/// Resolve the caller through the active auth provider
///
/// Never rejects: a missing, invalid, or unverifiable token leaves the
/// request anonymous.
pub async fn auth_middleware(provider: Arc<dyn AuthProvider>, mut request: Request, next: Next) -> Response {
    let token = bearer_token(&request).map(str::to_owned);

    let user = match provider.authenticate(token.as_deref()).await {
        Ok(user) => user,
        Err(e) => {
            tracing::warn!(error = %e, mode = %provider.mode(), "authentication failed, treating caller as anonymous");
            None
        }
    };

    request.extensions_mut().insert(CurrentUser(user));
    next.run(request).await
}

fn bearer_token(request: &Request) -> Option<&str> {
    request
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use axum::body::Body;

    use super::*;

    fn request(header: Option<&str>) -> Request {
        let mut builder = Request::builder().uri("/");
        if let Some(value) = header {
            builder = builder.header(http::header::AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn extracts_bearer_token() {
        assert_eq!(bearer_token(&request(Some("Bearer abc.def"))), Some("abc.def"));
        assert_eq!(bearer_token(&request(Some("Basic dXNlcg=="))), None);
        assert_eq!(bearer_token(&request(Some("Bearer  "))), None);
        assert_eq!(bearer_token(&request(None)), None);
    }
}
