use axum::{
    body::Body,
    extract::{FromRequestParts, Request},
    http::{request::Parts, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

/// HTTP header carrying the anonymous user token
pub const USER_TOKEN_HEADER: &str = "x-user-token";

/// Anonymous per-browser identity used to key favorites and preferences
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserToken(pub Uuid);

impl UserToken {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_str(&self) -> String {
        self.0.to_string()
    }
}

impl Default for UserToken {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UserToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[async_trait::async_trait]
impl<S> FromRequestParts<S> for UserToken
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<UserToken>()
            .cloned()
            .ok_or((StatusCode::INTERNAL_SERVER_ERROR, "user token middleware not installed"))
    }
}

/// Reads the `x-user-token` header, or issues a fresh token when it is
/// missing or not a UUID. The token is echoed back on the response.
pub async fn user_token_middleware(mut request: Request, next: Next) -> Response {
    let token = request
        .headers()
        .get(USER_TOKEN_HEADER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| Uuid::parse_str(s.trim()).ok())
        .map(UserToken)
        .unwrap_or_else(UserToken::new);

    request.extensions_mut().insert(token.clone());

    let mut response = next.run(request).await;

    if let Ok(header_value) = HeaderValue::from_str(&token.as_str()) {
        response.headers_mut().insert(USER_TOKEN_HEADER, header_value);
    }

    response
}

/// Tracing span for one HTTP request, tagged with the user token
pub fn make_span_with_user_token(request: &Request<Body>) -> tracing::Span {
    let token = request
        .extensions()
        .get::<UserToken>()
        .map(|t| t.as_str())
        .unwrap_or_else(|| "unknown".to_string());

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        user_token = %token,
    )
}
