use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::core::envelope::Envelope;
use crate::core::error::AppError;
use crate::server::AppState;

pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, Envelope> {
    let auth = &state.config.auth;
    let provided = request
        .headers()
        .get(auth.header.as_str())
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty());

    let rejection = match provided {
        None => Some(AppError::unauthenticated(format!(
            "Missing API key. Please provide the '{}' header.",
            auth.header
        ))),
        Some(key) if !auth.allows(key) => Some(AppError::forbidden(
            "Invalid API key. Please provide a valid API key.",
        )),
        Some(_) => None,
    };

    if let Some(error) = rejection {
        tracing::warn!(path = %request.uri().path(), error = %error, "rejected api key");
        return Err(error.into());
    }
    Ok(next.run(request).await)
}
