use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use serde_json::{Value, json};

use crate::core::envelope::Envelope;
use crate::core::error::AppError;
use crate::features::mcp::dto::{JsonRpcError, JsonRpcErrorResponse, JsonRpcRequest};
use crate::features::mcp::service::PROTOCOL_VERSION;
use crate::server::AppState;

pub async fn handle_mcp(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    match serde_json::from_slice::<JsonRpcRequest>(&body) {
        Ok(request) => {
            let header_protocol_version = headers
                .get("MCP-Protocol-Version")
                .and_then(|value| value.to_str().ok())
                .map(|value| value.to_string());

            match state
                .mcp
                .handle_jsonrpc(request, header_protocol_version)
                .await
            {
                Ok(Some(success)) => Json(json!(success)).into_response(),
                Ok(None) => StatusCode::NO_CONTENT.into_response(),
                Err(error) => Json(json!(error)).into_response(),
            }
        }
        Err(err) => {
            let error = JsonRpcErrorResponse {
                jsonrpc: "2.0".to_string(),
                id: Value::Null,
                error: JsonRpcError {
                    code: -32700,
                    message: format!("failed to parse request: {err}"),
                    data: None,
                },
            };
            Json(json!(error)).into_response()
        }
    }
}

pub async fn handle_discovery(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "name": state.config.api_title,
        "version": state.config.api_version,
        "description": state.config.api_description,
        "protocolVersion": PROTOCOL_VERSION,
        "endpoint": "/api/mcp",
        "authentication": {
            "type": "header",
            "header": state.config.auth.header,
        },
        "tools": state.mcp.definitions(),
    }))
}

pub async fn handle_root(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "name": state.config.api_title,
        "version": state.config.api_version,
        "description": state.config.api_description,
        "demoMode": state.config.demo_mode,
    }))
}

pub async fn handle_healthcheck() -> Result<Json<Value>, AppError> {
    Ok(Json(json!({ "status": "ok" })))
}

pub async fn handle_not_found() -> Envelope {
    AppError::not_found("Route not found").into()
}

pub async fn handle_method_not_allowed() -> Envelope {
    AppError::method_not_allowed("Method not allowed").into()
}
