use std::collections::HashMap;
use std::sync::Arc;

use jsonschema::JSONSchema;
use serde_json::{Value, json};

use crate::core::envelope::Envelope;
use crate::core::error::AppError;
use crate::features::Services;
use crate::features::area::{AreaLookup, AreaParams};
use crate::features::community::CommunityParams;
use crate::features::mcp::dto::{
    CallToolParams, InitializeParams, JsonRpcError, JsonRpcErrorResponse, JsonRpcRequest,
    JsonRpcSuccess, ToolCallResult, ToolContent, ToolDefinition, ToolListResult,
};
use crate::features::mcp::schemas::build_tool_schemas;
use crate::features::poi::{PoiCategoryParams, PoiParams};
use crate::features::property::{PropertyParams, find_endpoint};
use crate::features::school::SchoolParams;

const JSON_RPC_VERSION: &str = "2.0";
pub const PROTOCOL_VERSION: &str = "2025-06-18";

pub struct McpService {
    services: Arc<Services>,
    definitions: Vec<ToolDefinition>,
    validators: HashMap<String, JSONSchema>,
}

impl McpService {
    pub fn new(services: Arc<Services>) -> Result<Self, AppError> {
        let (definitions, input_schemas) = build_tool_schemas();

        let mut validators = HashMap::new();
        for (name, schema) in &input_schemas {
            let compiled = JSONSchema::compile(schema).map_err(|err| {
                AppError::internal(format!("invalid input schema for {name}: {err}"))
            })?;
            validators.insert(name.clone(), compiled);
        }

        Ok(Self {
            services,
            definitions,
            validators,
        })
    }

    pub fn definitions(&self) -> &[ToolDefinition] {
        &self.definitions
    }

    // `Ok(None)` means the request was a notification and gets no reply.
    pub async fn handle_jsonrpc(
        &self,
        request: JsonRpcRequest,
        header_protocol_version: Option<String>,
    ) -> Result<Option<JsonRpcSuccess>, JsonRpcErrorResponse> {
        let id = request.id.clone().unwrap_or(Value::Null);
        if request.jsonrpc != JSON_RPC_VERSION {
            return Err(self.invalid_request_response(
                id,
                -32600,
                format!("unsupported jsonrpc version: {}", request.jsonrpc),
            ));
        }

        if request.method.starts_with("notifications/") {
            tracing::debug!(method = %request.method, "notification received");
            return Ok(None);
        }

        let result = match request.method.as_str() {
            "initialize" => self.handle_initialize(&id, request.params, header_protocol_version)?,
            "ping" => json!({}),
            "tools/list" => self.handle_list_tools(&id)?,
            "tools/call" => self.handle_call_tool(&id, request.params).await?,
            other => {
                return Err(self.invalid_request_response(
                    id,
                    -32601,
                    format!("unknown method: {other}"),
                ));
            }
        };

        Ok(Some(JsonRpcSuccess {
            jsonrpc: JSON_RPC_VERSION.to_string(),
            id,
            result,
        }))
    }

    fn handle_initialize(
        &self,
        id: &Value,
        params: Option<Value>,
        header_protocol_version: Option<String>,
    ) -> Result<Value, JsonRpcErrorResponse> {
        let params = match params {
            Some(value) => serde_json::from_value::<InitializeParams>(value).map_err(|err| {
                self.invalid_request_response(
                    id.clone(),
                    -32602,
                    format!("invalid initialize params: {err}"),
                )
            })?,
            None => InitializeParams::default(),
        };

        if let Some(client) = &params.client_info {
            tracing::info!(client = %client.name, version = %client.version, "client initialized");
        }
        tracing::debug!(capabilities = ?params.capabilities, "initialize payload");

        let protocol_version = params
            .protocol_version
            .or(header_protocol_version)
            .unwrap_or_else(|| PROTOCOL_VERSION.to_string());

        Ok(json!({
            "protocolVersion": protocol_version,
            "serverInfo": {
                "name": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION"),
            },
            "capabilities": {
                "tools": {
                    "listChanged": false
                }
            }
        }))
    }

    fn handle_list_tools(&self, id: &Value) -> Result<Value, JsonRpcErrorResponse> {
        serde_json::to_value(ToolListResult {
            tools: self.definitions.clone(),
            next_cursor: None,
        })
        .map_err(|err| {
            self.internal_error_response(id.clone(), format!("failed to serialize tools: {err}"))
        })
    }

    async fn handle_call_tool(
        &self,
        id: &Value,
        params: Option<Value>,
    ) -> Result<Value, JsonRpcErrorResponse> {
        let params_value = params.ok_or_else(|| {
            self.invalid_request_response(
                id.clone(),
                -32602,
                "missing tools/call params".to_string(),
            )
        })?;

        let params = serde_json::from_value::<CallToolParams>(params_value).map_err(|err| {
            self.invalid_request_response(
                id.clone(),
                -32602,
                format!("invalid tools/call params: {err}"),
            )
        })?;

        let arguments = match params.arguments {
            Value::Null => json!({}),
            other => other,
        };
        self.validate_arguments(id, &params.name, &arguments)?;

        let envelope = self.run_tool(id, &params.name, arguments).await?;
        let text = serde_json::to_string(&envelope).map_err(|err| {
            self.internal_error_response(id.clone(), format!("failed to serialize envelope: {err}"))
        })?;
        let structured = serde_json::to_value(&envelope).map_err(|err| {
            self.internal_error_response(id.clone(), format!("failed to serialize envelope: {err}"))
        })?;

        serde_json::to_value(ToolCallResult {
            content: vec![ToolContent {
                kind: "text".to_string(),
                text,
            }],
            structured_content: Some(structured),
            is_error: Some(envelope.is_error()),
        })
        .map_err(|err| {
            self.internal_error_response(
                id.clone(),
                format!("failed to serialize tool result: {err}"),
            )
        })
    }

    fn validate_arguments(
        &self,
        id: &Value,
        name: &str,
        arguments: &Value,
    ) -> Result<(), JsonRpcErrorResponse> {
        let validator = self.validators.get(name).ok_or_else(|| {
            self.invalid_request_response(id.clone(), -32601, format!("unknown tool: {name}"))
        })?;

        if let Err(errors) = validator.validate(arguments) {
            let messages: Vec<String> = errors.map(|error| error.to_string()).collect();
            return Err(self.invalid_request_response(
                id.clone(),
                -32602,
                format!("invalid arguments for {name}: {}", messages.join("; ")),
            ));
        }
        Ok(())
    }

    async fn run_tool(
        &self,
        id: &Value,
        name: &str,
        arguments: Value,
    ) -> Result<Envelope, JsonRpcErrorResponse> {
        if let Some(endpoint) = find_endpoint(name) {
            let params = self.deserialize_arguments::<PropertyParams>(id, arguments)?;
            return Ok(self.services.property.lookup(endpoint, params).await);
        }

        if let Some(lookup) = AreaLookup::from_tool(name) {
            let params = self.deserialize_arguments::<AreaParams>(id, arguments)?;
            return Ok(self.services.area.lookup(lookup, params).await);
        }

        let envelope = match name {
            "poi_search" => {
                let params = self.deserialize_arguments::<PoiParams>(id, arguments)?;
                self.services.poi.search(params).await
            }
            "poi_category_lookup" => {
                let params = self.deserialize_arguments::<PoiCategoryParams>(id, arguments)?;
                self.services.poi.category_lookup(params).await
            }
            "neighborhood_community" => {
                let params = self.deserialize_arguments::<CommunityParams>(id, arguments)?;
                self.services.community.neighborhood(params).await
            }
            "school_profile" => {
                let params = self.deserialize_arguments::<SchoolParams>(id, arguments)?;
                self.services.school.profile(params).await
            }
            "school_district" => {
                let params = self.deserialize_arguments::<SchoolParams>(id, arguments)?;
                self.services.school.district(params).await
            }
            "school_search" => {
                let params = self.deserialize_arguments::<SchoolParams>(id, arguments)?;
                self.services.school.search(params).await
            }
            other => {
                return Err(self.invalid_request_response(
                    id.clone(),
                    -32601,
                    format!("unknown tool: {other}"),
                ));
            }
        };
        Ok(envelope)
    }

    fn deserialize_arguments<T>(&self, id: &Value, value: Value) -> Result<T, JsonRpcErrorResponse>
    where
        T: serde::de::DeserializeOwned,
    {
        serde_json::from_value::<T>(value).map_err(|err| {
            self.invalid_request_response(
                id.clone(),
                -32602,
                format!("invalid tool arguments: {err}"),
            )
        })
    }

    fn invalid_request_response(
        &self,
        id: Value,
        code: i32,
        message: String,
    ) -> JsonRpcErrorResponse {
        JsonRpcErrorResponse {
            jsonrpc: JSON_RPC_VERSION.to_string(),
            id,
            error: JsonRpcError {
                code,
                message,
                data: None,
            },
        }
    }

    fn internal_error_response(&self, id: Value, message: String) -> JsonRpcErrorResponse {
        JsonRpcErrorResponse {
            jsonrpc: JSON_RPC_VERSION.to_string(),
            id,
            error: JsonRpcError {
                code: -32000,
                message,
                data: None,
            },
        }
    }
}
