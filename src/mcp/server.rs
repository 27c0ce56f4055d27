//! MCP server setup and lifecycle.
//!
//! Implements a JSON-RPC 2.0 server over newline-delimited stdio. Every
//! request is answered on one line of stdout; notifications get no reply.

use super::dispatch::McpMethod;
use crate::config::ServerSettings;
use crate::mcp::{ResourceHandler, ToolRegistry};
use crate::templates::Catalog;
use crate::{Error, Result};
use serde::Serialize;
use serde_json::Value;
use std::io::{BufRead, Read, Write};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info_span;

/// MCP protocol version.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Server name reported in `initialize`.
pub const SERVER_NAME: &str = "context-engineering-mcp";

/// JSON-RPC error codes.
pub mod error_codes {
    /// Server-defined: rate limit exceeded.
    pub const RATE_LIMITED: i32 = -32000;
    /// Invalid JSON.
    pub const PARSE_ERROR: i32 = -32700;
    /// Request object is not acceptable (e.g. too large).
    pub const INVALID_REQUEST: i32 = -32600;
    /// Method does not exist.
    pub const METHOD_NOT_FOUND: i32 = -32601;
    /// Missing or malformed params.
    pub const INVALID_PARAMS: i32 = -32602;
    /// Internal error.
    pub const INTERNAL_ERROR: i32 = -32603;
}

/// Fixed-window request limiter.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    max_requests: usize,
    window: Duration,
    count: usize,
    window_start: Instant,
}

impl RateLimiter {
    /// Creates a limiter allowing `max_requests` per `window`.
    #[must_use]
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            count: 0,
            window_start: Instant::now(),
        }
    }

    /// Records a request at `now`; returns false if it exceeds the limit.
    pub fn check(&mut self, now: Instant) -> bool {
        if now.duration_since(self.window_start) > self.window {
            self.count = 0;
            self.window_start = now;
        }
        if self.count >= self.max_requests {
            return false;
        }
        self.count += 1;
        true
    }

    /// Maximum requests per window.
    #[must_use]
    pub const fn max_requests(&self) -> usize {
        self.max_requests
    }

    /// Window length.
    #[must_use]
    pub const fn window(&self) -> Duration {
        self.window
    }
}

/// MCP server over the template catalog.
pub struct McpServer {
    /// Tool registry.
    tools: ToolRegistry,
    /// Resource handler.
    resources: ResourceHandler,
    /// Request rate limiter.
    rate_limiter: RateLimiter,
    /// Maximum bytes in one request line.
    max_request_bytes: usize,
}

impl McpServer {
    /// Creates a new MCP server.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, settings: &ServerSettings) -> Self {
        Self {
            tools: ToolRegistry::new(Arc::clone(&catalog)),
            resources: ResourceHandler::new(catalog),
            rate_limiter: RateLimiter::new(
                settings.rate_limit_max_requests,
                Duration::from_secs(settings.rate_limit_window_secs),
            ),
            max_request_bytes: settings.max_request_bytes,
        }
    }

    /// Serves requests from stdin until EOF.
    ///
    /// # Errors
    ///
    /// Returns an error if stdin cannot be read or stdout cannot be written.
    pub fn start(&mut self) -> Result<()> {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        tracing::info!(
            server = SERVER_NAME,
            version = env!("CARGO_PKG_VERSION"),
            "MCP server listening on stdio"
        );
        self.serve(stdin.lock(), stdout.lock())
    }

    /// Serves newline-delimited requests from `reader`, writing responses to
    /// `writer`.
    ///
    /// A line longer than the request limit is skipped without being
    /// buffered, and a line that is not UTF-8 gets a parse error; both are
    /// answered and serving continues with the next line.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails.
    pub fn serve<R: BufRead, W: Write>(&mut self, mut reader: R, mut writer: W) -> Result<()> {
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let line = read_bounded_line(&mut reader, self.max_request_bytes, &mut buf)
                .map_err(|e| Error::OperationFailed {
                    operation: "read_stdin".to_string(),
                    cause: e.to_string(),
                })?;

            let response = match line {
                Line::Eof => break,
                Line::Complete if buf.trim_ascii().is_empty() => continue,
                _ if !self.rate_limiter.check(Instant::now()) => Some(self.rate_limited()),
                Line::TooLong(size) => Some(self.too_large(size)),
                Line::Complete => match std::str::from_utf8(&buf) {
                    Ok(request) => self.handle_request(request),
                    Err(e) => {
                        tracing::warn!(error = %e, "Request is not valid UTF-8");
                        metrics::counter!(
                            "mcp_requests_total",
                            "method" => "parse_error",
                            "status" => "error"
                        )
                        .increment(1);
                        Some(format_error(
                            None,
                            error_codes::PARSE_ERROR,
                            &format!("Parse error: {e}"),
                        ))
                    },
                },
            };

            if let Some(response) = response {
                write_line(&mut writer, &response)?;
            }
        }

        tracing::info!("stdin closed, shutting down");
        Ok(())
    }

    fn too_large(&self, size: usize) -> String {
        tracing::warn!(
            request_size = size,
            max_size = self.max_request_bytes,
            "Request exceeds maximum size limit"
        );
        format_error(
            None,
            error_codes::INVALID_REQUEST,
            &format!(
                "Request too large: {size} bytes (max: {} bytes)",
                self.max_request_bytes
            ),
        )
    }

    fn rate_limited(&self) -> String {
        let max_requests = self.rate_limiter.max_requests();
        let window = self.rate_limiter.window();
        tracing::warn!(max_requests, ?window, "Rate limit exceeded");
        metrics::counter!("mcp_rate_limit_exceeded_total").increment(1);

        format_error(
            None,
            error_codes::RATE_LIMITED,
            &format!("Rate limit exceeded: max {max_requests} requests per {window:?}"),
        )
    }

    /// Handles one JSON-RPC message. Returns `None` for notifications.
    pub fn handle_request(&self, request: &str) -> Option<String> {
        if request.len() > self.max_request_bytes {
            return Some(self.too_large(request.len()));
        }

        let start = Instant::now();
        let span = info_span!(
            "mcp.request",
            rpc.method = tracing::field::Empty,
            rpc.id = tracing::field::Empty,
            status = tracing::field::Empty
        );
        let _guard = span.enter();

        let mut method_label = "parse_error".to_string();
        let mut status_label = "error";

        let response = match serde_json::from_str::<Value>(request) {
            Err(e) => {
                span.record("status", "parse_error");
                Some(format_error(
                    None,
                    error_codes::PARSE_ERROR,
                    &format!("Parse error: {e}"),
                ))
            },
            Ok(value) => match JsonRpcRequest::from_value(value) {
                Err((id, message)) => {
                    method_label = "invalid_request".to_string();
                    span.record("status", "invalid_request");
                    Some(format_error(id, error_codes::INVALID_REQUEST, &message))
                },
                Ok(req) => {
                    method_label.clone_from(&req.method);
                    span.record("rpc.method", method_label.as_str());
                    if let Some(id) = &req.id {
                        span.record("rpc.id", id.to_string().as_str());
                    }
                    tracing::debug!(method = %method_label, "Processing MCP request");

                    let result = self.dispatch_method(&req.method, req.params);
                    status_label = if result.is_ok() { "success" } else { "error" };
                    span.record("status", status_label);

                    // Notifications carry no id member and expect no reply.
                    req.id.map(|id| format_response(Some(id), result))
                },
            },
        };

        metrics::counter!(
            "mcp_requests_total",
            "method" => method_label.clone(),
            "status" => status_label
        )
        .increment(1);
        metrics::histogram!("mcp_request_duration_ms", "method" => method_label)
            .record(start.elapsed().as_secs_f64() * 1000.0);

        response
    }

    fn dispatch_method(&self, method: &str, params: Option<Value>) -> DispatchResult {
        match McpMethod::from(method) {
            McpMethod::Initialize => Ok(Self::handle_initialize()),
            McpMethod::Initialized | McpMethod::Ping => Ok(serde_json::json!({})),
            McpMethod::ListTools => Ok(self.handle_list_tools()),
            McpMethod::CallTool => self.handle_call_tool(params),
            McpMethod::ListResources => Ok(self.handle_list_resources()),
            McpMethod::ReadResource => self.handle_read_resource(params),
            McpMethod::Unknown(name) => Err((
                error_codes::METHOD_NOT_FOUND,
                format!("Method not found: {name}"),
            )),
        }
    }

    fn handle_initialize() -> Value {
        serde_json::json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {
                "tools": {},
                "resources": {}
            },
            "serverInfo": {
                "name": SERVER_NAME,
                "version": env!("CARGO_PKG_VERSION")
            }
        })
    }

    fn handle_list_tools(&self) -> Value {
        let tools: Vec<Value> = self
            .tools
            .list_tools()
            .iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect();

        serde_json::json!({ "tools": tools })
    }

    fn handle_call_tool(&self, params: Option<Value>) -> DispatchResult {
        let params = params.ok_or_else(missing_params)?;

        let name = params
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| (error_codes::INVALID_PARAMS, "Missing tool name".to_string()))?;
        let span = info_span!("mcp.tool.call", tool.name = name);
        let _guard = span.enter();
        let start = Instant::now();

        let arguments = params
            .get("arguments")
            .cloned()
            .unwrap_or_else(|| serde_json::json!({}));

        let (result, status_label) = match self.tools.execute(name, arguments) {
            Ok(result) => {
                let status_label = if result.is_error { "error" } else { "success" };
                (
                    serde_json::json!({
                        "content": result.content,
                        "isError": result.is_error
                    }),
                    status_label,
                )
            },
            Err(e) => {
                tracing::debug!(error = %e, "Tool call failed");
                (
                    serde_json::json!({
                        "content": [{ "type": "text", "text": e.to_string() }],
                        "isError": true
                    }),
                    "error",
                )
            },
        };

        metrics::counter!(
            "mcp_tool_calls_total",
            "tool" => name.to_string(),
            "status" => status_label
        )
        .increment(1);
        metrics::histogram!("mcp_tool_duration_ms", "tool" => name.to_string())
            .record(start.elapsed().as_secs_f64() * 1000.0);

        Ok(result)
    }

    fn handle_list_resources(&self) -> Value {
        let resources: Vec<Value> = self
            .resources
            .list_resources()
            .iter()
            .map(|r| {
                serde_json::json!({
                    "uri": r.uri,
                    "name": r.name,
                    "description": r.description,
                    "mimeType": r.mime_type
                })
            })
            .collect();

        serde_json::json!({ "resources": resources })
    }

    fn handle_read_resource(&self, params: Option<Value>) -> DispatchResult {
        let params = params.ok_or_else(missing_params)?;

        let uri = params
            .get("uri")
            .and_then(Value::as_str)
            .ok_or_else(|| (error_codes::INVALID_PARAMS, "Missing resource URI".to_string()))?;
        let span = info_span!("mcp.resource.read", resource.uri = uri);
        let _guard = span.enter();

        let result = self
            .resources
            .get_resource(uri)
            .map(|content| {
                serde_json::json!({
                    "contents": [{
                        "uri": content.uri,
                        "mimeType": content.mime_type,
                        "text": content.text
                    }]
                })
            })
            .map_err(|e| match e {
                Error::InvalidInput(_) => (error_codes::INVALID_PARAMS, e.to_string()),
                _ => (error_codes::INTERNAL_ERROR, e.to_string()),
            });

        let status_label = if result.is_ok() { "success" } else { "error" };
        metrics::counter!("mcp_resource_reads_total", "status" => status_label).increment(1);

        result
    }
}

fn missing_params() -> (i32, String) {
    (error_codes::INVALID_PARAMS, "Missing params".to_string())
}

/// Formats a dispatch result as a JSON-RPC response.
fn format_response(id: Option<Value>, result: DispatchResult) -> String {
    match result {
        Ok(value) => {
            let response = JsonRpcResponse {
                jsonrpc: "2.0",
                id,
                result: Some(value),
                error: None,
            };
            serde_json::to_string(&response).unwrap_or_else(|_| "{}".to_string())
        },
        Err((code, message)) => format_error(id, code, &message),
    }
}

/// Formats a JSON-RPC error response.
fn format_error(id: Option<Value>, code: i32, message: &str) -> String {
    let response = JsonRpcResponse {
        jsonrpc: "2.0",
        id,
        result: None,
        error: Some(JsonRpcError {
            code,
            message: message.to_string(),
        }),
    };
    serde_json::to_string(&response).unwrap_or_else(|_| "{}".to_string())
}

/// Result type for method dispatch.
type DispatchResult = std::result::Result<Value, (i32, String)>;

/// JSON-RPC request.
#[derive(Debug)]
struct JsonRpcRequest {
    /// `None` when the `id` member is absent; `Some(Value::Null)` for `"id": null`.
    id: Option<Value>,
    method: String,
    params: Option<Value>,
}

impl JsonRpcRequest {
    /// Validates the request shape.
    ///
    /// On failure returns the id to echo (if one could be read) and a message
    /// for an Invalid Request error.
    fn from_value(value: Value) -> std::result::Result<Self, (Option<Value>, String)> {
        let Value::Object(mut object) = value else {
            return Err((None, "Invalid request: expected a JSON object".to_string()));
        };

        let id = match object.remove("id") {
            None => None,
            Some(id @ (Value::Null | Value::String(_) | Value::Number(_))) => Some(id),
            Some(_) => {
                return Err((
                    None,
                    "Invalid request: id must be a string, number or null".to_string(),
                ));
            },
        };

        if object.get("jsonrpc").and_then(Value::as_str) != Some("2.0") {
            return Err((id, "Invalid request: jsonrpc must be \"2.0\"".to_string()));
        }

        let method = match object.remove("method") {
            Some(Value::String(method)) => method,
            _ => {
                return Err((id, "Invalid request: method must be a string".to_string()));
            },
        };

        Ok(Self {
            id,
            method,
            params: object.remove("params"),
        })
    }
}

/// Result of one bounded line read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line {
    /// The stream is exhausted.
    Eof,
    /// A line (without its terminator) is in the buffer.
    Complete,
    /// The line exceeded the limit and was discarded; carries its length.
    TooLong(usize),
}

/// Reads one `\n`-terminated line into `buf`, holding at most `limit` bytes
/// of it in memory.
///
/// The terminator (and a preceding `\r`) is stripped. Longer lines are
/// consumed up to their terminator without buffering and reported as
/// [`Line::TooLong`].
fn read_bounded_line<R: BufRead>(
    reader: &mut R,
    limit: usize,
    buf: &mut Vec<u8>,
) -> std::io::Result<Line> {
    let cap = u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(2);
    let read = reader.by_ref().take(cap).read_until(b'\n', buf)?;
    if read == 0 {
        return Ok(Line::Eof);
    }

    let terminated = buf.last() == Some(&b'\n');
    if terminated {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }

    if buf.len() <= limit {
        return Ok(Line::Complete);
    }

    let mut size = buf.len();
    buf.clear();
    if !terminated {
        size += skip_line(reader)?;
    }
    Ok(Line::TooLong(size))
}

/// Consumes bytes up to and including the next `\n`; returns the number of
/// bytes before it.
fn skip_line<R: BufRead>(reader: &mut R) -> std::io::Result<usize> {
    let mut skipped = 0;
    loop {
        let available = match reader.fill_buf() {
            Ok(available) => available,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if available.is_empty() {
            return Ok(skipped);
        }
        let newline = available.iter().position(|&b| b == b'\n');
        match newline {
            Some(pos) => {
                reader.consume(pos + 1);
                return Ok(skipped + pos);
            },
            None => {
                let len = available.len();
                reader.consume(len);
                skipped += len;
            },
        }
    }
}

fn write_line<W: Write>(writer: &mut W, response: &str) -> Result<()> {
    writeln!(writer, "{response}").map_err(|e| Error::OperationFailed {
        operation: "write_stdout".to_string(),
        cause: e.to_string(),
    })?;
    writer.flush().map_err(|e| Error::OperationFailed {
        operation: "flush_stdout".to_string(),
        cause: e.to_string(),
    })
}

/// JSON-RPC response.
#[derive(Debug, Serialize)]
struct JsonRpcResponse {
    jsonrpc: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonRpcError>,
}

/// JSON-RPC error.
#[derive(Debug, Serialize)]
struct JsonRpcError {
    code: i32,
    message: String,
}
