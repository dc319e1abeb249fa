use super::types::{
    ChatEnvelope, ChatRequest, ChatResponse, ErrorResponse, FailureResponse, HealthResponse,
    IndexResponse, ReplyStatus,
};
use crate::{
    llm::{Completion, CompletionClient},
    prompt::{self, SystemPersona},
};
use axum::{
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::StatusCode,
    response::Json,
};
use serde_json::Value;
use std::{collections::BTreeMap, sync::Arc};
use tracing::{debug, error, info, warn};

pub const SERVICE_NAME: &str = "Saarthi - JECRC Chatbot";
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const EMPTY_COMPLETION_REPLY: &str =
    "I apologize, but I'm having trouble generating a response right now. Please try again.";
pub const FAILURE_REPLY: &str =
    "I apologize, but I encountered an error processing your request. Please try again.";

const NO_DATA_ERROR: &str = "No data provided";
const EMPTY_MESSAGE_ERROR: &str = "Empty message";

/// Validates a chat turn, wraps it in the persona prompt and asks the completion API once.
#[derive(Clone)]
pub struct ChatService {
    persona: SystemPersona,
    client: Arc<dyn CompletionClient>,
    source: String,
}

impl ChatService {
    /// `source` names the model reported back to callers.
    pub fn new(
        persona: SystemPersona,
        client: Arc<dyn CompletionClient>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            persona,
            client,
            source: source.into(),
        }
    }

    pub async fn handle(&self, body: &[u8]) -> (StatusCode, ChatEnvelope) {
        let request = match parse_request(body) {
            Ok(request) => request,
            Err(rejection) => {
                return (StatusCode::BAD_REQUEST, ChatEnvelope::Rejected(rejection));
            }
        };

        let message = request.message.trim();
        if message.is_empty() {
            debug!("Rejecting empty message from {}", request.user_id);
            return (
                StatusCode::BAD_REQUEST,
                ChatEnvelope::Rejected(ErrorResponse {
                    error: EMPTY_MESSAGE_ERROR.to_string(),
                }),
            );
        }

        info!(
            "Received message from {} (language: {}, {} bytes)",
            request.user_id,
            request.language,
            message.len()
        );

        let full_prompt =
            prompt::compose(&self.persona, message, &request.language, &request.user_id);

        match self.client.complete(&full_prompt).await {
            Ok(Completion::Generated(text)) if !text.trim().is_empty() => {
                info!("Generated response for {}", request.user_id);
                (StatusCode::OK, self.reply(text.trim(), request))
            }
            Ok(_) => {
                warn!("Completion for {} contained no text", request.user_id);
                (StatusCode::OK, self.reply(EMPTY_COMPLETION_REPLY, request))
            }
            Err(e) => {
                error!(
                    kind = e.kind(),
                    "Error generating response for {}: {}", request.user_id, e
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ChatEnvelope::Failed(FailureResponse {
                        response: FAILURE_REPLY.to_string(),
                        status: ReplyStatus::Error,
                        error: e.to_string(),
                    }),
                )
            }
        }
    }

    fn reply(&self, text: &str, request: ChatRequest) -> ChatEnvelope {
        ChatEnvelope::Reply(ChatResponse {
            response: text.to_string(),
            status: ReplyStatus::Success,
            language: request.language,
            user_id: request.user_id,
            source: self.source.clone(),
            rag_enabled: false,
            intent: None,
            confidence: None,
        })
    }
}

/// Anything that is not a non-empty JSON object counts as "no data".
fn parse_request(body: &[u8]) -> Result<ChatRequest, ErrorResponse> {
    let no_data = || ErrorResponse {
        error: NO_DATA_ERROR.to_string(),
    };

    let value: Value = serde_json::from_slice(body).map_err(|e| {
        debug!("Request body is not JSON: {}", e);
        no_data()
    })?;

    match &value {
        Value::Object(fields) if !fields.is_empty() => {}
        _ => return Err(no_data()),
    }

    serde_json::from_value(value).map_err(|e| ErrorResponse {
        error: format!("Invalid request: {}", e),
    })
}

#[derive(Clone)]
pub struct AppState {
    pub chat: ChatService,
    pub credential_configured: bool,
}

/// Body read failures (e.g. over the size limit) still answer with a JSON envelope.
pub async fn chat(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> (StatusCode, ChatEnvelope) {
    match body {
        Ok(body) => state.chat.handle(&body).await,
        Err(rejection) => {
            warn!("Could not read chat request body: {}", rejection.body_text());
            (
                rejection.status(),
                ChatEnvelope::Rejected(ErrorResponse {
                    error: rejection.body_text(),
                }),
            )
        }
    }
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let completion_api = if state.credential_configured {
        "connected"
    } else {
        "not configured"
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        version: SERVICE_VERSION.to_string(),
        completion_api: completion_api.to_string(),
    })
}

pub async fn index() -> Json<IndexResponse> {
    let endpoints = BTreeMap::from([
        ("/health".to_string(), "GET - Health check".to_string()),
        ("/chat".to_string(), "POST - Chat with Saarthi".to_string()),
    ]);

    Json(IndexResponse {
        message: format!("{} API", SERVICE_NAME),
        endpoints,
        version: SERVICE_VERSION.to_string(),
    })
}

pub async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".to_string(),
        }),
    )
}
