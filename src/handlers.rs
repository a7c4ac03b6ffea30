use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, error, info_span, warn, Instrument};
use uuid::Uuid;

use crate::agent::prompts;
use crate::agent::{
    AgentRequest, AgentResponse, HobbySuggestRequest, Message, WeeklyPlanRequest,
};
use crate::state::AppState;

pub type EnvelopeResponse = (StatusCode, Json<AgentResponse>);

pub async fn agent(
    State(state): State<AppState>,
    payload: Result<Json<AgentRequest>, JsonRejection>,
) -> EnvelopeResponse {
    let Json(req) = match payload {
        Ok(req) => req,
        Err(rejection) => return reject(&state, rejection),
    };
    let messages = prompts::unified_messages(&req.messages);
    complete(&state, "response", messages).await
}

pub async fn hobby_suggest(
    State(state): State<AppState>,
    payload: Result<Json<HobbySuggestRequest>, JsonRejection>,
) -> EnvelopeResponse {
    let Json(req) = match payload {
        Ok(req) => req,
        Err(rejection) => return reject(&state, rejection),
    };
    let messages = prompts::task_messages(prompts::hobby_suggestion_prompt(&req));
    complete(&state, "suggestions", messages).await
}

pub async fn hobby_weekly_plan(
    State(state): State<AppState>,
    payload: Result<Json<WeeklyPlanRequest>, JsonRejection>,
) -> EnvelopeResponse {
    let Json(req) = match payload {
        Ok(req) => req,
        Err(rejection) => return reject(&state, rejection),
    };
    let messages = prompts::task_messages(prompts::weekly_plan_prompt(&req));
    complete(&state, "weekly_plan", messages).await
}

pub async fn health_check(State(state): State<AppState>) -> Json<AgentResponse> {
    Json(AgentResponse::success(state.agent_name(), "status", "ok"))
}

/// Run one completion and wrap the text under `key`. Failures still answer
/// 200; the envelope carries `status: "error"` and the prefixed message.
async fn complete(state: &AppState, key: &'static str, messages: Vec<Message>) -> EnvelopeResponse {
    let span = info_span!("completion", request_id = %Uuid::new_v4(), key);
    async move {
        let model = state.llm.default_model();
        debug!("Calling completion API: model={}, messages={}", model, messages.len());

        let envelope = match state.llm.chat_completion(model, &messages).await {
            Ok(text) => AgentResponse::success(state.agent_name(), key, text),
            Err(e) => {
                error!("Completion failed: {}", e);
                AgentResponse::error_with_echo(state.agent_name(), key, e.to_caller_message())
            }
        };
        (StatusCode::OK, Json(envelope))
    }
    .instrument(span)
    .await
}

fn reject(state: &AppState, rejection: JsonRejection) -> EnvelopeResponse {
    let status = rejection.status();
    let message = rejection.body_text();
    warn!("Rejected request body ({}): {}", status, message);
    (status, Json(AgentResponse::error(state.agent_name(), message)))
}
