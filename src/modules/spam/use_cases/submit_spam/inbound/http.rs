use axum::{
    Form, Json,
    extract::{FromRequest, Query, Request, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use chrono::Utc;
use serde::{Deserialize, Deserializer, Serialize, de};
use std::convert::Infallible;

use crate::modules::spam::use_cases::submit_spam::command::SubmitSpam;
use crate::modules::spam::use_cases::submit_spam::handler::SubmitSpamError;
use crate::shell::http::ErrorResponse;
use crate::shell::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct SubmitSpamBody {
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub content: Option<String>,
}

/// Strings, numbers and booleans are all taken as text.
fn scalar_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(text)) => Ok(Some(text)),
        Some(serde_json::Value::Number(number)) => Ok(Some(number.to_string())),
        Some(serde_json::Value::Bool(flag)) => Ok(Some(flag.to_string())),
        Some(_) => Err(de::Error::custom("content must be a scalar")),
    }
}

/// `application/json` and any `application/*+json` subtype.
fn is_json_content_type(value: &str) -> bool {
    let essence = value.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
    essence.starts_with("application/")
        && (essence.ends_with("/json") || essence.ends_with("+json"))
}

/// `content` may arrive as a JSON body, a URL-encoded form or a query
/// parameter, in that order of preference. A body that fails to parse is
/// treated as one without content.
pub struct SubmitSpamPayload(pub SubmitSpamBody);

impl<S> FromRequest<S> for SubmitSpamPayload
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let query = Query::<SubmitSpamBody>::try_from_uri(req.uri())
            .map(|Query(query)| query)
            .ok();
        let is_json = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(is_json_content_type);

        let body = if is_json {
            Json::<SubmitSpamBody>::from_request(req, state)
                .await
                .map(|Json(body)| body)
                .ok()
        } else {
            Form::<SubmitSpamBody>::from_request(req, state)
                .await
                .map(|Form(body)| body)
                .ok()
        };

        match body {
            Some(body) if body.content.is_some() => Ok(Self(body)),
            _ => Ok(Self(query.unwrap_or_default())),
        }
    }
}

#[derive(Serialize)]
pub struct SubmitSpamResponse {
    pub id: String,
    pub content: String,
}

pub async fn handle(
    State(state): State<AppState>,
    SubmitSpamPayload(body): SubmitSpamPayload,
) -> impl IntoResponse {
    let command = SubmitSpam {
        content: body.content,
        received_at: Utc::now().timestamp_millis(),
    };

    match state.submit_spam_handler.handle(command).await {
        Ok(message) => (
            StatusCode::CREATED,
            [(header::LOCATION, format!("/spam/{}", message.id))],
            Json(SubmitSpamResponse {
                id: message.id.to_string(),
                content: message.content,
            }),
        )
            .into_response(),
        Err(err @ SubmitSpamError::MissingContent) => {
            (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(err))).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to store spam");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
