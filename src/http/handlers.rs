//! Request handlers for `/` and `/debate`.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use log::debug;
use serde::Deserialize;
use serde_json::{json, Value};

use super::error::AppError;
use super::state::AppState;
use crate::core::DebateResult;
use crate::features::debate::DebateConfig;

pub const HOME_MESSAGE: &str = "Expert Chatbots Backend Running";
pub const MISSING_FIELDS_MESSAGE: &str = "Missing topic or expert names";
pub const INVALID_TURNS_MESSAGE: &str = "Invalid turns value: must be an integer";

/// Body of `POST /debate`. Everything optional so missing fields become a 400, not a 422.
/// `turns` is kept as raw JSON so a wrong type gets its own message.
#[derive(Debug, Default, Deserialize)]
pub struct DebateRequest {
    pub topic: Option<String>,
    pub expert1: Option<String>,
    pub expert2: Option<String>,
    pub turns: Option<Value>,
}

impl DebateRequest {
    /// Validate and normalize into a debate config. Runs before any network call.
    pub fn into_config(self, default_turns: u32, max_turns: u32) -> Result<DebateConfig, AppError> {
        let required = |field: Option<String>| {
            field
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| AppError::Validation(MISSING_FIELDS_MESSAGE.to_string()))
        };

        let topic = required(self.topic)?;
        let expert1 = required(self.expert1)?;
        let expert2 = required(self.expert2)?;

        let turns = match self.turns {
            None | Some(Value::Null) => default_turns,
            Some(value) => {
                let n = value
                    .as_i64()
                    .ok_or_else(|| AppError::Validation(INVALID_TURNS_MESSAGE.to_string()))?;
                n.clamp(1, i64::from(max_turns)) as u32
            }
        };

        Ok(DebateConfig {
            topic,
            expert1,
            expert2,
            turns,
        })
    }
}

/// GET / - status message.
pub async fn home() -> Json<Value> {
    Json(json!({ "message": HOME_MESSAGE }))
}

/// POST /debate - run a debate and return the transcript.
pub async fn debate(
    State(state): State<AppState>,
    payload: Result<Json<DebateRequest>, JsonRejection>,
) -> Result<Json<DebateResult>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        debug!("Rejected debate body: {rejection}");
        AppError::Validation(MISSING_FIELDS_MESSAGE.to_string())
    })?;

    let config = request.into_config(state.default_turns, state.max_turns)?;
    let result = state.orchestrator.run_debate(config).await?;
    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(topic: Option<&str>, e1: Option<&str>, e2: Option<&str>) -> DebateRequest {
        DebateRequest {
            topic: topic.map(String::from),
            expert1: e1.map(String::from),
            expert2: e2.map(String::from),
            turns: None,
        }
    }

    #[test]
    fn test_missing_fields_rejected() {
        for req in [
            request(None, Some("A"), Some("B")),
            request(Some("T"), None, Some("B")),
            request(Some("T"), Some("A"), None),
            request(Some("  "), Some("A"), Some("B")),
        ] {
            assert!(matches!(
                req.into_config(3, 10),
                Err(AppError::Validation(msg)) if msg == MISSING_FIELDS_MESSAGE
            ));
        }
    }

    #[test]
    fn test_turns_default_and_clamp() {
        let config = request(Some("T"), Some("A"), Some("B"))
            .into_config(3, 10)
            .unwrap();
        assert_eq!(config.turns, 3);

        let mut req = request(Some("T"), Some("A"), Some("B"));
        req.turns = Some(json!(-4));
        assert_eq!(req.into_config(3, 10).unwrap().turns, 1);

        let mut req = request(Some("T"), Some("A"), Some("B"));
        req.turns = Some(json!(50));
        assert_eq!(req.into_config(3, 10).unwrap().turns, 10);
    }

    #[test]
    fn test_values_trimmed() {
        let config = request(Some(" AI Ethics "), Some("Ada "), Some(" Grace"))
            .into_config(3, 10)
            .unwrap();
        assert_eq!(config.topic, "AI Ethics");
        assert_eq!(config.expert1, "Ada");
        assert_eq!(config.expert2, "Grace");
    }

    #[test]
    fn test_non_integer_turns_rejected() {
        for turns in [json!("3"), json!(2.5), json!(true), json!([3])] {
            let mut req = request(Some("T"), Some("A"), Some("B"));
            req.turns = Some(turns);
            assert!(matches!(
                req.into_config(3, 10),
                Err(AppError::Validation(msg)) if msg == INVALID_TURNS_MESSAGE
            ));
        }
    }

    #[test]
    fn test_missing_fields_reported_before_turns() {
        let mut req = request(None, Some("A"), Some("B"));
        req.turns = Some(json!("3"));
        assert!(matches!(
            req.into_config(3, 10),
            Err(AppError::Validation(msg)) if msg == MISSING_FIELDS_MESSAGE
        ));
    }

    #[test]
    fn test_null_turns_uses_default() {
        let mut req = request(Some("T"), Some("A"), Some("B"));
        req.turns = Some(Value::Null);
        assert_eq!(req.into_config(4, 10).unwrap().turns, 4);
    }
}
