//! Normalization of provider replies into plain values.
//!
//! One function per response shape. Callers never inspect raw payloads.

use llmgate_core::ModelResponse;

use crate::error::{OpenAiError, OpenAiResult};
use crate::models::{ApiErrorEnvelope, ChatCompletionResponse, EmbeddingResponse, ResponsesResponse};

/// Text of the first choice.
pub fn chat_text(response: ChatCompletionResponse) -> OpenAiResult<String> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| OpenAiError::invalid_response("response contained no choices"))?;

    let content = choice
        .message
        .content
        .ok_or_else(|| OpenAiError::invalid_response("first choice has no message content"))?;

    Ok(content.trim().to_string())
}

/// First embedding vector, unmodified.
pub fn first_embedding(response: EmbeddingResponse) -> OpenAiResult<Vec<f64>> {
    response
        .data
        .into_iter()
        .next()
        .map(|data| data.embedding)
        .ok_or_else(|| OpenAiError::invalid_response("response contained no embeddings"))
}

/// Text and id of a Responses API reply.
///
/// Decode paths, in order:
/// 1. top-level `output_text`
/// 2. `output[0].content[0].text`
pub fn response_output(response: ResponsesResponse) -> OpenAiResult<ModelResponse> {
    let text = convenience_text(&response)
        .or_else(|| nested_text(&response))
        .ok_or(OpenAiError::NoTextOutput)?;

    Ok(ModelResponse {
        text: text.trim().to_string(),
        response_id: response.id.unwrap_or_default(),
    })
}

fn convenience_text(response: &ResponsesResponse) -> Option<String> {
    response
        .output_text
        .as_deref()
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

fn nested_text(response: &ResponsesResponse) -> Option<String> {
    response
        .output
        .as_ref()?
        .first()?
        .content
        .as_ref()?
        .first()?
        .text
        .as_deref()
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

/// Extract the provider's error message from a non-2xx body.
///
/// Falls back to the raw body when it isn't the usual `{"error": {...}}` shape.
pub fn api_error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorEnvelope>(body).map_or_else(
        |_| body.trim().to_string(),
        |envelope| envelope.error.message,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn responses(value: serde_json::Value) -> ResponsesResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_chat_text_takes_first_choice() {
        let response: ChatCompletionResponse = serde_json::from_value(json!({
            "id": "chatcmpl-1",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": " Hello there! "}},
                {"index": 1, "message": {"role": "assistant", "content": "ignored"}}
            ]
        }))
        .unwrap();
        assert_eq!(chat_text(response).unwrap(), "Hello there!");
    }

    #[test]
    fn test_chat_text_without_choices() {
        let response: ChatCompletionResponse = serde_json::from_value(json!({"choices": []})).unwrap();
        assert!(matches!(
            chat_text(response),
            Err(OpenAiError::InvalidResponse { .. })
        ));
    }

    #[test]
    fn test_chat_text_null_content() {
        let response: ChatCompletionResponse = serde_json::from_value(json!({
            "choices": [{"message": {"role": "assistant", "content": null}}]
        }))
        .unwrap();
        assert!(chat_text(response).is_err());
    }

    #[test]
    fn test_first_embedding_is_unmodified() {
        let response: EmbeddingResponse = serde_json::from_value(json!({
            "object": "list",
            "data": [{"object": "embedding", "index": 0, "embedding": [0.01, -0.02, 0.03]}],
            "model": "text-embedding-3-small"
        }))
        .unwrap();
        assert_eq!(first_embedding(response).unwrap(), vec![0.01, -0.02, 0.03]);
    }

    #[test]
    fn test_first_embedding_empty_data() {
        let response: EmbeddingResponse = serde_json::from_value(json!({"data": []})).unwrap();
        assert!(first_embedding(response).is_err());
    }

    #[test]
    fn test_response_output_prefers_convenience_field() {
        let output = response_output(responses(json!({
            "id": "resp_123",
            "output_text": "Top level",
            "output": [{"content": [{"type": "output_text", "text": "Nested"}]}]
        })))
        .unwrap();
        assert_eq!(output.text, "Top level");
        assert_eq!(output.response_id, "resp_123");
    }

    #[test]
    fn test_response_output_nested_path_only() {
        let output = response_output(responses(json!({
            "id": "resp_456",
            "object": "response",
            "output": [{
                "type": "message",
                "role": "assistant",
                "content": [{"type": "output_text", "text": "Here is the generated reply.\n"}]
            }]
        })))
        .unwrap();
        assert_eq!(output.text, "Here is the generated reply.");
        assert_eq!(output.response_id, "resp_456");
    }

    #[test]
    fn test_response_output_empty_convenience_falls_back() {
        let output = response_output(responses(json!({
            "output_text": "",
            "output": [{"content": [{"text": "fallback"}]}]
        })))
        .unwrap();
        assert_eq!(output.text, "fallback");
    }

    #[test]
    fn test_response_output_tolerates_null_output() {
        let output =
            response_output(responses(json!({"id": "r", "output_text": "hi", "output": null})))
                .unwrap();
        assert_eq!(output.text, "hi");
        assert_eq!(output.response_id, "r");

        assert!(matches!(
            response_output(responses(json!({"id": "r", "output": null}))),
            Err(OpenAiError::NoTextOutput)
        ));
    }

    #[test]
    fn test_response_output_whitespace_text_is_kept() {
        let output = response_output(responses(json!({"output_text": "   "}))).unwrap();
        assert_eq!(output.text, "");
    }

    #[test]
    fn test_response_output_missing_id_is_empty() {
        let output = response_output(responses(json!({"output_text": "hi"}))).unwrap();
        assert_eq!(output.response_id, "");
    }

    #[test]
    fn test_response_output_without_text() {
        for value in [
            json!({"id": "resp_1"}),
            json!({"id": "resp_1", "output": []}),
            json!({"id": "resp_1", "output": [{"type": "reasoning"}]}),
            json!({"id": "resp_1", "output": [{"content": []}]}),
            json!({"id": "resp_1", "output": [{"content": [{"type": "refusal"}]}]}),
        ] {
            assert!(matches!(
                response_output(responses(value)),
                Err(OpenAiError::NoTextOutput)
            ));
        }
    }

    #[test]
    fn test_api_error_message() {
        let body = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#;
        assert_eq!(api_error_message(body), "Incorrect API key provided");
        assert_eq!(api_error_message(" upstream down "), "upstream down");
    }
}
